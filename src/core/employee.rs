use crate::domain::model::EmployeeKind;
use crate::domain::ports::{Employee, OutputSink};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct FullTimeEmployee;

#[derive(Debug, Clone, Copy, Default)]
pub struct PartTimeEmployee;

impl Employee for FullTimeEmployee {
    fn kind(&self) -> EmployeeKind {
        EmployeeKind::FullTime
    }

    fn display_details(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.write_line("Displaying full-time employee details.")
    }
}

impl Employee for PartTimeEmployee {
    fn kind(&self) -> EmployeeKind {
        EmployeeKind::PartTime
    }

    fn display_details(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.write_line("Displaying part-time employee details.")
    }
}
