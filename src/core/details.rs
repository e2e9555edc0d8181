use crate::domain::model::DetailLevel;
use crate::domain::ports::{Employee, OutputSink};
use crate::utils::error::Result;

/// Presentation side of the bridge: a header level over any [`Employee`].
pub struct EmployeeDetails<'a> {
    level: DetailLevel,
    employee: &'a dyn Employee,
}

impl<'a> EmployeeDetails<'a> {
    pub fn new(level: DetailLevel, employee: &'a dyn Employee) -> Self {
        Self { level, employee }
    }

    pub fn basic(employee: &'a dyn Employee) -> Self {
        Self::new(DetailLevel::Basic, employee)
    }

    pub fn advanced(employee: &'a dyn Employee) -> Self {
        Self::new(DetailLevel::Advanced, employee)
    }

    pub fn display(&self, sink: &mut dyn OutputSink) -> Result<()> {
        tracing::debug!(
            "Presenting {} details for {} employee",
            self.level,
            self.employee.kind()
        );
        sink.write_line(self.level.header())?;
        self.employee.display_details(sink)
    }
}
