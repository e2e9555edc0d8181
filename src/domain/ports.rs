use crate::domain::model::EmployeeKind;
use crate::utils::error::Result;

/// Line-oriented destination every component writes to.
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait Employee {
    fn kind(&self) -> EmployeeKind;
    fn display_details(&self, sink: &mut dyn OutputSink) -> Result<()>;
}

pub trait EmployeeFactory {
    fn create_employee(&self) -> Box<dyn Employee>;
}

pub trait ExternalHrSystem {
    fn retrieve_employee_data(&self, sink: &mut dyn OutputSink) -> Result<()>;
}

pub trait EmployeeProcessor {
    fn name(&self) -> &'static str;
    fn command(&self) -> &'static str;
    fn process(&self, sink: &mut dyn OutputSink) -> Result<()>;

    fn matches(&self, command: &str) -> bool {
        crate::utils::text::equals_ignore_case(command, self.command())
    }
}
