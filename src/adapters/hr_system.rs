use crate::domain::ports::{Employee, ExternalHrSystem, OutputSink};
use crate::utils::error::Result;

pub const RETRIEVAL_PREAMBLE: &str = "Retrieving employee data from the external HR system.";

/// Exposes an [`Employee`] through the external HR system's interface.
pub struct ExternalHrSystemAdapter<'a> {
    employee: &'a dyn Employee,
}

impl<'a> ExternalHrSystemAdapter<'a> {
    pub fn new(employee: &'a dyn Employee) -> Self {
        Self { employee }
    }
}

impl ExternalHrSystem for ExternalHrSystemAdapter<'_> {
    fn retrieve_employee_data(&self, sink: &mut dyn OutputSink) -> Result<()> {
        tracing::debug!("HR adapter forwarding to {} employee", self.employee.kind());
        sink.write_line(RETRIEVAL_PREAMBLE)?;
        self.employee.display_details(sink)
    }
}
