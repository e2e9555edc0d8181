use crate::domain::ports::{EmployeeProcessor, OutputSink};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteEmployeeProcessor1;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteEmployeeProcessor2;

impl EmployeeProcessor for ConcreteEmployeeProcessor1 {
    fn name(&self) -> &'static str {
        "ConcreteEmployeeProcessor1"
    }

    fn command(&self) -> &'static str {
        "command1"
    }

    fn process(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.write_line("Processing command 1 in ConcreteEmployeeProcessor1.")
    }
}

impl EmployeeProcessor for ConcreteEmployeeProcessor2 {
    fn name(&self) -> &'static str {
        "ConcreteEmployeeProcessor2"
    }

    fn command(&self) -> &'static str {
        "command2"
    }

    fn process(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.write_line("Processing command 2 in ConcreteEmployeeProcessor2.")
    }
}

/// Ordered chain of processors; a processor's successor is the next entry.
#[derive(Default)]
pub struct ProcessorChain {
    processors: Vec<Box<dyn EmployeeProcessor>>,
}

impl ProcessorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// `ConcreteEmployeeProcessor1 -> ConcreteEmployeeProcessor2`.
    pub fn standard() -> Self {
        let mut chain = Self::new();
        chain.set_next(Box::new(ConcreteEmployeeProcessor1));
        chain.set_next(Box::new(ConcreteEmployeeProcessor2));
        chain
    }

    /// Links `processor` after the current tail.
    pub fn set_next(&mut self, processor: Box<dyn EmployeeProcessor>) -> &mut Self {
        self.processors.push(processor);
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Returns the name of the processor that handled `command`.
    /// Commands nobody recognizes are dropped without output.
    pub fn process_command(
        &self,
        command: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<Option<&'static str>> {
        for processor in &self.processors {
            if processor.matches(command) {
                tracing::debug!("{} handling '{}'", processor.name(), command);
                processor.process(sink)?;
                return Ok(Some(processor.name()));
            }
        }

        tracing::debug!("No processor recognized '{}'", command);
        Ok(None)
    }
}
