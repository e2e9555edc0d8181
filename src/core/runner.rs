use crate::adapters::hr_system::ExternalHrSystemAdapter;
use crate::config::ScriptConfig;
use crate::core::chain::ProcessorChain;
use crate::core::details::EmployeeDetails;
use crate::core::factory::factory_for;
use crate::domain::model::EmployeeKind;
use crate::domain::ports::{Employee, ExternalHrSystem, OutputSink};
use crate::utils::error::Result;

/// One employee of each kind, created through the factories.
struct Roster {
    full_time: Box<dyn Employee>,
    part_time: Box<dyn Employee>,
}

impl Roster {
    fn hire() -> Self {
        Self {
            full_time: factory_for(EmployeeKind::FullTime).create_employee(),
            part_time: factory_for(EmployeeKind::PartTime).create_employee(),
        }
    }

    fn get(&self, kind: EmployeeKind) -> &dyn Employee {
        match kind {
            EmployeeKind::FullTime => self.full_time.as_ref(),
            EmployeeKind::PartTime => self.part_time.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub commands_handled: usize,
    pub commands_dropped: usize,
}

pub struct ScriptRunner {
    config: ScriptConfig,
    chain: ProcessorChain,
}

impl ScriptRunner {
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            config,
            chain: ProcessorChain::standard(),
        }
    }

    pub fn with_chain(config: ScriptConfig, chain: ProcessorChain) -> Self {
        Self { config, chain }
    }

    pub fn run(&self, sink: &mut dyn OutputSink) -> Result<RunSummary> {
        tracing::info!("Running script '{}'", self.config.script.name);
        let roster = Roster::hire();

        // Adapter
        let hr_system = ExternalHrSystemAdapter::new(roster.get(self.config.adapter.employee));
        hr_system.retrieve_employee_data(sink)?;

        // Bridge
        for presenter in &self.config.presenters {
            EmployeeDetails::new(presenter.level, roster.get(presenter.employee)).display(sink)?;
        }

        // Chain of responsibility
        let mut summary = RunSummary::default();
        for command in &self.config.chain.commands {
            match self.chain.process_command(command, sink)? {
                Some(_) => summary.commands_handled += 1,
                None => summary.commands_dropped += 1,
            }
        }

        tracing::debug!(
            "Script finished: {} commands handled, {} dropped",
            summary.commands_handled,
            summary.commands_dropped
        );
        Ok(summary)
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new(ScriptConfig::default())
    }
}
