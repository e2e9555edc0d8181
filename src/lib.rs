pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::{hr_system::ExternalHrSystemAdapter, sink::ConsoleSink};
pub use config::ScriptConfig;
pub use crate::core::{
    chain::{ConcreteEmployeeProcessor1, ConcreteEmployeeProcessor2, ProcessorChain},
    details::EmployeeDetails,
    employee::{FullTimeEmployee, PartTimeEmployee},
    factory::{factory_for, FullTimeEmployeeFactory, PartTimeEmployeeFactory},
    runner::{RunSummary, ScriptRunner},
};
pub use domain::model::{DetailLevel, EmployeeKind, Transcript};
pub use domain::ports::{Employee, EmployeeFactory, EmployeeProcessor, ExternalHrSystem, OutputSink};
pub use utils::error::{AppError, Result};
