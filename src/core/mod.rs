pub mod chain;
pub mod details;
pub mod employee;
pub mod factory;
pub mod runner;

pub use crate::domain::model::{DetailLevel, EmployeeKind, Transcript};
pub use crate::domain::ports::{
    Employee, EmployeeFactory, EmployeeProcessor, ExternalHrSystem, OutputSink,
};
pub use crate::utils::error::Result;
