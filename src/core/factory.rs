use crate::core::employee::{FullTimeEmployee, PartTimeEmployee};
use crate::domain::model::EmployeeKind;
use crate::domain::ports::{Employee, EmployeeFactory};

#[derive(Debug, Clone, Copy, Default)]
pub struct FullTimeEmployeeFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct PartTimeEmployeeFactory;

impl EmployeeFactory for FullTimeEmployeeFactory {
    fn create_employee(&self) -> Box<dyn Employee> {
        Box::new(FullTimeEmployee)
    }
}

impl EmployeeFactory for PartTimeEmployeeFactory {
    fn create_employee(&self) -> Box<dyn Employee> {
        Box::new(PartTimeEmployee)
    }
}

/// Picks the concrete factory for a configured employee kind.
pub fn factory_for(kind: EmployeeKind) -> Box<dyn EmployeeFactory> {
    match kind {
        EmployeeKind::FullTime => Box::new(FullTimeEmployeeFactory),
        EmployeeKind::PartTime => Box::new(PartTimeEmployeeFactory),
    }
}
