// Adapters layer: concrete implementations facing the outside world (console, external HR system).

pub mod hr_system;
pub mod sink;
