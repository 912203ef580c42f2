pub mod dependency_injection;
pub mod failure_reporter;
