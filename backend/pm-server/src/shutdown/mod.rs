pub mod shutdown_coordinator;
pub mod shutdown_guard;
