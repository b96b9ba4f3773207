pub mod appointment;
pub mod collaborator;
pub mod establishment;
