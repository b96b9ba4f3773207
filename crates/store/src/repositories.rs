pub mod appointment;
pub mod collaborator;
pub mod establishment;

pub use appointment::AppointmentRepository;
pub use collaborator::CollaboratorRegistry;
pub use establishment::EstablishmentService;
