//! # Slotbook Core
//!
//! Domain types and pure logic for the Slotbook scheduling app:
//!
//! - **Models**: appointments, collaborators (staff), and the
//!   establishment profile, plus the draft types used to create them
//! - **Errors**: the typed error taxonomy shared by every layer
//! - **Query**: the pure appointment filter engine used by list views
//!
//! This crate performs no I/O; persistence lives in `slotbook-store`.

pub mod errors;
pub mod models;
pub mod query;
