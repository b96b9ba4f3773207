//! # Slotbook
//!
//! Application facade for the Slotbook scheduling app. This crate wires
//! the durable store and the repositories together behind a single `App`
//! type that the presentation layer drives:
//!
//! - **Config**: environment-based configuration (data directory, log
//!   level)
//! - **App**: the single source of truth for all reads and writes, with
//!   change notifications the UI subscribes to instead of re-deriving
//!   state per screen
//!
//! Domain types live in `slotbook-core`; persistence in `slotbook-store`.

pub mod app;
pub mod config;

pub use app::{App, ChangeEvent, StartScreen};
pub use config::AppConfig;

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global tracing subscriber at the given level.
///
/// Call once at startup, before opening the app.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
