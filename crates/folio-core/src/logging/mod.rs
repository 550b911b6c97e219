//! Tracing plumbing shared by the browser binary and the CLI.
//!
//! ## Usage
//!
//! ```ignore
//! use folio_core::logging::{ConsoleLayer, LogSink};
//! use tracing_subscriber::prelude::*;
//!
//! let subscriber = tracing_subscriber::registry()
//!     .with(tracing_subscriber::EnvFilter::new("info"))
//!     .with(ConsoleLayer::new(MySink));
//!
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```

pub mod entry;
pub mod layer;

pub use entry::LogEntry;
pub use layer::{ConsoleLayer, LogSink};
