//! The caller-facing save/load workflow.
//!
//! A [`PackageSession`] owns the profile being edited. User prompts come in
//! through an [`InteractionProvider`] and bytes move through a
//! [`PackageTransport`]; the session itself does no I/O.

mod interaction;
mod package_session;
mod transport;

pub use interaction::InteractionProvider;
pub use package_session::{DEFAULT_FILE_NAME, PackageSession};
pub use transport::{DirectoryTransport, PACKAGE_EXTENSION, PackageTransport};
