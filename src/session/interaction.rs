//! User prompts needed by a package session.

use crate::crypto::SecureString;

/// Asks the user for the inputs a save or load needs.
///
/// Returning `None` means the user cancelled; the session then stops without
/// touching its state.
pub trait InteractionProvider {
    /// Asks for a file name, offering `suggested` as the default.
    fn request_file_name(&mut self, suggested: &str) -> Option<String>;

    /// Asks for the package passphrase.
    fn request_passphrase(&mut self) -> Option<SecureString>;
}
