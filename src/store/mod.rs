//! Encrypted persistence of compensation profiles.
//!
//! [`ProfileStore::save`] seals a profile into an [`EncryptedEnvelope`];
//! [`ProfileStore::load`] reverses it, and also accepts legacy plain
//! [`PackageRecord`] documents.

mod envelope;
mod profile_store;
mod record;

pub use envelope::{
    DecodedPackage, ENVELOPE_MARKER, ENVELOPE_VERSION, EncryptedEnvelope, EnvelopeDocument,
    EnvelopeHeader, PackagePayload,
};
pub use profile_store::ProfileStore;
pub use record::PackageRecord;
