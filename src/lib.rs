//! btuuid - Bluetooth UUID canonicalization and custom-name registry.
//!
//! This library reduces the three wire spellings of a Bluetooth UUID
//! (2, 4, or 16 bytes, little-endian) to one canonical minimal form,
//! converts between that form and the standard textual representation,
//! and resolves UUIDs to display labels through the built-in
//! assigned-numbers table with a user-editable registry as fallback.
//!
//! # Example
//!
//! ```
//! use btuuid::{assigned, CanonicalUuid, UuidRegistry};
//!
//! # fn main() -> btuuid::Result<()> {
//! let registry = UuidRegistry::new();
//! registry.upsert(
//!     "7905f431-b5ce-4e99-a40f-4b1e122d00d0",
//!     "Apple Notification Center Service",
//!     false,
//! )?;
//!
//! // GATT "Primary Service" declaration, as seen on the wire.
//! let uuid = CanonicalUuid::from_wire(&[0x00, 0x28])?;
//! assert_eq!(registry.resolve_label(&uuid, assigned::lookup), "Primary Service");
//!
//! // A vendor UUID resolves through the registry.
//! let uuid: CanonicalUuid = "7905f431-b5ce-4e99-a40f-4b1e122d00d0".parse()?;
//! assert_eq!(
//!     registry.resolve_label(&uuid, assigned::lookup),
//!     "Apple Notification Center Service",
//! );
//! # Ok(())
//! # }
//! ```

pub mod assigned;
pub mod error;
pub mod registry;
pub mod uuid;

pub use error::{CodecError, Error, Result, ValidationError};
pub use registry::{RegistryBatch, RegistryEntry, UuidRegistry};
pub use uuid::{CanonicalUuid, UuidWidth, BASE_UUID_TAIL};
