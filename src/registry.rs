//! User-editable UUID name registry and label resolution.
//!
//! The registry binds canonical UUID text to a display label. It lives for
//! the whole process: lookups run on the decode path, potentially from
//! several worker threads, while edits arrive from the configuration path.
//! Readers share the read lock; every mutation replaces whole entries (or,
//! for [`RegistryBatch`], the whole map), so a concurrent reader sees
//! either the old binding or the new one, never a torn state.

use std::collections::HashMap;
use std::sync::RwLock;

use compact_str::{format_compact, CompactString};
use tracing::debug;

use crate::error::ValidationError;
use crate::uuid::CanonicalUuid;

/// A single user-defined UUID binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Display label returned in place of "Unknown".
    pub label: CompactString,
    /// Marks the attribute as long; carried for consumers that decide
    /// between plain and long reads, opaque to this crate.
    pub long_attr: bool,
}

fn normalize_key(uuid_text: &str) -> Result<CompactString, ValidationError> {
    let trimmed = uuid_text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyIdentifier);
    }
    let uuid: CanonicalUuid = trimmed.parse()?;
    Ok(format_compact!("{uuid}"))
}

fn validate_label(label: &str) -> Result<CompactString, ValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyLabel);
    }
    Ok(CompactString::new(trimmed))
}

/// Process-wide registry of custom UUID labels.
///
/// Keys are stored in the normalized textual form produced by
/// [`CanonicalUuid`]'s `Display` impl, so `"0000180f-0000-1000-8000-00805f9b34fb"`
/// and `"180F"` address the same entry.
///
/// # Example
///
/// ```
/// use btuuid::{CanonicalUuid, UuidRegistry};
///
/// let registry = UuidRegistry::new();
/// registry.upsert("7905f431-b5ce-4e99-a40f-4b1e122d00d0", "Notification Center", false)?;
///
/// let uuid: CanonicalUuid = "7905F431-B5CE-4E99-A40F-4B1E122D00D0".parse()?;
/// let entry = registry.lookup_uuid(&uuid).unwrap();
/// assert_eq!(entry.label, "Notification Center");
/// # Ok::<(), btuuid::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct UuidRegistry {
    entries: RwLock<HashMap<CompactString, RegistryEntry>>,
}

impl UuidRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Validate a row and insert or replace its binding.
    ///
    /// `uuid_text` may be any accepted textual form; the entry is stored
    /// under the normalized key. Repeating an upsert with identical
    /// arguments leaves the registry unchanged. On error the registry is
    /// untouched.
    pub fn upsert(
        &self,
        uuid_text: &str,
        label: &str,
        long_attr: bool,
    ) -> Result<(), ValidationError> {
        let key = normalize_key(uuid_text)?;
        let label = validate_label(label)?;
        let mut entries = self.entries.write().unwrap();
        entries.insert(key, RegistryEntry { label, long_attr });
        Ok(())
    }

    /// Remove `key` only if its stored label still equals `expected_label`.
    ///
    /// Edit sessions apply a batch as copy/validate/commit followed by
    /// frees of the replaced rows; a freed row must not clobber a newer
    /// binding that reused its key. Returns true if an entry was removed.
    pub fn remove_if_current(&self, key: &str, expected_label: &str) -> bool {
        let mut entries = self.entries.write().unwrap();
        match entries.get(key) {
            Some(entry) if entry.label == expected_label => {
                entries.remove(key);
                true
            }
            Some(_) => {
                debug!(key, "keeping registry entry: label was replaced");
                false
            }
            None => false,
        }
    }

    /// Look up a binding by its normalized textual key.
    pub fn lookup(&self, key: &str) -> Option<RegistryEntry> {
        self.entries.read().unwrap().get(key).cloned()
    }

    /// Look up the binding for a decoded UUID.
    pub fn lookup_uuid(&self, uuid: &CanonicalUuid) -> Option<RegistryEntry> {
        self.lookup(&format_compact!("{uuid}"))
    }

    /// Resolve a display label for a UUID.
    ///
    /// Well-known short UUIDs resolve through the supplied built-in table
    /// first (the table is authoritative and never shadowed by the
    /// registry); on a miss the custom registry is consulted; UUIDs known
    /// to neither resolve to `"Unknown"`. Resolution never mutates state.
    pub fn resolve_label<F>(&self, uuid: &CanonicalUuid, builtin: F) -> CompactString
    where
        F: Fn(u16) -> Option<&'static str>,
    {
        if let Some(short) = uuid.short_value() {
            if let Some(name) = builtin(short) {
                return CompactString::const_new(name);
            }
        }
        match self.lookup_uuid(uuid) {
            Some(entry) => entry.label,
            None => CompactString::const_new("Unknown"),
        }
    }

    /// Atomically replace the registry contents with a staged batch.
    ///
    /// Decode-path readers see either the previous table or the new one in
    /// full.
    pub fn commit(&self, batch: RegistryBatch) {
        let mut entries = self.entries.write().unwrap();
        debug!(
            old = entries.len(),
            new = batch.entries.len(),
            "committing registry batch"
        );
        *entries = batch.entries;
    }

    /// Drop all custom bindings.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Number of custom bindings.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check if the registry holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

/// Staged replacement for the registry contents.
///
/// Mirrors how a configuration editor applies a table of rows: each row is
/// validated as it is staged, and the finished batch replaces the live map
/// in one step via [`UuidRegistry::commit`]. A row that fails validation
/// leaves the batch unchanged, so the caller can surface the error against
/// that row and keep going.
#[derive(Debug, Default)]
pub struct RegistryBatch {
    entries: HashMap<CompactString, RegistryEntry>,
}

impl RegistryBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a row and stage it. Later rows override earlier ones with
    /// the same normalized key, matching upsert semantics.
    pub fn stage(
        &mut self,
        uuid_text: &str,
        label: &str,
        long_attr: bool,
    ) -> Result<(), ValidationError> {
        let key = normalize_key(uuid_text)?;
        let label = validate_label(label)?;
        self.entries.insert(key, RegistryEntry { label, long_attr });
        Ok(())
    }

    /// Number of staged rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no rows are staged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
