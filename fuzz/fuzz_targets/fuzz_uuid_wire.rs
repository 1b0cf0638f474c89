//! Fuzz target for the binary wire decoder.
//!
//! Checks that decoding never panics on any slice, that accepted widths
//! produce fully reduced values, and that re-encoding round-trips.

#![no_main]

use btuuid::{CanonicalUuid, UuidWidth, BASE_UUID_TAIL};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(uuid) = CanonicalUuid::from_wire(data) else {
        return;
    };

    // Reduced values never carry the base template tail at full width.
    if uuid.width() == UuidWidth::Uuid128 {
        assert!(uuid.as_bytes()[4..] != BASE_UUID_TAIL);
    }
    if uuid.width() == UuidWidth::Uuid32 {
        assert!(uuid.as_bytes()[0] != 0 || uuid.as_bytes()[1] != 0);
    }

    let wire = uuid.to_wire();
    assert_eq!(CanonicalUuid::from_wire(&wire).unwrap(), uuid);

    // Expansion is the inverse of the reduction.
    let mut full = uuid.expand();
    full.reverse();
    assert_eq!(CanonicalUuid::from_wire(&full).unwrap(), uuid);
});
