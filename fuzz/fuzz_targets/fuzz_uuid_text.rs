//! Fuzz target for the textual UUID parser.
//!
//! Feeds arbitrary strings through `FromStr` and checks that every
//! accepted input re-parses from its normalized form to the same
//! canonical value.

#![no_main]

use btuuid::CanonicalUuid;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(uuid) = text.parse::<CanonicalUuid>() {
        let normalized = uuid.to_string();
        let reparsed: CanonicalUuid = normalized.parse().expect("normalized form must parse");
        assert_eq!(reparsed, uuid);
        assert_eq!(reparsed.to_string(), normalized);
    }
});
