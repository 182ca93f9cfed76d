#![no_main]

use libfuzzer_sys::fuzz_target;
use tree_inventory_tools::models::SpeciesKey;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        if let Some(key) = SpeciesKey::parse(name) {
            assert!(!key.genus.is_empty());
            assert!(!key.genus.contains(char::is_whitespace));
        }
    }
});
