#![no_main]

use libfuzzer_sys::fuzz_target;
use tree_inventory_tools::io::read_translations_from_bytes;

fuzz_target!(|data: &[u8]| {
    let _ = read_translations_from_bytes(data);
});
