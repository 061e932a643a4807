#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(file_name) = std::str::from_utf8(data) {
        // Name derivation should never panic and must stay idempotent
        let name = glyphpack::naming::component_name(file_name);
        assert_eq!(glyphpack::naming::component_name(&name), name);
    }
});
