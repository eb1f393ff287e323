#![no_main]

use filegen::domain::value_objects::check_path;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        // Never panics, and an accepted path has no empty segment
        if check_path(path).is_ok() {
            assert!(!path.is_empty());
            assert!(!path.contains("//"));
        }
    }
});
