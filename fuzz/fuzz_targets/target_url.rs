#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if ccload::fuzzing::validate_target_url_input(input).is_ok() {
            let lowered = input.trim().to_ascii_lowercase();
            debug_assert!(lowered.starts_with("http:") || lowered.starts_with("https:"));
        }
    }
});
