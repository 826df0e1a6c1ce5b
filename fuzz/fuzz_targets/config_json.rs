#![no_main]

use ccload::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let parsed: Option<ConfigFile> = serde_json::from_slice(data).ok();
    let applied = ccload::fuzzing::apply_config_from_json(data);
    if applied.is_ok() {
        if let Some(config) = parsed {
            if let Some(duration) = config.duration {
                debug_assert!(duration >= 1);
            }
            if let Some(url) = config.url.as_deref() {
                debug_assert!(ccload::fuzzing::validate_target_url_input(url).is_ok());
            }
        }
    }
});
