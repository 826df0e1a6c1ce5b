#![no_main]

use ccload::config::types::ConfigFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parsed: Option<ConfigFile> = toml::from_str(input).ok();
        let applied = ccload::fuzzing::apply_config_from_toml(input);
        if applied.is_ok() {
            if let Some(config) = parsed {
                if let Some(workers) = config.workers {
                    debug_assert!(workers >= 1);
                }
                if let Some(agents) = config.user_agents.as_ref() {
                    debug_assert!(!agents.is_empty());
                    debug_assert!(agents.iter().all(|agent| !agent.trim().is_empty()));
                }
            }
        }
    }
});
