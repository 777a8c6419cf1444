#![no_main]

use libfuzzer_sys::fuzz_target;
use rpi_kit::domain::entities::RequiredSettings;
use rpi_kit::domain::services::merge;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Merging never panics and a second merge is a no-op
        let settings = RequiredSettings::vscode_defaults();
        let once = merge(content, &settings);
        let twice = merge(&once.text, &settings);
        assert!(twice.is_unchanged());
    }
});
