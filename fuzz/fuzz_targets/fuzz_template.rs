#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use rpi_kit::domain::services::extract_template;
use rpi_kit::domain::services::template::resolve_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Template extraction should never panic
        if let Ok(template) = extract_template(content, Path::new("fuzz.md")) {
            if let Ok(path) = resolve_target(Path::new("/repo"), &template.target, Path::new("fuzz.md")) {
                assert!(path.starts_with("/repo"));
            }
        }
    }
});
