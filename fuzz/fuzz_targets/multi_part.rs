#![no_main]

use libfuzzer_sys::fuzz_target;

// Feeds raw bytes to both entry points. Parsing must never panic and a
// successful multi-part result must only hold validated, non-empty parts.
fuzz_target!(|data: &[u8]| {
    if data.len() > 16 * 1024 { return; }

    let _ = launch_config::parse_configuration(data);

    if let Ok(multi) = launch_config::parse_multi_part_configuration(data) {
        let window = launch_config::VersionWindow::default();
        for part in &multi {
            assert!(!part.is_zero());
            assert!(window.check(&part.version).is_ok());
        }
    }
});
