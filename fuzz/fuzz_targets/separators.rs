#![no_main]

use libfuzzer_sys::fuzz_target;

// Wraps the fuzzer input between document separators so that the stream
// reader and the empty-document skipping see unusual layouts.
fuzz_target!(|data: &[u8]| {
    if data.len() > 16 * 1024 { return; }
    let s = String::from_utf8_lossy(data);

    let layouts = [
        format!("---\n{s}\n---\nversion: 0.1.0\nextraSANs: [a]\n"),
        format!("version: 0.1.0\nextraKubeletArgs:\n  {s}: null\n---\n"),
        format!("--- {s}\nversion: 0.1.0\n"),
        format!("version: 0.1.0\naddons:\n  - name: {s}\n    args: [{s}]\n...\n---\n# {s}\n"),
    ];

    for yaml in &layouts {
        let _ = launch_config::parse_multi_part_configuration(yaml.as_bytes());
    }
});
