#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Malformed manifests must be rejected, not panic
        let _ = assetprune::JsonManifestRepository::new().parse(content, ".manifest.json");
    }
});
