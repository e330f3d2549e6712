#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Classification is total: never panics, never loses the filename
        let classified = assetprune::classify(name);
        assert_eq!(classified.filename(), name);
        assert!(classified.logical_path().len() <= name.len());
    }
});
