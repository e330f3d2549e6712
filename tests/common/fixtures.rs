//! Test fixtures - reusable manifest content and names.

/// Manifest entries present in every fixture output directory
pub const FIXTURE_MANIFEST: &[(&str, &str)] = &[
    (".manifest.json", ".manifest.json"),
    ("one.txt", "one-f2e1ec14.txt"),
    ("one.txt.map", "one-f2e1ec15.txt.map"),
    (
        "file-already-abcdefVWXYZ0123456789_-.digested.css",
        "file-already-abcdefVWXYZ0123456789_-.digested.css",
    ),
];

/// Manifest file contents matching `FIXTURE_MANIFEST`
pub fn fixture_manifest_json() -> String {
    let map: serde_json::Map<String, serde_json::Value> = FIXTURE_MANIFEST
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    serde_json::to_string_pretty(&serde_json::Value::Object(map)).unwrap()
}
