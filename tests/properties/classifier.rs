//! Property tests for filename classification.

use proptest::prelude::*;

use assetprune::{classify, Fingerprint};

fn stem() -> impl Strategy<Value = String> {
    // No dashes, so the generated digest is the only candidate.
    proptest::string::string_regex("[A-Za-z0-9_]{1,16}").unwrap()
}

fn extension() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,5}(\\.[a-z]{1,4})?").unwrap()
}

fn hex_digest() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{7,128}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Classification is total; any name yields a result.
    #[test]
    fn property_classify_never_panics(name in "\\PC{0,64}") {
        let classified = classify(&name);
        prop_assert_eq!(classified.filename(), name.as_str());
    }

    /// PROPERTY: `stem-<hex>.ext` classifies back to `stem.ext`.
    #[test]
    fn property_standard_name_recovers_logical_path(
        stem in stem(),
        digest in hex_digest(),
        ext in extension(),
    ) {
        let name = format!("{stem}-{digest}.{ext}");
        let classified = classify(&name);

        let expected = format!("{stem}.{ext}");
        prop_assert_eq!(classified.logical_path(), expected.as_str());
        prop_assert_eq!(classified.digest(), digest.as_str());
        prop_assert_eq!(classified.family_key(), classified.logical_path());
        prop_assert_eq!(
            classified.fingerprint(),
            &Fingerprint::Standard { digest: digest.clone() }
        );
    }

    /// PROPERTY: Pre-digested names are their own logical path.
    #[test]
    fn property_predigested_name_is_its_own_logical_path(
        stem in stem(),
        token in "[A-Za-z0-9_]{7,40}",
        ext in extension(),
    ) {
        let name = format!("{stem}-{token}.digested.{ext}");
        let classified = classify(&name);

        prop_assert!(classified.fingerprint().is_predigested());
        prop_assert_eq!(classified.logical_path(), name.as_str());
        prop_assert_eq!(classified.digest(), token.as_str());

        let family = format!("{stem}.digested.{ext}");
        prop_assert_eq!(classified.family_key(), family.as_str());
    }

    /// PROPERTY: Names without a dash are never fingerprinted.
    #[test]
    fn property_dashless_name_is_unfingerprinted(name in "[A-Za-z0-9_.]{0,40}") {
        prop_assume!(!name.contains(".digested."));
        let classified = classify(&name);

        prop_assert_eq!(classified.fingerprint(), &Fingerprint::Unfingerprinted);
        prop_assert_eq!(classified.logical_path(), name.as_str());
        prop_assert_eq!(classified.digest(), "");
    }

    /// PROPERTY: Versions of one asset share a family key.
    #[test]
    fn property_versions_share_family(
        stem in stem(),
        a in hex_digest(),
        b in hex_digest(),
        ext in extension(),
    ) {
        let first = classify(&format!("{stem}-{a}.{ext}"));
        let second = classify(&format!("{stem}-{b}.{ext}"));
        prop_assert_eq!(first.family_key(), second.family_key());
    }
}
