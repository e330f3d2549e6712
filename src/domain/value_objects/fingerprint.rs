//! Fingerprint Value Object
//!
//! Classifies an output filename into its logical name, content digest and
//! version-family key. Two fingerprint syntaxes are recognized:
//!
//! - standard: `<stem>-<hex>.<ext...>` (`one-f2e1ec14.txt.map`)
//! - pre-digested: `<stem>-<token>.digested.<ext...>` where an external tool
//!   already fingerprinted the asset (`Vue3Lottie-23af1d5aa7baee8b1ca8.digested.js`)
//!
//! Anything else is unfingerprinted and forms a family of its own.
//! Classification is pure and never fails.

use std::fmt;

/// Shortest digest token accepted by either pattern
pub const MIN_DIGEST_LEN: usize = 7;

/// Longest digest token accepted by either pattern (SHA-512 in hex)
pub const MAX_DIGEST_LEN: usize = 128;

/// Marker segment carried by pre-digested assets
pub const DIGESTED_MARKER: &str = ".digested.";

/// Which fingerprint syntax a filename carries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fingerprint {
    /// `<stem>-<hex>.<ext...>`
    Standard { digest: String },
    /// `<stem>-<token>.digested.<ext...>`
    PreDigested { digest: String },
    /// No recognizable digest (e.g. the manifest itself)
    Unfingerprinted,
}

impl Fingerprint {
    /// The digest token, empty for unfingerprinted names
    pub fn digest(&self) -> &str {
        match self {
            Fingerprint::Standard { digest } | Fingerprint::PreDigested { digest } => digest,
            Fingerprint::Unfingerprinted => "",
        }
    }

    pub fn is_predigested(&self) -> bool {
        matches!(self, Fingerprint::PreDigested { .. })
    }

    /// Short label used in listings
    pub fn kind(&self) -> &'static str {
        match self {
            Fingerprint::Standard { .. } => "standard",
            Fingerprint::PreDigested { .. } => "predigested",
            Fingerprint::Unfingerprinted => "none",
        }
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// A filename broken into its logical identity and digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedName {
    filename: String,
    logical_path: String,
    family_key: String,
    fingerprint: Fingerprint,
}

impl ClassifiedName {
    /// Classify an output filename. See the module docs for the grammar.
    pub fn classify(filename: &str) -> Self {
        if let Some((start, end)) = find_predigested_token(filename) {
            return Self {
                filename: filename.to_string(),
                logical_path: filename.to_string(),
                family_key: strip_span(filename, start, end),
                fingerprint: Fingerprint::PreDigested {
                    digest: filename[start + 1..end].to_string(),
                },
            };
        }

        if let Some((start, end)) = find_standard_digest(filename) {
            let logical = strip_span(filename, start, end);
            return Self {
                filename: filename.to_string(),
                logical_path: logical.clone(),
                family_key: logical,
                fingerprint: Fingerprint::Standard {
                    digest: filename[start + 1..end].to_string(),
                },
            };
        }

        Self {
            filename: filename.to_string(),
            logical_path: filename.to_string(),
            family_key: filename.to_string(),
            fingerprint: Fingerprint::Unfingerprinted,
        }
    }

    /// The on-disk filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Logical (pre-fingerprint) name
    pub fn logical_path(&self) -> &str {
        &self.logical_path
    }

    /// Digest token, empty when unfingerprinted
    pub fn digest(&self) -> &str {
        self.fingerprint.digest()
    }

    /// Key shared by every historical version of the same asset
    pub fn family_key(&self) -> &str {
        &self.family_key
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn into_fingerprint(self) -> Fingerprint {
        self.fingerprint
    }
}

/// Shorthand for [`ClassifiedName::classify`]
pub fn classify(filename: &str) -> ClassifiedName {
    ClassifiedName::classify(filename)
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

fn is_lower_hex(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f')
}

fn digest_len_ok(len: usize) -> bool {
    (MIN_DIGEST_LEN..=MAX_DIGEST_LEN).contains(&len)
}

/// Every segment of a `.`-separated extension chain must be non-empty.
fn is_extension_chain(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(|segment| !segment.is_empty())
}

/// Remove `name[start..end]` (the `-<digest>` span) from the name.
fn strip_span(name: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(name.len() - (end - start));
    out.push_str(&name[..start]);
    out.push_str(&name[end..]);
    out
}

/// Locate `-<token>` directly before a `.digested.` marker.
///
/// Returns the byte span `(dash, marker_start)`. The leftmost qualifying dash
/// wins, so tokens may themselves contain `-`.
fn find_predigested_token(name: &str) -> Option<(usize, usize)> {
    let bytes = name.as_bytes();
    let mut search_from = 0;

    while let Some(offset) = name[search_from..].find(DIGESTED_MARKER) {
        let marker = search_from + offset;
        search_from = marker + 1;

        if !is_extension_chain(&name[marker + DIGESTED_MARKER.len()..]) {
            continue;
        }

        // Start of the maximal run of token bytes ending at the marker
        let mut run_start = marker;
        while run_start > 0 && is_token_byte(bytes[run_start - 1]) {
            run_start -= 1;
        }

        // Dash at index 0 would leave an empty stem
        let candidate = (run_start.max(1)..marker)
            .find(|&i| bytes[i] == b'-' && digest_len_ok(marker - i - 1));
        if let Some(dash) = candidate {
            return Some((dash, marker));
        }
    }

    None
}

/// Locate a `-<hex>.` span followed by an extension chain.
///
/// Returns the byte span `(dash, dot)` of the leftmost match.
fn find_standard_digest(name: &str) -> Option<(usize, usize)> {
    let bytes = name.as_bytes();

    for dash in 1..bytes.len() {
        if bytes[dash] != b'-' {
            continue;
        }
        let hex_start = dash + 1;
        let hex_len = bytes[hex_start..]
            .iter()
            .take_while(|&&b| is_lower_hex(b))
            .count();
        let dot = hex_start + hex_len;

        if digest_len_ok(hex_len)
            && bytes.get(dot) == Some(&b'.')
            && is_extension_chain(&name[dot + 1..])
        {
            return Some((dash, dot));
        }
    }

    None
}
