//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod fingerprint;

pub use fingerprint::{
    classify, ClassifiedName, Fingerprint, DIGESTED_MARKER, MAX_DIGEST_LEN, MIN_DIGEST_LEN,
};
