//! GF(2^8) Reed-Solomon forward error correction.
//!
//! ```
//! use rsfec::{Codec, DecodeOutcome};
//!
//! let codec = Codec::new(4)?;
//! let mut codeword = codec.encode(b"Hello")?;
//! codeword[2] ^= 0x5A;
//!
//! let decoded = codec.decode(&codeword)?;
//! assert_eq!(decoded.message, b"Hello");
//! assert_eq!(decoded.outcome, DecodeOutcome::Corrected { errors: 1 });
//! # Ok::<(), rsfec::RsError>(())
//! ```

pub mod reed_solomon;

pub use reed_solomon::{
    Codec, CodecConfig, DecodeOutcome, Decoded, Gf256, RsError, RsResult, UncorrectableKind,
};
