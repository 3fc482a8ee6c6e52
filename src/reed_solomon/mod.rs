//! Reed-Solomon Error Correction Module
//!
//! Systematic Reed-Solomon coding over GF(2^8) with the 0x11D field polynomial. A codeword is
//! the message followed by `nsym` parity bytes and can repair up to ⌊nsym/2⌋ corrupted bytes
//! at unknown positions. Message plus parity is limited to 255 bytes.
//!
//! Leaves first: [`galois`] → [`poly`] → [`generator`] → [`encoder`] / [`decoder`] →
//! [`Codec`].

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod galois;
pub mod generator;
pub mod poly;
pub mod types;

pub use codec::*;
pub use config::*;
pub use error::*;
pub use galois::{galois_field, GaloisField, Gf256};
pub use types::*;
