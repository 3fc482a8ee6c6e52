//! Systematic Reed-Solomon encoder
//!
//! The message is treated as the high-order coefficients of `m(x)·x^nsym`; the remainder of
//! dividing that by the generator is appended as parity. Because the remainder is subtracted
//! out, every codeword is a multiple of the generator and evaluates to zero at its roots.

use super::error::{RsError, RsResult};
use super::galois::FIELD_ORDER;
use super::{generator, poly};

/// Largest parity count that still leaves room for a one-byte message
pub const MAX_NSYM: usize = FIELD_ORDER - 1;

/// Reject parity counts outside `1..=254`
pub fn validate_nsym(nsym: usize) -> RsResult<()> {
    if nsym == 0 || nsym > MAX_NSYM {
        return Err(RsError::InvalidConfig(format!(
            "parity symbol count must be between 1 and {}, got {}",
            MAX_NSYM, nsym
        )));
    }
    Ok(())
}

/// Encode `message` with `nsym` parity symbols, returning message ‖ parity
pub fn encode(message: &[u8], nsym: usize) -> RsResult<Vec<u8>> {
    validate_nsym(nsym)?;
    check_length(message.len(), nsym)?;
    encode_with_generator(message, &generator::cached(nsym))
}

/// Encode against a prebuilt generator of degree `nsym`
pub fn encode_with_generator(message: &[u8], generator: &[u8]) -> RsResult<Vec<u8>> {
    let parity = parity(message, generator)?;
    Ok(join(message, &parity))
}

/// Encode without re-checking nsym or length; the caller has already validated both
pub(crate) fn encode_prevalidated(message: &[u8], generator: &[u8]) -> RsResult<Vec<u8>> {
    let parity = remainder(message, generator)?;
    Ok(join(message, &parity))
}

fn join(message: &[u8], parity: &[u8]) -> Vec<u8> {
    let mut codeword = Vec::with_capacity(message.len() + parity.len());
    codeword.extend_from_slice(message);
    codeword.extend_from_slice(parity);
    codeword
}

/// Parity symbols alone; exactly `generator.len() - 1` bytes
pub fn parity(message: &[u8], generator: &[u8]) -> RsResult<Vec<u8>> {
    let nsym = generator.len().saturating_sub(1);
    validate_nsym(nsym)?;
    check_length(message.len(), nsym)?;
    remainder(message, generator)
}

fn remainder(message: &[u8], generator: &[u8]) -> RsResult<Vec<u8>> {
    let nsym = generator.len() - 1;
    let mut dividend = Vec::with_capacity(message.len() + nsym);
    dividend.extend_from_slice(message);
    dividend.resize(message.len() + nsym, 0);

    let (_, remainder) = poly::divide(&dividend, generator)?;
    Ok(remainder)
}

pub(crate) fn check_length(len: usize, nsym: usize) -> RsResult<()> {
    if len > FIELD_ORDER.saturating_sub(nsym) {
        return Err(RsError::MessageTooLong {
            len,
            nsym,
            max: FIELD_ORDER,
        });
    }
    Ok(())
}
