//! Reed-Solomon error-correcting decoder
//!
//! ## Pipeline
//!
//! ```text
//! received ──▶ syndromes ──(all zero)──▶ Clean
//!                 │
//!                 ▼
//!          Berlekamp–Massey ──▶ Λ(x), e = deg Λ   (e > nsym/2 ⇒ Uncorrectable)
//!                 │
//!                 ▼
//!           Chien search ──▶ positions            (root count ≠ e ⇒ Uncorrectable)
//!                 │
//!                 ▼
//!              Forney ──▶ magnitudes ──▶ XOR into a copy ──▶ re-verify ──▶ Corrected
//! ```
//!
//! Syndromes are `S_j = r(α^j)` for `j in 0..nsym`, matching the generator roots
//! α⁰…α^(nsym-1). An error at codeword index `i` of an `n`-symbol block sits on the
//! coefficient of `x^(n-1-i)` and has locator `X = α^(n-1-i)`.
//!
//! Only unknown-position errors are handled. Erasure hints would need the syndromes and the
//! evaluator adjusted for the known positions before Berlekamp–Massey runs.

use super::encoder::validate_nsym;
use super::error::{RsError, RsResult, UncorrectableKind};
use super::galois::{galois_field, FIELD_ORDER};
use super::poly;
use super::types::{DecodeOutcome, Decoded};
use log::{debug, trace};
use smallvec::SmallVec;

/// Syndrome buffer; stays on the stack for up to 32 parity symbols
pub type Syndromes = SmallVec<[u8; 32]>;

type Positions = SmallVec<[usize; 16]>;

/// Evaluate the received block at each generator root
pub fn syndromes(received: &[u8], nsym: usize) -> Syndromes {
    let gf = galois_field();
    (0..nsym)
        .map(|j| poly::eval(received, gf.alpha_pow(j)))
        .collect()
}

/// True if `received` is a valid codeword for `nsym` parity symbols
pub fn check(received: &[u8], nsym: usize) -> RsResult<bool> {
    validate_received(received, nsym)?;
    Ok(syndromes(received, nsym).iter().all(|&s| s == 0))
}

/// Decode with syndrome re-verification after correction
pub fn decode(received: &[u8], nsym: usize) -> RsResult<Decoded> {
    decode_with_options(received, nsym, true)
}

/// Decode a `k + nsym` symbol block.
///
/// `received` is never modified; corrections are applied to a private copy that is only
/// handed back on success. With `reverify` the repaired block's syndromes are recomputed and
/// any residue is reported as [`UncorrectableKind::VerificationFailed`].
pub fn decode_with_options(received: &[u8], nsym: usize, reverify: bool) -> RsResult<Decoded> {
    validate_received(received, nsym)?;
    let message_len = received.len() - nsym;

    let synd = syndromes(received, nsym);
    if synd.iter().all(|&s| s == 0) {
        return Ok(Decoded {
            message: received[..message_len].to_vec(),
            codeword: received.to_vec(),
            error_positions: Vec::new(),
            outcome: DecodeOutcome::Clean,
        });
    }
    trace!("Syndromes: {}", hex::encode(&synd));

    let locator = find_error_locator(&synd)?;
    let errors = locator.len() - 1;
    let capacity = nsym / 2;
    debug!(
        "Error locator degree {} for {}-symbol block (capacity {})",
        errors,
        received.len(),
        capacity
    );
    if errors > capacity {
        return Err(UncorrectableKind::TooManyErrors { errors, capacity }.into());
    }

    // Nonzero syndromes give deg Λ ≥ 1, so a successful search is never empty
    let mut positions = find_error_positions(&locator, received.len())?;
    positions.sort_unstable();
    debug!("Located errors at {:?}", positions);

    let magnitudes = error_magnitudes(&synd, &locator, &positions, received.len())?;

    let mut codeword = received.to_vec();
    for (&position, &magnitude) in positions.iter().zip(&magnitudes) {
        codeword[position] ^= magnitude;
    }

    if reverify && syndromes(&codeword, nsym).iter().any(|&s| s != 0) {
        debug!("Correction at {:?} left nonzero syndromes", positions);
        return Err(UncorrectableKind::VerificationFailed.into());
    }

    Ok(Decoded {
        message: codeword[..message_len].to_vec(),
        codeword,
        error_positions: positions.into_vec(),
        outcome: DecodeOutcome::Corrected { errors },
    })
}

fn validate_received(received: &[u8], nsym: usize) -> RsResult<()> {
    validate_nsym(nsym)?;
    if received.len() < nsym || received.len() > FIELD_ORDER {
        return Err(RsError::InvalidConfig(format!(
            "received block of {} symbols cannot hold {} parity symbols (allowed {}..={})",
            received.len(),
            nsym,
            nsym,
            FIELD_ORDER
        )));
    }
    Ok(())
}

/// Berlekamp–Massey: the shortest LFSR Λ(x) generating the syndrome sequence.
///
/// `correction` is the last locator before a length change, scaled by the inverse of its
/// discrepancy and shifted once per iteration.
fn find_error_locator(synd: &[u8]) -> RsResult<Vec<u8>> {
    let gf = galois_field();
    let mut locator = vec![1u8];
    let mut correction = vec![1u8];

    for k in 0..synd.len() {
        let mut delta = synd[k];
        for j in 1..locator.len().min(k + 1) {
            delta ^= gf.mul(locator[locator.len() - 1 - j], synd[k - j]);
        }

        correction.push(0);

        if delta != 0 {
            if correction.len() > locator.len() {
                let next = poly::scale(&correction, delta);
                correction = poly::scale(&locator, gf.inverse(delta)?);
                locator = next;
            }
            locator = poly::add(&locator, &poly::scale(&correction, delta));
        }
    }

    Ok(poly::trim_leading_zeros(&locator).to_vec())
}

/// Chien search over every nonzero field element.
///
/// A root at α^-p means the coefficient of x^p is in error.
fn find_error_positions(locator: &[u8], len: usize) -> RsResult<Positions> {
    let gf = galois_field();
    let expected = locator.len() - 1;
    let mut positions = Positions::new();

    for exponent in 0..FIELD_ORDER {
        if poly::eval(locator, gf.alpha_pow(FIELD_ORDER - exponent)) != 0 {
            continue;
        }
        if exponent >= len {
            debug!("Locator root α^-{} beyond {}-symbol block", exponent, len);
            return Err(UncorrectableKind::RootOutOfRange { exponent, len }.into());
        }
        positions.push(len - 1 - exponent);
    }

    if positions.len() != expected {
        debug!(
            "Locator degree {} but {} roots found",
            expected,
            positions.len()
        );
        return Err(UncorrectableKind::LocatorRootMismatch {
            expected,
            found: positions.len(),
        }
        .into());
    }

    Ok(positions)
}

/// Forney: `e = X · Ω(X⁻¹) / Λ'(X⁻¹)` with `Ω(x) = S(x)Λ(x) mod x^nsym`
fn error_magnitudes(
    synd: &[u8],
    locator: &[u8],
    positions: &[usize],
    len: usize,
) -> RsResult<SmallVec<[u8; 16]>> {
    let gf = galois_field();
    let nsym = synd.len();

    // S(x) = S_0 + S_1 x + …, stored highest degree first
    let synd_poly: Vec<u8> = synd.iter().rev().copied().collect();
    let mut modulus = vec![0u8; nsym + 1];
    modulus[0] = 1;
    let (_, evaluator) = poly::divide(&poly::mul(&synd_poly, locator), &modulus)?;
    let locator_prime = poly::derivative(locator);

    positions
        .iter()
        .map(|&position| -> RsResult<u8> {
            let x = gf.alpha_pow(len - 1 - position);
            let x_inv = gf.inverse(x)?;

            let denominator = poly::eval(&locator_prime, x_inv);
            if denominator == 0 {
                return Err(UncorrectableKind::SingularDerivative { position }.into());
            }

            let numerator = poly::eval(&evaluator, x_inv);
            Ok(gf.mul(x, gf.div(numerator, denominator)?))
        })
        .collect()
}
