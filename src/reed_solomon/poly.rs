//! Dense polynomials over GF(2^8)
//!
//! A polynomial is a plain byte slice with the **highest-degree coefficient first**:
//! `[1, 3, 2]` is x² + 3x + 2. Degree is `len - 1` and the zero polynomial is `[0]`.
//! This is the same layout as a systematic codeword, so a received block can be evaluated
//! directly as a polynomial.
//!
//! Degrees stay below 256 for every codeword this crate handles, so everything is a
//! `Vec<u8>` and every operation is a straightforward loop over the lookup tables.

use super::error::{RsError, RsResult};
use super::galois::galois_field;

/// Coefficient-wise sum after aligning the constant terms
pub fn add(p: &[u8], q: &[u8]) -> Vec<u8> {
    let len = p.len().max(q.len());
    if len == 0 {
        return vec![0];
    }

    let mut result = vec![0u8; len];
    result[len - p.len()..].copy_from_slice(p);
    for (r, &c) in result[len - q.len()..].iter_mut().zip(q) {
        *r ^= c;
    }
    result
}

/// Multiply every coefficient by `x`
pub fn scale(p: &[u8], x: u8) -> Vec<u8> {
    let gf = galois_field();
    p.iter().map(|&c| gf.mul(c, x)).collect()
}

/// Full product, `len(p) + len(q) - 1` coefficients
pub fn mul(p: &[u8], q: &[u8]) -> Vec<u8> {
    if p.is_empty() || q.is_empty() {
        return vec![0];
    }

    let gf = galois_field();
    let mut result = vec![0u8; p.len() + q.len() - 1];
    for (j, &qv) in q.iter().enumerate() {
        if qv == 0 {
            continue;
        }
        for (i, &pv) in p.iter().enumerate() {
            result[i + j] ^= gf.mul(pv, qv);
        }
    }
    result
}

/// Synthetic division returning `(quotient, remainder)`.
///
/// Leading zeros of the divisor are ignored. The remainder always has exactly
/// `deg(divisor)` coefficients, left-padded with zeros when the dividend is shorter.
pub fn divide(dividend: &[u8], divisor: &[u8]) -> RsResult<(Vec<u8>, Vec<u8>)> {
    let start = divisor
        .iter()
        .position(|&c| c != 0)
        .ok_or_else(|| RsError::InvalidInput("division by the zero polynomial".to_string()))?;
    let divisor = &divisor[start..];
    let degree = divisor.len() - 1;

    if dividend.len() <= degree {
        let mut remainder = vec![0u8; degree - dividend.len()];
        remainder.extend_from_slice(dividend);
        return Ok((vec![0], remainder));
    }

    let gf = galois_field();
    let lead = divisor[0];
    let steps = dividend.len() - degree;
    let mut work = dividend.to_vec();

    for i in 0..steps {
        let coef = gf.div(work[i], lead)?;
        work[i] = coef;
        if coef == 0 {
            continue;
        }
        for (j, &d) in divisor.iter().enumerate().skip(1) {
            if d != 0 {
                work[i + j] ^= gf.mul(d, coef);
            }
        }
    }

    let remainder = work.split_off(steps);
    Ok((work, remainder))
}

/// Horner evaluation at `x`
pub fn eval(p: &[u8], x: u8) -> u8 {
    let gf = galois_field();
    p.iter().fold(0u8, |acc, &c| gf.mul(acc, x) ^ c)
}

/// Formal derivative. In characteristic 2 the even-degree terms vanish.
pub fn derivative(p: &[u8]) -> Vec<u8> {
    if p.len() <= 1 {
        return vec![0];
    }

    let top = p.len() - 1;
    p[..top]
        .iter()
        .enumerate()
        .map(|(i, &c)| if (top - i) % 2 == 1 { c } else { 0 })
        .collect()
}

/// Drop leading zero coefficients, keeping at least one
pub fn trim_leading_zeros(p: &[u8]) -> &[u8] {
    match p.iter().position(|&c| c != 0) {
        Some(start) => &p[start..],
        None if p.is_empty() => p,
        None => &p[p.len() - 1..],
    }
}
