//! Generator polynomial construction
//!
//! g(x) = (x - α⁰)(x - α¹)…(x - α^(nsym-1)). The polynomial depends only on `nsym`, so each
//! distinct parity count is built once and shared through a process-wide cache.

use super::galois::galois_field;
use super::poly;
use log::trace;
use rustc_hash::FxHashMap as HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static GENERATOR_CACHE: OnceLock<RwLock<HashMap<usize, Arc<[u8]>>>> = OnceLock::new();

/// Build the monic degree-`nsym` generator polynomial
pub fn build(nsym: usize) -> Vec<u8> {
    let gf = galois_field();
    (0..nsym).fold(vec![1u8], |generator, i| {
        poly::mul(&generator, &[1, gf.alpha_pow(i)])
    })
}

/// Generator for `nsym`, building and caching it on first request
pub fn cached(nsym: usize) -> Arc<[u8]> {
    let cache = GENERATOR_CACHE.get_or_init(|| RwLock::new(HashMap::default()));

    if let Some(generator) = cache
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&nsym)
    {
        return Arc::clone(generator);
    }

    let mut cache = cache.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(cache.entry(nsym).or_insert_with(|| {
        trace!("Building generator polynomial for nsym = {}", nsym);
        Arc::from(build(nsym))
    }))
}
