//! Codec facade: one parity count, shared generator, encode/decode as a unit
//!
//! A [`Codec`] is immutable after construction. The generator polynomial comes from the
//! process-wide cache and the field tables are global, so a single codec can be shared
//! across threads (`&Codec` or a clone) without any locking on the hot path.

use super::config::CodecConfig;
use super::error::{RsError, RsResult};
use super::types::Decoded;
use super::{decoder, encoder, generator};
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// Reed-Solomon encoder/decoder bound to a fixed parity count
#[derive(Debug, Clone)]
pub struct Codec {
    config: CodecConfig,
    generator: Arc<[u8]>,
    pool: Option<Arc<ThreadPool>>,
}

impl Codec {
    /// Create a codec with `nsym` parity symbols and default settings
    pub fn new(nsym: usize) -> RsResult<Self> {
        Self::with_config(CodecConfig::new(nsym))
    }

    pub fn with_config(config: CodecConfig) -> RsResult<Self> {
        config.validate()?;

        let pool = match config.effective_threads() {
            Some(threads) if threads > 1 => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| {
                        RsError::InvalidConfig(format!(
                            "could not build a {}-thread pool: {}",
                            threads, e
                        ))
                    })?;
                Some(Arc::new(pool))
            }
            _ => None,
        };

        debug!(
            "Codec: nsym = {}, message limit = {}, reverify = {}, threads = {:?}",
            config.nsym,
            config.message_len_limit(),
            config.reverify,
            config.effective_threads()
        );

        Ok(Self {
            generator: generator::cached(config.nsym),
            config,
            pool,
        })
    }

    pub fn nsym(&self) -> usize {
        self.config.nsym
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Longest message accepted by [`encode`](Self::encode)
    pub fn max_message_len(&self) -> usize {
        self.config.message_len_limit()
    }

    /// Symbol errors that can be corrected per codeword: ⌊nsym/2⌋
    pub fn max_correctable(&self) -> usize {
        self.config.nsym / 2
    }

    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Encode `message` into message ‖ parity
    pub fn encode(&self, message: &[u8]) -> RsResult<Vec<u8>> {
        let limit = self.max_message_len();
        if message.len() > limit {
            return Err(RsError::MessageTooLong {
                len: message.len(),
                nsym: self.nsym(),
                max: limit + self.nsym(),
            });
        }
        encoder::encode_prevalidated(message, &self.generator)
    }

    /// Decode a possibly corrupted codeword.
    ///
    /// Returns [`RsError::Uncorrectable`] when corruption exceeds what the code can repair.
    pub fn decode(&self, received: &[u8]) -> RsResult<Decoded> {
        self.check_codeword_len(received)?;
        decoder::decode_with_options(received, self.nsym(), self.config.reverify)
    }

    /// True if `codeword` has all-zero syndromes
    pub fn check(&self, codeword: &[u8]) -> RsResult<bool> {
        self.check_codeword_len(codeword)?;
        decoder::check(codeword, self.nsym())
    }

    /// Encode many independent messages; results keep input order
    pub fn encode_batch<M>(&self, messages: &[M]) -> Vec<RsResult<Vec<u8>>>
    where
        M: AsRef<[u8]> + Sync,
    {
        self.run_batch(messages, |message| self.encode(message.as_ref()))
    }

    /// Decode many independent codewords; results keep input order
    pub fn decode_batch<C>(&self, codewords: &[C]) -> Vec<RsResult<Decoded>>
    where
        C: AsRef<[u8]> + Sync,
    {
        self.run_batch(codewords, |codeword| self.decode(codeword.as_ref()))
    }

    fn run_batch<T, R, F>(&self, items: &[T], op: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        match (self.config.effective_threads(), &self.pool) {
            (Some(1), _) => items.iter().map(op).collect(),
            (_, Some(pool)) => pool.install(|| items.par_iter().map(op).collect()),
            (_, None) => items.par_iter().map(op).collect(),
        }
    }

    fn check_codeword_len(&self, received: &[u8]) -> RsResult<()> {
        let limit = self.max_message_len() + self.nsym();
        if received.len() > limit {
            return Err(RsError::InvalidConfig(format!(
                "received block of {} symbols exceeds the configured {}-symbol codeword",
                received.len(),
                limit
            )));
        }
        Ok(())
    }
}
