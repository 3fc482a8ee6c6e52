//! Configuration for a Reed-Solomon codec

use super::encoder::validate_nsym;
use super::error::{RsError, RsResult};
use super::galois::FIELD_ORDER;

/// Settings bound into a [`Codec`](super::Codec) at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Parity symbols per codeword
    pub nsym: usize,
    /// Optional tighter bound on message length (None = 255 - nsym)
    pub max_message_len: Option<usize>,
    /// Recompute syndromes after correcting and reject residue
    pub reverify: bool,
    /// Whether batch operations run in parallel
    pub parallel: bool,
    /// Threads for batch operations (0 = rayon's global pool)
    pub threads: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            nsym: 10,
            max_message_len: None,
            reverify: true,
            parallel: true,
            threads: 0,
        }
    }
}

impl CodecConfig {
    pub fn new(nsym: usize) -> Self {
        Self {
            nsym,
            ..Self::default()
        }
    }

    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = Some(max_message_len);
        self
    }

    pub fn with_reverify(mut self, reverify: bool) -> Self {
        self.reverify = reverify;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Largest message a codeword can carry under this configuration
    pub fn message_len_limit(&self) -> usize {
        let field_limit = FIELD_ORDER.saturating_sub(self.nsym);
        self.max_message_len
            .map_or(field_limit, |max| max.min(field_limit))
    }

    pub fn validate(&self) -> RsResult<()> {
        validate_nsym(self.nsym)?;
        if let Some(max) = self.max_message_len {
            if max > FIELD_ORDER - self.nsym {
                return Err(RsError::InvalidConfig(format!(
                    "message bound {} plus {} parity symbols exceeds {} symbols",
                    max, self.nsym, FIELD_ORDER
                )));
            }
        }
        Ok(())
    }

    /// Get effective thread count for batch work (None = use the global pool)
    pub fn effective_threads(&self) -> Option<usize> {
        match (self.parallel, self.threads) {
            (false, _) => Some(1), // Sequential mode always uses single thread
            (true, 0) => None,
            (true, n) => Some(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.nsym, 10);
        assert!(config.reverify);
        assert!(config.parallel);
        assert_eq!(config.message_len_limit(), 245);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = CodecConfig::new(4)
            .with_max_message_len(16)
            .with_reverify(false)
            .with_parallel(false)
            .with_threads(3);

        assert_eq!(config.nsym, 4);
        assert_eq!(config.max_message_len, Some(16));
        assert!(!config.reverify);
        assert_eq!(config.message_len_limit(), 16);
        assert_eq!(config.effective_threads(), Some(1));
    }

    #[test]
    fn test_effective_threads() {
        assert_eq!(CodecConfig::new(2).effective_threads(), None);
        assert_eq!(CodecConfig::new(2).with_threads(6).effective_threads(), Some(6));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(CodecConfig::new(0).validate().is_err());
        assert!(CodecConfig::new(255).validate().is_err());
        assert!(CodecConfig::new(254).validate().is_ok());
        assert!(CodecConfig::new(10)
            .with_max_message_len(246)
            .validate()
            .is_err());
        assert!(CodecConfig::new(10)
            .with_max_message_len(245)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_huge_message_bound() {
        assert!(matches!(
            CodecConfig::new(10).with_max_message_len(usize::MAX).validate(),
            Err(RsError::InvalidConfig(_))
        ));
        assert!(matches!(
            CodecConfig::new(1)
                .with_max_message_len(usize::MAX - 1)
                .validate(),
            Err(RsError::InvalidConfig(_))
        ));
    }
}
