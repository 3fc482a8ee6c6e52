//! Types and structures for Reed-Solomon decoding results

/// How a successful decode reached its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// All syndromes were zero; the codeword was returned untouched
    Clean,
    /// `errors` symbols were located and repaired
    Corrected { errors: usize },
}

impl DecodeOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, DecodeOutcome::Clean)
    }

    /// Number of repaired symbols, zero for a clean codeword
    pub fn corrected_count(&self) -> usize {
        match self {
            DecodeOutcome::Clean => 0,
            DecodeOutcome::Corrected { errors } => *errors,
        }
    }
}

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The first `k` symbols of the repaired codeword
    pub message: Vec<u8>,
    /// Full repaired codeword, message followed by parity
    pub codeword: Vec<u8>,
    /// Codeword indices that were repaired, ascending
    pub error_positions: Vec<usize>,
    pub outcome: DecodeOutcome,
}

impl Decoded {
    /// Split into `(message, outcome)`
    pub fn into_parts(self) -> (Vec<u8>, DecodeOutcome) {
        (self.message, self.outcome)
    }
}
