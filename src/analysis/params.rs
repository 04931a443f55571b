// Analysis parameters — explicit structs instead of ambient UI state.
//
// Every entry point validates its parameters before touching the batch, so
// out-of-range settings fail loudly instead of producing an empty chart.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::lexicon::MIN_WORD_LENGTH;

/// How a vocabulary keyword is matched against a record's combined text
/// when building co-occurrence counts and presence sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PresenceMatch {
    /// Plain case-insensitive substring containment. `art` matches `smart`.
    #[default]
    Substring,
    /// Substring match whose neighbouring characters are not alphanumeric.
    WordBoundary,
}

/// Settings for `build_cooccurrence_graph`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub min_length: usize,
    /// Vocabulary size (top-N keywords by frequency).
    pub max_keywords: usize,
    /// Pairs seen together fewer times than this are dropped.
    pub min_cooccurrence: u32,
    pub presence: PresenceMatch,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            max_keywords: 30,
            min_cooccurrence: 2,
            presence: PresenceMatch::Substring,
        }
    }
}

impl NetworkParams {
    pub fn validate(&self) -> Result<()> {
        validate_min_length(self.min_length)?;
        validate_max_keywords(self.max_keywords)?;
        if self.min_cooccurrence == 0 {
            anyhow::bail!("min_cooccurrence must be at least 1");
        }
        Ok(())
    }
}

/// Settings for `cluster_keywords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterParams {
    pub min_length: usize,
    /// Vocabulary size (top-N keywords by frequency).
    pub max_keywords: usize,
    /// Minimum Jaccard similarity to the seed keyword, in (0, 1].
    pub similarity_threshold: f64,
    pub presence: PresenceMatch,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            min_length: MIN_WORD_LENGTH,
            max_keywords: 20,
            similarity_threshold: 0.3,
            presence: PresenceMatch::Substring,
        }
    }
}

impl ClusterParams {
    pub fn validate(&self) -> Result<()> {
        validate_min_length(self.min_length)?;
        validate_max_keywords(self.max_keywords)?;
        let s = self.similarity_threshold;
        // Written so NaN fails too.
        if !(s > 0.0 && s <= 1.0) {
            anyhow::bail!("similarity_threshold must be in (0, 1], got {s}");
        }
        Ok(())
    }
}

pub(crate) fn validate_min_length(min_length: usize) -> Result<()> {
    if min_length == 0 {
        anyhow::bail!("min_length must be at least 1");
    }
    Ok(())
}

pub(crate) fn validate_max_keywords(max_keywords: usize) -> Result<()> {
    if max_keywords == 0 {
        anyhow::bail!("max_keywords must be at least 1");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NetworkParams::default().validate().is_ok());
        assert!(ClusterParams::default().validate().is_ok());
    }

    #[test]
    fn test_network_rejects_zero_values() {
        let zero_cooc = NetworkParams {
            min_cooccurrence: 0,
            ..Default::default()
        };
        assert!(zero_cooc.validate().is_err());

        let zero_vocab = NetworkParams {
            max_keywords: 0,
            ..Default::default()
        };
        assert!(zero_vocab.validate().is_err());

        let zero_len = NetworkParams {
            min_length: 0,
            ..Default::default()
        };
        assert!(zero_len.validate().is_err());
    }

    #[test]
    fn test_cluster_threshold_bounds() {
        for bad in [0.0, -0.1, 1.01, f64::NAN] {
            let params = ClusterParams {
                similarity_threshold: bad,
                ..Default::default()
            };
            assert!(params.validate().is_err(), "{bad} should be rejected");
        }

        let one = ClusterParams {
            similarity_threshold: 1.0,
            ..Default::default()
        };
        assert!(one.validate().is_ok());
    }
}
