//! Stage failure modes.

use thiserror::Error;

/// Errors raised while driving a performance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StageError {
    /// Energy dropped under the stage-lights floor before the tempo sync
    /// could run.
    #[error("Low Energy ({remaining} remaining): please recharge with Leeks")]
    LowEnergy { remaining: u32 },

    /// Empty or whitespace-only song title.
    #[error("Invalid song title: {0:?}")]
    InvalidSong(String),
}

impl StageError {
    /// Returns true if the performer ran out of energy.
    pub fn is_low_energy(&self) -> bool {
        matches!(self, StageError::LowEnergy { .. })
    }
}

/// Result alias for stage operations.
pub type StageResult<T> = Result<T, StageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_energy_mentions_leeks() {
        let err = StageError::LowEnergy { remaining: 5 };
        assert!(err.is_low_energy());
        assert!(err.to_string().contains("Leeks"));
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn invalid_song_quotes_the_title() {
        let err = StageError::InvalidSong("   ".to_string());
        assert!(!err.is_low_energy());
        assert!(err.to_string().contains("\"   \""));
    }
}
