//! Stage showcase.
//!
//! A small async performer demo that exercises the crate's own error and
//! async idioms with the theme's cast: a [`DigitalDiva`] with an energy
//! counter, Append voicebank variants, and a tempo-derived wait behind
//! the [`TempoClock`] seam.

pub mod diva;
pub mod error;
pub mod tempo;

pub use diva::{
    AppendStyle, AppendVoice, DigitalDiva, MikuVersion, VoiceBank, DEFAULT_BPM, MIKU_PATTERN,
    MIN_BPM, STARTING_ENERGY,
};
pub use error::{StageError, StageResult};
pub use tempo::{InstantClock, TempoClock, TokioClock};
