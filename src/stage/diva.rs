//! The virtual performer and her voicebanks.

use std::fmt;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::palette::{APPEND, SIGNATURE_COLOR};

use super::error::{StageError, StageResult};
use super::tempo::TempoClock;

/// Tempo a call site gets when it has no opinion of its own.
pub const DEFAULT_BPM: u32 = 120;

/// Slowest tempo the performer will sync to. The sacred number.
pub const MIN_BPM: u32 = 39;

/// Energy every performer starts with.
pub const STARTING_ENERGY: u32 = 39;

/// Below this the stage lights refuse to come on.
const LOW_ENERGY_FLOOR: u32 = 10;

/// Matches a Miku name token with an optional version suffix,
/// e.g. `Miku_V4` or `Miku-V2`.
pub static MIKU_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<name>Miku)[-_]?(?P<version>V\d+)?").unwrap());

/// Voicebank software generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MikuVersion {
    V2Classic,
    V3,
    V4x,
    Nt,
    Sekai,
    V6Ai,
}

impl MikuVersion {
    pub fn label(&self) -> &'static str {
        match self {
            MikuVersion::V2Classic => "V2 Classic",
            MikuVersion::V3 => "V3",
            MikuVersion::V4x => "V4X",
            MikuVersion::Nt => "NT",
            MikuVersion::Sekai => "SEKAI",
            MikuVersion::V6Ai => "V6 AI",
        }
    }
}

impl fmt::Display for MikuVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An installed voicebank. Inert data; nothing in the shown flow reads it
/// back after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceBank {
    pub name: String,
    pub version: MikuVersion,
    /// Usable range in Hz.
    pub frequency_range: (u32, u32),
}

impl VoiceBank {
    pub fn new(name: impl Into<String>, version: MikuVersion) -> Self {
        Self {
            name: name.into(),
            version,
            frequency_range: (80, 1100),
        }
    }
}

/// The performer: a name and an energy counter, with one async
/// `perform` operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalDiva {
    pub name: String,
    energy: u32,
}

impl Default for DigitalDiva {
    fn default() -> Self {
        Self::new("Hatsune Miku")
    }
}

impl DigitalDiva {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            energy: STARTING_ENERGY,
        }
    }

    /// Remaining performance energy.
    pub fn energy(&self) -> u32 {
        self.energy
    }

    /// Overrides the energy counter. Exists for rehearsal setups and tests;
    /// normal flow only ever decrements through [`DigitalDiva::perform`].
    pub fn set_energy(&mut self, energy: u32) {
        self.energy = energy;
    }

    /// The one true teal.
    pub fn canonical_color() -> &'static str {
        SIGNATURE_COLOR
    }

    /// Performs `title` at `bpm` beats per minute.
    ///
    /// Activates the stage lights first; if energy is under the floor this
    /// fails with [`StageError::LowEnergy`] and the tempo sync never runs.
    /// When energy is positive and `bpm` is at least [`MIN_BPM`], waits
    /// `60 / bpm` seconds through `clock`, burns one energy, and returns
    /// the status line. A slower tempo skips the sync and returns `None`
    /// with energy untouched.
    pub async fn perform(
        &mut self,
        clock: &dyn TempoClock,
        title: &str,
        bpm: u32,
    ) -> StageResult<Option<String>> {
        if title.trim().is_empty() {
            return Err(StageError::InvalidSong(title.to_string()));
        }

        let status = format!(
            "Now Loading: {title}... | BPM: {bpm} | Energy: {energy}",
            energy = self.energy
        );
        info!(performer = %self.name, %title, bpm, energy = self.energy, "taking the stage");

        self.activate_stage_lights()?;

        if self.energy > 0 && bpm >= MIN_BPM {
            self.sync_tempo(clock, bpm).await;
            return Ok(Some(status));
        }

        debug!(bpm, min = MIN_BPM, "tempo below sync threshold, skipping");
        Ok(None)
    }

    fn activate_stage_lights(&self) -> StageResult<()> {
        let rig_load = self.energy * 2 + 100;
        debug!(rig_load, "stage lights on");

        if self.energy < LOW_ENERGY_FLOOR {
            return Err(StageError::LowEnergy {
                remaining: self.energy,
            });
        }
        Ok(())
    }

    async fn sync_tempo(&mut self, clock: &dyn TempoClock, bpm: u32) {
        clock.wait(Duration::from_secs_f64(60.0 / f64::from(bpm))).await;
        self.energy -= 1;
    }
}

/// Append voicebank tone labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendStyle {
    Dark,
    Soft,
    Light,
    Sweet,
    Vivid,
    Solid,
}

impl AppendStyle {
    pub const ALL: [AppendStyle; 6] = [
        AppendStyle::Dark,
        AppendStyle::Soft,
        AppendStyle::Light,
        AppendStyle::Sweet,
        AppendStyle::Vivid,
        AppendStyle::Solid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppendStyle::Dark => "dark",
            AppendStyle::Soft => "soft",
            AppendStyle::Light => "light",
            AppendStyle::Sweet => "sweet",
            AppendStyle::Vivid => "vivid",
            AppendStyle::Solid => "solid",
        }
    }

    /// Title-cased label, as used in composed voicebank names.
    pub fn title(&self) -> &'static str {
        match self {
            AppendStyle::Dark => "Dark",
            AppendStyle::Soft => "Soft",
            AppendStyle::Light => "Light",
            AppendStyle::Sweet => "Sweet",
            AppendStyle::Vivid => "Vivid",
            AppendStyle::Solid => "Solid",
        }
    }

    /// Palette tone assigned to this append voicebank.
    pub fn color(&self) -> &'static str {
        match self {
            AppendStyle::Dark => APPEND.dark,
            AppendStyle::Soft => APPEND.soft,
            AppendStyle::Light => APPEND.light,
            AppendStyle::Sweet => APPEND.sweet,
            AppendStyle::Vivid => APPEND.vivid,
            AppendStyle::Solid => APPEND.solid,
        }
    }
}

impl fmt::Display for AppendStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// An Append specialization: a [`DigitalDiva`] whose name carries the
/// style label, plus the style itself. Composition, not inheritance;
/// only construction is specialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendVoice {
    pub diva: DigitalDiva,
    pub style: AppendStyle,
}

impl AppendVoice {
    pub fn new(style: AppendStyle) -> Self {
        Self {
            diva: DigitalDiva::new(format!("Miku {}", style.title())),
            style,
        }
    }

    /// Palette tone of the underlying voicebank.
    pub fn color(&self) -> &'static str {
        self.style.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::tempo::InstantClock;

    #[test]
    fn canonical_color_is_the_signature_teal() {
        assert_eq!(DigitalDiva::canonical_color(), "#39C5BB");
    }

    #[test]
    fn fresh_diva_starts_at_thirty_nine() {
        assert_eq!(DigitalDiva::default().energy(), 39);
    }

    #[tokio::test]
    async fn performing_burns_exactly_one_energy() {
        let mut miku = DigitalDiva::default();
        let status = miku
            .perform(&InstantClock, "World is Mine", 180)
            .await
            .unwrap();
        assert_eq!(miku.energy(), 38);
        assert_eq!(
            status.as_deref(),
            Some("Now Loading: World is Mine... | BPM: 180 | Energy: 39")
        );
    }

    #[tokio::test]
    async fn slow_tempo_skips_the_sync() {
        let mut miku = DigitalDiva::default();
        let status = miku
            .perform(&InstantClock, "Rolling Girl", MIN_BPM - 1)
            .await
            .unwrap();
        assert!(status.is_none());
        assert_eq!(miku.energy(), 39);
    }

    #[tokio::test]
    async fn min_bpm_is_inclusive() {
        let mut miku = DigitalDiva::default();
        let status = miku.perform(&InstantClock, "Melt", MIN_BPM).await.unwrap();
        assert!(status.is_some());
        assert_eq!(miku.energy(), 38);
    }

    #[tokio::test]
    async fn default_tempo_clears_the_gate() {
        let mut miku = DigitalDiva::default();
        let status = miku
            .perform(&InstantClock, "Senbonzakura", DEFAULT_BPM)
            .await
            .unwrap();
        assert!(status.is_some());
        assert_eq!(miku.energy(), 38);
    }

    #[tokio::test]
    async fn exhausted_diva_refuses_the_stage() {
        let mut miku = DigitalDiva::default();
        miku.set_energy(5);
        let err = miku
            .perform(&InstantClock, "Tell Your World", 180)
            .await
            .unwrap_err();
        assert_eq!(err, StageError::LowEnergy { remaining: 5 });
        assert_eq!(miku.energy(), 5, "failed performances cost nothing");
    }

    #[tokio::test]
    async fn energy_ten_still_performs() {
        let mut miku = DigitalDiva::default();
        miku.set_energy(10);
        let status = miku.perform(&InstantClock, "Ievan Polkka", 140).await.unwrap();
        assert!(status.is_some());
        assert_eq!(miku.energy(), 9);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let mut miku = DigitalDiva::default();
        let err = miku.perform(&InstantClock, "  ", 180).await.unwrap_err();
        assert!(matches!(err, StageError::InvalidSong(_)));
        assert_eq!(miku.energy(), 39);
    }

    #[test]
    fn append_voice_composes_its_name() {
        let sweet = AppendVoice::new(AppendStyle::Sweet);
        assert_eq!(sweet.diva.name, "Miku Sweet");
        assert_eq!(sweet.diva.energy(), 39);
        assert_eq!(sweet.color(), APPEND.sweet);
    }

    #[test]
    fn every_append_style_has_a_tone() {
        for style in AppendStyle::ALL {
            assert!(style.color().starts_with('#'));
            assert_eq!(style.as_str().to_lowercase(), style.as_str());
        }
    }

    #[test]
    fn miku_pattern_captures_name_and_version() {
        let caps = MIKU_PATTERN.captures("Miku_V4").unwrap();
        assert_eq!(&caps["name"], "Miku");
        assert_eq!(&caps["version"], "V4");

        let bare = MIKU_PATTERN.captures("Miku").unwrap();
        assert!(bare.name("version").is_none());
    }

    #[test]
    fn voice_bank_defaults_to_the_vocal_range() {
        let bank = VoiceBank::new("Hatsune Miku", MikuVersion::V2Classic);
        assert_eq!(bank.frequency_range, (80, 1100));
        assert_eq!(bank.version.to_string(), "V2 Classic");
    }
}
