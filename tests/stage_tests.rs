//! End-to-end scenarios for the stage showcase.

use miku_theme::stage::{
    AppendStyle, AppendVoice, DigitalDiva, InstantClock, MikuVersion, StageError, VoiceBank,
    MIKU_PATTERN, MIN_BPM, STARTING_ENERGY,
};

#[tokio::test]
async fn world_is_mine_at_180_bpm() {
    // The canonical scenario: a fresh performer spends one energy on a fast song.
    let mut miku = DigitalDiva::default();
    assert_eq!(miku.energy(), STARTING_ENERGY);

    let status = miku
        .perform(&InstantClock, "World is Mine", 180)
        .await
        .expect("a fresh diva never runs out of energy");

    assert_eq!(miku.energy(), 38);
    let status = status.expect("180 bpm is above the sync threshold");
    assert!(status.contains("World is Mine"));
    assert!(status.contains("BPM: 180"));
}

#[tokio::test]
async fn repeated_performances_drain_energy_one_at_a_time() {
    let mut miku = DigitalDiva::default();
    for expected in (36..39).rev() {
        miku.perform(&InstantClock, "Ievan Polkka", 140)
            .await
            .unwrap();
        assert_eq!(miku.energy(), expected);
    }
}

#[tokio::test]
async fn ballad_below_threshold_changes_nothing() {
    let mut miku = DigitalDiva::default();
    let status = miku
        .perform(&InstantClock, "Hello, Worker", MIN_BPM - 1)
        .await
        .unwrap();
    assert!(status.is_none());
    assert_eq!(miku.energy(), STARTING_ENERGY);
}

#[tokio::test]
async fn exhausted_performer_aborts_before_the_wait() {
    let mut miku = DigitalDiva::default();
    miku.set_energy(5);

    let err = miku
        .perform(&InstantClock, "World is Mine", 180)
        .await
        .unwrap_err();

    assert!(err.is_low_energy());
    assert_eq!(err, StageError::LowEnergy { remaining: 5 });
    assert_eq!(miku.energy(), 5);
}

#[test]
fn append_voice_performs_like_its_base() {
    let mut sweet = AppendVoice::new(AppendStyle::Sweet);
    assert_eq!(sweet.diva.name, "Miku Sweet");

    tokio_test::block_on(sweet.diva.perform(&InstantClock, "PoPiPo", 165)).unwrap();
    assert_eq!(sweet.diva.energy(), STARTING_ENERGY - 1);
}

#[test]
fn voice_bank_is_inert_data() {
    let bank = VoiceBank::new("Hatsune Miku", MikuVersion::Nt);
    assert_eq!(bank.name, "Hatsune Miku");
    assert_eq!(bank.frequency_range, (80, 1100));
    assert_eq!(bank.version, MikuVersion::Nt);
}

#[test]
fn pattern_recognizes_versioned_names() {
    for (input, version) in [("Miku-V2", Some("V2")), ("Miku_V4", Some("V4")), ("Miku", None)] {
        let caps = MIKU_PATTERN.captures(input).unwrap();
        assert_eq!(&caps["name"], "Miku");
        assert_eq!(caps.name("version").map(|m| m.as_str()), version);
    }
    assert!(MIKU_PATTERN.captures("Rin").is_none());
}
