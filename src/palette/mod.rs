//! Color palette for the Hatsune Miku theme.
//!
//! Every hex value used by the theme tables lives here, grouped the way
//! the stage wardrobe is grouped: core identity teals, outfit blacks,
//! accessory pinks, and the event/module variants.

pub mod core;
pub mod variants;

pub use core::{
    ACCENTS, APPEND, BLACKS, CYANS, FOREGROUNDS, FREQUENCY_VISUALIZER, GREYS, HOLOGRAM, PINKS,
    SEKAI, SEMANTIC, TEALS, V4X_VOICE, VERSIONS, VERSION_MAPPING,
};
pub use variants::{
    MAGICAL_MIRAI, MIKU_EXPO, MIKU_NT, PROJECT_DIVA, PROJECT_SEKAI, RACING_MIKU, SNOW_MIKU,
};

/// The canonical Miku teal. Everything else in the palette orbits this.
pub const SIGNATURE_COLOR: &str = "#39C5BB";
