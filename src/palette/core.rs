//! Core palette groups shared by every surface of the theme.

/// Miku version colors mapped onto UI roles.
pub struct VersionMapping {
    /// V2 classic teal, the brand color.
    pub identity: &'static str,
    /// SEKAI image color, slightly greener.
    pub stage: &'static str,
    /// NT-era cyan for callable things.
    pub functions: &'static str,
    /// Pale append tint for type-level names.
    pub types: &'static str,
    pub hover: &'static str,
    pub focus: &'static str,
    pub active: &'static str,
}

pub const VERSION_MAPPING: VersionMapping = VersionMapping {
    identity: "#39C5BB",
    stage: "#33CCBB",
    functions: "#00BCD4",
    types: "#B2EBE7",
    hover: "#5FCEC8",
    focus: "#6DD4CD",
    active: "#2B9E96",
};

/// Teal ramp used for the bracket-pair frequency bands.
pub struct FrequencyVisualizer {
    pub bass: &'static str,
    pub low: &'static str,
    pub mid: &'static str,
    pub high: &'static str,
    pub peak: &'static str,
    pub ultra: &'static str,
}

pub const FREQUENCY_VISUALIZER: FrequencyVisualizer = FrequencyVisualizer {
    bass: "#1E8A82",
    low: "#2AA69E",
    mid: "#39C5BB",
    high: "#3ED1C8",
    peak: "#00E5D4",
    ultra: "#A8EBE6",
};

/// Project SEKAI reference colors.
pub struct Sekai {
    pub image_color: &'static str,
    pub classroom_pink: &'static str,
    pub hetero_turquoise: &'static str,
    pub hetero_pink: &'static str,
}

pub const SEKAI: Sekai = Sekai {
    image_color: "#33CCBB",
    classroom_pink: "#FF6B9D",
    hetero_turquoise: "#33CCBB",
    hetero_pink: "#FF80AB",
};

/// Official per-release teals, V2 through V6 AI.
pub struct Versions {
    pub v1v2: &'static str,
    pub v3: &'static str,
    pub v4x: &'static str,
    pub nt: &'static str,
    pub nt2: &'static str,
    pub sp: &'static str,
    pub v6ai: &'static str,
}

pub const VERSIONS: Versions = Versions {
    v1v2: "#39C5BB",
    v3: "#3BC8BE",
    v4x: "#38C4BA",
    nt: "#3ED1C8",
    nt2: "#40D3CA",
    sp: "#3AC6BC",
    v6ai: "#41D9CF",
};

/// Append voicebank tones.
pub struct Append {
    pub dark: &'static str,
    pub soft: &'static str,
    pub light: &'static str,
    pub sweet: &'static str,
    pub vivid: &'static str,
    pub solid: &'static str,
}

pub const APPEND: Append = Append {
    dark: "#1E8A82",
    soft: "#7DD9D2",
    light: "#A8EBE6",
    sweet: "#5FCEC8",
    vivid: "#00E5D4",
    solid: "#2AA69E",
};

/// V4X voice variants.
pub struct V4xVoice {
    pub original: &'static str,
    pub hard: &'static str,
    pub soft: &'static str,
    pub dark: &'static str,
    pub sweet: &'static str,
    pub solid: &'static str,
}

pub const V4X_VOICE: V4xVoice = V4xVoice {
    original: "#39C5BB",
    hard: "#2B9E96",
    soft: "#6DD4CD",
    dark: "#1A7A74",
    sweet: "#4DD8D0",
    solid: "#2EB5AD",
};

/// The working teal range, bright to deep.
pub struct Teals {
    pub sekai: &'static str,
    pub neon: &'static str,
    pub bright: &'static str,
    pub classic: &'static str,
    pub stage: &'static str,
    pub ocean: &'static str,
    pub deep: &'static str,
    pub tint: &'static str,
    pub mist: &'static str,
}

pub const TEALS: Teals = Teals {
    sekai: "#39C5BB",
    neon: "#5DE4DB",
    bright: "#4DD8CE",
    classic: "#39C5BB",
    stage: "#2D9E97",
    ocean: "#1A8A82",
    deep: "#0D6B65",
    tint: "#B2EBE7",
    mist: "#E0F2F1",
};

/// Accessory pinks, from SEKAI key art to pale blush.
pub struct Pinks {
    pub sekai: &'static str,
    pub hot: &'static str,
    pub accessory: &'static str,
    pub soft: &'static str,
    pub blush: &'static str,
    pub pale: &'static str,
}

pub const PINKS: Pinks = Pinks {
    sekai: "#FF6B9D",
    hot: "#FF4081",
    accessory: "#E05096",
    soft: "#FF80AB",
    blush: "#FFB8D4",
    pale: "#FCE4EC",
};

/// Hologram cyans.
pub struct Cyans {
    pub ice: &'static str,
    pub hologram: &'static str,
    pub electric: &'static str,
    pub deep: &'static str,
}

pub const CYANS: Cyans = Cyans {
    ice: "#84FFFF",
    hologram: "#4DD0E1",
    electric: "#26C6DA",
    deep: "#00ACC1",
};

/// Outfit blacks, layered void to hover.
pub struct Blacks {
    pub void: &'static str,
    pub sleeve: &'static str,
    pub outfit: &'static str,
    pub base: &'static str,
    pub raised: &'static str,
    pub lifted: &'static str,
    pub hover: &'static str,
}

pub const BLACKS: Blacks = Blacks {
    void: "#0D1114",
    sleeve: "#111417",
    outfit: "#15191D",
    base: "#1A1F24",
    raised: "#1F262D",
    lifted: "#252D35",
    hover: "#2A333C",
};

/// Neutral greys for chrome and secondary text.
pub struct Greys {
    pub charcoal: &'static str,
    pub gunmetal: &'static str,
    pub slate: &'static str,
    pub steel: &'static str,
    pub silver: &'static str,
    pub platinum: &'static str,
}

pub const GREYS: Greys = Greys {
    charcoal: "#263238",
    gunmetal: "#37474F",
    slate: "#455A64",
    steel: "#546E7A",
    silver: "#78909C",
    platinum: "#B0BEC5",
};

/// Non-teal accents, used sparingly.
pub struct Accents {
    pub amber: &'static str,
    pub gold: &'static str,
    pub orange: &'static str,
    pub coral: &'static str,
    pub coral_glow: &'static str,
    pub green: &'static str,
    pub green_bright: &'static str,
    pub blue: &'static str,
    pub purple: &'static str,
}

pub const ACCENTS: Accents = Accents {
    amber: "#FFD740",
    gold: "#FFCA28",
    orange: "#FFAB40",
    coral: "#FF5370",
    coral_glow: "#FF8A80",
    green: "#9CCC65",
    green_bright: "#69F0AE",
    blue: "#40C4FF",
    purple: "#B388FF",
};

/// Text foregrounds, bright to ghost.
pub struct Foregrounds {
    pub bright: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
    pub comment: &'static str,
    pub doc_comment: &'static str,
    pub ghost: &'static str,
}

pub const FOREGROUNDS: Foregrounds = Foregrounds {
    bright: "#ECEFF1",
    primary: "#C8DCD9",
    secondary: "#90B8B2",
    muted: "#78909C",
    comment: "#5A7A7A",
    doc_comment: "#6B8A8A",
    ghost: "#455A64",
};

/// Status colors.
pub struct Semantic {
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

pub const SEMANTIC: Semantic = Semantic {
    success: "#9CCC65",
    warning: "#FFD740",
    error: "#FF5370",
    info: "#4DD0E1",
};

/// Stage hologram effects.
pub struct Hologram {
    pub cyan: &'static str,
    pub ice: &'static str,
    pub pink: &'static str,
    pub purple: &'static str,
    pub flicker: &'static str,
}

pub const HOLOGRAM: Hologram = Hologram {
    cyan: "#4DD0E1",
    ice: "#84FFFF",
    pink: "#FF80AB",
    purple: "#B388FF",
    flicker: "#FFFFFF",
};
