//! Event and module variant colors.
//!
//! Snow Miku, Racing Miku, Magical Mirai, Miku Expo, Project DIVA,
//! Miku NT and Project SEKAI each contribute a handful of accents that
//! the token tables borrow for roles the core teals cannot cover.

pub struct SnowMiku2011 {
    pub winter_blue: &'static str,
    pub mittens: &'static str,
}

pub struct SnowMiku2021 {
    pub glow_cyan: &'static str,
    pub neon_pink: &'static str,
}

pub struct SnowMiku {
    pub y2011: SnowMiku2011,
    pub y2021: SnowMiku2021,
}

pub const SNOW_MIKU: SnowMiku = SnowMiku {
    y2011: SnowMiku2011 {
        winter_blue: "#87CEEB",
        mittens: "#ADD8E6",
    },
    y2021: SnowMiku2021 {
        glow_cyan: "#00E5FF",
        neon_pink: "#FF4081",
    },
};

pub struct RacingMiku2010 {
    pub race_orange: &'static str,
}

pub struct RacingMiku2014 {
    pub lime_accent: &'static str,
}

pub struct RacingMiku2019 {
    pub neon_cyan: &'static str,
    pub neon_pink: &'static str,
}

pub struct RacingMiku {
    pub y2010: RacingMiku2010,
    pub y2014: RacingMiku2014,
    pub y2019: RacingMiku2019,
}

pub const RACING_MIKU: RacingMiku = RacingMiku {
    y2010: RacingMiku2010 {
        race_orange: "#FF6D00",
    },
    y2014: RacingMiku2014 {
        lime_accent: "#76FF03",
    },
    y2019: RacingMiku2019 {
        neon_cyan: "#00FFFF",
        neon_pink: "#FF00FF",
    },
};

pub struct MagicalMirai2014 {
    pub vibrant_pink: &'static str,
}

pub struct MagicalMirai2017 {
    pub celebration_gold: &'static str,
}

pub struct MagicalMirai2025 {
    pub resonance_cyan: &'static str,
    pub harmony_pink: &'static str,
    pub connection_purple: &'static str,
}

pub struct MagicalMirai {
    pub y2014: MagicalMirai2014,
    pub y2017: MagicalMirai2017,
    pub y2025: MagicalMirai2025,
}

pub const MAGICAL_MIRAI: MagicalMirai = MagicalMirai {
    y2014: MagicalMirai2014 {
        vibrant_pink: "#FF4081",
    },
    y2017: MagicalMirai2017 {
        celebration_gold: "#FFD700",
    },
    y2025: MagicalMirai2025 {
        resonance_cyan: "#00E5FF",
        harmony_pink: "#FF80AB",
        connection_purple: "#9C27B0",
    },
};

pub struct MikuExpo2025 {
    pub asia_cyan: &'static str,
}

pub struct MikuExpo2026 {
    pub neon_pink: &'static str,
    pub sky_blue: &'static str,
}

pub struct MikuExpo {
    pub y2025: MikuExpo2025,
    pub y2026: MikuExpo2026,
}

pub const MIKU_EXPO: MikuExpo = MikuExpo {
    y2025: MikuExpo2025 {
        asia_cyan: "#00E5CC",
    },
    y2026: MikuExpo2026 {
        neon_pink: "#FF1493",
        sky_blue: "#87CEEB",
    },
};

pub struct ProjectDivaSpace {
    pub cosmos_blue: &'static str,
}

pub struct ProjectDiva {
    pub space: ProjectDivaSpace,
}

pub const PROJECT_DIVA: ProjectDiva = ProjectDiva {
    space: ProjectDivaSpace {
        cosmos_blue: "#304FFE",
    },
};

pub struct MikuNtUi {
    pub nt_cyan: &'static str,
}

pub struct MikuNt {
    pub ui: MikuNtUi,
}

pub const MIKU_NT: MikuNt = MikuNt {
    ui: MikuNtUi { nt_cyan: "#00BCD4" },
};

/// SEKAI unit image colors.
pub struct SekaiUnits {
    pub more_more_jump: &'static str,
}

/// Leo/need member colors.
pub struct LeoNeed {
    pub ichika: &'static str,
    pub saki: &'static str,
}

pub struct MoreMoreJump {
    pub minori: &'static str,
}

pub struct VividBadSquad {
    pub an: &'static str,
}

pub struct WonderlandsShowtime {
    pub tsukasa: &'static str,
    pub emu: &'static str,
    pub nene: &'static str,
}

pub struct Nightcord {
    pub kanade: &'static str,
}

pub struct ProjectSekai {
    pub units: SekaiUnits,
    pub leo_need: LeoNeed,
    pub more_more_jump: MoreMoreJump,
    pub vivid_bad_squad: VividBadSquad,
    pub wonderlands_showtime: WonderlandsShowtime,
    pub nightcord: Nightcord,
}

pub const PROJECT_SEKAI: ProjectSekai = ProjectSekai {
    units: SekaiUnits {
        more_more_jump: "#88DD44",
    },
    leo_need: LeoNeed {
        ichika: "#33AAEE",
        saki: "#FFDD44",
    },
    more_more_jump: MoreMoreJump { minori: "#FFCCAA" },
    vivid_bad_squad: VividBadSquad { an: "#00BBDD" },
    wonderlands_showtime: WonderlandsShowtime {
        tsukasa: "#FFBB00",
        emu: "#FF66BB",
        nene: "#33DD99",
    },
    nightcord: Nightcord { kanade: "#BB6688" },
};
