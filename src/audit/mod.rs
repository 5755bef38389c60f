//! Readability audit for generated and third-party theme files.
//!
//! The audit loads a theme (JSON or JSONC), resolves every foreground
//! against the surface it actually renders on, and scores the pair with
//! APCA. Syntax and symbol-icon palettes additionally get ΔE00
//! distinction checks so that adjacent token colors stay tellable apart.

pub mod apca;
pub mod color;
pub mod distinct;
pub mod report;
pub mod theme;

pub use apca::{analyze_apca, apca_contrast, ApcaAnalysis, ApcaResult, ContrastLevel, Polarity};
pub use color::{is_valid_hex, ColorError};
pub use distinct::{delta_e00_hex, distinction_level, DistinctionLevel};
pub use report::{run_analysis, test_color, AuditStats, OutputFormat};
pub use theme::{load_theme, AuditError, LoadedTheme};
