pub mod audit;
pub mod cli;
pub mod generator;
pub mod palette;
pub mod stage;
pub mod theme;

pub use theme::Theme;
