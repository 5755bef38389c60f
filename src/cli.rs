use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::audit::{run_analysis, test_color, OutputFormat};
use crate::generator;
use crate::palette::{
    self, ACCENTS, APPEND, BLACKS, CYANS, FOREGROUNDS, FREQUENCY_VISUALIZER, GREYS, HOLOGRAM,
    PINKS, SEMANTIC, TEALS, VERSION_MAPPING,
};
use crate::stage::{AppendStyle, AppendVoice, DigitalDiva, TokioClock};
use crate::theme::config::ThemeConfig;
use crate::theme::Theme;

/// Miku Theme - Hatsune Miku color theme toolchain
#[derive(Parser)]
#[command(name = "miku-theme")]
#[command(about = "Generate and audit the Hatsune Miku VS Code color theme")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the theme JSON file
    Generate(GenerateArgs),

    /// Audit a theme file for APCA readability and color distinction
    Audit(AuditArgs),

    /// Print the core palette groups
    Palette,

    /// Run the stage showcase demo
    Showcase(ShowcaseArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Output path for the theme file (overrides the configured directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Explicit configuration file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the `_palette` documentation block in the output
    #[arg(long)]
    pub no_palette_doc: bool,
}

#[derive(Args)]
pub struct AuditArgs {
    /// Theme JSON/JSONC file to audit
    #[arg(long, conflicts_with = "test")]
    pub theme: Option<PathBuf>,

    /// Score a single pair instead of a whole theme: FG BG [NAME]
    #[arg(long, num_args = 2..=3, value_names = ["FG", "BG"])]
    pub test: Option<Vec<String>>,

    /// Emit machine-readable JSON instead of the sectioned report
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowcaseArgs {
    /// Song title to perform
    #[arg(long, default_value = "World is Mine")]
    pub song: String,

    /// Beats per minute for the tempo sync
    #[arg(long, default_value_t = 180)]
    pub bpm: u32,
}

impl Default for ShowcaseArgs {
    fn default() -> Self {
        Self {
            song: "World is Mine".to_string(),
            bpm: 180,
        }
    }
}

/// Command-line interface handler
pub struct CliHandler {
    config: ThemeConfig,
}

impl CliHandler {
    /// Create a new CLI handler with the persisted configuration loaded
    pub fn new() -> Result<Self> {
        let config =
            ThemeConfig::load().map_err(|e| anyhow!("failed to load configuration: {e}"))?;
        config
            .validate()
            .map_err(|e| anyhow!("invalid configuration: {e}"))?;
        Ok(Self { config })
    }

    /// Handle CLI commands
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Generate(args) => self.handle_generate(args).await,
            Commands::Audit(args) => self.handle_audit(args).await,
            Commands::Palette => self.handle_palette().await,
            Commands::Showcase(args) => self.handle_showcase(args).await,
        }
    }

    async fn handle_generate(&self, args: GenerateArgs) -> Result<()> {
        println!("🎨 Assembling the Hatsune Miku theme...");

        let config = match &args.config {
            Some(path) => {
                let config = ThemeConfig::load_from(path)
                    .map_err(|e| anyhow!("failed to load {}: {e}", path.display()))?;
                config
                    .validate()
                    .map_err(|e| anyhow!("invalid configuration: {e}"))?;
                config
            }
            None => self.config.clone(),
        };

        let mut theme = Theme::hatsune_miku();
        config.apply_overrides(&mut theme);
        if config.generator.include_palette_reference && !args.no_palette_doc {
            theme.palette_reference = Some(generator::palette_reference());
        }

        let output_path = args
            .out
            .unwrap_or_else(|| config.generator.out_dir.join(&config.generator.file_name));

        generator::write_theme(&theme, &output_path)?;
        Ok(())
    }

    async fn handle_audit(&self, args: AuditArgs) -> Result<()> {
        if let Some(pair) = args.test {
            let name = pair.get(2).map(String::as_str).unwrap_or("Test pair");
            test_color(&pair[0], &pair[1], name)?;
            return Ok(());
        }

        let Some(theme_path) = args.theme else {
            return Err(anyhow!("pass --theme <path> or --test FG BG"));
        };

        let format = if args.json || self.config.audit.json_output {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        // A completed analysis exits 0 even when the verdict is poor;
        // only unreadable input is an error.
        run_analysis(&theme_path, format)?;
        Ok(())
    }

    async fn handle_palette(&self) -> Result<()> {
        println!("🎨 Hatsune Miku Palette");
        println!("=======================\n");

        print_group(
            "Version Mapping",
            &[
                ("identity", VERSION_MAPPING.identity),
                ("stage", VERSION_MAPPING.stage),
                ("functions", VERSION_MAPPING.functions),
                ("types", VERSION_MAPPING.types),
                ("hover", VERSION_MAPPING.hover),
                ("focus", VERSION_MAPPING.focus),
                ("active", VERSION_MAPPING.active),
            ],
        );
        print_group(
            "Frequency Visualizer",
            &[
                ("bass", FREQUENCY_VISUALIZER.bass),
                ("low", FREQUENCY_VISUALIZER.low),
                ("mid", FREQUENCY_VISUALIZER.mid),
                ("high", FREQUENCY_VISUALIZER.high),
                ("peak", FREQUENCY_VISUALIZER.peak),
                ("ultra", FREQUENCY_VISUALIZER.ultra),
            ],
        );
        print_group(
            "Append",
            &[
                ("dark", APPEND.dark),
                ("soft", APPEND.soft),
                ("light", APPEND.light),
                ("sweet", APPEND.sweet),
                ("vivid", APPEND.vivid),
                ("solid", APPEND.solid),
            ],
        );
        print_group(
            "Teals",
            &[
                ("neon", TEALS.neon),
                ("bright", TEALS.bright),
                ("classic", TEALS.classic),
                ("stage", TEALS.stage),
                ("ocean", TEALS.ocean),
                ("deep", TEALS.deep),
                ("tint", TEALS.tint),
                ("mist", TEALS.mist),
            ],
        );
        print_group(
            "Pinks",
            &[
                ("sekai", PINKS.sekai),
                ("hot", PINKS.hot),
                ("accessory", PINKS.accessory),
                ("soft", PINKS.soft),
                ("blush", PINKS.blush),
                ("pale", PINKS.pale),
            ],
        );
        print_group(
            "Cyans",
            &[
                ("ice", CYANS.ice),
                ("hologram", CYANS.hologram),
                ("electric", CYANS.electric),
                ("deep", CYANS.deep),
            ],
        );
        print_group(
            "Blacks",
            &[
                ("void", BLACKS.void),
                ("sleeve", BLACKS.sleeve),
                ("outfit", BLACKS.outfit),
                ("base", BLACKS.base),
                ("raised", BLACKS.raised),
                ("lifted", BLACKS.lifted),
                ("hover", BLACKS.hover),
            ],
        );
        print_group(
            "Greys",
            &[
                ("charcoal", GREYS.charcoal),
                ("gunmetal", GREYS.gunmetal),
                ("slate", GREYS.slate),
                ("steel", GREYS.steel),
                ("silver", GREYS.silver),
                ("platinum", GREYS.platinum),
            ],
        );
        print_group(
            "Accents",
            &[
                ("amber", ACCENTS.amber),
                ("gold", ACCENTS.gold),
                ("orange", ACCENTS.orange),
                ("coral", ACCENTS.coral),
                ("coral glow", ACCENTS.coral_glow),
                ("green", ACCENTS.green),
                ("green bright", ACCENTS.green_bright),
                ("blue", ACCENTS.blue),
                ("purple", ACCENTS.purple),
            ],
        );
        print_group(
            "Foregrounds",
            &[
                ("bright", FOREGROUNDS.bright),
                ("primary", FOREGROUNDS.primary),
                ("secondary", FOREGROUNDS.secondary),
                ("muted", FOREGROUNDS.muted),
                ("comment", FOREGROUNDS.comment),
                ("doc comment", FOREGROUNDS.doc_comment),
                ("ghost", FOREGROUNDS.ghost),
            ],
        );
        print_group(
            "Semantic",
            &[
                ("success", SEMANTIC.success),
                ("warning", SEMANTIC.warning),
                ("error", SEMANTIC.error),
                ("info", SEMANTIC.info),
            ],
        );
        print_group(
            "Hologram",
            &[
                ("cyan", HOLOGRAM.cyan),
                ("ice", HOLOGRAM.ice),
                ("pink", HOLOGRAM.pink),
                ("purple", HOLOGRAM.purple),
                ("flicker", HOLOGRAM.flicker),
            ],
        );

        println!("Signature color: {}", palette::SIGNATURE_COLOR);
        Ok(())
    }

    async fn handle_showcase(&self, args: ShowcaseArgs) -> Result<()> {
        println!("🎤 Hatsune Miku Stage Showcase");
        println!("==============================\n");

        let mut miku = DigitalDiva::default();
        let append_sweet = AppendVoice::new(AppendStyle::Sweet);

        println!("Performer: {} (energy {})", miku.name, miku.energy());
        println!(
            "Backing voice: {} [{}]\n",
            append_sweet.diva.name,
            append_sweet.color()
        );

        let clock = TokioClock;
        match miku.perform(&clock, &args.song, args.bpm).await? {
            Some(status) => {
                println!("{status}");
                println!("✅ Performance complete, energy now {}", miku.energy());
            }
            None => {
                println!(
                    "⏭️  BPM {} is below the sync threshold; performance skipped",
                    args.bpm
                );
            }
        }
        Ok(())
    }
}

fn print_group(title: &str, swatches: &[(&str, &str)]) {
    println!("{title}");
    for (name, hex) in swatches {
        println!("  {name:<14} {hex}");
    }
    println!();
}
