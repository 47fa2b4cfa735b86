use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dynacolor::error::CliError;
use dynacolor::models::{AppConfig, ConfigOverrides, OutputFormat, SchemeDocument};
use dynacolor::services::{collect_sources, render, write_output};
use material_color::dynamic::Role;
use material_color::{
    Argb, DynamicScheme, GenerateError, Hct, HexStyle, Platform, SchemeGenerator, SchemeParams,
    SpecVersion, TonalPalette, Variant,
};

#[derive(Parser)]
#[command(name = "dynacolor")]
#[command(about = "Material dynamic color themes from images and seed colors")]
struct Cli {
    /// Config file (defaults to $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a full scheme from colors, a PNG or raw RGB bytes
    Generate(GenerateArgs),
    /// Print the tones of a tonal palette
    Palette {
        /// Seed color
        #[arg(long)]
        hex: String,

        /// Comma-separated tones
        #[arg(long, value_delimiter = ',', default_value = "0,10,20,30,40,50,60,70,80,90,95,99,100")]
        tones: Vec<f64>,

        /// Hex layout: argb, rgba or rgb
        #[arg(long, default_value = "argb")]
        hex_style: String,
    },
    /// List the roles a spec version defines
    Roles {
        /// 2021 or 2025
        #[arg(long, default_value = "2025")]
        spec_version: String,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Seed color(s), e.g. "#4285F4" (repeatable)
    #[arg(long)]
    hex: Vec<String>,

    /// PNG image to extract colors from
    #[arg(long)]
    image: Option<PathBuf>,

    /// Packed RGB bytes ("-" for stdin)
    #[arg(long)]
    raw: Option<PathBuf>,

    /// Dark theme
    #[arg(long, overrides_with = "light")]
    dark: bool,

    /// Light theme, overriding `dark: true` in the config file
    #[arg(long, overrides_with = "dark")]
    light: bool,

    /// Contrast level from -1 (reduced) to 1 (high)
    #[arg(long, allow_hyphen_values = true)]
    contrast: Option<f64>,

    /// monochrome, neutral, tonal-spot, vibrant, expressive, fidelity,
    /// content, rainbow or fruit-salad
    #[arg(long)]
    variant: Option<String>,

    /// phone or watch
    #[arg(long)]
    platform: Option<String>,

    /// 2021 or 2025
    #[arg(long)]
    spec_version: Option<String>,

    /// json or yaml
    #[arg(long)]
    format: Option<String>,

    /// Hex layout: argb, rgba or rgb
    #[arg(long, default_value = "argb")]
    hex_style: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl GenerateArgs {
    fn overrides(&self) -> Result<ConfigOverrides, CliError> {
        Ok(ConfigOverrides {
            variant: self.variant.as_deref().map(str::parse::<Variant>).transpose()?,
            dark: match (self.dark, self.light) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            contrast: self.contrast,
            platform: self.platform.as_deref().map(str::parse::<Platform>).transpose()?,
            version: self.spec_version.as_deref().map(str::parse::<SpecVersion>).transpose()?,
            format: self.format.as_deref().map(str::parse::<OutputFormat>).transpose()?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dynacolor=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = AppConfig::resolve_path(cli.config.as_deref());

    match cli.command {
        Some(Commands::Generate(args)) => run_generate_command(config_path.as_deref(), &args)?,
        Some(Commands::Palette {
            hex,
            tones,
            hex_style,
        }) => run_palette_command(&hex, &tones, &hex_style)?,
        Some(Commands::Roles { spec_version }) => run_roles_command(&spec_version)?,
        None => run_status_command(config_path.as_deref()),
    }
    Ok(())
}

/// Generate a scheme and write it out
fn run_generate_command(config_path: Option<&Path>, args: &GenerateArgs) -> Result<(), CliError> {
    let mut config = AppConfig::load(config_path);
    config.apply(&args.overrides()?);
    let style: HexStyle = args.hex_style.parse()?;

    let source = collect_sources(&args.hex, args.image.as_deref(), args.raw.as_deref())?;
    let generated = SchemeGenerator::with_options(config.generate_options()?).generate(&source)?;
    tracing::info!(seed = %generated.seed(), variant = %config.variant, "Generated scheme");

    let document = SchemeDocument::new(&generated, style);
    let text = render(&document, config.format)?;
    write_output(&text, args.output.as_deref())
}

/// Print a tonal palette for one seed color
fn run_palette_command(hex: &str, tones: &[f64], hex_style: &str) -> Result<(), CliError> {
    let style: HexStyle = hex_style.parse()?;
    let seed: Argb = hex.parse().map_err(GenerateError::from)?;
    let palette = TonalPalette::from_argb(seed);

    println!(
        "hue {:.2}  chroma {:.2}  key {}",
        palette.hue(),
        palette.chroma(),
        palette.key_color().to_argb().to_hex(style)
    );
    for &tone in tones {
        println!("{tone:>6.1}  {}", palette.tone(tone).to_hex(style));
    }
    Ok(())
}

/// List the role catalog of a spec version
fn run_roles_command(spec_version: &str) -> Result<(), CliError> {
    let params = SchemeParams {
        spec_version: spec_version.parse()?,
        ..SchemeParams::default()
    };
    let scheme = DynamicScheme::new(Hct::from_argb(Argb(0xFF4285F4)), params);

    let roles: Vec<Role> = scheme.roles().collect();
    println!("Spec {} defines {} roles:", scheme.spec_version(), roles.len());
    for role in roles {
        println!("  {}", role.name());
    }
    Ok(())
}

/// Print version, config location and effective defaults
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Dynacolor v{VERSION}");
    println!("Material dynamic color themes from images and seed colors\n");

    println!("Configuration:");
    let source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (file not found, using defaults)", path.display()),
        None => "(not set, using defaults)".to_string(),
    };
    println!("  CONFIG_FILE = {source}");

    let config = AppConfig::load(config_path);
    println!("\nEffective Settings:");
    println!("  variant       = {}", config.variant);
    println!("  dark          = {}", config.dark);
    println!("  contrast      = {}", config.contrast);
    println!("  platform      = {}", config.platform);
    println!("  version       = {}", config.version);
    println!("  max_colors    = {}", config.max_colors);
    println!("  desired_seeds = {}", config.desired_seeds);
    println!("  fallback      = {}", config.fallback);
    println!("  filter        = {}", config.filter);
    println!("  format        = {:?}", config.format);

    println!("\nCommands:");
    println!("  dynacolor generate --hex <HEX>...  Generate a scheme from colors");
    println!("  dynacolor generate --image <PNG>   Generate a scheme from an image");
    println!("  dynacolor palette --hex <HEX>      Print a tonal palette");
    println!("  dynacolor roles                    List the role catalog");
}
