//! Plus Texture CLI
//!
//! Usage:
//!   plus-texture [OPTIONS]
//!
//! Options:
//!   -f, --file <FILE>          Output filename [default: texture.svg]
//!   --pw, --page-width <MM>    Page width
//!   --ph, --page-height <MM>   Page height
//!   -d, --density <PER_M2>     Marker density
//!   --mw, --min-width <MM>     Minimum marker width
//!   --bl, --background <0-255> Background lightness
//!   -c, --config <FILE>        TOML configuration file
//!   --seed <SEED>              Random seed (defaults to the clock)
//!   -h, --help                 Print help

use std::path::PathBuf;

use clap::Parser;

use plus_texture::config::{
    DEFAULT_BACKGROUND_LIGHTNESS, DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_MINIMUM_SIZE,
    DEFAULT_WIDTH,
};
use plus_texture::renderer::config::DEFAULT_PRECISION;
use plus_texture::{
    clock_seed, generate_to_file, seeded_rng, GenerationSummary, SvgConfig, TextureConfig,
    TextureError,
};

const BANNER: &str = "Plus texture generator for FAST corner detector
-----------------------------------------------";

#[derive(Parser)]
#[command(name = "plus-texture")]
#[command(about = "Generate printable plus-marker textures for corner detector evaluation")]
#[command(before_help = BANNER)]
struct Cli {
    /// Output filename
    #[arg(short = 'f', long = "file", default_value = "texture.svg")]
    output: PathBuf,

    #[arg(
        long = "page-width",
        visible_alias = "pw",
        value_name = "MM",
        help = format!("Page width in mm [default: {}]", DEFAULT_WIDTH)
    )]
    width: Option<f64>,

    #[arg(
        long = "page-height",
        visible_alias = "ph",
        value_name = "MM",
        help = format!("Page height in mm [default: {}]", DEFAULT_HEIGHT)
    )]
    height: Option<f64>,

    #[arg(
        short = 'd',
        long = "density",
        value_name = "PER_M2",
        help = format!("Marker density per square meter [default: {}]", DEFAULT_DENSITY)
    )]
    density: Option<f64>,

    #[arg(
        long = "min-width",
        visible_alias = "mw",
        value_name = "MM",
        help = format!("Minimum marker width in mm [default: {}]", DEFAULT_MINIMUM_SIZE)
    )]
    minimum_size: Option<f64>,

    #[arg(
        long = "background",
        visible_alias = "bl",
        value_name = "0-255",
        help = format!("Background lightness [default: {}]", DEFAULT_BACKGROUND_LIGHTNESS)
    )]
    background_lightness: Option<u8>,

    /// TOML configuration file; flags given on the command line take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed; defaults to one derived from the clock
    #[arg(long)]
    seed: Option<u64>,

    /// Decimal places for marker coordinates
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,
}

impl Cli {
    /// Layer command-line flags over the base configuration
    fn apply_overrides(&self, mut config: TextureConfig) -> TextureConfig {
        if let Some(width) = self.width {
            config = config.with_width(width);
        }
        if let Some(height) = self.height {
            config = config.with_height(height);
        }
        if let Some(density) = self.density {
            config = config.with_density(density);
        }
        if let Some(size) = self.minimum_size {
            config = config.with_minimum_size(size);
        }
        if let Some(lightness) = self.background_lightness {
            config = config.with_background_lightness(lightness);
        }
        config
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!();
    println!("{}", BANNER);
    println!();
    println!("Use -h to see extra options.");
    println!();

    match run(&cli) {
        Ok(summary) => {
            println!(
                "DONE: Drew {} pluses in file {}",
                summary.marker_count,
                cli.output.display()
            );
            println!();
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<GenerationSummary, TextureError> {
    let base = match &cli.config {
        Some(path) => TextureConfig::from_file(path)?,
        None => TextureConfig::default(),
    };
    let config = cli.apply_overrides(base);
    tracing::debug!(?config, "resolved configuration");

    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, "seeding random generator");
    let mut rng = seeded_rng(seed);

    let svg = SvgConfig::new().with_precision(cli.precision);
    generate_to_file(&config, &svg, &mut rng, &cli.output)
}
