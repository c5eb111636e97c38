//! Generate the css-only tic-tac-toe site.
//!
//! Usage: `build-site [DEPTH_LIMIT] [--variant single|two|all] [--out-dir DIR]`.
//! Set `RUST_LOG=debug` to also see every computer reply while enumerating.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use css_ttt::config::{BuildConfig, DEFAULT_OUT_DIR};
use css_ttt::site;
use css_ttt::variant::Variant;

#[derive(Debug, Parser)]
#[command(name = "build-site")]
#[command(version, about = "Build the css-only tic-tac-toe site", long_about = None)]
struct Cli {
    /// Abort without writing anything if the game tree is deeper than this
    depth_limit: Option<u32>,

    /// Which game to build
    #[arg(long, value_enum, default_value_t = VariantArg::All)]
    variant: VariantArg,

    /// Directory the site is written to
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum VariantArg {
    /// Play against the computer
    Single,
    /// Two players on one screen
    Two,
    /// Both pages
    All,
}

impl VariantArg {
    fn variants(self) -> Vec<Variant> {
        match self {
            VariantArg::Single => vec![Variant::SinglePlayer],
            VariantArg::Two => vec![Variant::TwoPlayer],
            VariantArg::All => Variant::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BuildConfig {
        out_dir: cli.out_dir,
        variants: cli.variant.variants(),
        depth_limit: cli.depth_limit,
    };

    let reports = site::build(&config).with_context(|| format!("failed to build site into {:?}", config.out_dir))?;

    for report in reports {
        info!(variant = %report.variant, states = report.states, path = %report.path.display(), "done");
    }
    Ok(())
}
