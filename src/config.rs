use std::path::{Path, PathBuf};

use crate::variant::Variant;

pub const DEFAULT_OUT_DIR: &str = "dist";
pub const STYLESHEET_FILE: &str = "styles.css";

/// What to build and where to put it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BuildConfig {
    /// Root directory of the generated site.
    pub out_dir: PathBuf,
    /// The variants to build, each gets its own page.
    pub variants: Vec<Variant>,
    /// Abort if the state space is deeper than this many levels.
    pub depth_limit: Option<u32>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            variants: Variant::ALL.to_vec(),
            depth_limit: None,
        }
    }
}

impl BuildConfig {
    /// The page of the single player game lives at the root, the two player game in `2/`.
    pub fn page_path(&self, variant: Variant) -> PathBuf {
        page_path_in(&self.out_dir, variant)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.out_dir.join(STYLESHEET_FILE)
    }
}

fn page_path_in(out_dir: &Path, variant: Variant) -> PathBuf {
    match variant {
        Variant::SinglePlayer => out_dir.join("index.html"),
        Variant::TwoPlayer => out_dir.join("2").join("index.html"),
    }
}
