//! Build the whole site: enumerate, render, write.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::config::BuildConfig;
use crate::error::{Error, Result};
use crate::render::page::render_page;
use crate::render::style::stylesheet;
use crate::util::state_space::StateSpace;
use crate::variant::Variant;

/// Summary of one written page.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PageReport {
    pub variant: Variant,
    pub states: usize,
    pub path: PathBuf,
}

/// Build every configured variant and the shared stylesheet.
///
/// All state spaces are enumerated before anything is written,
/// so hitting the depth limit leaves no partial output behind.
pub fn build(config: &BuildConfig) -> Result<Vec<PageReport>> {
    let spaces = config
        .variants
        .iter()
        .map(|&variant| {
            let start = Instant::now();
            let space = StateSpace::enumerate(variant, config.depth_limit)?;
            info!(
                %variant,
                states = space.len(),
                millis = start.elapsed().as_millis() as u64,
                "found states"
            );
            Ok(space)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut reports = vec![];
    for space in &spaces {
        let path = config.page_path(space.variant());
        write_file(&path, &render_page(space))?;
        reports.push(PageReport {
            variant: space.variant(),
            states: space.len(),
            path,
        });
    }

    write_file(&config.stylesheet_path(), &stylesheet())?;
    Ok(reports)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_owned(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)?;

    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
