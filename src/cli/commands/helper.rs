use std::env;

use anyhow::{Context, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    paths::ProjectRoot,
};

/// Config and project root resolved for one command run.
pub struct CommandContext {
    pub root: ProjectRoot,
    pub config: Config,
    pub from_file: bool,
}

impl CommandContext {
    /// Load config starting from `--root` (or the current directory).
    ///
    /// An explicit `--root` is the project root; otherwise the directory of
    /// the discovered config file is.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let start_dir = match &common.root {
            Some(root) => root.clone(),
            None => env::current_dir().context("Failed to determine current directory")?,
        };

        let loaded = load_config(&start_dir)?;
        let root_dir = match &common.root {
            Some(root) => root.clone(),
            None => loaded.base_dir,
        };

        Ok(Self {
            root: ProjectRoot::new(root_dir)?,
            config: loaded.config,
            from_file: loaded.from_file,
        })
    }
}
