//! CLI runner - executes the selected mode

use crate::cli::commands::Cli;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{write_catalog, Catalog, MessageWriter};
use crate::state::State;
use crate::sync::{sync, SyncSummary};
use std::io::{self, Write};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against standard output
    pub fn run(&self) -> Result<()> {
        self.run_with(io::stdout().lock())
    }

    /// Run, writing protocol output to `out`
    pub fn run_with<W: Write>(&self, mut out: W) -> Result<()> {
        if self.cli.discover {
            return self.discover(&mut out);
        }

        self.read(out).map(|_| ())
    }

    /// Print the (empty) catalog; the config is not read
    fn discover<W: Write>(&self, out: &mut W) -> Result<()> {
        write_catalog(out, &Catalog::empty())
    }

    /// Sync the configured files
    fn read<W: Write>(&self, out: W) -> Result<SyncSummary> {
        let config = self.load_config()?;
        let state = self.load_state()?;

        if let Some(path) = &self.cli.properties {
            debug!("Ignoring properties file {}", path.display());
        }
        if let Some(path) = &self.cli.catalog {
            debug!("Ignoring catalog file {}", path.display());
        }

        let mut writer = MessageWriter::new(out);
        sync(&config, &state, &mut writer)
    }

    /// Load configuration
    fn load_config(&self) -> Result<Config> {
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("the following arguments are required: -c/--config"))?;
        Config::from_file(path)
    }

    /// Load state, empty when no state file is given
    fn load_state(&self) -> Result<State> {
        match &self.cli.state {
            Some(path) => State::from_file(path),
            None => Ok(State::new()),
        }
    }
}
