// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command};
use postcal_core::ContentStore;

use crate::config::parse_config;
use crate::entry_formatter::EntryFormatter;

#[derive(Debug, Clone, Copy)]
pub struct CmdList;

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List all scheduled content entries")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Parsing configuration...");
        let config = parse_config(config).await?;
        let store = ContentStore::load(config.snapshot_path()?)?;

        if store.is_empty() {
            println!("No content scheduled yet. Run `postcal` to add some.");
            return Ok(());
        }

        tracing::debug!("Listing entries...");
        let formatter = EntryFormatter::new();
        formatter.write_to(&mut io::stdout(), store.entries())?;
        Ok(())
    }
}
