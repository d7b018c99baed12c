// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use postcal_core::ContentStore;

use crate::config::parse_config;

#[derive(Debug, Clone, Copy)]
pub struct CmdCalendar;

impl CmdCalendar {
    pub const NAME: &str = "calendar";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Open the interactive content calendar")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Parsing configuration...");
        let config = parse_config(config).await?;
        let store = ContentStore::load(config.snapshot_path()?)?;
        crate::tui::run_calendar(store, config.export_dir())
    }
}
