// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use chrono::Local;
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use postcal_core::{ContentStore, export_csv};

use crate::config::parse_config;

#[derive(Debug, Clone)]
pub struct CmdExport {
    /// Directory the CSV file is written to
    pub output: Option<PathBuf>,
}

impl CmdExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export the content plan as a CSV file")
            .arg(
                arg!(-o --output [DIR] "Directory to write the CSV file to")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output: matches.get_one("output").cloned(),
        }
    }

    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("Parsing configuration...");
        let config = parse_config(config).await?;
        let store = ContentStore::load(config.snapshot_path()?)?;

        let dir = self.output.unwrap_or_else(|| config.export_dir());
        let today = Local::now().date_naive();
        match export_csv(store.entries(), &dir, today)? {
            Some(path) => println!("Exported {} entries to {}", store.len(), path.display()),
            None => println!("No content to export!"),
        }
        Ok(())
    }
}
