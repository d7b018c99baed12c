// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use postcal_core::APP_NAME;

use crate::cmd_calendar::CmdCalendar;
use crate::cmd_export::CmdExport;
use crate::cmd_list::CmdList;

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Plan your social media content from the terminal.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // no subcommand opens the calendar
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/postcal/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/postcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdCalendar::command())
            .subcommand(CmdList::command())
            .subcommand(CmdExport::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdCalendar::NAME, matches)) => Calendar(CmdCalendar::from(matches)),
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdExport::NAME, matches)) => Export(CmdExport::from(matches)),
            None => Calendar(CmdCalendar),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Open the interactive calendar
    Calendar(CmdCalendar),

    /// List all content entries
    List(CmdList),

    /// Export the content plan as CSV
    Export(CmdExport),
}

impl Commands {
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::Calendar(cmd) => cmd.run(config).await,
            Commands::List(cmd) => cmd.run(config).await,
            Commands::Export(cmd) => cmd.run(config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_opens_the_calendar() {
        let cli = Cli::try_parse_from(["postcal"]).unwrap();
        assert!(matches!(cli.command, Commands::Calendar(_)));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["postcal", "-c", "/tmp/config.toml", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
    }

    #[test]
    fn export_accepts_output_dir() {
        let cli = Cli::try_parse_from(["postcal", "export", "-o", "/tmp/exports"]).unwrap();
        match cli.command {
            Commands::Export(cmd) => assert_eq!(cmd.output, Some(PathBuf::from("/tmp/exports"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
