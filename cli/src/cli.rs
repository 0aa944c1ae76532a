// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use furahi_core::{APP_NAME, Furahi};
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd_cities::CmdCities;
use crate::cmd_details::CmdDetails;
use crate::cmd_export::CmdExport;
use crate::cmd_feed::CmdFeed;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_onboard::CmdOnboard;
use crate::cmd_saved::CmdSaved;
use crate::cmd_search::CmdSearch;
use crate::cmd_share::CmdShare;
use crate::config::parse_config;

/// Run the FurahiDay command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

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
            .about("FurahiDay. Discover, filter and save events in your city.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to feed
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $FURAHI_CONFIG, then \
$XDG_CONFIG_HOME/furahi/config.toml on Linux and MacOS, %APPDATA%/furahi/config.toml \
on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdOnboard::command())
            .subcommand(CmdFeed::command())
            .subcommand(CmdSearch::command())
            .subcommand(CmdSaved::command())
            .subcommand(CmdDetails::command())
            .subcommand(CmdExport::command())
            .subcommand(CmdShare::command())
            .subcommand(CmdCities::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Self {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdOnboard::NAME, matches)) => Onboard(CmdOnboard::from(matches)),
            Some((CmdFeed::NAME, matches)) => Feed(CmdFeed::from(matches)),
            Some((CmdSearch::NAME, matches)) => Search(CmdSearch::from(matches)),
            Some((CmdSaved::NAME, matches)) => Saved(CmdSaved::from(matches)),
            Some((CmdDetails::NAME, matches)) => Details(CmdDetails::from(matches)),
            Some((CmdExport::NAME, matches)) => Export(CmdExport::from(matches)),
            Some((CmdShare::NAME, matches)) => Share(CmdShare::from(matches)),
            Some((CmdCities::NAME, matches)) => Cities(CmdCities::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => Feed(CmdFeed::default()),
        };

        let config = matches.get_one("config").cloned();
        Cli { config, command }
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Choose city and interests
    Onboard(CmdOnboard),

    /// Show the event feed
    Feed(CmdFeed),

    /// Search events
    Search(CmdSearch),

    /// Toggle and list saved events
    Saved(CmdSaved),

    /// Show event details
    Details(CmdDetails),

    /// Export saved events to a calendar file
    Export(CmdExport),

    /// Share an event
    Share(CmdShare),

    /// List supported cities
    Cities(CmdCities),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Onboard(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Feed(a)    => Self::run_with(config, |x| a.run(x).boxed()).await,
            Search(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            Saved(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Details(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Export(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            Share(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Cities(a) => a.run().await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Furahi) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let mut furahi = Furahi::new(core_config).await?;
        f(&mut furahi).await
    }
}
