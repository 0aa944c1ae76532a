// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::{Generator, generate, generate_to};

use crate::Cli;

#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,

    /// Directory to write the script into, stdout when unset.
    pub dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the completion script for a shell")
            .long_about(
                "\
Print the completion script for a shell. With --dir the script is written into \
that directory under the name the shell expects, e.g. _furahi for zsh or \
furahi.bash for bash.",
            )
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
            .arg(
                arg!(--dir <DIR> "Write the script into this directory")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            shell: matches.get_one("shell").copied().unwrap_or(Shell::Bash),
            dir: matches.get_one("dir").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.dir {
            Some(dir) => {
                let path = self.generate_to(dir)?;
                println!("Completion script written to {}", path.display());
            }
            None => self.generate(&mut io::stdout().lock()),
        }
        Ok(())
    }

    /// Writes the completion script of the `furahi` command to `buf`.
    pub fn generate(&self, buf: &mut impl io::Write) {
        // stream output carries no path
        let _ = self.emit(Sink::Stream(buf));
    }

    /// Writes the completion script into `dir`, returning the file written.
    pub fn generate_to(&self, dir: &Path) -> io::Result<PathBuf> {
        self.emit(Sink::Dir(dir))?
            .ok_or_else(|| io::Error::other("no completion file written"))
    }

    fn emit(&self, sink: Sink<'_>) -> io::Result<Option<PathBuf>> {
        use clap_complete::Shell as Builtin;

        let mut cmd = Cli::command();
        match self.shell {
            Shell::Bash => sink.emit(Builtin::Bash, &mut cmd),
            Shell::Elvish => sink.emit(Builtin::Elvish, &mut cmd),
            Shell::Fish => sink.emit(Builtin::Fish, &mut cmd),
            Shell::Nushell => sink.emit(clap_complete_nushell::Nushell {}, &mut cmd),
            Shell::PowerShell => sink.emit(Builtin::PowerShell, &mut cmd),
            Shell::Zsh => sink.emit(Builtin::Zsh, &mut cmd),
        }
    }
}

/// Where a completion script goes.
enum Sink<'a> {
    Stream(&'a mut dyn io::Write),
    Dir(&'a Path),
}

impl Sink<'_> {
    fn emit(self, generator: impl Generator, cmd: &mut Command) -> io::Result<Option<PathBuf>> {
        let bin = cmd.get_name().to_string();
        match self {
            Sink::Stream(buf) => {
                generate(generator, cmd, bin, buf);
                Ok(None)
            }
            Sink::Dir(dir) => generate_to(generator, cmd, bin, dir).map(Some),
        }
    }
}

/// Shells with a completion generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[value(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}
