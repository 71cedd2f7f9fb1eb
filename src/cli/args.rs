//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::bridge::DEFAULT_BRIDGE;
use crate::session::{DEFAULT_BIN_DIR, DEFAULT_IP, DEFAULT_PORT, DEFAULT_PROGRAM_PATH};

/// bebop - Connect to, upload to, and run programs on a drone vision computer.
#[derive(Debug, Parser)]
#[command(name = "bebop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Bridge executable to invoke
    #[arg(long, global = true, env = "BEBOP_ADB", default_value = DEFAULT_BRIDGE)]
    pub adb: String,

    /// Print bridge commands instead of running them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Exit with the bridge's status when it fails
    #[arg(long, global = true)]
    pub strict: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect the bridge to the device
    Connect(ConnectArgs),

    /// Upload a program to the device
    Upload(UploadArgs),

    /// Restart a program on the device
    Run(RunArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `connect` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConnectArgs {
    /// Device IP address
    #[arg(long, default_value = DEFAULT_IP)]
    pub ip: String,

    /// Device bridge port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ConnectArgs {
    fn default() -> Self {
        Self {
            ip: DEFAULT_IP.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Arguments for the `upload` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UploadArgs {
    /// Program (file name) to upload
    pub program: String,

    /// Local directory prefix, concatenated with the program name as-is
    #[arg(long, default_value = DEFAULT_BIN_DIR)]
    pub bin: String,

    /// Device directory prefix, concatenated with the program name as-is
    #[arg(long, default_value = DEFAULT_PROGRAM_PATH)]
    pub path: String,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Program to (re)start
    pub program: String,

    /// Device directory to start the program from
    #[arg(long, default_value = DEFAULT_PROGRAM_PATH)]
    pub path: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bebop").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn connect_defaults() {
        match parse(&["connect"]).command {
            Commands::Connect(args) => {
                assert_eq!(args.ip, "192.168.42.1");
                assert_eq!(args.port, 9050);
            }
            other => panic!("Expected connect, got {other:?}"),
        }
    }

    #[test]
    fn connect_overrides() {
        match parse(&["connect", "--ip", "10.0.0.2", "--port", "5555"]).command {
            Commands::Connect(args) => {
                assert_eq!(args.ip, "10.0.0.2");
                assert_eq!(args.port, 5555);
            }
            other => panic!("Expected connect, got {other:?}"),
        }
    }

    #[test]
    fn connect_rejects_non_integer_port() {
        let result = Cli::try_parse_from(["bebop", "connect", "--port", "ninety"]);
        assert!(result.is_err());
    }

    #[test]
    fn connect_args_default_matches_cli_defaults() {
        let defaults = ConnectArgs::default();
        assert_eq!(defaults.ip, DEFAULT_IP);
        assert_eq!(defaults.port, DEFAULT_PORT);
    }

    #[test]
    fn upload_defaults() {
        match parse(&["upload", "myapp"]).command {
            Commands::Upload(args) => {
                assert_eq!(args.program, "myapp");
                assert_eq!(args.bin, "build/bin/");
                assert_eq!(args.path, "/data/ftp/internal_000/tudelft_vision/");
            }
            other => panic!("Expected upload, got {other:?}"),
        }
    }

    #[test]
    fn upload_requires_program() {
        assert!(Cli::try_parse_from(["bebop", "upload"]).is_err());
    }

    #[test]
    fn run_defaults() {
        match parse(&["run", "myapp"]).command {
            Commands::Run(args) => {
                assert_eq!(args.program, "myapp");
                assert_eq!(args.path, "/data/ftp/internal_000/tudelft_vision/");
            }
            other => panic!("Expected run, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["run", "myapp", "--dry-run", "--strict", "--adb", "/opt/adb"]);
        assert!(cli.dry_run);
        assert!(cli.strict);
        assert_eq!(cli.adb, "/opt/adb");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["bebop"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
