use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "license-gen",
    about = "Generate license files and check dependency license compatibility",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file [default: ./.license-gen/config.toml, fallback ~/.config/license-gen/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Show debug logging and passing dependencies
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print summary lines
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a license file
    #[command(alias = "gen")]
    Generate {
        /// License type (MIT, Apache-2.0, GPL-3.0, etc.)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        license: Option<String>,

        /// Author name
        #[arg(short, long)]
        author: Option<String>,

        /// Copyright year [default: current year]
        #[arg(short, long)]
        year: Option<String>,

        /// Output path [default: ./LICENSE]
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List all available licenses
    List,

    /// Get information about a specific license
    Info {
        /// License key, e.g. Apache-2.0
        license: String,
    },

    /// Check license compatibility of project dependencies
    Check {
        /// Project path
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Show license statistics for project dependencies
    Stats {
        /// Project path
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },
}
