//! CLI command structure using clap

use atlaspush_core::ConfigOverrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atlaspush")]
#[command(version, about = "Push a project with the atlas-upload helper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (default: nearest directory with atlaspush.toml)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload the project by handing off to the uploader
    Push {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Print the uploader command line instead of running it
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON (with --dry-run)
        #[arg(long, requires = "dry_run")]
        json: bool,
    },

    /// Show which uploader binary would be used
    Which {
        /// Override the uploader binary
        #[arg(long)]
        uploader_path: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Check configuration and uploader availability
    Doctor {
        #[arg(long)]
        json: bool,
    },
}

/// Config values settable from the command line
#[derive(Args, Debug, Default)]
pub struct OverrideArgs {
    /// Application to push to, `owner/name`
    #[arg(long)]
    pub app: Option<String>,

    /// Do not pass VCS information to the uploader
    #[arg(long)]
    pub no_vcs: bool,

    /// Additional include pattern (repeatable)
    #[arg(long = "include", value_name = "PATTERN")]
    pub includes: Vec<String>,

    /// Additional exclude pattern (repeatable)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Custom server address
    #[arg(long)]
    pub address: Option<String>,

    /// Access token
    #[arg(long)]
    pub token: Option<String>,

    /// Uploader binary to run instead of searching for one
    #[arg(long)]
    pub uploader_path: Option<String>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        ConfigOverrides {
            app: args.app,
            vcs: args.no_vcs.then_some(false),
            includes: args.includes,
            excludes: args.excludes,
            address: args.address,
            token: args.token,
            uploader_path: args.uploader_path,
        }
    }
}
