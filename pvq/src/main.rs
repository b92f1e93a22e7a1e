//! pvq: query cluster resource dumps with kubectl-style selectors.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use pvsel::ResourceKind;

#[derive(Parser)]
#[command(name = "pvq")]
#[command(about = "Filter virtual machines, containers, disks and volumes with selectors")]
#[command(version)]
struct Cli {
    /// Config file (default: $PVQ_CONFIG, then the user config dir)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by the listing commands.
#[derive(clap::Args)]
struct ListArgs {
    /// JSON array of records (reads stdin if not provided)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Selector, e.g. status=running,tags=prod (repeatable, all must match)
    #[arg(short = 'l', long = "selector")]
    selectors: Vec<String>,

    /// Output format: table, json, names (default from config, else table)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Vm,
    Ct,
    Disk,
    Volume,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Vm => ResourceKind::VirtualMachine,
            KindArg::Ct => ResourceKind::Container,
            KindArg::Disk => ResourceKind::Disk,
            KindArg::Volume => ResourceKind::Volume,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List virtual machines
    #[command(visible_alias = "vms")]
    Vm(ListArgs),

    /// List containers
    #[command(visible_aliases = ["cts", "container"])]
    Ct(ListArgs),

    /// List physical disks
    #[command(visible_alias = "disks")]
    Disk(ListArgs),

    /// List storage volumes
    #[command(visible_aliases = ["volumes", "vol"])]
    Volume(ListArgs),

    /// Show the selector fields a resource kind supports
    Fields {
        #[arg(value_enum)]
        kind: KindArg,
    },

    /// Parse selectors and print their canonical form
    Check {
        /// Selector to check (repeatable)
        #[arg(short = 'l', long = "selector")]
        selectors: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = config::Config::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Vm(args) => commands::list(&config, ResourceKind::VirtualMachine, &args.into()),
        Commands::Ct(args) => commands::list(&config, ResourceKind::Container, &args.into()),
        Commands::Disk(args) => commands::list(&config, ResourceKind::Disk, &args.into()),
        Commands::Volume(args) => commands::list(&config, ResourceKind::Volume, &args.into()),
        Commands::Fields { kind } => commands::fields(kind.into()),
        Commands::Check { selectors } => commands::check(&selectors),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

impl From<ListArgs> for commands::ListOptions {
    fn from(args: ListArgs) -> Self {
        Self {
            file: args.file,
            selectors: args.selectors,
            output: args.output,
        }
    }
}
