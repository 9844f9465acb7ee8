mod catalog;
mod list;
mod render;
mod show;

use std::{io::stderr, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Year used to expand two digit launch years.
    ///
    /// Launch years greater than the last two digits of this year are taken to be in the
    /// 1900s. Defaults to the current year.
    #[arg(long, global = true, value_name = "yyyy")]
    reference_year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the records in a TLE catalog file.
    List {
        /// Input TLE file
        input: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: render::Format,

        /// Only list records with a name matching this regular expression.
        #[arg(short, long, value_name = "regex")]
        name: Option<String>,
    },
    /// Show all elements of the selected records.
    Show {
        /// Input TLE file
        input: PathBuf,

        /// Select the record with this satellite catalog number.
        #[arg(short, long, conflicts_with = "name", required_unless_present = "name")]
        catalog: Option<u32>,

        /// Select records with a name matching this regular expression.
        #[arg(short, long, value_name = "regex")]
        name: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: render::Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(false)
        .without_time()
        .with_env_filter(
            EnvFilter::try_from_env("TLE_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    debug!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::List {
            input,
            format,
            name,
        } => list::list(input, cli.reference_year, name.as_deref(), format),
        Commands::Show {
            input,
            catalog,
            name,
            format,
        } => {
            let selection = match (catalog, name) {
                (Some(num), _) => show::Selection::Catalog(*num),
                (None, Some(pattern)) => show::Selection::Name(pattern.clone()),
                (None, None) => anyhow::bail!("one of --catalog or --name is required"),
            };
            show::show(input, cli.reference_year, &selection, format)
        }
    }
}
