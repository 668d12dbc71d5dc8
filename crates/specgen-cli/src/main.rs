mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use specgen_core::types::WriteMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "specgen",
    about = "Generate Markdown specification documents from a record catalog",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every record of one or more catalogs to Markdown files
    Generate {
        /// Catalog files (YAML or JSON)
        #[arg(required = true)]
        catalogs: Vec<PathBuf>,

        /// Output directory (default: the catalog's base_dir, else its directory)
        #[arg(long, short = 'o', env = "SPECGEN_OUT")]
        out: Option<PathBuf>,

        /// Override the catalog's write mode: overwrite or skip-existing
        #[arg(long)]
        mode: Option<WriteMode>,

        /// Report what would be written without touching the filesystem
        #[arg(long)]
        dry_run: bool,

        /// Skip group READMEs and the completion summary
        #[arg(long)]
        no_index: bool,
    },

    /// List the records of a catalog with their output paths
    List { catalog: PathBuf },

    /// Validate a catalog; exits non-zero when errors are found
    Check { catalog: PathBuf },

    /// Print one rendered document to stdout
    Render {
        catalog: PathBuf,
        /// Spec id, e.g. 401
        id: String,
    },

    /// Write a starter catalog
    Init {
        /// Where to write it
        #[arg(default_value = specgen_core::paths::DEFAULT_CATALOG)]
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate {
            catalogs,
            out,
            mode,
            dry_run,
            no_index,
        } => cmd::generate::run(
            &catalogs,
            cmd::generate::Flags {
                out,
                mode,
                dry_run,
                no_index,
            },
            cli.json,
        ),
        Commands::List { catalog } => cmd::list::run(&catalog, cli.json),
        Commands::Check { catalog } => cmd::check::run(&catalog, cli.json),
        Commands::Render { catalog, id } => cmd::render::run(&catalog, &id),
        Commands::Init { path } => cmd::init::run(&path, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
