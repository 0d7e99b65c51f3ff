use clap::Parser;
use ftag::application::{init, merge_tags, tag_file, ListRequest, ListTagsService, MergeRequest};
use ftag::cli::{format_listing, Cli, Commands};
use ftag::error::FtagError;
use ftag::infrastructure::Repository;
use std::io::IsTerminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<(), FtagError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Tag { file, tags } => {
            let store = Repository::discover()?.open_store()?;
            tag_file(&store, &file, &tags)?;
            Ok(())
        }
        Commands::Merge { tags } => {
            // Argument errors surface before the store is opened
            let request = MergeRequest::from_args(&tags)?;

            let store = Repository::discover()?.open_store()?;
            let report = merge_tags(&store, &request.sources, &request.destination)?;

            for merged in &report.merged {
                info!(
                    "merged '{}' into '{}' ({} explicit, {} implicit)",
                    merged.name, report.destination, merged.explicit, merged.implicit
                );
            }
            Ok(())
        }
        Commands::Tags {
            all,
            explicit,
            files,
        } => {
            let store = Repository::discover()?.open_store()?;
            let service = ListTagsService::new(&store, std::env::current_dir()?);

            let listing = service.execute(&ListRequest {
                paths: files,
                explicit_only: explicit,
                all_tags: all,
            })?;

            print!("{}", format_listing(&listing));
            Ok(())
        }
    }
}
