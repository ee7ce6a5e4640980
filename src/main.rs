// src/main.rs
mod extractors;
mod pages;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use utils::AppError;

/// Parent directory marking the template page, which is not a real project.
const TEMPLATE_DIRECTORY: &str = "Projects";

/// Command Line Interface for indexing project week markdown pages
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Paths to markdown project pages
    #[arg(required = true)]
    file: Vec<PathBuf>,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Process each page in input order
    for filepath in &args.file {
        let directory = pages::parent_directory(filepath);
        if directory == TEMPLATE_DIRECTORY {
            // Skipping the template streamlines feeding a whole Projects/
            // tree on the command line.
            tracing::debug!("Skipping template page: {}", filepath.display());
            continue;
        }

        let metadata = match pages::parse_project_page(filepath) {
            Ok(metadata) => metadata,
            Err(e) => {
                // Name the failing file, then abort the whole run.
                println!("Failed to process {}", filepath.display());
                return Err(e.into());
            }
        };

        println!("{}", pages::index_entry(&metadata, &directory));
    }

    Ok(())
}
