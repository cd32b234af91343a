//! coursecat CLI application entry point
//!
//! Opens a JSON course catalog in an interactive terminal browser, or prints
//! listings, filter options and course details for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Browse a catalog (default command)
//! coursecat courses.json
//! coursecat browse courses.json
//!
//! # Print 100-level Computer Science courses, newest term first
//! coursecat list courses.json -d "Computer Science" -l 100 -s semester-desc
//!
//! # Print the values each filter offers
//! coursecat options courses.json
//!
//! # Print one course
//! coursecat show courses.json CS101
//!
//! # Quiet mode (only output results)
//! coursecat -q list courses.json
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/coursecat/config.toml` on Linux) and can be overridden with
//! `COURSECAT_*` environment variables.

use coursecat::{
    CatalogError,
    cli::{Cli, Commands},
    commands,
    config::CatalogConfig,
    logging,
};

type Result<T> = std::result::Result<T, CatalogError>;

fn main() -> Result<()> {
    let config = CatalogConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    // Logging is best effort; the guard must outlive every command.
    let _log_guard = config
        .log_file
        .clone()
        .or_else(logging::default_log_path)
        .and_then(|path| match logging::init(&path) {
            Ok(guard) => Some(guard),
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: logging disabled ({}): {e}", path.display());
                }
                None
            }
        });

    let command = cli.get_command();
    tracing::debug!(?command, "dispatching");

    match command {
        Commands::Browse { file } => {
            let file = config.resolve_file(file);
            commands::browse(file.as_deref())?;
        }
        Commands::List { file, filters, sort } => {
            let sort = config.resolve_sort(sort);
            commands::list(&file, &filters.criteria(), sort, quiet)?;
        }
        Commands::Options { file } => {
            commands::options(&file, quiet)?;
        }
        Commands::Show { file, id } => {
            commands::show(&file, &id)?;
        }
        Commands::Config { command } => {
            commands::config(config, &command, quiet)?;
        }
    }

    Ok(())
}
