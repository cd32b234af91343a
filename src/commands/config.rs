//! Config command - inspect and change the configuration

use crate::{cli::ConfigCommands, config::CatalogConfig, CatalogError};

type Result<T> = std::result::Result<T, CatalogError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error if the configuration cannot be located, serialized or saved
pub fn execute(mut config: CatalogConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", CatalogConfig::config_path()?.display());
        }
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| CatalogError::InvalidInput(format!("Failed to serialize config: {e}")))?;
            print!("{text}");
        }
        ConfigCommands::SetDefaultFile { file } => {
            config.default_file.clone_from(file);
            config.save()?;
            if !quiet {
                match file {
                    Some(path) => println!("Default file set to {}", path.display()),
                    None => println!("Default file cleared"),
                }
            }
        }
        ConfigCommands::SetDefaultSort { key } => {
            config.default_sort = *key;
            config.save()?;
            if !quiet {
                println!("Default sort set to {key}");
            }
        }
    }
    Ok(())
}
