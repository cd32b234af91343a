//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for coursecat using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal browser (default)
//! - **list**: Print the filtered and sorted listing
//! - **options**: Print the distinct values of every filter
//! - **show**: Print the details of a course
//! - **config**: Inspect or change the configuration
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use coursecat::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["coursecat", "list", "courses.json", "--level", "100"]);
//! assert!(matches!(cli.get_command(), Commands::List { .. }));
//! ```

use crate::filters::FilterCriteria;
use crate::sort::SortKey;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filter selections shared by commands that list courses
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Only courses of this department (exact match)
    #[arg(short = 'd', long = "department", value_name = "DEPARTMENT")]
    pub department: Option<String>,

    /// Only courses of this level (`100` matches both 100 and "100")
    #[arg(short = 'l', long = "level", value_name = "LEVEL")]
    pub level: Option<String>,

    /// Only courses worth this many credits
    #[arg(short = 'c', long = "credits", value_name = "CREDITS")]
    pub credits: Option<String>,

    /// Only courses taught by this instructor (exact match)
    #[arg(short = 'i', long = "instructor", value_name = "INSTRUCTOR")]
    pub instructor: Option<String>,
}

impl FilterArgs {
    /// Convert the flags into filter criteria
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            department: self.department.clone().filter(|v| !v.is_empty()),
            level: self.level.clone().filter(|v| !v.is_empty()),
            credits: self.credits.clone().filter(|v| !v.is_empty()),
            instructor: self.instructor.clone().filter(|v| !v.is_empty()),
        }
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,

    /// Set the catalog opened when no file is given
    #[command(name = "set-default-file")]
    SetDefaultFile {
        /// Catalog file; omit to clear the default
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Set the sort key `list` uses without `--sort`
    #[command(name = "set-default-sort")]
    SetDefaultSort {
        /// One of none, id-asc, id-desc, title-asc, title-desc, semester-asc, semester-desc
        #[arg(value_name = "KEY", value_parser = parse_sort_key)]
        key: SortKey,
    },
}

#[derive(Parser, Debug)]
#[command(name = "coursecat")]
#[command(about = "Browse a course catalog stored as JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog to open in the browser when no command is given
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser
    #[command(visible_alias = "b")]
    Browse {
        /// Catalog file (defaults to the configured default file)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Print the filtered, sorted course listing
    #[command(visible_alias = "ls")]
    List {
        /// Catalog file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Sort order (defaults to the configured default sort)
        #[arg(short = 's', long = "sort", value_name = "KEY", value_parser = parse_sort_key)]
        sort: Option<SortKey>,
    },

    /// Print the distinct values offered by each filter
    #[command(visible_alias = "o")]
    Options {
        /// Catalog file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the details of every course with the given identifier
    Show {
        /// Catalog file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Course identifier
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Parse a sort key name, rejecting unknown names
///
/// # Errors
///
/// Returns a message listing the valid names.
pub fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    SortKey::ALL
        .into_iter()
        .find(|key| key.as_str() == value)
        .ok_or_else(|| {
            let names: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
            format!("unknown sort key '{value}' (expected one of: {})", names.join(", "))
        })
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Browse {
            file: self.file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_browse() {
        let cli = Cli::parse_from(["coursecat"]);
        assert_eq!(cli.get_command(), Commands::Browse { file: None });
    }

    #[test]
    fn test_bare_file_opens_browser() {
        let cli = Cli::parse_from(["coursecat", "courses.json"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                file: Some(PathBuf::from("courses.json"))
            }
        );
    }

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::parse_from([
            "coursecat",
            "-q",
            "list",
            "courses.json",
            "--department",
            "Mathematics",
            "-l",
            "100",
            "--sort",
            "title-desc",
        ]);
        assert!(cli.quiet);
        let Some(Commands::List { file, filters, sort }) = cli.command else {
            panic!("Expected List command");
        };
        assert_eq!(file, PathBuf::from("courses.json"));
        assert_eq!(sort, Some(SortKey::TitleDesc));

        let criteria = filters.criteria();
        assert_eq!(criteria.department.as_deref(), Some("Mathematics"));
        assert_eq!(criteria.level.as_deref(), Some("100"));
        assert!(criteria.credits.is_none());
    }

    #[test]
    fn test_empty_filter_means_all() {
        let cli = Cli::parse_from(["coursecat", "list", "c.json", "--instructor", ""]);
        let Some(Commands::List { filters, .. }) = cli.command else {
            panic!("Expected List command");
        };
        assert!(filters.criteria().is_unset());
    }

    #[test]
    fn test_unknown_sort_rejected() {
        let result = Cli::try_parse_from(["coursecat", "list", "c.json", "--sort", "price"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["coursecat", "show", "c.json", "CS101"]);
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                file: PathBuf::from("c.json"),
                id: "CS101".into()
            })
        );
    }

    #[test]
    fn test_parse_config_commands() {
        let cli = Cli::parse_from(["coursecat", "config", "set-default-sort", "semester-asc"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::SetDefaultSort {
                    key: SortKey::SemesterAsc
                }
            })
        );

        let cli = Cli::parse_from(["coursecat", "config", "set-default-file"]);
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::SetDefaultFile { file: None }
            })
        );
    }
}
