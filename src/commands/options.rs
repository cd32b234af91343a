//! Options command - print the distinct values of every filter

use crate::{catalog, filters::{compute_filter_options, FilterField}, output, CatalogError};
use std::path::Path;

type Result<T> = std::result::Result<T, CatalogError>;

/// Execute the options command
///
/// # Errors
/// Returns an error if the catalog cannot be read or parsed
pub fn execute(file: &Path, quiet: bool) -> Result<()> {
    let courses = catalog::read_catalog(file)?;
    let options = compute_filter_options(&courses);

    let sections: Vec<String> = FilterField::ALL
        .iter()
        .map(|field| output::field_options(*field, &options, quiet))
        .collect();
    println!("{}", sections.join(if quiet { "\n" } else { "\n\n" }));
    Ok(())
}
