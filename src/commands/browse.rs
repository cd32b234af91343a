//! Browse command - interactive catalog browser

use crate::{CatalogError, ui::CatalogBrowser, view::CatalogView};
use std::path::Path;

type Result<T> = std::result::Result<T, CatalogError>;

/// Execute the browse command
///
/// With no file the browser starts empty and a catalog can be opened from
/// inside it.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal cannot be driven
pub fn execute(file: Option<&Path>) -> Result<()> {
    let mut view = CatalogView::new();
    tracing::info!(file = ?file, "starting browser");
    CatalogBrowser::new().run(&mut view, file)?;
    tracing::info!(courses = view.courses().len(), "browser closed");
    Ok(())
}
