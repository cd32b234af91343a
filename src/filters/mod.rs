//! Course filtering
//!
//! Derives the option lists offered for each filterable field and narrows a
//! catalog to the courses matching the current selections.
//!
//! # Examples
//!
//! ```
//! use coursecat::catalog::parse_catalog;
//! use coursecat::filters::{FilterCriteria, FilterField, apply_filters, compute_filter_options};
//!
//! let courses = parse_catalog(r#"[
//!     {"id": "CS101", "department": "CS", "level": 100},
//!     {"id": "CS201", "department": "CS", "level": 200}
//! ]"#).unwrap();
//!
//! let options = compute_filter_options(&courses);
//! assert_eq!(options.values(FilterField::Level), ["100", "200"]);
//!
//! let criteria = FilterCriteria::new().with(FilterField::Level, "200");
//! let filtered = apply_filters(&courses, &criteria);
//! assert_eq!(filtered[0].id, "CS201");
//! ```

pub mod operations;
pub mod types;

pub use operations::{apply_filters, compute_filter_options};
pub use types::{FilterCriteria, FilterField, FilterOptions};
