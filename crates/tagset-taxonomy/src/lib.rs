//! Tagset Taxonomy
//!
//! Curated, hierarchical vocabularies used to annotate records with
//! structured tags instead of free text.
//!
//! # Overview
//!
//! The taxonomy layer provides:
//! - **TagOption**: an immutable option node, optionally carrying a
//!   [`NumericSpec`] and ordered children
//! - **TaxonomyKind**: the two built-in vocabularies (subject, trial)
//! - **flatten**: pre-order, depth-annotated flattening of a forest
//! - **validate_forest**: id uniqueness and numeric bound checks
//!
//! # Example
//!
//! ```rust
//! use tagset_taxonomy::{flatten, TaxonomyKind};
//!
//! let options = flatten(TaxonomyKind::Subject.options());
//! let age = options.find("age").unwrap();
//!
//! assert_eq!(age.level, 1);
//! assert_eq!(age.numeric.as_ref().unwrap().units, "years");
//! ```

#![warn(missing_docs)]

pub mod builtin;
pub mod error;
pub mod flatten;
pub mod option;
pub mod validation;

// Re-exports
pub use builtin::{subject_options, trial_options, TaxonomyKind};
pub use error::TaxonomyError;
pub use flatten::{flatten, FlatOption, FlatOptions};
pub use option::{NumericSpec, TagOption};
pub use validation::{count_nodes, validate_forest};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for taxonomy operations
    pub use crate::{
        flatten, validate_forest, FlatOption, FlatOptions, NumericSpec, TagOption, TaxonomyError,
        TaxonomyKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
