//! Taxonomy errors

/// Errors raised while validating or naming vocabularies
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TaxonomyError {
    /// Two nodes share an id
    #[error("duplicate option id: {id}")]
    DuplicateId {
        /// The colliding id
        id: String,
    },

    /// A node has an empty id
    #[error("option '{label}' has an empty id")]
    EmptyId {
        /// Label of the offending node
        label: String,
    },

    /// Lower bound exceeds upper bound
    #[error("option '{id}' declares min {min} greater than max {max}")]
    InvertedBounds {
        /// Offending option
        id: String,
        /// Declared lower bound
        min: f64,
        /// Declared upper bound
        max: f64,
    },

    /// A bound is NaN or infinite
    #[error("option '{id}' declares a non-finite bound")]
    NonFiniteBound {
        /// Offending option
        id: String,
    },

    /// No built-in vocabulary with this name
    #[error("unknown taxonomy: {0}")]
    UnknownTaxonomy(String),
}
