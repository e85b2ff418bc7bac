//! Vocabulary resolution
//!
//! Provides [`VocabularySource`], the construction-time choice between the
//! built-in taxonomies and a caller-supplied flat list, and [`Vocabulary`],
//! that choice resolved once into a single flattened sequence.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tagset_taxonomy::{flatten, FlatOption, FlatOptions, TaxonomyKind};

/// Which vocabulary an editor offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VocabularySource {
    /// One of the built-in taxonomies
    BuiltIn(TaxonomyKind),

    /// Caller-supplied valid ids; each becomes a depth-0 leaf labelled by its id
    Custom(Vec<String>),
}

impl VocabularySource {
    /// Custom flat vocabulary
    #[must_use]
    pub fn custom<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Custom(ids.into_iter().map(Into::into).collect())
    }
}

impl Default for VocabularySource {
    fn default() -> Self {
        Self::BuiltIn(TaxonomyKind::Subject)
    }
}

impl From<TaxonomyKind> for VocabularySource {
    fn from(kind: TaxonomyKind) -> Self {
        Self::BuiltIn(kind)
    }
}

impl Display for VocabularySource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn(kind) => write!(f, "{kind}"),
            Self::Custom(ids) => write!(f, "custom[{}]", ids.len()),
        }
    }
}

/// A resolved vocabulary
///
/// The source is fixed for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    source: VocabularySource,
    options: FlatOptions,
}

impl Vocabulary {
    /// Resolve a source into its flattened sequence
    #[must_use]
    pub fn resolve(source: VocabularySource) -> Self {
        let options = match &source {
            VocabularySource::BuiltIn(kind) => flatten(kind.options()),
            VocabularySource::Custom(ids) => FlatOptions::from_ids(ids.iter().cloned()),
        };
        let duplicates = options.duplicate_ids();
        if !duplicates.is_empty() {
            tracing::warn!("Vocabulary {} repeats ids {:?}; first occurrence wins", source, duplicates);
        }
        tracing::debug!("Resolved vocabulary {} into {} options", source, options.len());
        Self { source, options }
    }

    /// Built-in subject vocabulary
    #[inline]
    #[must_use]
    pub fn subject() -> Self {
        Self::resolve(TaxonomyKind::Subject.into())
    }

    /// Built-in trial vocabulary
    #[inline]
    #[must_use]
    pub fn trial() -> Self {
        Self::resolve(TaxonomyKind::Trial.into())
    }

    /// Custom flat vocabulary
    #[inline]
    #[must_use]
    pub fn custom<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::resolve(VocabularySource::custom(ids))
    }

    /// Where the vocabulary came from
    #[inline]
    #[must_use]
    pub fn source(&self) -> &VocabularySource {
        &self.source
    }

    /// Flattened options
    #[inline]
    #[must_use]
    pub fn options(&self) -> &FlatOptions {
        &self.options
    }

    /// Option with this id
    #[inline]
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&FlatOption> {
        self.options.find(id)
    }
}
