use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Vocabulary struct
/// Manages the fixed, ordered set of distinct terms that defines the
/// feature space. Terms keep the position of their first occurrence in
/// the list the vocabulary was built from; later duplicates are skipped
/// and never re-indexed. Matching is exact and case-sensitive.
///
/// Once built, a vocabulary is never mutated, so it can be shared
/// read-only by any number of vectorizers and threads.
///
/// # Examples
/// ```
/// use bag_vectorizer::Vocabulary;
/// let vocab = Vocabulary::from_terms(&["crane", "sparrow", "crane"]);
///
/// assert_eq!(vocab.len(), 2);
/// assert_eq!(vocab.index_of("sparrow"), Some(1));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

/// Construction
impl Vocabulary {
    /// Create an empty vocabulary
    /// Any vectorizer built on it produces zero-length vectors
    pub fn new() -> Self {
        Vocabulary {
            terms: IndexSet::new(),
        }
    }

    /// Build a vocabulary from a list of terms
    /// The list may be empty and may contain duplicates; the first
    /// occurrence of a term wins its index.
    ///
    /// # Arguments
    /// * `terms` - Slice of terms, in the order that assigns indices
    pub fn from_terms<T>(terms: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        terms.iter().map(|t| t.as_ref()).collect()
    }
}

impl<S> FromIterator<S> for Vocabulary
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut terms: IndexSet<Box<str>> = IndexSet::new();
        let mut seen = 0usize;
        for term in iter {
            terms.insert(term.as_ref().into());
            seen += 1;
        }
        debug!(input_terms = seen, distinct = terms.len(), "vocabulary built");
        Vocabulary { terms }
    }
}

/// Lookup and introspection
impl Vocabulary {
    /// Get the index of a term
    ///
    /// # Arguments
    /// * `term` - term to look up
    ///
    /// # Returns
    /// * `Option<usize>` - zero-based index, or None if out of vocabulary
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Get the term at an index
    ///
    /// # Arguments
    /// * `index` - zero-based index
    ///
    /// # Returns
    /// * `Option<&str>` - the term, or None if the index is out of range
    #[inline]
    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    /// Check whether a term exists in the vocabulary
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Get the number of distinct terms
    /// Equals the length of every vector produced over this vocabulary
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the vocabulary is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms in index order
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}
