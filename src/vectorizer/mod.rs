pub mod vocabulary;

use num::Num;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VectorizerError};
use crate::vectorizer::vocabulary::Vocabulary;

/// One count per vocabulary term, in vocabulary index order.
/// Created fresh per call and owned by the caller. Counts default to
/// `f64` so callers can reweight them later without conversion.
pub type FeatureVector<N = f64> = Vec<N>;

/// BagVectorizer struct
/// Converts a token sequence into a fixed-length vector of occurrence
/// counts over an immutable [`Vocabulary`]. Tokens outside the
/// vocabulary contribute nothing and are not an error.
///
/// `apply` is a pure function: it never mutates the vocabulary and
/// retains no input, so a `BagVectorizer` can be shared across threads
/// without synchronization.
///
/// # Examples
/// ```
/// use bag_vectorizer::BagVectorizer;
/// let bag = BagVectorizer::from_terms(&["crane", "sparrow", "hawk"]);
/// let vec: Vec<f64> = bag.apply(&["a", "crane", "and", "a", "sparrow"]);
///
/// assert_eq!(vec, vec![1.0, 1.0, 0.0]);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BagVectorizer {
    vocabulary: Vocabulary,
}

/// Construction
impl BagVectorizer {
    /// Create a vectorizer over an already-built vocabulary
    pub fn new(vocabulary: Vocabulary) -> Self {
        BagVectorizer { vocabulary }
    }

    /// Build the vocabulary and the vectorizer in one step
    /// Duplicate terms are deduplicated, first occurrence winning the index
    ///
    /// # Arguments
    /// * `terms` - Slice of vocabulary terms, in index order
    pub fn from_terms<T>(terms: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self::new(Vocabulary::from_terms(terms))
    }

    /// Get the vocabulary this vectorizer counts against
    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the vocabulary size, which is also the output vector length
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Vectorization
impl BagVectorizer {
    /// Count the vocabulary-term occurrences in one document
    /// Out-of-vocabulary tokens (including empty strings) are ignored;
    /// token order does not affect the result.
    ///
    /// # Arguments
    /// * `tokens` - Already-split tokens of one document; may be empty
    ///
    /// # Returns
    /// * `FeatureVector<N>` - counts, one per vocabulary term
    #[inline]
    pub fn apply<N, T>(&self, tokens: &[T]) -> FeatureVector<N>
    where
        N: Num + Copy,
        T: AsRef<str>,
    {
        let mut counts = vec![N::zero(); self.vocabulary.len()];
        self.accumulate(tokens, &mut counts);
        counts
    }

    /// Count occurrences into a caller-owned buffer
    /// Overwrites the buffer with zeros before counting, so it can be
    /// reused across documents without reallocating.
    ///
    /// # Arguments
    /// * `tokens` - Already-split tokens of one document
    /// * `out` - Buffer of exactly `vocab_size()` slots
    ///
    /// # Returns
    /// * `Result<()>` - `InvalidArgument` if the buffer length differs
    ///   from the vocabulary size
    pub fn apply_into<N, T>(&self, tokens: &[T], out: &mut [N]) -> Result<()>
    where
        N: Num + Copy,
        T: AsRef<str>,
    {
        if out.len() != self.vocabulary.len() {
            return Err(VectorizerError::InvalidArgument {
                reason: "output buffer length must equal the vocabulary size",
                expected: self.vocabulary.len(),
                actual: out.len(),
            });
        }
        out.fill(N::zero());
        self.accumulate(tokens, out);
        Ok(())
    }

    /// Vectorize a collection of documents in parallel
    ///
    /// # Arguments
    /// * `docs` - Token sequences, one per document
    ///
    /// # Returns
    /// * `Vec<FeatureVector<N>>` - one vector per document, input order kept
    pub fn apply_batch<N, T, D>(&self, docs: &[D]) -> Vec<FeatureVector<N>>
    where
        N: Num + Copy + Send + Sync,
        T: AsRef<str> + Sync,
        D: AsRef<[T]> + Sync,
    {
        debug!(
            num_docs = docs.len(),
            vocab_size = self.vocabulary.len(),
            "batch vectorization"
        );
        docs.par_iter().map(|doc| self.apply(doc.as_ref())).collect()
    }

    #[inline]
    fn accumulate<N, T>(&self, tokens: &[T], counts: &mut [N])
    where
        N: Num + Copy,
        T: AsRef<str>,
    {
        for token in tokens {
            if let Some(index) = self.vocabulary.index_of(token.as_ref()) {
                counts[index] = counts[index] + N::one();
            }
        }
    }
}

impl From<Vocabulary> for BagVectorizer {
    fn from(vocabulary: Vocabulary) -> Self {
        Self::new(vocabulary)
    }
}
