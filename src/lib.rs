/// This crate is a bag-of-features vectorizer.
pub mod vectorizer;
pub mod error;

/// Bag-of-features Vectorizer
/// The top-level struct of this crate. It converts a variable-length
/// sequence of already-split tokens into a fixed-length vector of
/// occurrence counts, indexed by a predefined vocabulary.
///
/// Internally, it holds:
/// - The vocabulary defining the feature space
///
/// `apply` is pure and takes `&self` only, so one instance can serve
/// any number of threads concurrently. Out-of-vocabulary tokens are
/// ignored; they never change the output length and never error.
///
/// The count element type is generic over `num::Num` (e.g. f32, f64,
/// u32), defaulting to `f64`.
///
/// # Serialization
/// Supported via serde derive. The vocabulary is included.
pub use vectorizer::BagVectorizer;

/// Vocabulary for the Vectorizer
/// The fixed, deduplicated, ordered set of terms that defines the
/// feature space. It manages:
/// - The distinct terms, in first-occurrence order
/// - The mapping from each term to its zero-based index
///
/// Built once from a caller-supplied term list (duplicates skipped,
/// first occurrence wins the index) and immutable thereafter, so it can
/// be cloned into, or referenced by, multiple vectorizers.
///
/// # Thread Safety
/// Read-only after construction; safe to share between threads.
pub use vectorizer::vocabulary::Vocabulary;

/// Feature Vector produced by `apply`
/// One count per vocabulary term, in vocabulary index order. Owned by
/// the caller; no state is shared between calls.
pub use vectorizer::FeatureVector;

/// Error type of this crate
/// The computation is total over well-formed inputs; the only variant,
/// `InvalidArgument`, reports a malformed argument such as a reused
/// output buffer of the wrong length.
pub use error::VectorizerError;
