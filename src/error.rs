// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for complex construction and homology computation.

/// Result type alias used throughout `ripshom`.
pub type Result<T> = std::result::Result<T, HomologyError>;

/// Errors raised while building complexes or computing homology.
///
/// Every variant other than [`HomologyError::InvalidDimension`],
/// [`HomologyError::InvalidThreshold`] and
/// [`HomologyError::InvalidConfiguration`] signals a defect rather than bad
/// input: the computation is deterministic, so retrying cannot help.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HomologyError {
    /// A homology or simplex-build dimension was requested that the current
    /// complex or point count cannot carry.
    #[error("invalid dimension {dimension}: {reason}")]
    InvalidDimension {
        /// The rejected dimension.
        dimension: usize,
        /// Why the request was rejected.
        reason: String,
    },

    /// The simplices and matrices derived from a complex disagree, e.g. a
    /// negative free rank or a boundary matrix whose shape does not match the
    /// simplex counts it was assembled from.
    #[error("inconsistent complex state: {0}")]
    InconsistentComplexState(String),

    /// An integer entry left the representable range during Smith reduction.
    #[error("arithmetic overflow during matrix reduction at pivot {pivot}")]
    ArithmeticOverflow {
        /// Index of the diagonal position being reduced.
        pivot: usize,
    },

    /// A vertex list that is not strictly increasing was used as a simplex.
    #[error("vertices {0:?} are not strictly increasing")]
    InvalidSimplex(Vec<u32>),

    /// The proximity threshold must be a positive finite number.
    #[error("threshold {0} is not a positive finite number")]
    InvalidThreshold(f64),

    /// A point index does not refer to a point of the collection.
    #[error("point index {index} out of range for {count} points")]
    PointOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of points in the collection.
        count: usize,
    },

    /// A session configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for HomologyError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}
