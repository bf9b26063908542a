//! Error types for the degree-constrained MST library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::mst::Algorithm;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Coarse classification of [`MstError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The caller supplied a malformed graph or configuration.
    InvalidInput,
    /// No spanning tree satisfying the degree cap was found.
    InfeasibleConstraint,
}

/// Errors returned while building or running a degree-constrained MST.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// The graph has no vertices.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The out-of-range vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// First endpoint as provided.
        left: usize,
        /// Second endpoint as provided.
        right: usize,
    },
    /// An edge carried a weight below zero.
    #[error("edge ({left}, {right}) has negative weight")]
    NegativeWeight {
        /// First endpoint as provided.
        left: usize,
        /// Second endpoint as provided.
        right: usize,
    },
    /// The configured degree cap was zero.
    #[error("max_degree must be at least 1 (got {got})")]
    InvalidMaxDegree {
        /// The rejected degree cap.
        got: usize,
    },
    /// The greedy construction could not connect every vertex under the cap.
    #[error(
        "{algorithm} accepted {accepted} of {required} edges before the degree cap {max_degree} blocked every candidate"
    )]
    InfeasibleConstraint {
        /// Algorithm that gave up.
        algorithm: Algorithm,
        /// Degree cap in force.
        max_degree: usize,
        /// Number of edges accepted before giving up.
        accepted: usize,
        /// Number of edges a spanning tree needs (`vertex_count - 1`).
        required: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "DCMST_EMPTY_GRAPH",
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "DCMST_INVALID_VERTEX",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "DCMST_NON_FINITE_WEIGHT",
        /// An edge carried a weight below zero.
        NegativeWeight => NegativeWeight { .. } => "DCMST_NEGATIVE_WEIGHT",
        /// The configured degree cap was zero.
        InvalidMaxDegree => InvalidMaxDegree { .. } => "DCMST_INVALID_MAX_DEGREE",
        /// No spanning tree satisfying the degree cap was found.
        InfeasibleConstraint => InfeasibleConstraint { .. } => "DCMST_INFEASIBLE_CONSTRAINT",
    }
}

impl MstError {
    /// Returns whether the error stems from bad input or from the degree cap.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InfeasibleConstraint { .. } => ErrorKind::InfeasibleConstraint,
            Self::EmptyGraph
            | Self::InvalidVertex { .. }
            | Self::NonFiniteWeight { .. }
            | Self::NegativeWeight { .. }
            | Self::InvalidMaxDegree { .. } => ErrorKind::InvalidInput,
        }
    }

    /// Returns `true` when the error reports an infeasible degree cap.
    #[must_use]
    pub const fn is_infeasible(&self) -> bool {
        matches!(self.kind(), ErrorKind::InfeasibleConstraint)
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
