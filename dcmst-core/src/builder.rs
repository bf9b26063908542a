//! Builder for configuring degree-constrained MST runs.
//!
//! Validates the degree cap before constructing [`Dcmst`] instances.

use std::num::NonZeroUsize;

use crate::{Result, dcmst::Dcmst, error::MstError, mst::Algorithm};

/// Degree cap applied when none is configured.
const DEFAULT_MAX_DEGREE: usize = 3;

/// Configures and constructs [`Dcmst`] instances.
///
/// # Examples
/// ```
/// use dcmst_core::{Algorithm, DcmstBuilder};
///
/// let dcmst = DcmstBuilder::new()
///     .with_max_degree(2)
///     .with_algorithm(Algorithm::Kruskal)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(dcmst.max_degree().get(), 2);
/// assert_eq!(dcmst.algorithm(), Algorithm::Kruskal);
/// ```
#[derive(Debug, Clone)]
pub struct DcmstBuilder {
    max_degree: usize,
    algorithm: Algorithm,
}

impl Default for DcmstBuilder {
    fn default() -> Self {
        Self {
            max_degree: DEFAULT_MAX_DEGREE,
            algorithm: Algorithm::Prim,
        }
    }
}

impl DcmstBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use dcmst_core::{Algorithm, DcmstBuilder};
    ///
    /// let builder = DcmstBuilder::new();
    /// assert_eq!(builder.max_degree(), 3);
    /// assert_eq!(builder.algorithm(), Algorithm::Prim);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the maximum vertex degree.
    #[must_use]
    pub fn with_max_degree(mut self, max_degree: usize) -> Self {
        self.max_degree = max_degree;
        self
    }

    /// Returns the configured maximum vertex degree.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Selects the construction used by [`Dcmst::run`].
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configured construction.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Validates the configuration and constructs a [`Dcmst`] instance.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidMaxDegree`] when the degree cap is zero.
    ///
    /// # Examples
    /// ```
    /// use dcmst_core::{DcmstBuilder, MstError};
    ///
    /// let err = DcmstBuilder::new().with_max_degree(0).build().expect_err("zero cap");
    /// assert_eq!(err, MstError::InvalidMaxDegree { got: 0 });
    /// ```
    pub fn build(self) -> Result<Dcmst> {
        let max_degree = NonZeroUsize::new(self.max_degree).ok_or(MstError::InvalidMaxDegree {
            got: self.max_degree,
        })?;

        Ok(Dcmst::new(max_degree, self.algorithm))
    }
}
