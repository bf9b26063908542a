//! Graph model and dense adjacency construction.
//!
//! Vertices are plain indices in `[0, vertex_count)`. Edges are undirected
//! triples validated once on entry so the algorithms can index freely.

use crate::error::{MstError, Result};

/// Edge weight type. Valid weights are finite and non-negative.
pub type Weight = f64;

/// An undirected weighted edge as supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use dcmst_core::Edge;
    ///
    /// let edge = Edge::new(0, 1, 2.5);
    /// assert_eq!(edge.endpoints(), (0, 1));
    /// assert_eq!(edge.weight(), 2.5);
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns both endpoints in input order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (usize, usize) { (self.source, self.target) }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, target, weight)
    }
}

fn validate_edge(edge: &Edge, vertex_count: usize) -> Result<()> {
    for vertex in [edge.source, edge.target] {
        if vertex >= vertex_count {
            return Err(MstError::InvalidVertex {
                vertex,
                vertex_count,
            });
        }
    }

    if !edge.weight.is_finite() {
        return Err(MstError::NonFiniteWeight {
            left: edge.source,
            right: edge.target,
        });
    }
    if edge.weight < 0.0 {
        return Err(MstError::NegativeWeight {
            left: edge.source,
            right: edge.target,
        });
    }
    Ok(())
}

/// Checks the vertex count and every edge against it.
pub(crate) fn validate_edges(vertex_count: usize, edges: &[Edge]) -> Result<()> {
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }
    edges
        .iter()
        .try_for_each(|edge| validate_edge(edge, vertex_count))
}

/// A validated undirected graph.
///
/// Self-loops and parallel edges are kept as given; the algorithms never
/// select a self-loop because both endpoints always share a component.
///
/// # Examples
/// ```
/// use dcmst_core::{Graph, MstError};
///
/// let graph = Graph::from_triples(3, &[(0, 1, 1.0), (1, 2, 2.0)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
///
/// let err = Graph::from_triples(2, &[(0, 2, 1.0)]).expect_err("vertex 2 is out of range");
/// assert!(matches!(err, MstError::InvalidVertex { vertex: 2, vertex_count: 2 }));
/// # Ok::<(), MstError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Validates and stores a graph.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when `vertex_count == 0`,
    /// [`MstError::InvalidVertex`] when an endpoint is out of range, and
    /// [`MstError::NonFiniteWeight`] or [`MstError::NegativeWeight`] for
    /// unusable weights.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self> {
        validate_edges(vertex_count, &edges)?;
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Validates and stores a graph given as `(source, target, weight)`
    /// triples.
    ///
    /// # Errors
    /// Same as [`Graph::new`].
    pub fn from_triples(vertex_count: usize, triples: &[(usize, usize, Weight)]) -> Result<Self> {
        Self::new(vertex_count, triples.iter().copied().map(Edge::from).collect())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Builds the dense adjacency matrix for this graph.
    #[must_use]
    pub fn adjacency(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_validated(self.vertex_count, &self.edges)
    }
}

/// Dense symmetric `V × V` weight matrix.
///
/// Absent edges are `None`, so a zero weight stays distinguishable from "no
/// edge". When the input holds parallel edges the later one wins.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    cells: Vec<Option<Weight>>,
}

impl AdjacencyMatrix {
    fn from_validated(vertex_count: usize, edges: &[Edge]) -> Self {
        let mut cells = vec![None; vertex_count.saturating_mul(vertex_count)];
        for edge in edges {
            let (source, target) = edge.endpoints();
            cells[source * vertex_count + target] = Some(edge.weight);
            cells[target * vertex_count + source] = Some(edge.weight);
        }
        Self {
            vertex_count,
            cells,
        }
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the weight stored between `row` and `column`, if any.
    ///
    /// Out-of-range coordinates read as absent.
    #[must_use]
    pub fn weight(&self, row: usize, column: usize) -> Option<Weight> {
        if row >= self.vertex_count || column >= self.vertex_count {
            return None;
        }
        self.cells
            .get(row * self.vertex_count + column)
            .copied()
            .flatten()
    }

    /// Iterates `(neighbour, weight)` pairs of `vertex` in ascending
    /// neighbour order.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let row = vertex
            .checked_mul(self.vertex_count)
            .and_then(|start| self.cells.get(start..start.saturating_add(self.vertex_count)))
            .unwrap_or(&[]);
        row.iter()
            .enumerate()
            .filter_map(|(column, cell)| cell.map(|weight| (column, weight)))
    }
}

/// Builds a dense adjacency matrix from an edge list.
///
/// # Errors
/// Fails with the same input errors as [`Graph::new`].
///
/// # Examples
/// ```
/// use dcmst_core::{Edge, build_adjacency};
///
/// let matrix = build_adjacency(3, &[Edge::new(0, 2, 0.0)])?;
/// assert_eq!(matrix.weight(2, 0), Some(0.0));
/// assert_eq!(matrix.weight(0, 1), None);
/// # Ok::<(), dcmst_core::MstError>(())
/// ```
pub fn build_adjacency(vertex_count: usize, edges: &[Edge]) -> Result<AdjacencyMatrix> {
    validate_edges(vertex_count, edges)?;
    Ok(AdjacencyMatrix::from_validated(vertex_count, edges))
}
