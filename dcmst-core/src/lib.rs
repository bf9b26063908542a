//! Degree-constrained minimum spanning trees.
//!
//! Builds a spanning tree of a weighted undirected graph in which no vertex
//! has more than a configured number of incident tree edges, using greedy
//! adaptations of Prim's and Kruskal's algorithms. Both constructions report
//! [`MstError::InfeasibleConstraint`] when the cap blocks every remaining
//! candidate.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod dcmst;
mod error;
mod graph;
mod mst;

pub use crate::{
    builder::DcmstBuilder,
    dcmst::Dcmst,
    error::{ErrorKind, MstError, MstErrorCode, Result},
    graph::{AdjacencyMatrix, Edge, Graph, Weight, build_adjacency},
    mst::{
        Algorithm, DisjointSet, SpanningForest, SpanningTree, TreeEdge, boruvka,
        kruskal_constrained, prim_constrained,
    },
};
