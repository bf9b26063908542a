//! Per-vertex degree bookkeeping for the tree under construction.

/// Tracks how many accepted tree edges touch each vertex.
///
/// Counters only grow, and [`DegreeCounter::attach`] is only called after
/// [`DegreeCounter::has_room`] succeeds, so no counter ever exceeds the cap.
#[derive(Clone, Debug)]
pub(super) struct DegreeCounter {
    degrees: Vec<usize>,
    max_degree: usize,
}

impl DegreeCounter {
    pub(super) fn new(vertex_count: usize, max_degree: usize) -> Self {
        Self {
            degrees: vec![0; vertex_count],
            max_degree,
        }
    }

    /// Returns `true` when both endpoints are still below the cap.
    pub(super) fn has_room(&self, source: usize, target: usize) -> bool {
        self.degrees[source] < self.max_degree && self.degrees[target] < self.max_degree
    }

    pub(super) fn attach(&mut self, source: usize, target: usize) {
        self.degrees[source] += 1;
        self.degrees[target] += 1;
    }

    #[cfg(test)]
    pub(super) fn degree(&self, vertex: usize) -> usize {
        self.degrees[vertex]
    }
}
