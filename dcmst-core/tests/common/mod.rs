use dcmst_core::Graph;

/// Ten vertices, seventeen edges, with a unique unconstrained MST of weight 48.
#[must_use]
pub fn coursework_graph() -> Graph {
    Graph::from_triples(
        10,
        &[
            (0, 1, 3.0),
            (0, 5, 2.0),
            (1, 2, 17.0),
            (1, 3, 16.0),
            (2, 3, 8.0),
            (2, 8, 18.0),
            (3, 8, 11.0),
            (3, 4, 4.0),
            (4, 5, 1.0),
            (4, 6, 6.0),
            (4, 7, 5.0),
            (4, 8, 10.0),
            (5, 6, 7.0),
            (6, 7, 15.0),
            (7, 8, 12.0),
            (7, 9, 13.0),
            (8, 9, 9.0),
        ],
    )
    .expect("coursework graph is valid")
}

/// A star centred on vertex 0 with a costly rim, which a cap of 1 cannot span.
#[must_use]
pub fn star_graph() -> Graph {
    Graph::from_triples(
        4,
        &[
            (0, 1, 1.0),
            (0, 2, 1.0),
            (0, 3, 1.0),
            (1, 2, 4.0),
            (2, 3, 5.0),
        ],
    )
    .expect("star graph is valid")
}
