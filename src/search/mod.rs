//! Search algorithms for the graph coloring problem.

/// ANTCOL ant colony optimization
pub mod antcol;
