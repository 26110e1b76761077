use std::fmt::Debug;

use bit_set::BitSet;

use crate::error::Error;

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a graph coloring problem
(represented as a partition). The class at index c uses the color id c+1.
*/
pub type Solution = Vec<Vec<VertexId>>;

/** graph collaborator used by the colony. Read-only: the colony never mutates it,
colors live in the private state of each ant.
*/
pub trait ColoringInstance: Debug + Sync {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// iterates over the vertex ids (0..n)
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// list of vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// degree of u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// returns true iff u and v are adjacent
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list (u < v)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// logs statistics of the instance
    fn display_statistics(&self);

    /** writes a solution into a file. each line corresponds to a color. */
    fn write_solution(&self, filename:&str, solution:&[Vec<VertexId>]) -> Result<(), Error> {
        std::fs::write(filename, solution_to_string(solution))
            .map_err(|e| Error::io(filename, e))
    }
}

/** writes a string encoding the solution (use this to export the solution) */
pub fn solution_to_string(solution:&[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for e in solution {
        for v in e {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}


/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible, uses the given number of colors
    Ok(usize),
    /// vertex present in two classes (or twice in the same class)
    DuplicateVertex(VertexId),
    /// vertex id larger than the instance
    UnknownVertex(VertexId),
    /// some vertex is not colored
    MissingVertex(VertexId),
    /// the two vertices are adjacent and share a color
    Conflict(VertexId, VertexId),
    /// some color class is empty
    EmptyClass(usize),
}

/**
checks that a partition is a proper coloring of the instance.
returns the number of colors if it is the case.
*/
pub fn checker(inst:&dyn ColoringInstance, sol:&[Vec<VertexId>]) -> CheckerResult {
    let n = inst.nb_vertices();
    // check that all vertices are added exactly once
    let mut visited = BitSet::with_capacity(n);
    for (c, class) in sol.iter().enumerate() {
        if class.is_empty() { return CheckerResult::EmptyClass(c); }
        for v in class {
            if *v >= n { return CheckerResult::UnknownVertex(*v); }
            if !visited.insert(*v) { return CheckerResult::DuplicateVertex(*v); }
        }
    }
    if let Some(v) = inst.vertices().find(|v| !visited.contains(*v)) {
        return CheckerResult::MissingVertex(v);
    }
    // check conflicts
    for class in sol {
        for (i, v1) in class.iter().enumerate() {
            for v2 in &class[i+1..] {
                if inst.are_adjacent(*v1, *v2) {
                    return CheckerResult::Conflict(*v1, *v2);
                }
            }
        }
    }
    CheckerResult::Ok(sol.len())
}

/** converts a partition into a vertex -> color mapping (colors start at 1, 0 means uncolored) */
pub fn solution_to_colors(n:usize, sol:&[Vec<VertexId>]) -> Vec<usize> {
    let mut colors = vec![0 ; n];
    for (c, class) in sol.iter().enumerate() {
        for v in class {
            colors[*v] = c+1;
        }
    }
    colors
}

/** counts the (unordered) adjacent pairs sharing the same color.
Uncolored vertices (color 0) are never in conflict.
*/
pub fn count_conflicts(inst:&dyn ColoringInstance, colors:&[usize]) -> usize {
    inst.edges().iter()
        .filter(|(u,v)| colors[*u] != 0 && colors[*u] == colors[*v])
        .count()
}
