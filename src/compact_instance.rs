use bit_set::BitSet;

use crate::dimacs::read_from_file;
use crate::color::{ColoringInstance, VertexId};
use crate::error::Error;

/** models a Graph Coloring instance.  */
#[derive(Debug, Clone)]
pub struct CompactInstance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl ColoringInstance for CompactInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        match &self.adj_matrix { // if the matrix representation does not exist, iterate over
            None => { self.adj_list[u].iter().any(|c| &v==c) },
            Some(matrix) => { matrix[u].contains(v) } // otherwise, use it
        }
    }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    fn display_statistics(&self) {
        log::info!("\t{} \t vertices", self.nb_vertices());
        log::info!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|i|{ self.degree(i) }).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            log::info!("\t{} \t min degree", min);
            log::info!("\t{} \t max degree", max);
        }
        if self.adj_matrix.is_some() {
            log::info!("\tadj matrix computed");
        }
    }
}


impl CompactInstance {

    /// returns the number of edges in the graph
    pub fn nb_edges(&self) -> usize { self.m }

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** constructor using an adjacency list (symmetric, without self-loops) */
    pub fn new(adj_list:Vec<Vec<usize>>) -> Self {
        let n = adj_list.len();
        let edges = Self::build_edges(&adj_list);
        let m = edges.len();
        let mut res = Self { n,m, edges, adj_list, adj_matrix:None };
        res.populate_adj_matrix();
        res
    }

    /** constructor using an edge list. Duplicated edges and self-loops are ignored. */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut adj_list = vec![Vec::new() ; n];
        for (u,v) in edges {
            if u != v && !adj_list[*u].contains(v) {
                adj_list[*u].push(*v);
                adj_list[*v].push(*u);
            }
        }
        Self::new(adj_list)
    }

    /// creates an instance from a DIMACS file
    pub fn from_file(filename:&str) -> Result<Self, Error> {
        let (_,_,adj_list) = read_from_file(filename)?;
        Ok(Self::new(adj_list))
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::default(); self.n];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let inst = CompactInstance::from_file("insts/grid2x2.col").unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(0), &[1,2]);
        assert!(inst.are_adjacent(3, 1));
        assert!(!inst.are_adjacent(0, 3));
    }

    #[test]
    fn test_from_edges() {
        let inst = CompactInstance::from_edges(3, &[(0,1), (1,0), (1,2), (2,2)]);
        assert_eq!(inst.nb_edges(), 2);
        assert_eq!(inst.edges(), &[(0,1), (1,2)]);
        assert_eq!(inst.degree(1), 2);
    }

    #[test]
    fn test_read_petersen() {
        let inst = CompactInstance::from_file("insts/petersen.col").unwrap();
        assert_eq!(inst.nb_vertices(), 10);
        assert_eq!(inst.nb_edges(), 15);
        assert!(inst.vertices().all(|v| inst.degree(v) == 3));
    }
}
