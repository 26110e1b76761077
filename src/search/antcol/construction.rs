use bit_set::BitSet;
use fastrand::Rng;

use crate::color::{ColoringInstance, Solution, VertexId};
use crate::error::Error;
use super::color_class::ColoringState;
use super::feasibility::{blocked_set, feasible_set};
use super::selection::{roulette_select, selection_probabilities};
use super::trail::TrailMatrix;

/** one ant of the colony. Builds a proper coloring one color class at a time:
    1. open a new class and seed it with an uncolored vertex chosen uniformly at random
    2. while some uncolored vertex can join the class (F not empty), add one of them,
       chosen with probability P(i,C) (trail and visibility)
    3. repeat until every vertex is colored

The ant only reads the instance and the trail. Its coloring is private.
*/
#[derive(Debug)]
pub struct Ant<'a> {
    /// reference instance
    inst: &'a dyn ColoringInstance,
    /// trail of the current cycle
    trail: &'a TrailMatrix,
    /// trail exponent
    alpha: f64,
    /// visibility exponent
    beta: f64,
    /// random number generator
    rng: Rng,
    /// partial coloring (the X set is its set of uncolored vertices)
    state: ColoringState,
    /// F: uncolored vertices that can still join the class under construction
    feasible: BitSet,
}

impl<'a> Ant<'a> {
    /// creates an ant with an empty coloring
    pub fn new(inst:&'a dyn ColoringInstance, trail:&'a TrailMatrix, alpha:f64, beta:f64, seed:u64) -> Self {
        Self {
            inst, trail, alpha, beta,
            rng: Rng::with_seed(seed),
            state: ColoringState::new(inst.nb_vertices()),
            feasible: BitSet::default(),
        }
    }

    /// partial coloring built so far
    pub fn state(&self) -> &ColoringState { &self.state }

    /// |X|: number of uncolored vertices
    pub fn nb_uncolored(&self) -> usize { self.state.uncolored().len() }

    /// |F|: number of vertices that can still join the class under construction
    pub fn nb_feasible(&self) -> usize { self.feasible.len() }

    /// true iff every vertex is colored
    pub fn is_finished(&self) -> bool { self.state.is_complete() }

    /** opens a new color class (F = X) and seeds it with a vertex of F chosen with
    probability 1/|F|. Returns the seed.
    */
    pub fn open_class(&mut self) -> Result<VertexId, Error> {
        let color = self.state.open_class();
        self.feasible = self.state.uncolored().clone();
        let candidates:Vec<(VertexId, f64)> = self.feasible.iter().map(|v| (v, 1.)).collect();
        let seed = roulette_select(&candidates, &mut self.rng)?;
        log::trace!("color {}: seed {} ({} candidates)", color, seed, candidates.len());
        self.color_vertex(seed);
        Ok(seed)
    }

    /** adds to the class under construction a vertex of F, chosen with probability P(i,C).
    Returns the chosen vertex.
    */
    pub fn extend_class(&mut self) -> Result<VertexId, Error> {
        if self.feasible.is_empty() {
            return Err(Error::EmptySelection);
        }
        let class = self.state.current_class().ok_or(Error::EmptySelection)?;
        let w = feasible_set(self.inst, &self.state, class);
        let b = blocked_set(self.inst, &self.state, class);
        debug_assert!(w.iter().eq(self.feasible.iter()));
        let probas = selection_probabilities(
            self.inst, self.trail, class, &w, &b, self.alpha, self.beta, &mut self.rng
        )?;
        let v = roulette_select(&probas, &mut self.rng)?;
        self.color_vertex(v);
        Ok(v)
    }

    /// colors v with the current class, removes it and its neighbors from F
    fn color_vertex(&mut self, v:VertexId) {
        self.state.color_vertex(v);
        self.feasible.remove(v);
        for u in self.inst.neighbors(v) {
            self.feasible.remove(*u);
        }
    }

    /** builds the whole coloring. Each class is extended until F is empty,
    classes are opened until X is empty (at most n classes).
    */
    pub fn run(mut self) -> Result<Solution, Error> {
        while !self.is_finished() {
            self.open_class()?;
            while self.nb_feasible() > 0 {
                self.extend_class()?;
            }
        }
        Ok(self.state.into_solution())
    }
}

/** builds a coloring with a single ant. Deterministic given the seed. */
pub fn construct_coloring(
    inst:&dyn ColoringInstance,
    trail:&TrailMatrix,
    alpha:f64,
    beta:f64,
    seed:u64
) -> Result<Solution, Error> {
    Ant::new(inst, trail, alpha, beta, seed).run()
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::compact_instance::CompactInstance;
    use crate::generator::complete_multipartite;

    fn random_graph(n:usize, density:f64, rng:&mut Rng) -> CompactInstance {
        let mut edges = Vec::new();
        for u in 0..n {
            for v in u+1..n {
                if rng.f64() < density { edges.push((u,v)); }
            }
        }
        CompactInstance::from_edges(n, &edges)
    }

    #[test]
    fn test_proper_on_random_graphs() {
        let mut rng = Rng::with_seed(17);
        for n in 1..30 {
            let inst = random_graph(n, rng.f64(), &mut rng);
            let trail = TrailMatrix::new(n);
            let sol = construct_coloring(&inst, &trail, 1., 0.5, rng.u64(..)).unwrap();
            assert!(sol.len() <= n);
            assert_eq!(checker(&inst, &sol), CheckerResult::Ok(sol.len()));
        }
    }

    #[test]
    fn test_complete_graph() {
        let inst = complete_multipartite(&[1 ; 6]);
        let trail = TrailMatrix::new(6);
        let sol = construct_coloring(&inst, &trail, 1., 1., 0).unwrap();
        assert_eq!(sol.len(), 6);
        assert!(sol.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_complete_bipartite() {
        let inst = complete_multipartite(&[3,3]);
        let trail = TrailMatrix::new(6);
        for seed in 0..20 {
            let sol = construct_coloring(&inst, &trail, 1., 0.5, seed).unwrap();
            assert_eq!(checker(&inst, &sol), CheckerResult::Ok(2));
        }
    }

    #[test]
    fn test_same_seed_same_coloring() {
        let mut rng = Rng::with_seed(2);
        let inst = random_graph(25, 0.3, &mut rng);
        let trail = TrailMatrix::new(25);
        let a = construct_coloring(&inst, &trail, 1., 0.5, 1234).unwrap();
        let b = construct_coloring(&inst, &trail, 1., 0.5, 1234).unwrap();
        assert_eq!(a, b);
    }

    /// |X| decreases at every outer step, |F| at every inner step
    #[test]
    fn test_monotonic_shrinkage() {
        let mut rng = Rng::with_seed(31);
        let inst = random_graph(20, 0.4, &mut rng);
        let trail = TrailMatrix::new(20);
        let mut ant = Ant::new(&inst, &trail, 1., 0.5, 99);
        let mut nb_classes = 0;
        while !ant.is_finished() {
            let x_before = ant.nb_uncolored();
            ant.open_class().unwrap();
            nb_classes += 1;
            assert!(ant.nb_uncolored() < x_before);
            while ant.nb_feasible() > 0 {
                let (x_inner, f_inner) = (ant.nb_uncolored(), ant.nb_feasible());
                ant.extend_class().unwrap();
                assert!(ant.nb_feasible() < f_inner);
                assert_eq!(ant.nb_uncolored(), x_inner - 1);
            }
            assert!(ant.nb_uncolored() < x_before);
        }
        assert_eq!(ant.state().nb_colors(), nb_classes);
        assert!(nb_classes <= 20);
    }

    #[test]
    fn test_extend_without_feasible_vertex() {
        let inst = CompactInstance::from_edges(2, &[(0,1)]);
        let trail = TrailMatrix::new(2);
        let mut ant = Ant::new(&inst, &trail, 1., 1., 0);
        assert!(matches!(ant.extend_class(), Err(Error::EmptySelection)));
        ant.open_class().unwrap();
        assert_eq!(ant.nb_feasible(), 0);
        assert!(matches!(ant.extend_class(), Err(Error::EmptySelection)));
    }
}
