//! ANTCOL: ant colony optimization for the graph coloring (Dowsland & Thompson).
//!
//! Every cycle, `nants` ants build a proper coloring each (see [`construction::Ant`]),
//! guided by the trail of the cycle. Their colorings reinforce the pairs of vertices
//! they colored alike (Δ matrix), then the trail is evaporated and reinforced once.

/// trail matrix and its per-cycle update
pub mod trail;

/// color classes and the coloring owned by an ant
pub mod color_class;

/// W/B sets of a color class under construction
pub mod feasibility;

/// visibility rules
pub mod visibility;

/// selection probabilities and roulette-wheel selection
pub mod selection;

/// construction of a coloring by a single ant
pub mod construction;

use std::fs;

use fastrand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::{ColoringInstance, Solution, count_conflicts, solution_to_colors};
use crate::error::Error;
use construction::construct_coloring;
use trail::{TrailMatrix, TrailUpdateMatrix};


/** parameters of the colony */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntColParams {
    /// number of cycles (> 0)
    pub ncycles: usize,
    /// number of ants per cycle (> 0)
    pub nants: usize,
    /// trail exponent (α ≥ 0)
    pub alpha: f64,
    /// visibility exponent (β ≥ 0)
    pub beta: f64,
    /// trail persistence (ρ ∈ [0,1])
    pub rho: f64,
    /// seed of the master random number generator
    pub seed: u64,
    /// if true, the ants of a cycle run in parallel
    pub parallel: bool,
}

impl Default for AntColParams {
    fn default() -> Self {
        Self {
            ncycles: 100,
            nants: 5,
            alpha: 1.,
            beta: 0.5,
            rho: 0.5,
            seed: 0,
            parallel: false,
        }
    }
}

impl AntColParams {
    /// set number of cycles
    #[must_use]
    pub fn with_ncycles(mut self, ncycles:usize) -> Self { self.ncycles = ncycles; self }

    /// set number of ants per cycle
    #[must_use]
    pub fn with_nants(mut self, nants:usize) -> Self { self.nants = nants; self }

    /// set trail exponent (α)
    #[must_use]
    pub fn with_alpha(mut self, alpha:f64) -> Self { self.alpha = alpha; self }

    /// set visibility exponent (β)
    #[must_use]
    pub fn with_beta(mut self, beta:f64) -> Self { self.beta = beta; self }

    /// set trail persistence (ρ)
    #[must_use]
    pub fn with_rho(mut self, rho:f64) -> Self { self.rho = rho; self }

    /// set random seed
    #[must_use]
    pub fn with_seed(mut self, seed:u64) -> Self { self.seed = seed; self }

    /// run the ants of a cycle in parallel
    #[must_use]
    pub fn with_parallel(mut self, parallel:bool) -> Self { self.parallel = parallel; self }

    /// reads parameters from a json file (missing fields take their default value)
    pub fn from_json_file(filename:&str) -> Result<Self, Error> {
        let content = fs::read_to_string(filename).map_err(|e| Error::io(filename, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// checks that every parameter lies in its domain
    pub fn validate(&self) -> Result<(), Error> {
        if self.ncycles == 0 {
            return Err(Error::InvalidParameter("ncycles must be positive".to_string()));
        }
        if self.nants == 0 {
            return Err(Error::InvalidParameter("nants must be positive".to_string()));
        }
        if !(self.alpha >= 0. && self.alpha.is_finite()) {
            return Err(Error::InvalidParameter(format!("alpha must be non-negative (got {})", self.alpha)));
        }
        if !(self.beta >= 0. && self.beta.is_finite()) {
            return Err(Error::InvalidParameter(format!("beta must be non-negative (got {})", self.beta)));
        }
        if !(0. ..=1.).contains(&self.rho) {
            return Err(Error::InvalidParameter(format!("rho must be in [0,1] (got {})", self.rho)));
        }
        Ok(())
    }
}


/** outcome of a run */
#[derive(Debug, Clone)]
pub struct AntColResult {
    /// best coloring found (class c has color c+1)
    pub solution: Solution,
    /// number of colors of the best coloring
    pub nb_colors: usize,
    /// number of conflicting edges of the best coloring (always 0)
    pub nb_conflicts: usize,
    /// trail after the last cycle
    pub trail: TrailMatrix,
    /// primal_list[c]: best number of colors found after cycle c+1
    pub primal_list: Vec<usize>,
    /// cycle (starting at 1) in which the best coloring was found
    pub best_cycle: usize,
}

impl AntColResult {
    /// vertex -> color mapping of the best coloring (colors start at 1)
    pub fn colors(&self) -> Vec<usize> {
        solution_to_colors(self.trail.n(), &self.solution)
    }
}


/**
Runs ANTCOL on the instance. Cycles are executed in order, the ants of a cycle
only read the trail of the cycle. Each ant gets its own seed (drawn in ant order from
the master generator) and colorings are folded in ant order, thus the result does not
depend on `params.parallel`.
*/
pub fn antcol(inst:&dyn ColoringInstance, params:&AntColParams) -> Result<AntColResult, Error> {
    params.validate()?;
    let n = inst.nb_vertices();
    if n == 0 {
        return Err(Error::InvalidParameter("the instance has no vertex".to_string()));
    }
    let mut rng = Rng::with_seed(params.seed);
    let mut trail = TrailMatrix::new(n);
    let mut best:Option<Solution> = None;
    let mut best_cycle = 0;
    let mut primal_list = Vec::with_capacity(params.ncycles);
    for cycle in 1..=params.ncycles {
        let seeds:Vec<u64> = (0..params.nants).map(|_| rng.u64(..)).collect();
        let colorings:Vec<Solution> = if params.parallel {
            seeds.par_iter()
                .map(|seed| construct_coloring(inst, &trail, params.alpha, params.beta, *seed))
                .collect::<Result<Vec<_>, Error>>()?
        } else {
            seeds.iter()
                .map(|seed| construct_coloring(inst, &trail, params.alpha, params.beta, *seed))
                .collect::<Result<Vec<_>, Error>>()?
        };
        let mut delta = TrailUpdateMatrix::new(n);
        let mut cycle_best = usize::MAX;
        for (ant, coloring) in colorings.into_iter().enumerate() {
            log::trace!("cycle {} ant {}: {} colors", cycle, ant+1, coloring.len());
            debug_assert_eq!(count_conflicts(inst, &solution_to_colors(n, &coloring)), 0);
            delta.deposit(&coloring);
            cycle_best = cycle_best.min(coloring.len());
            if best.as_ref().map_or(true, |b| coloring.len() < b.len()) {
                log::info!("cycle {}: new best coloring with {} colors", cycle, coloring.len());
                best = Some(coloring);
                best_cycle = cycle;
            }
        }
        trail.evaporate_and_reinforce(&delta, params.rho)?;
        let nb_best = best.as_ref().map_or(0, |b| b.len());
        primal_list.push(nb_best);
        log::debug!(
            "cycle {}/{}: {} colors (best {}), max trail {:.3}",
            cycle, params.ncycles, cycle_best, nb_best, trail.max_entry()
        );
    }
    let solution = best.ok_or(Error::EmptySelection)?;
    let nb_conflicts = count_conflicts(inst, &solution_to_colors(n, &solution));
    log::info!("ANTCOL: {} colors, {} conflicts (cycle {})", solution.len(), nb_conflicts, best_cycle);
    Ok(AntColResult {
        nb_colors: solution.len(),
        solution,
        nb_conflicts,
        trail,
        primal_list,
        best_cycle,
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::compact_instance::CompactInstance;
    use crate::generator::{complete_multipartite, turan_graph};

    #[test]
    fn test_default_params() {
        let params = AntColParams::default();
        assert_eq!(params.ncycles, 100);
        assert_eq!(params.nants, 5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_invalid_params() {
        let p = AntColParams::default();
        for invalid in [
            p.clone().with_ncycles(0),
            p.clone().with_nants(0),
            p.clone().with_alpha(-1.),
            p.clone().with_beta(-0.5),
            p.clone().with_rho(1.5),
            p.clone().with_rho(-0.1),
            p.clone().with_rho(f64::NAN),
        ].iter() {
            assert!(matches!(invalid.validate(), Err(Error::InvalidParameter(_))), "{:?}", invalid);
        }
    }

    #[test]
    fn test_empty_instance() {
        let inst = CompactInstance::new(vec![]);
        assert!(matches!(
            antcol(&inst, &AntColParams::default()),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_params_json() {
        let params:AntColParams = serde_json::from_str(r#"{"ncycles": 3, "rho": 0.1}"#).unwrap();
        assert_eq!(params, AntColParams::default().with_ncycles(3).with_rho(0.1));
        let encoded = serde_json::to_string(&params).unwrap();
        assert_eq!(serde_json::from_str::<AntColParams>(&encoded).unwrap(), params);
    }

    #[test]
    fn test_single_vertex() {
        let inst = CompactInstance::new(vec![vec![]]);
        let res = antcol(&inst, &AntColParams::default().with_ncycles(2)).unwrap();
        assert_eq!(res.solution, vec![vec![0]]);
        assert_eq!(res.colors(), vec![1]);
    }

    #[test]
    fn test_turan_graph() {
        let inst = turan_graph(12, 4);
        let params = AntColParams::default().with_ncycles(10).with_nants(3).with_seed(5);
        let res = antcol(&inst, &params).unwrap();
        // complete multipartite graphs are colored optimally by construction
        assert_eq!(res.nb_colors, 4);
        assert_eq!(checker(&inst, &res.solution), CheckerResult::Ok(4));
        assert_eq!(res.best_cycle, 1);
        assert_eq!(res.primal_list, vec![4 ; 10]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let inst = complete_multipartite(&[2,3,4]);
        let params = AntColParams::default().with_ncycles(5).with_nants(4).with_seed(77);
        let seq = antcol(&inst, &params).unwrap();
        let par = antcol(&inst, &params.clone().with_parallel(true)).unwrap();
        assert_eq!(seq.solution, par.solution);
        assert_eq!(seq.trail, par.trail);
    }
}
