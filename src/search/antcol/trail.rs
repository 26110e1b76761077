use crate::color::VertexId;
use crate::error::Error;

/** pheromone trail between pairs of vertices.
t[i][j]: accumulated desirability of i and j sharing a color.
Symmetric, non-negative, zero on the diagonal. Persists for the whole run and is only
modified once per cycle (see `evaporate_and_reinforce`).
*/
#[derive(Debug, Clone, PartialEq)]
pub struct TrailMatrix {
    /// values[i][j]: trail between i and j
    values: Vec<Vec<f64>>,
}

impl TrailMatrix {
    /// all off-diagonal entries set to 1, diagonal set to 0
    pub fn new(n:usize) -> Self {
        let values = (0..n).map(|i| {
            (0..n).map(|j| if i == j { 0. } else { 1. }).collect()
        }).collect();
        Self { values }
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.values.len() }

    /// trail between i and j
    pub fn get(&self, i:VertexId, j:VertexId) -> f64 { self.values[i][j] }

    /// maximum entry of the matrix (0 if it has less than 2 vertices)
    pub fn max_entry(&self) -> f64 {
        self.values.iter().flatten().cloned().fold(0., f64::max)
    }

    /** t[i][j] = ρ.t[i][j] + Δ[i][j] for all i≠j.
    Requires ρ ∈ [0,1]. Entries remain non-negative, and stay below max(t₀, max(Δ)/(1-ρ))
    when the reinforcement is bounded by max(Δ) at every cycle.
    */
    pub fn evaporate_and_reinforce(&mut self, delta:&TrailUpdateMatrix, rho:f64) -> Result<(), Error> {
        if !(0. ..=1.).contains(&rho) {
            return Err(Error::InvalidParameter(format!("rho must be in [0,1] (got {})", rho)));
        }
        if delta.n() != self.n() {
            return Err(Error::InvalidParameter(format!(
                "trail update of size {} applied to a trail of size {}", delta.n(), self.n()
            )));
        }
        for (i,row) in self.values.iter_mut().enumerate() {
            for (j,t) in row.iter_mut().enumerate() {
                if i != j {
                    *t = rho * *t + delta.get(i,j);
                }
            }
        }
        Ok(())
    }
}


/** per-cycle accumulator of the reinforcement brought by the ants of the cycle.
Reset (re-created) at the beginning of every cycle.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct TrailUpdateMatrix {
    /// values[i][j]: reinforcement of the pair (i,j) during the cycle
    values: Vec<Vec<f64>>,
}

impl TrailUpdateMatrix {
    /// all entries set to 0
    pub fn new(n:usize) -> Self {
        Self { values: vec![vec![0. ; n] ; n] }
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.values.len() }

    /// reinforcement between i and j
    pub fn get(&self, i:VertexId, j:VertexId) -> f64 { self.values[i][j] }

    /// maximum entry of the matrix
    pub fn max_entry(&self) -> f64 {
        self.values.iter().flatten().cloned().fold(0., f64::max)
    }

    /** adds the contribution of a coloring using k colors:
    Δ[i][j] += 1/k for every pair i≠j sharing a color.
    */
    pub fn deposit(&mut self, solution:&[Vec<VertexId>]) {
        if solution.is_empty() { return; }
        let increase = 1. / solution.len() as f64;
        for class in solution {
            for i in class {
                for j in class {
                    if i != j {
                        self.values[*i][*j] += increase;
                    }
                }
            }
        }
    }
}
