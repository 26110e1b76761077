use bit_set::BitSet;
use fastrand::Rng;

use crate::color::{ColoringInstance, VertexId};
use crate::error::Error;
use super::color_class::ColorClass;
use super::trail::TrailMatrix;
use super::visibility::visibility;

/** τ(i,C): mean trail between i and the members of C.
Fails with `DegenerateClass` if C has no members (a class is always seeded before being extended).
*/
pub fn trail_desirability(trail:&TrailMatrix, i:VertexId, class:&ColorClass) -> Result<f64, Error> {
    if class.is_empty() {
        return Err(Error::DegenerateClass(class.color()));
    }
    let sum:f64 = class.vertices().iter().map(|j| trail.get(i, *j)).sum();
    Ok(sum / class.len() as f64)
}

/** computes P(i,C) for every i ∈ W(C):
P(i,C) = τ(i,C)^α.η(i,C)^β / ∑_{j ∈ W(C)} τ(j,C)^α.η(j,C)^β

Vertices outside of W(C) have a probability of 0 and are not listed.
If every weight is 0 (or W(C) is empty), all returned probabilities are 0.
*/
#[allow(clippy::too_many_arguments)]
pub fn selection_probabilities(
    inst:&dyn ColoringInstance,
    trail:&TrailMatrix,
    class:&ColorClass,
    feasible:&BitSet,
    blocked:&BitSet,
    alpha:f64,
    beta:f64,
    rng:&mut Rng,
) -> Result<Vec<(VertexId, f64)>, Error> {
    let mut weights = Vec::with_capacity(feasible.len());
    for i in feasible.iter() {
        let tau = trail_desirability(trail, i, class)?;
        let eta = visibility(inst, i, feasible, blocked, rng) as f64;
        weights.push((i, tau.powf(alpha) * eta.powf(beta)));
    }
    let total:f64 = weights.iter().map(|(_,w)| w).sum();
    if total > 0. && total.is_finite() {
        for (_,w) in weights.iter_mut() {
            *w /= total;
        }
    } else {
        for (_,w) in weights.iter_mut() {
            *w = 0.;
        }
    }
    Ok(weights)
}

/** roulette-wheel selection over (candidate, weight) pairs.
Falls back to a uniform choice if no weight is positive. Fails on an empty candidate list.
*/
pub fn roulette_select(candidates:&[(VertexId, f64)], rng:&mut Rng) -> Result<VertexId, Error> {
    if candidates.is_empty() {
        return Err(Error::EmptySelection);
    }
    let total:f64 = candidates.iter()
        .map(|(_,w)| *w)
        .filter(|w| *w > 0. && w.is_finite())
        .sum();
    if !(total > 0. && total.is_finite()) {
        return Ok(candidates[rng.usize(0..candidates.len())].0);
    }
    let r = rng.f64() * total;
    let mut cumulated:f64 = 0.;
    let mut last_positive = candidates[0].0;
    for (v,w) in candidates {
        if *w > 0. && w.is_finite() {
            cumulated += w;
            last_positive = *v;
            if r < cumulated {
                return Ok(*v);
            }
        }
    }
    Ok(last_positive) // rounding errors
}
