use bit_set::BitSet;
use fastrand::Rng;

use crate::color::{ColoringInstance, VertexId};
use super::feasibility::degree_in;

/** greedy desirability of adding a vertex i ∈ W(C) to the class C under construction.
The rule is drawn uniformly at random at every evaluation.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityRule {
    /// degree of i in the subgraph induced by B(C)
    BlockedDegree,
    /// |W(C)| - degree of i in the subgraph induced by W(C)
    FeasibleComplement,
    /// degree of i in the subgraph induced by B(C) ∪ W(C)
    CombinedDegree,
}

impl VisibilityRule {
    /// picks one of the three rules with probability 1/3
    pub fn random(rng:&mut Rng) -> Self {
        match rng.usize(0..3) {
            0 => Self::BlockedDegree,
            1 => Self::FeasibleComplement,
            _ => Self::CombinedDegree,
        }
    }

    /** visibility of i ∈ W(C), given W(C) (feasible) and B(C) (blocked) */
    pub fn evaluate(&self, inst:&dyn ColoringInstance, i:VertexId, feasible:&BitSet, blocked:&BitSet) -> usize {
        debug_assert!(feasible.contains(i));
        match self {
            Self::BlockedDegree => degree_in(inst, i, blocked),
            // i ∉ N(i), hence the degree is at most |W|-1
            Self::FeasibleComplement => feasible.len() - degree_in(inst, i, feasible),
            // W and B are disjoint
            Self::CombinedDegree => degree_in(inst, i, blocked) + degree_in(inst, i, feasible),
        }
    }
}

/** visibility η(i,C) using a randomly drawn rule */
pub fn visibility(inst:&dyn ColoringInstance, i:VertexId, feasible:&BitSet, blocked:&BitSet, rng:&mut Rng) -> usize {
    VisibilityRule::random(rng).evaluate(inst, i, feasible, blocked)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::compact_instance::CompactInstance;

    /// star 0-{1,2,3} plus the edge 2-4 and 4-5, class {1} blocks 0
    fn setup() -> (CompactInstance, BitSet, BitSet) {
        let inst = CompactInstance::from_edges(6, &[(0,1), (0,2), (0,3), (2,4), (4,5)]);
        let feasible:BitSet = vec![2,3,4,5].into_iter().collect();
        let blocked:BitSet = vec![0].into_iter().collect();
        (inst, feasible, blocked)
    }

    #[test]
    fn test_rules() {
        let (inst, w, b) = setup();
        assert_eq!(VisibilityRule::BlockedDegree.evaluate(&inst, 2, &w, &b), 1);
        assert_eq!(VisibilityRule::BlockedDegree.evaluate(&inst, 5, &w, &b), 0);
        assert_eq!(VisibilityRule::FeasibleComplement.evaluate(&inst, 2, &w, &b), 3);
        assert_eq!(VisibilityRule::FeasibleComplement.evaluate(&inst, 4, &w, &b), 2);
        assert_eq!(VisibilityRule::FeasibleComplement.evaluate(&inst, 3, &w, &b), 4);
        assert_eq!(VisibilityRule::CombinedDegree.evaluate(&inst, 2, &w, &b), 2);
        assert_eq!(VisibilityRule::CombinedDegree.evaluate(&inst, 4, &w, &b), 2);
    }

    #[test]
    fn test_random_rule_uses_all_rules() {
        let mut rng = Rng::with_seed(3);
        let mut seen = [false ; 3];
        for _ in 0..100 {
            match VisibilityRule::random(&mut rng) {
                VisibilityRule::BlockedDegree => seen[0] = true,
                VisibilityRule::FeasibleComplement => seen[1] = true,
                VisibilityRule::CombinedDegree => seen[2] = true,
            }
        }
        assert_eq!(seen, [true ; 3]);
    }

    #[test]
    fn test_visibility_is_one_of_the_rules() {
        let (inst, w, b) = setup();
        let mut rng = Rng::with_seed(11);
        for _ in 0..50 {
            let value = visibility(&inst, 4, &w, &b, &mut rng);
            assert!(value == 0 || value == 2, "unexpected visibility {}", value);
        }
    }
}
