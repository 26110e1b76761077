use bit_set::BitSet;

use crate::color::{ColoringInstance, VertexId};
use super::color_class::{ColorClass, ColoringState};

/** W(C): uncolored vertices, outside of C, with no neighbor in C (they can join C) */
pub fn feasible_set(inst:&dyn ColoringInstance, state:&ColoringState, class:&ColorClass) -> BitSet {
    state.uncolored().iter()
        .filter(|v| !class.contains(*v))
        .filter(|v| !inst.neighbors(*v).iter().any(|u| class.contains(*u)))
        .collect()
}

/** B(C): uncolored vertices that cannot join C (members of C, or adjacent to a member) */
pub fn blocked_set(inst:&dyn ColoringInstance, state:&ColoringState, class:&ColorClass) -> BitSet {
    let feasible = feasible_set(inst, state, class);
    state.uncolored().difference(&feasible).collect()
}

/** degree of v in the subgraph induced by `set` */
pub fn degree_in(inst:&dyn ColoringInstance, v:VertexId, set:&BitSet) -> usize {
    inst.neighbors(v).iter().filter(|u| set.contains(**u)).count()
}
