use bit_set::BitSet;

use crate::color::{Solution, VertexId};

/** set of pairwise non-adjacent vertices sharing the color `color` (color ids start at 1) */
#[derive(Debug, Clone)]
pub struct ColorClass {
    /// color id
    color: usize,
    /// members, in insertion order
    vertices: Vec<VertexId>,
    /// members, as a bitset
    members: BitSet,
}

impl ColorClass {
    /// empty color class
    pub fn new(color:usize) -> Self {
        Self { color, vertices: Vec::new(), members: BitSet::default() }
    }

    /// color id of the class
    pub fn color(&self) -> usize { self.color }

    /// members of the class (insertion order)
    pub fn vertices(&self) -> &[VertexId] { &self.vertices }

    /// members of the class (bitset)
    pub fn members(&self) -> &BitSet { &self.members }

    /// returns true iff v is in the class
    pub fn contains(&self, v:VertexId) -> bool { self.members.contains(v) }

    /// number of members
    pub fn len(&self) -> usize { self.vertices.len() }

    /// returns true iff the class has no members yet
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    fn insert(&mut self, v:VertexId) {
        if self.members.insert(v) {
            self.vertices.push(v);
        }
    }
}


/** coloring owned by a single ant: vertex -> color assignment and the registry of
the color classes built so far (the last one being the class under construction).
*/
#[derive(Debug, Clone)]
pub struct ColoringState {
    /// colors[v]: color of v (if any)
    colors: Vec<Option<usize>>,
    /// color classes, classes[c-1] has color c
    classes: Vec<ColorClass>,
    /// vertices that are not colored yet
    uncolored: BitSet,
}

impl ColoringState {
    /// all vertices uncolored, no color class
    pub fn new(n:usize) -> Self {
        let mut uncolored = BitSet::with_capacity(n);
        for v in 0..n { uncolored.insert(v); }
        Self { colors: vec![None ; n], classes: Vec::new(), uncolored }
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.colors.len() }

    /// color of v
    pub fn color(&self, v:VertexId) -> Option<usize> { self.colors[v] }

    /// uncolored vertices
    pub fn uncolored(&self) -> &BitSet { &self.uncolored }

    /// number of color classes opened so far
    pub fn nb_colors(&self) -> usize { self.classes.len() }

    /// color classes opened so far
    pub fn classes(&self) -> &[ColorClass] { &self.classes }

    /// class of color c
    pub fn class(&self, color:usize) -> Option<&ColorClass> {
        color.checked_sub(1).and_then(|c| self.classes.get(c))
    }

    /// class under construction (the last opened)
    pub fn current_class(&self) -> Option<&ColorClass> { self.classes.last() }

    /// opens a new (empty) color class and returns its color
    pub fn open_class(&mut self) -> usize {
        let color = self.classes.len() + 1;
        self.classes.push(ColorClass::new(color));
        color
    }

    /** colors the uncolored vertex v with the color of the class under construction.
    The caller guarantees that v has no neighbor in that class.
    */
    pub fn color_vertex(&mut self, v:VertexId) {
        debug_assert!(self.colors[v].is_none());
        if let Some(class) = self.classes.last_mut() {
            class.insert(v);
            self.colors[v] = Some(class.color());
            self.uncolored.remove(v);
        }
    }

    /// returns true iff every vertex is colored
    pub fn is_complete(&self) -> bool { self.uncolored.is_empty() }

    /** finalizes the partition: class index c holds the members of color c+1 */
    pub fn into_solution(self) -> Solution {
        self.classes.into_iter().map(|c| c.vertices).collect()
    }
}
