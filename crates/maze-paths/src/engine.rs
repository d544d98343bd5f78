use std::cmp::Ordering;
use std::collections::BinaryHeap;

use maze_core::{Point, Range};

/// A position with an associated cost, returned from cost-map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal node for A* searches
// ---------------------------------------------------------------------------

/// Arena slot for one cell. A slot only means something when its
/// `generation` matches the engine's current one; otherwise the cell is
/// unseen in the running search.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Discovered and not yet expanded. A current-generation slot with
    /// `open == false` is closed.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Open-set entry pointing into the node arena.
///
/// Entries are never updated in place: a cheaper route pushes a fresh entry
/// and the old one is skipped when popped, because its `g` no longer matches
/// the arena slot.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    /// `BinaryHeap` pops the greatest entry, so "greater" means "expand
    /// first": lowest `f`, then highest `g`, then the earliest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then(self.g.cmp(&other.g))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in cost maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Counters from the most recent A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the open set and expanded.
    pub expanded: usize,
    /// Entries pushed into the open set, including re-insertions.
    pub pushed: usize,
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Reusable A* search engine over a grid rectangle.
///
/// `SearchEngine` owns the node arena, the open-set heap and the cost-map buffers,
/// so repeated queries over same-sized mazes incur no allocations after the
/// first one. One engine serves one search at a time; give each thread its
/// own engine and share the (immutable) maze between them.
pub struct SearchEngine {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A* caches
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) stats: SearchStats,
    // cost-map caches
    pub(crate) costs: Vec<i32>,
    pub(crate) cost_buckets: Vec<Vec<usize>>,
    pub(crate) cost_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<(Point, i32)>,
}

impl SearchEngine {
    /// Create a new engine for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            generation: 0,
            open: BinaryHeap::new(),
            stats: SearchStats::default(),
            costs: vec![UNREACHABLE; len],
            cost_buckets: Vec::new(),
            cost_results: Vec::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new size fits within the existing arena, it is kept and only
    /// the generation counter is bumped. Otherwise caches are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.cost_results.clear();

        if new_len <= old_capacity {
            self.next_generation();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.costs.clear();
        self.costs.resize(new_len, UNREACHABLE);
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Counters from the last A* search run by this engine.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Start a new search generation, lazily invalidating every arena slot.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Slots stamped in the previous cycle would look current again.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
