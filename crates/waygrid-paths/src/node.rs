use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use waygrid_core::Point;

/// Handle to a [`SearchNode`] inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in arena creation order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Which set a node currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Discovered, waiting to be expanded.
    Open,
    /// Expanded (or the origin). Never revisited.
    Closed,
}

/// Bookkeeping for one grid cell during a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point,
    /// Manhattan distance to the destination, fixed at creation.
    pub heuristic: i32,
    /// Cheapest known cost from the origin, saturating at `i32::MAX`.
    pub g: i32,
    pub parent: Option<NodeId>,
    pub state: NodeState,
}

impl SearchNode {
    /// Total estimate `heuristic + g`, saturating at `i32::MAX`.
    #[inline]
    pub fn f(&self) -> i32 {
        self.heuristic.saturating_add(self.g)
    }
}

/// Open-set entry, ordered for use in a max-`BinaryHeap` so that the lowest
/// `f` pops first, and among equal `f` the oldest node does.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    id: NodeId,
    f: i32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Growable store of every node created by one search.
///
/// A cell gets at most one node, which is later updated in place. Parent
/// links are [`NodeId`]s into the same arena, so walking back from any node
/// to the origin never touches shared references.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
    by_pos: HashMap<Point, NodeId>,
    open: BinaryHeap<OpenEntry>,
    open_len: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node for a cell that has none yet.
    ///
    /// Open nodes become eligible for [`close_min`](Self::close_min).
    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(
            !self.by_pos.contains_key(&node.pos),
            "cell {} already has a node",
            node.pos
        );
        let id = NodeId(self.nodes.len());
        if node.state == NodeState::Open {
            self.open.push(OpenEntry { id, f: node.f() });
            self.open_len += 1;
        }
        self.by_pos.insert(node.pos, id);
        self.nodes.push(node);
        id
    }

    /// The node created for `pos`, whichever set it is in.
    #[inline]
    pub fn lookup(&self, pos: Point) -> Option<NodeId> {
        self.by_pos.get(&pos).copied()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// Re-queue an open node after its `g` was lowered.
    ///
    /// The previous queue entry stays behind and is discarded when popped.
    pub fn requeue(&mut self, id: NodeId) {
        let node = &self.nodes[id.0];
        if node.state == NodeState::Open {
            self.open.push(OpenEntry { id, f: node.f() });
        }
    }

    /// Move the open node with the smallest `f` to the closed set and
    /// return it. Ties go to the lowest [`NodeId`].
    pub fn close_min(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            let node = &mut self.nodes[entry.id.0];
            // Skip stale entries.
            if node.state != NodeState::Open || node.f() != entry.f {
                continue;
            }
            node.state = NodeState::Closed;
            self.open_len -= 1;
            return Some(entry.id);
        }
        None
    }

    /// Positions from the root of `id`'s parent chain up to `id` itself.
    pub fn trace(&self, id: NodeId) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = &self.nodes[ci.0];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }

    /// Number of nodes created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes currently in the open set.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open_len
    }

    /// Every node in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}
