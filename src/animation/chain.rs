use super::{common::Direction, interpolator::Interpolator};

/// Errors that can occur when building a chain.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ChainError {
    #[error("a chain needs at least one node")]
    Empty,
}

/// There is no node past `index` when moving in `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boundary {
    pub index: usize,
    pub direction: Direction,
}

/// One palette entry in the chain.
#[derive(Clone, Debug)]
pub struct Node {
    index: usize,
    interpolator: Interpolator,
    forward: Option<usize>,
    backward: Option<usize>,
}

impl Node {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    pub(crate) fn interpolator_mut(&mut self) -> &mut Interpolator {
        &mut self.interpolator
    }
}

/// The fixed, ordered set of nodes the cursor walks over.
///
/// All nodes are allocated up front and refer to their neighbors by index. The first node has no
/// backward neighbor and the last one has no forward neighbor; the chain never wraps around.
#[derive(Clone, Debug)]
pub struct Chain {
    nodes: Vec<Node>,
}

impl Chain {
    /// Build a chain of `size` nodes, all resting at 0.
    pub fn new(size: usize) -> Result<Self, ChainError> {
        if size == 0 {
            return Err(ChainError::Empty);
        }
        let nodes = (0..size)
            .map(|index| Node {
                index,
                interpolator: Interpolator::default(),
                forward: (index + 1 < size).then_some(index + 1),
                backward: index.checked_sub(1),
            })
            .collect();
        Ok(Self { nodes })
    }

    /// Get the neighbor of the node at `index` in the given direction.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Result<usize, Boundary> {
        let node = self.nodes.get(index);
        let neighbor = match direction {
            Direction::Forward => node.and_then(|node| node.forward),
            Direction::Backward => node.and_then(|node| node.backward),
        };
        neighbor.ok_or(Boundary { index, direction })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
