use super::{
    chain::{Boundary, Chain},
    common::{Direction, Frame},
};
use log::debug;

/// Tracks which node is animating and which way the traversal is heading.
///
/// The cursor walks the chain back and forth: when a transition completes it moves to the next
/// node, and when there is no next node it turns around and stays where it is. The end nodes are
/// therefore animated twice in a row, once on arrival and once on departure.
#[derive(Debug)]
pub struct Cursor {
    chain: Chain,
    active: usize,
    direction: Direction,
}

impl Cursor {
    /// Create a cursor on the first node of the chain, heading forward.
    pub fn new(chain: Chain) -> Self {
        Self { chain, active: 0, direction: Direction::Forward }
    }

    /// Start a transition on the active node.
    ///
    /// Returns `true` only if a new transition was started.
    pub fn begin(&mut self) -> bool {
        let active = self.active;
        let Some(node) = self.chain.node_mut(active) else {
            return false;
        };
        let started = node.interpolator_mut().begin();
        if started {
            debug!("starting transition on node {active} heading {}", self.direction);
        }
        started
    }

    /// Advance the active node's transition by one step.
    ///
    /// When the transition completes the cursor moves on, or turns around if it reached either end
    /// of the chain, and the completed value is returned.
    pub fn tick(&mut self, step: f32) -> Option<f32> {
        let completed = self.chain.node_mut(self.active)?.interpolator_mut().advance(step)?;
        match self.chain.neighbor(self.active, self.direction) {
            Ok(next) => {
                debug!("node {} settled at {completed}, moving to node {next}", self.active);
                self.active = next;
            }
            Err(Boundary { index, direction }) => {
                debug!("node {index} settled at {completed}, no node {direction} of it so turning around");
                self.direction = self.direction.reversed();
            }
        }
        Some(completed)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the active node has a transition in flight.
    pub fn is_transitioning(&self) -> bool {
        self.chain.node(self.active).is_some_and(|node| node.interpolator().is_active())
    }

    pub fn frame(&self) -> Frame {
        let scale = self.chain.node(self.active).map(|node| node.interpolator().value()).unwrap_or_default();
        Frame { active_index: self.active, scale }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.25;

    fn cursor(size: usize) -> Cursor {
        Cursor::new(Chain::new(size).expect("failed to build chain"))
    }

    fn complete_transition(cursor: &mut Cursor) -> usize {
        assert!(cursor.begin());
        let mut ticks = 1;
        while cursor.tick(STEP).is_none() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn starts_on_first_node() {
        let cursor = cursor(5);
        assert_eq!(cursor.active_index(), 0);
        assert_eq!(cursor.direction(), Direction::Forward);
        assert_eq!(cursor.frame(), Frame { active_index: 0, scale: 0.0 });
    }

    #[test]
    fn single_transition() {
        let mut cursor = cursor(5);
        let ticks = complete_transition(&mut cursor);

        assert_eq!(ticks, 5);
        assert_eq!(cursor.active_index(), 1);
        assert_eq!(cursor.direction(), Direction::Forward);
        let previous = cursor.chain().node(0).expect("no first node").interpolator();
        assert_eq!(previous.anchor(), 1.0);
        assert!(!previous.is_active());
    }

    #[test]
    fn begin_while_transitioning() {
        let mut cursor = cursor(5);
        assert!(cursor.begin());
        cursor.tick(STEP);
        assert!(!cursor.begin());
        assert!(cursor.is_transitioning());
        assert_eq!(cursor.frame().scale, STEP);
    }

    #[test]
    fn tick_while_idle() {
        let mut cursor = cursor(5);
        assert_eq!(cursor.tick(STEP), None);
        assert_eq!(cursor.active_index(), 0);
    }

    #[test]
    fn ping_pong() {
        let mut cursor = cursor(5);
        let mut visited = vec![cursor.active_index()];
        for _ in 0..11 {
            complete_transition(&mut cursor);
            visited.push(cursor.active_index());
        }
        assert_eq!(visited, &[0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 0, 1]);
    }

    #[test]
    fn completion_values_alternate_at_the_ends() {
        let mut cursor = cursor(2);
        let mut completions = Vec::new();
        for _ in 0..4 {
            assert!(cursor.begin());
            let value = loop {
                if let Some(value) = cursor.tick(STEP) {
                    break value;
                }
            };
            completions.push((cursor.active_index(), value));
        }
        // node 0 rises, node 1 rises and turns, node 1 falls, node 0 falls and turns
        assert_eq!(completions, &[(1, 1.0), (1, 1.0), (0, 0.0), (0, 0.0)]);
        assert_eq!(cursor.direction(), Direction::Forward);
    }

    #[test]
    fn single_node_turns_every_time() {
        let mut cursor = cursor(1);
        complete_transition(&mut cursor);
        assert_eq!(cursor.active_index(), 0);
        assert_eq!(cursor.direction(), Direction::Backward);
        complete_transition(&mut cursor);
        assert_eq!(cursor.direction(), Direction::Forward);
        assert_eq!(cursor.frame().scale, 0.0);
    }
}
