use super::common::Direction;

/// How far a value may move away from its anchor before a transition is considered complete.
pub const OVERSHOOT_THRESHOLD: f32 = 1.0;

/// The interpolation state owned by every node.
///
/// At rest the value sits on its anchor, which is either 0 or 1. A transition always moves away
/// from the side the value is resting on, so an anchor of 0 only ever moves forward and an anchor
/// of 1 only ever moves backward.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Interpolator {
    value: f32,
    anchor: f32,
    direction: Option<Direction>,
}

impl Interpolator {
    /// Start a transition.
    ///
    /// Returns `false` and leaves everything untouched if a transition is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.direction.is_some() {
            return false;
        }
        // 1 - 2 * anchor: 0 heads up, 1 heads down
        let direction = if 1.0 - 2.0 * self.anchor > 0.0 { Direction::Forward } else { Direction::Backward };
        self.direction = Some(direction);
        true
    }

    /// Move the value one step towards its target.
    ///
    /// Returns the final value on the tick the transition completes, `None` otherwise.
    pub fn advance(&mut self, step: f32) -> Option<f32> {
        let direction = self.direction?;
        self.value += direction.sign() * step;
        if (self.value - self.anchor).abs() > OVERSHOOT_THRESHOLD {
            self.value = self.anchor + direction.sign();
            self.anchor = self.value;
            self.direction = None;
            return Some(self.value);
        }
        None
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn anchor(&self) -> f32 {
        self.anchor
    }

    /// The direction of the transition in flight, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_active(&self) -> bool {
        self.direction.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run_to_completion(interpolator: &mut Interpolator, step: f32) -> (usize, f32) {
        for ticks in 1..=10_000 {
            if let Some(value) = interpolator.advance(step) {
                return (ticks, value);
            }
        }
        panic!("transition never completed");
    }

    #[test]
    fn idle_by_default() {
        let interpolator = Interpolator::default();
        assert_eq!(interpolator.value(), 0.0);
        assert_eq!(interpolator.anchor(), 0.0);
        assert!(!interpolator.is_active());
    }

    #[test]
    fn advance_while_idle_does_nothing() {
        let mut interpolator = Interpolator::default();
        assert_eq!(interpolator.advance(0.5), None);
        assert_eq!(interpolator, Interpolator::default());
    }

    #[test]
    fn begin_is_gated() {
        let mut interpolator = Interpolator::default();
        assert!(interpolator.begin());
        interpolator.advance(0.25);
        let snapshot = interpolator.clone();

        assert!(!interpolator.begin());
        assert_eq!(interpolator, snapshot);
    }

    #[rstest]
    #[case::quarter(0.25, 5)]
    #[case::half(0.5, 3)]
    #[case::whole(1.0, 2)]
    fn completes_after_overshoot(#[case] step: f32, #[case] expected_ticks: usize) {
        let mut interpolator = Interpolator::default();
        interpolator.begin();
        let (ticks, value) = run_to_completion(&mut interpolator, step);
        assert_eq!(ticks, expected_ticks);
        assert_eq!(value, 1.0);
        assert_eq!(interpolator.anchor(), 1.0);
        assert_eq!(interpolator.value(), 1.0);
        assert!(!interpolator.is_active());
    }

    #[test]
    fn completion_is_signaled_once() {
        let mut interpolator = Interpolator::default();
        interpolator.begin();
        let completions = (0..50).filter_map(|_| interpolator.advance(0.1)).count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn resting_side_picks_direction() {
        let mut interpolator = Interpolator::default();
        interpolator.begin();
        assert_eq!(interpolator.direction(), Some(Direction::Forward));
        run_to_completion(&mut interpolator, 0.25);

        assert!(interpolator.begin());
        assert_eq!(interpolator.direction(), Some(Direction::Backward));
        let (_, value) = run_to_completion(&mut interpolator, 0.25);
        assert_eq!(value, 0.0);
        assert_eq!(interpolator.anchor(), 0.0);
    }

    #[rstest]
    #[case::from_zero(false)]
    #[case::from_one(true)]
    fn moves_monotonically_within_bounds(#[case] start_at_one: bool) {
        let step = 0.07;
        let mut interpolator = Interpolator::default();
        if start_at_one {
            interpolator.begin();
            run_to_completion(&mut interpolator, step);
        }
        let anchor = interpolator.anchor();
        interpolator.begin();
        let sign = interpolator.direction().map(Direction::sign).unwrap_or_default();

        let mut previous = interpolator.value();
        loop {
            let done = interpolator.advance(step);
            let value = interpolator.value();
            assert!((value - previous) * sign > 0.0, "{previous} -> {value} is not moving towards the target");
            assert!((value - anchor).abs() <= OVERSHOOT_THRESHOLD);
            previous = value;
            if done.is_some() {
                break;
            }
        }
        assert_eq!(previous, anchor + sign);
    }
}
