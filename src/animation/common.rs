/// The way the cursor walks the chain, and the way a node's interpolation value moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Towards higher indexes, or from a resting value of 0 up to 1.
    Forward,
    /// Towards lower indexes, or from a resting value of 1 down to 0.
    Backward,
}

impl Direction {
    /// The signed unit this direction moves by.
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// The data a renderer needs to draw the current state of the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Index of the active node, used to pick its palette color.
    pub active_index: usize,
    /// Interpolation value of the active node.
    pub scale: f32,
}
