mod canvas;
mod card;
mod color;

pub use canvas::{Canvas, Repaint};
pub use card::{divide_scale, CardLayout, CellKind, Rect, CARD_PARTS};
pub use color::{Color, ColorError};
