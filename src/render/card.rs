use crate::{animation::Frame, config::CardConfig};

/// The number of stages a card is drawn in: horizontal edges, vertical edges, fill.
pub const CARD_PARTS: usize = 3;

/// The smallest card that still has an inside.
const MIN_SIDE: u16 = 3;

/// Split `scale` into `parts` consecutive stages and get how far along stage `part` is.
///
/// Every stage goes from 0 to 1 while `scale` covers its share of the `[0, 1]` range.
pub fn divide_scale(scale: f32, part: usize, parts: usize) -> f32 {
    let share = 1.0 / parts as f32;
    (scale - part as f32 * share).max(0.0).min(share) * parts as f32
}

/// What a cell that belongs to the card is painted as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Edge,
    Fill,
}

/// A rectangle in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}

/// Where the card goes on screen and how much of it is drawn.
///
/// The card is drawn in stages as its scale grows: first the top and bottom edges grow out of the
/// middle, then the side edges grow downwards, and finally the inside fills up from the bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    area: Rect,
    /// How many cells of the horizontal edges are drawn on each side of the middle.
    horizontal: u16,
    /// How many rows of the vertical edges are drawn.
    vertical: u16,
    /// How many inside rows are filled.
    fill: u16,
}

impl CardLayout {
    pub fn new(config: &CardConfig, columns: u16, rows: u16, frame: Frame) -> Self {
        let width = scaled_side(columns, config.width_factor);
        let height = scaled_side(rows, config.height_factor);
        let area = Rect { x: (columns - width) / 2, y: (rows - height) / 2, width, height };

        let scale = frame.scale.clamp(0.0, 1.0);
        let reveal = |part: usize, length: u16| (divide_scale(scale, part, CARD_PARTS) * length as f32).round() as u16;
        Self {
            area,
            horizontal: reveal(0, width.div_ceil(2)),
            vertical: reveal(1, height),
            fill: reveal(2, height.saturating_sub(2)),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// What the cell at the given screen position is painted as, if it's part of the card.
    pub fn cell(&self, x: u16, y: u16) -> Option<CellKind> {
        if !self.area.contains(x, y) {
            return None;
        }
        let Rect { width, height, .. } = self.area;
        let (column, row) = (x - self.area.x, y - self.area.y);

        if row == 0 || row == height - 1 {
            // distance from the middle, the middle two cells of an even width are both at 0
            let from_middle = (2 * i32::from(column) + 1 - i32::from(width)).unsigned_abs() / 2;
            return (from_middle < u32::from(self.horizontal)).then_some(CellKind::Edge);
        }
        if column == 0 || column == width - 1 {
            return (row < self.vertical).then_some(CellKind::Edge);
        }
        (height - 1 - row <= self.fill).then_some(CellKind::Fill)
    }

    /// Iterate every painted cell as `(x, y, kind)`.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, CellKind)> + '_ {
        let Rect { x, y, width, height } = self.area;
        (y..y + height).flat_map(move |row| {
            (x..x + width).filter_map(move |column| self.cell(column, row).map(|kind| (column, row, kind)))
        })
    }
}

fn scaled_side(available: u16, factor: f32) -> u16 {
    let side = (available as f32 / factor).round() as u16;
    side.max(MIN_SIDE).min(available)
}
