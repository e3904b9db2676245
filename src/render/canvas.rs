use super::{
    card::{CardLayout, CellKind},
    color::Color,
};
use crate::{
    animation::Frame,
    config::{CardConfig, Config, PaletteConfig},
};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

const HELP: &str = "tap: any key or click  p: pause  q: quit";

/// How much of the screen a frame redraws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repaint {
    /// Clear the whole screen first, after a resize or on the first frame.
    Full,
    /// Only redraw the card area and the status line.
    Card,
}

/// Draws frames of the card animation using terminal commands.
#[derive(Debug)]
pub struct Canvas<'a> {
    palette: &'a PaletteConfig,
    card: &'a CardConfig,
}

impl<'a> Canvas<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { palette: &config.palette, card: &config.card }
    }

    /// The color the card at `index` is drawn with.
    pub fn card_color(&self, index: usize) -> Color {
        let colors = &self.palette.colors;
        colors.get(index % colors.len().max(1)).copied().unwrap_or(self.palette.background)
    }

    /// Draw a frame on a `columns` x `rows` screen.
    ///
    /// The last row is used as a status line and the card is centered in the rest. Only
    /// [Repaint::Full] clears the screen, otherwise just the card area and status line are redrawn.
    pub fn draw<W: Write>(
        &self,
        out: &mut W,
        columns: u16,
        rows: u16,
        frame: Frame,
        repaint: Repaint,
    ) -> io::Result<()> {
        let background = self.palette.background;
        let edge = self.card_color(frame.active_index);
        let fill = edge.mix(background, 0.35);

        queue!(out, ResetColor, SetBackgroundColor(background.into()))?;
        if repaint == Repaint::Full {
            queue!(out, Clear(ClearType::All))?;
        }
        let layout = CardLayout::new(self.card, columns, rows.saturating_sub(1), frame);
        let area = layout.area();
        for y in area.y..area.y + area.height {
            queue!(out, MoveTo(area.x, y))?;
            for x in area.x..area.x + area.width {
                let color = match layout.cell(x, y) {
                    Some(CellKind::Edge) => edge,
                    Some(CellKind::Fill) => fill,
                    None => background,
                };
                queue!(out, SetBackgroundColor(color.into()), Print(' '))?;
            }
        }

        if rows > 0 {
            let status = self.status_line(frame, columns);
            queue!(
                out,
                MoveTo(0, rows - 1),
                SetBackgroundColor(background.into()),
                SetForegroundColor(edge.into()),
                Print(status)
            )?;
        }
        queue!(out, ResetColor)?;
        out.flush()
    }

    /// The status line, padded to the screen width so it overwrites the previous one.
    fn status_line(&self, frame: Frame, columns: u16) -> String {
        let progress = (frame.scale.clamp(0.0, 1.0) * 100.0).round();
        let line = format!(" card {}/{}  {progress:>3}%  {HELP}", frame.active_index + 1, self.palette.colors.len());
        let line: String = line.chars().take(columns as usize).collect();
        format!("{line:<width$}", width = columns as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.palette.colors = vec![Color::new(255, 0, 0), Color::new(0, 0, 255)];
        config
    }

    #[test]
    fn card_colors() {
        let config = config();
        let canvas = Canvas::new(&config);
        assert_eq!(canvas.card_color(0), Color::new(255, 0, 0));
        assert_eq!(canvas.card_color(1), Color::new(0, 0, 255));
        assert_eq!(canvas.card_color(2), Color::new(255, 0, 0));
    }

    #[test]
    fn status_line() {
        let config = config();
        let canvas = Canvas::new(&config);
        let line = canvas.status_line(Frame { active_index: 1, scale: 0.5 }, 200);
        assert!(line.starts_with(" card 2/2   50%"), "unexpected status line: {line}");
        assert!(line.trim_end().ends_with(HELP));
        assert_eq!(line.chars().count(), 200);

        let line = canvas.status_line(Frame { active_index: 0, scale: 1.0 }, 10);
        assert_eq!(line, " card 1/2 ");
    }

    #[test]
    fn draw_full_card() {
        let config = config();
        let canvas = Canvas::new(&config);
        let mut output = Vec::new();
        let frame = Frame { active_index: 1, scale: 1.0 };
        canvas.draw(&mut output, 40, 21, frame, Repaint::Full).expect("failed to draw");

        let output = String::from_utf8(output).expect("not utf8");
        // blue edge cells and the status line
        assert!(output.contains("\x1b[48;2;0;0;255m"));
        assert!(output.contains("card 2/2"));
        assert!(output.contains("\x1b[2J"));
    }

    #[test]
    fn card_repaint_keeps_the_screen() {
        let config = config();
        let canvas = Canvas::new(&config);
        let mut output = Vec::new();
        let frame = Frame { active_index: 0, scale: 0.5 };
        canvas.draw(&mut output, 40, 21, frame, Repaint::Card).expect("failed to draw");

        let output = String::from_utf8(output).expect("not utf8");
        assert!(!output.contains("\x1b[2J"));
        // the unrevealed part of the card is painted over with the background
        assert!(output.contains("\x1b[48;2;189;189;189m \x1b[48;2;189;189;189m "));
        assert!(output.contains("\x1b[48;2;255;0;0m"));
    }

    #[test]
    fn draw_resting_card() {
        let config = config();
        let canvas = Canvas::new(&config);
        let mut output = Vec::new();
        let frame = Frame { active_index: 0, scale: 0.0 };
        canvas.draw(&mut output, 40, 21, frame, Repaint::Card).expect("failed to draw");

        let output = String::from_utf8(output).expect("not utf8");
        assert!(!output.contains("\x1b[48;2;255;0;0m"));
    }

    #[test]
    fn draw_on_empty_screen() {
        let config = config();
        let canvas = Canvas::new(&config);
        let mut output = Vec::new();
        let frame = Frame { active_index: 0, scale: 1.0 };
        canvas.draw(&mut output, 0, 0, frame, Repaint::Full).expect("failed to draw");
        assert!(!output.is_empty());
    }
}
