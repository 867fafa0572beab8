use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Painter, Shape};
use unicode_width::UnicodeWidthStr;

use crate::config::{PALETTE, PANEL_HEIGHT, PANEL_WIDTH};
use crate::presenter::Surface;

/// Axis-aligned rectangle in logical units, y growing downward.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct LogicalRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl LogicalRect {
    /// Clips to the canvas; `None` when nothing remains.
    fn clipped(self) -> Option<Self> {
        let left = self.x.max(0);
        let top = self.y.max(0);
        let right = (self.x + self.width).min(PANEL_WIDTH);
        let bottom = (self.y + self.height).min(PANEL_HEIGHT);

        if left >= right || top >= bottom {
            return None;
        }

        Some(Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        })
    }

    /// Painter cells covering the rectangle as (left, top, right, bottom), inclusive.
    fn cells(self, painter: &Painter<'_, '_>) -> Option<(usize, usize, usize, usize)> {
        let (left, top) = painter.get_point(
            f64::from(self.x),
            canvas_y(self.y),
        )?;
        let (right, bottom) = painter.get_point(
            f64::from(self.x + self.width - 1),
            canvas_y(self.y + self.height - 1),
        )?;
        Some((left, top, right.max(left), bottom.max(top)))
    }
}

/// Ratatui's canvas puts y = 0 at the bottom.
fn canvas_y(y: i32) -> f64 {
    f64::from(PANEL_HEIGHT - y)
}

#[derive(Debug, Clone, Copy)]
struct FilledRect {
    bounds: LogicalRect,
    color: Color,
}

impl Shape for FilledRect {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let Some((left, top, right, bottom)) =
            self.bounds.clipped().and_then(|bounds| bounds.cells(painter))
        else {
            return;
        };

        for row in top..=bottom {
            for column in left..=right {
                painter.paint(column, row, self.color);
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct FilledOval {
    bounds: LogicalRect,
    color: Color,
}

impl Shape for FilledOval {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let full = self.bounds;
        let Some((left, top, right, bottom)) = full.cells(painter) else {
            return;
        };

        let radius_x = f64::from(full.width) / 2.0;
        let radius_y = f64::from(full.height) / 2.0;
        let center_x = f64::from(full.x) + radius_x;
        let center_y = f64::from(full.y) + radius_y;
        let unit_x = f64::from(full.width) / (right - left + 1) as f64;
        let unit_y = f64::from(full.height) / (bottom - top + 1) as f64;

        for row in top..=bottom {
            let y = f64::from(full.y) + ((row - top) as f64 + 0.5) * unit_y;
            for column in left..=right {
                let x = f64::from(full.x) + ((column - left) as f64 + 0.5) * unit_x;
                let dx = (x - center_x) / radius_x;
                let dy = (y - center_y) / radius_y;
                if dx * dx + dy * dy <= 1.0 {
                    painter.paint(column, row, self.color);
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Label {
    text: String,
    x: i32,
    baseline: i32,
    size: i32,
    color: Color,
}

#[derive(Debug, Clone)]
enum DrawOp {
    Rect(FilledRect),
    Oval(FilledOval),
    Text(Label),
}

/// Collects presenter draw calls and paints them as a ratatui [`Canvas`]
/// spanning the fixed logical board.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    columns: u16,
    ops: Vec<DrawOp>,
}

impl CanvasSurface {
    /// Creates an empty surface for a canvas `area` cells wide.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        Self {
            columns: area.width.max(1),
            ops: Vec::new(),
        }
    }

    fn units_per_column(&self) -> f64 {
        f64::from(PANEL_WIDTH) / f64::from(self.columns)
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.ops.push(DrawOp::Rect(FilledRect {
            bounds: LogicalRect {
                x,
                y,
                width,
                height,
            },
            color,
        }));
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.ops.push(DrawOp::Oval(FilledOval {
            bounds: LogicalRect {
                x,
                y,
                width,
                height,
            },
            color,
        }));
    }

    fn draw_text(&mut self, text: &str, x: i32, baseline: i32, size: i32, color: Color) {
        self.ops.push(DrawOp::Text(Label {
            text: text.to_owned(),
            x,
            baseline,
            size,
            color,
        }));
    }

    // Terminal glyphs have one size; `size` only affects vertical placement.
    fn text_width(&self, text: &str, _size: i32) -> i32 {
        let columns = text.width() as f64;
        (columns * self.units_per_column()).ceil() as i32
    }
}

impl Widget for CanvasSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ops = self.ops;

        Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(PALETTE.background)
            .x_bounds([0.0, f64::from(PANEL_WIDTH)])
            .y_bounds([0.0, f64::from(PANEL_HEIGHT)])
            .paint(|ctx| {
                for op in &ops {
                    match op {
                        DrawOp::Rect(shape) => ctx.draw(shape),
                        DrawOp::Oval(shape) => ctx.draw(shape),
                        DrawOp::Text(label) => {
                            // Glyph row sits half a text height above the baseline.
                            let x = label.x.clamp(0, PANEL_WIDTH);
                            let y = (label.baseline - label.size / 2).clamp(0, PANEL_HEIGHT);
                            let style = Style::new().fg(label.color).add_modifier(Modifier::BOLD);
                            ctx.print(
                                f64::from(x),
                                canvas_y(y),
                                Line::styled(label.text.clone(), style),
                            );
                        }
                    }
                }
            })
            .render(area, buf);
    }
}
