use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{PALETTE, WINDOW_TITLE};
use crate::game::GameState;
use crate::presenter;
use crate::ui::canvas::CanvasSurface;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(PALETTE.background)), area);

    let window = square_window(area);
    let block = Block::bordered()
        .title(WINDOW_TITLE)
        .title_alignment(Alignment::Center)
        .title_style(Style::new().add_modifier(Modifier::BOLD))
        .border_style(Style::new().fg(PALETTE.text));

    let inner = block.inner(window);
    frame.render_widget(block, window);

    let mut surface = CanvasSurface::new(inner);
    presenter::render(&mut surface, state);
    frame.render_widget(surface, inner);
}

/// Largest bordered window whose inside is square in half-block pixels.
///
/// A terminal cell holds two half-block pixels stacked vertically, so a square
/// canvas is twice as many columns as rows.
#[must_use]
pub fn square_window(area: Rect) -> Rect {
    if area.width < 4 || area.height < 3 {
        return area;
    }

    let columns = area.width - 2;
    let rows = area.height - 2;
    let side = columns.min(rows.saturating_mul(2));

    let width = side + 2;
    let height = side.div_ceil(2) + 2;

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
