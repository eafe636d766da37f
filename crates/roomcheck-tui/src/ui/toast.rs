/// Transient toast notification, pinned to a screen corner
use crate::actions::{Icon, Toast, ToastPosition};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Widget},
};

const TOAST_WIDTH: u16 = 38;
const TOAST_HEIGHT: u16 = 4;

/// Where a toast with the given position lands on screen. Shared with the
/// mouse handler so hover hit-testing matches what is drawn.
pub fn toast_area(screen: Rect, position: ToastPosition) -> Rect {
    let width = TOAST_WIDTH.min(screen.width);
    let height = TOAST_HEIGHT.min(screen.height);

    let x = match position {
        ToastPosition::TopEnd | ToastPosition::BottomEnd => {
            screen.x + screen.width.saturating_sub(width)
        }
        ToastPosition::TopStart | ToastPosition::BottomStart => screen.x,
    };
    let y = match position {
        ToastPosition::TopEnd | ToastPosition::TopStart => screen.y,
        ToastPosition::BottomEnd | ToastPosition::BottomStart => {
            screen.y + screen.height.saturating_sub(height)
        }
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn icon_span(icon: Icon) -> Span<'static> {
    match icon {
        Icon::Success => Span::styled("✔ ", Style::default().fg(Color::Green)),
        Icon::Error => Span::styled("✘ ", Style::default().fg(Color::Red)),
        Icon::None => Span::raw(""),
    }
}

pub struct ToastView<'a> {
    toast: &'a Toast,
}

impl<'a> ToastView<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    pub fn render(&self, screen: Rect, buf: &mut Buffer) {
        let area = toast_area(screen, self.toast.position);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let message = Line::from(vec![
            icon_span(self.toast.icon),
            Span::raw(self.toast.message.clone()),
        ]);
        Paragraph::new(message).render(chunks[0], buf);

        // Remaining-time bar, frozen while hovered
        let ratio = if self.toast.total_ms == 0 {
            0.0
        } else {
            self.toast.remaining_ms as f64 / self.toast.total_ms as f64
        };
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(ratio)
            .label("")
            .render(chunks[1], buf);
    }
}
