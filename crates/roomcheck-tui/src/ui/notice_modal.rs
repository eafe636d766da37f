/// Centred result dialog for availability outcomes and errors
use crate::actions::Notice;
use crate::common::centered_rect;
use crate::ui::toast::icon_span;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct NoticeModal<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeModal<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    pub fn render(&self, screen: Rect, buf: &mut Buffer) {
        let area = centered_rect(50, 40, screen);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.notice.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            icon_span(self.notice.icon),
            Span::raw(self.notice.message.clone()),
        ]));
        if let Some(link) = &self.notice.link {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Book Now!",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            lines.push(Line::from(Span::styled(
                link.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if !self.notice.footer.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.notice.footer.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
        let hint = if self.notice.show_confirm_button {
            "[ Enter: OK ]"
        } else {
            "[ Enter/Esc: close ]"
        };
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::Yellow),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
