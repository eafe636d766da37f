/// Date-range dialog used to collect arrival and departure dates
use crate::actions::DateField;
use crate::common::{centered_rect, render_calendar_below};
use crate::stores::booking_store::DialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

pub struct BookingModal<'a> {
    dialog: &'a DialogState,
}

impl<'a> BookingModal<'a> {
    pub fn new(dialog: &'a DialogState) -> Self {
        Self { dialog }
    }

    fn input_box(&self, label: &str, value: &str, field: DateField, buf: &mut Buffer, area: Rect) {
        let focused = self.dialog.fields_enabled && self.dialog.focused_field == field;
        let border_style = if !self.dialog.fields_enabled {
            Style::default().fg(Color::DarkGray)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", label))
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let shown = if value.is_empty() && !focused {
            Span::styled(
                self.dialog.date_format().to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            let mut text = value.to_string();
            if focused {
                text.push('_');
            }
            Span::raw(text)
        };
        Paragraph::new(Line::from(shown)).render(inner, buf);
    }

    pub fn render(&self, screen: Rect, buf: &mut Buffer) {
        let area = centered_rect(60, 45, screen);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.dialog.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.input_box(
            "Arrival",
            &self.dialog.start_input,
            DateField::Start,
            buf,
            fields[0],
        );
        self.input_box(
            "Departure",
            &self.dialog.end_input,
            DateField::End,
            buf,
            fields[1],
        );

        if let Some(error) = &self.dialog.error_message {
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))
            .alignment(Alignment::Center)
            .render(rows[2], buf);
        }

        let hint = if self.dialog.calendar_open {
            "arrows: move  Enter: pick date  Tab: switch field  Esc: cancel"
        } else {
            "Enter: check availability  Tab: switch field  Esc: cancel"
        };
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(rows[3], buf);

        if self.dialog.calendar_open && self.dialog.fields_enabled {
            let anchor = match self.dialog.focused_field {
                DateField::Start => fields[0],
                DateField::End => fields[1],
            };
            render_calendar_below(
                screen,
                anchor,
                buf,
                self.dialog.selected_date,
                self.dialog.min_date(),
                "Pick a date",
            );
        }
    }
}

pub struct SubmittingModal;

impl SubmittingModal {
    pub fn render(screen: Rect, buf: &mut Buffer) {
        let area = centered_rect(40, 20, screen);
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::from(Span::styled(
            "Checking availability…",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}
