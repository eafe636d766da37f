/// Reusable calendar widget for date selection
use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Calendar widget that displays a monthly calendar view
pub struct CalendarWidget {
    /// The date to display and highlight
    pub selected_date: NaiveDate,
    /// Dates before this render dim and are not selectable
    pub min_date: Option<NaiveDate>,
    /// Optional title for the calendar
    pub title: Option<String>,
    /// Whether to show a border
    pub bordered: bool,
    /// Whether to highlight today's date
    pub highlight_today: bool,
}

impl CalendarWidget {
    /// Create a new calendar widget for the given date
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            min_date: None,
            title: None,
            bordered: true,
            highlight_today: true,
        }
    }

    /// Set the earliest selectable date
    pub fn min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = Some(min_date);
        self
    }

    /// Set a title for the calendar
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render the calendar widget
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let year = self.selected_date.year();
        let month = self.selected_date.month();
        let day = self.selected_date.day();

        let mut lines = vec![];

        // Month/Year header
        lines.push(Line::from(vec![Span::styled(
            self.selected_date.format("%B %Y").to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        // Weekday headers
        lines.push(Line::from(vec![Span::styled(
            "Su Mo Tu We Th Fr Sa",
            Style::default().fg(Color::Yellow),
        )]));

        let first_of_month = self.selected_date.with_day(1).unwrap();
        let first_weekday = first_of_month.weekday().num_days_from_sunday();
        let days_in_month = days_in_month(year, month);

        // Build calendar grid
        let mut current_line = vec![];

        // Add leading spaces
        for _ in 0..first_weekday {
            current_line.push(Span::raw("   "));
        }

        let today = if self.highlight_today {
            Some(Local::now().date_naive())
        } else {
            None
        };

        // Add days
        for d in 1..=days_in_month {
            let date = first_of_month.with_day(d).unwrap();

            let style = if d == day {
                // Highlight selected day
                Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else if self.min_date.map(|min| date < min).unwrap_or(false) {
                // Dates before the minimum are not on offer
                Style::default().fg(Color::DarkGray)
            } else if today == Some(date) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            current_line.push(Span::styled(format!("{:>2} ", d), style));

            // Start new line on Sunday
            if (first_weekday + d) % 7 == 0 {
                lines.push(Line::from(current_line.clone()));
                current_line.clear();
            }
        }

        // Add remaining line if not empty
        if !current_line.is_empty() {
            lines.push(Line::from(current_line));
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

        if self.bordered {
            let title = self
                .title
                .as_ref()
                .map(|t| t.as_str())
                .unwrap_or(" Calendar ");
            let block = Block::default()
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));

            let inner_area = block.inner(area);
            block.render(area, buf);
            paragraph.render(inner_area, buf);
        } else {
            paragraph.render(area, buf);
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    next.signed_duration_since(first).num_days() as u32
}

/// Render a calendar popup positioned below a specific area (like an input field)
pub fn render_calendar_below(
    screen_area: Rect,
    below_area: Rect,
    buf: &mut Buffer,
    selected_date: NaiveDate,
    min_date: NaiveDate,
    title: &str,
) {
    // Calendar needs: 1 month/year + 1 blank + 1 weekdays + up to 6 weeks + borders
    let calendar_height = 12;
    let calendar_width = 26; // "Su Mo Tu We Th Fr Sa" = 20 chars + padding + borders

    // Position below the input area, aligned to its left edge
    let x = below_area.x;
    let y = below_area.y + below_area.height;

    // Ensure calendar doesn't go off screen
    let x = x.min(screen_area.width.saturating_sub(calendar_width));
    let y = y.min(screen_area.height.saturating_sub(calendar_height));

    let popup_area = Rect {
        x,
        y,
        width: calendar_width,
        height: calendar_height,
    };

    // Clear background
    Clear.render(popup_area, buf);

    CalendarWidget::new(selected_date)
        .min_date(min_date)
        .title(title)
        .render(popup_area, buf);
}

/// Helper function to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 6), 30);
    }
}
