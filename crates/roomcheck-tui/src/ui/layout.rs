/// Top-level frame composition: base screen, then modals and overlays
use crate::common::centered_rect;
use crate::logger::LogBuffer;
use crate::stores::booking_store::WorkflowState;
use crate::stores::{BookingStore, NoticesStore, UIStore};
use crate::ui::booking_modal::{BookingModal, SubmittingModal};
use crate::ui::notice_modal::NoticeModal;
use crate::ui::toast::ToastView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub fn render_layout(
    frame: &mut Frame,
    ui_store: &UIStore,
    booking_store: &BookingStore,
    notices_store: &NoticesStore,
    log_buffer: &LogBuffer,
) {
    let screen = frame.area();
    let ui_state = ui_store.get_state();
    let workflow = booking_store.get_state();
    let notices = notices_store.get_state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(screen);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " roomcheck ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("room {}", ui_state.room_id)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let body_hint = match &workflow {
        WorkflowState::Idle | WorkflowState::Resolved => {
            "Press Enter to check this room's availability"
        }
        WorkflowState::DialogOpen(_) => "Choose your arrival and departure dates",
        WorkflowState::Submitting(_) => "Contacting the booking server",
    };
    let body = Paragraph::new(body_hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(body, chunks[1]);

    let footer = Paragraph::new(Span::styled(
        " Enter/a: check availability  ?: help  l: logs  q: quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(footer, chunks[2]);

    match &workflow {
        WorkflowState::DialogOpen(dialog) => {
            BookingModal::new(dialog).render(screen, frame.buffer_mut());
        }
        WorkflowState::Submitting(_) => {
            SubmittingModal::render(screen, frame.buffer_mut());
        }
        _ => {}
    }

    if let Some(notice) = &notices.notice {
        NoticeModal::new(notice).render(screen, frame.buffer_mut());
    }

    if ui_state.show_logs {
        render_logs_overlay(frame, screen, log_buffer);
    }

    if ui_state.show_help {
        render_help_overlay(frame, screen);
    }

    if let Some(toast) = &notices.toast {
        ToastView::new(toast).render(screen, frame.buffer_mut());
    }
}

fn render_logs_overlay(frame: &mut Frame, screen: Rect, log_buffer: &LogBuffer) {
    let area = centered_rect(80, 70, screen);
    frame.render_widget(Clear, area);

    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = log_buffer
        .get_recent_logs(visible)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Logs (l to close) ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(list, area);
}

fn render_help_overlay(frame: &mut Frame, screen: Rect) {
    let area = centered_rect(50, 60, screen);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter / a   open the date dialog"),
        Line::from("Tab         switch between arrival and departure"),
        Line::from("arrows      move around the calendar"),
        Line::from("Enter       pick the highlighted date"),
        Line::from("Esc         cancel the dialog"),
        Line::from("l           toggle the log overlay"),
        Line::from("?           toggle this help"),
        Line::from("q           quit"),
    ];

    let help = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(help, area);
}
