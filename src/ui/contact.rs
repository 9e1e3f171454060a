//! Contact form rendering (fields, status banner, submit button)

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_select_field, draw_text_field};
use crate::app::App;
use crate::state::{content, ContactField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact view: form on the left, "why us" panel on the right
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(48),    // Form area
            Constraint::Length(36), // Side panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_side_panel(frame, main_chunks[1]);
}

/// Draw the form fields, the status banner, and the submit button
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Tell us about your project ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Company
            Constraint::Length(3),             // Service
            Constraint::Length(3),             // Budget
            Constraint::Min(5),                // Project details
            Constraint::Length(1),             // Status banner
            Constraint::Length(BUTTON_HEIGHT), // Submit button
        ])
        .margin(1)
        .split(area);

    let form = &app.state.contact_form;
    for (idx, field) in ContactField::ALL.iter().enumerate() {
        let is_active = form.active_field() == Some(*field);
        let value = form.data().get(*field);
        if field.is_select() {
            draw_select_field(frame, chunks[idx], field.label(), value, is_active);
        } else {
            draw_text_field(
                frame,
                chunks[idx],
                field.label(),
                value,
                field.placeholder(),
                is_active,
                field.is_multiline(),
            );
        }
    }

    draw_status_banner(frame, chunks[6], app);

    let pending = app.submission.is_pending();
    let label = if pending { "Sending…" } else { "Send message" };
    let button_area = Rect {
        width: chunks[7].width.min(20),
        ..chunks[7]
    };
    render_button(
        frame,
        button_area,
        label,
        form.is_submit_row_active(),
        !pending,
    );
}

/// One line showing the success confirmation, the failure reason, or the
/// advisory required-field hint; mutually exclusive.
fn draw_status_banner(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.submission.status();
    let (message, color) = if let Some(msg) = status.success_message() {
        (msg, Color::Green)
    } else if let Some(msg) = status.failure_message() {
        (msg, Color::Red)
    } else if let Some(hint) = app.state.form_hint.as_deref() {
        (hint, Color::Yellow)
    } else {
        return;
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(color),
        ))),
        area,
    );
}

/// Draw the static "why teams choose us" panel
fn draw_side_panel(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Why teams choose us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for point in content::WHY_US_POINTS {
        lines.push(Line::from(Span::styled(
            format!(" • {point}"),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled(" Prefer email? ", Style::default().fg(Color::Gray)),
        Span::styled(content::CONTACT_EMAIL, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
