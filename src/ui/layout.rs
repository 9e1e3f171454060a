//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout with sidebar, reserving the bottom line for the
/// status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with one boxed button per site section
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(BUTTON_HEIGHT), // Home
            Constraint::Length(BUTTON_HEIGHT), // Services
            Constraint::Length(BUTTON_HEIGHT), // Work
            Constraint::Length(BUTTON_HEIGHT), // About
            Constraint::Length(BUTTON_HEIGHT), // Contact
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        let is_selected = app.state.current_view == *view;
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &format!("{}", idx + 1),
            view.label(),
            is_selected,
        );
    }
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            get_view_hints(&app.state.current_view),
            Style::default().fg(Color::Gray),
        ),
    ];

    // Copy feedback
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Configured backend
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("API: {}", app.api_base_url),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Contact => format!(
            "Tab:next  ←/→:options  {}:send  Esc:back",
            crate::platform::SEND_SHORTCUT
        ),
        _ => "1-5:section  h/l:nav  j/k:scroll  c:contact  y:copy email  q:quit".to_string(),
    }
}
