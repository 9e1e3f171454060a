//! Rendering for the static site sections (hero, services, work, about)
//!
//! These views draw fixed display data and hold no state beyond the shared
//! scroll offset.

use crate::app::App;
use crate::state::content;
use chrono::{Datelike, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the home view (hero banner, call to action, client logo strip)
pub fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Hero
            Constraint::Length(3), // Logo strip
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Flames Agency ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let hero = vec![
        Line::from(""),
        Line::from(Span::styled(
            content::HERO_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            content::HERO_TAGLINE,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[c] ", Style::default().fg(Color::Cyan)),
            Span::raw("Start a project    "),
            Span::styled("[3] ", Style::default().fg(Color::Cyan)),
            Span::raw("See our work"),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(hero)
            .wrap(Wrap { trim: false })
            .scroll((app.state.scroll_offset as u16, 0)),
        chunks[0],
    );

    let logos = content::CLIENT_LOGOS.join("   ·   ");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            logos,
            Style::default().fg(Color::DarkGray),
        )))
        .centered(),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "© {} Flames Agency. All rights reserved.",
                Utc::now().year()
            ),
            Style::default().fg(Color::DarkGray),
        )))
        .centered(),
        chunks[2],
    );
}

/// Draw the services view
pub fn draw_services(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" What we do ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Strategy, design, and growth services tailored to your stage.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for service in &content::SERVICES {
        lines.push(Line::from(Span::styled(
            service.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", service.desc),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.state.scroll_offset as u16, 0)),
        inner,
    );
}

/// Draw the portfolio view
pub fn draw_work(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Selected work ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "A snapshot of recent projects.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for project in &content::CASE_STUDIES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", project.tag.to_uppercase()),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(
                project.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("[c] ", Style::default().fg(Color::Cyan)),
        Span::raw("Work with us"),
    ]));

    frame.render_widget(
        Paragraph::new(lines).scroll((app.state.scroll_offset as u16, 0)),
        inner,
    );
}

/// Draw the about view
pub fn draw_about(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            content::ABOUT_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            content::ABOUT_COPY,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for point in content::ABOUT_POINTS {
        lines.push(Line::from(format!("  • {point}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Prefer email? ", Style::default().fg(Color::Gray)),
        Span::styled(content::CONTACT_EMAIL, Style::default().fg(Color::Cyan)),
        Span::styled("  (y to copy)", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.state.scroll_offset as u16, 0)),
        inner,
    );
}
