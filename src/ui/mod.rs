//! UI module for rendering the TUI

mod components;
mod contact;
mod field_renderer;
mod layout;
mod sections;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => sections::draw_home(frame, main_area, app),
        View::Services => sections::draw_services(frame, main_area, app),
        View::Work => sections::draw_work(frame, main_area, app),
        View::About => sections::draw_about(frame, main_area, app),
        View::Contact => contact::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
