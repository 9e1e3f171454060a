//! Application state definitions

use crate::state::ContactForm;

/// Current view in the application, one per site section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Services,
    Work,
    About,
    Contact,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::Services,
        View::Work,
        View::About,
        View::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Work => "Work",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Services,
            Self::Services => Self::Work,
            Self::Work => Self::About,
            Self::About => Self::Contact,
            Self::Contact => Self::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Home => Self::Contact,
            Self::Services => Self::Home,
            Self::Work => Self::Services,
            Self::About => Self::Work,
            Self::Contact => Self::About,
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Contact form draft
    pub contact_form: ContactForm,
    /// Inline hint from the advisory required-field check, cleared on edit
    pub form_hint: Option<String>,

    // UI state
    pub scroll_offset: usize,
}

impl AppState {
    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Reset scroll position
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    /// Switch to a view, resetting per-view scroll state
    pub fn navigate(&mut self, view: View) {
        self.current_view = view;
        self.reset_scroll();
    }
}
