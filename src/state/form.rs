//! Contact form state: the draft submission and its editing cursor

use crate::state::content::{BUDGET_OPTIONS, SERVICE_OPTIONS};
use serde::Serialize;

/// The six fields of the contact form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Service,
    Budget,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Company,
        ContactField::Service,
        ContactField::Budget,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Service => "Service",
            Self::Budget => "Budget",
            Self::Message => "Project details",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Jane Doe",
            Self::Email => "jane@company.com",
            Self::Company => "Acme Inc.",
            Self::Service | Self::Budget => "Select",
            Self::Message => "Goals, timeline, links…",
        }
    }

    /// Fixed option set for select fields, None for free-text fields
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Service => Some(SERVICE_OPTIONS),
            Self::Budget => Some(BUDGET_OPTIONS),
            _ => None,
        }
    }

    pub fn is_select(&self) -> bool {
        self.options().is_some()
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// The user's draft submission.
///
/// Serializes to exactly the JSON body the Contact API expects: all six keys
/// string-valued, empty string for unset optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub budget: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Service => &self.service,
            ContactField::Budget => &self.budget,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Service => &mut self.service,
            ContactField::Budget => &mut self.budget,
            ContactField::Message => &mut self.message,
        }
    }

    /// Replace one field's value, leaving the others untouched
    pub fn set(&mut self, field: ContactField, value: String) {
        *self.get_mut(field) = value;
    }

    /// Advisory pre-submit check mirroring native required-field and email
    /// enforcement. Business-rule validation belongs to the Contact API.
    pub fn validation_hint(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("Name is required");
        }
        if !looks_like_email(&self.email) {
            return Some("A valid email address is required");
        }
        if self.message.trim().is_empty() {
            return Some("Project details are required");
        }
        None
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Index of the submit button row in the tab order (after the six fields)
const SUBMIT_ROW: usize = ContactField::ALL.len();

/// Single source of truth for the draft submission, plus the TUI editing
/// cursor (which row is active)
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    data: FormData,
    active_index: usize,
}

impl ContactForm {
    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.data.set(field, value);
    }

    /// Replace the entire draft with the empty default. Called only after a
    /// confirmed successful submission.
    pub fn reset(&mut self) {
        self.data = FormData::default();
    }

    /// The field under the cursor, None when the submit button row is active
    pub fn active_field(&self) -> Option<ContactField> {
        ContactField::ALL.get(self.active_index).copied()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_index == SUBMIT_ROW
    }

    pub fn next_field(&mut self) {
        self.active_index = (self.active_index + 1) % (SUBMIT_ROW + 1);
    }

    pub fn prev_field(&mut self) {
        if self.active_index == 0 {
            self.active_index = SUBMIT_ROW;
        } else {
            self.active_index -= 1;
        }
    }

    /// Append a character to the active text field (ignored on selects and
    /// the button row)
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            if !field.is_select() {
                self.data.get_mut(field).push(c);
            }
        }
    }

    /// Remove the last character from the active text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field() {
            if !field.is_select() {
                self.data.get_mut(field).pop();
            }
        }
    }

    /// Insert a newline in the active field if it is multi-line
    pub fn newline(&mut self) {
        if let Some(field) = self.active_field() {
            if field.is_multiline() {
                self.data.get_mut(field).push('\n');
            }
        }
    }

    /// Step the active select field through its option set. The empty value
    /// ("Select") sits before the first option, so cycling can always return
    /// to unset.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let Some(options) = field.options() else {
            return;
        };

        // Position 0 is the empty value, options occupy 1..=len
        let len = options.len() + 1;
        let current = options
            .iter()
            .position(|o| *o == self.data.get(field))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].to_string()
        };
        self.data.set(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(ContactField::Name, "Jane".to_string());
        form.set_field(ContactField::Email, "jane@x.com".to_string());
        form.set_field(ContactField::Message, "Hello".to_string());
        form
    }

    mod form_data {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_all_empty() {
            let data = FormData::default();
            for field in ContactField::ALL {
                assert_eq!(data.get(field), "");
            }
        }

        #[test]
        fn test_set_changes_only_named_field() {
            let mut data = FormData {
                name: "Jane".to_string(),
                message: "Hello".to_string(),
                ..Default::default()
            };
            let before = data.clone();

            data.set(ContactField::Email, "jane@x.com".to_string());

            assert_eq!(data.email, "jane@x.com");
            assert_eq!(data.name, before.name);
            assert_eq!(data.company, before.company);
            assert_eq!(data.service, before.service);
            assert_eq!(data.budget, before.budget);
            assert_eq!(data.message, before.message);
        }

        #[test]
        fn test_serializes_to_wire_keys() {
            let data = FormData {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                ..Default::default()
            };
            let value = serde_json::to_value(&data).unwrap();
            let object = value.as_object().unwrap();

            let keys: Vec<&str> = object.keys().map(String::as_str).collect();
            assert_eq!(
                keys,
                vec!["name", "email", "company", "service", "budget", "message"]
            );
            assert_eq!(object["name"], "Jane");
            // Unset optional fields serialize as empty strings, not null
            assert_eq!(object["company"], "");
        }

        #[test]
        fn test_validation_requires_name() {
            let mut data = FormData::default();
            assert_eq!(data.validation_hint(), Some("Name is required"));
            data.name = "Jane".to_string();
            assert_ne!(data.validation_hint(), Some("Name is required"));
        }

        #[test]
        fn test_validation_requires_plausible_email() {
            let mut data = FormData {
                name: "Jane".to_string(),
                message: "Hello".to_string(),
                ..Default::default()
            };
            for bad in ["", "jane", "@x.com", "jane@", "ja ne@x.com"] {
                data.email = bad.to_string();
                assert!(data.validation_hint().is_some(), "accepted {bad:?}");
            }
            data.email = "jane@x.com".to_string();
            assert_eq!(data.validation_hint(), None);
        }

        #[test]
        fn test_validation_requires_message() {
            let data = FormData {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                message: "  ".to_string(),
                ..Default::default()
            };
            assert_eq!(data.validation_hint(), Some("Project details are required"));
        }

        #[test]
        fn test_optional_fields_not_validated() {
            let data = FormData {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                message: "Hello".to_string(),
                ..Default::default()
            };
            assert_eq!(data.validation_hint(), None);
        }
    }

    mod contact_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_starts_on_first_field() {
            let form = ContactForm::default();
            assert_eq!(form.active_field(), Some(ContactField::Name));
            assert!(!form.is_submit_row_active());
        }

        #[test]
        fn test_next_field_cycles_through_submit_row() {
            let mut form = ContactForm::default();
            for _ in 0..ContactField::ALL.len() {
                form.next_field();
            }
            assert!(form.is_submit_row_active());
            assert_eq!(form.active_field(), None);
            form.next_field();
            assert_eq!(form.active_field(), Some(ContactField::Name));
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = ContactForm::default();
            form.prev_field();
            assert!(form.is_submit_row_active());
        }

        #[test]
        fn test_push_char_edits_active_field() {
            let mut form = ContactForm::default();
            form.push_char('J');
            form.push_char('o');
            assert_eq!(form.data().name, "Jo");
            assert_eq!(form.data().email, "");
        }

        #[test]
        fn test_backspace_edits_active_field() {
            let mut form = filled_form();
            form.backspace();
            assert_eq!(form.data().name, "Jan");
        }

        #[test]
        fn test_push_char_ignored_on_select_field() {
            let mut form = ContactForm::default();
            while form.active_field() != Some(ContactField::Service) {
                form.next_field();
            }
            form.push_char('x');
            assert_eq!(form.data().service, "");
        }

        #[test]
        fn test_push_char_ignored_on_submit_row() {
            let mut form = ContactForm::default();
            form.prev_field();
            form.push_char('x');
            assert_eq!(*form.data(), FormData::default());
        }

        #[test]
        fn test_newline_only_in_message_field() {
            let mut form = ContactForm::default();
            form.newline();
            assert_eq!(form.data().name, "");

            while form.active_field() != Some(ContactField::Message) {
                form.next_field();
            }
            form.push_char('a');
            form.newline();
            form.push_char('b');
            assert_eq!(form.data().message, "a\nb");
        }

        #[test]
        fn test_cycle_option_steps_through_services() {
            let mut form = ContactForm::default();
            while form.active_field() != Some(ContactField::Service) {
                form.next_field();
            }
            form.cycle_option(true);
            assert_eq!(form.data().service, "Brand Strategy");
            form.cycle_option(true);
            assert_eq!(form.data().service, "Web Design");
            form.cycle_option(false);
            assert_eq!(form.data().service, "Brand Strategy");
            // Back past the first option lands on unset
            form.cycle_option(false);
            assert_eq!(form.data().service, "");
        }

        #[test]
        fn test_cycle_option_wraps_around() {
            let mut form = ContactForm::default();
            while form.active_field() != Some(ContactField::Budget) {
                form.next_field();
            }
            // empty + 4 options, a full lap returns to empty
            for _ in 0..BUDGET_OPTIONS.len() + 1 {
                form.cycle_option(true);
            }
            assert_eq!(form.data().budget, "");
        }

        #[test]
        fn test_cycle_option_noop_on_text_field() {
            let mut form = ContactForm::default();
            form.cycle_option(true);
            assert_eq!(form.data().name, "");
        }

        #[test]
        fn test_reset_restores_empty_default() {
            let mut form = filled_form();
            form.set_field(ContactField::Budget, "Under $5k".to_string());
            form.reset();
            assert_eq!(*form.data(), FormData::default());
        }
    }
}
