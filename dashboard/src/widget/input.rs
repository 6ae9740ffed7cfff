//! Input affordances for the customization form.
//!
//! These shape what the user can enter; the draft itself accepts anything.

use std::sync::LazyLock;

use dashboard_client::{FONT_OPTIONS, WELCOME_MESSAGE_MAX_CHARS};
use regex::Regex;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap());

/// Accept at most [`WELCOME_MESSAGE_MAX_CHARS`] characters of typed input.
pub fn cap_welcome_message(input: &str) -> String {
    input.chars().take(WELCOME_MESSAGE_MAX_CHARS).collect()
}

/// Counter shown under the welcome message field.
pub fn welcome_message_counter(message: &str) -> String {
    format!(
        "{} / {WELCOME_MESSAGE_MAX_CHARS} characters",
        message.chars().count()
    )
}

/// Resolve a font selector choice, given either its label or its value.
pub fn font_choice(choice: &str) -> Option<&'static str> {
    FONT_OPTIONS
        .iter()
        .find(|(label, value)| label.eq_ignore_ascii_case(choice) || *value == choice)
        .map(|(_, value)| *value)
}

/// Whether a color looks like what the color picker produces (`#RRGGBB`).
pub fn is_picker_color(value: &str) -> bool {
    RE_HEX_COLOR.is_match(value)
}
