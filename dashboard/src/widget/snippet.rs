//! Installation script synthesis.
//!
//! The output is pasted verbatim into third-party sites, so the template is
//! fixed byte for byte: attribute order, quoting and spacing never change.

/// Path of the widget loader script under the API base.
pub const WIDGET_SCRIPT_PATH: &str = "/widget/widget-direct.js";

/// Build the `<script>` tag that embeds the chat widget.
pub fn compose_install_snippet(token: &str, base_url: &str) -> String {
    format!(r#"<script src="{base_url}{WIDGET_SCRIPT_PATH}" data-bot-token="{token}"></script>"#)
}
