//! Template sources, compiled into the binary.
//!
//! Terminal templates only place pre-computed text and pick styles; widths and
//! truncation are worked out in `render.rs`. The page template is named with
//! an `.html` suffix so every interpolated value is HTML-escaped.

pub const CARDS_TEMPLATE: &str = include_str!("templates/cards.jinja");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.jinja");
pub const FACETS_TEMPLATE: &str = include_str!("templates/facets.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.jinja");

pub const NO_RESULTS_TEMPLATE: &str = r#"{{ message | style("empty") }}"#;

pub const PAGE_TEMPLATE_NAME: &str = "page.html";
pub const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
