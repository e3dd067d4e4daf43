//! # shelfstyle - Styled, Width-Aware Template Rendering
//!
//! Renders minijinja templates for two kinds of sinks:
//!
//! - **Terminals**: named [`console::Style`]s are applied through the `style`
//!   filter. When colors are unsupported (pipes, `TERM=dumb`, `--no-color`) the
//!   filter degrades to plain text.
//! - **HTML pages**: templates registered under a name ending in `.html` are
//!   auto-escaped by minijinja, so record text can be interpolated as-is.
//!
//! Column layout for terminal tables needs Unicode-aware width math, which is
//! awkward inside templates. The `fit` and `clip` filters expose
//! [`pad_to_width`] and [`truncate_to_width`] so a template can lay out a
//! column without the caller pre-formatting every cell.
//!
//! ## Example
//!
//! ```rust
//! use shelfstyle::{Renderer, Theme};
//! use console::Style;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Row { title: String, year: String }
//!
//! let theme = Theme::new().add("title", Style::new().bold());
//! let mut renderer = Renderer::with_color(theme, false);
//! renderer
//!     .add_template("row", r#"{{ title | fit(8) | style("title") }}|{{ year }}"#)
//!     .unwrap();
//!
//! let out = renderer
//!     .render("row", &Row { title: "Kirigami metamaterials".into(), year: "2021".into() })
//!     .unwrap();
//! assert_eq!(out, "Kirigam…|2021");
//! ```

use console::Style;
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Prefix shown when a template asks for a style the theme does not define.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Marker appended to text cut short by [`truncate_to_width`].
pub const ELLIPSIS: char = '…';

/// Named styles applied by the `style` template filter.
///
/// Unknown names are not fatal: the text is prefixed with the missing-style
/// indicator so typos in templates show up in the output.
#[derive(Clone)]
pub struct Theme {
    styles: HashMap<String, Style>,
    missing_indicator: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Sets the indicator prepended for unknown style names. Empty disables it.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Applies a named style, emitting ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => self.flag_missing(text),
        }
    }

    /// Checks the style name but leaves the text unstyled.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            self.flag_missing(text)
        }
    }

    fn flag_missing(&self, text: &str) -> String {
        if self.missing_indicator.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", self.missing_indicator, text)
        }
    }
}

/// Cuts `s` so its display width fits in `max_width`, ending with [`ELLIPSIS`]
/// when anything was dropped. Text that already fits is returned unchanged.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let limit = max_width - 1;
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push(ELLIPSIS);
    result
}

/// Truncates then right-pads `s` with spaces to exactly `width` columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let fill = width.saturating_sub(cut.width());
    format!("{}{}", cut, " ".repeat(fill))
}

/// A template environment with the style and layout filters installed.
///
/// Templates are compiled once on registration and rendered by name.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with explicit color control (e.g. `--no-color`).
    pub fn with_color(theme: Theme, use_color: bool) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, theme, use_color);
        Self { env }
    }

    /// Registers a named template. Names ending in `.html` are auto-escaped.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }
}

/// One-off render of an inline template.
pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_filters(&mut env, theme.clone(), use_color);
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    env.get_template("_inline")?.render(data)
}

fn register_filters(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            theme.apply_plain(&name, &text)
        }
    });
    env.add_filter("fit", |value: Value, width: usize| -> String {
        pad_to_width(&value.to_string(), width)
    });
    env.add_filter("clip", |value: Value, width: usize| -> String {
        truncate_to_width(&value.to_string(), width)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Cell {
        text: String,
    }

    #[derive(Serialize)]
    struct Tags {
        tags: Vec<String>,
    }

    fn cell(text: &str) -> Cell {
        Cell { text: text.into() }
    }

    #[test]
    fn theme_starts_empty() {
        let theme = Theme::new();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
    }

    #[test]
    fn theme_replaces_styles_by_name() {
        let theme = Theme::new()
            .add("tag", Style::new().red())
            .add("tag", Style::new().green());
        assert_eq!(theme.len(), 1);
        assert!(theme.has("tag"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        let theme = Theme::new();
        assert_eq!(theme.apply("nope", "PET"), "(!?) PET");
        assert_eq!(theme.apply_plain("nope", "PET"), "(!?) PET");
    }

    #[test]
    fn empty_indicator_silences_unknown_styles() {
        let theme = Theme::new().missing_indicator("");
        assert_eq!(theme.apply("nope", "PET"), "PET");
    }

    #[test]
    fn known_style_emits_ansi() {
        let theme = Theme::new().add("bold", Style::new().bold().force_styling(true));
        let out = theme.apply("bold", "Title");
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("Title"));
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_to_width("Paper", 10), "Paper");
        assert_eq!(truncate_to_width("Paper", 5), "Paper");
    }

    #[test]
    fn truncate_adds_ellipsis_within_width() {
        let out = truncate_to_width("Origami robots", 8);
        assert_eq!(out, "Origami…");
        assert_eq!(out.width(), 8);
    }

    #[test]
    fn truncate_counts_wide_characters() {
        // Each CJK character is two columns wide.
        let out = truncate_to_width("折り紙構造", 5);
        assert_eq!(out, "折り…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn pad_fills_to_exact_width() {
        assert_eq!(pad_to_width("PET", 6), "PET   ");
        assert_eq!(pad_to_width("Polyimide", 6), "Polyi…");
    }

    #[test]
    fn style_filter_is_plain_without_color() {
        let theme = Theme::new().add("tag", Style::new().red());
        let out =
            render_with_color(r#"{{ text | style("tag") }}"#, &cell("PET"), &theme, false).unwrap();
        assert_eq!(out, "PET");
    }

    #[test]
    fn style_filter_colors_when_enabled() {
        let theme = Theme::new().add("tag", Style::new().green().force_styling(true));
        let out =
            render_with_color(r#"{{ text | style("tag") }}"#, &cell("PET"), &theme, true).unwrap();
        assert!(out.contains("\x1b["));
    }

    #[test]
    fn fit_and_clip_filters() {
        let theme = Theme::new();
        let out = render_with_color(
            "[{{ text | fit(5) }}][{{ text | clip(3) }}]",
            &cell("Paper"),
            &theme,
            false,
        )
        .unwrap();
        assert_eq!(out, "[Paper][Pa…]");
    }

    #[test]
    fn renderer_renders_by_name() {
        let mut renderer = Renderer::with_color(Theme::new().add("t", Style::new()), false);
        renderer
            .add_template("tags", r#"{% for t in tags %}{{ t | style("t") }};{% endfor %}"#)
            .unwrap();
        let out = renderer
            .render(
                "tags",
                &Tags {
                    tags: vec!["PET".into(), "Paper".into()],
                },
            )
            .unwrap();
        assert_eq!(out, "PET;Paper;");
    }

    #[test]
    fn renderer_unknown_template_errors() {
        let renderer = Renderer::with_color(Theme::new(), false);
        assert!(renderer.render("missing", &cell("x")).is_err());
    }

    #[test]
    fn html_templates_are_escaped() {
        let mut renderer = Renderer::with_color(Theme::new(), false);
        renderer.add_template("card.html", "<h3>{{ text }}</h3>").unwrap();
        renderer.add_template("card.txt", "{{ text }}").unwrap();

        let data = cell("A <b>bold</b> & brave fold");
        let html = renderer.render("card.html", &data).unwrap();
        assert!(html.starts_with("<h3>A &lt;b&gt;bold"));
        assert!(html.contains("&amp; brave fold</h3>"));
        assert_eq!(
            renderer.render("card.txt", &data).unwrap(),
            "A <b>bold</b> & brave fold"
        );
    }

    #[test]
    fn syntax_errors_surface() {
        let theme = Theme::new();
        assert!(render_with_color("{{ unclosed", &cell("x"), &theme, false).is_err());
    }
}
