use console::Style;
use once_cell::sync::Lazy;
use shelfstyle::Theme;

/// Style names used by the terminal templates.
pub mod names {
    pub const INDEX: &str = "index";
    pub const TITLE: &str = "title";
    pub const META: &str = "meta";
    pub const LABEL: &str = "label";
    pub const LINK: &str = "link";
    pub const HEADER: &str = "header";
    pub const CELL: &str = "cell";
    pub const FACET: &str = "facet";
    pub const EMPTY: &str = "empty";

    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";

    /// Tag style for a facet, keyed by its tag class.
    pub fn tag(class: &str) -> String {
        format!("tag_{}", class)
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::INDEX, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::META, Style::new().color256(246).italic())
        .add(names::LABEL, Style::new().dim())
        .add(names::LINK, Style::new().cyan().underlined())
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::CELL, Style::new())
        .add(names::FACET, Style::new().bold())
        .add(names::EMPTY, Style::new().italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
        .add(&names::tag("origami-type"), Style::new().color256(216))
        .add(&names::tag("material"), Style::new().color256(117))
        .add(&names::tag("manufacturing"), Style::new().color256(150))
        .add(&names::tag("input"), Style::new().color256(218))
        .add(&names::tag("output"), Style::new().color256(183))
        .add(&names::tag("function"), Style::new().color256(229))
});
