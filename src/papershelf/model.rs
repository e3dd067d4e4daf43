//! Core data types: [`PaperRecord`] and the [`Facet`] dimensions it is filtered on.
//!
//! Records are read from the catalog resource with lenient field handling: a
//! string is kept verbatim, a number becomes its decimal form, and anything else
//! (empty string, `null`, booleans, arrays, objects) is treated as absent. A
//! malformed field therefore never fails the whole load; it simply never shows
//! up in facet options and never matches a specific selection.

use crate::error::ShelfError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "Title", alias = "title", default, deserialize_with = "lenient")]
    pub title: Option<String>,

    /// Comma-separated author list; the first entry is the primary author.
    #[serde(
        rename = "Author",
        alias = "Authors",
        alias = "authors",
        default,
        deserialize_with = "lenient"
    )]
    pub authors: Option<String>,

    #[serde(rename = "Year", alias = "year", default, deserialize_with = "lenient")]
    pub year: Option<String>,

    #[serde(rename = "Venue", alias = "venue", default, deserialize_with = "lenient")]
    pub venue: Option<String>,

    #[serde(
        rename = "Origami or Kirigami",
        alias = "origamiOrKirigami",
        default,
        deserialize_with = "lenient"
    )]
    pub origami_or_kirigami: Option<String>,

    #[serde(rename = "Material", alias = "material", default, deserialize_with = "lenient")]
    pub material: Option<String>,

    #[serde(
        rename = "Manufacturing",
        alias = "manufacturing",
        default,
        deserialize_with = "lenient"
    )]
    pub manufacturing: Option<String>,

    #[serde(rename = "Input", alias = "input", default, deserialize_with = "lenient")]
    pub input: Option<String>,

    #[serde(rename = "Output", alias = "output", default, deserialize_with = "lenient")]
    pub output: Option<String>,

    #[serde(rename = "Function", alias = "function", default, deserialize_with = "lenient")]
    pub function: Option<String>,

    /// External link target for the record.
    #[serde(rename = "DOI", alias = "doi", default, deserialize_with = "lenient")]
    pub doi: Option<String>,

    #[serde(rename = "image", alias = "imageRef", default, deserialize_with = "lenient")]
    pub image_ref: Option<String>,
}

impl PaperRecord {
    /// The record's value for a facet, if present.
    pub fn facet(&self, facet: Facet) -> Option<&str> {
        let value = match facet {
            Facet::OrigamiOrKirigami => &self.origami_or_kirigami,
            Facet::Material => &self.material,
            Facet::Manufacturing => &self.manufacturing,
            Facet::Input => &self.input,
            Facet::Output => &self.output,
            Facet::Function => &self.function,
        };
        value.as_deref()
    }

    /// First entry of the author list, trimmed.
    pub fn first_author(&self) -> Option<&str> {
        self.authors
            .as_deref()
            .and_then(|authors| authors.split(',').next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Short label for logs and messages.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}

fn lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(field_text))
}

fn field_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => number_text(&n),
        _ => None,
    }
}

/// Zero counts as missing. Whole floats print without a fraction (`2020.0` is `2020`).
fn number_text(n: &Number) -> Option<String> {
    if n.is_f64() {
        let f = n.as_f64()?;
        return (f != 0.0 && f.is_finite()).then(|| f.to_string());
    }
    Some(n.to_string()).filter(|text| text != "0")
}

/// A categorical attribute usable as a filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facet {
    OrigamiOrKirigami,
    Material,
    Manufacturing,
    Input,
    Output,
    Function,
}

impl Facet {
    pub const COUNT: usize = 6;

    /// All facets in display order.
    pub const ALL: [Facet; Facet::COUNT] = [
        Facet::OrigamiOrKirigami,
        Facet::Material,
        Facet::Manufacturing,
        Facet::Input,
        Facet::Output,
        Facet::Function,
    ];

    /// Position in [`Facet::ALL`].
    pub fn position(self) -> usize {
        self as usize
    }

    /// Short key used on the command line and in interactions.
    pub fn key(self) -> &'static str {
        match self {
            Facet::OrigamiOrKirigami => "origami",
            Facet::Material => "material",
            Facet::Manufacturing => "manufacturing",
            Facet::Input => "input",
            Facet::Output => "output",
            Facet::Function => "function",
        }
    }

    /// Field name in the catalog resource.
    pub fn field_name(self) -> &'static str {
        match self {
            Facet::OrigamiOrKirigami => "Origami or Kirigami",
            Facet::Material => "Material",
            Facet::Manufacturing => "Manufacturing",
            Facet::Input => "Input",
            Facet::Output => "Output",
            Facet::Function => "Function",
        }
    }

    /// Human-readable label for filter controls and table headers.
    pub fn label(self) -> &'static str {
        match self {
            Facet::OrigamiOrKirigami => "Origami/Kirigami",
            other => other.field_name(),
        }
    }

    /// Class name of the tag rendered for this facet.
    pub fn tag_class(self) -> &'static str {
        match self {
            Facet::OrigamiOrKirigami => "origami-type",
            other => other.key(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Facet {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Facet::ALL
            .into_iter()
            .find(|facet| {
                [facet.key(), facet.field_name(), facet.label()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(wanted))
            })
            .or_else(|| {
                matches!(
                    wanted.to_ascii_lowercase().as_str(),
                    "kirigami" | "origami-or-kirigami" | "origamiorkirigami"
                )
                .then_some(Facet::OrigamiOrKirigami)
            })
            .ok_or_else(|| ShelfError::UnknownFacet(s.to_string()))
    }
}
