use super::{Binding, ImageResolver, RenderedView, ViewMode, ViewProjector};
use crate::index::DisplayRecord;
use crate::model::{Facet, PaperRecord};
use serde::Serialize;

/// Shown in the meta line when a record lists no authors.
pub const UNKNOWN_AUTHOR: &str = "N/A";

/// One card in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub binding: Binding,
    /// Resolved image (the default image when the record has none usable).
    pub image: String,
    /// Image to swap in if `image` fails to load.
    pub fallback_image: String,
    pub title: String,
    /// `"{first author} et al. | {year} | {venue}"`
    pub meta: String,
    pub tags: Vec<Tag>,
}

/// A facet value shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub facet: Facet,
    pub class: &'static str,
    pub value: String,
}

pub struct CardProjector {
    images: ImageResolver,
}

impl CardProjector {
    pub fn new(images: ImageResolver) -> Self {
        Self { images }
    }

    fn card(&self, display: &DisplayRecord<'_>) -> Card {
        let record = display.record;
        Card {
            binding: Binding::for_record(display),
            image: self.images.resolve(record.image_ref.as_deref()),
            fallback_image: self.images.default_image().to_string(),
            title: record.title.clone().unwrap_or_default(),
            meta: meta_line(record),
            tags: tags(record),
        }
    }
}

impl ViewProjector for CardProjector {
    fn mode(&self) -> ViewMode {
        ViewMode::Card
    }

    fn project_units(&self, records: &[DisplayRecord<'_>]) -> RenderedView {
        RenderedView::Cards {
            cards: records.iter().map(|display| self.card(display)).collect(),
        }
    }
}

/// The card meta line. Absent year or venue render as empty text.
pub fn meta_line(record: &PaperRecord) -> String {
    format!(
        "{} et al. | {} | {}",
        record.first_author().unwrap_or(UNKNOWN_AUTHOR),
        record.year.as_deref().unwrap_or_default(),
        record.venue.as_deref().unwrap_or_default()
    )
}

/// One tag per present facet value, in facet order.
pub fn tags(record: &PaperRecord) -> Vec<Tag> {
    Facet::ALL
        .into_iter()
        .filter_map(|facet| {
            record.facet(facet).map(|value| Tag {
                facet,
                class: facet.tag_class(),
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::index_records;

    fn full_record() -> PaperRecord {
        PaperRecord {
            title: Some("Origami robots".into()),
            authors: Some("Rus, Tolley".into()),
            year: Some("2018".into()),
            venue: Some("Nature Reviews Materials".into()),
            origami_or_kirigami: Some("Origami".into()),
            material: Some("PET".into()),
            function: Some("Locomotion".into()),
            doi: Some("https://doi.org/10.1038/s41578-018-0052-8".into()),
            ..Default::default()
        }
    }

    #[test]
    fn card_carries_title_meta_tags_and_binding() {
        let record = full_record();
        let view = CardProjector::new(ImageResolver::new()).project(&[&record]);
        let RenderedView::Cards { cards } = view else {
            panic!("expected cards");
        };
        let card = &cards[0];
        assert_eq!(card.title, "Origami robots");
        assert_eq!(card.meta, "Rus et al. | 2018 | Nature Reviews Materials");
        assert_eq!(card.image, "images/default.jpg");
        assert_eq!(card.binding.position, 1);
        assert_eq!(
            card.binding.target.as_deref(),
            Some("https://doi.org/10.1038/s41578-018-0052-8")
        );

        let values: Vec<_> = card.tags.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["Origami", "PET", "Locomotion"]);
        assert_eq!(card.tags[0].class, "origami-type");
        assert_eq!(card.tags[1].class, "material");
    }

    #[test]
    fn meta_line_with_missing_fields() {
        assert_eq!(meta_line(&PaperRecord::default()), "N/A et al. |  | ");
        let record = PaperRecord {
            authors: Some("Lang".into()),
            year: Some("2020".into()),
            ..Default::default()
        };
        assert_eq!(meta_line(&record), "Lang et al. | 2020 | ");
    }

    #[test]
    fn record_without_facets_has_no_tags() {
        assert!(tags(&PaperRecord::default()).is_empty());
    }

    #[test]
    fn cards_follow_display_positions() {
        let a = full_record();
        let b = PaperRecord::default();
        let projector = CardProjector::new(ImageResolver::new());
        let view = projector.project_units(&index_records(&[&a, &b]));
        let positions: Vec<_> = view.bindings().iter().map(|b| b.position).collect();
        assert_eq!(positions, vec![1, 2]);
        assert_eq!(projector.mode(), ViewMode::Card);
    }
}
