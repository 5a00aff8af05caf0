use crate::ids::ItemId;

/// A single entry the carousel can show.
///
/// Items are owned by the caller and never mutated by the engine; the engine
/// only refers to them by index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem {
    pub id: ItemId,
    /// Display name shown on the card.
    pub name: String,
    /// Grouping label (e.g. "fintech", "wellness").
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// Route the card navigates to when activated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<String>,
}

impl CarouselItem {
    /// Item with an id derived from `slug`, named after it and routed to
    /// `/{slug}`.
    pub fn from_slug(slug: &str) -> Self {
        Self {
            id: ItemId::from_slug(slug),
            name: slug.to_string(),
            category: None,
            target: Some(format!("/{slug}")),
        }
    }

    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            target: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}
