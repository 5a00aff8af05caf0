use uuid::Uuid;

/// Opaque identifier for a carousel item.
///
/// Catalogue definitions usually derive ids from page slugs with
/// [`ItemId::from_slug`] so the same page keeps the same id across sessions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub Uuid);

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemId {
    /// Random id for items that have no natural key.
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }

    /// Stable id derived from a slug (UUIDv5 in the URL namespace).
    pub fn from_slug(slug: &str) -> Self {
        let name = format!("vitrine://item/{slug}");
        ItemId(Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ItemId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique key for identifying carousels on a page.
/// Using a strongly-typed key avoids brittle string matching and enables
/// scoped state per carousel instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselKey {
    /// The catalogue strip used to browse landing pages.
    Catalogue,
    /// Multi-step scanner embedded in a page.
    Scanner(ItemId),
    /// Hero slider at the top of a page.
    Hero(ItemId),
    Custom(String),
}

impl std::fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselKey::Catalogue => write!(f, "catalogue"),
            CarouselKey::Scanner(id) => write!(f, "scanner:{id}"),
            CarouselKey::Hero(id) => write!(f, "hero:{id}"),
            CarouselKey::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}
