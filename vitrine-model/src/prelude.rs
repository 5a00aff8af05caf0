//! Presentation-layer snapshot of the model surface.
//! Prefer importing from this module when binding the engine to a UI.

pub use super::ids::{CarouselKey, ItemId};
pub use super::intent::{
    Direction, DropReason, NavigationIntent, NavigationSource, Outcome,
};
pub use super::item::CarouselItem;
pub use super::layout::LayoutMetrics;
pub use super::state::{CarouselState, LoopPolicy, Orientation, Phase};
