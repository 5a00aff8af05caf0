//! Core data model definitions shared across Vitrine crates.
//!
//! Everything here is plain data: the engine in `vitrine-core` owns the
//! behaviour, presentation layers only read these types.
#![allow(missing_docs)]

pub mod ids;
pub mod intent;
pub mod item;
pub mod layout;
pub mod prelude;
pub mod state;

pub use ids::{CarouselKey, ItemId};
pub use intent::{
    Direction, DropReason, NavigationIntent, NavigationSource, Outcome,
};
pub use item::CarouselItem;
pub use layout::LayoutMetrics;
pub use state::{CarouselState, LoopPolicy, Orientation, Phase};
