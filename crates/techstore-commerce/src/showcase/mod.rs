//! Storefront showcase widgets: the detail-view image carousel and the
//! rotating hero banner.

mod carousel;
mod hero;

pub use carousel::Carousel;
pub use hero::{
    HeroEvent, HeroPhase, HeroRotator, HeroTiming, DEFAULT_PROGRESS_TICK, DEFAULT_ROTATION,
    DEFAULT_TRANSITION,
};
