pub mod carousel;
pub mod listings;

pub use carousel::{Carousel, CarouselPhase};
pub use listings::{
    build_page, filter_properties, sort_properties, FilterBadge, FilterField, FilterState,
    ListingsPage, SortKey,
};
