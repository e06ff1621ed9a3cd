pub mod use_carousel;
pub mod use_listings;
pub mod use_session;

pub use use_carousel::{use_carousel, UseCarouselHandle};
pub use use_listings::{use_listings, UseListingsHandle};
pub use use_session::{use_session, UseSessionHandle};
