pub mod agent_card;
pub mod featured_carousel;
pub mod filter_badges;
pub mod filter_panel;
pub mod footer;
pub mod hero_carousel;
pub mod navbar;
pub mod pagination;
pub mod plan_card;
pub mod property_card;

pub use agent_card::AgentCard;
pub use featured_carousel::FeaturedCarousel;
pub use filter_badges::FilterBadges;
pub use filter_panel::FilterPanel;
pub use footer::Footer;
pub use hero_carousel::HeroCarousel;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use plan_card::PlanCard;
pub use property_card::PropertyCard;
