pub mod about;
pub mod agent_detail;
pub mod agents;
pub mod contact;
pub mod faq;
pub mod home;
pub mod listings;
pub mod not_found;
pub mod pricing;
pub mod privacy;
pub mod property_detail;
pub mod register;
pub mod signin;
pub mod terms;
pub mod trend_detail;
pub mod trends;

pub use about::AboutPage;
pub use agent_detail::AgentDetailPage;
pub use agents::AgentsPage;
pub use contact::ContactPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use listings::ListingsPage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
pub use privacy::PrivacyPage;
pub use property_detail::PropertyDetailPage;
pub use register::RegisterPage;
pub use signin::SignInPage;
pub use terms::TermsPage;
pub use trend_detail::TrendDetailPage;
pub use trends::TrendsPage;
