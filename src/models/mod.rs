pub mod property;
pub mod agent;
pub mod plan;
pub mod trend;
pub mod auth;

pub use property::{ListingPurpose, PropertiesResponse, Property, PropertyType};
pub use agent::{Agent, ContactMode};
pub use plan::{PlanPricing, SubscriptionPlan};
pub use trend::TrendReport;
pub use auth::{
    AuthError, AuthResponse, RegisterAgentRequest, RegisterCustomerRequest, SessionUser,
    SignInRequest,
};
