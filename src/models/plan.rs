use serde::{Deserialize, Serialize};

/// Precio de un plan para una duración concreta
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PlanPricing {
    pub duration_months: u32,
    pub price: f64,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SubscriptionPlan {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub pricing: Vec<PlanPricing>,
}

impl SubscriptionPlan {
    /// Precio para una duración dada, si el plan la ofrece
    pub fn pricing_for(&self, duration_months: u32) -> Option<&PlanPricing> {
        self.pricing
            .iter()
            .find(|p| p.duration_months == duration_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pricing_by_duration() {
        let json = r#"{
            "id": 1,
            "name": "Pro",
            "pricing": [
                {"duration_months": 1, "price": 29.0},
                {"duration_months": 12, "price": 290.0, "discount_percent": 16.7}
            ]
        }"#;
        let plan: SubscriptionPlan = serde_json::from_str(json).unwrap();

        assert_eq!(plan.pricing_for(12).unwrap().price, 290.0);
        assert!(plan.pricing_for(6).is_none());
        assert_eq!(plan.pricing_for(1).unwrap().currency, "USD");
    }
}
