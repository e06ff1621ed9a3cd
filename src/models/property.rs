use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Finalidad del anuncio (renta, arriendo o venta)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingPurpose {
    Rent,
    Lease,
    #[default]
    Sale,
}

impl ListingPurpose {
    pub fn label(&self) -> &'static str {
        match self {
            ListingPurpose::Rent => "For Rent",
            ListingPurpose::Lease => "For Lease",
            ListingPurpose::Sale => "For Sale",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    House,
    Apartment,
    Land,
    Commercial,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Property {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    // El backend puede omitir el precio en borradores
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<f32>,
    #[serde(default)]
    pub square_footage: Option<f64>,
    #[serde(default)]
    pub lot_size: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub purpose: ListingPurpose,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub listed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub agent_id: Option<u64>,
    #[serde(default)]
    pub featured: bool,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Property {
    /// Primera imagen del anuncio, si hay alguna
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }
}

/// Envelope paginado del backend (estilo `results`)
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct PropertiesResponse {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Property>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_record_with_defaults() {
        // Solo id y title: todo lo demás debe caer en defaults
        let json = r#"{"id": 7, "title": "Lote urbano"}"#;
        let p: Property = serde_json::from_str(json).unwrap();

        assert_eq!(p.id, 7);
        assert_eq!(p.currency, "USD");
        assert!(p.price.is_none());
        assert!(p.bedrooms.is_none());
        assert!(p.images.is_empty());
        assert_eq!(p.purpose, ListingPurpose::Sale);
        assert_eq!(p.property_type, PropertyType::House);
        assert!(!p.featured);
    }

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "id": 12,
            "title": "Casa en Palermo",
            "price": 250000.0,
            "currency": "USD",
            "address": "Calle Falsa 123",
            "city": "Buenos Aires",
            "state": "CABA",
            "bedrooms": 3,
            "bathrooms": 2.5,
            "square_footage": 1400.0,
            "year_built": 2014,
            "purpose": "rent",
            "property_type": "apartment",
            "listed_date": "2026-05-01T12:00:00Z",
            "images": ["a.jpg", "b.jpg"],
            "views": 42,
            "featured": true
        }"#;
        let p: Property = serde_json::from_str(json).unwrap();

        assert_eq!(p.purpose, ListingPurpose::Rent);
        assert_eq!(p.property_type, PropertyType::Apartment);
        assert_eq!(p.cover_image(), Some("a.jpg"));
        assert!(p.listed_date.is_some());
    }

    #[test]
    fn results_envelope_tolerates_missing_fields() {
        let json = r#"{"results": [{"id": 1, "title": "x"}]}"#;
        let r: PropertiesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.results.len(), 1);
        assert!(r.next.is_none());
    }
}
