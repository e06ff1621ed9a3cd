use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reporte de tendencias de mercado publicado por el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TrendReport {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,
}
