use serde::{Deserialize, Serialize};

/// Medio de contacto preferido del agente
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactMode {
    #[default]
    Phone,
    Whatsapp,
    Email,
}

impl ContactMode {
    pub fn label(&self) -> &'static str {
        match self {
            ContactMode::Phone => "Phone",
            ContactMode::Whatsapp => "WhatsApp",
            ContactMode::Email => "Email",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Agent {
    pub id: u64,
    pub agency_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub preferred_contact_mode: ContactMode,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_false() {
        let json = r#"{"id": 3, "agency_name": "Realvista Norte"}"#;
        let a: Agent = serde_json::from_str(json).unwrap();
        assert!(!a.verified);
        assert!(!a.featured);
        assert_eq!(a.preferred_contact_mode, ContactMode::Phone);
    }
}
