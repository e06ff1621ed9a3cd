use serde::{Deserialize, Serialize};

/// Usuario cacheado en localStorage tras iniciar sesión.
/// Es estado advisory del cliente: nunca una frontera de autorización.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionUser {
    pub id: u64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub token: String,
    #[serde(default)]
    pub is_logged_in: bool,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Registro de agente (payload distinto al de cliente)
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterAgentRequest {
    pub agency_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    pub password: String,
}

/// Registro de cliente final
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterCustomerRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthError {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<AuthError>,
}

impl AuthResponse {
    /// Mensaje de error del servidor, con fallback genérico
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| "Authentication failed. Please try again.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_server_payload() {
        let json = r#"{"success": false, "error": {"message": "Invalid credentials"}}"#;
        let r: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.error_message(), "Invalid credentials");
    }

    #[test]
    fn error_message_falls_back_when_payload_empty() {
        let json = r#"{"success": false}"#;
        let r: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.error_message(), "Authentication failed. Please try again.");
    }
}
