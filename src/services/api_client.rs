// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sin lógica de negocio: dispatch de requests y mapeo genérico de errores.
// Ningún request se reintenta solo; el caller decide qué hacer con el error.
// ============================================================================

use gloo_net::http::Request;

use crate::models::{
    Agent, AuthResponse, PropertiesResponse, Property, RegisterAgentRequest,
    RegisterCustomerRequest, SignInRequest, SubscriptionPlan, TrendReport,
};
use crate::utils::constants::API_BASE_URL;

/// Cliente API - solo comunicación HTTP (stateless)
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Listar propiedades (envelope paginado `results`)
    pub async fn get_properties(&self) -> Result<Vec<Property>, String> {
        let url = format!("{}/properties/", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let envelope = response
            .json::<PropertiesResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("🏠 Propiedades obtenidas: {}", envelope.results.len());
        Ok(envelope.results)
    }

    /// Obtener una propiedad por id
    pub async fn get_property(&self, id: u64) -> Result<Property, String> {
        let url = format!("{}/properties/{}/", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Property>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Guardar una propiedad en favoritos
    pub async fn bookmark_property(&self, id: u64) -> Result<(), String> {
        let url = format!("{}/properties/{}/bookmark/", self.base_url, id);

        log::info!("🔖 Guardando propiedad {} en favoritos", id);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Quitar una propiedad de favoritos
    pub async fn unbookmark_property(&self, id: u64) -> Result<(), String> {
        let url = format!("{}/properties/{}/bookmark/", self.base_url, id);

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}: {}", response.status(), response.status_text()))
        }
    }

    /// Listar agentes (con flags verified/featured)
    pub async fn get_agents(&self) -> Result<Vec<Agent>, String> {
        let url = format!("{}/agents/", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Vec<Agent>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_agent(&self, id: u64) -> Result<Agent, String> {
        let url = format!("{}/agents/{}/", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Agent>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Propiedades publicadas por un agente
    pub async fn get_agent_properties(&self, agent_id: u64) -> Result<Vec<Property>, String> {
        let url = format!("{}/agents/{}/properties/", self.base_url, agent_id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let envelope = response
            .json::<PropertiesResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(envelope.results)
    }

    /// Planes de suscripción (precio anidado por duración, con descuentos)
    pub async fn get_plans(&self) -> Result<Vec<SubscriptionPlan>, String> {
        let url = format!("{}/plans/", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Vec<SubscriptionPlan>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_plan(&self, id: u64) -> Result<SubscriptionPlan, String> {
        let url = format!("{}/plans/{}/", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<SubscriptionPlan>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Reportes de tendencias del mercado
    pub async fn get_trends(&self) -> Result<Vec<TrendReport>, String> {
        let url = format!("{}/trends/", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<Vec<TrendReport>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn get_trend(&self, id: u64) -> Result<TrendReport, String> {
        let url = format!("{}/trends/{}/", self.base_url, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<TrendReport>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Iniciar sesión
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse, String> {
        let url = format!("{}/auth/signin/", self.base_url);

        log::info!("🔐 Iniciando sesión para: {}", request.email);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        // Un 401 trae el payload de error del servidor: se devuelve tipado
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Registrar un agente (payload distinto al de cliente)
    pub async fn register_agent(
        &self,
        request: &RegisterAgentRequest,
    ) -> Result<AuthResponse, String> {
        let url = format!("{}/auth/register/agent/", self.base_url);

        log::info!("📝 Registro de agente: {}", request.agency_name);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Registrar un cliente final
    pub async fn register_customer(
        &self,
        request: &RegisterCustomerRequest,
    ) -> Result<AuthResponse, String> {
        let url = format!("{}/auth/register/customer/", self.base_url);

        log::info!("📝 Registro de cliente: {}", request.email);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
