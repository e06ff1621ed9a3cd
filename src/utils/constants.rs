/// URL base del backend Realvista
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000/api (por defecto)
/// - Producción: https://api.realvista.app/api (via API_BASE_URL env var)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Clave de localStorage con el SessionUser serializado.
/// Es la única pieza de estado durable del cliente.
pub const STORAGE_KEY_SESSION_USER: &str = "realvista_sessionUser";

/// Tamaño de página del listado de propiedades
pub const LISTINGS_PAGE_SIZE: usize = 8;

/// Intervalos de rotación de los carruseles (ms)
pub const HERO_ROTATION_MS: u32 = 5000;
pub const FEATURED_ROTATION_MS: u32 = 4000;
