//! Validación sincrónica de formularios (registro, contacto, sign-in).
//! Se ejecuta antes de enviar y bloquea el submit hasta resolverse.

/// Campo obligatorio no vacío
pub fn validate_required(value: &str, field: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required", field))
    } else {
        None
    }
}

/// Forma mínima de un email: algo@algo.algo, sin espacios
pub fn validate_email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required".to_string());
    }

    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    let ok = !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace);

    if ok {
        None
    } else {
        Some("Enter a valid email address".to_string())
    }
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_string())
    } else if value.len() < 8 {
        Some("Password must be at least 8 characters".to_string())
    } else {
        None
    }
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Option<String> {
    if confirmation != password {
        Some("Passwords do not match".to_string())
    } else {
        None
    }
}

/// Teléfono: dígitos, espacios, guiones y un '+' inicial opcional
pub fn validate_phone(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Phone number is required".to_string());
    }

    let rest = value.strip_prefix('+').unwrap_or(value);
    let digits = rest.chars().filter(|c| c.is_ascii_digit()).count();
    let valid_chars = rest
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-');

    if valid_chars && digits >= 7 {
        None
    } else {
        Some("Enter a valid phone number".to_string())
    }
}

/// Mensaje de contacto con un mínimo de contenido
pub fn validate_message(value: &str) -> Option<String> {
    let len = value.trim().len();
    if len == 0 {
        Some("Message is required".to_string())
    } else if len < 20 {
        Some("Message must be at least 20 characters".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert!(validate_required("  ", "Name").is_some());
        assert!(validate_required("Ana", "Name").is_none());
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("ana@realvista.app").is_none());
        assert!(validate_email("ana@realvista").is_some());
        assert!(validate_email("ana@.app").is_some());
        assert!(validate_email("@realvista.app").is_some());
        assert!(validate_email("ana @realvista.app").is_some());
        assert!(validate_email("").is_some());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("").is_some());
        assert!(validate_password("short").is_some());
        assert!(validate_password("longenough").is_none());
        assert!(validate_password_confirmation("abcd1234", "abcd1234").is_none());
        assert!(validate_password_confirmation("abcd1234", "abcd123").is_some());
    }

    #[test]
    fn phone_shapes() {
        assert!(validate_phone("+54 11 5555-1234").is_none());
        assert!(validate_phone("5551234").is_none());
        assert!(validate_phone("call me").is_some());
        assert!(validate_phone("123").is_some());
        assert!(validate_phone("").is_some());
    }

    #[test]
    fn message_minimum_length() {
        assert!(validate_message("hola").is_some());
        assert!(validate_message("I would like to schedule a visit this week").is_none());
    }
}
