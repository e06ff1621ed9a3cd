use chrono::{DateTime, Utc};

/// Precio con separador de miles y moneda ("USD 1,250,000").
/// Sin precio el anuncio muestra el fallback, nunca un cero inventado.
pub fn format_price(price: Option<f64>, currency: &str) -> String {
    match price {
        Some(p) if p >= 0.0 => format!("{} {}", currency, group_thousands(p.round() as i64)),
        _ => "Price on request".to_string(),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Campo numérico opcional con fallback textual
pub fn format_count<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    }
}

/// Superficie en pies cuadrados, con fallback
pub fn format_sqft(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} sqft", group_thousands(v.round() as i64)),
        None => "—".to_string(),
    }
}

/// Fecha corta para cards y reportes ("May 12, 2026")
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%b %e, %Y").to_string(),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn price_groups_thousands() {
        assert_eq!(format_price(Some(1_250_000.0), "USD"), "USD 1,250,000");
        assert_eq!(format_price(Some(900.0), "EUR"), "EUR 900");
        assert_eq!(format_price(Some(15_000.0), "USD"), "USD 15,000");
    }

    #[test]
    fn missing_or_negative_price_renders_fallback() {
        assert_eq!(format_price(None, "USD"), "Price on request");
        assert_eq!(format_price(Some(-1.0), "USD"), "Price on request");
    }

    #[test]
    fn counts_and_sqft_fall_back_to_dash() {
        assert_eq!(format_count::<u32>(None), "—");
        assert_eq!(format_count(Some(3u32)), "3");
        assert_eq!(format_sqft(Some(1400.0)), "1,400 sqft");
        assert_eq!(format_sqft(None), "—");
    }

    #[test]
    fn date_formats_short() {
        let d = Utc.with_ymd_and_hms(2026, 5, 12, 0, 0, 0).unwrap();
        assert_eq!(format_date(Some(d)), "May 12, 2026");
        assert_eq!(format_date(None), "—");
    }
}
