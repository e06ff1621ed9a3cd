// ============================================================================
// LISTINGS PIPELINE - filtrar → ordenar → paginar (función pura del estado)
// ============================================================================
// La lista completa se fetchea una sola vez; cada cambio de filtro/orden/página
// recalcula la página visible sin mutar el array original.
// ============================================================================

use crate::models::{ListingPurpose, Property, PropertyType};
use crate::utils::constants::LISTINGS_PAGE_SIZE;

/// Restricciones activas sobre el listado. Un campo vacío se salta entero:
/// la ausencia de un filtro nunca excluye registros.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterState {
    pub search_query: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms_floor: Option<u32>,
    pub year_built_floor: Option<i32>,
    pub purpose: Option<ListingPurpose>,
    pub property_type: Option<PropertyType>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FilterField {
    Search,
    MinPrice,
    MaxPrice,
    Bedrooms,
    YearBuilt,
    Purpose,
    PropertyType,
}

/// Badge visible por cada filtro activo, con acción de quitar solo ese campo
#[derive(Clone, PartialEq, Debug)]
pub struct FilterBadge {
    pub field: FilterField,
    pub label: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search_query.trim().is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.bedrooms_floor.is_none()
            && self.year_built_floor.is_none()
            && self.purpose.is_none()
            && self.property_type.is_none()
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn clear_field(&mut self, field: FilterField) {
        match field {
            FilterField::Search => self.search_query.clear(),
            FilterField::MinPrice => self.min_price = None,
            FilterField::MaxPrice => self.max_price = None,
            FilterField::Bedrooms => self.bedrooms_floor = None,
            FilterField::YearBuilt => self.year_built_floor = None,
            FilterField::Purpose => self.purpose = None,
            FilterField::PropertyType => self.property_type = None,
        }
    }

    /// Un registro pasa si satisface TODOS los predicados activos
    pub fn matches(&self, p: &Property) -> bool {
        let query = self.search_query.trim().to_lowercase();
        if !query.is_empty() && !matches_query(p, &query) {
            return false;
        }

        if let Some(min) = self.min_price {
            match p.price {
                Some(price) if price >= min => {}
                _ => return false,
            }
        }

        if let Some(max) = self.max_price {
            match p.price {
                Some(price) if price <= max => {}
                _ => return false,
            }
        }

        if let Some(floor) = self.bedrooms_floor {
            if p.bedrooms.unwrap_or(0) < floor {
                return false;
            }
        }

        if let Some(floor) = self.year_built_floor {
            match p.year_built {
                Some(year) if year >= floor => {}
                _ => return false,
            }
        }

        if let Some(purpose) = self.purpose {
            if p.purpose != purpose {
                return false;
            }
        }

        if let Some(ptype) = self.property_type {
            if p.property_type != ptype {
                return false;
            }
        }

        true
    }

    /// Un badge por campo no vacío, en orden estable de panel
    pub fn badges(&self) -> Vec<FilterBadge> {
        let mut badges = Vec::new();

        if !self.search_query.trim().is_empty() {
            badges.push(FilterBadge {
                field: FilterField::Search,
                label: format!("\"{}\"", self.search_query.trim()),
            });
        }
        if let Some(min) = self.min_price {
            badges.push(FilterBadge {
                field: FilterField::MinPrice,
                label: format!("Min {}", min.round() as i64),
            });
        }
        if let Some(max) = self.max_price {
            badges.push(FilterBadge {
                field: FilterField::MaxPrice,
                label: format!("Max {}", max.round() as i64),
            });
        }
        if let Some(beds) = self.bedrooms_floor {
            badges.push(FilterBadge {
                field: FilterField::Bedrooms,
                label: format!("{}+ beds", beds),
            });
        }
        if let Some(year) = self.year_built_floor {
            badges.push(FilterBadge {
                field: FilterField::YearBuilt,
                label: format!("Built {}+", year),
            });
        }
        if let Some(purpose) = self.purpose {
            badges.push(FilterBadge {
                field: FilterField::Purpose,
                label: purpose.label().to_string(),
            });
        }
        if let Some(ptype) = self.property_type {
            badges.push(FilterBadge {
                field: FilterField::PropertyType,
                label: ptype.label().to_string(),
            });
        }

        badges
    }
}

/// Substring case-insensitive sobre título, dirección, ciudad, provincia y tipo
fn matches_query(p: &Property, query: &str) -> bool {
    let fields = [
        Some(p.title.as_str()),
        p.address.as_deref(),
        p.city.as_deref(),
        p.state.as_deref(),
        Some(p.property_type.label()),
    ];

    fields
        .iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(query))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Beds,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::PriceLow => "Price: low to high",
            SortKey::PriceHigh => "Price: high to low",
            SortKey::Beds => "Most bedrooms",
        }
    }
}

pub fn filter_properties(all: &[Property], filters: &FilterState) -> Vec<Property> {
    all.iter().filter(|p| filters.matches(p)).cloned().collect()
}

/// Orden total por la clave elegida. `sort_by` es estable: los empates
/// conservan el orden del fetch.
pub fn sort_properties(list: &mut [Property], key: SortKey) {
    match key {
        // Sin fecha va al final
        SortKey::Newest => list.sort_by(|a, b| b.listed_date.cmp(&a.listed_date)),
        SortKey::PriceLow => list.sort_by(|a, b| {
            a.price
                .unwrap_or(f64::INFINITY)
                .total_cmp(&b.price.unwrap_or(f64::INFINITY))
        }),
        SortKey::PriceHigh => list.sort_by(|a, b| {
            b.price
                .unwrap_or(f64::NEG_INFINITY)
                .total_cmp(&a.price.unwrap_or(f64::NEG_INFINITY))
        }),
        // Sin dormitorios cuenta como 0
        SortKey::Beds => list.sort_by(|a, b| b.bedrooms.unwrap_or(0).cmp(&a.bedrooms.unwrap_or(0))),
    }
}

/// Página visible más los datos derivados que la UI necesita
#[derive(Clone, PartialEq, Debug)]
pub struct ListingsPage {
    pub items: Vec<Property>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub summary: String,
}

/// Recalcula la página visible. Determinística e idempotente: mismas
/// entradas, misma salida; el array original nunca se muta.
pub fn build_page(
    all: &[Property],
    filters: &FilterState,
    sort: SortKey,
    page: usize,
) -> ListingsPage {
    let mut filtered = filter_properties(all, filters);
    sort_properties(&mut filtered, sort);

    let filtered_count = filtered.len();
    let total_pages = filtered_count.div_ceil(LISTINGS_PAGE_SIZE).max(1);

    // Si la página activa quedó fuera de rango tras un cambio, vuelve a 1
    let page = if page == 0 || page > total_pages { 1 } else { page };

    let start = (page - 1) * LISTINGS_PAGE_SIZE;
    let end = (start + LISTINGS_PAGE_SIZE).min(filtered_count);
    let items: Vec<Property> = filtered[start..end].to_vec();

    let summary = if filtered_count == 0 {
        "Showing 0 of 0".to_string()
    } else {
        format!("Showing {}-{} of {}", start + 1, end, filtered_count)
    };

    ListingsPage {
        items,
        page,
        total_pages,
        filtered_count,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn property(id: u64) -> Property {
        Property {
            id,
            title: format!("Listing {}", id),
            description: None,
            price: Some(100_000.0 + id as f64 * 10_000.0),
            currency: "USD".to_string(),
            address: Some(format!("{} Main St", id)),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            bedrooms: Some((id % 5) as u32),
            bathrooms: Some(2.0),
            square_footage: Some(1200.0),
            lot_size: None,
            year_built: Some(2000 + id as i32),
            purpose: ListingPurpose::Sale,
            property_type: PropertyType::House,
            listed_date: Utc.with_ymd_and_hms(2026, 1, 1 + (id % 27) as u32, 0, 0, 0).latest(),
            images: vec![],
            views: None,
            agent_id: None,
            featured: false,
        }
    }

    fn fixture(n: u64) -> Vec<Property> {
        (1..=n).map(property).collect()
    }

    #[test]
    fn empty_filters_are_a_no_op() {
        let all = fixture(10);
        let filters = FilterState::default();
        assert!(filters.is_empty());
        assert_eq!(filter_properties(&all, &filters), all);
    }

    #[test]
    fn price_bounds_are_respected_and_monotone() {
        let all = fixture(20);
        let mut filters = FilterState {
            min_price: Some(150_000.0),
            max_price: Some(250_000.0),
            ..Default::default()
        };

        let both = filter_properties(&all, &filters);
        assert!(both
            .iter()
            .all(|p| (150_000.0..=250_000.0).contains(&p.price.unwrap())));

        // Quitar una cota no puede achicar el resultado
        filters.max_price = None;
        let min_only = filter_properties(&all, &filters);
        assert!(min_only.len() >= both.len());

        filters.min_price = None;
        let none = filter_properties(&all, &filters);
        assert!(none.len() >= min_only.len());
        assert_eq!(none.len(), all.len());
    }

    #[test]
    fn property_without_price_is_excluded_by_price_filters() {
        let mut all = fixture(3);
        all[1].price = None;

        let filters = FilterState {
            min_price: Some(1.0),
            ..Default::default()
        };
        let out = filter_properties(&all, &filters);
        assert!(out.iter().all(|p| p.id != all[1].id));
    }

    #[test]
    fn search_matches_across_fields_case_insensitive() {
        let mut all = fixture(3);
        all[0].title = "Penthouse with river view".to_string();
        all[1].city = Some("Rivertown".to_string());
        all[2].city = Some("Springfield".to_string());
        all[2].address = Some("9 Ocean Ave".to_string());

        let filters = FilterState {
            search_query: "RIVER".to_string(),
            ..Default::default()
        };
        let out = filter_properties(&all, &filters);
        assert_eq!(out.len(), 2);

        // El tipo de propiedad también participa en la búsqueda
        let filters = FilterState {
            search_query: "house".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_properties(&all, &filters).len(), 3);
    }

    #[test]
    fn bedrooms_floor_treats_missing_as_zero() {
        let mut all = fixture(4);
        all[0].bedrooms = None;

        let filters = FilterState {
            bedrooms_floor: Some(1),
            ..Default::default()
        };
        let out = filter_properties(&all, &filters);
        assert!(out.iter().all(|p| p.bedrooms.unwrap_or(0) >= 1));
        assert!(!out.iter().any(|p| p.id == all[0].id));
    }

    #[test]
    fn price_sorts_are_exact_reverses_for_distinct_prices() {
        let all = fixture(9);

        let mut low = all.clone();
        sort_properties(&mut low, SortKey::PriceLow);
        let mut high = all.clone();
        sort_properties(&mut high, SortKey::PriceHigh);

        let mut reversed: Vec<u64> = high.iter().map(|p| p.id).collect();
        reversed.reverse();
        let low_ids: Vec<u64> = low.iter().map(|p| p.id).collect();
        assert_eq!(low_ids, reversed);
    }

    #[test]
    fn newest_sort_is_descending_with_missing_dates_last() {
        let mut all = fixture(5);
        all[2].listed_date = None;

        sort_properties(&mut all, SortKey::Newest);
        assert!(all.last().unwrap().listed_date.is_none());

        let dates: Vec<_> = all.iter().filter_map(|p| p.listed_date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn beds_sort_is_stable_for_ties() {
        let mut all = fixture(6);
        for p in all.iter_mut() {
            p.bedrooms = Some(3);
        }
        let original: Vec<u64> = all.iter().map(|p| p.id).collect();

        sort_properties(&mut all, SortKey::Beds);
        let after: Vec<u64> = all.iter().map(|p| p.id).collect();
        assert_eq!(original, after);
    }

    #[test]
    fn pagination_partitions_the_filtered_list() {
        let all = fixture(19);
        let filters = FilterState::default();

        let first = build_page(&all, &filters, SortKey::PriceLow, 1);
        assert_eq!(first.total_pages, 3); // ceil(19/8)

        let mut seen: Vec<u64> = Vec::new();
        for page in 1..=first.total_pages {
            let p = build_page(&all, &filters, SortKey::PriceLow, page);
            seen.extend(p.items.iter().map(|i| i.id));
        }

        let mut expected = filter_properties(&all, &filters);
        sort_properties(&mut expected, SortKey::PriceLow);
        let expected: Vec<u64> = expected.iter().map(|p| p.id).collect();

        // Concatenar las páginas reproduce la lista exacta, sin duplicados ni faltantes
        assert_eq!(seen, expected);
    }

    #[test]
    fn ten_items_paginate_as_eight_then_two() {
        let all = fixture(10);
        let filters = FilterState::default();

        let p1 = build_page(&all, &filters, SortKey::Newest, 1);
        assert_eq!(p1.items.len(), 8);
        assert_eq!(p1.total_pages, 2);
        assert_eq!(p1.summary, "Showing 1-8 of 10");

        let p2 = build_page(&all, &filters, SortKey::Newest, 2);
        assert_eq!(p2.items.len(), 2);
        assert_eq!(p2.summary, "Showing 9-10 of 10");
    }

    #[test]
    fn out_of_range_page_resets_to_one() {
        let all = fixture(30);
        let filters = FilterState {
            max_price: Some(180_000.0), // deja muchos menos de 3 páginas
            ..Default::default()
        };

        let p = build_page(&all, &filters, SortKey::Newest, 3);
        assert_eq!(p.page, 1);
        assert!(!p.items.is_empty());
    }

    #[test]
    fn empty_result_still_reports_one_page() {
        let all = fixture(10);
        let filters = FilterState {
            min_price: Some(9_000_000.0),
            ..Default::default()
        };

        let p = build_page(&all, &filters, SortKey::Newest, 1);
        assert!(p.items.is_empty());
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.filtered_count, 0);
        assert_eq!(p.summary, "Showing 0 of 0");
    }

    #[test]
    fn build_page_never_mutates_the_input() {
        let all = fixture(12);
        let snapshot = all.clone();
        let filters = FilterState {
            search_query: "listing".to_string(),
            ..Default::default()
        };

        let a = build_page(&all, &filters, SortKey::PriceHigh, 2);
        let b = build_page(&all, &filters, SortKey::PriceHigh, 2);

        assert_eq!(all, snapshot);
        assert_eq!(a, b); // idempotente
    }

    #[test]
    fn badges_track_non_empty_fields_and_clear_individually() {
        let mut filters = FilterState {
            search_query: "loft".to_string(),
            min_price: Some(50_000.0),
            purpose: Some(ListingPurpose::Rent),
            ..Default::default()
        };

        let badges = filters.badges();
        assert_eq!(badges.len(), 3);

        filters.clear_field(FilterField::MinPrice);
        assert_eq!(filters.badges().len(), 2);
        assert!(filters.min_price.is_none());
        assert_eq!(filters.search_query, "loft");

        filters.clear();
        assert!(filters.is_empty());
        assert!(filters.badges().is_empty());
    }
}
