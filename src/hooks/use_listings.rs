use yew::prelude::*;

use crate::models::Property;
use crate::services::ApiClient;
use crate::state::{build_page, FilterBadge, FilterField, FilterState, ListingsPage, SortKey};

pub struct UseListingsHandle {
    /// Página visible ya filtrada, ordenada y recortada
    pub page: ListingsPage,
    pub filters: FilterState,
    pub sort: SortKey,
    pub badges: Vec<FilterBadge>,
    pub loading: bool,
    pub error: Option<String>,

    pub set_filters: Callback<FilterState>,
    pub set_sort: Callback<SortKey>,
    pub set_page: Callback<usize>,
    pub clear_filter: Callback<FilterField>,
    pub clear_all: Callback<()>,
    pub retry: Callback<()>,
}

/// Listado de propiedades: un solo fetch al montar y pipeline en memoria
/// (filtrar → ordenar → paginar) sobre esa lista para cada cambio de estado.
#[hook]
pub fn use_listings() -> UseListingsHandle {
    let properties = use_state(Vec::<Property>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let filters = use_state(FilterState::default);
    let sort = use_state(SortKey::default);
    let current_page = use_state(|| 1usize);

    // Fetch on mount
    {
        let properties = properties.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            load_properties(properties, loading, error);
            || ()
        });
    }

    let set_filters = {
        let filters = filters.clone();
        let current_page = current_page.clone();
        Callback::from(move |new_filters: FilterState| {
            filters.set(new_filters);
            // Cambiar un filtro vuelve a la primera página
            current_page.set(1);
        })
    };

    let set_sort = {
        let sort = sort.clone();
        Callback::from(move |new_sort: SortKey| {
            sort.set(new_sort);
        })
    };

    let set_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            current_page.set(page);
        })
    };

    // Quitar un solo badge deja el resto de filtros intactos
    let clear_filter = {
        let filters = filters.clone();
        let current_page = current_page.clone();
        Callback::from(move |field: FilterField| {
            let mut next = (*filters).clone();
            next.clear_field(field);
            filters.set(next);
            current_page.set(1);
        })
    };

    let clear_all = {
        let filters = filters.clone();
        let current_page = current_page.clone();
        Callback::from(move |_| {
            log::info!("🧹 Limpiando todos los filtros");
            filters.set(FilterState::default());
            current_page.set(1);
        })
    };

    let retry = {
        let properties = properties.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_| {
            log::info!("🔄 Reintentando fetch de propiedades...");
            load_properties(properties.clone(), loading.clone(), error.clone());
        })
    };

    let page = build_page(&properties, &filters, *sort, *current_page);
    let badges = filters.badges();

    UseListingsHandle {
        page,
        filters: (*filters).clone(),
        sort: *sort,
        badges,
        loading: *loading,
        error: (*error).clone(),
        set_filters,
        set_sort,
        set_page,
        clear_filter,
        clear_all,
        retry,
    }
}

/// Un request, una transición de UI: loading se prende antes del dispatch
/// y se apaga en ambas ramas. Un error deja la lista vacía, nunca rompe.
fn load_properties(
    properties: UseStateHandle<Vec<Property>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        loading.set(true);
        error.set(None);

        let api = ApiClient::new();
        match api.get_properties().await {
            Ok(fetched) => {
                log::info!("✅ Listado cargado: {} propiedades", fetched.len());
                properties.set(fetched);
            }
            Err(e) => {
                log::error!("❌ Error cargando propiedades: {}", e);
                properties.set(Vec::new());
                error.set(Some(e));
            }
        }
        loading.set(false);
    });
}
