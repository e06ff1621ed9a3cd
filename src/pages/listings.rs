use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{FilterBadges, FilterPanel, Pagination, PropertyCard};
use crate::hooks::use_listings;
use crate::state::SortKey;

/// Explorador de propiedades: la lista completa se fetchea una vez y todo
/// filtro/orden/página se resuelve en memoria.
#[function_component(ListingsPage)]
pub fn listings_page() -> Html {
    let listings = use_listings();

    let on_sort = {
        let set_sort = listings.set_sort.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let key = match select.value().as_str() {
                    "price_low" => SortKey::PriceLow,
                    "price_high" => SortKey::PriceHigh,
                    "beds" => SortKey::Beds,
                    _ => SortKey::Newest,
                };
                set_sort.emit(key);
            }
        })
    };

    let sort_value = match listings.sort {
        SortKey::Newest => "newest",
        SortKey::PriceLow => "price_low",
        SortKey::PriceHigh => "price_high",
        SortKey::Beds => "beds",
    };

    // La UI distingue cargando / error / vacío / con resultados
    let body = if listings.loading {
        html! {
            <div class="state-block loading">
                <span class="spinner"></span>
                <p>{"Loading properties..."}</p>
            </div>
        }
    } else if let Some(error) = &listings.error {
        html! {
            <div class="state-block error">
                <p>{"We couldn't load the listings."}</p>
                <p class="error-detail">{error}</p>
                <button class="btn-retry" onclick={listings.retry.reform(|_| ())}>
                    {"Try again"}
                </button>
            </div>
        }
    } else if listings.page.filtered_count == 0 {
        html! {
            <div class="state-block empty">
                <p>{"No properties match your search."}</p>
                <button class="btn-clear-filters" onclick={listings.clear_all.reform(|_| ())}>
                    {"Clear all filters"}
                </button>
            </div>
        }
    } else {
        html! {
            <>
                <div class="listings-grid">
                    { for listings.page.items.iter().map(|p| {
                        html! { <PropertyCard key={p.id} property={p.clone()} /> }
                    })}
                </div>
                <Pagination
                    page={listings.page.page}
                    total_pages={listings.page.total_pages}
                    on_page={listings.set_page.clone()}
                />
            </>
        }
    };

    html! {
        <div class="page listings-page">
            <header class="page-header">
                <h1>{"Browse properties"}</h1>
                <p>{"Homes, apartments, land and commercial spaces listed by verified agents."}</p>
            </header>

            <div class="listings-layout">
                <FilterPanel
                    filters={listings.filters.clone()}
                    on_change={listings.set_filters.clone()}
                    on_clear={listings.clear_all.clone()}
                />

                <section class="listings-results">
                    <div class="listings-toolbar">
                        <span class="listings-summary">{&listings.page.summary}</span>
                        <label class="sort-label" for="sort-select">{"Sort by"}</label>
                        <select id="sort-select" value={sort_value} onchange={on_sort}>
                            <option value="newest">{"Newest"}</option>
                            <option value="price_low">{"Price: low to high"}</option>
                            <option value="price_high">{"Price: high to low"}</option>
                            <option value="beds">{"Most bedrooms"}</option>
                        </select>
                    </div>

                    <FilterBadges
                        badges={listings.badges.clone()}
                        on_remove={listings.clear_filter.clone()}
                        on_clear_all={listings.clear_all.clone()}
                    />

                    { body }
                </section>
            </div>
        </div>
    }
}
