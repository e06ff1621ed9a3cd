use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{ListingPurpose, PropertyType};
use crate::state::FilterState;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub filters: FilterState,
    pub on_change: Callback<FilterState>,
    pub on_clear: Callback<()>,
}

/// Panel de filtros del listado. Cada campo emite el FilterState completo;
/// el dueño del pipeline decide qué recalcular.
#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_search = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = filters.clone();
                next.search_query = input.value();
                on_change.emit(next);
            }
        })
    };

    let on_min_price = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = filters.clone();
                next.min_price = input.value().parse::<f64>().ok();
                on_change.emit(next);
            }
        })
    };

    let on_max_price = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = filters.clone();
                next.max_price = input.value().parse::<f64>().ok();
                on_change.emit(next);
            }
        })
    };

    let on_bedrooms = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = filters.clone();
                next.bedrooms_floor = select.value().parse::<u32>().ok();
                on_change.emit(next);
            }
        })
    };

    let on_year_built = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = filters.clone();
                next.year_built_floor = input.value().parse::<i32>().ok();
                on_change.emit(next);
            }
        })
    };

    let on_purpose = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = filters.clone();
                next.purpose = match select.value().as_str() {
                    "rent" => Some(ListingPurpose::Rent),
                    "lease" => Some(ListingPurpose::Lease),
                    "sale" => Some(ListingPurpose::Sale),
                    _ => None,
                };
                on_change.emit(next);
            }
        })
    };

    let on_property_type = {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = filters.clone();
                next.property_type = match select.value().as_str() {
                    "house" => Some(PropertyType::House),
                    "apartment" => Some(PropertyType::Apartment),
                    "land" => Some(PropertyType::Land),
                    "commercial" => Some(PropertyType::Commercial),
                    _ => None,
                };
                on_change.emit(next);
            }
        })
    };

    let purpose_value = match props.filters.purpose {
        Some(ListingPurpose::Rent) => "rent",
        Some(ListingPurpose::Lease) => "lease",
        Some(ListingPurpose::Sale) => "sale",
        None => "any",
    };

    let type_value = match props.filters.property_type {
        Some(PropertyType::House) => "house",
        Some(PropertyType::Apartment) => "apartment",
        Some(PropertyType::Land) => "land",
        Some(PropertyType::Commercial) => "commercial",
        None => "any",
    };

    html! {
        <aside class="filter-panel">
            <div class="filter-group">
                <label for="filter-search">{"Search"}</label>
                <input
                    type="text"
                    id="filter-search"
                    placeholder="Title, address, city..."
                    value={props.filters.search_query.clone()}
                    oninput={on_search}
                />
            </div>

            <div class="filter-group filter-row">
                <div>
                    <label for="filter-min-price">{"Min price"}</label>
                    <input
                        type="number"
                        id="filter-min-price"
                        min="0"
                        placeholder="No min"
                        value={props.filters.min_price.map(|v| v.to_string()).unwrap_or_default()}
                        onchange={on_min_price}
                    />
                </div>
                <div>
                    <label for="filter-max-price">{"Max price"}</label>
                    <input
                        type="number"
                        id="filter-max-price"
                        min="0"
                        placeholder="No max"
                        value={props.filters.max_price.map(|v| v.to_string()).unwrap_or_default()}
                        onchange={on_max_price}
                    />
                </div>
            </div>

            <div class="filter-group">
                <label for="filter-bedrooms">{"Bedrooms"}</label>
                <select id="filter-bedrooms" onchange={on_bedrooms}>
                    <option value="any" selected={props.filters.bedrooms_floor.is_none()}>{"Any"}</option>
                    { for (1..=5u32).map(|n| {
                        html! {
                            <option
                                value={n.to_string()}
                                selected={props.filters.bedrooms_floor == Some(n)}
                            >
                                {format!("{}+", n)}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="filter-group">
                <label for="filter-year">{"Year built (from)"}</label>
                <input
                    type="number"
                    id="filter-year"
                    placeholder="Any year"
                    value={props.filters.year_built_floor.map(|v| v.to_string()).unwrap_or_default()}
                    onchange={on_year_built}
                />
            </div>

            <div class="filter-group">
                <label for="filter-purpose">{"Purpose"}</label>
                <select id="filter-purpose" value={purpose_value} onchange={on_purpose}>
                    <option value="any">{"Any"}</option>
                    <option value="rent">{"For Rent"}</option>
                    <option value="lease">{"For Lease"}</option>
                    <option value="sale">{"For Sale"}</option>
                </select>
            </div>

            <div class="filter-group">
                <label for="filter-type">{"Property type"}</label>
                <select id="filter-type" value={type_value} onchange={on_property_type}>
                    <option value="any">{"Any"}</option>
                    <option value="house">{"House"}</option>
                    <option value="apartment">{"Apartment"}</option>
                    <option value="land">{"Land"}</option>
                    <option value="commercial">{"Commercial"}</option>
                </select>
            </div>

            <button class="btn-clear-filters" onclick={props.on_clear.reform(|_| ())}>
                {"Clear all filters"}
            </button>
        </aside>
    }
}
