use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::Property;
use crate::utils::{format_count, format_price, format_sqft};

#[derive(Properties, PartialEq, Clone)]
pub struct PropertyCardProps {
    pub property: Property,
}

#[function_component(PropertyCard)]
pub fn property_card(props: &PropertyCardProps) -> Html {
    let p = &props.property;

    let location = match (p.city.as_deref(), p.state.as_deref()) {
        (Some(city), Some(state)) => format!("{}, {}", city, state),
        (Some(city), None) => city.to_string(),
        (None, Some(state)) => state.to_string(),
        (None, None) => "Location not listed".to_string(),
    };

    html! {
        <Link<Route>
            to={Route::PropertyDetail { id: p.id }}
            classes={classes!("property-card", p.featured.then_some("featured"))}
        >
            <div class="property-card-media">
                {
                    if let Some(image) = p.cover_image() {
                        html! { <img src={image.to_string()} alt={p.title.clone()} loading="lazy" /> }
                    } else {
                        html! { <div class="property-card-placeholder">{"🏠"}</div> }
                    }
                }
                <span class="property-purpose-tag">{p.purpose.label()}</span>
            </div>

            <div class="property-card-body">
                <div class="property-card-price">{format_price(p.price, &p.currency)}</div>
                <h3 class="property-card-title">{&p.title}</h3>
                <div class="property-card-location">{location}</div>
                <div class="property-card-specs">
                    <span>{format!("{} beds", format_count(p.bedrooms))}</span>
                    <span>{format!("{} baths", format_count(p.bathrooms))}</span>
                    <span>{format_sqft(p.square_footage)}</span>
                </div>
            </div>
        </Link<Route>>
    }
}
