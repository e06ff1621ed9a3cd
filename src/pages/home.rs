use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{FeaturedCarousel, HeroCarousel};
use crate::models::Property;
use crate::services::ApiClient;

const HERO_IMAGES: [&str; 3] = [
    "https://images.realvista.app/hero/skyline.jpg",
    "https://images.realvista.app/hero/suburb.jpg",
    "https://images.realvista.app/hero/interior.jpg",
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let featured = use_state(Vec::<Property>::new);
    let loading = use_state(|| true);

    // Las destacadas del carrusel salen del mismo listado que /listings
    {
        let featured = featured.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.get_properties().await {
                    Ok(properties) => {
                        let mut picked: Vec<Property> =
                            properties.iter().filter(|p| p.featured).cloned().collect();
                        if picked.is_empty() {
                            // Sin flag featured: mostramos las primeras del fetch
                            picked = properties.into_iter().take(5).collect();
                        }
                        featured.set(picked);
                    }
                    Err(e) => {
                        // La home degrada a no mostrar el carrusel, sin romper
                        log::error!("❌ Error cargando destacadas: {}", e);
                        featured.set(Vec::new());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="page home-page">
            <HeroCarousel images={HERO_IMAGES.iter().map(|s| s.to_string()).collect::<Vec<_>>()}>
                <h1>{"Find a place you'll love to manage"}</h1>
                <p>{"Realvista brings listings, agents and market data together in one place."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Listings} classes="btn-primary">
                        {"Browse listings"}
                    </Link<Route>>
                    <Link<Route> to={Route::Pricing} classes="btn-secondary">
                        {"See pricing"}
                    </Link<Route>>
                </div>
            </HeroCarousel>

            <section class="home-section value-props">
                <div class="value-prop">
                    <span class="value-icon">{"🔍"}</span>
                    <h3>{"Search that works"}</h3>
                    <p>{"Filter by price, bedrooms, purpose and more. No page reloads, no waiting."}</p>
                </div>
                <div class="value-prop">
                    <span class="value-icon">{"🤝"}</span>
                    <h3>{"Verified agents"}</h3>
                    <p>{"Every featured agent is vetted before their badge shows up next to a listing."}</p>
                </div>
                <div class="value-prop">
                    <span class="value-icon">{"📈"}</span>
                    <h3>{"Market trends"}</h3>
                    <p>{"Monthly reports on prices and demand for the cities you care about."}</p>
                </div>
            </section>

            <section class="home-section featured-section">
                <h2>{"Featured properties"}</h2>
                {
                    if *loading {
                        html! { <div class="state-block loading"><span class="spinner"></span></div> }
                    } else if featured.is_empty() {
                        html! {
                            <div class="state-block empty">
                                <p>{"No featured properties right now."}</p>
                                <Link<Route> to={Route::Listings}>{"Browse all listings"}</Link<Route>>
                            </div>
                        }
                    } else {
                        html! { <FeaturedCarousel properties={(*featured).clone()} /> }
                    }
                }
            </section>

            <section class="home-section cta-band">
                <h2>{"Are you a real-estate agent?"}</h2>
                <p>{"Publish your portfolio, reach more buyers and manage everything from one dashboard."}</p>
                <Link<Route> to={Route::Register} classes="btn-primary">
                    {"Create your account"}
                </Link<Route>>
            </section>
        </div>
    }
}
