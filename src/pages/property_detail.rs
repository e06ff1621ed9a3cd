use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_session;
use crate::models::Property;
use crate::services::ApiClient;
use crate::utils::{format_count, format_date, format_price, format_sqft};

#[derive(Properties, PartialEq)]
pub struct PropertyDetailProps {
    pub id: u64,
}

#[function_component(PropertyDetailPage)]
pub fn property_detail_page(props: &PropertyDetailProps) -> Html {
    let session = use_session();
    let property = use_state(|| None::<Property>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let bookmarked = use_state(|| false);
    let gallery_index = use_state(|| 0usize);

    // Fetch al montar (y si cambia el id en la URL)
    {
        let property = property.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.id, move |id| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);

                let api = ApiClient::new();
                match api.get_property(id).await {
                    Ok(fetched) => {
                        log::info!("🏠 Propiedad cargada: {}", fetched.title);
                        property.set(Some(fetched));
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando propiedad {}: {}", id, e);
                        property.set(None);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_toggle_bookmark = {
        let bookmarked = bookmarked.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            let bookmarked = bookmarked.clone();
            let currently = *bookmarked;
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = if currently {
                    api.unbookmark_property(id).await
                } else {
                    api.bookmark_property(id).await
                };

                match result {
                    Ok(()) => bookmarked.set(!currently),
                    Err(e) => log::error!("❌ Error actualizando favorito: {}", e),
                }
            });
        })
    };

    if *loading {
        return html! {
            <div class="page detail-page">
                <div class="state-block loading">
                    <span class="spinner"></span>
                    <p>{"Loading property..."}</p>
                </div>
            </div>
        };
    }

    if let Some(e) = (*error).clone() {
        return html! {
            <div class="page detail-page">
                <div class="state-block error">
                    <p>{"We couldn't load this property."}</p>
                    <p class="error-detail">{e}</p>
                    <Link<Route> to={Route::Listings} classes="btn-retry">
                        {"Back to listings"}
                    </Link<Route>>
                </div>
            </div>
        };
    }

    let Some(p) = (*property).clone() else {
        return html! {
            <div class="page detail-page">
                <div class="state-block empty">
                    <p>{"This property is no longer listed."}</p>
                    <Link<Route> to={Route::Listings}>{"Back to listings"}</Link<Route>>
                </div>
            </div>
        };
    };

    let location = [p.address.as_deref(), p.city.as_deref(), p.state.as_deref()]
        .iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        <div class="page detail-page">
            <div class="detail-gallery">
                {
                    if let Some(image) = p.images.get(*gallery_index) {
                        html! { <img class="detail-photo" src={image.clone()} alt={p.title.clone()} /> }
                    } else {
                        html! { <div class="detail-photo placeholder">{"🏠"}</div> }
                    }
                }
                if p.images.len() > 1 {
                    <div class="detail-thumbs">
                        { for p.images.iter().enumerate().map(|(i, image)| {
                            let gallery_index = gallery_index.clone();
                            html! {
                                <img
                                    class={classes!("detail-thumb", (i == *gallery_index).then_some("active"))}
                                    src={image.clone()}
                                    onclick={Callback::from(move |_| gallery_index.set(i))}
                                />
                            }
                        })}
                    </div>
                }
            </div>

            <div class="detail-body">
                <div class="detail-header">
                    <span class="property-purpose-tag">{p.purpose.label()}</span>
                    <h1>{&p.title}</h1>
                    <p class="detail-location">{location}</p>
                    <div class="detail-price">{format_price(p.price, &p.currency)}</div>
                </div>

                <div class="detail-actions">
                    {
                        if session.is_logged_in() {
                            html! {
                                <button
                                    class={classes!("btn-bookmark", (*bookmarked).then_some("saved"))}
                                    onclick={on_toggle_bookmark}
                                >
                                    { if *bookmarked { "★ Saved" } else { "☆ Save property" } }
                                </button>
                            }
                        } else {
                            html! {
                                <Link<Route> to={Route::SignIn} classes="btn-bookmark anonymous">
                                    {"Sign in to save"}
                                </Link<Route>>
                            }
                        }
                    }
                </div>

                <dl class="detail-specs">
                    <div><dt>{"Bedrooms"}</dt><dd>{format_count(p.bedrooms)}</dd></div>
                    <div><dt>{"Bathrooms"}</dt><dd>{format_count(p.bathrooms)}</dd></div>
                    <div><dt>{"Area"}</dt><dd>{format_sqft(p.square_footage)}</dd></div>
                    <div><dt>{"Lot size"}</dt><dd>{format_sqft(p.lot_size)}</dd></div>
                    <div><dt>{"Year built"}</dt><dd>{format_count(p.year_built)}</dd></div>
                    <div><dt>{"Type"}</dt><dd>{p.property_type.label()}</dd></div>
                    <div><dt>{"Listed"}</dt><dd>{format_date(p.listed_date)}</dd></div>
                    <div><dt>{"Views"}</dt><dd>{format_count(p.views)}</dd></div>
                </dl>

                {
                    if let Some(description) = &p.description {
                        html! {
                            <section class="detail-description">
                                <h2>{"About this property"}</h2>
                                <p>{description}</p>
                            </section>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(agent_id) = p.agent_id {
                        html! {
                            <Link<Route> to={Route::AgentDetail { id: agent_id }} classes="detail-agent-link">
                                {"View listing agent →"}
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
