use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::PropertyCard;
use crate::models::{Agent, ContactMode, Property};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AgentDetailProps {
    pub id: u64,
}

#[function_component(AgentDetailPage)]
pub fn agent_detail_page(props: &AgentDetailProps) -> Html {
    let agent = use_state(|| None::<Agent>);
    let properties = use_state(Vec::<Property>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Perfil y cartera del agente en un solo flujo: el perfil manda,
    // si su cartera falla se muestra vacía sin tirar la página
    {
        let agent = agent.clone();
        let properties = properties.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.id, move |id| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);

                let api = ApiClient::new();
                match api.get_agent(id).await {
                    Ok(fetched) => {
                        agent.set(Some(fetched));

                        match api.get_agent_properties(id).await {
                            Ok(listings) => {
                                log::info!("🏠 Cartera del agente {}: {} propiedades", id, listings.len());
                                properties.set(listings);
                            }
                            Err(e) => {
                                log::warn!("⚠️ Error cargando cartera del agente {}: {}", id, e);
                                properties.set(Vec::new());
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando agente {}: {}", id, e);
                        agent.set(None);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="page detail-page">
                <div class="state-block loading">
                    <span class="spinner"></span>
                    <p>{"Loading agent..."}</p>
                </div>
            </div>
        };
    }

    let Some(a) = (*agent).clone() else {
        let message = (*error)
            .clone()
            .unwrap_or_else(|| "This agent profile is not available.".to_string());
        return html! {
            <div class="page detail-page">
                <div class="state-block error">
                    <p>{"We couldn't load this agent."}</p>
                    <p class="error-detail">{message}</p>
                    <Link<Route> to={Route::Agents} classes="btn-retry">{"Back to agents"}</Link<Route>>
                </div>
            </div>
        };
    };

    let contact = match a.preferred_contact_mode {
        ContactMode::Phone => a.phone.clone(),
        ContactMode::Whatsapp => a.whatsapp.clone(),
        ContactMode::Email => None,
    };

    html! {
        <div class="page detail-page agent-detail">
            <div class="agent-profile">
                {
                    if let Some(avatar) = &a.avatar {
                        html! { <img class="agent-avatar large" src={avatar.clone()} alt={a.agency_name.clone()} /> }
                    } else {
                        html! {
                            <div class="agent-avatar large initial">
                                {a.agency_name.chars().next().unwrap_or('?')}
                            </div>
                        }
                    }
                }

                <div class="agent-profile-body">
                    <h1>
                        {&a.agency_name}
                        if a.verified {
                            <span class="agent-verified" title="Verified agent">{"✔"}</span>
                        }
                    </h1>
                    {
                        if let Some(years) = a.experience_years {
                            html! { <p class="agent-experience">{format!("{} years of experience", years)}</p> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if let Some(bio) = &a.bio {
                            html! { <p class="agent-bio">{bio}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="agent-contact-row">
                        <span>{format!("Preferred contact: {}", a.preferred_contact_mode.label())}</span>
                        {
                            if let Some(number) = contact {
                                html! { <span class="agent-number">{number}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>

            <section class="agent-listings">
                <h2>{format!("Listings by {}", a.agency_name)}</h2>
                {
                    if properties.is_empty() {
                        html! {
                            <div class="state-block empty">
                                <p>{"This agent has no active listings."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="listings-grid">
                                { for properties.iter().map(|p| {
                                    html! { <PropertyCard key={p.id} property={p.clone()} /> }
                                })}
                            </div>
                        }
                    }
                }
            </section>
        </div>
    }
}
