use yew::prelude::*;

use crate::components::AgentCard;
use crate::models::Agent;
use crate::services::ApiClient;

#[function_component(AgentsPage)]
pub fn agents_page() -> Html {
    let agents = use_state(Vec::<Agent>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let agents = agents.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            load_agents(agents, loading, error);
            || ()
        });
    }

    let retry = {
        let agents = agents.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            load_agents(agents.clone(), loading.clone(), error.clone());
        })
    };

    // Los destacados van arriba, el resto conserva el orden del backend
    let mut sorted: Vec<Agent> = (*agents).clone();
    sorted.sort_by(|a, b| b.featured.cmp(&a.featured));

    html! {
        <div class="page agents-page">
            <header class="page-header">
                <h1>{"Our agents"}</h1>
                <p>{"Professionals publishing and managing properties on Realvista."}</p>
            </header>

            {
                if *loading {
                    html! {
                        <div class="state-block loading">
                            <span class="spinner"></span>
                            <p>{"Loading agents..."}</p>
                        </div>
                    }
                } else if let Some(e) = (*error).clone() {
                    html! {
                        <div class="state-block error">
                            <p>{"We couldn't load the agent directory."}</p>
                            <p class="error-detail">{e}</p>
                            <button class="btn-retry" onclick={retry}>{"Try again"}</button>
                        </div>
                    }
                } else if sorted.is_empty() {
                    html! {
                        <div class="state-block empty">
                            <p>{"No agents registered yet."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="agents-grid">
                            { for sorted.iter().map(|a| {
                                html! { <AgentCard key={a.id} agent={a.clone()} /> }
                            })}
                        </div>
                    }
                }
            }
        </div>
    }
}

fn load_agents(
    agents: UseStateHandle<Vec<Agent>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        loading.set(true);
        error.set(None);

        let api = ApiClient::new();
        match api.get_agents().await {
            Ok(fetched) => {
                log::info!("🤝 Agentes cargados: {}", fetched.len());
                agents.set(fetched);
            }
            Err(e) => {
                log::error!("❌ Error cargando agentes: {}", e);
                agents.set(Vec::new());
                error.set(Some(e));
            }
        }
        loading.set(false);
    });
}
