use yew::prelude::*;

use crate::components::PlanCard;
use crate::models::SubscriptionPlan;
use crate::services::ApiClient;

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    let plans = use_state(Vec::<SubscriptionPlan>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let plans = plans.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            load_plans(plans, loading, error);
            || ()
        });
    }

    let retry = {
        let plans = plans.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            load_plans(plans.clone(), loading.clone(), error.clone());
        })
    };

    html! {
        <div class="page pricing-page">
            <header class="page-header">
                <h1>{"Simple pricing for every agency"}</h1>
                <p>{"Pick a plan, pay per duration, cancel whenever you want."}</p>
            </header>

            {
                if *loading {
                    html! {
                        <div class="state-block loading">
                            <span class="spinner"></span>
                            <p>{"Loading plans..."}</p>
                        </div>
                    }
                } else if let Some(e) = (*error).clone() {
                    html! {
                        <div class="state-block error">
                            <p>{"We couldn't load the subscription plans."}</p>
                            <p class="error-detail">{e}</p>
                            <button class="btn-retry" onclick={retry}>{"Try again"}</button>
                        </div>
                    }
                } else if plans.is_empty() {
                    html! {
                        <div class="state-block empty">
                            <p>{"Plans are not available right now. Please check back soon."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="plans-grid">
                            { for plans.iter().map(|plan| {
                                html! { <PlanCard key={plan.id} plan={plan.clone()} /> }
                            })}
                        </div>
                    }
                }
            }
        </div>
    }
}

fn load_plans(
    plans: UseStateHandle<Vec<SubscriptionPlan>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        loading.set(true);
        error.set(None);

        let api = ApiClient::new();
        match api.get_plans().await {
            Ok(fetched) => {
                log::info!("💳 Planes cargados: {}", fetched.len());
                plans.set(fetched);
            }
            Err(e) => {
                log::error!("❌ Error cargando planes: {}", e);
                plans.set(Vec::new());
                error.set(Some(e));
            }
        }
        loading.set(false);
    });
}
