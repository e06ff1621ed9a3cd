use yew::prelude::*;

use crate::models::SubscriptionPlan;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: SubscriptionPlan,
}

/// Card de un plan con selector de duración. El precio y el descuento
/// salen del pricing anidado que manda el backend.
#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;

    let default_duration = plan.pricing.first().map(|p| p.duration_months).unwrap_or(1);
    let duration = use_state(move || default_duration);

    let selected = plan.pricing_for(*duration).or_else(|| plan.pricing.first());

    html! {
        <div class={classes!("plan-card", plan.popular.then_some("popular"))}>
            if plan.popular {
                <span class="plan-popular-tag">{"Most popular"}</span>
            }

            <h3 class="plan-name">{&plan.name}</h3>
            {
                if let Some(tagline) = &plan.tagline {
                    html! { <p class="plan-tagline">{tagline}</p> }
                } else {
                    html! {}
                }
            }

            <div class="plan-durations">
                { for plan.pricing.iter().map(|p| {
                    let duration_handle = duration.clone();
                    let months = p.duration_months;
                    html! {
                        <button
                            class={classes!("plan-duration", (*duration == months).then_some("selected"))}
                            onclick={Callback::from(move |_| duration_handle.set(months))}
                        >
                            { if months >= 12 && months % 12 == 0 {
                                format!("{} yr", months / 12)
                            } else {
                                format!("{} mo", months)
                            }}
                        </button>
                    }
                })}
            </div>

            {
                if let Some(pricing) = selected {
                    html! {
                        <div class="plan-price">
                            <span class="plan-amount">
                                {format_price(Some(pricing.price), &pricing.currency)}
                            </span>
                            <span class="plan-period">
                                {format!(" / {} months", pricing.duration_months)}
                            </span>
                            {
                                if let Some(discount) = pricing.discount_percent {
                                    html! { <span class="plan-discount">{format!("Save {:.0}%", discount)}</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                } else {
                    html! { <div class="plan-price">{"Contact us"}</div> }
                }
            }

            <ul class="plan-features">
                { for plan.features.iter().map(|f| html! { <li>{f}</li> }) }
            </ul>

            <button class="btn-plan-cta">{"Choose plan"}</button>
        </div>
    }
}
