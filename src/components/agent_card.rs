use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::Agent;

#[derive(Properties, PartialEq, Clone)]
pub struct AgentCardProps {
    pub agent: Agent,
}

#[function_component(AgentCard)]
pub fn agent_card(props: &AgentCardProps) -> Html {
    let a = &props.agent;

    html! {
        <Link<Route>
            to={Route::AgentDetail { id: a.id }}
            classes={classes!("agent-card", a.featured.then_some("featured"))}
        >
            {
                if let Some(avatar) = &a.avatar {
                    html! { <img class="agent-avatar" src={avatar.clone()} alt={a.agency_name.clone()} /> }
                } else {
                    html! {
                        <div class="agent-avatar initial">
                            {a.agency_name.chars().next().unwrap_or('?')}
                        </div>
                    }
                }
            }

            <div class="agent-card-body">
                <h3 class="agent-name">
                    {&a.agency_name}
                    if a.verified {
                        <span class="agent-verified" title="Verified agent">{"✔"}</span>
                    }
                </h3>
                {
                    if let Some(years) = a.experience_years {
                        html! { <div class="agent-experience">{format!("{} years of experience", years)}</div> }
                    } else {
                        html! {}
                    }
                }
                <div class="agent-contact">
                    {format!("Prefers {}", a.preferred_contact_mode.label())}
                </div>
                if a.featured {
                    <span class="agent-featured-tag">{"Featured"}</span>
                }
            </div>
        </Link<Route>>
    }
}
