use yew::prelude::*;

use crate::state::{FilterBadge, FilterField};

#[derive(Properties, PartialEq)]
pub struct FilterBadgesProps {
    pub badges: Vec<FilterBadge>,
    /// Quita solo el campo del badge clickeado
    pub on_remove: Callback<FilterField>,
    pub on_clear_all: Callback<()>,
}

#[function_component(FilterBadges)]
pub fn filter_badges(props: &FilterBadgesProps) -> Html {
    if props.badges.is_empty() {
        return html! {};
    }

    html! {
        <div class="filter-badges">
            { for props.badges.iter().map(|badge| {
                let field = badge.field;
                let on_remove = props.on_remove.clone();
                html! {
                    <span class="filter-badge">
                        {&badge.label}
                        <button
                            class="badge-remove"
                            onclick={Callback::from(move |_| on_remove.emit(field))}
                        >
                            {"×"}
                        </button>
                    </span>
                }
            })}
            <button class="badges-clear-all" onclick={props.on_clear_all.reform(|_| ())}>
                {"Clear all"}
            </button>
        </div>
    }
}
