use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="page about-page">
            <header class="page-header">
                <h1>{"About Realvista"}</h1>
                <p>{"We build tools that make property management boring, in the best possible way."}</p>
            </header>

            <section class="about-section">
                <h2>{"What we do"}</h2>
                <p>
                    {"Realvista connects agencies, independent agents and property seekers on a \
                      single platform: listings with honest data, verified professional profiles \
                      and market reports that anyone can read."}
                </p>
            </section>

            <section class="about-section">
                <h2>{"Why we started"}</h2>
                <p>
                    {"Most listing sites optimize for clicks, not for closings. We started Realvista \
                      to give agents a portfolio they actually control and give buyers search results \
                      that don't hide the price until the third tap."}
                </p>
            </section>

            <section class="about-stats">
                <div class="about-stat">
                    <span class="stat-number">{"12k+"}</span>
                    <span class="stat-label">{"Active listings"}</span>
                </div>
                <div class="about-stat">
                    <span class="stat-number">{"800+"}</span>
                    <span class="stat-label">{"Verified agents"}</span>
                </div>
                <div class="about-stat">
                    <span class="stat-number">{"40"}</span>
                    <span class="stat-label">{"Cities covered"}</span>
                </div>
            </section>

            <section class="about-section cta">
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Talk to us"}</Link<Route>>
            </section>
        </div>
    }
}
