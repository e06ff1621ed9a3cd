use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-columns">
                <div class="footer-column">
                    <h4>{"Realvista"}</h4>
                    <p>{"Property management made simple for agents, landlords and buyers."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::Listings}>{"Listings"}</Link<Route>>
                    <Link<Route> to={Route::Agents}>{"Agents"}</Link<Route>>
                    <Link<Route> to={Route::Trends}>{"Market Trends"}</Link<Route>>
                    <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About}>{"About us"}</Link<Route>>
                    <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Legal"}</h4>
                    <Link<Route> to={Route::Terms}>{"Terms of service"}</Link<Route>>
                    <Link<Route> to={Route::Privacy}>{"Privacy policy"}</Link<Route>>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{"© 2026 Realvista. All rights reserved."}</span>
            </div>
        </footer>
    }
}
