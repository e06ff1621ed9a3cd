use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page not-found-page">
            <div class="state-block empty">
                <h1>{"404"}</h1>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn-primary">{"Back to home"}</Link<Route>>
            </div>
        </div>
    }
}
