use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_session;

/// Barra de navegación. Se suscribe a la sesión: al iniciar o cerrar sesión
/// cambia entre la vista autenticada y la anónima sin recargar la página.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let menu_open = use_state(|| false);
    let navigator = use_navigator().expect("navigator not available");
    let route = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let on_sign_out = {
        let sign_out = session.sign_out.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            sign_out.emit(());
            menu_open.set(false);
            navigator.push(&Route::Home);
        })
    };

    let nav_link = |target: Route, label: &str| {
        let active = route.as_ref() == Some(&target);
        html! {
            <Link<Route>
                to={target}
                classes={classes!("nav-link", active.then_some("active"))}
            >
                {label}
            </Link<Route>>
        }
    };

    let links_class = classes!("navbar-links", (*menu_open).then_some("open"));

    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home} classes="navbar-brand">
                <span class="brand-mark">{"▲"}</span>
                <span class="brand-name">{"Realvista"}</span>
            </Link<Route>>

            <button class="navbar-toggle" onclick={toggle_menu}>
                {"☰"}
            </button>

            <div class={links_class} onclick={close_menu}>
                { nav_link(Route::Listings, "Listings") }
                { nav_link(Route::Agents, "Agents") }
                { nav_link(Route::Pricing, "Pricing") }
                { nav_link(Route::Trends, "Market Trends") }
                { nav_link(Route::Faq, "FAQ") }
                { nav_link(Route::Contact, "Contact") }

                {
                    if let Some(user) = &session.user {
                        html! {
                            <div class="navbar-session">
                                {
                                    if let Some(avatar) = &user.avatar {
                                        html! { <img class="navbar-avatar" src={avatar.clone()} alt={user.name.clone()} /> }
                                    } else {
                                        html! { <span class="navbar-avatar initial">{user.name.chars().next().unwrap_or('?')}</span> }
                                    }
                                }
                                <span class="navbar-user">{&user.name}</span>
                                <button class="btn-signout" onclick={on_sign_out}>{"Sign out"}</button>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="navbar-session">
                                { nav_link(Route::SignIn, "Sign in") }
                                <Link<Route> to={Route::Register} classes="btn-register">
                                    {"Get started"}
                                </Link<Route>>
                            </div>
                        }
                    }
                }
            </div>
        </nav>
    }
}
