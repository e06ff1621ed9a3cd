use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_session;
use crate::models::SignInRequest;
use crate::services::ApiClient;
use crate::utils::validation::{validate_email, validate_required};

#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("navigator not available");

    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let email_error = use_state(|| None::<String>);
    let password_error = use_state(|| None::<String>);
    // Banner con el mensaje del servidor (o un fallback genérico)
    let banner = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let email_error = email_error.clone();
        let password_error = password_error.clone();
        let banner = banner.clone();
        let submitting = submitting.clone();
        let sign_in = session.sign_in.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value();
            let password = password_input.value();

            let email_check = validate_email(&email);
            let password_check = validate_required(&password, "Password");
            let valid = email_check.is_none() && password_check.is_none();
            email_error.set(email_check);
            password_error.set(password_check);
            if !valid {
                return;
            }

            let banner = banner.clone();
            let submitting = submitting.clone();
            let sign_in = sign_in.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                banner.set(None);

                let api = ApiClient::new();
                let request = SignInRequest { email, password };

                match api.sign_in(&request).await {
                    Ok(response) if response.success => {
                        if let Some(mut user) = response.user {
                            if let Some(token) = response.token {
                                user.token = token;
                            }
                            user.is_logged_in = true;
                            sign_in.emit(user);
                            navigator.push(&Route::Home);
                        } else {
                            log::error!("❌ Login sin usuario en la respuesta");
                            banner.set(Some("Authentication failed. Please try again.".to_string()));
                        }
                    }
                    Ok(response) => {
                        let message = response.error_message();
                        log::error!("❌ Login fallido: {}", message);
                        banner.set(Some(message));
                    }
                    Err(e) => {
                        log::error!("❌ Error de red en login: {}", e);
                        banner.set(Some("Could not reach the server. Please try again.".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let field_error = |error: &Option<String>| {
        if let Some(message) = error {
            html! { <span class="field-error">{message}</span> }
        } else {
            html! {}
        }
    };

    html! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>{"Welcome back"}</h1>
                <p class="auth-subtitle">{"Sign in to save properties and manage your listings."}</p>

                {
                    if let Some(message) = (*banner).clone() {
                        html! { <div class="auth-banner error">{message}</div> }
                    } else {
                        html! {}
                    }
                }

                <form class="form auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="signin-email">{"Email"}</label>
                        <input type="email" id="signin-email" ref={email_ref} placeholder="you@example.com" />
                        { field_error(&email_error) }
                    </div>

                    <div class="form-group">
                        <label for="signin-password">{"Password"}</label>
                        <input type="password" id="signin-password" ref={password_ref} placeholder="Your password" />
                        { field_error(&password_error) }
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>

                <p class="auth-switch">
                    {"New to Realvista? "}
                    <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
