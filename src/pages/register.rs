use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::{RegisterAgentRequest, RegisterCustomerRequest};
use crate::services::ApiClient;
use crate::utils::validation::{
    validate_email, validate_password, validate_password_confirmation, validate_phone,
    validate_required,
};

/// El backend distingue dos payloads de registro: agencia y cliente final
#[derive(Clone, Copy, PartialEq, Eq)]
enum AccountType {
    Agent,
    Customer,
}

#[derive(Clone, PartialEq, Default)]
struct RegisterErrors {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    password: Option<String>,
    confirmation: Option<String>,
}

impl RegisterErrors {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.password.is_none()
            && self.confirmation.is_none()
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator().expect("navigator not available");

    let account_type = use_state(|| AccountType::Customer);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let whatsapp_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirmation_ref = use_node_ref();

    let errors = use_state(RegisterErrors::default);
    let banner = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let select_customer = {
        let account_type = account_type.clone();
        Callback::from(move |_: MouseEvent| account_type.set(AccountType::Customer))
    };

    let select_agent = {
        let account_type = account_type.clone();
        Callback::from(move |_: MouseEvent| account_type.set(AccountType::Agent))
    };

    let on_submit = {
        let account_type = account_type.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let whatsapp_ref = whatsapp_ref.clone();
        let password_ref = password_ref.clone();
        let confirmation_ref = confirmation_ref.clone();
        let errors = errors.clone();
        let banner = banner.clone();
        let submitting = submitting.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(email_input), Some(password_input), Some(confirmation_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                confirmation_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let kind = *account_type;
            let name = name_input.value();
            let email = email_input.value();
            let password = password_input.value();
            let confirmation = confirmation_input.value();
            let phone = phone_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let whatsapp = whatsapp_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();

            let name_label = match kind {
                AccountType::Agent => "Agency name",
                AccountType::Customer => "Full name",
            };

            let next = RegisterErrors {
                name: validate_required(&name, name_label),
                email: validate_email(&email),
                // Solo las agencias cargan teléfono de contacto
                phone: match kind {
                    AccountType::Agent => validate_phone(&phone),
                    AccountType::Customer => None,
                },
                password: validate_password(&password),
                confirmation: validate_password_confirmation(&password, &confirmation),
            };

            let valid = next.is_empty();
            errors.set(next);
            if !valid {
                return;
            }

            let banner = banner.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                banner.set(None);

                let api = ApiClient::new();
                let result = match kind {
                    AccountType::Agent => {
                        let request = RegisterAgentRequest {
                            agency_name: name,
                            email,
                            phone,
                            whatsapp: if whatsapp.trim().is_empty() {
                                None
                            } else {
                                Some(whatsapp)
                            },
                            password,
                        };
                        api.register_agent(&request).await
                    }
                    AccountType::Customer => {
                        let request = RegisterCustomerRequest {
                            full_name: name,
                            email,
                            password,
                        };
                        api.register_customer(&request).await
                    }
                };

                match result {
                    Ok(response) if response.success => {
                        log::info!("✅ Registro exitoso");
                        navigator.push(&Route::SignIn);
                    }
                    Ok(response) => {
                        let message = response.error_message();
                        log::error!("❌ Registro fallido: {}", message);
                        banner.set(Some(message));
                    }
                    Err(e) => {
                        log::error!("❌ Error de red en registro: {}", e);
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

    let is_agent = *account_type == AccountType::Agent;

    html! {
        <div class="page auth-page">
            <div class="auth-card">
                <h1>{"Create your account"}</h1>

                <div class="account-type-toggle">
                    <button
                        class={classes!("toggle-option", (!is_agent).then_some("selected"))}
                        onclick={select_customer}
                    >
                        {"I'm looking for a property"}
                    </button>
                    <button
                        class={classes!("toggle-option", is_agent.then_some("selected"))}
                        onclick={select_agent}
                    >
                        {"I'm an agent"}
                    </button>
                </div>

                {
                    if let Some(message) = (*banner).clone() {
                        html! { <div class="auth-banner error">{message}</div> }
                    } else {
                        html! {}
                    }
                }

                <form class="form auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="register-name">
                            { if is_agent { "Agency name" } else { "Full name" } }
                        </label>
                        <input type="text" id="register-name" ref={name_ref} />
                        { field_error(&errors.name) }
                    </div>

                    <div class="form-group">
                        <label for="register-email">{"Email"}</label>
                        <input type="email" id="register-email" ref={email_ref} />
                        { field_error(&errors.email) }
                    </div>

                    if is_agent {
                        <>
                            <div class="form-group">
                                <label for="register-phone">{"Phone"}</label>
                                <input type="tel" id="register-phone" ref={phone_ref.clone()} />
                                { field_error(&errors.phone) }
                            </div>

                            <div class="form-group">
                                <label for="register-whatsapp">{"WhatsApp (optional)"}</label>
                                <input type="tel" id="register-whatsapp" ref={whatsapp_ref.clone()} />
                            </div>
                        </>
                    }

                    <div class="form-group">
                        <label for="register-password">{"Password"}</label>
                        <input type="password" id="register-password" ref={password_ref} />
                        { field_error(&errors.password) }
                    </div>

                    <div class="form-group">
                        <label for="register-confirmation">{"Confirm password"}</label>
                        <input type="password" id="register-confirmation" ref={confirmation_ref} />
                        { field_error(&errors.confirmation) }
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Creating account..." } else { "Create account" } }
                    </button>
                </form>

                <p class="auth-switch">
                    {"Already have an account? "}
                    <Link<Route> to={Route::SignIn}>{"Sign in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
