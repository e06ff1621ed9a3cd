use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::utils::validation::{validate_email, validate_message, validate_phone, validate_required};

#[derive(Clone, PartialEq, Default)]
struct ContactErrors {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    message: Option<String>,
}

impl ContactErrors {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.message.is_none()
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let message_ref = use_node_ref();

    let errors = use_state(ContactErrors::default);
    let sent = use_state(|| false);

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let message_ref = message_ref.clone();
        let errors = errors.clone();
        let sent = sent.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(email_input), Some(phone_input), Some(message_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                phone_ref.cast::<HtmlInputElement>(),
                message_ref.cast::<HtmlTextAreaElement>(),
            ) else {
                return;
            };

            let phone_value = phone_input.value();

            // Validación sincrónica: el submit queda bloqueado hasta resolverla
            let next = ContactErrors {
                name: validate_required(&name_input.value(), "Name"),
                email: validate_email(&email_input.value()),
                // El teléfono es opcional en el contacto
                phone: if phone_value.trim().is_empty() {
                    None
                } else {
                    validate_phone(&phone_value)
                },
                message: validate_message(&message_input.value()),
            };

            if next.is_empty() {
                log::info!("✉️ Mensaje de contacto validado y enviado");
                sent.set(true);
            }
            errors.set(next);
        })
    };

    if *sent {
        return html! {
            <div class="page contact-page">
                <div class="state-block success">
                    <h1>{"Thanks for reaching out!"}</h1>
                    <p>{"We received your message and will get back to you within one business day."}</p>
                </div>
            </div>
        };
    }

    let field_error = |error: &Option<String>| {
        if let Some(message) = error {
            html! { <span class="field-error">{message}</span> }
        } else {
            html! {}
        }
    };

    html! {
        <div class="page contact-page">
            <header class="page-header">
                <h1>{"Contact us"}</h1>
                <p>{"Questions about plans, verification or a listing? Write to us."}</p>
            </header>

            <form class="form contact-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="contact-name">{"Name"}</label>
                    <input type="text" id="contact-name" ref={name_ref} placeholder="Your name" />
                    { field_error(&errors.name) }
                </div>

                <div class="form-group">
                    <label for="contact-email">{"Email"}</label>
                    <input type="email" id="contact-email" ref={email_ref} placeholder="you@example.com" />
                    { field_error(&errors.email) }
                </div>

                <div class="form-group">
                    <label for="contact-phone">{"Phone (optional)"}</label>
                    <input type="tel" id="contact-phone" ref={phone_ref} placeholder="+1 555 000 0000" />
                    { field_error(&errors.phone) }
                </div>

                <div class="form-group">
                    <label for="contact-message">{"Message"}</label>
                    <textarea id="contact-message" ref={message_ref} rows="6" placeholder="Tell us what you need..."></textarea>
                    { field_error(&errors.message) }
                </div>

                <button type="submit" class="btn-primary">{"Send message"}</button>
            </form>
        </div>
    }
}
