use yew::prelude::*;

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    html! {
        <div class="page legal-page">
            <header class="page-header">
                <h1>{"Privacy policy"}</h1>
                <p class="legal-updated">{"Last updated: June 2026"}</p>
            </header>

            <section class="legal-section">
                <h2>{"What we collect"}</h2>
                <p>
                    {"Account data you give us (name, email, phone for agents), the listings you \
                      publish, and basic usage data needed to run the site."}
                </p>
            </section>

            <section class="legal-section">
                <h2>{"What stays on your device"}</h2>
                <p>
                    {"After you sign in we keep a copy of your profile in your browser's local \
                      storage so the site remembers you between visits. Signing out removes it. \
                      We do not use third-party tracking cookies."}
                </p>
            </section>

            <section class="legal-section">
                <h2>{"Who we share it with"}</h2>
                <p>
                    {"Nobody, except the payment processor for paid plans and authorities when \
                      the law requires it. We do not sell contact data."}
                </p>
            </section>

            <section class="legal-section">
                <h2>{"Your rights"}</h2>
                <p>
                    {"You can export or delete your account data at any time from your dashboard \
                      or by writing to privacy@realvista.app."}
                </p>
            </section>
        </div>
    }
}
