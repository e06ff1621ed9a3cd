use yew::prelude::*;

#[function_component(TermsPage)]
pub fn terms_page() -> Html {
    html! {
        <div class="page legal-page">
            <header class="page-header">
                <h1>{"Terms of service"}</h1>
                <p class="legal-updated">{"Last updated: June 2026"}</p>
            </header>

            <section class="legal-section">
                <h2>{"1. The service"}</h2>
                <p>
                    {"Realvista provides a marketplace where real-estate professionals publish \
                      listings and visitors browse them. We are not a party to any transaction \
                      between agents and buyers or tenants."}
                </p>
            </section>

            <section class="legal-section">
                <h2>{"2. Accounts"}</h2>
                <p>
                    {"You are responsible for the accuracy of the information in your profile and \
                      listings, and for keeping your credentials private. We may suspend accounts \
                      that publish misleading or unlawful content."}
                </p>
            </section>

            <section class="legal-section">
                <h2>{"3. Subscriptions"}</h2>
                <p>
                    {"Paid plans renew for the duration you selected. Cancelling stops future \
                      charges; periods already paid are not refunded unless the law of your \
                      jurisdiction requires it."}
                </p>
            </section>

            <section class="legal-section">
                <h2>{"4. Liability"}</h2>
                <p>
                    {"Listing data is provided by agents. We verify identity, not every claim in a \
                      listing. Visit the property and review the paperwork before any payment."}
                </p>
            </section>
        </div>
    }
}
