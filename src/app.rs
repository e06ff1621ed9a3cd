use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Navbar};
use crate::pages::{
    AboutPage, AgentDetailPage, AgentsPage, ContactPage, FaqPage, HomePage, ListingsPage,
    NotFoundPage, PricingPage, PrivacyPage, PropertyDetailPage, RegisterPage, SignInPage,
    TermsPage, TrendDetailPage, TrendsPage,
};
use crate::stores::SessionStore;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/listings")]
    Listings,
    #[at("/listings/:id")]
    PropertyDetail { id: u64 },
    #[at("/agents")]
    Agents,
    #[at("/agents/:id")]
    AgentDetail { id: u64 },
    #[at("/pricing")]
    Pricing,
    #[at("/trends")]
    Trends,
    #[at("/trends/:id")]
    TrendDetail { id: u64 },
    #[at("/faq")]
    Faq,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/signin")]
    SignIn,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Listings => html! { <ListingsPage /> },
        Route::PropertyDetail { id } => html! { <PropertyDetailPage {id} /> },
        Route::Agents => html! { <AgentsPage /> },
        Route::AgentDetail { id } => html! { <AgentDetailPage {id} /> },
        Route::Pricing => html! { <PricingPage /> },
        Route::Trends => html! { <TrendsPage /> },
        Route::TrendDetail { id } => html! { <TrendDetailPage {id} /> },
        Route::Faq => html! { <FaqPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Terms => html! { <TermsPage /> },
        Route::Privacy => html! { <PrivacyPage /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Un solo store para toda la app, hidratado desde localStorage al arrancar
    let store = use_state(SessionStore::hydrate);

    html! {
        <ContextProvider<SessionStore> context={(*store).clone()}>
            <BrowserRouter>
                <Layout />
            </BrowserRouter>
        </ContextProvider<SessionStore>>
    }
}

#[function_component(Layout)]
fn layout() -> Html {
    let route = use_route::<Route>();

    // Cada navegación arranca arriba de la página
    use_effect_with(route, |_| {
        if let Some(win) = window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    html! {
        <>
            <Navbar />
            <main class="main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </>
    }
}
