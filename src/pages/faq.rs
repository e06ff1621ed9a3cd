use yew::prelude::*;

const FAQ_ENTRIES: [(&str, &str); 6] = [
    (
        "Is browsing listings free?",
        "Yes. Searching, filtering and viewing any property on Realvista is free and does not require an account.",
    ),
    (
        "What do I need an account for?",
        "An account lets you save properties, contact agents faster and, for agents, publish and manage your own portfolio.",
    ),
    (
        "How do agents get the verified badge?",
        "We review each agency's registration documents before granting the badge. It usually takes two business days.",
    ),
    (
        "Can I list a property for rent and for sale at the same time?",
        "Each listing carries a single purpose (rent, lease or sale). You can publish the same property twice with different purposes.",
    ),
    (
        "Where does the market trend data come from?",
        "Reports are compiled monthly from closed operations registered on the platform plus public records for each city.",
    ),
    (
        "How do I cancel my subscription?",
        "From your dashboard, at any time. Your plan stays active until the end of the period you already paid for.",
    ),
];

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    // Acordeón de un solo item abierto
    let open = use_state(|| None::<usize>);

    html! {
        <div class="page faq-page">
            <header class="page-header">
                <h1>{"Frequently asked questions"}</h1>
            </header>

            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(i, (question, answer))| {
                    let is_open = *open == Some(i);
                    let open = open.clone();
                    let toggle = Callback::from(move |_: MouseEvent| {
                        open.set(if *open == Some(i) { None } else { Some(i) });
                    });

                    html! {
                        <div class={classes!("faq-item", is_open.then_some("open"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span>{*question}</span>
                                <span class="faq-chevron">{ if is_open { "▴" } else { "▾" } }</span>
                            </button>
                            if is_open {
                                <p class="faq-answer">{*answer}</p>
                            }
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
