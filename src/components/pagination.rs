use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let on_prev = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_| on_page.emit(page - 1))
    };

    let on_next = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_| on_page.emit(page + 1))
    };

    html! {
        <nav class="pagination">
            <button
                class="page-btn"
                disabled={props.page == 1}
                onclick={on_prev}
            >
                {"‹"}
            </button>

            { for (1..=props.total_pages).map(|n| {
                let on_page = props.on_page.clone();
                html! {
                    <button
                        class={classes!("page-btn", (n == props.page).then_some("current"))}
                        onclick={Callback::from(move |_| on_page.emit(n))}
                    >
                        {n}
                    </button>
                }
            })}

            <button
                class="page-btn"
                disabled={props.page == props.total_pages}
                onclick={on_next}
            >
                {"›"}
            </button>
        </nav>
    }
}
