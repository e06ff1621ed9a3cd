use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::TrendReport;
use crate::services::ApiClient;
use crate::utils::format_date;

#[function_component(TrendsPage)]
pub fn trends_page() -> Html {
    let reports = use_state(Vec::<TrendReport>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let reports = reports.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            load_trends(reports, loading, error);
            || ()
        });
    }

    let retry = {
        let reports = reports.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            load_trends(reports.clone(), loading.clone(), error.clone());
        })
    };

    html! {
        <div class="page trends-page">
            <header class="page-header">
                <h1>{"Market trends"}</h1>
                <p>{"Price and demand reports for the markets where Realvista operates."}</p>
            </header>

            {
                if *loading {
                    html! {
                        <div class="state-block loading">
                            <span class="spinner"></span>
                            <p>{"Loading reports..."}</p>
                        </div>
                    }
                } else if let Some(e) = (*error).clone() {
                    html! {
                        <div class="state-block error">
                            <p>{"We couldn't load the trend reports."}</p>
                            <p class="error-detail">{e}</p>
                            <button class="btn-retry" onclick={retry}>{"Try again"}</button>
                        </div>
                    }
                } else if reports.is_empty() {
                    html! {
                        <div class="state-block empty">
                            <p>{"No reports published yet."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="trends-grid">
                            { for reports.iter().map(|report| {
                                html! {
                                    <Link<Route>
                                        key={report.id}
                                        to={Route::TrendDetail { id: report.id }}
                                        classes="trend-card"
                                    >
                                        {
                                            if let Some(image) = &report.cover_image {
                                                html! { <img src={image.clone()} alt={report.title.clone()} loading="lazy" /> }
                                            } else {
                                                html! { <div class="trend-card-placeholder">{"📈"}</div> }
                                            }
                                        }
                                        <div class="trend-card-body">
                                            {
                                                if let Some(city) = &report.city {
                                                    html! { <span class="trend-city">{city}</span> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                            <h3>{&report.title}</h3>
                                            {
                                                if let Some(summary) = &report.summary {
                                                    html! { <p>{summary}</p> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                            <span class="trend-date">{format_date(report.published)}</span>
                                        </div>
                                    </Link<Route>>
                                }
                            })}
                        </div>
                    }
                }
            }
        </div>
    }
}

fn load_trends(
    reports: UseStateHandle<Vec<TrendReport>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        loading.set(true);
        error.set(None);

        let api = ApiClient::new();
        match api.get_trends().await {
            Ok(fetched) => {
                log::info!("📈 Reportes cargados: {}", fetched.len());
                reports.set(fetched);
            }
            Err(e) => {
                log::error!("❌ Error cargando reportes: {}", e);
                reports.set(Vec::new());
                error.set(Some(e));
            }
        }
        loading.set(false);
    });
}
