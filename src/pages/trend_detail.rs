use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::TrendReport;
use crate::services::ApiClient;
use crate::utils::format_date;

#[derive(Properties, PartialEq)]
pub struct TrendDetailProps {
    pub id: u64,
}

#[function_component(TrendDetailPage)]
pub fn trend_detail_page(props: &TrendDetailProps) -> Html {
    let report = use_state(|| None::<TrendReport>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let report = report.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.id, move |id| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);

                let api = ApiClient::new();
                match api.get_trend(id).await {
                    Ok(fetched) => report.set(Some(fetched)),
                    Err(e) => {
                        log::error!("❌ Error cargando reporte {}: {}", id, e);
                        report.set(None);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="page detail-page">
                <div class="state-block loading">
                    <span class="spinner"></span>
                    <p>{"Loading report..."}</p>
                </div>
            </div>
        };
    }

    let Some(r) = (*report).clone() else {
        let message = (*error)
            .clone()
            .unwrap_or_else(|| "This report is not available.".to_string());
        return html! {
            <div class="page detail-page">
                <div class="state-block error">
                    <p>{"We couldn't load this report."}</p>
                    <p class="error-detail">{message}</p>
                    <Link<Route> to={Route::Trends} classes="btn-retry">{"Back to reports"}</Link<Route>>
                </div>
            </div>
        };
    };

    html! {
        <div class="page detail-page trend-detail">
            <article class="trend-article">
                <header>
                    {
                        if let Some(city) = &r.city {
                            html! { <span class="trend-city">{city}</span> }
                        } else {
                            html! {}
                        }
                    }
                    <h1>{&r.title}</h1>
                    <span class="trend-date">{format_date(r.published)}</span>
                </header>

                {
                    if let Some(image) = &r.cover_image {
                        html! { <img class="trend-cover" src={image.clone()} alt={r.title.clone()} /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(body) = &r.body {
                        html! {
                            <div class="trend-body">
                                { for body.split("\n\n").map(|paragraph| html! { <p>{paragraph}</p> }) }
                            </div>
                        }
                    } else if let Some(summary) = &r.summary {
                        html! { <p class="trend-body">{summary}</p> }
                    } else {
                        html! { <p class="trend-body muted">{"Full report coming soon."}</p> }
                    }
                }
            </article>
        </div>
    }
}
