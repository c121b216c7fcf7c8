//! Dioxus components: the run control and the `#output` display surface.

use crate::config::Config;
use crate::run::{run_cycles, Trigger};
use crate::trends::fetcher::TrendFetcher;
use crate::view::{ReportView, View, LOADING_TEXT};
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use tracing::info;

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_env);
    let mut view = use_signal(|| View::Idle);

    let runner = use_coroutine(move |triggers: UnboundedReceiver<Trigger>| {
        let fetcher = TrendFetcher::new(config.scraper.endpoint.clone());
        async move {
            info!(endpoint = %fetcher.endpoint(), "trend runner ready");
            let stats = run_cycles(triggers, || fetcher.fetch(), |next| view.set(next)).await;
            info!(
                cycles = stats.cycles,
                coalesced = stats.coalesced,
                requests = fetcher.requests_made(),
                "trend runner stopped"
            );
        }
    });

    rsx! {
        main { class: "trends",
            h1 { "Trending topics" }
            button {
                id: "run-script",
                disabled: view.read().is_loading(),
                onclick: move |_| runner.send(Trigger::Run),
                "Run the query"
            }
            div { id: "output",
                Output { view: view(), on_rerun: move |_| runner.send(Trigger::RunAgain) }
            }
        }
    }
}

#[component]
fn Output(view: View, on_rerun: EventHandler<MouseEvent>) -> Element {
    match &view {
        View::Idle => None,
        View::Loading => rsx! {
            p { class: "loading", "{LOADING_TEXT}" }
        },
        View::Error(_) => {
            let text = view.error_text().unwrap_or_default();
            rsx! {
                p { class: "error", "{text}" }
            }
        }
        View::Report(report) => rsx! {
            Report { report: report.clone(), on_rerun: on_rerun }
        },
    }
}

#[component]
fn Report(report: ReportView, on_rerun: EventHandler<MouseEvent>) -> Element {
    let ReportView {
        timestamp,
        topics,
        ip_address,
        data_json,
        ..
    } = report;

    rsx! {
        p {
            "These are the most happening topics as on "
            strong { "{timestamp}" }
            ":"
        }
        ul {
            for topic in topics {
                li { "{topic}" }
            }
        }
        p {
            "The IP address used for this query was "
            strong { "{ip_address}" }
            "."
        }
        p { "Here’s a JSON extract of this record from the MongoDB:" }
        pre { "{data_json}" }
        p {
            button {
                id: "run-script-again",
                onclick: move |evt| on_rerun.call(evt),
                "Click here to run the query again"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::decode_response;
    use reqwest::StatusCode;

    #[component]
    fn Harness(view: View) -> Element {
        rsx! {
            Output { view: view, on_rerun: move |_| {} }
        }
    }

    fn render(view: View) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { view });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn settled(status: StatusCode, body: &str) -> View {
        View::settled(&decode_response(status, body))
    }

    #[test]
    fn test_loading_markup() {
        assert_eq!(render(View::Loading), r#"<p class="loading">Please wait...</p>"#);
    }

    #[test]
    fn test_http_500_markup() {
        let view = settled(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(
            render(view),
            r#"<p class="error">An error occurred: Failed to fetch data from the server</p>"#
        );
    }

    #[test]
    fn test_report_markup() {
        let body = r#"{"data":{"timestamp":"2024-01-01T00:00:00Z","trending_topics":["A","B"],"ip_address":"1.2.3.4","_id":"x1"}}"#;
        let html = render(settled(StatusCode::OK, body));

        assert!(html.contains(
            "<p>These are the most happening topics as on <strong>2024-01-01T00:00:00Z</strong>:</p>"
        ));
        assert!(html.contains("<ul><li>A</li><li>B</li></ul>"), "{html}");
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains(
            "<p>The IP address used for this query was <strong>1.2.3.4</strong>.</p>"
        ));
        assert!(html.contains("<p>Here’s a JSON extract of this record from the MongoDB:</p>"));
        assert!(html.contains("<pre>{\n  "), "{html}");
        assert!(html.contains(
            r#"<button id="run-script-again">Click here to run the query again</button>"#
        ));
        assert!(!html.contains("class=\"error\""));
        assert!(!html.contains("class=\"loading\""));
    }

    #[test]
    fn test_empty_topic_list_markup() {
        let body = r#"{"data":{"timestamp":"t","trending_topics":[],"ip_address":"1.2.3.4","_id":"x1"}}"#;
        let html = render(settled(StatusCode::OK, body));
        assert_eq!(html.matches("<li>").count(), 0);
        assert!(html.contains("<ul>"));
    }
}
