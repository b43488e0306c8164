use launchboard_core::{AppViewModel, ResultsView, TableView, NO_RESULTS_MESSAGE};
use maud::{html, Markup, Render, DOCTYPE};

const PAGE_TITLE: &str = "SpaceX Launches";

/// The `<div id="results">` container, rebuilt from scratch on every render.
struct ResultsContainer<'a>(Option<&'a ResultsView>);

impl Render for ResultsContainer<'_> {
    fn render(&self) -> Markup {
        html! {
            div id="results" {
                @match self.0 {
                    Some(ResultsView::NoResults) => {
                        p { (NO_RESULTS_MESSAGE) }
                    }
                    Some(ResultsView::Table(table)) => {
                        (LaunchTable(table))
                    }
                    None => {}
                }
            }
        }
    }
}

struct LaunchTable<'a>(&'a TableView);

impl Render for LaunchTable<'_> {
    fn render(&self) -> Markup {
        html! {
            table class="table table-striped" {
                thead {
                    tr {
                        @for header in self.0.headers {
                            th { (header) }
                        }
                    }
                }
                tbody {
                    @for row in &self.0.rows {
                        tr {
                            @for cell in row.text_cells() {
                                td { (cell) }
                            }
                            td style={ "color: " (row.status.color()) } { (row.status.label()) }
                        }
                    }
                }
            }
        }
    }
}

struct LaunchPage<'a> {
    view: &'a AppViewModel,
    generated_utc: &'a str,
}

impl Render for LaunchPage<'_> {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="generated" content=(self.generated_utc);
                    title { (PAGE_TITLE) }
                }
                body {
                    h1 { (PAGE_TITLE) }
                    p class="query" { code { (self.view.url) } }
                    (ResultsContainer(self.view.results.as_ref()))
                }
            }
        }
    }
}

/// Renders a standalone page around the results container.
pub fn render_page(view: &AppViewModel, generated_utc: &str) -> String {
    LaunchPage {
        view,
        generated_utc,
    }
    .render()
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchboard_core::{render_results, LaunchRecord};
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    fn record(flight_number: u32, mission: &str, success: Option<bool>) -> LaunchRecord {
        LaunchRecord {
            flight_number,
            mission_name: mission.to_string(),
            rocket_name: "Falcon 9".to_string(),
            launch_year: "2017".to_string(),
            launch_success: success,
        }
    }

    fn render_container(results: Option<&ResultsView>) -> String {
        ResultsContainer(results).render().into_string()
    }

    fn select(html: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        html.select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    #[test]
    fn empty_results_show_message_and_no_table() {
        let html = Html::parse_fragment(&render_container(Some(&ResultsView::NoResults)));
        assert_eq!(select(&html, "#results > p"), vec!["No results found."]);
        assert!(select(&html, "table").is_empty());
    }

    #[test]
    fn never_rendered_container_is_empty() {
        assert_eq!(render_container(None), r#"<div id="results"></div>"#);
    }

    #[test]
    fn table_has_header_and_one_row_per_record_in_order() {
        let records = vec![
            record(40, "CRS-10", Some(true)),
            record(41, "EchoStar 23", Some(true)),
            record(29, "Amos-6", Some(false)),
        ];
        let container = render_container(Some(&render_results(&records)));
        let html = Html::parse_fragment(&container);

        assert_eq!(select(&html, "table.table.table-striped").len(), 1);
        assert_eq!(select(&html, "thead tr").len(), 1);
        assert_eq!(
            select(&html, "thead th"),
            vec!["Flight Number", "Mission Name", "Rocket Name", "Launch Year", "Status"]
        );
        assert_eq!(select(&html, "tbody tr").len(), 3);
        assert_eq!(
            select(&html, "tbody tr td:nth-child(2)"),
            vec!["CRS-10", "EchoStar 23", "Amos-6"]
        );
        assert_eq!(
            select(&html, "tbody tr:first-child td"),
            vec!["40", "CRS-10", "Falcon 9", "2017", "Success"]
        );
    }

    #[test]
    fn status_cell_is_colored_by_outcome() {
        let records = vec![record(1, "ok", Some(true)), record(2, "lost", Some(false))];
        let container = render_container(Some(&render_results(&records)));
        let html = Html::parse_fragment(&container);
        let selector = Selector::parse("tbody td:nth-child(5)").unwrap();

        let cells: Vec<_> = html
            .select(&selector)
            .map(|td| {
                (
                    td.text().collect::<String>(),
                    td.value().attr("style").unwrap_or_default().to_string(),
                )
            })
            .collect();
        assert_eq!(
            cells,
            vec![
                ("Success".to_string(), "color: green".to_string()),
                ("Failure".to_string(), "color: red".to_string()),
            ]
        );
    }

    #[test]
    fn cell_text_is_escaped() {
        let records = vec![record(7, "<script>alert('x')</script> & co", Some(true))];
        let container = render_container(Some(&render_results(&records)));
        assert!(!container.contains("<script>"));

        let html = Html::parse_fragment(&container);
        assert_eq!(
            select(&html, "tbody td:nth-child(2)"),
            vec!["<script>alert('x')</script> & co"]
        );
    }

    #[test]
    fn page_wraps_container_with_query_url() {
        let view = AppViewModel {
            phase: launchboard_core::FetchPhase::Rendered,
            filters: launchboard_core::Filters::new("2017", "", "", ""),
            url: "https://api.test/launches?&launch_year=2017".to_string(),
            latest_request: Some(1),
            results: Some(ResultsView::NoResults),
            last_failure: None,
            dirty: false,
        };
        let page = render_page(&view, "2026-10-19T09:00:00+00:00");
        let html = Html::parse_document(&page);

        assert_eq!(select(&html, "title"), vec!["SpaceX Launches"]);
        assert_eq!(
            select(&html, "p.query code"),
            vec!["https://api.test/launches?&launch_year=2017"]
        );
        assert_eq!(select(&html, "#results p"), vec!["No results found."]);
        assert!(page.contains(r#"content="2026-10-19T09:00:00+00:00""#));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn query_url_is_escaped_in_page() {
        let view = AppViewModel {
            phase: launchboard_core::FetchPhase::Rendered,
            filters: launchboard_core::Filters::new("", "", "mission_name", "<b>"),
            url: "https://api.test/launches?&mission_name=<b>".to_string(),
            latest_request: Some(2),
            results: None,
            last_failure: None,
            dirty: false,
        };
        let page = render_page(&view, "2026-10-19T09:00:00+00:00");

        assert!(page.contains("launches?&amp;mission_name=&lt;b&gt;"));
        let html = Html::parse_document(&page);
        assert_eq!(
            select(&html, "p.query code"),
            vec!["https://api.test/launches?&mission_name=<b>"]
        );
        assert_eq!(select(&html, "#results"), vec![""]);
    }
}
