//! Bike-Sharing Rentals Dashboard
//!
//! Headline ride totals, a monthly trend line chart and grouped bar charts
//! by weather and by season, all over a user-selected date range.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/day.csv` and `fixtures/hour.csv` into OUT_DIR.
//! 2. `include_str!` embeds both CSVs into the WASM binary.
//! 3. On mount: parse both into a `Dataset` and select its full date range.
//! 4. On date range change: `bike_data::render` rebuilds the view model and
//!    the charts are redrawn via D3.js.

use bike_chart_ui::chart_data::{breakdown_chart, monthly_chart};
use bike_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, LoadingSpinner, MetricRow,
};
use bike_chart_ui::js_bridge;
use bike_chart_ui::state::{parse_range, AppState};
use bike_core::source::DataSource;
use bike_core::LoadError;
use bike_data::{render, Dataset, ViewModel};
use dioxus::prelude::*;

const DAY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/day.csv"));
const HOUR_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/hour.csv"));

const PAGE_TITLE: &str = "Bike-Sharing Rentals Dashboard";

/// DOM ids for the D3 chart container divs.
const MONTHLY_CHART_ID: &str = "monthly-rentals-chart";
const WEATHER_CHART_ID: &str = "weather-rentals-chart";
const SEASON_CHART_ID: &str = "season-rentals-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(PAGE_TITLE);
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bike-dashboard-root"))
        .launch(App);
}

fn load_dataset() -> Result<Dataset, LoadError> {
    let daily = DataSource::Embedded(DAY_CSV).load_daily_local()?;
    let hourly = DataSource::Embedded(HOUR_CSV).load_hourly_local()?;
    Ok(Dataset::new(daily, hourly))
}

fn draw_charts(view: &ViewModel) {
    let (data, config) = monthly_chart(&view.monthly);
    js_bridge::render_line_chart(MONTHLY_CHART_ID, &data, &config);

    let (data, config) = breakdown_chart(&view.by_weather, "Rentals by Weather", "Weather");
    js_bridge::render_grouped_bar_chart(WEATHER_CHART_ID, &data, &config);

    let (data, config) = breakdown_chart(&view.by_season, "Rentals by Season", "Season");
    js_bridge::render_grouped_bar_chart(SEASON_CHART_ID, &data, &config);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse both CSVs once on mount ───
    use_effect(move || match load_dataset() {
        Ok(dataset) => {
            log::info!(
                "dashboard: {} daily and {} hourly records loaded",
                dataset.daily.len(),
                dataset.hourly.len()
            );
            state.set_dataset(dataset);
            js_bridge::init_charts();
        }
        Err(e) => {
            log::error!("dashboard: {}", e);
            state.set_load_error(e.to_string());
        }
    });

    // ─── Memo: the view model for the current selection ───
    // Re-runs whenever the dataset, start_date or end_date change.
    let view = use_memo(move || {
        let start = (state.start_date)();
        let end = (state.end_date)();
        let dataset = state.dataset.read();
        let dataset = dataset.as_ref()?;
        let range = parse_range(&start, &end)?;
        let range = match dataset.date_bounds() {
            Some(bounds) => range.clamp_to(bounds),
            None => range,
        };
        Some(render(dataset, range))
    });

    // ─── Effect 2: Redraw charts whenever the view model changes ───
    use_effect(move || {
        match view() {
            Some(view) => draw_charts(&view),
            None => {
                for id in [MONTHLY_CHART_ID, WEATHER_CHART_ID, SEASON_CHART_ID] {
                    js_bridge::destroy_chart(id);
                }
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 24px; margin: 8px 0 16px 0;",
                "{PAGE_TITLE}"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                DateRangePicker {}

                if let Some(view) = view() {
                    MetricRow { totals: view.totals }

                    if view.is_empty() {
                        p {
                            style: "font-size: 13px; color: #888;",
                            "No rentals recorded between the selected dates."
                        }
                    }
                }

                hr { style: "border: none; border-top: 1px solid #e0e0e0; margin: 16px 0;" }

                ChartHeader {
                    title: "Monthly Rentals".to_string(),
                    subtitle: "Rides per month by rider type".to_string(),
                }
                ChartContainer { id: MONTHLY_CHART_ID.to_string(), min_height: 380 }

                ChartHeader {
                    title: "Rentals by Weather".to_string(),
                    subtitle: "Clear through heavy precipitation".to_string(),
                }
                ChartContainer { id: WEATHER_CHART_ID.to_string() }

                ChartHeader {
                    title: "Rentals by Season".to_string(),
                }
                ChartContainer { id: SEASON_CHART_ID.to_string() }
            }
        }
    }
}
