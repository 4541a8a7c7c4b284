//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals (no ES modules) exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static GROUPED_BAR_CHART_JS: &str = include_str!("../assets/js/grouped-bar-chart.js");

/// D3 is injected from this CDN when the host page has not loaded it.
const D3_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Bike dashboard JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("js_bridge: eval failed: {}", describe(&e));
    }
}

/// Encode a JSON payload as a JS string literal.
fn js_string(json: &str) -> String {
    serde_json::to_string(json).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderLineChart(...)` via
/// `function` declarations. They are evaluated at global scope with an
/// indirect `eval()` once D3 is ready and each function is promoted to
/// `window.*`. Call once at app startup.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LINE_CHART_JS, GROUPED_BAR_CHART_JS].join("\n");

    let store_js = format!("window.__bikeChartScripts = {};", js_string(&all_js));
    if let Err(e) = js_sys::eval(&store_js) {
        log::warn!("js_bridge: failed to stage chart scripts: {}", describe(&e));
        return;
    }

    let init_js = format!(
        r#"
        (function() {{
            if (typeof d3 === 'undefined' && !document.getElementById('bike-d3-script')) {{
                var s = document.createElement('script');
                s.id = 'bike-d3-script';
                s.src = '{D3_CDN_URL}';
                document.head.appendChild(s);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__bikeChartScripts);
                    delete window.__bikeChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderGroupedBarChart !== 'undefined') window.renderGroupedBarChart = renderGroupedBarChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__bikeChartsReady = true;
                    console.log('Bike dashboard charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    call_js(&init_js);
}

/// Queue `window.<function>(container, data, config)` for a container and
/// poll until D3, the chart scripts and the container element exist.
///
/// Each container has one pending slot in `window.__bikePending` and at
/// most one poll. A later call overwrites the slot, so only the newest
/// payload is drawn.
fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let data = js_string(data_json);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            var pending = window.__bikePending = window.__bikePending || {{}};
            var polls = window.__bikePolls = window.__bikePolls || {{}};
            pending['{container_id}'] = {{ fn: '{function}', data: {data}, config: {config} }};
            if (polls['{container_id}']) return;
            polls['{container_id}'] = setInterval(function() {{
                var job = pending['{container_id}'];
                if (!job) {{
                    clearInterval(polls['{container_id}']);
                    delete polls['{container_id}'];
                    return;
                }}
                if (window.__bikeChartsReady &&
                    typeof window[job.fn] !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(polls['{container_id}']);
                    delete polls['{container_id}'];
                    delete pending['{container_id}'];
                    try {{
                        window[job.fn]('{container_id}', job.data, job.config);
                    }} catch(e) {{ console.error('[bike] ' + job.fn + ' error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// Render a multi-series line chart (monthly trend).
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render a grouped bar chart (weather and season breakdowns).
pub fn render_grouped_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGroupedBarChart", container_id, data_json, config_json);
}

fn destroy_script(container_id: &str) -> String {
    format!(
        "if (window.__bikePending) delete window.__bikePending['{0}']; \
         var el = document.getElementById('{0}'); if (el) el.innerHTML = '';",
        container_id
    )
}

/// Destroy/clean up a chart in the given container, dropping any draw
/// still waiting on D3.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

#[cfg(test)]
mod tests {
    use super::{destroy_script, render_script};

    #[test]
    fn test_render_script_overwrites_pending_slot() {
        let js = render_script("renderLineChart", "monthly-chart", r#"[{"a":1}]"#, "{}");
        assert!(js.contains(r#"pending['monthly-chart'] = { fn: 'renderLineChart', data: "[{\"a\":1}]", config: "{}" };"#));
        // a second call for the same container returns before starting a poll
        assert!(js.contains("if (polls['monthly-chart']) return;"));
        assert_eq!(js.matches("setInterval").count(), 1);
    }

    #[test]
    fn test_render_script_reads_payload_at_draw_time() {
        let js = render_script("renderGroupedBarChart", "season-chart", "[]", "{}");
        assert!(js.contains("var job = pending['season-chart'];"));
        assert!(js.contains("window[job.fn]('season-chart', job.data, job.config);"));
        assert!(!js.contains("window.renderGroupedBarChart("));
    }

    #[test]
    fn test_destroy_drops_pending_draw() {
        let js = destroy_script("weather-chart");
        assert!(js.contains("delete window.__bikePending['weather-chart'];"));
        assert!(js.contains("el.innerHTML = ''"));
    }
}
