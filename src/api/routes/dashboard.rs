//! Dashboard Page
//!
//! - GET / - Single-page dashboard
//!
//! Layout: heading, site dropdown, outcome pie, payload range selector,
//! payload scatter. Both charts are rendered server-side for the initial
//! selection (`ALL`, full payload span); afterwards the inline script
//! re-fetches chart SVG whenever a selector changes.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::charts::{escape_xml, outcome_chart, payload_chart};
use crate::filter::{Selection, SiteFilter, ALL_SITES};

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state))
}

/// Render the full HTML document for the initial selection
pub fn render_page(state: &AppState) -> String {
    let selection = Selection::new(SiteFilter::All, state.default_payload_range());
    let pie = outcome_chart(&selection.outcome_breakdown(&state.dataset));
    let scatter = payload_chart(&selection.payload_correlation(&state.dataset));

    let mut site_options = format!(
        r#"<option value="{}" selected>All Sites</option>"#,
        ALL_SITES
    );
    for site in state.dataset.sites() {
        let site = escape_xml(site);
        site_options.push_str(&format!(r#"<option value="{site}">{site}</option>"#));
    }

    let dashboard = &state.dashboard;
    let range = selection.payload_range;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{heading}</title>
    <style>
        body {{ font-family: 'Open Sans', Verdana, Arial, sans-serif; margin: 0 auto; max-width: 1000px; padding: 1rem; }}
        h1 {{ text-align: center; color: #503D36; font-size: 40px; }}
        #site-dropdown {{ width: 80%; padding: 3px; font-size: 20px; text-align-last: center; }}
        .chart {{ margin: 1rem 0; }}
        .chart svg {{ max-width: 100%; height: auto; }}
        .range {{ display: flex; align-items: center; gap: 1rem; }}
        .range input {{ flex: 1; }}
    </style>
</head>
<body>
    <h1>{heading}</h1>
    <select id="site-dropdown" aria-label="Select a Launch Site here">
        {site_options}
    </select>
    <br>
    <div id="success-pie-chart" class="chart">{pie}</div>
    <br>
    <p>Payload range (Kg): <span id="payload-range-label">{low} - {high}</span></p>
    <div id="payload-slider" class="range">
        <span>{min}</span>
        <input id="payload-low" type="range" min="{min}" max="{max}" step="{step}" value="{low}">
        <input id="payload-high" type="range" min="{min}" max="{max}" step="{step}" value="{high}">
        <span>{max}</span>
    </div>
    <div id="success-payload-scatter-chart" class="chart">{scatter}</div>
    <script>
        const site = document.getElementById('site-dropdown');
        const low = document.getElementById('payload-low');
        const high = document.getElementById('payload-high');
        const rangeLabel = document.getElementById('payload-range-label');

        async function refresh(target, url) {{
            const response = await fetch(url);
            if (response.ok) {{
                document.getElementById(target).innerHTML = await response.text();
            }}
        }}

        function siteParam() {{
            return 'site=' + encodeURIComponent(site.value);
        }}

        function updatePie() {{
            refresh('success-pie-chart', '/api/v1/charts/outcomes?' + siteParam());
        }}

        function updateScatter() {{
            rangeLabel.textContent = low.value + ' - ' + high.value;
            refresh('success-payload-scatter-chart',
                '/api/v1/charts/payload?' + siteParam() + '&low=' + low.value + '&high=' + high.value);
        }}

        site.addEventListener('change', () => {{ updatePie(); updateScatter(); }});
        low.addEventListener('input', updateScatter);
        high.addEventListener('input', updateScatter);
    </script>
</body>
</html>
"#,
        heading = escape_xml(&dashboard.heading),
        site_options = site_options,
        pie = pie,
        scatter = scatter,
        low = range.low,
        high = range.high,
        min = dashboard.slider_min,
        max = dashboard.slider_max,
        step = dashboard.slider_step,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dataset::{Dataset, LaunchRecord, Outcome};

    fn state() -> AppState {
        let dataset = Dataset::new(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 9000.0, "B4", Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 3000.0, "FT", Outcome::Success),
        ]);
        AppState::new(Arc::new(dataset), DashboardConfig::default())
    }

    #[test]
    fn test_page_layout() {
        let page = render_page(&state());

        assert!(page.contains("<h1>SpaceX Launch Records Dashboard</h1>"));
        assert!(page.contains(r#"<option value="ALL" selected>All Sites</option>"#));
        assert!(page.contains(r#"<option value="CCAFS LC-40">CCAFS LC-40</option>"#));
        assert!(page.contains(r#"<option value="KSC LC-39A">KSC LC-39A</option>"#));
        assert_eq!(page.matches("<option").count(), 3);
        assert!(page.contains("Payload range (Kg):"));
        assert!(page.contains(r#"step="1000""#));
    }

    #[test]
    fn test_initial_charts_cover_everything() {
        let page = render_page(&state());

        assert!(page.contains("Total Success Launches for All Sites"));
        assert!(page.contains("Payload vs. Success Scatter Plot for All Sites"));
        assert!(page.contains(r#"value="500""#));
        assert!(page.contains(r#"value="9000""#));
    }

    #[test]
    fn test_site_names_escaped() {
        let dataset = Dataset::new(vec![LaunchRecord::new(
            "<LC>",
            100.0,
            "FT",
            Outcome::Success,
        )]);
        let page = render_page(&AppState::new(Arc::new(dataset), DashboardConfig::default()));
        assert!(page.contains(r#"<option value="&lt;LC&gt;">&lt;LC&gt;</option>"#));
    }
}
