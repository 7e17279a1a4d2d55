//! Payload vs. outcome scatter chart

use super::{caption, color_for, escape_xml, svg_document, GRID_COLOR, TEXT_COLOR};
use crate::filter::{FilterResult, ScatterPoint};

const WIDTH: u32 = 900;
const HEIGHT: u32 = 450;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 190.0;
const MARGIN_TOP: f64 = 55.0;
const MARGIN_BOTTOM: f64 = 65.0;

/// Vertical domain around the two classes so points don't sit on the frame
const Y_MIN: f64 = -0.25;
const Y_MAX: f64 = 1.25;

/// X axis span used when there is nothing to plot
const DEFAULT_X_MAX: f64 = 10_000.0;
const X_TICKS: usize = 5;

/// Render the scatter for a correlation result
pub fn payload_chart(result: &FilterResult<'_>) -> String {
    render_payload_scatter(
        &result.title,
        &result.scatter_points(),
        &result.booster_categories(),
    )
}

/// Render points as `(payload, class)`, one color per booster category
///
/// `categories` fixes the color order and the legend; a point whose category
/// is missing from it falls back to the first color.
pub fn render_payload_scatter(
    title: &str,
    points: &[ScatterPoint<'_>],
    categories: &[&str],
) -> String {
    let plot_width = WIDTH as f64 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT as f64 - MARGIN_TOP - MARGIN_BOTTOM;
    let x_max = x_axis_max(points);

    let scale_x = |v: f64| MARGIN_LEFT + (v / x_max) * plot_width;
    let scale_y = |v: f64| MARGIN_TOP + (Y_MAX - v) / (Y_MAX - Y_MIN) * plot_height;

    let mut body = caption(WIDTH, title);

    // Frame and grid
    body.push_str(&format!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"##,
        MARGIN_LEFT, MARGIN_TOP, plot_width, plot_height, GRID_COLOR
    ));

    for i in 0..=X_TICKS {
        let value = x_max * i as f64 / X_TICKS as f64;
        let x = scale_x(value);
        body.push_str(&format!(
            r##"<line x1="{x:.2}" y1="{}" x2="{x:.2}" y2="{}" stroke="white" stroke-width="1"/><text x="{x:.2}" y="{}" text-anchor="middle" font-size="12" fill="{}">{}</text>"##,
            MARGIN_TOP,
            MARGIN_TOP + plot_height,
            MARGIN_TOP + plot_height + 18.0,
            TEXT_COLOR,
            value.round() as i64,
            x = x
        ));
    }

    for class in [0.0_f64, 1.0] {
        let y = scale_y(class);
        body.push_str(&format!(
            r##"<line x1="{}" y1="{y:.2}" x2="{}" y2="{y:.2}" stroke="white" stroke-width="2"/><text x="{}" y="{y:.2}" text-anchor="end" dominant-baseline="middle" font-size="12" fill="{}">{}</text>"##,
            MARGIN_LEFT,
            MARGIN_LEFT + plot_width,
            MARGIN_LEFT - 8.0,
            TEXT_COLOR,
            class as u8,
            y = y
        ));
    }

    // Axis titles
    body.push_str(&format!(
        r##"<text x="{:.2}" y="{}" text-anchor="middle" font-size="14" fill="{}">Payload Mass (kg)</text>"##,
        MARGIN_LEFT + plot_width / 2.0,
        HEIGHT as f64 - 18.0,
        TEXT_COLOR
    ));
    let y_mid = MARGIN_TOP + plot_height / 2.0;
    body.push_str(&format!(
        r##"<text x="24" y="{y:.2}" text-anchor="middle" font-size="14" fill="{}" transform="rotate(-90, 24, {y:.2})">Launch Success</text>"##,
        TEXT_COLOR,
        y = y_mid
    ));

    for point in points {
        let index = categories
            .iter()
            .position(|c| *c == point.booster_version_category)
            .unwrap_or(0);
        body.push_str(&format!(
            r##"<circle cx="{:.2}" cy="{:.2}" r="6" fill="{}" fill-opacity="0.85" stroke="white" stroke-width="0.5"><title>{}: {} kg, class {}</title></circle>"##,
            scale_x(point.payload_mass_kg),
            scale_y(point.outcome.class() as f64),
            color_for(index),
            escape_xml(point.booster_version_category),
            point.payload_mass_kg,
            point.outcome
        ));
    }

    // Legend
    if !categories.is_empty() {
        let legend_x = MARGIN_LEFT + plot_width + 24.0;
        body.push_str(&format!(
            r##"<text x="{:.2}" y="{}" font-size="13" fill="{}">Booster Version Category</text>"##,
            legend_x, MARGIN_TOP, TEXT_COLOR
        ));
        for (i, category) in categories.iter().enumerate() {
            let y = MARGIN_TOP + 22.0 + i as f64 * 22.0;
            body.push_str(&format!(
                r##"<circle cx="{:.2}" cy="{:.2}" r="6" fill="{}"/><text x="{:.2}" y="{:.2}" dominant-baseline="middle" font-size="13" fill="{}">{}</text>"##,
                legend_x + 6.0,
                y,
                color_for(i),
                legend_x + 18.0,
                y,
                TEXT_COLOR,
                escape_xml(category)
            ));
        }
    }

    svg_document(WIDTH, HEIGHT, &body)
}

/// Upper bound of the x axis: largest payload rounded up to the next thousand
fn x_axis_max(points: &[ScatterPoint<'_>]) -> f64 {
    let max = points
        .iter()
        .map(|p| p.payload_mass_kg)
        .fold(0.0_f64, f64::max);

    if max <= 0.0 {
        DEFAULT_X_MAX
    } else {
        ((max / 1000.0).floor() + 1.0) * 1000.0
    }
}
