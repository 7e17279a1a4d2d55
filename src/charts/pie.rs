//! Outcome proportion chart

use super::{caption, color_for, svg_document, TEXT_COLOR};
use crate::filter::{FilterResult, OutcomeSlice};
use std::f64::consts::PI;

const WIDTH: u32 = 700;
const HEIGHT: u32 = 450;
const CENTER_X: f64 = 300.0;
const CENTER_Y: f64 = 245.0;
const RADIUS: f64 = 165.0;

/// Render the pie for a breakdown result
pub fn outcome_chart(result: &FilterResult<'_>) -> String {
    render_outcome_pie(&result.title, &result.outcome_slices())
}

/// Render one wedge per slice, clockwise from twelve o'clock
///
/// A single slice is drawn as a full disc since an arc cannot start and end
/// at the same point.
pub fn render_outcome_pie(title: &str, slices: &[OutcomeSlice]) -> String {
    let mut body = caption(WIDTH, title);

    if slices.is_empty() {
        body.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="14" fill="#7f7f7f">No data</text>"##,
            CENTER_X, CENTER_Y
        ));
        return svg_document(WIDTH, HEIGHT, &body);
    }

    let mut wedges = String::new();
    let mut labels = String::new();
    let mut legend = String::new();
    let mut start = -PI / 2.0;

    for (i, slice) in slices.iter().enumerate() {
        let color = color_for(i);
        let sweep = slice.share * 2.0 * PI;
        let end = start + sweep;

        if slices.len() == 1 {
            wedges.push_str(&format!(
                r##"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="white" stroke-width="1"><title>class {}: {}</title></circle>"##,
                CENTER_X, CENTER_Y, RADIUS, color, slice.outcome, slice.count
            ));
        } else {
            let (x0, y0) = point_on_circle(start, RADIUS);
            let (x1, y1) = point_on_circle(end, RADIUS);
            let large_arc = if sweep > PI { 1 } else { 0 };
            wedges.push_str(&format!(
                r##"<path d="M {:.2} {:.2} L {:.2} {:.2} A {r} {r} 0 {} 1 {:.2} {:.2} Z" fill="{}" stroke="white" stroke-width="1"><title>class {}: {}</title></path>"##,
                CENTER_X, CENTER_Y, x0, y0, large_arc, x1, y1, color, slice.outcome, slice.count,
                r = RADIUS
            ));
        }

        let (lx, ly) = if slices.len() == 1 {
            (CENTER_X, CENTER_Y)
        } else {
            point_on_circle(start + sweep / 2.0, RADIUS * 0.62)
        };
        labels.push_str(&format!(
            r##"<text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle" font-size="13" fill="white">{:.1}%</text>"##,
            lx,
            ly,
            slice.share * 100.0
        ));

        let legend_y = 80.0 + i as f64 * 24.0;
        legend.push_str(&format!(
            r##"<rect x="540" y="{:.0}" width="14" height="14" fill="{}"/><text x="562" y="{:.0}" font-size="13" fill="{}">{}</text>"##,
            legend_y,
            color,
            legend_y + 12.0,
            TEXT_COLOR,
            slice.outcome
        ));

        start = end;
    }

    body.push_str(&wedges);
    body.push_str(&labels);
    body.push_str(&legend);
    svg_document(WIDTH, HEIGHT, &body)
}

fn point_on_circle(angle: f64, radius: f64) -> (f64, f64) {
    (
        CENTER_X + radius * angle.cos(),
        CENTER_Y + radius * angle.sin(),
    )
}
