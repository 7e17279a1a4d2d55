//! SVG Charts
//!
//! Server-side rendering of the two dashboard charts. Output is a standalone
//! `<svg>` element that the page swaps in on every selector change.
//!
//! - [`pie`]: outcome proportions (one wedge per class present)
//! - [`scatter`]: payload mass against outcome, colored by booster category

pub mod pie;
pub mod scatter;

pub use pie::{outcome_chart, render_outcome_pie};
pub use scatter::{payload_chart, render_payload_scatter};

/// Qualitative palette, assigned to slices and categories in order
pub const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

const FONT_FAMILY: &str = "'Open Sans', Verdana, Arial, sans-serif";
const TEXT_COLOR: &str = "#2a3f5f";
const GRID_COLOR: &str = "#e5ecf6";

/// Color for the `index`-th series, wrapping around the palette
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Escape text for use inside SVG/HTML element content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Chart caption, centered at the top of the canvas
fn caption(width: u32, title: &str) -> String {
    format!(
        r##"<text x="{}" y="28" text-anchor="middle" font-size="17" fill="{}">{}</text>"##,
        width / 2,
        TEXT_COLOR,
        escape_xml(title)
    )
}

/// Wrap chart body in the outer `<svg>` element
fn svg_document(width: u32, height: u32, body: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}" style="background:white">{body}</svg>"##,
        w = width,
        h = height,
        font = FONT_FAMILY,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml(r#"<script>"a" & 'b'</script>"#),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_xml("CCAFS LC-40"), "CCAFS LC-40");
    }

    #[test]
    fn test_color_wraps() {
        assert_eq!(color_for(0), PALETTE[0]);
        assert_eq!(color_for(PALETTE.len() + 2), PALETTE[2]);
    }
}
