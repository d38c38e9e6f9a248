use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Fixed chart palette. The blob itself is colored from the aggregate
/// score (see [`crate::chart::color`]); everything here is chrome drawn
/// around and over it.
pub struct ChartTheme {
    pub ring_fill_faint: Srgba<f64>,
    pub ring_fill: Srgba<f64>,
    pub ring_stroke: Srgba<f64>,
    pub axis: Srgba<f64>,
    pub hover_overlay: Srgba<f64>,
    pub focus_outline: Srgba<f64>,
    pub marker: Srgba<f64>,
    pub marker_dim: Srgba<f64>,
    pub label: Srgba<f64>,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            // alternating ring fills, odd rings slightly brighter
            ring_fill_faint: Srgba::new(1.0, 1.0, 1.0, 0.03),
            ring_fill: Srgba::new(1.0, 1.0, 1.0, 0.06),
            ring_stroke: Srgba::new(1.0, 1.0, 1.0, 0.1),
            axis: Srgba::new(1.0, 1.0, 1.0, 0.1),
            hover_overlay: Srgba::new(1.0, 1.0, 1.0, 0.2),
            focus_outline: Srgba::new(1.0, 1.0, 1.0, 0.8),
            marker: Srgba::new(1.0, 1.0, 1.0, 1.0),
            marker_dim: Srgba::new(1.0, 1.0, 1.0, 0.2),
            label: Srgba::new(0.61, 0.64, 0.69, 1.0),
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.snowflake-window {
    background-color: #0b101b;
}
.snowflake-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
