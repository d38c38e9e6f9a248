use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

use crate::chart::curve::{self, BlobCurve};
use crate::chart::geometry::{self, Point};
use crate::chart::model::{ChartState, Mode};
use crate::chart::{
    color, BASE_FILL_ALPHA, DIMMED_ALPHA, DIMENSION_COUNT, FOCUS_CLIP_FACTOR, FOCUS_SCALE,
    HOVER_CLIP_FACTOR, LABEL_OFFSET, MARKER_RADIUS, MAX_AGGREGATE, MAX_SCORE, SLICE_ANGLE,
};
use crate::data::Dimension;
use crate::gui::theme::ChartTheme;

// cairo has no shadow primitive; the focus pop fakes the blur with layered
// translucent strokes of decreasing width under the fill.
const SHADOW_LAYERS: [(f64, f64); 3] = [(18.0, 0.08), (12.0, 0.14), (6.0, 0.2)];

/// Draws one full frame from the chart state. Stateless and total over its
/// inputs: identical state produces identical pixels, and every clip or
/// transient source change is bracketed by save/restore.
pub fn draw(cr: &Context, state: &ChartState, theme: &ChartTheme) -> Result<(), cairo::Error> {
    draw_rings(cr, state, theme)?;
    draw_axes(cr, state, theme)?;

    let main_color = color::blob_color(state.aggregate(), MAX_AGGREGATE);
    let base = curve::build_blob(&state.scores(), state.center, state.max_radius, 1.0);

    match state.mode {
        Mode::Overview => draw_overview(cr, state, theme, &base, main_color)?,
        Mode::Focus(dim) => draw_focus(cr, state, theme, &base, main_color, dim)?,
    }

    draw_markers(cr, state, theme)?;
    draw_labels(cr, state, theme)
}

/// Seven concentric score rings, one per score level, alternating fill
/// opacity. The outermost ring also gets a stroked border.
fn draw_rings(cr: &Context, state: &ChartState, theme: &ChartTheme) -> Result<(), cairo::Error> {
    for i in 1..=MAX_SCORE {
        let r = state.max_radius / MAX_SCORE as f64 * i as f64;
        cr.new_path();
        cr.arc(state.center.x, state.center.y, r, 0.0, 2.0 * PI);

        let fill = if i % 2 == 0 {
            theme.ring_fill_faint
        } else {
            theme.ring_fill
        };
        set_source(cr, fill);

        if i == MAX_SCORE {
            cr.fill_preserve()?;
            set_source(cr, theme.ring_stroke);
            cr.set_line_width(1.0);
            cr.stroke()?;
        } else {
            cr.fill()?;
        }
    }
    Ok(())
}

fn draw_axes(cr: &Context, state: &ChartState, theme: &ChartTheme) -> Result<(), cairo::Error> {
    cr.new_path();
    for i in 0..DIMENSION_COUNT {
        let end = geometry::polar_to_cartesian(state.center, state.max_radius, geometry::axis_angle(i));
        cr.move_to(state.center.x, state.center.y);
        cr.line_to(end.x, end.y);
    }
    set_source(cr, theme.axis);
    cr.set_line_width(1.0);
    cr.stroke()
}

fn draw_overview(
    cr: &Context,
    state: &ChartState,
    theme: &ChartTheme,
    base: &BlobCurve,
    main_color: palette::Srgb<f64>,
) -> Result<(), cairo::Error> {
    trace_blob(cr, base);
    cr.set_source_rgba(main_color.red, main_color.green, main_color.blue, BASE_FILL_ALPHA);
    cr.fill_preserve()?;
    cr.set_source_rgba(main_color.red, main_color.green, main_color.blue, 1.0);
    cr.set_line_width(2.0);
    cr.stroke()?;

    if let Some(idx) = state.hover_index {
        cr.save()?;
        clip_wedge(cr, state.center, state.max_radius * HOVER_CLIP_FACTOR, idx);
        trace_blob(cr, base);
        set_source(cr, theme.hover_overlay);
        cr.fill()?;
        cr.restore()?;
    }
    Ok(())
}

fn draw_focus(
    cr: &Context,
    state: &ChartState,
    theme: &ChartTheme,
    base: &BlobCurve,
    main_color: palette::Srgb<f64>,
    dim: Dimension,
) -> Result<(), cairo::Error> {
    // the rest of the shape stays visible as dimmed context
    trace_blob(cr, base);
    cr.set_source_rgba(main_color.red, main_color.green, main_color.blue, DIMMED_ALPHA);
    cr.fill()?;

    cr.save()?;
    clip_wedge(
        cr,
        state.center,
        state.max_radius * FOCUS_CLIP_FACTOR,
        dim.as_index(),
    );

    let popped = curve::build_blob(&state.scores(), state.center, state.max_radius, FOCUS_SCALE);
    trace_blob(cr, &popped);

    for (width, alpha) in SHADOW_LAYERS {
        cr.set_source_rgba(0.0, 0.0, 0.0, alpha);
        cr.set_line_width(width);
        cr.stroke_preserve()?;
    }

    cr.set_source_rgba(main_color.red, main_color.green, main_color.blue, 1.0);
    cr.fill_preserve()?;

    set_source(cr, theme.focus_outline);
    cr.set_line_width(3.0);
    cr.stroke()?;

    cr.restore()
}

fn draw_markers(cr: &Context, state: &ChartState, theme: &ChartTheme) -> Result<(), cairo::Error> {
    let focused = state.mode.focused().map(|d| d.as_index());

    for i in 0..DIMENSION_COUNT {
        let p = geometry::vertex(
            state.dimensions[i].score,
            i,
            state.center,
            state.max_radius,
            1.0,
        );
        let color = marker_color(theme, focused, i);
        cr.new_path();
        cr.arc(p.x, p.y, MARKER_RADIUS, 0.0, 2.0 * PI);
        set_source(cr, color);
        cr.fill()?;
    }
    Ok(())
}

/// Markers outside the focused dimension fade into the background; in
/// overview every marker is full strength.
fn marker_color(theme: &ChartTheme, focused: Option<usize>, index: usize) -> Srgba<f64> {
    match focused {
        Some(f) if f != index => theme.marker_dim,
        _ => theme.marker,
    }
}

/// Dimension names just past the outer ring, centered on each axis.
fn draw_labels(cr: &Context, state: &ChartState, theme: &ChartTheme) -> Result<(), cairo::Error> {
    set_source(cr, theme.label);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(11.0);

    for (i, data) in state.dimensions.iter().enumerate() {
        let pos = geometry::polar_to_cartesian(
            state.center,
            state.max_radius + LABEL_OFFSET,
            geometry::axis_angle(i),
        );
        let text = data.key.label();
        if let Ok(ext) = cr.text_extents(&text) {
            cr.move_to(pos.x - ext.width() / 2.0, pos.y + ext.height() / 2.0);
            cr.show_text(&text)?;
        }
    }
    Ok(())
}

/// Replays a blob outline onto the context as the current path.
fn trace_blob(cr: &Context, blob: &BlobCurve) {
    cr.new_path();
    cr.move_to(blob.start.x, blob.start.y);
    for seg in &blob.segments {
        cr.curve_to(seg.cp1.x, seg.cp1.y, seg.cp2.x, seg.cp2.y, seg.to.x, seg.to.y);
    }
    cr.close_path();
}

/// Clips to the pie wedge centered on dimension `index`'s axis. Uses the
/// same axis-centered convention as the hit tester.
fn clip_wedge(cr: &Context, center: Point, radius: f64, index: usize) {
    let angle = geometry::axis_angle(index);
    cr.new_path();
    cr.move_to(center.x, center.y);
    cr.arc(
        center.x,
        center.y,
        radius,
        angle - SLICE_ANGLE / 2.0,
        angle + SLICE_ANGLE / 2.0,
    );
    cr.close_path();
    cr.clip();
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}
