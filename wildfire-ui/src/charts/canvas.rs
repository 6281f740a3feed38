//! Canvas Rendering
//!
//! Draws line, bar and doughnut charts on an HTML5 canvas.

use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{ChartData, ChartKind};

const BACKGROUND: &str = "#1e1e24";
const GRID_COLOR: &str = "rgba(255,255,255,0.05)";
const TICK_COLOR: &str = "#a0a0a5";
const FONT: &str = "12px sans-serif";

/// Plot area margins: left, right, top, bottom
const MARGINS: (f64, f64, f64, f64) = (50.0, 15.0, 30.0, 35.0);

/// Draw `data` on `canvas` as a chart of the given kind.
pub fn draw(canvas: &HtmlCanvasElement, kind: ChartKind, data: &ChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    match kind {
        ChartKind::Line => draw_line(&ctx, width, height, data),
        ChartKind::Bar => draw_bars(&ctx, width, height, data),
        ChartKind::Doughnut => draw_doughnut(&ctx, width, height, data),
    }
}

/// Y-axis bounds covering every finite value, padded by 10%.
/// Bar charts start at zero.
pub fn value_range(data: &ChartData, begin_at_zero: bool) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in data.datasets.iter().flat_map(|d| d.values.iter()).copied() {
        if value.is_finite() {
            min = min.min(value);
            max = max.max(value);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    if begin_at_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    let span = max - min;
    let padding = if span > 0.0 { span * 0.1 } else { 1.0 };
    let low = if begin_at_zero && min >= 0.0 { 0.0 } else { min - padding };

    (low, max + padding)
}

/// Start and end angle of each doughnut slice, starting at 12 o'clock.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|v| {
            let share = if v.is_finite() && *v > 0.0 { v / total } else { 0.0 };
            let end = start + share * 2.0 * PI;
            let angles = (start, end);
            start = end;
            angles
        })
        .collect()
}

fn plot_area(width: f64, height: f64) -> (f64, f64, f64, f64) {
    let (left, right, top, bottom) = MARGINS;
    (left, top, width - left - right, height - top - bottom)
}

fn draw_grid(ctx: &CanvasRenderingContext2d, width: f64, height: f64, min: f64, max: f64) {
    let (x0, y0, w, h) = plot_area(width, height);

    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font(FONT);

    for i in 0..=5 {
        let y = y0 + (i as f64 / 5.0) * h;
        ctx.begin_path();
        ctx.move_to(x0, y);
        ctx.line_to(x0 + w, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&TICK_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }
}

fn draw_x_labels(ctx: &CanvasRenderingContext2d, width: f64, height: f64, labels: &[String], centered: bool) {
    if labels.is_empty() {
        return;
    }

    let (x0, _, w, _) = plot_area(width, height);
    let slot = w / labels.len() as f64;

    // Skip labels so they do not overlap
    let stride = ((labels.len() as f64 * 40.0) / w).ceil().max(1.0) as usize;

    ctx.set_fill_style(&TICK_COLOR.into());
    ctx.set_font(FONT);
    for (i, label) in labels.iter().enumerate().step_by(stride) {
        let x = if centered {
            x0 + slot * (i as f64 + 0.5)
        } else {
            x_position(i, labels.len(), x0, w)
        };
        let _ = ctx.fill_text(label, x - 15.0, height - 10.0);
    }
}

fn x_position(index: usize, count: usize, x0: f64, w: f64) -> f64 {
    if count <= 1 {
        x0 + w / 2.0
    } else {
        x0 + (index as f64 / (count - 1) as f64) * w
    }
}

fn y_position(value: f64, min: f64, max: f64, y0: f64, h: f64) -> f64 {
    y0 + ((max - value) / (max - min)) * h
}

fn draw_legend(ctx: &CanvasRenderingContext2d, width: f64, entries: &[(String, String)]) {
    ctx.set_font(FONT);
    let mut x = width / 2.0 - entries.len() as f64 * 45.0;
    for (label, color) in entries {
        ctx.set_fill_style(&color.as_str().into());
        ctx.fill_rect(x, 8.0, 12.0, 12.0);
        ctx.set_fill_style(&TICK_COLOR.into());
        let _ = ctx.fill_text(label, x + 16.0, 18.0);
        x += 90.0;
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, width: f64, height: f64, data: &ChartData) {
    let (min, max) = value_range(data, false);
    let (x0, y0, w, h) = plot_area(width, height);

    draw_grid(ctx, width, height, min, max);
    draw_x_labels(ctx, width, height, &data.labels, false);

    let legend: Vec<_> = data
        .datasets
        .iter()
        .map(|d| (d.label.clone(), d.color(0).to_string()))
        .collect();
    draw_legend(ctx, width, &legend);

    let count = data.labels.len();
    for dataset in &data.datasets {
        let points: Vec<(f64, f64)> = dataset
            .values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, v)| (x_position(i, count, x0, w), y_position(*v, min, max, y0, h)))
            .collect();

        if points.is_empty() {
            continue;
        }

        let color = dataset.color(0);

        if dataset.fill {
            ctx.set_global_alpha(0.1);
            ctx.set_fill_style(&color.into());
            ctx.begin_path();
            ctx.move_to(points[0].0, y0 + h);
            for (x, y) in &points {
                ctx.line_to(*x, *y);
            }
            ctx.line_to(points[points.len() - 1].0, y0 + h);
            ctx.close_path();
            ctx.fill();
            ctx.set_global_alpha(1.0);
        }

        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, (x, y)) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(*x, *y);
            } else {
                ctx.line_to(*x, *y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.into());
        for (x, y) in &points {
            ctx.begin_path();
            let _ = ctx.arc(*x, *y, 3.0, 0.0, PI * 2.0);
            ctx.fill();
        }
    }
}

fn draw_bars(ctx: &CanvasRenderingContext2d, width: f64, height: f64, data: &ChartData) {
    let (min, max) = value_range(data, true);
    let (x0, y0, w, h) = plot_area(width, height);

    draw_grid(ctx, width, height, min, max);
    draw_x_labels(ctx, width, height, &data.labels, true);

    let count = data.labels.len();
    if count == 0 {
        return;
    }

    let series = data.datasets.len().max(1) as f64;
    let slot = w / count as f64;
    let bar_width = (slot * 0.7) / series;
    let baseline = y_position(0.0_f64.max(min), min, max, y0, h);

    for (s, dataset) in data.datasets.iter().enumerate() {
        ctx.set_fill_style(&dataset.color(0).into());
        for (i, value) in dataset.values.iter().enumerate() {
            if !value.is_finite() {
                continue;
            }
            let x = x0 + slot * i as f64 + slot * 0.15 + bar_width * s as f64;
            let y = y_position(*value, min, max, y0, h);
            ctx.fill_rect(x, y.min(baseline), bar_width, (baseline - y).abs());
        }
    }
}

fn draw_doughnut(ctx: &CanvasRenderingContext2d, width: f64, height: f64, data: &ChartData) {
    let Some(dataset) = data.datasets.first() else {
        return;
    };

    let legend_height = 40.0;
    let cx = width / 2.0;
    let cy = (height - legend_height) / 2.0;
    let outer = (cx.min(cy) - 10.0).max(10.0);
    let inner = outer * 0.5;

    for (i, (start, end)) in slice_angles(&dataset.values).into_iter().enumerate() {
        if end <= start {
            continue;
        }
        ctx.set_fill_style(&dataset.color(i).into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, start, end);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, end, start, true);
        ctx.close_path();
        ctx.fill();
    }

    // Legend below the ring
    ctx.set_font(FONT);
    let per_row = 3usize;
    for (i, label) in data.labels.iter().enumerate() {
        let col = (i % per_row) as f64;
        let row = (i / per_row) as f64;
        let x = width / 2.0 - 135.0 + col * 90.0;
        let y = height - legend_height + row * 18.0;

        ctx.set_fill_style(&dataset.color(i).into());
        ctx.fill_rect(x, y, 10.0, 10.0);
        ctx.set_fill_style(&TICK_COLOR.into());
        let _ = ctx.fill_text(label, x + 14.0, y + 9.0);
    }
}
