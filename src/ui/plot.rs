use eframe::egui::{self, Align2, RichText, Sense, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Points, Text};

use crate::chart::{BarMode, BarSeries, ChartSpec, PieSlice, ScatterSeries};
use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Chart spec rendering
// ---------------------------------------------------------------------------

const CHART_HEIGHT: f32 = 280.0;

/// Render a [`ChartSpec`] into the current panel.
pub fn chart(ui: &mut Ui, id: &str, spec: &ChartSpec) {
    ui.strong(spec.title());
    match spec {
        ChartSpec::Bar {
            x_field,
            y_field,
            mode,
            categories,
            series,
            ..
        } => bar_chart(ui, id, *mode, categories, series, x_field, y_field),
        ChartSpec::Scatter {
            x_field,
            y_field,
            series,
            ..
        } => scatter_chart(ui, id, series, x_field, y_field),
        ChartSpec::Pie { slices, .. } => pie_chart(ui, slices),
    }
}

// ---------------------------------------------------------------------------
// Bars
// ---------------------------------------------------------------------------

fn bar_chart(
    ui: &mut Ui,
    id: &str,
    mode: BarMode,
    categories: &[String],
    series: &[BarSeries],
    x_field: &str,
    y_field: &str,
) {
    let colors = ColorMap::new(series.iter().map(|s| s.name.clone()));
    let n_series = series.len().max(1);
    // Running stack height per category, used in Stack mode only.
    let mut stack_base = vec![0.0_f64; categories.len()];

    let mut charts: Vec<BarChart> = Vec::new();
    for (si, s) in series.iter().enumerate() {
        let color = colors.color_for(&s.name);
        let mut bars = Vec::new();
        for (ci, value) in s.values.iter().enumerate() {
            let Some(v) = value else {
                continue;
            };
            let bar = match mode {
                BarMode::Group => {
                    // Side-by-side within the category slot.
                    let width = 0.8 / n_series as f64;
                    let x = ci as f64 - 0.4 + width * (si as f64 + 0.5);
                    Bar::new(x, *v).width(width)
                }
                BarMode::Stack => {
                    let bar = Bar::new(ci as f64, *v).width(0.8).base_offset(stack_base[ci]);
                    stack_base[ci] += *v;
                    bar
                }
            };
            bars.push(bar.name(&s.name).fill(color));
        }
        charts.push(BarChart::new(bars).color(color).name(&s.name));
    }

    let cats = categories.to_vec();
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x_field)
        .y_axis_label(y_field)
        .x_axis_formatter(move |mark, _range| {
            let nearest = mark.value.round();
            if (mark.value - nearest).abs() > 0.05 || nearest < 0.0 {
                return String::new();
            }
            cats.get(nearest as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for bar_chart in charts {
                plot_ui.bar_chart(bar_chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, id: &str, series: &[ScatterSeries], x_field: &str, y_field: &str) {
    let colors = ColorMap::new(series.iter().map(|s| s.name.clone()));
    let max_size = series
        .iter()
        .flat_map(|s| s.points.iter().filter_map(|p| p.size))
        .fold(0.0_f64, f64::max);

    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x_field)
        .y_axis_label(y_field)
        .show(ui, |plot_ui| {
            for s in series {
                let color = colors.color_for(&s.name);
                for p in &s.points {
                    // Marker area tracks the raw size value.
                    let radius = match p.size {
                        Some(size) if max_size > 0.0 => {
                            2.0 + 8.0 * (size / max_size).sqrt() as f32
                        }
                        _ => 4.0,
                    };
                    plot_ui.points(
                        Points::new(vec![[p.x, p.y]])
                            .color(color)
                            .radius(radius)
                            .name(&s.name),
                    );
                    if let Some(text) = &p.text {
                        plot_ui.text(
                            Text::new(PlotPoint::new(p.x, p.y), RichText::new(text).small())
                                .color(color)
                                .anchor(Align2::CENTER_BOTTOM),
                        );
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, slices: &[PieSlice]) {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        ui.label("No data to chart.");
        return;
    }
    let colors = ColorMap::new(slices.iter().map(|s| s.name.clone()));

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width().min(400.0), CHART_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;

    // Start at 12 o'clock, sweep clockwise.
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for slice in slices {
        let sweep = slice.value / total * std::f64::consts::TAU;
        let steps = (sweep / 0.05).ceil().max(1.0) as usize;
        let mut points = vec![center];
        for i in 0..=steps {
            let a = angle + sweep * i as f64 / steps as f64;
            points.push(center + egui::vec2(a.cos() as f32, a.sin() as f32) * radius);
        }
        painter.add(egui::Shape::convex_polygon(
            points,
            colors.color_for(&slice.name),
            egui::Stroke::NONE,
        ));
        angle += sweep;
    }

    for slice in slices {
        ui.horizontal(|ui| {
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, colors.color_for(&slice.name));
            ui.label(format!(
                "{}: {:.1}%",
                slice.name,
                slice.value / total * 100.0
            ));
        });
    }
}
