use eframe::egui::{RichText, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::{LEFT_COLOR, RIGHT_COLOR};
use crate::data::model::AngleTrace;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – per-angle charts and summary
// ---------------------------------------------------------------------------

/// Render the full analysis view: one dual-line chart per angle, then the
/// per-angle standard-deviation bar chart.
pub fn analysis_view(ui: &mut Ui, state: &AppState) {
    let Some(analysis) = &state.analysis else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open the left and right plate CSVs to view the analysis  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, trace) in analysis.traces.iter().enumerate() {
                let accent = state.palette.color_for(&trace.angle);
                ui.heading(
                    RichText::new(format!("Force Over Time at Angle {}", trace.angle))
                        .color(accent),
                );
                ui.label(breakpoint_caption(trace));
                angle_chart(ui, trace, idx, state.chart_height);
                ui.add_space(12.0);
            }

            ui.separator();
            ui.heading("STD DEV by Angle");
            summary_chart(ui, state, analysis);
        });
}

fn breakpoint_caption(trace: &AngleTrace) -> String {
    fn side_text(label: &str, breakpoint: Option<f64>) -> String {
        match breakpoint {
            Some(t) => format!("{label} breakpoint: {t:.1} s"),
            None => format!("{label} breakpoint: n/a"),
        }
    }
    format!(
        "{}   |   {}",
        side_text("Left", trace.breakpoint_left),
        side_text("Right", trace.breakpoint_right)
    )
}

// ---------------------------------------------------------------------------
// Per-angle dual-line chart
// ---------------------------------------------------------------------------

fn angle_chart(ui: &mut Ui, trace: &AngleTrace, idx: usize, height: f32) {
    let left_points: PlotPoints = trace
        .samples
        .iter()
        .filter_map(|s| s.left.map(|v| [s.time, v]))
        .collect();
    let right_points: PlotPoints = trace
        .samples
        .iter()
        .filter_map(|s| s.right.map(|v| [s.time, v]))
        .collect();

    Plot::new(("angle_chart", idx))
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Time (s)")
        .y_axis_label("Force")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(left_points).name("Left").color(LEFT_COLOR).width(1.5));
            plot_ui.line(
                Line::new(right_points)
                    .name("Right")
                    .color(RIGHT_COLOR)
                    .width(1.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Summary bar chart
// ---------------------------------------------------------------------------

fn summary_chart(ui: &mut Ui, state: &AppState, analysis: &crate::data::model::Analysis) {
    let labels: Vec<String> = analysis
        .summary
        .iter()
        .map(|row| row.angle.to_string())
        .collect();

    let left_bars: Vec<Bar> = analysis
        .summary
        .iter()
        .enumerate()
        .map(|(i, row)| Bar::new(i as f64 - 0.18, row.std_left).width(0.32))
        .collect();
    let right_bars: Vec<Bar> = analysis
        .summary
        .iter()
        .enumerate()
        .map(|(i, row)| Bar::new(i as f64 + 0.18, row.std_right).width(0.32))
        .collect();

    Plot::new("summary_chart")
        .height(state.chart_height)
        .legend(Legend::default())
        .x_axis_label("Angle")
        .y_axis_label("STD DEV")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(left_bars).name("STD Left").color(LEFT_COLOR));
            plot_ui.bar_chart(
                BarChart::new(right_bars)
                    .name("STD Right")
                    .color(RIGHT_COLOR),
            );
        });
}
