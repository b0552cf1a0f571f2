use std::path::Path;

use crate::color::AnglePalette;
use crate::data::loader;
use crate::data::model::{Analysis, Dataset, Side};
use crate::data::pipeline::{self, SortDirection};

/// Chart height slider bounds and default, in pixels.
pub const CHART_HEIGHT_MIN: f32 = 120.0;
pub const CHART_HEIGHT_MAX: f32 = 600.0;
pub const CHART_HEIGHT_DEFAULT: f32 = 360.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Left plate recording (None until the user loads a file).
    pub left: Option<Dataset>,

    /// Right plate recording.
    pub right: Option<Dataset>,

    /// Pipeline output, present only when both sides are loaded.
    pub analysis: Option<Analysis>,

    /// Accent colours for the current analysis' angles.
    pub palette: AnglePalette,

    /// Angle ordering for charts and the summary table.
    pub sort_direction: SortDirection,

    /// Height of each chart in pixels.
    pub chart_height: f32,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            analysis: None,
            palette: AnglePalette::default(),
            sort_direction: SortDirection::default(),
            chart_height: CHART_HEIGHT_DEFAULT,
            status_message: None,
        }
    }
}

impl AppState {
    /// Load one side's CSV and re-run the pipeline. On failure the side is
    /// cleared and no partial analysis survives.
    pub fn load_side(&mut self, side: Side, path: &Path) {
        match loader::load_file(path, side) {
            Ok(dataset) => {
                log::info!("Loaded {} {} readings from {}", dataset.len(), side, path.display());
                self.set_side(Some(dataset), side);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load {} file: {e}", side);
                self.set_side(None, side);
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Change the angle sort direction and re-run the pipeline.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        if self.sort_direction != direction {
            self.sort_direction = direction;
            self.rebuild();
        }
    }

    fn set_side(&mut self, dataset: Option<Dataset>, side: Side) {
        match side {
            Side::Left => self.left = dataset,
            Side::Right => self.right = dataset,
        }
        self.rebuild();
    }

    /// Recompute the analysis from scratch. No caching, no incremental
    /// update: the output is a pure function of the two datasets and the
    /// sort direction.
    fn rebuild(&mut self) {
        self.analysis = match (&self.left, &self.right) {
            (Some(left), Some(right)) => {
                Some(pipeline::analyze(left, right, self.sort_direction))
            }
            _ => None,
        };
        let angles: Vec<_> = self
            .analysis
            .iter()
            .flat_map(|a| a.traces.iter().map(|t| t.angle.clone()))
            .collect();
        self.palette = AnglePalette::new(&angles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AngleValue, Reading};

    fn dataset(side: Side, rows: &[(&str, f64)]) -> Dataset {
        Dataset {
            side,
            readings: rows
                .iter()
                .map(|&(angle, value)| Reading {
                    angle: AngleValue::parse(angle),
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn analysis_requires_both_sides() {
        let mut state = AppState::default();
        state.set_side(Some(dataset(Side::Left, &[("10", 5.0)])), Side::Left);
        assert!(state.analysis.is_none());

        state.set_side(Some(dataset(Side::Right, &[("10", 6.0)])), Side::Right);
        assert!(state.analysis.is_some());

        state.set_side(None, Side::Left);
        assert!(state.analysis.is_none());
    }

    #[test]
    fn changing_sort_direction_reorders_the_summary() {
        let mut state = AppState::default();
        state.set_side(
            Some(dataset(Side::Left, &[("10", 5.0), ("20", 6.0)])),
            Side::Left,
        );
        state.set_side(Some(dataset(Side::Right, &[("30", 7.0)])), Side::Right);

        state.set_sort_direction(SortDirection::Descending);
        let summary = &state.analysis.as_ref().unwrap().summary;
        let angles: Vec<&str> = summary.iter().map(|r| r.angle.as_str()).collect();
        assert_eq!(angles, vec!["30", "20", "10"]);
    }
}
