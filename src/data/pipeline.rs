use std::collections::BTreeMap;

use super::model::{
    AlignedSample, Analysis, AngleSummary, AngleTrace, AngleValue, Dataset,
};

/// Fixed sampling interval of the force plates: one row every 0.1 s. Not
/// read from the files.
pub const SAMPLE_INTERVAL_S: f64 = 0.1;

// ---------------------------------------------------------------------------
// Angle ordering
// ---------------------------------------------------------------------------

/// How the angle union (and therefore charts and the summary table) is
/// ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// Sorted union of the distinct angles appearing in either dataset. Numeric
/// angles compare numerically, text angles lexicographically (see
/// [`AngleValue`]'s `Ord`).
pub fn angle_union(a: &Dataset, b: &Dataset, direction: SortDirection) -> Vec<AngleValue> {
    let mut union: Vec<AngleValue> = a
        .readings
        .iter()
        .chain(b.readings.iter())
        .map(|r| r.angle.clone())
        .collect();
    union.sort();
    union.dedup();
    if direction == SortDirection::Descending {
        union.reverse();
    }
    union
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Group a dataset's force values by angle, preserving row order within each
/// group (stable grouping, never resorted).
pub fn group_by_angle(dataset: &Dataset) -> BTreeMap<AngleValue, Vec<f64>> {
    let mut groups: BTreeMap<AngleValue, Vec<f64>> = BTreeMap::new();
    for reading in &dataset.readings {
        groups
            .entry(reading.angle.clone())
            .or_default()
            .push(reading.value);
    }
    groups
}

// ---------------------------------------------------------------------------
// Alignment and statistics
// ---------------------------------------------------------------------------

fn tick_time(index: usize) -> f64 {
    // index * 0.1, rounded to one decimal place
    (index as f64 * SAMPLE_INTERVAL_S * 10.0).round() / 10.0
}

/// Reconcile one angle's two groups onto a shared time axis. The result has
/// `max(len(left), len(right))` samples; the shorter side is padded with
/// `None` rather than truncating the longer one.
pub fn align(left: &[f64], right: &[f64]) -> Vec<AlignedSample> {
    let n = left.len().max(right.len());
    (0..n)
        .map(|i| AlignedSample {
            time: tick_time(i),
            left: left.get(i).copied(),
            right: right.get(i).copied(),
        })
        .collect()
}

/// Sample standard deviation (n−1 denominator). Returns 0 for empty and
/// singleton groups so downstream charts always have a defined value; this
/// policy is intentional and load-bearing, do not replace it with NaN.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Time of the minimum force value in a group, in seconds. Ties resolve to
/// the earliest index; empty groups have no breakpoint.
pub fn breakpoint(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(idx, _)| tick_time(idx))
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

/// Run the whole alignment and summarization pipeline on a pair of parsed
/// datasets. Pure and synchronous: identical inputs give identical outputs,
/// and every invocation recomputes from scratch.
pub fn analyze(left: &Dataset, right: &Dataset, direction: SortDirection) -> Analysis {
    let left_groups = group_by_angle(left);
    let right_groups = group_by_angle(right);
    let angles = angle_union(left, right, direction);

    let empty: Vec<f64> = Vec::new();
    let mut traces = Vec::with_capacity(angles.len());
    let mut summary = Vec::with_capacity(angles.len());

    for angle in angles {
        let left_group = left_groups.get(&angle).unwrap_or(&empty);
        let right_group = right_groups.get(&angle).unwrap_or(&empty);

        traces.push(AngleTrace {
            angle: angle.clone(),
            samples: align(left_group, right_group),
            breakpoint_left: breakpoint(left_group),
            breakpoint_right: breakpoint(right_group),
        });
        summary.push(AngleSummary {
            angle,
            std_left: sample_std(left_group),
            std_right: sample_std(right_group),
        });
    }

    Analysis { traces, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Side;

    fn dataset(side: Side, rows: &[(&str, f64)]) -> Dataset {
        Dataset {
            side,
            readings: rows
                .iter()
                .map(|&(angle, value)| crate::data::model::Reading {
                    angle: AngleValue::parse(angle),
                    value,
                })
                .collect(),
        }
    }

    fn angle_strs(angles: &[AngleValue]) -> Vec<&str> {
        angles.iter().map(|a| a.as_str()).collect()
    }

    #[test]
    fn union_is_deduplicated_and_sorted() {
        let left = dataset(Side::Left, &[("20", 1.0), ("10", 2.0), ("20", 3.0)]);
        let right = dataset(Side::Right, &[("30", 4.0), ("10", 5.0)]);

        let asc = angle_union(&left, &right, SortDirection::Ascending);
        assert_eq!(angle_strs(&asc), vec!["10", "20", "30"]);

        let desc = angle_union(&left, &right, SortDirection::Descending);
        assert_eq!(angle_strs(&desc), vec!["30", "20", "10"]);
    }

    #[test]
    fn grouping_preserves_row_order() {
        let ds = dataset(
            Side::Left,
            &[("10", 3.0), ("20", 9.0), ("10", 1.0), ("10", 2.0)],
        );
        let groups = group_by_angle(&ds);
        assert_eq!(groups[&AngleValue::parse("10")], vec![3.0, 1.0, 2.0]);
        assert_eq!(groups[&AngleValue::parse("20")], vec![9.0]);
    }

    #[test]
    fn align_pads_shorter_side_with_missing() {
        let samples = align(&[5.0, 7.0, 9.0], &[6.0]);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].time, 0.0);
        assert_eq!(samples[1].time, 0.1);
        assert_eq!(samples[2].time, 0.2);
        assert_eq!(samples[0].left, Some(5.0));
        assert_eq!(samples[0].right, Some(6.0));
        assert_eq!(samples[1].right, None);
        assert_eq!(samples[2].right, None);
    }

    #[test]
    fn align_of_two_empty_groups_is_empty() {
        assert!(align(&[], &[]).is_empty());
    }

    #[test]
    fn std_is_zero_for_empty_and_singleton_groups() {
        assert_eq!(sample_std(&[]), 0.0);
        assert_eq!(sample_std(&[5.0]), 0.0);
    }

    #[test]
    fn std_uses_n_minus_one_denominator() {
        let std = sample_std(&[5.0, 7.0]);
        assert!((std - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn breakpoint_is_time_of_minimum() {
        assert_eq!(breakpoint(&[]), None);
        assert_eq!(breakpoint(&[3.0, 1.0, 2.0]), Some(0.1));
    }

    #[test]
    fn breakpoint_ties_resolve_to_first_occurrence() {
        assert_eq!(breakpoint(&[2.0, 1.0, 1.0]), Some(0.1));
    }

    #[test]
    fn analyze_uneven_sides_end_to_end() {
        // Left has two samples at angle 10, right has one.
        let left = dataset(Side::Left, &[("10", 5.0), ("10", 7.0)]);
        let right = dataset(Side::Right, &[("10", 6.0)]);

        let analysis = analyze(&left, &right, SortDirection::Ascending);
        assert_eq!(analysis.traces.len(), 1);

        let trace = &analysis.traces[0];
        assert_eq!(
            trace.samples,
            vec![
                AlignedSample { time: 0.0, left: Some(5.0), right: Some(6.0) },
                AlignedSample { time: 0.1, left: Some(7.0), right: None },
            ]
        );
        assert_eq!(trace.breakpoint_left, Some(0.0));
        assert_eq!(trace.breakpoint_right, Some(0.0));

        let row = &analysis.summary[0];
        assert!((row.std_left - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(row.std_right, 0.0);
    }

    #[test]
    fn analyze_covers_angles_missing_from_one_side() {
        let left = dataset(Side::Left, &[("10", 5.0)]);
        let right = dataset(Side::Right, &[("20", 6.0), ("20", 8.0)]);

        let analysis = analyze(&left, &right, SortDirection::Ascending);
        assert_eq!(analysis.summary.len(), 2);

        // Angle 10 has no right-side data: std 0, no right breakpoint.
        assert_eq!(analysis.summary[0].std_right, 0.0);
        assert_eq!(analysis.traces[0].breakpoint_right, None);
        assert_eq!(analysis.traces[0].samples[0].right, None);

        // Angle 20 has no left-side data.
        assert_eq!(analysis.summary[1].std_left, 0.0);
        assert_eq!(analysis.traces[1].breakpoint_left, None);
    }

    #[test]
    fn analyze_is_idempotent() {
        let left = dataset(Side::Left, &[("10", 5.0), ("10", 7.0), ("20", 1.0)]);
        let right = dataset(Side::Right, &[("10", 6.0), ("30", 2.0)]);

        let first = analyze(&left, &right, SortDirection::Ascending);
        let second = analyze(&left, &right, SortDirection::Ascending);
        assert_eq!(first, second);
    }
}
