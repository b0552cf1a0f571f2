use std::fmt;

// ---------------------------------------------------------------------------
// Side – which force plate a dataset comes from
// ---------------------------------------------------------------------------

/// The two force plates. Each side has its own CSV file whose value column
/// must be named after the side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Name of the required value column (matched after trim + lowercase).
    pub fn column_name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Human-readable label for UI text and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// AngleValue – the categorical trial condition keying each group
// ---------------------------------------------------------------------------

/// An angle condition as read from the CSV. The raw text is kept for display
/// and export; a numeric interpretation (when the cell parses as a number) is
/// kept so angles sort numerically ("9" before "10") rather than
/// lexicographically. Non-numeric angles sort after numeric ones, by text.
#[derive(Debug, Clone)]
pub struct AngleValue {
    raw: String,
    numeric: Option<f64>,
}

impl AngleValue {
    pub fn parse(cell: &str) -> Self {
        let raw = cell.trim().to_string();
        let numeric = raw.parse::<f64>().ok().filter(|v| v.is_finite());
        AngleValue { raw, numeric }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

// -- Manual Eq/Ord so AngleValue can key a BTreeMap with numeric ordering --

impl PartialEq for AngleValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for AngleValue {}

impl PartialOrd for AngleValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AngleValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self.numeric, other.numeric) {
            // Tie-break equal numbers on raw text so "10" and "10.0" stay
            // distinct keys while still sorting together.
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl fmt::Display for AngleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ---------------------------------------------------------------------------
// Reading / Dataset – one parsed CSV file
// ---------------------------------------------------------------------------

/// One force sample: the angle condition it belongs to and the measured
/// value. Row order within an angle is the (implicit, 0.1 s) time axis.
#[derive(Debug, Clone)]
pub struct Reading {
    pub angle: AngleValue,
    pub value: f64,
}

/// A fully parsed force plate recording for one side, rows in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub side: Side,
    pub readings: Vec<Reading>,
}

impl Dataset {
    /// Number of readings (CSV rows).
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the dataset has no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Pipeline outputs
// ---------------------------------------------------------------------------

/// One point of an aligned per-angle series. `time` is `index * 0.1` seconds;
/// a side whose group is shorter than the other's is `None` past its end,
/// never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedSample {
    pub time: f64,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

/// The aligned dual-channel series for one angle, plus each side's
/// breakpoint (time of minimum force, absent when the side has no data).
#[derive(Debug, Clone, PartialEq)]
pub struct AngleTrace {
    pub angle: AngleValue,
    pub samples: Vec<AlignedSample>,
    pub breakpoint_left: Option<f64>,
    pub breakpoint_right: Option<f64>,
}

/// One row of the summary table: per-angle sample standard deviation of each
/// side. Zero (not NaN) when a side has fewer than two readings.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSummary {
    pub angle: AngleValue,
    pub std_left: f64,
    pub std_right: f64,
}

/// Complete pipeline output for one pair of datasets: traces and summary
/// rows share the same angle order (the sorted union of both sides' angles).
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub traces: Vec<AngleTrace>,
    pub summary: Vec<AngleSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_sort_numerically_before_text() {
        let mut angles: Vec<AngleValue> = ["10", "banana", "9", "-5", "apple"]
            .iter()
            .map(|s| AngleValue::parse(s))
            .collect();
        angles.sort();
        let raw: Vec<&str> = angles.iter().map(|a| a.as_str()).collect();
        assert_eq!(raw, vec!["-5", "9", "10", "apple", "banana"]);
    }

    #[test]
    fn angle_parse_trims_whitespace() {
        assert_eq!(AngleValue::parse("  20 "), AngleValue::parse("20"));
    }
}
