/// A percentile-to-letter grading curve: descending `(threshold, grade)`
/// bands, first match wins.
///
/// The breakpoints are an external grading-curve contract and are kept as
/// literals rather than re-derived.
#[derive(Debug, Clone, Copy)]
pub struct GradeLadder {
    bands: &'static [(f64, &'static str)],
}

pub const NOT_AVAILABLE: &str = "N/A";

/// The default curve: two special bands at the top, then twelve equal bands
/// of 85/12 points down to a floor of ~17.08.
pub static STANDARD_LADDER: GradeLadder = GradeLadder {
    bands: &[
        (100.0, "#1"),
        (95.0, "A+"),
        (87.91666667, "A"),
        (80.83333333, "A-"),
        (73.75, "B+"),
        (66.66666667, "B"),
        (59.58333333, "B-"),
        (52.5, "C+"),
        (45.41666667, "C"),
        (38.33333333, "C-"),
        (31.25, "D+"),
        (24.16666667, "D"),
        (17.08333333, "D-"),
    ],
};

/// Round 5-point curve used for tight ends. No "#1" band.
pub static ROUND_LADDER: GradeLadder = GradeLadder {
    bands: &[
        (95.0, "A+"),
        (90.0, "A"),
        (85.0, "A-"),
        (80.0, "B+"),
        (75.0, "B"),
        (70.0, "B-"),
        (65.0, "C+"),
        (60.0, "C"),
        (55.0, "C-"),
        (50.0, "D+"),
        (45.0, "D"),
        (40.0, "D-"),
    ],
};

impl GradeLadder {
    /// Convert a percentile to a letter grade. Missing or non-numeric input
    /// maps to "N/A" independent of the bands; anything below every band is
    /// an "F". Never panics.
    pub fn to_grade(&self, percentile: Option<f64>) -> &'static str {
        let Some(value) = percentile else {
            return NOT_AVAILABLE;
        };
        if !value.is_finite() {
            return NOT_AVAILABLE;
        }
        for (threshold, grade) in self.bands.iter().copied() {
            if value >= threshold {
                return grade;
            }
        }
        "F"
    }
}

/// Format a percentile for headline display, e.g. `92.0` -> `"92.0%"`.
/// Missing values render as an em-free dash placeholder.
pub fn format_percentile(percentile: Option<f64>) -> String {
    match percentile {
        Some(value) if value.is_finite() => format!("{value:.1}%"),
        _ => "-".to_string(),
    }
}
