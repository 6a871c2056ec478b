/// Map a raw score in [0, 1] onto the 1–5 display scale, two decimals.
pub fn to_five(raw: f64) -> f64 {
    let raw = raw.clamp(0.0, 1.0);
    // Whole hundredths, divided once: 1.14 stays 1.14, not 1.1400000000000001.
    let hundredths = (raw * 4.0 * 100.0).round();
    (100.0 + hundredths) / 100.0
}

/// Inverse of [`to_five`], up to its rounding.
pub fn from_five(score: f64) -> f64 {
    ((score - 1.0) / 4.0).clamp(0.0, 1.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean; 0 for an empty sequence.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
