//! Capped normalisation shared by every dimension.

/// `min(value, cap) / cap * 100`, or 0 for a non-positive cap.
pub fn normalize(value: f64, cap: f64) -> f64 {
    if cap.is_nan() || cap <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, cap) / cap * 100.0
}

/// Round a weighted component sum into a `0..=100` integer score.
pub fn to_score(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}
