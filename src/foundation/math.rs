pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// One exponential easing step from `current` toward `target`.
pub(crate) fn approach(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
