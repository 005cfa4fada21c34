/// Returns the current point in time (in milliseconds).
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0.0, |performance| performance.now())
}

/// Returns the seconds elapsed since `t`.
pub fn until_now(t: f64) -> f64 {
    (now() - t) / 1000.0
}
