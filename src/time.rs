//! Wall-clock helpers used for time limits
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use self::wasm::{now, until_now};

#[cfg(not(feature = "wasm"))]
use std::time::Instant;

/// Returns the current point in time.
#[cfg(not(feature = "wasm"))]
pub fn now() -> Instant {
    Instant::now()
}

/// Returns the seconds elapsed since `t`.
#[cfg(not(feature = "wasm"))]
pub fn until_now(t: Instant) -> f64 {
    t.elapsed().as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_nonnegative() {
        let start = now();
        assert!(until_now(start) >= 0.0);
    }
}
