use std::time::{Duration, Instant};

use tracing::info;

/// Runs `f`, logs how long it took under `label` and hands back the value together
/// with the elapsed time
pub fn timed<T, F: FnOnce() -> T>(label: &str, f: F) -> (T, Duration) {
    let start = Instant::now();
    let ret = f();
    let elapsed = start.elapsed();
    info!("{} took {:.3} ms", label, elapsed.as_secs_f64() * 1000.0);
    (ret, elapsed)
}

#[cfg(test)]
mod tests {
    use super::timed;

    #[test]
    fn test_timed_returns_value() {
        let (value, elapsed) = timed("sum", || (1..=10).sum::<u32>());
        assert_eq!(value, 55);
        assert!(elapsed.as_secs() < 60);
    }
}
