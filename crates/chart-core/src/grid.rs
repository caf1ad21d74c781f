// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 steps) and tick label formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Smallest step of the form {1, 2, 5} x 10^k that splits `span` into at
/// most `max_ticks` intervals.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / max_ticks.max(1) as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick positions inside `[min, max]` at a nice step.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, max_ticks);
    let first = (min / step).ceil();
    let eps = step * 1e-9;
    let mut ticks = Vec::new();
    let mut i = 0.0;
    loop {
        let v = (first + i) * step;
        if v > max + eps {
            break;
        }
        // snap -0.0 and float dust to an exact zero
        ticks.push(if v.abs() < eps { 0.0 } else { v });
        i += 1.0;
    }
    ticks
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let value = if value.abs() < step.abs() * 1e-9 { 0.0 } else { value };
    if step >= 1.0 || step <= 0.0 || !step.is_finite() {
        format!("{:.0}", value)
    } else {
        let decimals = (-step.log10().floor()).max(0.0) as usize;
        format!("{:.*}", decimals, value)
    }
}
