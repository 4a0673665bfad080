//! Evenly spaced sequences

/// Return `num` evenly spaced values from `start` to `stop`, both included
///
/// # Note:
/// With `num == 1` only `start` is returned, and the final value is always exactly `stop`.
pub(crate) fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            values[num - 1] = stop;
            values
        }
    }
}
