use super::model::{Measurement, SmoothedCurve};

/// Window length in samples. With the 1 Hz step of NarrowBand files this is 50 Hz.
pub const DEFAULT_WINDOW: usize = 50;

/// Centered moving average over a fixed window.
///
/// Output `i` is the arithmetic mean of `values[i - window/2 ..= i + (window-1)/2]`.
/// For an even window the extra sample sits on the left: with `window = 50`
/// the mean covers 25 samples before `i`, `i` itself and 24 after.
///
/// A position yields `None` when its window does not fit inside `values`
/// or contains a non-finite sample. `window == 0` yields `None` everywhere.
pub fn centered_moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    if window == 0 || window > n {
        return vec![None; n];
    }

    let before = window / 2;
    let after = (window - 1) / 2;

    (0..n)
        .map(|i| {
            if i < before || i + after >= n {
                return None;
            }
            let slice = &values[i - before..=i + after];
            if slice.iter().any(|v| !v.is_finite()) {
                return None;
            }
            Some(slice.iter().sum::<f64>() / window as f64)
        })
        .collect()
}

/// Attach the centered moving average of the TL column to a measurement.
pub fn smooth(measurement: &Measurement, window: usize) -> SmoothedCurve {
    let raw = measurement.tl_values();
    let smoothed = centered_moving_average(&raw, window);
    log::debug!(
        "Smoothed {} ({} samples, window {window}, {} defined)",
        measurement.label,
        raw.len(),
        smoothed.iter().filter(|v| v.is_some()).count()
    );

    SmoothedCurve {
        label: measurement.label.clone(),
        frequencies: measurement.frequencies(),
        raw,
        smoothed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(n: usize) -> Vec<f64> {
        (1..=n).map(|v| v as f64).collect()
    }

    #[test]
    fn ramp_window_matches_hand_computed_mean() {
        let values = ramp(100);
        let out = centered_moving_average(&values, DEFAULT_WINDOW);
        assert_eq!(out.len(), 100);

        // Index 50 covers indices 25..=74, i.e. the values 26..=75.
        let expected: f64 = (26..=75).map(|v| v as f64).sum::<f64>() / 50.0;
        assert_relative_eq!(out[50].unwrap(), expected);
        assert_relative_eq!(out[50].unwrap(), 50.5);
    }

    #[test]
    fn every_defined_position_is_its_window_mean() {
        let values: Vec<f64> = (0..137).map(|i| ((i * 7919) % 101) as f64 * 0.37).collect();
        let out = centered_moving_average(&values, DEFAULT_WINDOW);

        for (i, v) in out.iter().enumerate() {
            match v {
                Some(mean) => {
                    let window = &values[i - 25..=i + 24];
                    let expected = window.iter().sum::<f64>() / 50.0;
                    assert_relative_eq!(*mean, expected, epsilon = 1e-12);
                }
                None => assert!(i < 25 || i + 24 >= values.len()),
            }
        }
    }

    #[test]
    fn edges_are_undefined() {
        let out = centered_moving_average(&ramp(100), DEFAULT_WINDOW);
        assert!(out[..25].iter().all(Option::is_none));
        assert!(out[25..76].iter().all(Option::is_some));
        assert!(out[76..].iter().all(Option::is_none));
    }

    #[test]
    fn odd_window_is_symmetric() {
        let out = centered_moving_average(&[1.0, 2.0, 6.0, 3.0], 3);
        assert_eq!(out, vec![None, Some(3.0), Some(11.0 / 3.0), None]);
    }

    #[test]
    fn unit_window_is_identity_twice() {
        let values = vec![3.5, -1.0, 42.0, 0.25];
        let once: Vec<f64> = centered_moving_average(&values, 1)
            .into_iter()
            .map(|v| v.unwrap())
            .collect();
        let twice: Vec<f64> = centered_moving_average(&once, 1)
            .into_iter()
            .map(|v| v.unwrap())
            .collect();
        assert_eq!(once, values);
        assert_eq!(twice, values);
    }

    #[test]
    fn short_input_has_no_values() {
        let out = centered_moving_average(&ramp(49), DEFAULT_WINDOW);
        assert_eq!(out.len(), 49);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn exact_length_has_single_value() {
        let out = centered_moving_average(&ramp(50), DEFAULT_WINDOW);
        let defined: Vec<usize> = (0..50).filter(|&i| out[i].is_some()).collect();
        assert_eq!(defined, vec![25]);
        assert_relative_eq!(out[25].unwrap(), 25.5);
    }

    #[test]
    fn zero_window_yields_nothing() {
        assert_eq!(centered_moving_average(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn nan_poisons_its_windows_only() {
        let mut values = ramp(10);
        values[0] = f64::NAN;
        let out = centered_moving_average(&values, 3);
        assert_eq!(out[1], None);
        assert_relative_eq!(out[2].unwrap(), 3.0);
    }
}
