use super::model::Sample;

// ---------------------------------------------------------------------------
// Derived series
// ---------------------------------------------------------------------------

/// Backward first difference of the counter over the retained samples.
///
/// Element 0 is `0.0`; element `i` is `counter[i] - counter[i - 1]`, where
/// adjacency is adjacency in the filtered sequence, not in the file.
pub fn compute_counter_derivative(samples: &[Sample]) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }
    std::iter::once(0.0)
        .chain(samples.windows(2).map(|w| w[1].counter - w[0].counter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .map(|&counter| Sample {
                position: 0.0,
                objective: 0.0,
                output: 0.0,
                counter,
            })
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(compute_counter_derivative(&[]).is_empty());
    }

    #[test]
    fn single_sample_is_zero() {
        assert_eq!(compute_counter_derivative(&counters(&[42.0])), vec![0.0]);
    }

    #[test]
    fn backward_difference() {
        let samples = counters(&[10.0, 12.0, 12.0, 7.5, 100.0]);
        let deriv = compute_counter_derivative(&samples);
        assert_eq!(deriv.len(), samples.len());
        assert_eq!(deriv[0], 0.0);
        for i in 1..samples.len() {
            assert_eq!(deriv[i], samples[i].counter - samples[i - 1].counter);
        }
        assert_eq!(deriv, vec![0.0, 2.0, 0.0, -4.5, 92.5]);
    }

    #[test]
    fn uses_native_float_subtraction() {
        let deriv = compute_counter_derivative(&counters(&[0.1, 0.3]));
        assert_eq!(deriv[1], 0.3 - 0.1);
    }
}
