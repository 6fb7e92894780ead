/// Reduce a trace to at most `max_points` plot points.
///
/// Short traces pass through unchanged. Longer ones are cut into
/// `max_points / 2` columns and each column contributes its min and max
/// sample (in time order), so peaks and noise bursts survive decimation.
pub fn envelope_points(time: &[f64], samples: &[f64], max_points: usize) -> Vec<[f64; 2]> {
    let n = time.len().min(samples.len());
    if n == 0 {
        return Vec::new();
    }
    if n <= max_points || max_points < 2 {
        return time[..n]
            .iter()
            .zip(&samples[..n])
            .map(|(&t, &s)| [t, s])
            .collect();
    }

    let columns = max_points / 2;
    let mut points = Vec::with_capacity(columns * 2);
    for col in 0..columns {
        let i0 = col * n / columns;
        let i1 = ((col + 1) * n / columns).min(n);
        if i0 >= i1 {
            continue;
        }

        let mut min_idx = i0;
        let mut max_idx = i0;
        for i in i0..i1 {
            if samples[i] < samples[min_idx] {
                min_idx = i;
            }
            if samples[i] > samples[max_idx] {
                max_idx = i;
            }
        }

        let (first, second) = if min_idx <= max_idx {
            (min_idx, max_idx)
        } else {
            (max_idx, min_idx)
        };
        points.push([time[first], samples[first]]);
        if second != first {
            points.push([time[second], samples[second]]);
        }
    }
    points
}

/// Smallest and largest value of a trace, or `None` when it is empty or all NaN.
pub fn value_range(samples: &[f64]) -> Option<(f64, f64)> {
    samples
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
