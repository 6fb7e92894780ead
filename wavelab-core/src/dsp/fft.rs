use crate::error::{Error, Result};
use crate::types::SpectralProfile;
use realfft::RealFftPlanner;
use std::cell::RefCell;

thread_local! {
    static FFT_PLANNER: RefCell<RealFftPlanner<f64>> = RefCell::new(RealFftPlanner::new());
}

/// Number of non-negative frequency bins of an `n`-point DFT, excluding the
/// Nyquist bin when `n` is even.
pub fn positive_bin_count(n: usize) -> usize {
    (n + 1) / 2
}

/// Unnormalized DFT magnitudes `|X_k|` for `k = 0 .. positive_bin_count(n)`.
pub fn magnitude_spectrum(samples: &[f64]) -> Result<Vec<f64>> {
    let n = samples.len();
    if n == 0 {
        return Err(Error::EmptySignal);
    }
    if n == 1 {
        return Ok(vec![samples[0].abs()]);
    }

    let fft = FFT_PLANNER.with(|p| p.borrow_mut().plan_fft_forward(n));
    let mut input = fft.make_input_vec();
    let mut spectrum = fft.make_output_vec();

    input.copy_from_slice(samples);
    fft.process(&mut input, &mut spectrum)
        .map_err(|e| Error::Fft(e.to_string()))?;

    Ok(spectrum
        .iter()
        .take(positive_bin_count(n))
        .map(|c| c.norm())
        .collect())
}

impl SpectralProfile {
    /// Rectangular-window magnitude spectrum of `samples`.
    pub fn compute(samples: &[f64], sample_rate: f64) -> Result<Self> {
        let magnitudes = magnitude_spectrum(samples)?;
        let resolution = sample_rate / samples.len() as f64;
        let frequencies = (0..magnitudes.len()).map(|k| k as f64 * resolution).collect();
        Ok(Self {
            frequencies,
            magnitudes,
            resolution,
            sample_rate,
        })
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Nearest bin index for `frequency`, clamped to the available bins.
    pub fn bin_for(&self, frequency: f64) -> usize {
        if self.magnitudes.is_empty() || self.resolution <= 0.0 {
            return 0;
        }
        let bin = (frequency / self.resolution).round().max(0.0) as usize;
        bin.min(self.magnitudes.len() - 1)
    }

    /// Index of the strongest bin, ignoring DC.
    pub fn peak_bin(&self) -> Option<usize> {
        self.magnitudes
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    }

    /// `(frequency, magnitude)` of the strongest non-DC bin.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.peak_bin()
            .map(|i| (self.frequencies[i], self.magnitudes[i]))
    }

    /// Bins whose frequency is at most `max_freq`, as `(frequency, magnitude)` pairs.
    pub fn points_up_to(&self, max_freq: f64) -> Vec<[f64; 2]> {
        self.frequencies
            .iter()
            .zip(&self.magnitudes)
            .take_while(|(f, _)| **f <= max_freq)
            .map(|(&f, &m)| [f, m])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tone(freq: f64, sample_rate: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * freq * i as f64 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        let sample_rate = 1000.0;
        let n = 2000;
        for freq in [2.0, 5.0, 50.0, 123.5] {
            let spec = SpectralProfile::compute(&tone(freq, sample_rate, n), sample_rate).unwrap();
            let expected = (freq * n as f64 / sample_rate).round() as usize;
            assert_eq!(spec.peak_bin(), Some(expected), "{freq} Hz");
            assert_eq!(spec.bin_for(freq), expected);
        }
    }

    #[test]
    fn test_bin_centred_sine_magnitude() {
        // A bin-centred unit sine has |X_k| = n/2.
        let n = 1024;
        let spec = SpectralProfile::compute(&tone(64.0, 1024.0, n), 1024.0).unwrap();
        let (f, mag) = spec.peak().unwrap();
        assert!((f - 64.0).abs() < 1e-9);
        assert!((mag - n as f64 / 2.0).abs() < 1e-6, "mag {mag}");
    }

    #[test]
    fn test_bin_layout() {
        let spec = SpectralProfile::compute(&vec![0.0; 10], 100.0).unwrap();
        assert_eq!(spec.len(), 5);
        assert!((spec.resolution - 10.0).abs() < 1e-12);
        assert_eq!(spec.frequencies, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        let odd = SpectralProfile::compute(&vec![0.0; 9], 90.0).unwrap();
        assert_eq!(odd.len(), 5);
    }

    #[test]
    fn test_dc_magnitude() {
        let spec = SpectralProfile::compute(&vec![0.5; 8], 8.0).unwrap();
        assert!((spec.magnitudes[0] - 4.0).abs() < 1e-12);
        assert!(spec.magnitudes[1..].iter().all(|&m| m < 1e-12));
    }

    #[test]
    fn test_points_up_to() {
        let spec = SpectralProfile::compute(&vec![1.0; 100], 100.0).unwrap();
        let pts = spec.points_up_to(10.0);
        assert_eq!(pts.len(), 11);
        assert_eq!(pts[10][0], 10.0);
    }

    #[test]
    fn test_empty_and_single() {
        assert!(matches!(SpectralProfile::compute(&[], 1.0), Err(Error::EmptySignal)));
        let one = SpectralProfile::compute(&[-3.0], 1.0).unwrap();
        assert_eq!(one.magnitudes, vec![3.0]);
        assert_eq!(one.peak(), None);
    }
}
