//! Additive white Gaussian noise

use crate::error::{Error, Result};
use crate::types::NoisySignal;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Seeded source of i.i.d. `N(0, σ²)` noise.
#[derive(Debug)]
pub struct NoiseInjector {
    rng: StdRng,
    dist: Normal<f64>,
    std_dev: f64,
}

impl NoiseInjector {
    pub fn new(std_dev: f64, seed: u64) -> Result<Self> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(Error::InvalidNoiseLevel(std_dev));
        }
        let dist = Normal::new(0.0, std_dev).map_err(|_| Error::InvalidNoiseLevel(std_dev))?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            dist,
            std_dev,
        })
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Add one noise draw to every sample.
    pub fn inject(&mut self, samples: &[f64]) -> Vec<f64> {
        if self.std_dev == 0.0 {
            return samples.to_vec();
        }
        samples
            .iter()
            .map(|&s| s + self.dist.sample(&mut self.rng))
            .collect()
    }

    /// Corrupt `clean` and keep the realization alongside the result.
    pub fn corrupt(&mut self, clean: &[f64]) -> NoisySignal {
        let samples = self.inject(clean);
        let noise = samples.iter().zip(clean).map(|(n, c)| n - c).collect();
        NoisySignal {
            samples,
            noise,
            noise_level: self.std_dev,
        }
    }
}

/// Add seeded Gaussian noise to `samples`.
pub fn add_noise(samples: &[f64], std_dev: f64, seed: u64) -> Result<Vec<f64>> {
    Ok(NoiseInjector::new(std_dev, seed)?.inject(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_and_variance(x: &[f64]) -> (f64, f64) {
        let n = x.len() as f64;
        let mean = x.iter().sum::<f64>() / n;
        let var = x.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        (mean, var)
    }

    #[test]
    fn test_noise_moments() {
        let sigma = 0.5;
        let n = 100_000;
        let noisy = add_noise(&vec![0.0; n], sigma, 7).unwrap();
        let (mean, var) = mean_and_variance(&noisy);
        // Standard error of the mean is σ/√n ≈ 0.0016; allow ~6 of them.
        assert!(mean.abs() < 0.01, "mean {mean}");
        assert!((var - sigma * sigma).abs() < 0.01, "variance {var}");
    }

    #[test]
    fn test_noise_is_additive() {
        let clean: Vec<f64> = (0..5000).map(|i| (i as f64 * 0.01).sin()).collect();
        let noisy = NoiseInjector::new(0.2, 1).unwrap().corrupt(&clean);
        assert_eq!(noisy.samples.len(), clean.len());
        assert_eq!(noisy.noise.len(), clean.len());
        for i in 0..clean.len() {
            assert!((noisy.samples[i] - clean[i] - noisy.noise[i]).abs() < 1e-12);
        }
        let (mean, var) = mean_and_variance(&noisy.noise);
        assert!(mean.abs() < 0.02, "mean {mean}");
        assert!((var - 0.04).abs() < 0.005, "variance {var}");
    }

    #[test]
    fn test_same_seed_same_noise() {
        let input = vec![1.0; 256];
        let a = add_noise(&input, 0.3, 42).unwrap();
        let b = add_noise(&input, 0.3, 42).unwrap();
        let c = add_noise(&input, 0.3, 43).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_sigma_is_identity() {
        let input = vec![0.25, -1.0, 3.0];
        assert_eq!(add_noise(&input, 0.0, 42).unwrap(), input);
    }

    #[test]
    fn test_rejects_invalid_sigma() {
        assert!(matches!(NoiseInjector::new(-1.0, 0), Err(Error::InvalidNoiseLevel(_))));
        assert!(matches!(NoiseInjector::new(f64::NAN, 0), Err(Error::InvalidNoiseLevel(_))));
    }
}
