// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use super::generator::{generate, FieldSpectrum, SurrogateGenerator, IMAGINARY_TOLERANCE};
use crate::error::{DegenerateStage, SurrogateError};
use crate::preprocessing::{FieldStatistics, Window2D};
use crate::spectral::{amplitude, SpectralTransform, FFT2D};
use crate::utility::test_fields::FieldGenerator;
use ndarray::{Array2, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(test)]
mod tests {
    use super::*;

    // Amplitude spectrum of a sample after removing its own mean
    fn sample_amplitude(sample: ArrayView2<f64>) -> Array2<f64> {
        let mean = sample.mean().unwrap();
        let centered = sample.mapv(|v| v - mean);
        amplitude(&FFT2D::new().forward(&centered))
    }

    fn max_abs_difference(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
        a.iter()
            .zip(b.iter())
            .fold(0.0, |acc, (x, y)| f64::max(acc, (x - y).abs()))
    }

    fn sine_field() -> Array2<f64> {
        Array2::from_shape_fn((8, 8), |(_, x)| {
            (2.0 * std::f64::consts::PI * x as f64 / 8.0).sin()
        })
    }

    #[test]
    fn test_sine_field_keeps_spectrum_and_variance() {
        let field = sine_field();
        let input = FieldStatistics::of(&field).unwrap();
        let expected_amplitude = sample_amplitude(field.view());

        let mut rng = StdRng::seed_from_u64(2019);
        let batch = generate(&field, 3, false, &mut rng).unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.samples.dim(), (3, 8, 8));
        assert_eq!(batch.used_spectra.dim(), (3, 8, 8));

        for sample in batch.samples.axis_iter(Axis(0)) {
            let std = sample.std(0.0);
            assert!(
                ((std - input.std) / input.std).abs() < 0.01,
                "sample std {} vs input std {}",
                std,
                input.std
            );

            let amp = sample_amplitude(sample);
            let diff = max_abs_difference(&amp, &expected_amplitude);
            assert!(diff < 1e-6, "amplitude mismatch {}", diff);
        }
    }

    #[test]
    fn test_noise_field_restores_mean_variance_and_amplitude() {
        let mut fields = FieldGenerator::new(99);
        for &(ny, nx) in &[(12, 10), (9, 12), (7, 7), (1, 16)] {
            let field = fields.gaussian_field(ny, nx, 2.0).mapv(|v| v + 3.5);

            let mut generator = SurrogateGenerator::from_seed(1);
            let batch = generator.generate(&field, 5, true).unwrap();

            let mut windowed = field.clone();
            Window2D::hamming(ny, nx).apply(&mut windowed);
            let windowed_stats = FieldStatistics::of(&windowed).unwrap();
            assert_eq!(batch.statistics, windowed_stats);

            let expected_amplitude = sample_amplitude(windowed.view());
            let peak = expected_amplitude.iter().cloned().fold(0.0, f64::max);

            for (i, sample) in batch.samples.axis_iter(Axis(0)).enumerate() {
                let mean = sample.mean().unwrap();
                let std = sample.std(0.0);
                assert!(
                    (mean - windowed_stats.mean).abs() < 1e-9 * windowed_stats.mean.abs().max(1.0),
                    "{}x{} sample {} mean {} vs {}",
                    ny,
                    nx,
                    i,
                    mean,
                    windowed_stats.mean
                );
                assert!((std - windowed_stats.std).abs() < 1e-9 * windowed_stats.std);

                let amp = sample_amplitude(sample);
                assert!(max_abs_difference(&amp, &expected_amplitude) < 1e-9 * peak);

                assert!(batch.imaginary_residuals[i] < IMAGINARY_TOLERANCE);
            }
        }
    }

    #[test]
    fn test_used_spectra_share_the_original_modulus() {
        let field = FieldGenerator::new(4).gaussian_field(6, 8, 1.0);
        let mut rng = StdRng::seed_from_u64(8);
        let batch = generate(&field, 2, false, &mut rng).unwrap();

        let original_amplitude = amplitude(&batch.original_spectrum);
        for spectrum in batch.used_spectra.axis_iter(Axis(0)) {
            let used_amplitude = spectrum.mapv(|c| c.norm());
            assert!(max_abs_difference(&used_amplitude, &original_amplitude) < 1e-9);
        }

        // Original spectrum is the transform of the mean-removed field
        let mean = field.mean().unwrap();
        let expected = FFT2D::new().forward(&field.mapv(|v| v - mean));
        for (a, b) in batch.original_spectrum.iter().zip(expected.iter()) {
            assert!((a - b).norm() < 1e-9);
        }
    }

    #[test]
    fn test_constant_field_is_degenerate() {
        let field = Array2::from_elem((4, 4), 5.0);
        let mut rng = StdRng::seed_from_u64(0);

        match generate(&field, 1, false, &mut rng) {
            Err(SurrogateError::DegenerateField { stage, std }) => {
                assert_eq!(stage, DegenerateStage::Original);
                assert_eq!(std, 0.0);
            }
            other => panic!("expected DegenerateField, got {:?}", other),
        }
    }

    #[test]
    fn test_overflowing_variance_is_a_domain_error() {
        // Every value is finite but the squared deviations overflow
        let field = Array2::from_shape_fn((4, 4), |(y, x)| {
            if (y + x) % 2 == 0 {
                1e300
            } else {
                -1e300
            }
        });
        let mut rng = StdRng::seed_from_u64(0);

        match generate(&field, 1, false, &mut rng) {
            Err(SurrogateError::Domain { reason }) => assert!(reason.contains("too large")),
            other => panic!("expected Domain, got {:?}", other),
        }
    }

    #[test]
    fn test_large_offset_field_is_not_degenerate() {
        let field = Array2::from_shape_fn((8, 8), |(y, x)| {
            if (y + x) % 2 == 0 {
                1e13 + 1.0
            } else {
                1e13 - 1.0
            }
        });
        let mut rng = StdRng::seed_from_u64(4);

        let batch = generate(&field, 2, false, &mut rng).unwrap();
        assert!((batch.statistics.std - 1.0).abs() < 1e-3);
        for sample in batch.samples.axis_iter(Axis(0)) {
            assert!((sample.std(0.0) - 1.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_sample_stage_is_reported_with_its_index() {
        let err = SurrogateError::DegenerateField {
            stage: DegenerateStage::Sample(3),
            std: 0.0,
        };
        assert!(err.to_string().contains("sample 3"));
    }

    #[test]
    fn test_single_cell_field_is_degenerate() {
        let field = Array2::from_elem((1, 1), 2.0);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(&field, 1, true, &mut rng),
            Err(SurrogateError::DegenerateField { .. })
        ));
    }

    #[test]
    fn test_zero_samples_returns_empty_batch() {
        let field = sine_field();
        let mut rng = StdRng::seed_from_u64(0);
        let batch = generate(&field, 0, false, &mut rng).unwrap();

        assert!(batch.is_empty());
        assert_eq!(batch.samples.dim(), (0, 8, 8));
        assert_eq!(batch.used_spectra.dim(), (0, 8, 8));
        assert_eq!(batch.original_spectrum.dim(), (8, 8));
        assert!(batch.imaginary_residuals.is_empty());
    }

    #[test]
    fn test_empty_dimensions_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for shape in [(0, 4), (4, 0), (0, 0)] {
            let field = Array2::<f64>::zeros(shape);
            assert!(matches!(
                generate(&field, 1, true, &mut rng),
                Err(SurrogateError::Domain { .. })
            ));
        }
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut field = sine_field();
            field[[2, 5]] = bad;

            match generate(&field, 1, false, &mut rng) {
                Err(SurrogateError::NonFiniteInput { row, col, .. }) => {
                    assert_eq!((row, col), (2, 5));
                }
                other => panic!("expected NonFiniteInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_same_seed_gives_identical_batches() {
        let field = FieldGenerator::new(17).gaussian_field(10, 10, 1.0);

        let first = SurrogateGenerator::from_seed(123)
            .generate(&field, 4, true)
            .unwrap();
        let second = SurrogateGenerator::from_seed(123)
            .generate(&field, 4, true)
            .unwrap();
        let other = SurrogateGenerator::from_seed(124)
            .generate(&field, 4, true)
            .unwrap();

        assert_eq!(first.samples, second.samples);
        assert_eq!(first.used_spectra, second.used_spectra);
        assert_ne!(first.samples, other.samples);
    }

    #[test]
    fn test_input_field_is_not_modified() {
        let field = FieldGenerator::new(5).gaussian_field(8, 6, 1.0);
        let copy = field.clone();

        let mut generator = SurrogateGenerator::from_seed(3);
        let first = generator.generate(&field, 1, true).unwrap();
        let second = generator.generate(&field, 1, true).unwrap();

        assert_eq!(field, copy);
        assert_eq!(first.statistics, second.statistics);
    }

    #[test]
    fn test_stream_matches_batch() {
        let field = FieldGenerator::new(21).gaussian_field(9, 8, 1.0);

        let batch = SurrogateGenerator::from_seed(55)
            .generate(&field, 3, true)
            .unwrap();

        let mut generator = SurrogateGenerator::from_seed(55);
        let streamed: Vec<_> = generator
            .stream(&field, true)
            .unwrap()
            .take(3)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(streamed.len(), 3);
        for (i, sample) in streamed.iter().enumerate() {
            assert_eq!(sample.field, batch.samples.index_axis(Axis(0), i));
            assert_eq!(sample.spectrum, batch.used_spectra.index_axis(Axis(0), i));
        }
    }

    #[test]
    fn test_field_spectrum_can_be_reused() {
        let field = sine_field();
        let mut transform = FFT2D::new();
        let spectrum = FieldSpectrum::estimate(&field, false, &mut transform).unwrap();

        let mut rng = StdRng::seed_from_u64(31);
        let a = spectrum.synthesize(0, &mut rng, &mut transform).unwrap();
        let b = spectrum.synthesize(1, &mut rng, &mut transform).unwrap();

        assert_eq!(a.field.dim(), (8, 8));
        assert_ne!(a.spectrum, b.spectrum);
        assert_eq!(spectrum.amplitude().dim(), (8, 8));
        assert!((spectrum.statistics().mean).abs() < 1e-12);
    }
}
