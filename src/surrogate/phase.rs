// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-surrogate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Random phases with Hermitian symmetry
//!
//! A spectrum whose phase satisfies `phase[N - k] = -phase[k] (mod 2π)` along
//! each axis (and whose amplitude is that of a real field) inverse-transforms
//! to a real field. The 2D phase used by the generator is the broadcast sum
//! of one such vector per axis:
//!
//! ```text
//! phase(y, x) = phase_y[y] + phase_x[x]
//! ```
//!
//! This separable structure is a modeling choice. A fully independent 2D
//! random phase field would randomize every frequency pair of the half plane
//! separately; the sum of two 1D vectors only spans `Nx + Ny` degrees of
//! freedom and so reproduces an isotropic random-phase surrogate only
//! approximately.

use std::f64::consts::{PI, TAU};

use ndarray::{Array1, Array2};
use rand::Rng;

/// Draw a phase vector of length `n` that is anti-symmetric about index 0.
///
/// * `phase[0]` is exactly 0.
/// * `phase[k]` for `1 <= k < n/2` (and `k = (n-1)/2` for odd `n`) is uniform in `[0, 2π)`.
/// * `phase[n - k] = -phase[k]` for all those `k`.
/// * For even `n`, the Nyquist index `n/2` is its own mirror, so it is drawn
///   from `{0, π}`, the only angles equal to their own negation modulo 2π.
pub fn hermitian_phase<R: Rng>(n: usize, rng: &mut R) -> Array1<f64> {
    let mut phase = Array1::zeros(n);
    if n < 2 {
        return phase;
    }

    let half = n / 2;
    let paired = if n % 2 == 0 { half - 1 } else { half };

    for k in 1..=paired {
        let angle = rng.random_range(0.0..TAU);
        phase[k] = angle;
        phase[n - k] = -angle;
    }

    if n % 2 == 0 {
        phase[half] = if rng.random_bool(0.5) { PI } else { 0.0 };
    }

    phase
}

/// Broadcast two 1D phase vectors into a `(ny, nx)` grid
pub fn separable_phase(phase_y: &Array1<f64>, phase_x: &Array1<f64>) -> Array2<f64> {
    Array2::from_shape_fn((phase_y.len(), phase_x.len()), |(y, x)| {
        phase_y[y] + phase_x[x]
    })
}

/// Draw a full `(ny, nx)` phase grid, the x vector first, then the y vector
pub fn random_phase_grid<R: Rng>(ny: usize, nx: usize, rng: &mut R) -> Array2<f64> {
    let phase_x = hermitian_phase(nx, rng);
    let phase_y = hermitian_phase(ny, rng);
    separable_phase(&phase_y, &phase_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wrapped(angle: f64) -> f64 {
        let r = angle.rem_euclid(TAU);
        // Treat values just below 2π as 0
        if (TAU - r).abs() < 1e-12 {
            0.0
        } else {
            r
        }
    }

    #[test]
    fn test_phase_is_anti_symmetric_for_even_and_odd_lengths() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=17 {
            for _ in 0..20 {
                let phase = hermitian_phase(n, &mut rng);
                assert_eq!(phase.len(), n);
                assert_eq!(phase[0], 0.0);
                for k in 1..n {
                    let sum = wrapped(phase[n - k] + phase[k]);
                    assert!(sum.abs() < 1e-12, "n = {}, k = {}, sum = {}", n, k, sum);
                }
            }
        }
    }

    #[test]
    fn test_randomized_entries_lie_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let phase = hermitian_phase(9, &mut rng);
        for k in 1..=4 {
            assert!(phase[k] >= 0.0 && phase[k] < TAU);
        }
    }

    #[test]
    fn test_nyquist_is_self_conjugate() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_pi = false;
        let mut seen_zero = false;
        for _ in 0..64 {
            let phase = hermitian_phase(8, &mut rng);
            if phase[4] == PI {
                seen_pi = true;
            } else {
                assert_eq!(phase[4], 0.0);
                seen_zero = true;
            }
        }
        assert!(seen_pi && seen_zero);
    }

    #[test]
    fn test_separable_grid_is_broadcast_sum() {
        let phase_y = Array1::from(vec![0.0, 1.0, -1.0]);
        let phase_x = Array1::from(vec![0.0, 0.5, 2.0, -2.0, -0.5]);
        let grid = separable_phase(&phase_y, &phase_x);

        assert_eq!(grid.dim(), (3, 5));
        assert_eq!(grid[[1, 2]], 3.0);
        assert_eq!(grid[[2, 4]], -1.5);
    }

    #[test]
    fn test_grid_is_anti_symmetric_in_2d() {
        let mut rng = StdRng::seed_from_u64(5);
        let (ny, nx) = (6, 7);
        let grid = random_phase_grid(ny, nx, &mut rng);

        for ((y, x), &p) in grid.indexed_iter() {
            let mirror = grid[[(ny - y) % ny, (nx - x) % nx]];
            assert!(wrapped(p + mirror).abs() < 1e-12);
        }
    }
}
