//! Smoothing curve through the frequency table.
//!
//! Uses a barycentric Lagrange polynomial through every discrete point. A
//! single polynomial of degree `n - 1` reproduces each count exactly but
//! oscillates near the ends of the range as `n` grows (Runge's phenomenon),
//! so the curve is a visual aid only, not a fitted trend.

use super::model::FrequencyTable;
use crate::error::ScanError;

/// Number of evaluation points used when none is configured.
pub const DEFAULT_SAMPLES: usize = 100;

// ---------------------------------------------------------------------------
// SampleCurve
// ---------------------------------------------------------------------------

/// Evenly spaced x-coordinates and the interpolated y at each.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SampleCurve {
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect()
    }
}

// ---------------------------------------------------------------------------
// Barycentric interpolator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BarycentricInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    weights: Vec<f64>,
}

impl BarycentricInterpolator {
    /// `xs` must be strictly increasing and hold at least two nodes.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, ScanError> {
        debug_assert_eq!(xs.len(), ys.len());
        let distinct = xs.len();
        if distinct < 2 || xs.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScanError::InsufficientData { distinct });
        }

        // Node differences are divided by a quarter of the span before
        // multiplying; the common factor cancels in `eval`, and the products
        // stay in range for large node counts.
        let capacity = (xs[distinct - 1] - xs[0]) / 4.0;
        let weights = xs
            .iter()
            .enumerate()
            .map(|(j, &xj)| {
                let prod: f64 = xs
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != j)
                    .map(|(_, &xk)| (xj - xk) / capacity)
                    .product();
                1.0 / prod
            })
            .collect();

        Ok(Self { xs, ys, weights })
    }

    pub fn eval(&self, x: f64) -> f64 {
        let mut num = 0.0;
        let mut den = 0.0;
        for ((&xj, &yj), &wj) in self.xs.iter().zip(&self.ys).zip(&self.weights) {
            let diff = x - xj;
            if diff == 0.0 {
                return yj;
            }
            let term = wj / diff;
            num += term * yj;
            den += term;
        }
        num / den
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// `n` evenly spaced values from `start` to `end`; both ends are exact.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Fit the table and evaluate the curve at `samples` points over its range.
pub fn interpolate(table: &FrequencyTable, samples: usize) -> Result<SampleCurve, ScanError> {
    if table.distinct() < 2 {
        return Err(ScanError::InsufficientData {
            distinct: table.distinct(),
        });
    }

    // Table iteration is already ascending with unique keys.
    let (xs, ys): (Vec<f64>, Vec<f64>) = table.iter().map(|(v, c)| (v.get(), c as f64)).unzip();
    let (min, max) = (xs[0], xs[xs.len() - 1]);
    let interpolator = BarycentricInterpolator::new(xs, ys)?;

    let x = linspace(min, max, samples);
    let y = x.iter().map(|&xi| interpolator.eval(xi)).collect();
    Ok(SampleCurve { x, y })
}
