//! SIMD helpers for the indicator engine.
//!
//! These use the `wide` crate for portable SIMD operations.

use wide::f64x4;

/// SIMD-accelerated sum of a slice.
pub fn sum_simd(data: &[f64]) -> f64 {
    let chunks = data.len() / 4;
    let mut simd_sum = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let values = f64x4::new([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        simd_sum += values;
    }

    let mut result = simd_sum.reduce_add();

    // Handle remaining elements
    for &value in &data[(chunks * 4)..] {
        result += value;
    }

    result
}

/// Element-wise `a[i] - b[i]` over the common prefix of both slices.
pub fn sub_simd(a: &[f64], b: &[f64]) -> Vec<f64> {
    let len = a.len().min(b.len());
    let chunks = len / 4;
    let mut result = Vec::with_capacity(len);

    for i in 0..chunks {
        let idx = i * 4;
        let va = f64x4::new([a[idx], a[idx + 1], a[idx + 2], a[idx + 3]]);
        let vb = f64x4::new([b[idx], b[idx + 1], b[idx + 2], b[idx + 3]]);
        result.extend((va - vb).to_array());
    }

    for idx in (chunks * 4)..len {
        result.push(a[idx] - b[idx]);
    }

    result
}
