use crate::{
    arith::Arith,
    utils::{compute_factors, compute_offset},
};

/// Folds `src`, a contiguous array of shape `dims`, into `out` by adding every
/// element at `out[offset]`, where `offset` is resolved through `out_strides`.
///
/// `out_strides` has one entry per dimension of `dims`; dimensions that are summed
/// away carry a stride of `0`. `out` is accumulated into, not overwritten, and
/// integer sums saturate.
pub fn sum_to<T: Arith>(dims: &[usize], out_strides: &[usize], src: &[T], out: &mut [T]) {
    debug_assert_eq!(dims.len(), out_strides.len());
    debug_assert_eq!(dims.iter().product::<usize>(), src.len());

    let factors = compute_factors(dims);
    for (i, &value) in src.iter().enumerate() {
        let offset = compute_offset(i, &factors, out_strides);
        out[offset] = out[offset].arith_add(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_rows() {
        // [2, 3] -> [3]
        let src = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut out = [0.0f64; 3];
        sum_to(&[2, 3], &[0, 1], &src, &mut out);
        assert_eq!(out, [5.0, 7.0, 9.0]);
    }

    #[test]
    fn sum_all() {
        let src = [1u32, 2, 3, 4];
        let mut out = [10u32];
        sum_to(&[2, 2], &[0, 0], &src, &mut out);
        assert_eq!(out, [20]);
    }

    #[test]
    fn sum_saturates() {
        let src = [1u8; 300];
        let mut out = [0u8];
        sum_to(&[300], &[0], &src, &mut out);
        assert_eq!(out, [u8::MAX]);
    }
}
