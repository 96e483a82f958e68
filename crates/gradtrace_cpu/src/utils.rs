/// `factors[d]` is the number of elements spanned by one step along dimension `d`
/// of a contiguous row-major array with the given `dims`.
#[inline(always)]
pub(crate) fn compute_factors(dims: &[usize]) -> Vec<usize> {
    let mut factors = vec![1; dims.len()];
    for d in (0..dims.len()).rev() {
        if d + 1 < dims.len() {
            factors[d] = factors[d + 1] * dims[d + 1];
        }
    }
    factors
}

/// Maps the linear row-major index `i` to an element offset under `strides`.
#[inline(always)]
pub(crate) fn compute_offset(i: usize, factors: &[usize], strides: &[usize]) -> usize {
    let mut offset = 0;
    let mut rem = i;
    for (&factor, &stride) in factors.iter().zip(strides.iter()) {
        offset += (rem / factor) * stride;
        rem %= factor;
    }
    offset
}

#[inline(always)]
pub(crate) fn is_contiguous(dims: &[usize], strides: &[usize]) -> bool {
    let mut acc = 1;
    for d in (0..dims.len()).rev() {
        if dims[d] != 1 && strides[d] != acc {
            return false;
        }
        acc *= dims[d];
    }
    true
}
