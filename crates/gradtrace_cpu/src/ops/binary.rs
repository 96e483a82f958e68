use crate::{
    arith::Arith,
    utils::{compute_factors, compute_offset, is_contiguous},
};
use rayon::prelude::*;

fn binary_map<T, F>(dims: &[usize], lhs_strides: &[usize], rhs_strides: &[usize], lhs: &[T], rhs: &[T], out: &mut [T], op: F)
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Send + Sync,
{
    debug_assert_eq!(dims.len(), lhs_strides.len());
    debug_assert_eq!(dims.len(), rhs_strides.len());
    debug_assert_eq!(dims.iter().product::<usize>(), out.len());

    let lhs_cont = lhs.len() == out.len() && is_contiguous(dims, lhs_strides);
    let rhs_cont = rhs.len() == out.len() && is_contiguous(dims, rhs_strides);

    if lhs_cont && rhs_cont {
        out.par_iter_mut()
            .zip(lhs.par_iter().zip(rhs.par_iter()))
            .for_each(|(out_val, (&l, &r))| *out_val = op(l, r));
        return;
    }

    let factors = compute_factors(dims);
    out.par_iter_mut().enumerate().for_each(|(i, out_val)| {
        let lhs_idx = if lhs_cont { i } else { compute_offset(i, &factors, lhs_strides) };
        let rhs_idx = if rhs_cont { i } else { compute_offset(i, &factors, rhs_strides) };

        *out_val = op(lhs[lhs_idx], rhs[rhs_idx]);
    });
}

macro_rules! binary_op {
    ($name:ident, $method:ident) => {
        /// Elementwise kernel writing `out[i] = lhs[i'] op rhs[i'']` for every row-major
        /// index `i` of `dims`, where `i'`/`i''` are resolved through the operand strides.
        ///
        /// A stride of `0` repeats an operand along that dimension, which is how
        /// broadcasting reaches the kernel. `out` must hold exactly `dims.iter().product()`
        /// elements and every strided offset must be in bounds for its operand.
        /// Integer results saturate.
        pub fn $name<T: Arith>(dims: &[usize], lhs_strides: &[usize], rhs_strides: &[usize], lhs: &[T], rhs: &[T], out: &mut [T]) {
            binary_map(dims, lhs_strides, rhs_strides, lhs, rhs, out, T::$method);
        }
    };
}

binary_op!(add, arith_add);
binary_op!(mul, arith_mul);
