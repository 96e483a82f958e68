use crate::error::{Error, Result};

/// Shape and row-major strides of a contiguous array.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl Layout {
    pub fn from_shape(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            strides: Self::compute_strides(shape),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn size(&self) -> usize {
        Self::compute_size(&self.shape)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Strides that read this layout as if it had `target` shape.
    ///
    /// Leading dimensions missing from `self` and dimensions of size 1 that are
    /// stretched get a stride of `0`, so the same element is revisited.
    pub fn broadcast_strides(&self, target: &[usize]) -> Result<Vec<usize>> {
        if target.len() < self.ndim() {
            return Err(Error::IncompatibleShape {
                lhs: self.shape.clone(),
                rhs: target.to_vec(),
            });
        }

        let rank_diff = target.len() - self.ndim();
        let mut strides = vec![0; target.len()];
        for (d, (&dim, &stride)) in self.shape.iter().zip(self.strides.iter()).enumerate() {
            let target_dim = target[d + rank_diff];
            if dim == target_dim {
                strides[d + rank_diff] = stride;
            } else if dim != 1 {
                return Err(Error::IncompatibleShape {
                    lhs: self.shape.clone(),
                    rhs: target.to_vec(),
                });
            }
        }

        Ok(strides)
    }

    // helper

    pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
        if shape.is_empty() {
            return vec![];
        }

        let mut strides = vec![1; shape.len()];
        for i in (0..shape.len() - 1).rev() {
            strides[i] = strides[i + 1] * shape[i + 1];
        }
        strides
    }

    pub fn compute_size(shape: &[usize]) -> usize {
        shape.iter().product()
    }

    /// Right-aligned broadcast of two shapes.
    pub fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>> {
        let rank = lhs.len().max(rhs.len());
        let padded_lhs = pad_shape(lhs, rank);
        let padded_rhs = pad_shape(rhs, rank);

        padded_lhs
            .iter()
            .zip(padded_rhs.iter())
            .map(|(&l, &r)| match (l, r) {
                (l, r) if l == r => Ok(l),
                (1, r) => Ok(r),
                (l, 1) => Ok(l),
                _ => Err(Error::IncompatibleShape {
                    lhs: lhs.to_vec(),
                    rhs: rhs.to_vec(),
                }),
            })
            .collect()
    }
}

pub fn pad_shape(shape: &[usize], target_rank: usize) -> Vec<usize> {
    let mut padded = vec![1; target_rank.saturating_sub(shape.len())];
    padded.extend(shape);
    padded
}
