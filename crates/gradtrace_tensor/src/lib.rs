//! Traced tensors and the reverse-mode engine that differentiates them.
//!
//! Every operation on a [`Tensor`] computes its value eagerly and records an [`Op`]
//! naming the rule and the operands it was built from. [`Tensor::backward`] walks
//! that record from the root back to the leaves and accumulates gradients.

pub mod adapter;
mod autograd;
mod coercion;
mod creation;
mod display;
mod operators;
mod ops;
pub mod utils;
mod vec;

pub use adapter::TensorAdapter;
pub use coercion::IntoTensor;

use gradtrace_core::{buffer::Buffer, dtype::DType, layout::Layout};
use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

// ────────────────────────────────────────────────────────────────────────────
//  Identity
// ────────────────────────────────────────────────────────────────────────────

/// Graph identity of a node. Two nodes holding equal values are still distinct.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorId(usize);

static TENSOR_COUNTER: AtomicUsize = AtomicUsize::new(1);

#[inline]
pub(crate) fn next_tensor_id() -> TensorId {
    TensorId(TENSOR_COUNTER.fetch_add(1, Ordering::Relaxed))
}

impl fmt::Display for TensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
//  Op
// ────────────────────────────────────────────────────────────────────────────

/// The operation that produced a node, together with the operands it consumed.
///
/// The backward pass dispatches on this tag to pick the gradient rule.
#[derive(Clone)]
pub enum Op {
    Leaf,
    Add { lhs: Tensor, rhs: Tensor },
    Mul { lhs: Tensor, rhs: Tensor },
}

impl Op {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Leaf => "",
            Self::Add { .. } => "+",
            Self::Mul { .. } => "*",
        }
    }

    /// Operands in positional order; the same node may appear twice.
    pub fn inputs(&self) -> Vec<&Tensor> {
        match self {
            Self::Leaf => vec![],
            Self::Add { lhs, rhs } | Self::Mul { lhs, rhs } => vec![lhs, rhs],
        }
    }

    fn take_inputs(&mut self) -> Vec<Tensor> {
        match std::mem::replace(self, Self::Leaf) {
            Self::Leaf => vec![],
            Self::Add { lhs, rhs } | Self::Mul { lhs, rhs } => vec![lhs, rhs],
        }
    }
}

impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => write!(f, "Leaf"),
            Self::Add { lhs, rhs } => write!(f, "Add({}, {})", lhs.id(), rhs.id()),
            Self::Mul { lhs, rhs } => write!(f, "Mul({}, {})", lhs.id(), rhs.id()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
//  Tensor
// ────────────────────────────────────────────────────────────────────────────

struct TensorNode {
    id: TensorId,
    buffer: Buffer,
    layout: Layout,
    grad: RefCell<Buffer>,
    op: Op,
}

impl Drop for TensorNode {
    // Unlinks the ancestry iteratively so that dropping a long chain does not
    // recurse once per node.
    fn drop(&mut self) {
        let mut pending = self.op.take_inputs();
        while let Some(tensor) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(tensor.0) {
                pending.extend(node.op.take_inputs());
            }
        }
    }
}

/// A node of the traced graph: a value, its gradient, and the [`Op`] that made it.
///
/// `Tensor` is a shared handle; cloning it does not create a new node. Only the
/// gradient is mutable after construction.
#[derive(Clone)]
pub struct Tensor(Rc<TensorNode>);

impl Tensor {
    pub(crate) fn from_op(buffer: Buffer, layout: Layout, op: Op) -> Self {
        debug_assert_eq!(buffer.len(), layout.size());

        let grad = Buffer::zeros(buffer.len(), buffer.dtype());
        Self(Rc::new(TensorNode {
            id: next_tensor_id(),
            buffer,
            layout,
            grad: RefCell::new(grad),
            op,
        }))
    }

    pub(crate) fn leaf(buffer: Buffer, layout: Layout) -> Self {
        Self::from_op(buffer, layout, Op::Leaf)
    }

    #[inline]
    pub fn id(&self) -> TensorId {
        self.0.id
    }

    // data

    /// The forward value.
    pub fn buffer(&self) -> &Buffer {
        &self.0.buffer
    }

    pub fn layout(&self) -> &Layout {
        &self.0.layout
    }

    pub fn shape(&self) -> &[usize] {
        self.0.layout.shape()
    }

    pub fn ndim(&self) -> usize {
        self.0.layout.ndim()
    }

    pub fn size(&self) -> usize {
        self.0.layout.size()
    }

    pub fn dtype(&self) -> DType {
        self.0.buffer.dtype()
    }

    // graph

    pub fn op(&self) -> &Op {
        &self.0.op
    }

    pub fn op_label(&self) -> &'static str {
        self.0.op.label()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.0.op, Op::Leaf)
    }

    /// Distinct direct inputs of the producing op, in first-use order.
    pub fn parents(&self) -> Vec<Tensor> {
        let mut parents: Vec<Tensor> = Vec::with_capacity(2);
        for input in self.0.op.inputs() {
            if parents.iter().all(|p| p.id() != input.id()) {
                parents.push(input.clone());
            }
        }
        parents
    }

    // grad

    /// A detached leaf holding a copy of the current gradient.
    pub fn grad(&self) -> Tensor {
        Tensor::leaf(self.0.grad.borrow().clone(), self.0.layout.clone())
    }

    pub(crate) fn grad_buffer(&self) -> Ref<'_, Buffer> {
        self.0.grad.borrow()
    }

    pub(crate) fn set_grad_buffer(&self, grad: Buffer) {
        debug_assert_eq!(grad.len(), self.size());
        debug_assert_eq!(grad.dtype(), self.dtype());

        *self.0.grad.borrow_mut() = grad;
    }
}
