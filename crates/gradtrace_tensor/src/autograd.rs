use crate::{utils::promotion::promote_buffer, Op, Tensor, TensorId};
use gradtrace_core::{be, buffer::Buffer, dtype::DType, error::Result, layout::Layout};
use std::collections::HashSet;
use tracing::{debug_span, trace};

impl Tensor {
    /// Every node reachable from `self`, each exactly once, parents before children.
    ///
    /// `self` is always the last element. The walk keeps its own stack, so graph
    /// depth is bounded by memory rather than by the call stack.
    pub fn topological_order(&self) -> Vec<Tensor> {
        let mut order = Vec::new();
        let mut visited: HashSet<TensorId> = HashSet::new();
        let mut stack: Vec<(Tensor, bool)> = vec![(self.clone(), false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                order.push(node);
                continue;
            }
            if !visited.insert(node.id()) {
                continue;
            }

            let parents = node.parents();
            stack.push((node, true));
            for parent in parents.into_iter().rev() {
                if !visited.contains(&parent.id()) {
                    stack.push((parent, false));
                }
            }
        }

        order
    }

    /// Fills the gradient of every node reachable from `self`.
    ///
    /// The root's gradient is overwritten with ones; every other gradient is
    /// accumulated into, so gradients from earlier calls are kept unless
    /// [`zero_grad`](Self::zero_grad) is called in between.
    ///
    /// # Examples
    /// ```
    /// use gradtrace_tensor::Tensor;
    ///
    /// let a = Tensor::new(2.0f32);
    /// let b = Tensor::new(3.0f32);
    /// let c = &a * &b;
    /// c.backward().unwrap();
    /// assert_eq!(a.grad().to_flatten_vec::<f32>().unwrap(), vec![3.0]);
    /// ```
    pub fn backward(&self) -> Result<()> {
        let order = self.topological_order();
        let _span = debug_span!("backward", root = %self.id(), nodes = order.len()).entered();

        self.set_grad_buffer(Buffer::ones(self.size(), self.dtype()));
        for node in order.iter().rev() {
            if !node.is_leaf() {
                trace!(id = %node.id(), op = node.op_label(), "propagate");
            }
            node.propagate()?;
        }

        Ok(())
    }

    /// Applies this node's gradient rule once, pushing its gradient into its operands.
    ///
    /// Does nothing for leaves. [`backward`](Self::backward) calls this in the right
    /// order; calling it directly accumulates again on every call.
    pub fn propagate(&self) -> Result<()> {
        match self.op() {
            Op::Leaf => Ok(()),
            Op::Add { lhs, rhs } => {
                let grad = self.grad_buffer().clone();

                lhs.accumulate_grad(&grad, self.layout())?;
                rhs.accumulate_grad(&grad, self.layout())
            }
            Op::Mul { lhs, rhs } => {
                let grad = self.grad_buffer().clone();
                let dtype = grad.dtype();

                let (lhs_grad, lhs_layout) =
                    be::ops::binary::mul(&promote_buffer(rhs, dtype), rhs.layout(), &grad, self.layout())?;
                let (rhs_grad, rhs_layout) =
                    be::ops::binary::mul(&promote_buffer(lhs, dtype), lhs.layout(), &grad, self.layout())?;

                lhs.accumulate_grad(&lhs_grad, &lhs_layout)?;
                rhs.accumulate_grad(&rhs_grad, &rhs_layout)
            }
        }
    }

    /// Resets the gradient of every node reachable from `self` to zeros.
    pub fn zero_grad(&self) -> Result<()> {
        let order = self.topological_order();
        for node in &order {
            node.set_grad_buffer(Buffer::zeros(node.size(), node.dtype()));
        }

        trace!(root = %self.id(), nodes = order.len(), "zero_grad");
        Ok(())
    }

    // `contribution` has the shape of the consuming node; it is reduced over the
    // broadcast dimensions and cast back to this node's dtype.
    fn accumulate_grad(&self, contribution: &Buffer, layout: &Layout) -> Result<()> {
        // bool values carry no gradient
        if self.dtype() == DType::BOOL {
            return Ok(());
        }

        let reduced = be::ops::reduction::sum_to_shape(contribution, layout, self.shape())?;
        let reduced = reduced.to_dtype(self.dtype());
        let (sum, _) = be::ops::binary::add(&self.grad_buffer(), self.layout(), &reduced, self.layout())?;
        self.set_grad_buffer(sum);

        Ok(())
    }
}
