//! The scalar node of the computation graph.
//!
//! A [`Value`] is a shared handle to one node: its scalar value, the gradient
//! accumulated by the backward pass, the operands it was derived from and the
//! [`Op`] tag selecting its backward rule. Cloning a `Value` clones the handle,
//! not the node, so the same operand can be reachable from several parents and
//! the whole graph is released together when the last handle is dropped.

use crate::autograd::Op;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

pub mod arithmetic;
pub mod autograd_methods;

/// Internal node state. Only reachable through a [`Value`] handle.
#[derive(Debug)]
pub(crate) struct ValueData {
    pub(crate) value: f64,
    pub(crate) gradient: f64,
    /// Operand edges, in the order the operation received them.
    /// Duplicates are kept: `x + x` has two edges to `x`.
    pub(crate) operands: Vec<Value>,
    pub(crate) op: Op,
    pub(crate) label: String,
}

impl Drop for ValueData {
    /// Releases uniquely owned operands iteratively; long chains would
    /// otherwise recurse once per node and overflow the stack.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(operand) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(operand.0) {
                let mut data = cell.into_inner();
                pending.append(&mut data.operands);
            }
        }
    }
}

/// Stable identity of a node, valid while any handle to it is alive.
///
/// Two handles share a `NodeId` exactly when they point to the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a scalar node in the autograd computation graph.
#[derive(Clone)]
pub struct Value(pub(crate) Rc<RefCell<ValueData>>);

impl Value {
    /// Creates a leaf node (no operands) with a zero gradient.
    pub fn new(value: f64) -> Self {
        Value::from_op(value, Vec::new(), Op::Leaf)
    }

    /// Creates a labelled leaf node. The label is only used for diagnostics.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        let v = Value::new(value);
        v.set_label(label);
        v
    }

    /// Creates a derived node. Operand count is checked against the op's arity
    /// in debug builds here, and unconditionally by the backward pass.
    pub(crate) fn from_op(value: f64, operands: Vec<Value>, op: Op) -> Self {
        debug_assert_eq!(
            operands.len(),
            op.arity(),
            "operation {:?} built with the wrong operand count",
            op
        );
        Value(Rc::new(RefCell::new(ValueData {
            value,
            gradient: 0.0,
            operands,
            op,
            label: String::new(),
        })))
    }

    pub(crate) fn read(&self) -> Ref<'_, ValueData> {
        self.0.borrow()
    }

    /// Returns the stable identity of this node.
    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.0) as usize)
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn value(&self) -> f64 {
        self.read().value
    }

    /// Overwrites the scalar value.
    ///
    /// Meant for optimizer steps on parameters. Derived nodes keep the value
    /// they were computed with; run a new forward pass to see the effect.
    pub fn set_value(&self, value: f64) {
        self.0.borrow_mut().value = value;
    }

    /// Returns the accumulated gradient of the last backward root with respect to this node.
    pub fn gradient(&self) -> f64 {
        self.read().gradient
    }

    pub(crate) fn set_gradient(&self, gradient: f64) {
        self.0.borrow_mut().gradient = gradient;
    }

    pub(crate) fn accumulate_gradient(&self, contribution: f64) {
        self.0.borrow_mut().gradient += contribution;
    }

    pub fn op(&self) -> Op {
        self.read().op
    }

    /// Returns the operand edges of this node, duplicates included.
    pub fn operands(&self) -> Vec<Value> {
        self.read().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read().operands.is_empty()
    }

    pub fn label(&self) -> String {
        self.read().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.0.borrow_mut().label = label.into();
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::new(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl PartialEq for Value {
    /// Identity comparison: two handles are equal when they share a node.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read();
        f.debug_struct("Value")
            .field("value", &data.value)
            .field("gradient", &data.gradient)
            .field("op", &data.op)
            .field("label", &data.label)
            .field("operands", &data.operands.len())
            .finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read();
        write!(f, "Value(value={}, label={})", data.value, data.label)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
