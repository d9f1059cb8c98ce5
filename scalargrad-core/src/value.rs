// scalargrad-core/src/value.rs
use crate::autograd::backward_op::Op;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

// --- Internal Data Structure ---

/// Holds the actual data and metadata for one scalar node of the
/// computation graph. Uses Rc<RefCell<...>> for shared ownership and
/// interior mutability.
pub(crate) struct ValueData {
    /// Forward-computed value.
    pub(crate) data: f64,
    /// Accumulated partial derivative of the backward root w.r.t. this node.
    pub(crate) grad: f64,
    /// Ordered operand list: the nodes this node was derived from.
    /// Empty for leaf nodes. These references only point backward in time,
    /// so the graph is acyclic and plain `Rc` reclamation suffices.
    pub(crate) prev: Vec<Value>,
    /// Local gradient rule recorded at construction; `Op::Leaf` is a no-op.
    pub(crate) op: Op,
    /// Optional human-readable expression trace, debugging only.
    pub(crate) label: String,
}

// Manual implementation of Debug: printing `prev` recursively would dump
// the whole upstream graph, so only its length is shown.
impl Debug for ValueData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("num_operands", &self.prev.len())
            .field("op", &self.op)
            .field("label", &self.label)
            .finish()
    }
}

// --- Public Value Wrapper ---

/// The public, user-facing scalar node type.
///
/// Wraps the internal `ValueData` in an `Rc<RefCell<>>` to allow shared
/// ownership and the interior mutability needed for gradient accumulation.
/// Cloning a `Value` clones the handle, not the node: both handles refer to
/// the *same* point of the computation graph.
pub struct Value(pub(crate) Rc<RefCell<ValueData>>);

impl Value {
    /// Creates a leaf node (constant, parameter or input) with the given
    /// value, zero gradient and no operands. Never fails.
    pub fn new(data: f64) -> Self {
        Self::from_op(data, Vec::new(), Op::Leaf, String::new())
    }

    /// Creates a labeled leaf node. The label carries no computational
    /// meaning; builders compose it into the expression trace of derived
    /// nodes.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Self::from_op(data, Vec::new(), Op::Leaf, label.into())
    }

    /// Internal constructor used by the operation builders. The operand
    /// list recorded here IS the dependency edge set of the graph.
    pub(crate) fn from_op(data: f64, prev: Vec<Value>, op: Op, label: String) -> Self {
        Value(Rc::new(RefCell::new(ValueData {
            data,
            grad: 0.0,
            prev,
            op,
            label,
        })))
    }

    // --- Accessors ---

    /// Returns the forward value of this node.
    pub fn value(&self) -> f64 {
        self.0.borrow().data
    }

    /// Returns the accumulated gradient of this node.
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    /// Overwrites the forward value (used by SGD-style parameter updates).
    pub fn set_value(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    /// Overwrites the gradient.
    pub fn set_grad(&self, grad: f64) {
        self.0.borrow_mut().grad = grad;
    }

    /// Resets the gradient of this node to 0 without touching the value or
    /// the graph structure.
    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Adds a contribution to the gradient. Accumulation, never overwrite:
    /// a node consumed by several downstream expressions must end up with
    /// the sum over all paths.
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.0.borrow_mut().grad += contribution;
    }

    /// Returns the expression trace label (empty for unlabeled nodes).
    pub fn label(&self) -> String {
        self.0.borrow().label.clone()
    }

    /// True if the node carries a non-empty trace label. Builders only
    /// compose a trace when an operand carries one: composing eagerly
    /// would make label memory quadratic in chain depth.
    pub(crate) fn has_label(&self) -> bool {
        !self.0.borrow().label.is_empty()
    }

    /// Returns `true` if both handles refer to the same graph node.
    /// Node identity is pointer identity, not value equality.
    pub fn same_node(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Raw pointer used as the node's identity key in graph traversals.
    pub(crate) fn as_ptr(&self) -> *const RefCell<ValueData> {
        Rc::as_ptr(&self.0)
    }

    pub(crate) fn borrow_data(&self) -> Ref<'_, ValueData> {
        self.0.borrow()
    }

    pub(crate) fn borrow_data_mut(&self) -> RefMut<'_, ValueData> {
        self.0.borrow_mut()
    }
}

// Dropping the last handle of a long expression chain would otherwise
// recurse once per node and overflow the stack, just like a recursive
// graph traversal would. Operand lists are drained into an explicit
// queue; nodes still referenced elsewhere are left alone.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut queue: Vec<Value> = self.prev.drain(..).collect();
        while let Some(node) = queue.pop() {
            if let Ok(cell) = Rc::try_unwrap(node.0) {
                let mut data = cell.into_inner();
                queue.extend(data.prev.drain(..));
            }
        }
    }
}

impl Clone for Value {
    /// Cloning a Value clones the handle (shallow clone via Rc); the
    /// underlying node is shared.
    fn clone(&self) -> Self {
        Value(Rc::clone(&self.0))
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value({:?})", self.0.borrow())
    }
}

/// Prints `label | value | grad`, the trace format used when debugging
/// an expression graph by hand.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let td = self.0.borrow();
        write!(f, "{}\t|{}\t| grad = {}", td.label, td.data, td.grad)
    }
}
