use crate::value::{Value, ValueData};
use std::cell::RefCell;
use std::collections::HashSet;

/// One entry of the explicit DFS stack: either a node whose operands still
/// need scheduling, or a node whose operands are done and which can be
/// appended to the order.
enum Frame {
    Enter(Value),
    Exit(Value),
}

/// Builds a topological sort of the computation graph reachable from
/// `root`: for every node, all of its operands appear strictly before it.
/// Used by `backward()` to process nodes in the correct order.
///
/// Depth-first post-order with a `HashSet` keyed on node identity
/// (pointer address), so a node reachable through several paths is
/// appended exactly once. The traversal uses an explicit work stack
/// instead of call recursion: the graph of a long training chain can be
/// far deeper than the call stack allows. O(V+E).
pub(crate) fn topo_sort(root: &Value) -> Vec<Value> {
    let mut sorted: Vec<Value> = Vec::new();
    let mut visited: HashSet<*const RefCell<ValueData>> = HashSet::new();
    let mut stack = vec![Frame::Enter(root.clone())];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(node) => {
                if !visited.insert(node.as_ptr()) {
                    continue;
                }
                // Operands are scheduled above the Exit marker, so the node
                // itself is only appended after every operand has been.
                stack.push(Frame::Exit(node.clone()));
                for operand in node.borrow_data().prev.iter() {
                    stack.push(Frame::Enter(operand.clone()));
                }
            }
            Frame::Exit(node) => sorted.push(node),
        }
    }
    sorted
}
