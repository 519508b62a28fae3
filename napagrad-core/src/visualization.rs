//! Graphviz rendering of computation graphs.
//!
//! Rendering only reads the graph. Values and gradients are shown as they
//! are at call time, so render after `backward` to see gradients.

use crate::autograd::graph::reachable;
use crate::autograd::Op;
use crate::error::NapagradError;
use crate::value::{NodeId, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Layout direction of the rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    /// `LR`: inputs on the left, output on the right.
    #[default]
    LeftRight,
    /// `TB`: inputs at the top.
    TopBottom,
}

impl FromStr for RankDir {
    type Err = NapagradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LR" => Ok(RankDir::LeftRight),
            "TB" => Ok(RankDir::TopBottom),
            _ => Err(NapagradError::UnsupportedOperation(format!(
                "Unsupported rank direction: {} (expected LR or TB)",
                s
            ))),
        }
    }
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankDir::LeftRight => f.write_str("LR"),
            RankDir::TopBottom => f.write_str("TB"),
        }
    }
}

/// Nodes and edges reachable from a root.
#[derive(Debug, Clone)]
pub struct GraphTrace {
    /// Every distinct node, root first.
    pub nodes: Vec<Value>,
    /// `(operand, node)` pairs. A pair appears once even when the node uses
    /// the same operand twice.
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Collects every node reachable from `root` and the operand edges between them.
pub fn trace(root: &Value) -> GraphTrace {
    let nodes = reachable(root);
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for node in &nodes {
        for operand in node.operands() {
            let edge = (operand.id(), node.id());
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    GraphTrace { nodes, edges }
}

fn escape_record(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Renders the graph under `root` as Graphviz DOT text.
///
/// Each value becomes a record node `label | value | gradient` with four
/// decimals. A derived value also gets an ellipse for its operation; edges
/// run operand -> operation -> value.
pub fn render_dot(root: &Value, rankdir: RankDir) -> String {
    let GraphTrace { nodes, edges } = trace(root);
    let mut dot = String::new();
    dot.push_str("digraph napagrad {\n");
    dot.push_str(&format!("  rankdir={};\n", rankdir));

    for node in &nodes {
        let id = node.id();
        dot.push_str(&format!(
            "  \"{}\" [label=\"{{ {} | value {:.4} | gradient {:.4} }}\", shape=record];\n",
            id,
            escape_record(&node.label()),
            node.value(),
            node.gradient()
        ));
        let op = node.op();
        if !op.is_leaf() {
            dot.push_str(&format!("  \"{}{}\" [label=\"{}\"];\n", id, op, op.symbol()));
            dot.push_str(&format!("  \"{}{}\" -> \"{}\";\n", id, op, id));
        }
    }

    let ops: HashMap<NodeId, Op> =
        nodes.iter().map(|n| (n.id(), n.op())).collect();
    for (operand, node) in edges {
        match ops.get(&node) {
            Some(op) if !op.is_leaf() => {
                dot.push_str(&format!("  \"{}\" -> \"{}{}\";\n", operand, node, op));
            }
            _ => dot.push_str(&format!("  \"{}\" -> \"{}\";\n", operand, node)),
        }
    }

    dot.push_str("}\n");
    log::debug!("render_dot: {} nodes", nodes.len());
    dot
}

/// Writes [`render_dot`] output to `path`.
///
/// # Errors
/// [`NapagradError::Io`] if the file cannot be written.
pub fn write_dot(root: &Value, rankdir: RankDir, path: impl AsRef<Path>) -> Result<(), NapagradError> {
    let path = path.as_ref();
    std::fs::write(path, render_dot(root, rankdir))
        .map_err(|e| NapagradError::Io(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
#[path = "visualization_test.rs"]
mod tests;
