//! Process diagram derived from the transition table
//!
//! Data-only mirror of the order workflow for rendering (the admin board
//! header and any BPMN-style visualization). Built from the same edge table
//! the state machine enforces, so a diagram can never drift from the rules.

use super::machine::{Action, EDGES};
use crate::models::OrderStatus;
use serde::Serialize;

/// Node kind in the process diagram
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Start,
    Stage,
    End,
}

/// One node of the process diagram
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProcessNode {
    pub id: String,
    pub label: &'static str,
    pub kind: NodeKind,
    /// The status this node represents; `None` for start/end markers
    pub status: Option<OrderStatus>,
}

/// One directed edge of the process diagram
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProcessEdge {
    pub from: String,
    pub to: String,
    /// The workflow action guarding this edge; `None` for the start edge
    pub action: Option<Action>,
}

/// The full process diagram
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProcessGraph {
    pub nodes: Vec<ProcessNode>,
    pub edges: Vec<ProcessEdge>,
}

fn status_node_id(status: OrderStatus) -> String {
    format!("stage:{}", status.wire_name())
}

/// Build the diagram from the transition table
///
/// One stage node per order status plus explicit start and end markers.
/// Self-edges (receipt confirmation) are kept: they render as a loop on the
/// delivered stage.
pub fn process_graph() -> ProcessGraph {
    let mut nodes = vec![ProcessNode {
        id: "start".to_string(),
        label: "Order placed",
        kind: NodeKind::Start,
        status: None,
    }];

    for status in OrderStatus::ALL {
        nodes.push(ProcessNode {
            id: status_node_id(status),
            label: status.label(),
            kind: NodeKind::Stage,
            status: Some(status),
        });
    }

    nodes.push(ProcessNode {
        id: "end".to_string(),
        label: "Closed",
        kind: NodeKind::End,
        status: None,
    });

    let mut edges = vec![ProcessEdge {
        from: "start".to_string(),
        to: status_node_id(OrderStatus::PendingConfirmation),
        action: None,
    }];

    for (from, action, to, _) in EDGES {
        edges.push(ProcessEdge {
            from: status_node_id(*from),
            to: status_node_id(*to),
            action: Some(*action),
        });
    }

    for terminal in [OrderStatus::Delivered, OrderStatus::Cancelled] {
        edges.push(ProcessEdge {
            from: status_node_id(terminal),
            to: "end".to_string(),
            action: None,
        });
    }

    ProcessGraph { nodes, edges }
}

/// The action an admin board move between two stage columns maps to
///
/// `None` means no edge connects the columns and the move must be rejected.
pub fn action_between(from: OrderStatus, to: OrderStatus) -> Option<Action> {
    EDGES
        .iter()
        .find(|(f, action, t, _)| *f == from && *t == to && *action != Action::ConfirmReceipt)
        .map(|(_, action, _, _)| *action)
}
