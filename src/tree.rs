//! Game tree with per-branch board simulation.
//!
//! Nodes live in an arena owned by [`GameTree`] and refer to each other by
//! [`NodeId`]. The root is always node 0.
//!
//! [`GameTree::simulate`] walks the tree depth-first and gives every node
//! its own copy of the board after that node's moves and setup stones have
//! been applied. Sibling branches never share a board.

use crate::apply::apply_properties;
use crate::board::Board;
use crate::node::{Node, NodeId};

/// Identifier of the root node.
pub const ROOT: NodeId = 0;

#[derive(Clone, Debug)]
pub struct GameTree {
    nodes: Vec<Node>,
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GameTree {
    /// Create a tree holding only an empty root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(None)],
        }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a new last child to `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(Some(parent)));
        self.nodes[parent].children.push(id);
        id
    }

    /// Follow first children from the root.
    pub fn main_line(&self) -> Vec<NodeId> {
        let mut line = vec![ROOT];
        let mut id = ROOT;
        while let Some(&child) = self.nodes[id].children.first() {
            line.push(child);
            id = child;
        }
        line
    }

    /// Simulate the whole tree on a fresh board of `size`.
    ///
    /// Resets the root's annotation, marks it as main line and fills in
    /// `board`, `moves_made` and `is_main_line` for every node.
    pub fn simulate(&mut self, size: usize) {
        let root = &mut self.nodes[ROOT];
        root.board = Some(Board::new(size));
        root.moves_made = 0;
        root.is_main_line = true;

        let mut pending = vec![ROOT];
        while let Some(start) = pending.pop() {
            let mut id = start;
            loop {
                self.update(id);
                match self.nodes[id].children.len() {
                    0 => break,
                    1 => {
                        let child = self.nodes[id].children[0];
                        self.copy_state_to_child(id, child);
                        id = child;
                    }
                    _ => {
                        let children = self.nodes[id].children.clone();
                        for &child in &children {
                            self.copy_state_to_child(id, child);
                        }
                        pending.extend(children.into_iter().rev());
                        break;
                    }
                }
            }
        }
    }

    /// Apply a node's own properties to the board it inherited.
    fn update(&mut self, id: NodeId) {
        let node = &mut self.nodes[id];
        if let Some(board) = node.board.as_mut() {
            node.moves_made += apply_properties(&node.properties, board);
        }
    }

    fn copy_state_to_child(&mut self, parent: NodeId, child: NodeId) {
        let p = &self.nodes[parent];
        let main_line = p.is_main_line && p.children.first() == Some(&child);
        let board = p.board.clone();
        let moves_made = p.moves_made;

        let c = &mut self.nodes[child];
        c.board = board;
        c.moves_made = moves_made;
        c.is_main_line = main_line;
    }
}
