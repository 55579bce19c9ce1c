use std::collections::VecDeque;

use super::path::NodeId;

/// Which end of the frontier the next node is taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    Fifo,
    Lifo,
}

#[derive(Clone, Debug)]
pub struct Frontier {
    nodes: VecDeque<NodeId>,
    discipline: Discipline,
}

impl Frontier {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            nodes: VecDeque::new(),
            discipline,
        }
    }

    pub fn push(&mut self, id: NodeId) {
        self.nodes.push_back(id);
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        match self.discipline {
            Discipline::Fifo => self.nodes.pop_front(),
            Discipline::Lifo => self.nodes.pop_back(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
