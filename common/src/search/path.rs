use crate::grid::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathNode {
    pub cell: Cell,
    pub parent: Option<NodeId>,
}

/// Arena of search nodes. Parent links always point at earlier entries, so
/// following them from any node ends at the root.
#[derive(Clone, Debug, Default)]
pub struct PathTree {
    nodes: Vec<PathNode>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cell: Cell, parent: Option<NodeId>) -> NodeId {
        debug_assert!(
            parent.is_none_or(|NodeId(i)| i < self.nodes.len()),
            "parent must already be in the tree"
        );

        let id = NodeId(self.nodes.len());
        self.nodes.push(PathNode { cell, parent });
        id
    }

    pub fn get(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cells from the root down to `id`, both ends included.
    pub fn path_to(&self, id: NodeId) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut current = Some(id);

        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.cell);
            current = node.parent;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_walks_parents_back_to_the_root() {
        let mut tree = PathTree::new();
        let root = tree.insert(Cell::new(0, 0), None);
        let a = tree.insert(Cell::new(0, 1), Some(root));
        let _branch = tree.insert(Cell::new(1, 0), Some(root));
        let b = tree.insert(Cell::new(1, 1), Some(a));

        assert_eq!(
            tree.path_to(b),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(tree.path_to(root), vec![Cell::new(0, 0)]);
        assert_eq!(tree.len(), 4);
    }
}
