use crate::issue_tracking::domain::{Component, ComponentId, ComponentTree};
use std::collections::HashMap;

enum IndexState {
    Pending,
    Built(HashMap<String, ComponentId>),
}

/// LeafIndex service resolving component keys to the leaves of the project tree
///
/// The index is built by a single post-order walk on the first lookup and
/// reused for every later lookup. A run that never resolves a component
/// never walks the tree.
pub struct LeafIndex<'t> {
    tree: &'t ComponentTree,
    state: IndexState,
}

impl<'t> LeafIndex<'t> {
    pub fn new(tree: &'t ComponentTree) -> Self {
        Self {
            tree,
            state: IndexState::Pending,
        }
    }

    pub fn is_built(&self) -> bool {
        matches!(self.state, IndexState::Built(_))
    }

    /// Returns the leaf registered under `component_key`, if the tree has one
    pub fn resolve(&mut self, component_key: &str) -> Option<&'t Component> {
        let tree = self.tree;
        if let IndexState::Pending = self.state {
            self.state = IndexState::Built(Self::build(tree));
        }
        match &self.state {
            IndexState::Built(leaves) => leaves.get(component_key).map(|id| tree.get(*id)),
            IndexState::Pending => None,
        }
    }

    fn build(tree: &ComponentTree) -> HashMap<String, ComponentId> {
        let mut leaves = HashMap::new();
        tree.visit_leaves(|id, component| {
            leaves.insert(component.key().to_string(), id);
        });
        leaves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue_tracking::domain::ComponentType;

    fn tree() -> ComponentTree {
        let mut tree = ComponentTree::new(Component::new(
            "proj",
            "uuid-p",
            "Project",
            ComponentType::Project,
        ));
        let dir = tree.add_child(
            tree.root_id(),
            Component::new("proj:src", "uuid-d", "src", ComponentType::Directory),
        );
        tree.add_child(
            dir,
            Component::new("proj:src/A.java", "uuid-a", "A.java", ComponentType::File),
        );
        tree
    }

    #[test]
    fn test_index_is_not_built_until_first_lookup() {
        let tree = tree();
        let index = LeafIndex::new(&tree);
        assert!(!index.is_built());
    }

    #[test]
    fn test_resolve_leaf() {
        let tree = tree();
        let mut index = LeafIndex::new(&tree);

        let component = index.resolve("proj:src/A.java").unwrap();
        assert_eq!(component.name(), "A.java");
        assert!(index.is_built());
    }

    #[test]
    fn test_index_is_built_once_across_lookups() {
        let tree = tree();
        let mut index = LeafIndex::new(&tree);
        let first = index.resolve("proj:src/A.java").map(|c| c as *const Component);

        // a rebuild would drop this entry
        let leaf_id = match &mut index.state {
            IndexState::Built(leaves) => {
                let id = leaves["proj:src/A.java"];
                leaves.insert("proj:alias".to_string(), id);
                id
            }
            IndexState::Pending => panic!("index should be built after a lookup"),
        };

        assert!(index.resolve("proj:src/Deleted.java").is_none());
        let alias = index.resolve("proj:alias").map(|c| c as *const Component);
        let again = index.resolve("proj:src/A.java").map(|c| c as *const Component);

        assert_eq!(alias, Some(tree.get(leaf_id) as *const Component));
        assert_eq!(again, first);
    }

    #[test]
    fn test_resolve_unknown_key_is_absent() {
        let tree = tree();
        let mut index = LeafIndex::new(&tree);
        assert!(index.resolve("proj:src/Deleted.java").is_none());
        assert!(index.is_built());
    }

    #[test]
    fn test_non_leaf_components_are_not_indexed() {
        let tree = tree();
        let mut index = LeafIndex::new(&tree);
        assert!(index.resolve("proj:src").is_none());
        assert!(index.resolve("proj").is_none());
    }
}
