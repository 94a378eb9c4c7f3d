use crate::board::Score;
use ego_tree::{NodeId, NodeRef, Tree};

/// Receives a callback for every node the search explores.
///
/// `on_enter` is called before a node is evaluated and `on_exit` with the score the search
/// backed up for it. Calls are always balanced. The unit type is the no-op observer.
pub trait SearchObserver<T> {
    /// Called when the search descends into a node labelled `label`.
    fn on_enter(&mut self, _label: &T) {}

    /// Called when the search leaves the most recently entered node.
    fn on_exit(&mut self, _score: Score) {}
}

impl<T> SearchObserver<T> for () {}

/// A single explored node in a [`SearchTrace`].
#[derive(Debug, Clone, PartialEq)]
pub struct TraceNode<T> {
    /// The state or move this node stands for. `None` for the root.
    pub label: Option<T>,
    /// The score backed up for this node, once the search has left it.
    pub score: Option<Score>,
}

/// Records the tree actually explored by a search.
///
/// Mostly useful for debugging and for comparing how much of the tree different search
/// strategies visit.
pub struct SearchTrace<T> {
    tree: Tree<TraceNode<T>>,
    stack: Vec<NodeId>,
}

impl<T> Default for SearchTrace<T> {
    fn default() -> Self {
        SearchTrace::new()
    }
}

impl<T> SearchTrace<T> {
    /// Creates an empty trace containing only the root.
    pub fn new() -> Self {
        let tree = Tree::new(TraceNode {
            label: None,
            score: None,
        });
        let root_id = tree.root().id();
        Self {
            tree,
            stack: vec![root_id],
        }
    }

    /// Returns the recorded tree.
    pub fn get_tree(&self) -> &Tree<TraceNode<T>> {
        &self.tree
    }

    /// Returns the root of the recorded tree.
    pub fn get_root(&self) -> NodeRef<'_, TraceNode<T>> {
        self.tree.root()
    }

    /// Number of explored nodes, not counting the root.
    pub fn node_count(&self) -> usize {
        self.tree.nodes().count() - 1
    }

    /// Length of the longest explored line, in plies.
    pub fn depth(&self) -> usize {
        fn depth_of<T>(node: NodeRef<'_, TraceNode<T>>) -> usize {
            node.children().map(|child| depth_of(child) + 1).max().unwrap_or(0)
        }
        depth_of(self.tree.root())
    }

    /// Records the score of the root once the search has finished.
    pub fn set_root_score(&mut self, score: Score) {
        self.tree.root_mut().value().score = Some(score);
    }
}

impl<T: Clone> SearchObserver<T> for SearchTrace<T> {
    fn on_enter(&mut self, label: &T) {
        let parent_id = match self.stack.last() {
            Some(id) => *id,
            None => self.tree.root().id(),
        };
        let new_id = match self.tree.get_mut(parent_id) {
            Some(mut parent) => parent
                .append(TraceNode {
                    label: Some(label.clone()),
                    score: None,
                })
                .id(),
            None => return,
        };
        self.stack.push(new_id);
    }

    fn on_exit(&mut self, score: Score) {
        // The root stays on the stack; its score is set by `set_root_score`.
        if self.stack.len() <= 1 {
            return;
        }
        if let Some(id) = self.stack.pop() {
            if let Some(mut node) = self.tree.get_mut(id) {
                node.value().score = Some(score);
            }
        }
    }
}
