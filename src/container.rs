use tracing::debug;

use crate::{
    error::{TickError, TickResult},
    BehaviorNode,
};

/// Holds the root of a behavior tree and forwards ticks to it.
///
/// A tree can be created without a root and get one later with [`BehaviorTree::set_root`].
/// Ticking it before that is an error ([`TickError::MissingRoot`]) rather than a `Failure`,
/// so that a forgotten root can't be mistaken for a decision.
pub struct BehaviorTree<O, A> {
    root: Option<Box<dyn BehaviorNode<O, A>>>,
}

impl<O, A> Default for BehaviorTree<O, A> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<O, A> BehaviorTree<O, A> {
    pub fn new(root: impl BehaviorNode<O, A> + 'static) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Replaces the root, returning the previous one if there was any.
    pub fn set_root(
        &mut self,
        root: impl BehaviorNode<O, A> + 'static,
    ) -> Option<Box<dyn BehaviorNode<O, A>>> {
        self.root.replace(Box::new(root))
    }

    pub fn take_root(&mut self) -> Option<Box<dyn BehaviorNode<O, A>>> {
        self.root.take()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    pub fn root(&self) -> Option<&dyn BehaviorNode<O, A>> {
        self.root.as_deref()
    }

    pub fn tick(&self, observation: &O) -> TickResult<A> {
        let root = self.root.as_ref().ok_or(TickError::MissingRoot)?;
        let res = root.tick(observation);
        debug!(status = ?res.status, has_action = res.action.is_some(), "tick");
        Ok(res)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ActionResult, ConditionNode, SequenceNode, Status};

    #[test]
    fn test_missing_root() {
        let tree = BehaviorTree::<(), ()>::default();
        assert!(!tree.has_root());
        assert_eq!(tree.tick(&()), Err(TickError::MissingRoot));
    }

    #[test]
    fn test_set_root() {
        let mut tree = BehaviorTree::<bool, ()>::default();
        assert!(tree.set_root(ConditionNode::new(|v: &bool| *v)).is_none());
        assert_eq!(tree.tick(&true), Ok(ActionResult::success()));
        assert_eq!(tree.tick(&false), Ok(ActionResult::failure()));

        let previous = tree.set_root(SequenceNode::default());
        assert!(previous.is_some());
        assert_eq!(tree.tick(&false).map(|res| res.status), Ok(Status::Success));

        assert!(tree.take_root().is_some());
        assert_eq!(tree.tick(&false), Err(TickError::MissingRoot));
    }

    #[test]
    fn test_boxed_root() {
        let root: Box<dyn BehaviorNode<i32, i32>> =
            Box::new(crate::ActionNode::new(|v: &i32| ActionResult::success_with(*v)));
        let tree = BehaviorTree::new(root);
        assert!(tree.root().is_some());
        assert_eq!(tree.tick(&3), Ok(ActionResult::success_with(3)));
    }
}
