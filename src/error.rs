use thiserror::Error;

/// Errors from ticking a [`crate::BehaviorTree`].
///
/// These are mistakes in how the tree was set up, not decisions of the tree.
/// A tree that decided to fail returns an [`crate::ActionResult`] with `Failure`.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TickError {
    #[error("The behavior tree has no root node")]
    MissingRoot,
}

pub type TickResult<A> = Result<crate::ActionResult<A>, TickError>;
