//! Shorthands for building a tree in one expression.
//!
//! Each function boxes the node it builds, so the results can go straight into
//! the child list of [`sequence`] or [`selector`].
//!
//! ```rust
//! use behavior_tree_action::{builder::*, ActionResult, BehaviorNode};
//!
//! let root = selector(vec![
//!     sequence(vec![
//!         condition(|v: &i32| *v % 2 == 0),
//!         action(|_: &i32| ActionResult::success_with("even")),
//!     ]),
//!     inverter(condition(|v: &i32| *v < 0)),
//! ]);
//! assert_eq!(root.tick(&4).action, Some("even"));
//! assert_eq!(root.tick(&3).action, None);
//! ```

use crate::{
    ActionNode, ActionResult, BehaviorNode, ConditionNode, InverterNode, SelectorNode,
    SequenceNode,
};

pub type BoxedNode<O, A> = Box<dyn BehaviorNode<O, A>>;

pub fn action<O: 'static, A: 'static>(
    f: impl Fn(&O) -> ActionResult<A> + 'static,
) -> BoxedNode<O, A> {
    Box::new(ActionNode::new(f))
}

pub fn condition<O: 'static, A: 'static>(f: impl Fn(&O) -> bool + 'static) -> BoxedNode<O, A> {
    Box::new(ConditionNode::new(f))
}

pub fn inverter<O: 'static, A: 'static>(child: BoxedNode<O, A>) -> BoxedNode<O, A> {
    Box::new(InverterNode::new(child))
}

pub fn sequence<O: 'static, A: 'static>(children: Vec<BoxedNode<O, A>>) -> BoxedNode<O, A> {
    Box::new(SequenceNode::new(children))
}

pub fn selector<O: 'static, A: 'static>(children: Vec<BoxedNode<O, A>>) -> BoxedNode<O, A> {
    Box::new(SelectorNode::new(children))
}
