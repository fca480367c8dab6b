//! # behavior-tree-action (Rust crate)
//!
//! A minimal behavior tree interpreter that maps an observation to an action.
//!
//!
//! ## Overview
//!
//! A behavior tree is evaluated once per *tick*. The caller hands the tree a
//! snapshot of the world (the *observation*), the tree walks down from its root
//! following the rules of each node kind, and a result bubbles back up.
//! The result is a [`Status`] and, optionally, an *action* produced by one of the leaves.
//!
//! Both the observation type `O` and the action type `A` are chosen by the user.
//! The crate never looks inside them.
//!
//! Unlike many behavior tree implementations, the nodes in this crate don't keep any state
//! between ticks.
//! A tick takes `&self`, so the shape of the tree is fixed once it is built.
//! If a leaf needs to remember something, it can close over it (with a `Cell`
//! for example), but that is the leaf's business, not the interpreter's.
//!
//!
//! ## How it looks like
//!
//! First, you define the observation and the action.
//!
//! ```rust
//! struct Observation {
//!     enemy_distance: f64,
//!     has_weapon: bool,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Action {
//!     Attack,
//!     FindWeapon,
//! }
//! ```
//!
//! Then build the tree bottom-up, leaves first.
//!
//! ```rust
//! # struct Observation { enemy_distance: f64, has_weapon: bool }
//! # #[derive(Debug, PartialEq)] enum Action { Attack, FindWeapon }
//! use behavior_tree_action::{builder::*, ActionResult, BehaviorTree, Status};
//!
//! let root = sequence(vec![
//!     condition(|obs: &Observation| obs.enemy_distance < 10.),
//!     selector(vec![
//!         sequence(vec![
//!             condition(|obs: &Observation| obs.has_weapon),
//!             action(|_: &Observation| ActionResult::success_with(Action::Attack)),
//!         ]),
//!         action(|_: &Observation| ActionResult::success_with(Action::FindWeapon)),
//!     ]),
//! ]);
//!
//! let tree = BehaviorTree::new(root);
//! ```
//!
//! and call `tick()`.
//!
//! ```rust
//! # struct Observation { enemy_distance: f64, has_weapon: bool }
//! # #[derive(Debug, PartialEq)] enum Action { Attack, FindWeapon }
//! # use behavior_tree_action::{builder::*, ActionResult, BehaviorTree, Status};
//! # let tree = BehaviorTree::new(sequence(vec![
//! #     condition(|obs: &Observation| obs.enemy_distance < 10.),
//! #     selector(vec![
//! #         sequence(vec![
//! #             condition(|obs: &Observation| obs.has_weapon),
//! #             action(|_: &Observation| ActionResult::success_with(Action::Attack)),
//! #         ]),
//! #         action(|_: &Observation| ActionResult::success_with(Action::FindWeapon)),
//! #     ]),
//! # ]));
//! let result = tree
//!     .tick(&Observation { enemy_distance: 5., has_weapon: false })
//!     .unwrap();
//! assert_eq!(result.status, Status::Success);
//! assert_eq!(result.action, Some(Action::FindWeapon));
//! ```
//!
//!
//! ## Node kinds
//!
//! | Node              | Children | Result                                                         |
//! |-------------------|----------|----------------------------------------------------------------|
//! | [`ActionNode`]    | 0        | Whatever the function returns                                  |
//! | [`ConditionNode`] | 0        | `Success` or `Failure`, never an action                        |
//! | [`InverterNode`]  | 1        | Swaps `Success` and `Failure`                                  |
//! | [`SequenceNode`]  | n        | Stops at the first `Failure` or `Running`, else the last result |
//! | [`SelectorNode`]  | n        | Stops at the first `Success` or `Running`, else the last result |
//!
//! `Running` is never swallowed.
//! Every node passes it up unchanged, and both composites stop at it.
//! It means "this is not decided yet, tick me again later".
//! The tree itself does not wait for anything; the caller decides when the next tick happens.
//!
//! An empty [`SequenceNode`] succeeds and an empty [`SelectorNode`] fails.
//!
//!
//! ## How to define your own node
//!
//! The core of the library is the [`BehaviorNode`] trait.
//! Most of the time closures in [`ActionNode`] and [`ConditionNode`] are enough,
//! but you can implement the trait on your own type too.
//!
//! ```rust
//! use behavior_tree_action::{ActionResult, BehaviorNode, Status};
//!
//! struct IsPositive;
//!
//! impl<A> BehaviorNode<i32, A> for IsPositive {
//!     fn tick(&self, observation: &i32) -> ActionResult<A> {
//!         if 0 < *observation {
//!             ActionResult::success()
//!         } else {
//!             ActionResult::failure()
//!         }
//!     }
//! }
//!
//! let res: ActionResult<()> = IsPositive.tick(&3);
//! assert_eq!(res.status, Status::Success);
//! ```
//!
//!
//! ## Errors
//!
//! A tick of a node never fails. Leaf functions given to `new` must be total.
//! If your leaf logic can fail, use [`ActionNode::try_new`] or [`ConditionNode::try_new`];
//! an `Err` becomes a plain `Failure` (and a `warn` event in [`tracing`]),
//! so one broken leaf can't abort the rest of the tick.
//!
//! The only error the crate reports is ticking a [`BehaviorTree`] that has no root,
//! see [`error::TickError`].
//!
//!
//! ## Threads
//!
//! Nothing in the tree is locked, and the nodes are boxed without a `Send` bound,
//! so leaves are free to close over `Rc` or `Cell`.
//! The price is that a tree stays on the thread that built it:
//! [`BehaviorTree`] is neither `Send` nor `Sync`, so it can't be moved to another
//! thread or shared through a `Mutex`.
//! If several threads need to make decisions, build one tree per thread, inside that thread.
//!
//! ```compile_fail
//! # use behavior_tree_action::{builder::action, ActionResult, BehaviorTree};
//! let tree = BehaviorTree::new(action(|v: &i32| ActionResult::success_with(*v)));
//! std::thread::spawn(move || tree.tick(&1));
//! ```
//!
//! ```rust
//! # use behavior_tree_action::{builder::action, ActionResult, BehaviorTree};
//! let handles: Vec<_> = (0..2)
//!     .map(|i| {
//!         std::thread::spawn(move || {
//!             let tree = BehaviorTree::new(action(|v: &i32| ActionResult::success_with(*v)));
//!             tree.tick(&i).unwrap().action
//!         })
//!     })
//!     .collect();
//! let actions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
//! assert_eq!(actions, vec![Some(0), Some(1)]);
//! ```

pub mod builder;
mod container;
pub mod error;
mod nodes;

use serde::{Deserialize, Serialize};

pub use crate::container::BehaviorTree;
pub use crate::nodes::{
    tick_children, ActionNode, ConditionNode, InverterNode, SelectorNode, SequenceNode,
};

/// The outcome category of ticking a node.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Status {
    Success,
    Failure,
    /// The node should keep running in the next tick
    Running,
}

impl Status {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failure)
    }

    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Either `Success` or `Failure`.
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Swaps `Success` and `Failure`. `Running` stays `Running`.
    pub fn invert(self) -> Self {
        match self {
            Self::Success => Self::Failure,
            Self::Failure => Self::Success,
            Self::Running => Self::Running,
        }
    }
}

/// What a node returns from a tick: a status and, if some leaf decided on one, an action.
///
/// There is no rule tying the action to the status.
/// A `Success` can come without an action (a bare condition), and an action node
/// may attach an action to a `Running` or even a `Failure` result.
/// Composites hand up the action together with the status it came with.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult<A> {
    pub status: Status,
    pub action: Option<A>,
}

impl<A> ActionResult<A> {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            action: None,
        }
    }

    pub fn with_action(status: Status, action: A) -> Self {
        Self {
            status,
            action: Some(action),
        }
    }

    pub fn success() -> Self {
        Self::new(Status::Success)
    }

    pub fn failure() -> Self {
        Self::new(Status::Failure)
    }

    pub fn running() -> Self {
        Self::new(Status::Running)
    }

    pub fn success_with(action: A) -> Self {
        Self::with_action(Status::Success, action)
    }

    pub fn running_with(action: A) -> Self {
        Self::with_action(Status::Running, action)
    }

    /// Inverts the status, keeping the action as is.
    pub fn invert(self) -> Self {
        Self {
            status: self.status.invert(),
            action: self.action,
        }
    }

    pub fn into_action(self) -> Option<A> {
        self.action
    }
}

impl<A> From<Status> for ActionResult<A> {
    fn from(status: Status) -> Self {
        Self::new(status)
    }
}

/// The contract every node in a tree implements.
///
/// `tick` may be called any number of times, with a different observation each time.
/// It must not fail; leaves turn their own failures into [`Status::Failure`].
pub trait BehaviorNode<O, A> {
    fn tick(&self, observation: &O) -> ActionResult<A>;
}

impl<O, A, N> BehaviorNode<O, A> for Box<N>
where
    N: BehaviorNode<O, A> + ?Sized,
{
    fn tick(&self, observation: &O) -> ActionResult<A> {
        (**self).tick(observation)
    }
}
