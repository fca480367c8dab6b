use std::fmt::Display;

use tracing::{trace, warn};

use crate::{ActionResult, BehaviorNode, Status};

type ActionFn<O, A> = Box<dyn Fn(&O) -> ActionResult<A>>;
type PredicateFn<O> = Box<dyn Fn(&O) -> bool>;

/// Ticks `children` in order and returns the first result whose status `halts`.
///
/// If nothing halts, the result of the last child is returned as is, so its action
/// goes up with it. With no children at all, the result is `vacuous` without an action.
///
/// [`SequenceNode`] halts on anything but `Success`, [`SelectorNode`] on anything but `Failure`.
pub fn tick_children<O, A>(
    children: &[Box<dyn BehaviorNode<O, A>>],
    observation: &O,
    vacuous: Status,
    halts: impl Fn(Status) -> bool,
) -> ActionResult<A> {
    let mut last_result = ActionResult::new(vacuous);
    for (i, child) in children.iter().enumerate() {
        let result = child.tick(observation);
        if halts(result.status) {
            trace!(child = i, status = ?result.status, "halted");
            return result;
        }
        last_result = result;
    }
    trace!(children = children.len(), status = ?last_result.status, "exhausted");
    last_result
}

/// A leaf that hands the observation to a function and returns whatever it says.
pub struct ActionNode<O, A> {
    f: ActionFn<O, A>,
}

impl<O, A> ActionNode<O, A> {
    pub fn new(f: impl Fn(&O) -> ActionResult<A> + 'static) -> Self {
        Self { f: Box::new(f) }
    }

    /// Wraps a function that may fail. An `Err` is reported as a `Failure` without an action.
    pub fn try_new<E: Display>(f: impl Fn(&O) -> Result<ActionResult<A>, E> + 'static) -> Self {
        Self::new(move |observation| {
            f(observation).unwrap_or_else(|e| {
                warn!(error = %e, "action failed");
                ActionResult::failure()
            })
        })
    }
}

impl<O, A> BehaviorNode<O, A> for ActionNode<O, A> {
    fn tick(&self, observation: &O) -> ActionResult<A> {
        (self.f)(observation)
    }
}

/// A leaf that checks a predicate.
///
/// It is `Success` when the predicate holds and `Failure` otherwise.
/// There is nowhere to put an action in this node, so it fits in a tree of any action type.
pub struct ConditionNode<O> {
    predicate: PredicateFn<O>,
}

impl<O> ConditionNode<O> {
    pub fn new(predicate: impl Fn(&O) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }

    /// Wraps a predicate that may fail. An `Err` counts as the condition not holding.
    pub fn try_new<E: Display>(predicate: impl Fn(&O) -> Result<bool, E> + 'static) -> Self {
        Self::new(move |observation| {
            predicate(observation).unwrap_or_else(|e| {
                warn!(error = %e, "condition failed");
                false
            })
        })
    }
}

impl<O, A> BehaviorNode<O, A> for ConditionNode<O> {
    fn tick(&self, observation: &O) -> ActionResult<A> {
        if (self.predicate)(observation) {
            ActionResult::success()
        } else {
            ActionResult::failure()
        }
    }
}

/// Swaps `Success` and `Failure` of its child. `Running` and the action pass through.
pub struct InverterNode<O, A> {
    child: Box<dyn BehaviorNode<O, A>>,
}

impl<O, A> InverterNode<O, A> {
    pub fn new(child: Box<dyn BehaviorNode<O, A>>) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &dyn BehaviorNode<O, A> {
        self.child.as_ref()
    }
}

impl<O, A> BehaviorNode<O, A> for InverterNode<O, A> {
    fn tick(&self, observation: &O) -> ActionResult<A> {
        self.child.tick(observation).invert()
    }
}

/// Ticks children in order while they succeed.
///
/// A `Failure` or `Running` child stops the sequence and its result is returned.
/// If every child succeeds, the last child's result is returned.
/// An empty sequence succeeds.
pub struct SequenceNode<O, A> {
    children: Vec<Box<dyn BehaviorNode<O, A>>>,
}

impl<O, A> Default for SequenceNode<O, A> {
    fn default() -> Self {
        Self { children: vec![] }
    }
}

impl<O, A> SequenceNode<O, A> {
    pub fn new(children: Vec<Box<dyn BehaviorNode<O, A>>>) -> Self {
        Self { children }
    }

    pub fn add_child(&mut self, node: Box<dyn BehaviorNode<O, A>>) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Box<dyn BehaviorNode<O, A>>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<O, A> BehaviorNode<O, A> for SequenceNode<O, A> {
    fn tick(&self, observation: &O) -> ActionResult<A> {
        tick_children(&self.children, observation, Status::Success, |status| {
            !status.is_success()
        })
    }
}

/// Ticks children in order until one of them doesn't fail.
///
/// A `Success` or `Running` child stops the selector and its result is returned.
/// A running child wins over the siblings after it, they are not tried.
/// If every child fails, the last child's result is returned.
/// An empty selector fails.
pub struct SelectorNode<O, A> {
    children: Vec<Box<dyn BehaviorNode<O, A>>>,
}

impl<O, A> Default for SelectorNode<O, A> {
    fn default() -> Self {
        Self { children: vec![] }
    }
}

impl<O, A> SelectorNode<O, A> {
    pub fn new(children: Vec<Box<dyn BehaviorNode<O, A>>>) -> Self {
        Self { children }
    }

    pub fn add_child(&mut self, node: Box<dyn BehaviorNode<O, A>>) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Box<dyn BehaviorNode<O, A>>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<O, A> BehaviorNode<O, A> for SelectorNode<O, A> {
    fn tick(&self, observation: &O) -> ActionResult<A> {
        tick_children(&self.children, observation, Status::Failure, |status| {
            !status.is_failure()
        })
    }
}
