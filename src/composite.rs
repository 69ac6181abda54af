//! Conditional loop combinators
//!
//! Packages a `while` loop as a reusable value: an action paired with a
//! guard condition. [`DoWhile`] tests after each pass (the action always
//! runs at least once); [`WhileDo`] tests first (the action may never run).
//!
//! Both closures usually share the state the loop works on, so wrap it in a
//! `RefCell` (or split it so each closure owns its piece).
//!
//! # Example
//!
//! ```rust
//! use eddy::composite::do_while;
//! use std::cell::RefCell;
//!
//! let queue = RefCell::new(vec!["a", "b", "c"]);
//! do_while(
//!     || { queue.borrow_mut().remove(0); },
//!     || !queue.borrow().is_empty(),
//! )
//! .run();
//! assert!(queue.borrow().is_empty());
//! ```

/// Post-test loop: run the action, then repeat while the condition holds.
#[derive(Clone, Debug)]
pub struct DoWhile<A, C> {
    action: A,
    condition: C,
}

impl<A: FnMut(), C: FnMut() -> bool> DoWhile<A, C> {
    /// Pair an action with its guard condition.
    pub fn new(action: A, condition: C) -> Self {
        Self { action, condition }
    }

    /// Execute the loop. The action runs at least once.
    pub fn run(&mut self) {
        loop {
            (self.action)();
            if !(self.condition)() {
                break;
            }
        }
    }
}

/// Create a post-test loop from an action and a condition.
pub fn do_while<A: FnMut(), C: FnMut() -> bool>(action: A, condition: C) -> DoWhile<A, C> {
    DoWhile::new(action, condition)
}

/// Pre-test loop: repeat the action while the condition holds.
#[derive(Clone, Debug)]
pub struct WhileDo<C, A> {
    condition: C,
    action: A,
}

impl<C: FnMut() -> bool, A: FnMut()> WhileDo<C, A> {
    /// Pair a guard condition with its action.
    pub fn new(condition: C, action: A) -> Self {
        Self { condition, action }
    }

    /// Execute the loop. The action may run zero times.
    pub fn run(&mut self) {
        while (self.condition)() {
            (self.action)();
        }
    }
}

/// Create a pre-test loop from a condition and an action.
pub fn while_do<C: FnMut() -> bool, A: FnMut()>(condition: C, action: A) -> WhileDo<C, A> {
    WhileDo::new(condition, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_do_while_drains_list() {
        let list = RefCell::new(vec!["a", "b", "c", "d"]);
        do_while(
            || { list.borrow_mut().remove(0); },
            || !list.borrow().is_empty(),
        )
        .run();
        assert!(list.borrow().is_empty());
    }

    #[test]
    fn test_do_while_runs_at_least_once() {
        let mut count = 0;
        do_while(|| count += 1, || false).run();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_do_while_counted_condition() {
        let mut list = vec!["a", "b", "c", "d"];
        {
            let mut remaining = 2;
            let mut loop_ = do_while(
                || { list.remove(0); },
                move || {
                    remaining -= 1;
                    remaining > 0
                },
            );
            loop_.run();
        }
        // Two passes remove "a" and "b", leaving the tail untouched.
        assert_eq!(list, vec!["c", "d"]);
    }

    #[test]
    fn test_while_do_may_run_zero_times() {
        let mut count = 0;
        while_do(|| false, || count += 1).run();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_while_do_drains_list() {
        let list = RefCell::new(vec![1, 2, 3]);
        let removed = Cell::new(0);
        WhileDo::new(
            || removed.get() < 3,
            || {
                list.borrow_mut().remove(0);
                removed.set(removed.get() + 1);
            },
        )
        .run();
        assert!(list.borrow().is_empty());
    }
}
