//! Navigation state machine: a back-stack of [`Route`]s.
//!
//! The stack starts at `welcome` and is never left empty: popping at the
//! root is a no-op, and `pop_up_to` only ever runs as part of a push.

use crate::error::NavError;
use crate::route::{Route, RouteKind};

static ROOT: Route = Route::Welcome;

/// Pop entries before a push, as far as the most recent `kind` (or the
/// oldest one when `oldest` is set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo {
    /// Destination to pop back to.
    pub kind: RouteKind,
    /// Also pop the matching entry itself.
    pub inclusive: bool,
    /// Match the entry nearest the root instead of the top.
    pub oldest: bool,
}

/// Stack adjustments applied by [`Navigator::navigate_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Entries to pop before pushing.
    pub pop_up_to: Option<PopUpTo>,
    /// Skip the push when the target already sits on top.
    pub single_top: bool,
}

impl NavOptions {
    /// Pop back to `kind` (and `kind` itself when `inclusive`) before pushing.
    #[must_use]
    pub fn pop_up_to(kind: RouteKind, inclusive: bool) -> Self {
        NavOptions {
            pop_up_to: Some(PopUpTo {
                kind,
                inclusive,
                oldest: false,
            }),
            single_top: false,
        }
    }

    /// Like [`NavOptions::pop_up_to`], but clears everything above the first
    /// `kind` on the stack, so duplicates pushed later go too.
    #[must_use]
    pub fn pop_up_to_oldest(kind: RouteKind, inclusive: bool) -> Self {
        NavOptions {
            pop_up_to: Some(PopUpTo {
                kind,
                inclusive,
                oldest: true,
            }),
            single_top: false,
        }
    }

    /// Also skip the push when the target is already on top.
    #[must_use]
    pub fn single_top(mut self) -> Self {
        self.single_top = true;
        self
    }
}

/// Back-stack of visited routes, most recent last.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// Create a new navigator with `welcome` as the root route.
    pub fn new() -> Self {
        Navigator {
            stack: vec![Route::Welcome],
        }
    }

    /// Return the route currently at the top of the stack.
    #[must_use]
    pub fn current(&self) -> &Route {
        // The stack is never empty (new() seeds it; back() guards depth > 1).
        self.stack.last().unwrap_or(&ROOT)
    }

    /// Push `route`.
    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Apply `options` to the stack, then push `route`.
    ///
    /// When `pop_up_to` names a destination that is not on the stack nothing
    /// is popped.
    pub fn navigate_with(&mut self, route: Route, options: NavOptions) {
        if let Some(target) = options.pop_up_to {
            self.pop_up_to(target);
        }
        if options.single_top && self.stack.last() == Some(&route) {
            return;
        }
        self.stack.push(route);
    }

    /// Parse `path` and push the resulting route.
    pub fn navigate_to_path(&mut self, path: &str) -> Result<(), NavError> {
        let route = Route::parse(path)?;
        self.navigate(route);
        Ok(())
    }

    /// Pop the top route. Returns `false` (and does nothing) at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Every entry, root first.
    #[must_use]
    pub fn back_stack(&self) -> &[Route] {
        &self.stack
    }

    /// Return the number of entries currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` when any entry is of `kind`.
    #[must_use]
    pub fn contains(&self, kind: RouteKind) -> bool {
        self.stack.iter().any(|route| route.kind() == kind)
    }

    fn pop_up_to(&mut self, target: PopUpTo) {
        let matches = |r: &Route| r.kind() == target.kind;
        let found = if target.oldest {
            self.stack.iter().position(matches)
        } else {
            self.stack.iter().rposition(matches)
        };
        if let Some(pos) = found {
            let keep = if target.inclusive { pos } else { pos.saturating_add(1) };
            self.stack.truncate(keep);
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
