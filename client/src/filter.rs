//! Client-side display filter over a fetched todo list.
//!
//! The server only ever returns the full list in display order; which
//! subset to show is pure presentation state.

use crate::types::Todo;

/// Which todos to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Done,
}

impl Filter {
    /// Does `todo` pass this filter?
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.done,
            Filter::Done => todo.done,
        }
    }

    /// The subset of `todos` to display, preserving server order.
    pub fn apply<'a>(&self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        todos.iter().filter(|t| self.matches(t)).collect()
    }
}

/// How many todos are still open, for the "N left" stat line.
pub fn remaining(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.done).count()
}
