//! Table cell resolver.
//!
//! Locates a row in an HTML table (by explicit index or by searching a
//! source column), resolves a target column specifier to a concrete index,
//! and extracts, validates, or prepares a click on the target cell. The
//! resolver is pure: it never touches a live page, so the `click` action
//! yields a [`SideEffect`] descriptor for the caller to dispatch.

mod model;
mod options;
mod resolve;

pub use model::{Cell, HeaderCell, Table};
pub use options::{Action, MatchMode, ReturnMode, TableOptions};
pub use resolve::{resolve, Resolution, SideEffect};
