//! `bpd-resolve`: dereferences a sequence's packed references.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`variables`] | `describe_variable_links`                                  |
//! | [`links`]     | `ResolvedLink`, `describe_output_links`                    |
//! | [`label`]     | node, event, and per-kind extra-data label text            |
//! | [`error`]     | `ResolveError`, `Table`, `ResolveResult<T>`                |
//!
//! Every table lookup is bounds-checked and reported as
//! [`ResolveError::IndexOutOfRange`]; nothing is clamped.  The one
//! non-error gap is an output link pointing at a disconnected behavior slot,
//! which [`describe_output_links`] omits.

pub mod error;
pub mod label;
pub mod links;
pub mod variables;


pub use error::{ResolveError, ResolveResult, Table};
pub use label::{behavior_label, behavior_title, event_label, event_title, extra_data};
pub use links::{describe_output_links, ResolvedLink};
pub use variables::describe_variable_links;
