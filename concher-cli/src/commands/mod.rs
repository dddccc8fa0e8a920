//! One module per interpreter verb. Every handler takes the [`Interpreter`]
//! and reports failure through [`CommandError`].
//!
//! [`Interpreter`]: crate::interpreter::Interpreter
//! [`CommandError`]: crate::interpreter::CommandError

pub mod add;
pub mod help;
pub mod list;
pub mod open;
pub mod register;
pub mod remove;
