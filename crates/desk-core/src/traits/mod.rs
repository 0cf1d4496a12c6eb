//! Trait seams between the desk core and its callers.

mod desk;

pub use desk::Desk;
