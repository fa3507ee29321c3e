//! Linked Data Platform interactions: request shapes, response metadata and
//! the operations of [`crate::SolidClient`].

pub mod link;
pub mod metadata;
pub mod patch;
pub mod request;
pub mod response;
pub mod target;
pub mod vocab;

mod verbs;
