//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod comment;
pub mod project;
pub mod transfer;
