//! Authentication building blocks: JWT issuing/validation and Argon2
//! password verification.

pub mod jwt;
pub mod password;
