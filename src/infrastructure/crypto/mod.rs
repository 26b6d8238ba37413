//! Cryptographic helpers for authentication

pub mod jwt;
pub mod password;
