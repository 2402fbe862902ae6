//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, PHC string format)
//! - Zeroization of in-memory plaintext

pub mod password;
