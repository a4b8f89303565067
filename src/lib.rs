// src/lib.rs
pub mod config;
pub mod handler;
pub mod health;
