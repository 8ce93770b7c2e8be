// src/engine/mod.rs
pub mod config;
pub mod render;
