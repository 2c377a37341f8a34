// src/application/ports/mod.rs
pub mod tags;
