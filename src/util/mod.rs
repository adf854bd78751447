//! Utility modules

pub mod buffer;
