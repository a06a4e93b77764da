//! Shipped games built on the round engine.

pub mod celebrity;
