// src/ops/traits/mod.rs

pub mod numeric;

pub use numeric::{Number, NumberKind};
