//! Commander damage tracking.
//!
//! Commander damage is recorded per ordered (receiver, source) pair. Damage
//! from different sources is never combined when judging elimination.

pub mod matrix;

pub use matrix::CommanderDamage;
