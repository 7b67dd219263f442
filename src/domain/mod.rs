//! Domain layer types and invariants.

pub mod assets;
pub mod icons;
pub mod request;
pub mod theme;
