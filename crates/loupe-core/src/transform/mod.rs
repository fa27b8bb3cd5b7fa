//! Inset transform — magnification factor and the loupe clip/transform pair.

pub mod inset;
pub mod magnification;
