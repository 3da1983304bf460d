pub mod boundary;
pub mod error;
pub mod link;
pub mod particle;
pub mod scenario;
pub mod timing;
pub mod world;

// f64 throughout: pixel-scale positions advanced in 1000 substeps per
// frame produce per-substep deltas well below the f32 ulp out at a few
// hundred pixels, which would freeze the integrator
pub type V2 = nalgebra::Vector2<f64>;
