pub mod scheduler;
pub mod surface;

// f64: canvas-scale coordinates with 1000 substeps per frame put the
// per-substep displacement below the f32 ulp at a few hundred pixels
pub type V2 = nalgebra::Vector2<f64>;
