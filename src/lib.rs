pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod math;
pub mod parsing;
pub mod ppm;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod tonemap;
pub mod vec2d;
pub mod world;
