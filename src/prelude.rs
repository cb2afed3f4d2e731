pub use crate::camera::ViewportCamera;
pub use crate::geometry::Sphere;
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::integrator::NormalProxyIntegrator;
pub use crate::math::*;
pub use crate::parsing::config::Config;
pub use crate::ppm::OutputTarget;
pub use crate::profile::Profile;
pub use crate::renderer::{Film, NaiveRenderer, Renderer};
pub use crate::tonemap::{Clamp, Tonemapper, Truncate};
pub use crate::vec2d::Vec2D;
pub use crate::world::World;
