use crate::geometry::Sphere;
use crate::math::*;

use tracing::warn;

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    // at most one object in the scene
    pub sphere: Option<Sphere>,
    pub background: Color,
    // fixed point the shading normal is measured from, see `NormalProxyIntegrator`
    pub normal_offset: Vec3,
}

impl World {
    pub const REFERENCE_SPHERE: Sphere = Sphere {
        center: Point3::new(0.0, 0.0, -3.0),
        radius: 1.0,
    };
    pub const REFERENCE_BACKGROUND: Color = Color::new(0.2, 0.2, 0.2);
    pub const REFERENCE_NORMAL_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 5.0);

    pub fn new(sphere: Option<Sphere>, background: Color, normal_offset: Vec3) -> Self {
        if sphere.is_none() {
            warn!("world has no sphere, every pixel will be background");
        }
        World {
            sphere,
            background,
            normal_offset,
        }
    }

    /// Single unit sphere three units down the -z axis over a dark grey background.
    pub fn reference() -> Self {
        World::new(
            Some(World::REFERENCE_SPHERE),
            World::REFERENCE_BACKGROUND,
            World::REFERENCE_NORMAL_OFFSET,
        )
    }

    pub fn empty(background: Color) -> Self {
        World::new(None, background, World::REFERENCE_NORMAL_OFFSET)
    }
}

impl Default for World {
    fn default() -> Self {
        World::reference()
    }
}
