use crate::math::*;
use crate::profile::Profile;
use crate::world::World;

/// Shades camera rays by direction of a normal-like vector at the hit point.
///
/// The shading normal is `(P + world.normal_offset).normalized()` instead of
/// `(P - center) / radius`. For the reference world this is what the image has always
/// shown; it only agrees with the true surface normal when `normal_offset` equals the
/// negated sphere center.
pub struct NormalProxyIntegrator {
    pub world: World,
}

impl NormalProxyIntegrator {
    pub fn new(world: World) -> Self {
        NormalProxyIntegrator { world }
    }

    pub fn color(&self, ray: Ray, profile: &mut Profile) -> Color {
        profile.camera_rays += 1;
        let hit = self
            .world
            .sphere
            .as_ref()
            .and_then(|sphere| sphere.intersect(ray));
        match hit {
            Some(t) => {
                profile.sphere_hits += 1;
                let point = ray.at(t);
                // degenerate only when the hit point coincides with -normal_offset
                let normal = (point + self.world.normal_offset).normalized();
                (normal + Vec3::ONE) * 0.5
            }
            None => {
                profile.background_hits += 1;
                self.world.background
            }
        }
    }
}
