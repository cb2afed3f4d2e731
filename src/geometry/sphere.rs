use crate::hittable::{HitRecord, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }

    /// Nearest ray parameter in front of the ray origin (`t > 0`) at which the ray meets
    /// the sphere, or `None` if it misses or the sphere lies entirely behind the origin.
    ///
    /// Substituting `P(t) = o + t d` into `|P - c|^2 = r^2` gives `a t^2 + b t + c = 0` with
    /// `a = d.d`, `b = 2 d.(o - c)`, `c = (o - c).(o - c) - r^2`. The direction does not
    /// need to be unit length, but must be non-zero.
    pub fn intersect(&self, r: Ray) -> Option<f32> {
        self.hit(r, 0.0, INFINITY).map(|record| record.time)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let oc: Vec3 = r.origin - self.center;
        let a = r.direction.dot(r.direction);
        debug_assert!(a > 0.0, "zero length ray direction {:?}", r);
        let b = 2.0 * r.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        // smaller root first, the far side only counts when the near one is out of range
        // (e.g. when the origin is inside the sphere)
        for time in [
            (-b - discriminant_sqrt) / (2.0 * a),
            (-b + discriminant_sqrt) / (2.0 * a),
        ] {
            if time > t0 && time < t1 {
                return Some(HitRecord::new(time, r.at(time)));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hit_from_center() {
        let sphere = Sphere::new(Point3::ZERO, 1.0);
        let ray = Ray::new(Point3::ZERO, Vec3::Z);
        let t = sphere.intersect(ray).unwrap();
        assert_relative_eq!(t, 1.0);
        let point = ray.at(t);
        assert_relative_eq!(point.x, 0.0);
        assert_relative_eq!(point.y, 0.0);
        assert_relative_eq!(point.z, 1.0);
    }

    #[test]
    fn test_hit_from_center_scales_with_direction() {
        let sphere = Sphere::new(Point3::ZERO, 2.0);
        let direction = Vec3::new(0.0, 4.0, 0.0);
        let t = sphere.intersect(Ray::new(Point3::ZERO, direction)).unwrap();
        assert_relative_eq!(t, sphere.radius / direction.magnitude());
    }

    #[test]
    fn test_nearest_root_in_front() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        // roots at 2 and 4
        assert_relative_eq!(sphere.intersect(ray).unwrap(), 2.0);

        // non-unit direction halves the parameter
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        assert_relative_eq!(sphere.intersect(ray).unwrap(), 1.0);
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0);
        let ray = Ray::new(Point3::ZERO, Vec3::new(10.0, 0.0, -1.0));
        assert!(sphere.intersect(ray).is_none());
    }

    #[test]
    fn test_parallel_offset_misses() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0);
        let ray = Ray::new(Point3::new(1.5, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(ray).is_none());
    }

    #[test]
    fn test_tangent_is_single_hit() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0);
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        let t = sphere.intersect(ray).unwrap();
        assert_relative_eq!(t, 3.0);
        assert_relative_eq!(ray.at(t).z, -3.0);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 3.0), 1.0);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(ray).is_none());
    }

    #[test]
    fn test_hit_respects_interval() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        // near root excluded, far root accepted
        let record = sphere.hit(ray, 2.5, INFINITY).unwrap();
        assert_relative_eq!(record.time, 4.0);
        assert!(sphere.hit(ray, 0.0, 1.0).is_none());
    }
}
