mod vec;
pub use std::f32::INFINITY;
pub use vec::Vec3;

pub type Point3 = Vec3;
// components nominally in [0, 1]
pub type Color = Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    // not required to be unit length
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn at(self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}
