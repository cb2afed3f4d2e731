use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f32,
    pub point: Point3,
}

impl HitRecord {
    pub fn new(time: f32, point: Point3) -> Self {
        HitRecord { time, point }
    }
}

pub trait Hittable {
    // only roots strictly inside (t0, t1) count as hits
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord>;
}
