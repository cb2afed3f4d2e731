use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<f32> for Vec3 {
    fn from(s: f32) -> Vec3 {
        Vec3::new(s, s, s)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Vec3 {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

impl Vec3 {
    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    // right handed
    pub fn cross(&self, other: Vec3) -> Self {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn norm_squared(&self) -> f32 {
        self.dot(*self)
    }

    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    pub fn magnitude(&self) -> f32 {
        self.norm()
    }

    /// Caller must not pass a zero vector. Debug builds assert on it, release builds
    /// produce NaN components.
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        debug_assert!(norm > 0.0, "normalizing zero length vector {:?}", self);
        Vec3::new(self.x / norm, self.y / norm, self.z / norm)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn samples() -> Vec<Vec3> {
        vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.25, 7.0),
            Vec3::new(0.0, -1.0, 0.5),
            Vec3::new(1e3, -2e2, 3.5),
            Vec3::X,
            Vec3::Z,
        ]
    }

    #[test]
    fn test_add_then_sub_is_identity() {
        for a in samples() {
            for b in samples() {
                let c = a + b - b;
                assert_relative_eq!(c.x, a.x, epsilon = 1e-3);
                assert_relative_eq!(c.y, a.y, epsilon = 1e-3);
                assert_relative_eq!(c.z, a.z, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_dot_commutes() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.dot(b), b.dot(a));
            }
        }
    }

    #[test]
    fn test_cross_anticommutes() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.cross(b), -(b.cross(a)));
            }
        }
    }

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_normalized_is_unit() {
        for a in samples() {
            assert_relative_eq!(a.normalized().magnitude(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vec3::new(0.0, 0.0, -2.0).norm_squared(), 4.0);
    }

    #[test]
    fn test_scalar_mul_both_sides() {
        let v = Vec3::new(1.0, -2.0, 0.5);
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v * 2.0, Vec3::new(2.0, -4.0, 1.0));
        assert_eq!(v / 2.0, Vec3::new(0.5, -1.0, 0.25));
    }

    #[test]
    fn test_array_conversion() {
        let v = Vec3::from([0.0, 0.0, -3.0]);
        assert_eq!(v, Vec3::new(0.0, 0.0, -3.0));
        let a: [f32; 3] = v.into();
        assert_eq!(a, [0.0, 0.0, -3.0]);
    }
}
