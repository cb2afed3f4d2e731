use crate::math::*;

use tracing::debug;

// 8192 x 8192, keeps the film and its encoded text within a few gigabytes
pub const MAX_IMAGE_PIXELS: usize = 1 << 26;

/// Pinhole camera looking through a viewport rectangle centered at `eye + focal_offset`.
///
/// The viewport spans `viewport_width` along +x and `viewport_height` along -y, so pixel
/// row 0 is the top of the image. Every ray starts at `eye` and points at a pixel center;
/// ray directions are left unnormalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportCamera {
    pub eye: Point3,
    pub image_width: usize,
    pub image_height: usize,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub pixel_delta_u: Vec3,
    pub pixel_delta_v: Vec3,
    // center of pixel (0, 0)
    pixel00: Point3,
}

impl ViewportCamera {
    pub fn new(
        image_width: usize,
        image_height: usize,
        viewport_height: f32,
        eye: Point3,
        focal_offset: Vec3,
    ) -> ViewportCamera {
        debug_assert!(image_width > 0 && image_height > 0);
        debug_assert!(viewport_height > 0.0);
        // derived from the pixel grid so pixels stay square
        let viewport_width = viewport_height * image_width as f32 / image_height as f32;

        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        let pixel00 = eye
            + focal_offset
            + (viewport_u * -0.5 + viewport_v * -0.5)
            + (pixel_delta_u + pixel_delta_v) * 0.5;

        debug!(
            "viewport {}x{}, pixel deltas {:?} {:?}, top left pixel center {:?}",
            viewport_width, viewport_height, pixel_delta_u, pixel_delta_v, pixel00
        );

        ViewportCamera {
            eye,
            image_width,
            image_height,
            viewport_width,
            viewport_height,
            pixel_delta_u,
            pixel_delta_v,
            pixel00,
        }
    }

    /// Width is `aspect_ratio * image_height`, truncated, and at least one pixel.
    pub fn with_aspect_ratio(
        image_height: usize,
        aspect_ratio: f32,
        viewport_height: f32,
        eye: Point3,
        focal_offset: Vec3,
    ) -> ViewportCamera {
        let image_width = ViewportCamera::width_for_aspect_ratio(image_height, aspect_ratio);
        ViewportCamera::new(image_width, image_height, viewport_height, eye, focal_offset)
    }

    // before truncation, may be non-finite or beyond usize for extreme inputs
    pub fn scaled_width(image_height: usize, aspect_ratio: f32) -> f32 {
        aspect_ratio * image_height as f32
    }

    pub fn width_for_aspect_ratio(image_height: usize, aspect_ratio: f32) -> usize {
        (ViewportCamera::scaled_width(image_height, aspect_ratio) as usize).max(1)
    }

    pub fn pixel_center(&self, i: usize, j: usize) -> Point3 {
        self.pixel00 + (self.pixel_delta_u * i as f32 + self.pixel_delta_v * j as f32)
    }

    pub fn get_ray(&self, i: usize, j: usize) -> Ray {
        debug_assert!(i < self.image_width && j < self.image_height);
        let direction = self.pixel_center(i, j) - self.eye;
        debug_assert!(direction.is_finite());
        Ray::new(self.eye, direction)
    }

    pub fn total_pixels(&self) -> usize {
        self.image_width * self.image_height
    }

    /// Pixel coordinates `(i, j)` in emission order: rows top to bottom, columns left to
    /// right within a row.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> {
        let (width, height) = (self.image_width, self.image_height);
        (0..height).flat_map(move |j| (0..width).map(move |i| (i, j)))
    }

    // inverse of the row-major buffer layout
    pub fn pixel_for_index(&self, index: usize) -> (usize, usize) {
        let j = index / self.image_width;
        let i = index - self.image_width * j;
        (i, j)
    }
}
