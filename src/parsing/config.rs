use crate::camera::{ViewportCamera, MAX_IMAGE_PIXELS};
use crate::geometry::Sphere;
use crate::math::{Color, Point3, Vec3};
use crate::parsing::tonemap::TonemapSettings;
use crate::ppm::OutputTarget;
use crate::world::World;

use super::{Point3Data, Vec3Data};

use anyhow::ensure;
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraSettings {
    pub image_height: usize,
    // image_width = image_height * aspect_ratio
    pub aspect_ratio: f32,
    pub viewport_height: f32,
    pub eye: Point3Data,
    // from the eye to the viewport center
    pub focal_offset: Vec3Data,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            image_height: 480,
            aspect_ratio: 4.0 / 3.0,
            viewport_height: 2.0,
            eye: [0.0, 0.0, 0.0],
            focal_offset: [0.0, 0.0, -1.0],
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct SphereData {
    pub center: Point3Data,
    pub radius: f32,
}

impl From<SphereData> for Sphere {
    fn from(data: SphereData) -> Self {
        Sphere::new(Point3::from(data.center), data.radius)
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SceneSettings {
    pub background: Vec3Data,
    pub normal_offset: Vec3Data,
    // drop the sphere entirely, leaving only background
    pub empty: bool,
    pub sphere: SphereData,
}

impl Default for SceneSettings {
    fn default() -> Self {
        SceneSettings {
            background: World::REFERENCE_BACKGROUND.into(),
            normal_offset: World::REFERENCE_NORMAL_OFFSET.into(),
            empty: false,
            sphere: SphereData {
                center: World::REFERENCE_SPHERE.center.into(),
                radius: World::REFERENCE_SPHERE.radius,
            },
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    // None or 0 means one thread per logical cpu
    pub threads: Option<usize>,
    // "-" writes to stdout
    pub output: String,
    pub tonemap: TonemapSettings,
    pub camera: CameraSettings,
    pub scene: SceneSettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            threads: None,
            output: String::from("image.ppm"),
            tonemap: TonemapSettings::default(),
            camera: CameraSettings::default(),
            scene: SceneSettings::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        let camera = &self.camera;
        ensure!(camera.image_height >= 1, "image_height must be at least 1");
        ensure!(
            camera.aspect_ratio.is_finite() && camera.aspect_ratio > 0.0,
            "aspect_ratio must be positive, got {}",
            camera.aspect_ratio
        );
        let scaled_width = ViewportCamera::scaled_width(camera.image_height, camera.aspect_ratio);
        ensure!(
            scaled_width.is_finite() && scaled_width <= MAX_IMAGE_PIXELS as f32,
            "image width {} from aspect_ratio {} is out of range",
            scaled_width,
            camera.aspect_ratio
        );
        let image_width =
            ViewportCamera::width_for_aspect_ratio(camera.image_height, camera.aspect_ratio);
        let total_pixels = image_width.checked_mul(camera.image_height);
        ensure!(
            matches!(total_pixels, Some(pixels) if pixels <= MAX_IMAGE_PIXELS),
            "{}x{} image exceeds the {} pixel limit",
            image_width,
            camera.image_height,
            MAX_IMAGE_PIXELS
        );
        ensure!(
            camera.viewport_height.is_finite() && camera.viewport_height > 0.0,
            "viewport_height must be positive, got {}",
            camera.viewport_height
        );
        ensure!(
            Vec3::from(camera.focal_offset).norm_squared() > 0.0,
            "focal_offset must be non-zero"
        );
        let vectors = [
            camera.eye,
            camera.focal_offset,
            self.scene.background,
            self.scene.normal_offset,
            self.scene.sphere.center,
        ];
        ensure!(
            vectors.iter().all(|v| Vec3::from(*v).is_finite()),
            "vector settings must be finite"
        );
        if !self.scene.empty {
            let radius = self.scene.sphere.radius;
            ensure!(
                radius.is_finite() && radius > 0.0,
                "sphere radius must be positive, got {}",
                radius
            );
        }
        ensure!(!self.output.is_empty(), "output must not be empty");
        Ok(())
    }

    pub fn thread_count(&self) -> usize {
        match self.threads {
            None | Some(0) => num_cpus::get(),
            Some(n) => n,
        }
    }

    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::from(self.output.as_str())
    }

    pub fn build_camera(&self) -> ViewportCamera {
        ViewportCamera::with_aspect_ratio(
            self.camera.image_height,
            self.camera.aspect_ratio,
            self.camera.viewport_height,
            Point3::from(self.camera.eye),
            Vec3::from(self.camera.focal_offset),
        )
    }

    pub fn build_world(&self) -> World {
        let sphere = if self.scene.empty {
            None
        } else {
            Some(Sphere::from(self.scene.sphere))
        };
        World::new(
            sphere,
            Color::from(self.scene.background),
            Vec3::from(self.scene.normal_offset),
        )
    }
}
