use super::{Film, Renderer};

use crate::camera::ViewportCamera;
use crate::integrator::NormalProxyIntegrator;
use crate::math::Color;
use crate::profile::Profile;

use std::time::Instant;

use rayon::prelude::*;
use tracing::info;

/// One camera ray per pixel, pixels evaluated in parallel on the current rayon pool.
#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render(
        &self,
        integrator: &NormalProxyIntegrator,
        camera: &ViewportCamera,
    ) -> (Film, Profile) {
        let (width, height) = (camera.image_width, camera.image_height);
        info!(
            "starting render with film resolution {}x{} on {} threads",
            width,
            height,
            rayon::current_num_threads()
        );
        let now = Instant::now();

        let mut film: Film = Film::new(width, height, Color::ZERO);

        let stats: Profile = film
            .buffer
            .par_iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let mut profile = Profile::default();
                let (x, y) = camera.pixel_for_index(pixel_index);
                let ray = camera.get_ray(x, y);
                *pixel_ref = integrator.color(ray, &mut profile);
                debug_assert!(
                    pixel_ref.is_finite(),
                    "({}, {}) resulted in {:?}",
                    x,
                    y,
                    pixel_ref
                );
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b));

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        stats.pretty_print(elapsed, rayon::current_num_threads());
        (film, stats)
    }
}
