mod naive;

pub use naive::NaiveRenderer;

use crate::camera::ViewportCamera;
use crate::integrator::NormalProxyIntegrator;
use crate::math::Color;
use crate::parsing::config::Config;
use crate::profile::Profile;
use crate::vec2d::Vec2D;

pub type Film = Vec2D<Color>;

pub trait Renderer {
    // the returned film is in row-major emission order regardless of how pixels were scheduled
    fn render(
        &self,
        integrator: &NormalProxyIntegrator,
        camera: &ViewportCamera,
    ) -> (Film, Profile);
}

pub fn render_from_config(renderer: &dyn Renderer, config: &Config) -> (Film, Profile) {
    let integrator = NormalProxyIntegrator::new(config.build_world());
    let camera = config.build_camera();
    renderer.render(&integrator, &camera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_config;
    use crate::ppm::{encode_ppm, write_ppm, HEADER_LINES};
    use crate::tonemap::Truncate;
    use crate::world::World;

    #[test]
    fn test_reference_render() {
        let config = Config::default();
        let (film, profile) = render_from_config(&NaiveRenderer::new(), &config);
        assert_eq!((film.width, film.height), (640, 480));

        // sphere sits on the optical axis
        let center = film.at(320, 240);
        assert_ne!(center, config.build_world().background);
        assert!(profile.sphere_hits > 0 && profile.background_hits > 0);

        // corners see past the sphere
        assert_eq!(film.at(0, 0), World::REFERENCE_BACKGROUND);
        assert_eq!(film.at(639, 479), World::REFERENCE_BACKGROUND);

        let mut out = Vec::new();
        write_ppm(&film, &Truncate, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), HEADER_LINES + 640 * 480);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("640 480"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(lines.next(), Some("51 51 51"));
    }

    #[test]
    fn test_background_only_render() {
        let config = parse_config("[camera]\nimage_height = 60\n[scene]\nempty = true\n").unwrap();
        let (film, profile) = render_from_config(&NaiveRenderer::new(), &config);
        assert_eq!(profile.sphere_hits, 0);
        let text = encode_ppm(&film, &Truncate);
        assert!(text.lines().skip(HEADER_LINES).all(|line| line == "51 51 51"));
        assert_eq!(text.lines().count(), HEADER_LINES + 80 * 60);
    }

    #[test]
    fn test_sphere_out_of_view_is_background() {
        let config = parse_config(
            "[camera]\nimage_height = 30\n[scene]\nsphere = { center = [0.0, 0.0, 3.0], radius = 1.0 }\n",
        )
        .unwrap();
        let (film, _) = render_from_config(&NaiveRenderer::new(), &config);
        assert!(film.buffer.iter().all(|c| *c == World::REFERENCE_BACKGROUND));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = parse_config("[camera]\nimage_height = 90\n").unwrap();
        let render = || {
            let (film, _) = render_from_config(&NaiveRenderer::new(), &config);
            encode_ppm(&film, &Truncate)
        };
        assert_eq!(render().as_bytes(), render().as_bytes());
    }
}
