mod viewport_camera;

pub use viewport_camera::{ViewportCamera, MAX_IMAGE_PIXELS};
