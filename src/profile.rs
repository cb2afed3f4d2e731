use tracing::info;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,     // one per pixel
    pub sphere_hits: usize,     // camera rays that hit the sphere
    pub background_hits: usize, // camera rays that escaped to the background
}

impl Profile {
    pub fn new(camera_rays: usize, sphere_hits: usize, background_hits: usize) -> Self {
        Profile {
            camera_rays,
            sphere_hits,
            background_hits,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.sphere_hits + other.sphere_hits,
            self.background_hits + other.background_hits,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            sphere_hits,
            background_hits,
        } = self;
        // guard against a zero duration on tiny images
        let elapsed = elapsed.max(f32::EPSILON);
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads.max(1) as f32)
        );
        info!(
            "{} sphere hits, {} background hits",
            sphere_hits, background_hits
        );
    }
}
