pub const RENDER_WIDTH: i32 = 1080;           // Width of the render texture (portrait reel)
pub const RENDER_HEIGHT: i32 = 1920;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const MIN_PERIOD: f32 = 1.0 / FPS as f32; // Shortest accepted timer period (seconds)

pub const AUTOPLAY_PERIOD: f32 = 4.2;         // Time each scene stays on screen (seconds)
pub const TRACK_TRANSITION: f32 = 1.2;        // Duration of the slide between scenes (seconds)

pub const DROPLET_SPAWN_PERIOD: f32 = 0.22;   // Time between two droplets (seconds)
pub const DROPLET_LIFETIME: f32 = 8.0;        // Droplets are removed this long after spawning
pub const DROPLET_DURATION: (f32, f32) = (4.0, 7.0);

pub const FRUIT_SPAWN_PERIOD: f32 = 0.4;      // Time between two fruit pieces (seconds)
pub const FRUIT_LIFETIME: f32 = 9.0;          // Fruit is removed this long after spawning
pub const FRUIT_DURATION: (f32, f32) = (5.0, 8.0);

pub const PARTICLE_X: (f32, f32) = (0.05, 0.95);     // Horizontal band (fraction of panel)
pub const PARTICLE_DELAY: (f32, f32) = (0.0, 1.5);   // Animation delay band (seconds)

pub const WINDOW_TITLE: &str = "Soft Morning Reel";
