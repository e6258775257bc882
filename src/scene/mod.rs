pub mod camera;
pub mod clock;
pub mod config;
pub mod constants;
pub mod driver;
pub mod emblem;
pub mod frame_loop;
pub mod geometry;
pub mod lattice;
pub mod lighting;
pub mod orbit;
pub mod palette;
pub mod particles;
pub mod picking;
pub mod tagline;

pub use camera::Camera;
pub use config::SceneParams;
pub use constants::*;
pub use driver::{Phase, SceneDriver};
pub use palette::Theme;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
