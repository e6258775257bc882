//! Browser and GPU constants for the hero canvas.
//!
//! Scene tuning lives in `scene::constants`; this file only names the DOM
//! hooks the host page provides and the formats the renderer allocates.

// DOM hooks
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const TAGLINE_ELEMENT_ID: &str = "hero-tagline";
pub const FALLBACK_CLASS: &str = "hero-fallback";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const SEED_ATTRIBUTE: &str = "data-seed";

// Offscreen formats
pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

// Mesh instance slots in the shared instance buffer
pub const EMBLEM_SLOT: u32 = 0;
pub const MARKER_SLOT: u32 = 1;
pub const GLOW_SLOT: u32 = MARKER_SLOT + crate::scene::LATTICE_NODE_COUNT as u32;
pub const EDGE_SLOT: u32 = GLOW_SLOT + crate::scene::LATTICE_NODE_COUNT as u32;
pub const CROSS_EDGE_SLOT: u32 = EDGE_SLOT + 1;
pub const MESH_INSTANCE_SLOTS: u32 = CROSS_EDGE_SLOT + 1;

// Quad corners per particle
pub const POINT_VERTICES: u32 = 6;
