// Scene tuning constants shared by the pure scene layer and the renderer.
// Keep this file free of imports so host tests can `include!` it directly.

// Particle field
pub const PARTICLE_COUNT: usize = 800;
pub const PARTICLE_CUBE_SIDE: f32 = 25.0; // centred on the origin
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0; // size in [MIN, MIN + SPAN)
pub const PARTICLE_SIZE_MEAN: f32 = PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN * 0.5;
pub const PARTICLE_POINT_SIZE: f32 = 0.08; // base sprite size before attenuation
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const FIELD_YAW_RATE: f32 = 0.03;
pub const FIELD_PITCH_RATE: f32 = 0.05;
pub const FIELD_PITCH_AMPLITUDE: f32 = 0.15;
pub const PARTICLE_DRIFT_STEP: f32 = 0.002; // per-tick vertical increment scale

// Central emblem
pub const EMBLEM_RADIUS: f32 = 1.0;
pub const EMBLEM_SEGMENTS: u32 = 100;
pub const EMBLEM_SCALE: f32 = 2.7;
pub const EMBLEM_SCALE_HOVERED: f32 = 3.0;
pub const EMBLEM_PITCH_RATE: f32 = 0.12;
pub const EMBLEM_YAW_RATE: f32 = 0.2;
pub const EMBLEM_EMISSIVE_INTENSITY: f32 = 0.5;
pub const EMBLEM_METALNESS: f32 = 0.95;
pub const EMBLEM_ROUGHNESS: f32 = 0.05;
pub const EMBLEM_CLEARCOAT: f32 = 1.0;
pub const EMBLEM_CLEARCOAT_ROUGHNESS: f32 = 0.1;
pub const EMBLEM_DISTORT: f32 = 0.35;
pub const EMBLEM_DISTORT_SPEED: f32 = 1.2;

// Float wrapper around the emblem
pub const FLOAT_SPEED: f32 = 1.2;
pub const FLOAT_ROTATION_INTENSITY: f32 = 0.4;
pub const FLOAT_INTENSITY: f32 = 0.8;
pub const FLOAT_OFFSET_RANGE: f64 = 10_000.0;

// Node lattice
pub const LATTICE_HALF_EXTENT: f32 = 2.0;
pub const LATTICE_NODE_COUNT: usize = 8;
pub const NODE_PULSE_RATE: f32 = 2.0;
pub const NODE_PULSE_AMPLITUDE: f32 = 0.2;
pub const NODE_BOB_RATE: f32 = 1.5;
pub const NODE_BOB_PHASE: f32 = 0.5; // phase shift per node index
pub const NODE_BOB_STEP: f32 = 0.01;
pub const LATTICE_PITCH_RATE: f32 = 0.3;
pub const LATTICE_PITCH_AMPLITUDE: f32 = 0.2;
pub const LATTICE_YAW_RATE: f32 = 0.2;
pub const LATTICE_ROLL_RATE: f32 = 0.25;
pub const LATTICE_ROLL_AMPLITUDE: f32 = 0.1;
pub const NODE_GLOW_SIZE: f32 = 0.35;
pub const NODE_GLOW_OPACITY: f32 = 0.2;
pub const NODE_MARKER_RADIUS: f32 = 0.15;
pub const NODE_EMISSIVE_INTENSITY: f32 = 1.5;
pub const NODE_METALNESS: f32 = 0.85;
pub const NODE_ROUGHNESS: f32 = 0.15;
pub const EDGE_OPACITY: f32 = 0.3;
pub const CROSS_EDGE_OPACITY: f32 = 0.15;

// Camera
pub const CAMERA_DISTANCE: f32 = 9.0;
pub const CAMERA_FOV_DEG: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Orbit control
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.4;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
/// Share of the pending drag rotation applied per 60 Hz frame.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::PI / 2.5;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI / 1.8;

// Fog (view-space depth)
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 25.0;

// Output
pub const TONE_MAPPING_EXPOSURE: f32 = 1.2;

// Hero tagline rotation
pub const TAGLINE_PERIOD_SEC: f32 = 3.5;
