//! Animated 3D hero background for the portfolio landing page.
//!
//! `scene` is platform-free and tested on the host; everything else is the
//! browser layer (WebGPU rendering, DOM events, requestAnimationFrame).

pub mod scene;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use mount::{mount_hero, start, unmount_hero};
