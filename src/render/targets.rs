use super::helpers;
use crate::constants::{DEPTH_FORMAT, HDR_FORMAT};

/// Offscreen targets the scene is drawn into before tone mapping.
///
/// - `hdr_*` hold linear scene colour in Rgba16Float, sampled by the post pass.
/// - `depth_*` is the matching depth buffer for the scene passes.
pub(crate) struct RenderTargets {
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (hdr_tex, hdr_view) = create_hdr(device, width, height);
        let (depth_tex, depth_view) = create_depth(device, width, height);
        Self {
            hdr_tex,
            hdr_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.hdr_tex.destroy();
        self.depth_tex.destroy();
        (self.hdr_tex, self.hdr_view) = create_hdr(device, width, height);
        (self.depth_tex, self.depth_view) = create_depth(device, width, height);
    }
}

fn create_hdr(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_target_texture(
        device,
        "hdr_tex",
        width,
        height,
        HDR_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}

fn create_depth(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_target_texture(
        device,
        "depth_tex",
        width,
        height,
        DEPTH_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT,
    )
}
