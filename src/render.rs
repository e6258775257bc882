use crate::constants::{
    CROSS_EDGE_SLOT, DEPTH_FORMAT, EDGE_SLOT, EMBLEM_SLOT, GLOW_SLOT, HDR_FORMAT, MARKER_SLOT,
    MESH_INSTANCE_SLOTS, POINT_VERTICES,
};
use crate::scene::geometry::{self, MeshVertex};
use crate::scene::particles::ParticleInstance;
use crate::scene::{
    SceneDriver, EMBLEM_RADIUS, EMBLEM_SEGMENTS, LATTICE_NODE_COUNT, NODE_GLOW_SIZE,
    NODE_MARKER_RADIUS, PARTICLE_COUNT,
};
use web_sys as web;

mod helpers;
mod meshes;
mod post;
mod targets;
mod uniforms;

use helpers::{ScenePass, ADDITIVE_BLEND};
use meshes::GpuMesh;
use targets::RenderTargets;
use uniforms::{FrameUniforms, MeshInstance, PostUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    frame_uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    lit_pipeline: wgpu::RenderPipeline,
    glow_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,

    sphere: GpuMesh,
    octahedron: GpuMesh,
    glow_cube: GpuMesh,
    line_vertices: wgpu::Buffer,
    edge_vertex_count: u32,
    cross_vertex_count: u32,
    mesh_instances: wgpu::Buffer,
    particle_instances: wgpu::Buffer,
    mesh_scratch: Vec<MeshInstance>,
    particle_scratch: Vec<ParticleInstance>,

    targets: RenderTargets,
    post: post::PostResources,
    bg_hdr: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, driver: &SceneDriver) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::scene::SCENE_WGSL.into()),
        });
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let frame_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniform_buffer.as_entire_binding(),
            }],
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&frame_bgl],
            push_constant_ranges: &[],
        });

        let mesh_buffers = [meshes::mesh_vertex_layout(), meshes::mesh_instance_layout()];
        let particle_buffers = [meshes::particle_layout()];
        let make = |pass: ScenePass<'_>| {
            helpers::make_scene_pipeline(
                &device,
                &scene_pl,
                &scene_shader,
                HDR_FORMAT,
                DEPTH_FORMAT,
                &pass,
            )
        };
        let lit_pipeline = make(ScenePass {
            label: "lit_pipeline",
            vs_entry: "vs_mesh",
            fs_entry: "fs_lit",
            buffers: &mesh_buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            blend: Some(wgpu::BlendState::REPLACE),
            depth_write: true,
        });
        let glow_pipeline = make(ScenePass {
            label: "glow_pipeline",
            vs_entry: "vs_mesh",
            fs_entry: "fs_basic",
            buffers: &mesh_buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: false,
        });
        let line_pipeline = make(ScenePass {
            label: "line_pipeline",
            vs_entry: "vs_mesh",
            fs_entry: "fs_basic",
            buffers: &mesh_buffers,
            topology: wgpu::PrimitiveTopology::LineList,
            cull_mode: None,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: false,
        });
        let points_pipeline = make(ScenePass {
            label: "points_pipeline",
            vs_entry: "vs_points",
            fs_entry: "fs_points",
            buffers: &particle_buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            blend: Some(ADDITIVE_BLEND),
            depth_write: false,
        });

        let sphere = GpuMesh::upload(
            &device,
            "emblem_sphere",
            &geometry::uv_sphere(EMBLEM_RADIUS, EMBLEM_SEGMENTS, EMBLEM_SEGMENTS),
        );
        let octahedron = GpuMesh::upload(
            &device,
            "node_marker",
            &geometry::octahedron(NODE_MARKER_RADIUS),
        );
        let glow_cube = GpuMesh::upload(&device, "node_glow", &geometry::cube(NODE_GLOW_SIZE));

        let lattice = driver.lattice();
        let mut line_data: Vec<MeshVertex> = geometry::segment_vertices(lattice.edges());
        let edge_vertex_count = line_data.len() as u32;
        line_data.extend(geometry::segment_vertices(lattice.cross_edges()));
        let cross_vertex_count = line_data.len() as u32 - edge_vertex_count;
        let line_vertices = meshes::upload_lines(&device, "lattice_lines", &line_data);

        let mesh_instances = meshes::instance_buffer(
            &device,
            "mesh_instances",
            (std::mem::size_of::<MeshInstance>() * MESH_INSTANCE_SLOTS as usize) as u64,
        );
        let particle_instances = meshes::instance_buffer(
            &device,
            "particle_instances",
            (std::mem::size_of::<ParticleInstance>() * PARTICLE_COUNT) as u64,
        );

        let targets = RenderTargets::new(&device, width, height);
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::scene::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        // An sRGB swapchain encodes on store; otherwise the shader does it.
        let post_uniforms = PostUniforms::new(!format.is_srgb());
        queue.write_buffer(&post.uniform_buffer, 0, bytemuck::bytes_of(&post_uniforms));
        let bg_hdr = post::create_post_bind_group(&device, &post, &targets.hdr_view);

        let bg = driver.lights().background;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            frame_uniform_buffer,
            frame_bind_group,
            lit_pipeline,
            glow_pipeline,
            line_pipeline,
            points_pipeline,
            sphere,
            octahedron,
            glow_cube,
            line_vertices,
            edge_vertex_count,
            cross_vertex_count,
            mesh_instances,
            particle_instances,
            mesh_scratch: Vec::with_capacity(MESH_INSTANCE_SLOTS as usize),
            particle_scratch: Vec::with_capacity(PARTICLE_COUNT),
            targets,
            post,
            bg_hdr,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg.x as f64,
                g: bg.y as f64,
                b: bg.z as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
            self.targets.recreate(&self.device, width, height);
            self.bg_hdr = post::create_post_bind_group(&self.device, &self.post, &self.targets.hdr_view);
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    /// Reapply the surface configuration after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, driver: &SceneDriver) -> Result<(), wgpu::SurfaceError> {
        let camera = driver.camera(self.width as f32 / self.height.max(1) as f32);
        let frame_uniforms = FrameUniforms::from_scene(driver, &camera, self.width, self.height);
        self.queue.write_buffer(
            &self.frame_uniform_buffer,
            0,
            bytemuck::bytes_of(&frame_uniforms),
        );
        uniforms::write_mesh_instances(driver, &mut self.mesh_scratch);
        self.queue
            .write_buffer(&self.mesh_instances, 0, bytemuck::cast_slice(&self.mesh_scratch));
        driver.particles().write_instances(&mut self.particle_scratch);
        self.queue.write_buffer(
            &self.particle_instances,
            0,
            bytemuck::cast_slice(&self.particle_scratch),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.mesh_instances.slice(..));

            // Opaque: emblem then node markers
            rpass.set_pipeline(&self.lit_pipeline);
            draw_mesh(&mut rpass, &self.sphere, EMBLEM_SLOT, 1);
            draw_mesh(&mut rpass, &self.octahedron, MARKER_SLOT, LATTICE_NODE_COUNT as u32);

            // Translucent: glow cubes, then the wireframe
            rpass.set_pipeline(&self.glow_pipeline);
            draw_mesh(&mut rpass, &self.glow_cube, GLOW_SLOT, LATTICE_NODE_COUNT as u32);
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.line_vertices.slice(..));
            rpass.draw(0..self.edge_vertex_count, EDGE_SLOT..EDGE_SLOT + 1);
            let cross_start = self.edge_vertex_count;
            rpass.draw(
                cross_start..cross_start + self.cross_vertex_count,
                CROSS_EDGE_SLOT..CROSS_EDGE_SLOT + 1,
            );

            // Additive particles last
            rpass.set_pipeline(&self.points_pipeline);
            rpass.set_vertex_buffer(0, self.particle_instances.slice(..));
            rpass.draw(0..POINT_VERTICES, 0..self.particle_scratch.len() as u32);
        }

        post::blit(
            &mut encoder,
            "tonemap",
            &view,
            self.clear_color,
            &self.post.tonemap_pipeline,
            &self.bg_hdr,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn draw_mesh(rpass: &mut wgpu::RenderPass<'_>, mesh: &GpuMesh, first: u32, count: u32) {
    rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
    rpass.draw_indexed(0..mesh.index_count, 0, first..first + count);
}
