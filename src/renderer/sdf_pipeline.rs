//! SDF-based WebGPU render pipeline
//!
//! Renders the entire scene in fragment shader using signed distance fields.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::viewport::Viewport;
use crate::consts::MAX_ENEMIES;
use crate::error::WatchoutError;
use crate::sim::{EnemyPhase, GamePhase, GameState};

/// How long the field stays tinted after a hit (ms)
const FLASH_MS: f64 = 250.0;

// ============================================================================
// GPU DATA STRUCTURES (must match shader)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    resolution: [f32; 2],   // offset 0
    field_size: [f32; 2],   // offset 8
    field_origin: [f32; 2], // offset 16
    field_scale: f32,       // offset 24
    time: f32,              // offset 28
    player: [f32; 4],       // offset 32 - x, y, radius, dragging
    enemy_count: u32,       // offset 48
    flash: f32,             // offset 52
    paused: u32,            // offset 56
    _pad: u32,              // pad to 64 bytes
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct EnemyData {
    pos: [f32; 2],
    radius: f32,
    tint: f32, // 1 = just spawned, 0 = fully grown
}

// ============================================================================
// SDF RENDER STATE
// ============================================================================

pub struct SdfRenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,

    // Uniform buffers
    globals_buffer: wgpu::Buffer,
    enemies_buffer: wgpu::Buffer,

    bind_group: wgpu::BindGroup,

    pub size: (u32, u32),
    start_time: f64,

    /// Field mapping in physical pixels
    viewport: Viewport,

    // Collision flash
    seen_collisions: u64,
    flash_started: Option<f64>,
}

impl SdfRenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        viewport: Viewport,
    ) -> Result<Self, WatchoutError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("sdf-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .map_err(|e| WatchoutError::Renderer(format!("device request failed: {e}")))?;

        let surface_caps = surface.get_capabilities(adapter);
        log::info!("Surface formats: {:?}", surface_caps.formats);
        log::info!("Surface alpha modes: {:?}", surface_caps.alpha_modes);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| WatchoutError::Renderer("surface reports no formats".into()))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        log::info!("Surface config: {}x{}, alpha: {:?}", width, height, config.alpha_mode);
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sdf_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("sdf_shader.wgsl").into()),
        });

        // Create buffers
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&Globals::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let enemies_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("enemies"),
            size: (std::mem::size_of::<EnemyData>() * MAX_ENEMIES) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sdf_bind_group_layout"),
            entries: &[uniform_entry(0), uniform_entry(1)],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sdf_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: enemies_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sdf_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sdf_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[], // No vertex buffers - fullscreen triangle
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_buffer,
            enemies_buffer,
            bind_group,
            size: (width, height),
            start_time: 0.0,
            viewport,
            seen_collisions: 0,
            flash_started: None,
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32, viewport: Viewport) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.viewport = viewport;
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure the surface at its current size (after `SurfaceError::Lost`)
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn set_start_time(&mut self, time: f64) {
        self.start_time = time;
    }

    /// Flash intensity for this frame, restarting whenever a new hit lands
    fn flash(&mut self, state: &GameState, time: f64) -> f32 {
        if state.collisions > self.seen_collisions {
            self.flash_started = Some(time);
        }
        self.seen_collisions = state.collisions;

        match self.flash_started {
            Some(start) if time - start < FLASH_MS => (1.0 - (time - start) / FLASH_MS) as f32,
            _ => {
                self.flash_started = None;
                0.0
            }
        }
    }

    /// Update GPU buffers from game state and render
    pub fn render(&mut self, state: &GameState, time: f64) -> Result<(), wgpu::SurfaceError> {
        // time is ms since page load from requestAnimationFrame, convert to seconds
        let elapsed = ((time - self.start_time) / 1000.0) as f32;
        let enemy_count = state.enemies.len().min(MAX_ENEMIES) as u32;
        let flash = self.flash(state, time);

        let globals = Globals {
            resolution: [self.size.0 as f32, self.size.1 as f32],
            field_size: [state.config.width, state.config.height],
            field_origin: self.viewport.origin.to_array(),
            field_scale: self.viewport.scale,
            time: elapsed,
            player: [
                state.player.center.x,
                state.player.center.y,
                state.player.radius,
                if state.drag.active { 1.0 } else { 0.0 },
            ],
            enemy_count,
            flash,
            paused: (state.phase == GamePhase::Paused) as u32,
            _pad: 0,
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let mut enemies_data = vec![EnemyData::zeroed(); MAX_ENEMIES];
        for (slot, enemy) in enemies_data.iter_mut().zip(&state.enemies) {
            let circle = enemy.circle_at(state.clock_ms, &state.config);
            let tint = match enemy.phase_at(state.clock_ms, &state.config) {
                EnemyPhase::Entering { progress } => 1.0 - progress,
                _ => 0.0,
            };
            *slot = EnemyData {
                pos: circle.center.to_array(),
                radius: circle.radius,
                tint,
            };
        }
        self.queue
            .write_buffer(&self.enemies_buffer, 0, bytemuck::cast_slice(&enemies_data));

        // Render
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sdf_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sdf_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..3, 0..1); // Fullscreen triangle
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_layouts_match_shader() {
        assert_eq!(std::mem::size_of::<Globals>(), 64);
        assert_eq!(std::mem::size_of::<EnemyData>(), 16);
        assert_eq!(std::mem::offset_of!(Globals, player), 32);
        assert_eq!(std::mem::offset_of!(Globals, enemy_count), 48);
    }
}
