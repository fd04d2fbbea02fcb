use std::sync::Arc;

use wgpu::{
    BindGroup, BindGroupLayout, Device, Queue, RenderPipeline, Sampler, Surface,
    SurfaceConfiguration, Texture,
};
use winit::window::Window;

use crate::core::{Rect, Size};
use crate::error::{Result, WindowError};
use crate::traits::TextureTarget;

/// Matches the BGRA32 layout of `PixelSurface`
const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

/// Device, window surface and the pipeline that draws the texture
struct GpuRenderer {
    device: Device,
    queue: Queue,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    pipeline: RenderPipeline,
    bind_group_layout: BindGroupLayout,
    sampler: Sampler,
}

struct StreamingTexture {
    texture: Texture,
    bind_group: BindGroup,
}

/// wgpu renderer with one streaming texture, presenting to a winit window
pub struct WgpuTarget {
    window: Arc<Window>,
    renderer: Option<GpuRenderer>,
    texture: Option<StreamingTexture>,
}

impl WgpuTarget {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            renderer: None,
            texture: None,
        }
    }

    fn renderer(&self) -> Result<&GpuRenderer> {
        self.renderer
            .as_ref()
            .ok_or_else(|| WindowError::Renderer("renderer not created".into()))
    }

    fn parts(&self) -> Result<(&GpuRenderer, &StreamingTexture)> {
        let texture = self
            .texture
            .as_ref()
            .ok_or_else(|| WindowError::Texture("no texture".into()))?;
        Ok((self.renderer()?, texture))
    }
}

impl TextureTarget for WgpuTarget {
    fn create_renderer(&mut self) -> Result<()> {
        let renderer = pollster::block_on(GpuRenderer::new(self.window.clone()))?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn create_texture(&mut self, size: Size) -> Result<()> {
        let renderer = self
            .renderer
            .as_mut()
            .ok_or_else(|| WindowError::Renderer("renderer not created".into()))?;

        renderer.configure(size);
        let texture = renderer.create_texture(size)?;
        self.texture = Some(texture);
        Ok(())
    }

    fn destroy_texture(&mut self) {
        if let Some(texture) = self.texture.take() {
            texture.texture.destroy();
        }
    }

    fn update_texture(&mut self, rect: Rect, pixels: &[u8], pitch: u32) -> Result<()> {
        let (renderer, texture) = self.parts()?;

        renderer.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture.texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: rect.x as u32,
                    y: rect.y as u32,
                    z: 0,
                },
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(pitch),
                rows_per_image: Some(rect.height as u32),
            },
            wgpu::Extent3d {
                width: rect.width as u32,
                height: rect.height as u32,
                depth_or_array_layers: 1,
            },
        );
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let (renderer, texture) = self.parts()?;

        let frame = match renderer.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring and dropping frame");
                renderer.surface.configure(&renderer.device, &renderer.surface_config);
                return Ok(());
            }
            Err(e) => return Err(WindowError::Present(e.to_string())),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = renderer
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Present Pass"),
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
            });

            render_pass.set_pipeline(&renderer.pipeline);
            render_pass.set_bind_group(0, &texture.bind_group, &[]);
            render_pass.draw(0..3, 0..1); // Fullscreen triangle
        }

        renderer.queue.submit(Some(encoder.finish()));
        self.window.pre_present_notify();
        frame.present();
        Ok(())
    }
}

impl GpuRenderer {
    async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .map_err(|e| WindowError::Renderer(format!("failed to create surface: {e}")))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| WindowError::Renderer(format!("failed to find adapter: {e}")))?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Editor Window Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| WindowError::Renderer(format!("failed to create device: {e}")))?;

        // Surface pixels are already gamma-encoded, so avoid a second sRGB conversion
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or_else(|| WindowError::Renderer("surface has no supported formats".into()))?;

        let surface_config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Surface Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        // Texture and surface are the same size, so sample texels 1:1
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Surface Texture Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let pipeline = Self::create_pipeline(&device, &bind_group_layout, format);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            pipeline,
            bind_group_layout,
            sampler,
        })
    }

    fn configure(&mut self, size: Size) {
        self.surface_config.width = size.width.max(1);
        self.surface_config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
    }

    fn create_texture(&self, size: Size) -> Result<StreamingTexture> {
        let limit = self.device.limits().max_texture_dimension_2d;
        if size.is_empty() || size.width > limit || size.height > limit {
            return Err(WindowError::Texture(format!(
                "{}x{} is outside the supported range (max {})",
                size.width, size.height, limit
            )));
        }

        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Surface Streaming Texture"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TEXTURE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Surface Texture Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        Ok(StreamingTexture { texture, bind_group })
    }

    fn create_pipeline(
        device: &Device,
        bind_group_layout: &BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Surface Display Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("display.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Surface Render Pipeline Layout"),
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Surface Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
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
            multiview: None,
            cache: None,
        })
    }
}
