//! egui-wgpu painter compositing the overlay into a host wgpu framebuffer.

use std::sync::Arc;

use egui_wgpu::{Renderer as EguiRenderer, ScreenDescriptor};
use scene_overlay_core::{Framebuffer, GraphicsBackend, Result};

use crate::integration::EguiDrawData;

/// A host framebuffer backed by wgpu texture views.
///
/// Holds one view per color buffer: a single view for mono rendering, left
/// and right back buffers for quad-buffered stereo. Binding opens a command
/// encoder; unbinding submits it.
pub struct WgpuFramebuffer {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    views: Vec<wgpu::TextureView>,
    active: usize,
    encoder: Option<wgpu::CommandEncoder>,
}

impl WgpuFramebuffer {
    /// Creates a framebuffer drawing into `views`.
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        views: Vec<wgpu::TextureView>,
    ) -> Self {
        Self {
            device,
            queue,
            views,
            active: 0,
            encoder: None,
        }
    }

    /// Replaces the color buffer views, e.g. after the host surface was
    /// resized or a new swapchain image was acquired.
    pub fn set_views(&mut self, views: Vec<wgpu::TextureView>) {
        self.views = views;
        self.active = 0;
    }

    /// Whether a command encoder is open.
    pub fn is_bound(&self) -> bool {
        self.encoder.is_some()
    }

    /// Index of the color buffer draws go to.
    pub fn active_buffer(&self) -> usize {
        self.active
    }

    fn target(&mut self) -> Option<(&mut wgpu::CommandEncoder, &wgpu::TextureView)> {
        let view = self.views.get(self.active)?;
        let encoder = self.encoder.as_mut()?;
        Some((encoder, view))
    }
}

impl Framebuffer for WgpuFramebuffer {
    fn bind(&mut self) {
        if self.encoder.is_some() {
            log::warn!("framebuffer bound twice");
            return;
        }
        self.encoder = Some(
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("scene overlay encoder"),
                }),
        );
    }

    fn activate_draw_buffer(&mut self, index: u32) {
        self.active = draw_buffer_slot(index, self.views.len());
    }

    fn unbind(&mut self) {
        if let Some(encoder) = self.encoder.take() {
            self.queue.submit(Some(encoder.finish()));
        }
    }
}

/// Picks the view for draw buffer `index`, falling back to the first view
/// when the host has fewer buffers.
fn draw_buffer_slot(index: u32, view_count: usize) -> usize {
    match usize::try_from(index) {
        Ok(slot) if slot < view_count => slot,
        _ => {
            if view_count > 0 {
                log::warn!("draw buffer {index} requested but only {view_count} available");
            }
            0
        }
    }
}

/// Rasterizes egui output with `egui-wgpu`.
pub struct WgpuPainter {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    format: wgpu::TextureFormat,
    renderer: Option<EguiRenderer>,
}

impl WgpuPainter {
    /// Creates a painter for render targets of `format`. GPU resources are
    /// created lazily by [`GraphicsBackend::init`].
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        format: wgpu::TextureFormat,
    ) -> Self {
        Self {
            device,
            queue,
            format,
            renderer: None,
        }
    }

    /// Whether GPU resources are live.
    pub fn is_initialized(&self) -> bool {
        self.renderer.is_some()
    }
}

impl GraphicsBackend<EguiDrawData> for WgpuPainter {
    type Target = WgpuFramebuffer;

    fn init(&mut self) -> Result<()> {
        if self.renderer.is_none() {
            self.renderer = Some(EguiRenderer::new(&self.device, self.format, None, 1, false));
            log::debug!("egui-wgpu renderer created for {:?}", self.format);
        }
        Ok(())
    }

    fn render_draw_data(&mut self, draw_data: &EguiDrawData, target: &mut WgpuFramebuffer) {
        let Some(renderer) = self.renderer.as_mut() else {
            log::warn!("render_draw_data called before init");
            return;
        };
        let Some((encoder, view)) = target.target() else {
            log::warn!("overlay framebuffer is not bound");
            return;
        };

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: draw_data.size_in_pixels,
            pixels_per_point: draw_data.pixels_per_point,
        };

        for (id, image_delta) in &draw_data.textures_delta.set {
            renderer.update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let callback_buffers = renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &draw_data.primitives,
            &screen_descriptor,
        );
        if !callback_buffers.is_empty() {
            self.queue.submit(callback_buffers);
        }

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene overlay render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            // egui-wgpu renders into a 'static pass
            let mut render_pass = render_pass.forget_lifetime();
            renderer.render(&mut render_pass, &draw_data.primitives, &screen_descriptor);
        }

        for id in &draw_data.textures_delta.free {
            renderer.free_texture(id);
        }
        draw_data.mark_painted();
    }

    fn shutdown(&mut self) {
        if self.renderer.take().is_some() {
            log::debug!("egui-wgpu renderer released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_buffer_slot() {
        assert_eq!(draw_buffer_slot(0, 1), 0);
        assert_eq!(draw_buffer_slot(1, 2), 1);
        assert_eq!(draw_buffer_slot(1, 1), 0);
        assert_eq!(draw_buffer_slot(3, 0), 0);
    }
}
