use crate::RenderError;
use crate::camera::FollowCamera;
use crate::program::{DEPTH_FORMAT, ShaderProgram};
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use dungeon_mesh::{MeshData, WorldMesh};
use wgpu::util::DeviceExt;

pub const CLEAR_COLOR: [f32; 3] = [0.05, 0.06, 0.08];
pub const FLOOR_COLOR: [f32; 3] = [0.25, 0.28, 0.32];
pub const WALL_COLOR: [f32; 3] = [0.78, 0.80, 0.85];

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct MaterialUniform {
    color: [f32; 4],
}

impl MaterialUniform {
    fn new([r, g, b]: [f32; 3]) -> Self {
        Self {
            color: [r, g, b, 1.0],
        }
    }
}

/// A static mesh uploaded to the GPU together with its draw color.
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    color_buffer: wgpu::Buffer,
    color_bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    pub fn new(
        device: &wgpu::Device,
        program: &ShaderProgram,
        label: &str,
        mesh: &MeshData,
        color: [f32; 3],
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("material_buffer"),
            contents: bytemuck::bytes_of(&MaterialUniform::new(color)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let color_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("material_bind_group"),
            layout: program.material_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: color_buffer.as_entire_binding(),
            }],
        });

        Self {
            vertex_buffer,
            vertex_count: mesh.vertex_count(),
            color_buffer,
            color_bind_group,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn set_color(&self, queue: &wgpu::Queue, color: [f32; 3]) {
        queue.write_buffer(
            &self.color_buffer,
            0,
            bytemuck::bytes_of(&MaterialUniform::new(color)),
        );
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.vertex_count == 0 {
            return;
        }
        pass.set_bind_group(1, &self.color_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..self.vertex_count, 0..1);
    }
}

/// wgpu-based level renderer.
pub struct WgpuRenderer {
    program: ShaderProgram,
    floor: GpuMesh,
    walls: GpuMesh,
    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        world: &WorldMesh,
    ) -> Result<Self, RenderError> {
        let program = ShaderProgram::new(device, shaders::WORLD_SHADER, surface_format)?;
        let floor = GpuMesh::new(
            device,
            &program,
            "floor_vertex_buffer",
            &world.floor,
            FLOOR_COLOR,
        );
        let walls = GpuMesh::new(
            device,
            &program,
            "wall_vertex_buffer",
            &world.walls,
            WALL_COLOR,
        );
        let depth_texture = Self::create_depth_texture(device, width, height);

        tracing::info!(
            "uploaded level geometry: {} floor vertices, {} wall vertices",
            floor.vertex_count(),
            walls.vertex_count()
        );

        Ok(Self {
            program,
            floor,
            walls,
            depth_texture,
            surface_format,
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn floor(&self) -> &GpuMesh {
        &self.floor
    }

    pub fn walls(&self) -> &GpuMesh {
        &self.walls
    }

    /// Render one frame: floor, then walls.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &FollowCamera,
    ) {
        self.program
            .set_view_proj(queue, camera.projection_matrix(), camera.view_matrix());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let [r, g, b] = CLEAR_COLOR;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            self.program.bind(&mut pass);
            self.floor.draw(&mut pass);
            self.walls.draw(&mut pass);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_uniform_is_opaque_vec4() {
        let m = MaterialUniform::new(WALL_COLOR);
        assert_eq!(m.color, [0.78, 0.80, 0.85, 1.0]);
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 16);
    }
}
