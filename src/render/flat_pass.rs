//! 2D colored-triangle pipeline.
//!
//! Each rigid part owns a vertex list and a single model matrix, fed to
//! the shader as a one-element instance buffer. Positions are already in
//! clip space, so there is no camera uniform.

use bytemuck::{Pod, Zeroable};
use cgmath::Matrix4;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FlatVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct PartTransform {
    model: [[f32; 4]; 4],
}

/// GPU residence of one rigid part: vertex list plus model matrix.
///
/// The vertex buffer capacity is fixed at creation; the crane's dynamic
/// parts (wheels, cable+hook) keep a constant vertex count across frames.
pub struct FlatPart {
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    capacity: usize,
    vertex_count: u32,
}

impl FlatPart {
    pub fn new(device: &wgpu::Device, vertices: &[FlatVertex]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Flat Part Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Flat Part Instance Buffer"),
            contents: bytemuck::bytes_of(&PartTransform {
                model: Matrix4::from_scale(1.0f32).into(),
            }),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        FlatPart {
            vertex_buffer,
            instance_buffer,
            capacity: vertices.len(),
            vertex_count: vertices.len() as u32,
        }
    }

    /// Replace the vertex list. The new list must fit the initial capacity.
    pub fn upload(&mut self, queue: &wgpu::Queue, vertices: &[FlatVertex]) {
        assert!(
            vertices.len() <= self.capacity,
            "part regenerated with {} vertices, capacity is {}",
            vertices.len(),
            self.capacity
        );
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        self.vertex_count = vertices.len() as u32;
    }

    pub fn set_transform(&self, queue: &wgpu::Queue, transform: Matrix4<f32>) {
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::bytes_of(&PartTransform {
                model: transform.into(),
            }),
        );
    }
}

pub struct FlatPass {
    pipeline: wgpu::RenderPipeline,
}

impl FlatPass {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Flat Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });
        let shader = device.create_shader_module(wgpu::include_wgsl!("flat.wgsl"));
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Flat Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<FlatVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<PartTransform>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(format.into())],
            }),
            primitive: wgpu::PrimitiveState {
                topology: Default::default(),
                strip_index_format: None,
                front_face: Default::default(),
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: Default::default(),
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });
        FlatPass { pipeline }
    }

    /// Draw the given parts back to front.
    pub fn record(&self, rpass: &mut wgpu::RenderPass<'_>, parts: &[&FlatPart]) {
        rpass.set_pipeline(&self.pipeline);
        for part in parts {
            rpass.set_vertex_buffer(0, part.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, part.instance_buffer.slice(..));
            rpass.draw(0..part.vertex_count, 0..1);
        }
    }
}
