//! Instance data for the sprite pipeline

use bytemuck::{Pod, Zeroable};

use crate::scene::Sprite;

/// Per-instance GPU data (must match shader locations 1..3)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 3],
    pub scale: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

impl From<&Sprite> for SpriteInstance {
    fn from(sprite: &Sprite) -> Self {
        Self {
            center: sprite.position.to_array(),
            scale: sprite.scale,
            color: sprite.color,
            _pad: 0.0,
        }
    }
}

impl SpriteInstance {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// One corner of the unit billboard quad (shader location 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    pub corner: [f32; 2],
}

impl QuadVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Two triangles covering [-1, 1]^2
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { corner: [-1.0, -1.0] },
    QuadVertex { corner: [1.0, -1.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [-1.0, -1.0] },
    QuadVertex { corner: [1.0, 1.0] },
    QuadVertex { corner: [-1.0, 1.0] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_instance_layout_matches_stride() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
        let desc = SpriteInstance::desc();
        assert_eq!(desc.array_stride, 32);
        assert_eq!(desc.attributes.len(), 3);
    }

    #[test]
    fn test_sprite_conversion() {
        let sprite = Sprite {
            position: Vec3::new(1.0, 2.0, 3.0),
            scale: 0.1,
            color: [0.6, 0.3, 0.9],
        };
        let instance = SpriteInstance::from(&sprite);
        assert_eq!(instance.center, [1.0, 2.0, 3.0]);
        assert_eq!(instance.scale, 0.1);
        assert_eq!(instance.color, [0.6, 0.3, 0.9]);
    }
}
