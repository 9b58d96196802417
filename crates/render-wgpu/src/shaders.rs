/// WGSL shader for the level geometry: flat per-mesh color with a fixed
/// directional light so wall faces read apart.
pub const WORLD_SHADER: &str = r#"
struct Camera {
    proj: mat4x4<f32>,
    view: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct Material {
    color: vec4<f32>,
};

@group(1) @binding(0)
var<uniform> material: Material;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = camera.proj * camera.view * vec4<f32>(vertex.position, 1.0);
    out.normal = vertex.normal;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let light_dir = normalize(vec3<f32>(0.3, 1.0, 0.5));
    let ambient = 0.6;
    let diffuse = max(dot(normalize(in.normal), light_dir), 0.0);
    let lighting = ambient + diffuse * 0.4;
    return vec4<f32>(material.color.rgb * lighting, 1.0);
}
"#;
