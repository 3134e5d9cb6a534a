use wgpu::naga;

use super::ShaderStage;

/// Pass-through vertex stage: `vec2` position at location 0 to clip space.
pub const VERTEX_SHADER_SRC: &str = include_str!("shaders/gasket_vs.wgsl");

/// Constant opaque white fill.
pub const FRAGMENT_SHADER_SRC: &str = include_str!("shaders/gasket_fs.wgsl");

/// Parses and validates `source` as WGSL and checks it defines `stage`'s entry
/// point.
///
/// Runs on the CPU before anything reaches the device, so a malformed source
/// never creates a shader module. The error is the rendered naga diagnostic.
pub(crate) fn check_wgsl(stage: ShaderStage, source: &str) -> Result<(), String> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| e.emit_to_string(source))?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(&module)
    .map_err(|e| e.emit_to_string(source))?;

    let naga_stage = match stage {
        ShaderStage::Vertex => naga::ShaderStage::Vertex,
        ShaderStage::Fragment => naga::ShaderStage::Fragment,
    };
    let name = stage.entry_point();
    if !module
        .entry_points
        .iter()
        .any(|ep| ep.stage == naga_stage && ep.name == name)
    {
        return Err(format!("no @{stage} entry point named `{name}`"));
    }

    Ok(())
}
