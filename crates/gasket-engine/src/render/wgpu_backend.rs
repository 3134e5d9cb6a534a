use wgpu::util::DeviceExt;

use crate::coords::Vec2;
use crate::device::Gpu;

use super::shaders::check_wgsl;
use super::{DrawCall, GraphicsContext, RenderError, ShaderStage, VertexLayout};

/// Compiled WGSL module tagged with the stage it was compiled for.
#[derive(Debug)]
pub struct WgpuShader {
    module: wgpu::ShaderModule,
    stage: ShaderStage,
}

/// Linked render pipeline plus the vertex layout baked into it.
#[derive(Debug)]
pub struct WgpuProgram {
    pipeline: wgpu::RenderPipeline,
    layout: VertexLayout,
}

impl GraphicsContext for Gpu<'_> {
    type Shader = WgpuShader;
    type Program = WgpuProgram;
    type Buffer = wgpu::Buffer;

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<WgpuShader, String> {
        check_wgsl(stage, source)?;

        // Anything captured before this point belongs to an earlier operation.
        self.errors().drain();

        let module = self.device().create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(match stage {
                ShaderStage::Vertex => "gasket vertex shader",
                ShaderStage::Fragment => "gasket fragment shader",
            }),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let info = pollster::block_on(module.get_compilation_info());
        let (mut diagnostics, warnings) = split_compilation_messages(&info.messages);
        for line in warnings {
            log::warn!("{stage} shader: {line}");
        }

        let captured = self.errors().drain();
        if diagnostics.is_empty() {
            diagnostics = captured;
        }

        if !diagnostics.is_empty() {
            // Invalid module; release it rather than hand out a partial shader.
            drop(module);
            return Err(diagnostics.join("\n"));
        }

        Ok(WgpuShader { module, stage })
    }

    fn link_program(
        &mut self,
        vertex: &WgpuShader,
        fragment: &WgpuShader,
    ) -> Result<WgpuProgram, String> {
        if vertex.stage != ShaderStage::Vertex || fragment.stage != ShaderStage::Fragment {
            return Err(format!(
                "expected vertex + fragment shaders, got {} + {}",
                vertex.stage, fragment.stage
            ));
        }

        self.errors().drain();

        let layout = VertexLayout::POSITION_2D;
        let attributes = [wgpu::VertexAttribute {
            format: vertex_format(layout.components)
                .ok_or_else(|| format!("unsupported attribute width {}", layout.components))?,
            offset: 0,
            shader_location: layout.location,
        }];

        let pipeline_layout =
            self.device()
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("gasket pipeline layout"),
                    bind_group_layouts: &[],
                    immediate_size: 0,
                });

        let pipeline = self.device().create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("gasket pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex.module,
                entry_point: Some(ShaderStage::Vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: layout.stride,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &attributes,
                }],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment.module,
                entry_point: Some(ShaderStage::Fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.surface_format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let captured = self.errors().drain();
        if !captured.is_empty() {
            return Err(captured.join("\n"));
        }

        Ok(WgpuProgram { pipeline, layout })
    }

    fn upload_vertices(&mut self, vertices: &[Vec2]) -> wgpu::Buffer {
        self.device().create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gasket vertex buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        })
    }

    fn draw(&mut self, call: &DrawCall<'_, Self>) -> Result<(), RenderError> {
        debug_assert_eq!(
            call.layout, call.program.layout,
            "draw layout differs from the layout the program was linked with"
        );

        let mut frame = match self.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let msg = err.to_string();
                let action = self.handle_surface_error(err);
                log::warn!("surface error ({msg}); {action:?}");
                return Err(if action.is_recoverable() {
                    RenderError::FrameSkipped
                } else {
                    RenderError::FrameUnavailable(msg)
                });
            }
        };

        self.errors().drain();

        // Pass is dropped before the encoder is moved into submit().
        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("gasket pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(call.clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            // Empty buffers cannot be sliced; the clear still happens.
            if call.vertex_count > 0 {
                rpass.set_pipeline(&call.program.pipeline);
                rpass.set_vertex_buffer(0, call.buffer.slice(..));
                rpass.draw(0..call.vertex_count, 0..1);
            }
        }

        self.submit(frame);

        let captured = self.errors().drain();
        if !captured.is_empty() {
            return Err(RenderError::FrameUnavailable(captured.join("\n")));
        }

        Ok(())
    }
}

fn vertex_format(components: u32) -> Option<wgpu::VertexFormat> {
    match components {
        1 => Some(wgpu::VertexFormat::Float32),
        2 => Some(wgpu::VertexFormat::Float32x2),
        3 => Some(wgpu::VertexFormat::Float32x3),
        4 => Some(wgpu::VertexFormat::Float32x4),
        _ => None,
    }
}

/// Splits compilation messages into errors and everything else (warnings,
/// infos), each rendered as `line:column: message`.
fn split_compilation_messages(messages: &[wgpu::CompilationMessage]) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut others = Vec::new();
    for msg in messages {
        let line = format_compilation_message(msg);
        if msg.message_type == wgpu::CompilationMessageType::Error {
            errors.push(line);
        } else {
            others.push(line);
        }
    }
    (errors, others)
}

fn format_compilation_message(msg: &wgpu::CompilationMessage) -> String {
    match &msg.location {
        Some(loc) => format!("{}:{}: {}", loc.line_number, loc.line_position, msg.message),
        None => msg.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_layout_maps_to_float32x2() {
        let layout = VertexLayout::POSITION_2D;
        let format = vertex_format(layout.components).unwrap();
        assert_eq!(format, wgpu::VertexFormat::Float32x2);
        assert_eq!(format.size(), layout.stride);
    }

    #[test]
    fn unsupported_widths_have_no_format() {
        assert_eq!(vertex_format(0), None);
        assert_eq!(vertex_format(5), None);
    }

    fn message(
        text: &str,
        message_type: wgpu::CompilationMessageType,
        line: Option<u32>,
    ) -> wgpu::CompilationMessage {
        wgpu::CompilationMessage {
            message: text.to_string(),
            message_type,
            location: line.map(|line_number| wgpu::SourceLocation {
                line_number,
                line_position: 5,
                offset: 0,
                length: 1,
            }),
        }
    }

    #[test]
    fn compilation_errors_are_separated_from_warnings() {
        let messages = [
            message("unused variable", wgpu::CompilationMessageType::Warning, Some(2)),
            message("expected `;`", wgpu::CompilationMessageType::Error, Some(3)),
            message("note", wgpu::CompilationMessageType::Info, None),
            message("unknown type", wgpu::CompilationMessageType::Error, None),
        ];

        let (errors, others) = split_compilation_messages(&messages);
        assert_eq!(errors, vec!["3:5: expected `;`".to_string(), "unknown type".to_string()]);
        assert_eq!(others, vec!["2:5: unused variable".to_string(), "note".to_string()]);
    }

    #[test]
    fn no_messages_means_no_errors() {
        let (errors, others) = split_compilation_messages(&[]);
        assert!(errors.is_empty());
        assert!(others.is_empty());
    }
}
