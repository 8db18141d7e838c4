use arcstr::ArcStr;
use modwrap_common::{MixedOutput, Module};
use modwrap_error::{SerializeError, SerializeResult};

/// The single runnable output of a module, with its line count known to be present.
#[derive(Debug, Clone, Copy)]
pub struct JsOutput<'a> {
  pub output_type: &'a ArcStr,
  pub code: &'a ArcStr,
  pub line_count: u32,
}

impl JsOutput<'_> {
  /// Scripts are emitted as is and never registered as addressable modules.
  pub fn is_script(&self) -> bool {
    self.output_type.starts_with("js/script")
  }
}

pub fn is_js_output(output: &MixedOutput) -> bool {
  output.is_js()
}

pub fn is_js_module(module: &Module) -> bool {
  module.output.iter().any(is_js_output)
}

/// Selects the one `js/` output of `module`. Anything but exactly one such output, or one
/// without a line count, is a defect of the transform stage.
pub fn get_js_output(module: &Module) -> SerializeResult<JsOutput<'_>> {
  let mut js_outputs = module.output.iter().filter(|output| is_js_output(output));
  let (Some(output), None) = (js_outputs.next(), js_outputs.next()) else {
    return Err(SerializeError::JsOutputCount {
      module: module.path.to_string(),
      count: module.output.iter().filter(|output| is_js_output(output)).count(),
    });
  };

  let line_count = output.data.line_count.ok_or_else(|| SerializeError::MissingLineCount {
    module: module.path.to_string(),
    output_type: output.output_type.to_string(),
  })?;

  Ok(JsOutput { output_type: &output.output_type, code: &output.data.code, line_count })
}
