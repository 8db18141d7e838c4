use arcstr::ArcStr;
use modwrap_common::{Module, NormalizedSerializerOptions};
use modwrap_ecmascript::{DefineCall, DefineCallError};
use modwrap_error::{SerializeError, SerializeResult};

use crate::{dependency_map::SplitPaths, js_output::get_js_output, module_params::get_module_params};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedModule {
  pub src: ArcStr,
  /// Split bundle paths discovered while wrapping, keyed by module id.
  pub paths: SplitPaths,
}

/// Produces the final source of `module`: scripts pass through untouched, modules get their id
/// and dependency map appended to the registration call.
pub fn wrap_module(
  module: &Module,
  options: &NormalizedSerializerOptions,
) -> SerializeResult<WrappedModule> {
  let output = get_js_output(module)?;

  if output.is_script() {
    return Ok(WrappedModule { src: output.code.clone(), paths: SplitPaths::default() });
  }

  let params = get_module_params(module, options)?;
  let rendered_params = params
    .to_json_params()
    .map_err(|source| SerializeError::Json { module: module.path.to_string(), source })?;

  let define_call = DefineCall::parse(output.code).map_err(|err| match err {
    DefineCallError::Parse(message) => {
      SerializeError::DefineCallParse { module: module.path.to_string(), message }
    }
    DefineCallError::Missing => SerializeError::MissingDefineCall { module: module.path.to_string() },
  })?;
  let src = ArcStr::from(define_call.render(&rendered_params));

  tracing::debug!(module = %module.path, split_paths = params.paths().map_or(0, SplitPaths::len), "wrapped module");
  Ok(WrappedModule { src, paths: params.into_paths() })
}
