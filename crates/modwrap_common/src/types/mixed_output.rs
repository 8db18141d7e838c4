use arcstr::ArcStr;
use modwrap_utils::lines_count::lines_count;
use serde::Deserialize;

/// One artifact produced by the transform stage for a module.
///
/// `output_type` is a `/` separated tag such as `js/module`, `js/script/virtual` or
/// `js/module/asset`; the `js/` family marks runnable units.
#[derive(Debug, Clone, Deserialize)]
pub struct MixedOutput {
  #[serde(rename = "type")]
  pub output_type: ArcStr,
  pub data: OutputData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputData {
  pub code: ArcStr,
  #[serde(default)]
  pub line_count: Option<u32>,
}

impl MixedOutput {
  pub fn new(output_type: impl Into<ArcStr>, code: impl Into<ArcStr>, line_count: Option<u32>) -> Self {
    Self { output_type: output_type.into(), data: OutputData { code: code.into(), line_count } }
  }

  /// A `js/module` output whose line count is taken from `code`.
  pub fn js_module(code: impl Into<ArcStr>) -> Self {
    Self::with_counted_lines("js/module", code)
  }

  /// A `js/script` output whose line count is taken from `code`.
  pub fn js_script(code: impl Into<ArcStr>) -> Self {
    Self::with_counted_lines("js/script", code)
  }

  fn with_counted_lines(output_type: &'static str, code: impl Into<ArcStr>) -> Self {
    let code = code.into();
    let line_count = lines_count(&code);
    Self::new(output_type, code, Some(line_count))
  }

  pub fn is_js(&self) -> bool {
    self.output_type.starts_with("js/")
  }

  pub fn is_script(&self) -> bool {
    self.output_type.starts_with("js/script")
  }
}

#[test]
fn test_output_families() {
  let module = MixedOutput::js_module("__d(function() {\n});");
  assert!(module.is_js());
  assert!(!module.is_script());
  assert_eq!(module.data.line_count, Some(1));

  let script = MixedOutput::new("js/script/virtual", "var __DEV__ = true;", Some(0));
  assert!(script.is_js() && script.is_script());

  assert!(!MixedOutput::new("css", "a {}", Some(0)).is_js());
  assert!(!MixedOutput::new("jsx/module", "", Some(0)).is_js());
}

#[test]
fn test_deserialize_transform_output() {
  let output: MixedOutput = serde_json::from_str(
    r#"{ "type": "js/module", "data": { "code": "__d(function() {});", "lineCount": 1, "map": [] } }"#,
  )
  .unwrap();
  assert_eq!(&*output.output_type, "js/module");
  assert_eq!(output.data.line_count, Some(1));

  let output: MixedOutput =
    serde_json::from_str(r#"{ "type": "js/module", "data": { "code": "" } }"#).unwrap();
  assert_eq!(output.data.line_count, None);
}
