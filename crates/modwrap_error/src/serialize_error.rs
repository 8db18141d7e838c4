use thiserror::Error;

/// Failures raised while wrapping a single module. All of them point at a defect in the
/// upstream transform stage or in the build configuration and are never retried.
#[derive(Debug, Error)]
pub enum SerializeError {
  #[error("Modules must have exactly one JS output, but {module} has {count} JS outputs.")]
  JsOutputCount { module: String, count: usize },

  #[error(
    "JS output must populate lineCount, but {module} has {output_type} output without lineCount"
  )]
  MissingLineCount { module: String, output_type: String },

  #[error(
    "sourceUrl is required to address the async dependency {dependency} of {module}, but none was provided"
  )]
  MissingSourceUrl { module: String, dependency: String },

  #[error("Invalid source url '{url}': {source}")]
  InvalidSourceUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },

  #[error(
    "Cannot determine the platform for the split bundle of {dependency}: no platform was configured and '{url}' has no platform parameter"
  )]
  MissingPlatform { dependency: String, url: String },

  #[error("Failed to parse the compiled code of {module}: {message}")]
  DefineCallParse { module: String, message: String },

  #[error("Compiled code of {module} does not end with a module registration call")]
  MissingDefineCall { module: String },

  #[error("Failed to render the module params of {module}: {source}")]
  Json {
    module: String,
    #[source]
    source: serde_json::Error,
  },
}

pub type SerializeResult<T> = Result<T, SerializeError>;

#[test]
fn test_output_count_message() {
  let error = SerializeError::JsOutputCount { module: "/proj/src/App.js".to_string(), count: 2 };
  assert_eq!(
    error.to_string(),
    "Modules must have exactly one JS output, but /proj/src/App.js has 2 JS outputs."
  );
}
