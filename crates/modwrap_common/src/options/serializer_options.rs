use std::path::PathBuf;

use serde::Deserialize;

/// Raw serializer configuration, as read from a config file or assembled by the caller.
/// Unset fields are filled in by `normalize_options`.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SerializerOptions {
  pub dev: Option<bool>,
  /// Fail instead of emitting a plain id when an async dependency cannot be addressed.
  pub include_async_paths: Option<bool>,
  /// Platform of the split bundles. Falls back to the `platform` parameter of `source_url`.
  pub platform: Option<String>,
  pub project_root: Option<PathBuf>,
  /// Directory split bundle paths are computed relative to. Defaults to `project_root`.
  pub server_root: Option<PathBuf>,
  /// URL the bundle being serialized was requested with.
  pub source_url: Option<String>,
}

#[test]
fn test_deserialize_options() {
  let options: SerializerOptions = serde_json::from_str(
    r#"{ "dev": true, "serverRoot": "/repo", "sourceUrl": "http://h/index.bundle?platform=ios" }"#,
  )
  .unwrap();
  assert_eq!(options.dev, Some(true));
  assert_eq!(options.server_root, Some(PathBuf::from("/repo")));
  assert_eq!(options.project_root, None);

  assert!(serde_json::from_str::<SerializerOptions>(r#"{ "minify": true }"#).is_err());
}
