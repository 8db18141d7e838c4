use std::path::Path;

use modwrap_common::{Dependency, Module, NormalizedSerializerOptions};
use modwrap_error::{SerializeError, SerializeResult};
use modwrap_utils::{
  concat_string, file_name::file_name_from_contents, jsc_safe_url::to_normal_url,
  path_ext::PathExt,
};
use url::{form_urlencoded, Url};

/// The URL the current bundle was requested with, parsed once per module.
#[derive(Debug, Clone)]
pub struct SourceUrl {
  raw: String,
  query: Vec<(String, String)>,
}

impl SourceUrl {
  pub fn parse(source_url: &str) -> SerializeResult<Self> {
    let url = Url::parse(&to_normal_url(source_url)).map_err(|source| {
      SerializeError::InvalidSourceUrl { url: source_url.to_string(), source }
    })?;
    Ok(Self { raw: source_url.to_string(), query: url.query_pairs().into_owned().collect() })
  }

  pub fn as_str(&self) -> &str {
    &self.raw
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.query.iter().find(|(name, _)| name == key).map(|(_, value)| value.as_str())
  }

  /// Query of a split bundle: the bundle's own params with `modulesOnly=true` and
  /// `runModule=false`, so loading it only registers modules.
  pub fn split_bundle_query(&self) -> String {
    let mut query = self.query.clone();
    set_param(&mut query, "modulesOnly", "true");
    set_param(&mut query, "runModule", "false");
    form_urlencoded::Serializer::new(String::new()).extend_pairs(query.iter()).finish()
  }
}

/// `URLSearchParams#set`: the first occurrence is updated in place and later ones are removed,
/// a missing param is appended.
fn set_param(query: &mut Vec<(String, String)>, key: &str, value: &str) {
  let mut first = true;
  query.retain_mut(|(name, current)| {
    if name != key {
      return true;
    }
    if first {
      first = false;
      value.clone_into(current);
      return true;
    }
    false
  });
  if first {
    query.push((key.to_string(), value.to_string()));
  }
}

/// Address of a split bundle on the development server:
/// `/<dir relative to server root>/<stem>.bundle?<split bundle query>`.
pub fn dev_split_bundle_path(
  dependency_path: &Path,
  server_root: &Path,
  source_url: &SourceUrl,
) -> String {
  concat_string!(
    "/",
    dependency_path.relative_stem(server_root),
    ".bundle?",
    source_url.split_bundle_query()
  )
}

#[derive(Debug, Clone, Copy)]
pub struct ExportPathOptions<'a> {
  pub platform: &'a str,
  pub server_root: &'a Path,
}

/// Static file a split bundle is exported to, e.g. `_expo/static/js/ios/util-<hash>.js`.
/// Only depends on the dependency path, the platform and the server root.
pub fn export_path_for_dependency_with_options(
  dependency_path: &Path,
  options: &ExportPathOptions<'_>,
) -> String {
  let relative_pathname = dependency_path.relative_stem(options.server_root);
  let name = file_name_from_contents(&relative_pathname, &relative_pathname);
  concat_string!("_expo/static/js/", options.platform, "/", name, ".js")
}

/// Like [`export_path_for_dependency_with_options`], with the platform taken from the
/// configuration or, failing that, from the `platform` param of the source url.
pub fn export_path_for_dependency(
  dependency_path: &Path,
  platform: Option<&str>,
  server_root: &Path,
  source_url: &SourceUrl,
) -> SerializeResult<String> {
  let platform = platform.or_else(|| source_url.get("platform")).ok_or_else(|| {
    SerializeError::MissingPlatform {
      dependency: dependency_path.to_string_lossy().into_owned(),
      url: source_url.as_str().to_string(),
    }
  })?;
  Ok(export_path_for_dependency_with_options(dependency_path, &ExportPathOptions {
    platform,
    server_root,
  }))
}

/// Computes where the bundle of an async `dependency` of `module` can be fetched from.
pub fn split_path_for_dependency(
  module: &Module,
  dependency: &Dependency,
  options: &NormalizedSerializerOptions,
  source_url: Option<&SourceUrl>,
) -> SerializeResult<String> {
  let source_url = source_url.ok_or_else(|| SerializeError::MissingSourceUrl {
    module: module.path.to_string(),
    dependency: dependency.absolute_path.to_string(),
  })?;

  let dependency_path: &Path = dependency.absolute_path.as_ref();
  let path = if options.dev {
    dev_split_bundle_path(dependency_path, &options.server_root, source_url)
  } else {
    let export_path = export_path_for_dependency(
      dependency_path,
      options.platform.as_deref(),
      &options.server_root,
      source_url,
    )?;
    concat_string!("/", export_path)
  };

  tracing::debug!(module = %module.path, dependency = %dependency.absolute_path, %path, "split bundle path");
  Ok(path)
}
