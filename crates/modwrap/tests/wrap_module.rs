use std::{collections::HashMap, path::PathBuf, sync::Arc};

use modwrap::{
  get_module_params, normalize_options, wrap_module, AsyncDependencyType, Dependency,
  DependencyMap, MixedOutput, Module, ModuleId, NormalizedSerializerOptions, SerializeError,
  SerializerOptions, SharedCreateModuleId,
};

const HOME: &str = "/proj/src/screens/Home.js";
const UTIL: &str = "/proj/src/lib/util.js";
const HOME_CODE: &str =
  "__d(function (global, _$$_REQUIRE, _$$_IMPORT_DEFAULT, _$$_IMPORT_ALL, module, exports, _dependencyMap) {\n  _$$_REQUIRE(_dependencyMap[0]);\n});";

fn resolver(ids: &[(&str, u32)]) -> SharedCreateModuleId {
  let ids = ids.iter().map(|(path, id)| ((*path).to_string(), *id)).collect::<HashMap<_, _>>();
  Arc::new(move |path: &str| ids.get(path).map_or_else(|| ModuleId::from(path), |id| ModuleId::Number(*id)))
}

fn options(raw: SerializerOptions) -> NormalizedSerializerOptions {
  let raw = SerializerOptions {
    project_root: Some(PathBuf::from("/proj")),
    server_root: Some(PathBuf::from("/proj")),
    ..raw
  };
  normalize_options(raw, resolver(&[(HOME, 1), (UTIL, 42)])).unwrap()
}

fn home(dependencies: Vec<Dependency>) -> Module {
  Module::new(HOME, dependencies, vec![MixedOutput::js_module(HOME_CODE)])
}

fn home_src_with(params: &str) -> String {
  let close_paren = HOME_CODE.len() - 2;
  format!("{},{params}{}", &HOME_CODE[..close_paren], &HOME_CODE[close_paren..])
}

#[test]
fn scripts_pass_through() {
  let module = Module::new(
    "/proj/node_modules/react-native/polyfills.js",
    vec![Dependency::new(UTIL).with_async_type(AsyncDependencyType::Async)],
    vec![MixedOutput::js_script("(function (global) { global.__DEV__ = true; })(this);")],
  );
  let wrapped = wrap_module(&module, &options(SerializerOptions::default())).unwrap();
  assert_eq!(wrapped.src.as_str(), "(function (global) { global.__DEV__ = true; })(this);");
  assert!(wrapped.paths.is_empty());
}

#[test]
fn sync_dependency_renders_id_list() {
  let module = home(vec![Dependency::new(UTIL)]);
  let options = options(SerializerOptions::default());

  let params = get_module_params(&module, &options).unwrap();
  assert_eq!(params.module_id, ModuleId::Number(1));
  assert_eq!(params.dependency_map, DependencyMap::Ids(vec![ModuleId::Number(42)]));
  assert_eq!(params.verbose_name, None);

  let wrapped = wrap_module(&module, &options).unwrap();
  assert_eq!(wrapped.src.as_str(), home_src_with("1,[42]"));
  assert!(wrapped.paths.is_empty());
}

#[test]
fn dependency_order_is_preserved() {
  let module = home(vec![
    Dependency::new("/proj/src/c.js"),
    Dependency::new(UTIL),
    Dependency::new("/proj/src/a.js"),
  ]);
  let params = get_module_params(&module, &options(SerializerOptions::default())).unwrap();
  assert_eq!(
    params.dependency_map.ids(),
    [ModuleId::from("/proj/src/c.js"), ModuleId::Number(42), ModuleId::from("/proj/src/a.js")]
  );
  assert_eq!(
    params.to_json_params().unwrap(),
    ["1", r#"["/proj/src/c.js",42,"/proj/src/a.js"]"#]
  );
}

#[test]
fn async_dependency_in_development() {
  let module = home(vec![Dependency::new(UTIL).with_async_type(AsyncDependencyType::Async)]);
  let options = options(SerializerOptions {
    dev: Some(true),
    source_url: Some("http://h/src/screens/Home.bundle?platform=ios&dev=true".to_string()),
    ..SerializerOptions::default()
  });

  let wrapped = wrap_module(&module, &options).unwrap();
  let expected_path = "/src/lib/util.bundle?platform=ios&dev=true&modulesOnly=true&runModule=false";
  assert_eq!(wrapped.paths.get(&ModuleId::Number(42)), Some(expected_path));
  assert_eq!(wrapped.paths.len(), 1);
  assert_eq!(
    wrapped.src.as_str(),
    home_src_with(&format!(
      r#"1,{{"0":42,"paths":{{"42":"{expected_path}"}}}},"src/screens/Home.js""#
    ))
  );
}

#[test]
fn async_dependency_in_production() {
  let module = home(vec![
    Dependency::new("/proj/src/lib/eager.js"),
    Dependency::new(UTIL).with_async_type(AsyncDependencyType::Async),
  ]);
  let options = options(SerializerOptions {
    source_url: Some("http://h/index.bundle?platform=web&dev=false&minify=true".to_string()),
    ..SerializerOptions::default()
  });

  let params = get_module_params(&module, &options).unwrap();
  let path = params.paths().and_then(|paths| paths.get(&ModuleId::Number(42))).unwrap().to_string();
  assert!(path.starts_with("/_expo/static/js/web/util-"), "{path}");
  assert!(path.ends_with(".js"));
  assert!(!path.contains('?'));
  assert_eq!(params.dependency_map.get(0), Some(&ModuleId::from("/proj/src/lib/eager.js")));
  assert_eq!(params.dependency_map.get(1), Some(&ModuleId::Number(42)));

  let again = get_module_params(&module, &options).unwrap();
  assert_eq!(again.paths().and_then(|paths| paths.get(&ModuleId::Number(42))), Some(path.as_str()));
}

#[test]
fn configured_platform_wins_over_url() {
  let module = home(vec![Dependency::new(UTIL).with_async_type(AsyncDependencyType::Prefetch)]);
  let options = options(SerializerOptions {
    platform: Some("android".to_string()),
    source_url: Some("http://h/index.bundle?platform=ios".to_string()),
    ..SerializerOptions::default()
  });
  let wrapped = wrap_module(&module, &options).unwrap();
  assert!(wrapped.paths.get(&ModuleId::Number(42)).unwrap().starts_with("/_expo/static/js/android/"));
}

#[test]
fn wrapping_is_idempotent() {
  let module = home(vec![
    Dependency::new(UTIL).with_async_type(AsyncDependencyType::Async),
    Dependency::new("/proj/src/b.js"),
  ]);
  for dev in [true, false] {
    let options = options(SerializerOptions {
      dev: Some(dev),
      source_url: Some("http://h/index.bundle?platform=ios".to_string()),
      ..SerializerOptions::default()
    });
    assert_eq!(wrap_module(&module, &options).unwrap(), wrap_module(&module, &options).unwrap());
  }
}

#[test]
fn async_dependency_without_source_url() {
  let module = home(vec![Dependency::new(UTIL).with_async_type(AsyncDependencyType::Async)]);

  let wrapped = wrap_module(&module, &options(SerializerOptions::default())).unwrap();
  assert_eq!(wrapped.src.as_str(), home_src_with("1,[42]"));
  assert!(wrapped.paths.is_empty());

  let strict = options(SerializerOptions { include_async_paths: Some(true), ..SerializerOptions::default() });
  let err = wrap_module(&module, &strict).unwrap_err();
  assert!(matches!(err, SerializeError::MissingSourceUrl { .. }));
  assert!(err.to_string().contains(UTIL));
  assert!(err.to_string().contains(HOME));
}

#[test]
fn malformed_source_url_only_fails_async_edges() {
  let raw = || SerializerOptions {
    source_url: Some("not a url".to_string()),
    ..SerializerOptions::default()
  };

  let sync_only = home(vec![Dependency::new(UTIL)]);
  assert!(wrap_module(&sync_only, &options(raw())).is_ok());

  let with_async = home(vec![Dependency::new(UTIL).with_async_type(AsyncDependencyType::Weak)]);
  let err = wrap_module(&with_async, &options(raw())).unwrap_err();
  assert!(matches!(err, SerializeError::InvalidSourceUrl { .. }));
}

#[test]
fn module_without_js_output() {
  let module = Module::new(HOME, vec![], vec![MixedOutput::new("css", "a {}", Some(0))]);
  let err = wrap_module(&module, &options(SerializerOptions::default())).unwrap_err();
  assert!(matches!(err, SerializeError::JsOutputCount { count: 0, .. }));
  assert!(err.to_string().contains(HOME));
}

#[test]
fn module_with_two_js_outputs() {
  let module = Module::new(
    HOME,
    vec![],
    vec![MixedOutput::js_module(HOME_CODE), MixedOutput::js_module(HOME_CODE)],
  );
  let err = wrap_module(&module, &options(SerializerOptions::default())).unwrap_err();
  assert!(matches!(err, SerializeError::JsOutputCount { count: 2, .. }));
  assert!(err.to_string().contains("has 2 JS outputs"));
}

#[test]
fn module_without_registration_call() {
  let module = Module::new(HOME, vec![], vec![MixedOutput::js_module("var a = 1;")]);
  let err = wrap_module(&module, &options(SerializerOptions::default())).unwrap_err();
  assert!(matches!(err, SerializeError::MissingDefineCall { .. }));
}
