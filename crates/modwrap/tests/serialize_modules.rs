use std::{path::PathBuf, sync::Arc};

use modwrap::{
  normalize_options, serialize_modules, AsyncDependencyType, CreateModuleId, Dependency,
  MixedOutput, Module, ModuleId, ModuleIdFactory, NormalizedSerializerOptions, SerializerOptions,
};

fn options(factory: Arc<ModuleIdFactory>) -> NormalizedSerializerOptions {
  normalize_options(
    SerializerOptions {
      dev: Some(true),
      project_root: Some(PathBuf::from("/proj")),
      source_url: Some("http://localhost:8081/index.bundle?platform=ios&dev=true".to_string()),
      ..SerializerOptions::default()
    },
    factory,
  )
  .unwrap()
}

fn graph() -> Vec<Module> {
  vec![
    Module::new("/proj/prelude.js", vec![], vec![MixedOutput::js_script("var __DEV__=true;")]),
    Module::new(
      "/proj/index.js",
      vec![
        Dependency::new("/proj/App.js"),
        Dependency::new("/proj/Lazy.js").with_async_type(AsyncDependencyType::Async),
      ],
      vec![MixedOutput::js_module("__d(function() {});")],
    ),
    Module::new("/proj/logo.png", vec![], vec![MixedOutput::new("asset", "", Some(0))]),
    Module::new("/proj/App.js", vec![], vec![MixedOutput::js_module("__d(function() {});")]),
    Module::new("/proj/Lazy.js", vec![], vec![MixedOutput::js_module("__d(function() {});")]),
  ]
}

#[test]
fn serializes_js_modules_in_order() {
  let factory = Arc::new(ModuleIdFactory::new());
  for path in ["/proj/index.js", "/proj/App.js", "/proj/Lazy.js"] {
    factory.create_module_id(path);
  }

  let serialized = serialize_modules(&graph(), &options(Arc::clone(&factory))).unwrap();

  let paths = serialized.modules.iter().map(|module| &*module.path).collect::<Vec<_>>();
  assert_eq!(paths, ["/proj/prelude.js", "/proj/index.js", "/proj/App.js", "/proj/Lazy.js"]);
  assert_eq!(
    serialized.modules[1].src.as_str(),
    r#"__d(function() {},0,{"0":1,"1":2,"paths":{"2":"/Lazy.bundle?platform=ios&dev=true&modulesOnly=true&runModule=false"}},"index.js");"#
  );
  assert_eq!(serialized.modules[2].src.as_str(), r#"__d(function() {},1,[],"App.js");"#);
  assert_eq!(
    serialized.paths.get(&ModuleId::Number(2)),
    Some("/Lazy.bundle?platform=ios&dev=true&modulesOnly=true&runModule=false")
  );
  assert!(serialized.join().starts_with("var __DEV__=true;\n__d(function() {},0,"));
}

#[test]
fn reports_every_broken_module() {
  let mut modules = graph();
  modules.push(Module::new("/proj/Broken.js", vec![], vec![MixedOutput::new("js/module", "", None)]));
  modules.push(Module::new(
    "/proj/Twice.js",
    vec![],
    vec![MixedOutput::js_module("__d(function() {});"), MixedOutput::js_script("a();")],
  ));

  let errors = serialize_modules(&modules, &options(Arc::new(ModuleIdFactory::new()))).unwrap_err();
  assert_eq!(errors.len(), 2);
  assert!(errors[0].to_string().contains("/proj/Broken.js"));
  assert!(errors[1].to_string().contains("/proj/Twice.js has 2 JS outputs"));
}
