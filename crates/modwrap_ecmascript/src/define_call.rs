use oxc::{
  allocator::Allocator,
  ast::ast::{Expression, Statement},
  parser::Parser,
  span::{GetSpan, SourceType},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DefineCallError {
  #[error("{0}")]
  Parse(String),
  #[error("no registration call found")]
  Missing,
}

/// The module registration call of a compiled unit, e.g.
/// `__d(function (global, _$$_REQUIRE, ...) { ... });`.
///
/// Only the location of the call is kept, the rest of the code is borrowed as is. Rendering
/// appends params after the existing arguments and leaves every other byte untouched.
#[derive(Debug)]
pub struct DefineCall<'code> {
  code: &'code str,
  callee: &'code str,
  arguments: Vec<&'code str>,
  /// Byte offset of the closing `)` of the call.
  close_paren: usize,
}

impl<'code> DefineCall<'code> {
  /// Locates the last top-level call statement of `code`.
  pub fn parse(code: &'code str) -> Result<Self, DefineCallError> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_module(false);
    let ret = Parser::new(&allocator, code, source_type).parse();
    if ret.panicked || !ret.errors.is_empty() {
      let message = ret.errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
      return Err(DefineCallError::Parse(message));
    }

    let call = ret
      .program
      .body
      .iter()
      .rev()
      .find_map(|stmt| match stmt {
        Statement::ExpressionStatement(expr_stmt) => match &expr_stmt.expression {
          Expression::CallExpression(call) => Some(call),
          _ => None,
        },
        _ => None,
      })
      .ok_or(DefineCallError::Missing)?;

    let slice = move |start: u32, end: u32| &code[start as usize..end as usize];
    let callee_span = call.callee.span();
    let arguments =
      call.arguments.iter().map(|arg| slice(arg.span().start, arg.span().end)).collect::<Vec<_>>();

    Ok(Self {
      code,
      callee: slice(callee_span.start, callee_span.end),
      arguments,
      close_paren: call.span.end as usize - 1,
    })
  }

  pub fn callee(&self) -> &'code str {
    self.callee
  }

  /// Source text of every argument the call already has.
  pub fn arguments(&self) -> &[&'code str] {
    &self.arguments
  }

  /// Renders the code with `params` appended to the call's argument list.
  pub fn render<S: AsRef<str>>(&self, params: &[S]) -> String {
    let (head, tail) = self.code.split_at(self.close_paren);
    let params_len = params.iter().map(|param| param.as_ref().len() + 1).sum::<usize>();
    let mut rendered = String::with_capacity(self.code.len() + params_len);
    rendered.push_str(head);
    for (idx, param) in params.iter().enumerate() {
      if idx > 0 || !self.arguments.is_empty() {
        rendered.push(',');
      }
      rendered.push_str(param.as_ref());
    }
    rendered.push_str(tail);
    rendered
  }
}

#[test]
fn test_parse_define_call() {
  let code = "__d(function (global, _$$_REQUIRE, _$$_IMPORT_DEFAULT) {\n  _$$_REQUIRE(_dependencyMap[0]);\n});";
  let call = DefineCall::parse(code).unwrap();
  assert_eq!(call.callee(), "__d");
  assert_eq!(call.arguments().len(), 1);
  assert!(call.arguments()[0].starts_with("function (global"));
}

#[test]
fn test_render_appends_params() {
  let call = DefineCall::parse("__d(function() {});").unwrap();
  assert_eq!(call.render(&["42", "[1,2]"]), "__d(function() {},42,[1,2]);");
  assert_eq!(call.render::<&str>(&[]), "__d(function() {});");
}

#[test]
fn test_render_without_existing_arguments() {
  let call = DefineCall::parse("global.__d();").unwrap();
  assert_eq!(call.callee(), "global.__d");
  assert_eq!(call.render(&["0", "[]"]), "global.__d(0,[]);");
}

#[test]
fn test_render_keeps_surrounding_code() {
  let code = "// @generated\n__d(function() {\n  var a = f(1);\n} /* factory */ );\n//# sourceURL=x";
  let call = DefineCall::parse(code).unwrap();
  assert_eq!(
    call.render(&["3"]),
    "// @generated\n__d(function() {\n  var a = f(1);\n} /* factory */ ,3);\n//# sourceURL=x"
  );
}

#[test]
fn test_last_call_statement_wins() {
  let call = DefineCall::parse("polyfill();\n__d(function() {});").unwrap();
  assert_eq!(call.callee(), "__d");
}

#[test]
fn test_errors() {
  assert!(matches!(DefineCall::parse("var a = 1;"), Err(DefineCallError::Missing)));
  assert!(matches!(DefineCall::parse("__d(function() {"), Err(DefineCallError::Parse(_))));
}
