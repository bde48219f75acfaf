use hyforge_core::lower::{FormContext, LowerResult, Lowered, Lowerer, LoweringErrorKind};
use hyforge_core::target::{ExprContext, TargetKind, TargetNode};
use hyforge_core::tree::{Number, SourceNode};

fn sym(name: &str) -> SourceNode {
    SourceNode::symbol(name)
}

fn int(v: i64) -> SourceNode {
    SourceNode::int(v)
}

fn call(head: &str, args: Vec<SourceNode>) -> SourceNode {
    SourceNode::expression(head, args)
}

fn params(names: &[&str]) -> SourceNode {
    SourceNode::list(names.iter().map(|n| sym(n)).collect())
}

fn lower_single(node: &SourceNode) -> TargetNode {
    match Lowerer::new().lower(node).expect("lowering failed") {
        Lowered::Single(n) => n,
        Lowered::Sequence(s) => panic!("expected a single node, got {:?}", s),
    }
}

#[test]
fn def_binds_one_name_to_one_value() {
    let n = lower_single(&call("def", vec![sym("x"), int(5)]));
    let TargetKind::Assign { target, value } = &n.kind else {
        panic!("expected Assign, got {:?}", n.kind);
    };
    assert_eq!(target.kind, TargetKind::Name { id: "x".into(), ctx: ExprContext::Store });
    assert_eq!(value.kind, TargetKind::Num { value: Number::Int(5) });
}

#[test]
fn def_ignores_trailing_arguments() {
    let plain = lower_single(&call("def", vec![sym("x"), int(5)]));
    let extra = lower_single(&call("def", vec![sym("x"), int(5), int(6), sym("junk")]));
    assert_eq!(plain, extra);
}

#[test]
fn def_lowers_its_value_expression() {
    let n = lower_single(&call("def", vec![sym("y"), call("+", vec![int(1), int(2)])]));
    assert_eq!(n.to_string(), "y = 1 + 2");
}

#[test]
fn def_without_value_is_an_arity_error() {
    let err = Lowerer::new().lower(&call("def", vec![sym("x")])).expect_err("no value");
    assert_eq!(err.kind(), LoweringErrorKind::ArityError);
    assert_eq!(err.form(), Some("def"));
}

#[test]
fn def_with_expression_name_is_malformed() {
    let err = Lowerer::new()
        .lower(&call("def", vec![call("f", vec![]), int(1)]))
        .expect_err("an expression is not a name");
    assert_eq!(err.kind(), LoweringErrorKind::MalformedForm);
}

#[test]
fn defn_with_docstring_prepends_it() {
    let node = call(
        "defn",
        vec![sym("f"), params(&["x"]), SourceNode::string("doc"), call("return", vec![sym("x")])],
    );
    let n = lower_single(&node);
    let TargetKind::FunctionDef { name, body, .. } = &n.kind else {
        panic!("expected FunctionDef, got {:?}", n.kind);
    };
    assert_eq!(name, "f");
    assert_eq!(n.param_names(), vec!["x"]);
    assert_eq!(body.len(), 2);
    match &body[0].kind {
        TargetKind::Expr { value } => assert_eq!(value.kind, TargetKind::Str { value: "doc".into() }),
        other => panic!("expected docstring Expr, got {:?}", other),
    }
    assert!(matches!(body[1].kind, TargetKind::Return { .. }));
}

#[test]
fn defn_without_docstring_has_no_injected_statement() {
    let node = call("defn", vec![sym("f"), params(&["x"]), call("return", vec![sym("x")])]);
    let n = lower_single(&node);
    let TargetKind::FunctionDef { body, .. } = &n.kind else {
        panic!("expected FunctionDef, got {:?}", n.kind);
    };
    assert_eq!(body.len(), 1);
    assert!(matches!(body[0].kind, TargetKind::Return { .. }));
}

#[test]
fn defn_params_are_param_names_not_expressions() {
    let node = call("defn", vec![sym("add"), params(&["a", "b"]), call("return", vec![call("+", vec![sym("a"), sym("b")])])]);
    let n = lower_single(&node);
    let TargetKind::FunctionDef { params, .. } = &n.kind else {
        panic!("expected FunctionDef, got {:?}", n.kind);
    };
    assert!(params.iter().all(|p| matches!(&p.kind, TargetKind::Name { ctx: ExprContext::Param, .. })));
    assert_eq!(n.param_names(), vec!["a", "b"]);
}

#[test]
fn defn_do_body_is_used_verbatim() {
    let body = call(
        "do",
        vec![call("print", vec![sym("x")]), call("return", vec![sym("x")])],
    );
    let n = lower_single(&call("defn", vec![sym("f"), params(&["x"]), body]));
    let TargetKind::FunctionDef { body, .. } = &n.kind else {
        panic!("expected FunctionDef, got {:?}", n.kind);
    };
    assert_eq!(body.len(), 2);
    assert!(matches!(body[0].kind, TargetKind::Print { .. }));
    assert!(matches!(body[1].kind, TargetKind::Return { .. }));
}

#[test]
fn defn_keeps_only_the_last_body_form() {
    let node = call(
        "defn",
        vec![sym("f"), params(&[]), call("print", vec![int(1)]), call("return", vec![int(2)])],
    );
    let n = lower_single(&node);
    let TargetKind::FunctionDef { body, .. } = &n.kind else {
        panic!("expected FunctionDef, got {:?}", n.kind);
    };
    assert_eq!(body.len(), 1);
    assert!(matches!(body[0].kind, TargetKind::Return { .. }));
}

#[test]
fn defn_missing_body_is_an_arity_error() {
    let err = Lowerer::new()
        .lower(&call("defn", vec![sym("f"), params(&["x"])]))
        .expect_err("no body");
    assert_eq!(err.kind(), LoweringErrorKind::ArityError);
    assert_eq!(err.form(), Some("defn"));
}

#[test]
fn defn_docstring_without_body_is_an_arity_error() {
    let err = Lowerer::new()
        .lower(&call("defn", vec![sym("f"), params(&["x"]), SourceNode::string("doc")]))
        .expect_err("docstring only");
    assert_eq!(err.kind(), LoweringErrorKind::ArityError);
}

#[test]
fn defn_params_must_be_a_list() {
    let err = Lowerer::new()
        .lower(&call("defn", vec![sym("f"), sym("x"), call("return", vec![sym("x")])]))
        .expect_err("params not a list");
    assert_eq!(err.kind(), LoweringErrorKind::MalformedForm);
}

fn lower_skip(_lowerer: &Lowerer, _ctx: FormContext<'_>) -> LowerResult {
    Ok(Lowered::Sequence(Vec::new()))
}

#[test]
fn structural_forms_win_over_special_forms() {
    let mut lowerer = Lowerer::new();
    lowerer.register_structural("print", lower_skip);

    // the list argument would fail if it were lowered eagerly
    let node = call("print", vec![SourceNode::list(vec![int(1)])]);
    assert_eq!(lowerer.lower(&node).expect("skip form"), Lowered::Sequence(Vec::new()));
}

#[test]
fn cursor_splits_consumed_and_remaining() {
    let node = call("defn", vec![sym("f"), params(&["x"]), int(1), int(2)]);
    let inv = node.invocation().expect("expression");
    let ctx = FormContext::new(&node, inv);
    let mut cursor = ctx.cursor();
    let (name, _) = cursor.next_name("a name").expect("name");
    assert_eq!(name, "f");
    assert!(cursor.next_if(|n| n.invocation().is_some()).is_none());
    let _ = cursor.next_arg().expect("params");
    let (consumed, remaining) = cursor.split();
    assert_eq!(consumed.len(), 2);
    assert_eq!(remaining, &[int(1), int(2)][..]);
    // the source node is untouched
    assert_eq!(node.children().len(), 4);
}

#[test]
fn def_with_sequence_value_is_rejected() {
    let err = Lowerer::new()
        .lower(&call("def", vec![sym("x"), call("do", vec![int(1)])]))
        .expect_err("a sequence is not a value");
    assert_eq!(err.kind(), LoweringErrorKind::UnexpectedSequence);
    assert_eq!(err.form(), Some("def"));
}

#[test]
fn defn_expression_parameter_is_malformed() {
    let node = call(
        "defn",
        vec![sym("f"), SourceNode::list(vec![call("g", vec![])]), int(1)],
    );
    let err = Lowerer::new().lower(&node).expect_err("parameter is an expression");
    assert_eq!(err.kind(), LoweringErrorKind::MalformedForm);
    assert_eq!(err.form(), Some("defn"));
}

#[test]
fn failing_earlier_defn_body_form_aborts() {
    let node = call(
        "defn",
        vec![sym("f"), params(&[]), call("if", vec![sym("c")]), call("return", vec![int(2)])],
    );
    let err = Lowerer::new().lower(&node).expect_err("dropped form still lowered");
    assert_eq!(err.kind(), LoweringErrorKind::ArityError);
    assert_eq!(err.form(), Some("if"));
}

#[test]
fn list_in_defn_body_names_defn() {
    let node = call("defn", vec![sym("f"), params(&[]), SourceNode::list(vec![int(1)])]);
    let err = Lowerer::new().lower(&node).expect_err("a list is not a body form");
    assert_eq!(err.kind(), LoweringErrorKind::UnknownLiteralVariant);
    assert_eq!(err.form(), Some("defn"));
}
