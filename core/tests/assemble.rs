use hyforge_core::location::Location;
use hyforge_core::lower::{assemble_program, LoweringErrorKind};
use hyforge_core::target::{TargetKind, TargetNode};
use hyforge_core::tree::SourceNode;
use hyforge_core::{compile_forest, generate_error_report};

fn sym(name: &str) -> SourceNode {
    SourceNode::symbol(name)
}

fn int(v: i64) -> SourceNode {
    SourceNode::int(v)
}

fn call(head: &str, args: Vec<SourceNode>) -> SourceNode {
    SourceNode::expression(head, args)
}

fn sample_forest() -> Vec<SourceNode> {
    vec![
        call("def", vec![sym("x"), int(5)]),
        call(
            "defn",
            vec![
                sym("inc"),
                SourceNode::list(vec![sym("n")]),
                SourceNode::string("Add one."),
                call("return", vec![call("+", vec![sym("n"), int(1)])]),
            ],
        ),
        call(
            "if",
            vec![
                call("<", vec![sym("x"), int(10)]),
                call("print", vec![call("inc", vec![sym("x")])]),
                call("print", vec![SourceNode::string("big")]),
            ],
        ),
    ]
}

#[test]
fn program_preserves_statement_order() {
    let unit = assemble_program("sample", &sample_forest()).expect("assembly failed");
    assert_eq!(unit.name, "sample");
    assert_eq!(unit.len(), 3);
    assert!(matches!(unit.body[0].kind, TargetKind::Assign { .. }));
    assert!(matches!(unit.body[1].kind, TargetKind::FunctionDef { .. }));
    assert!(matches!(unit.body[2].kind, TargetKind::If { .. }));
}

#[test]
fn assembly_is_deterministic() {
    let forest = sample_forest();
    let a = assemble_program("sample", &forest).expect("first run");
    let b = assemble_program("sample", &forest).expect("second run");
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn every_node_gets_a_location() {
    let unit = assemble_program("sample", &sample_forest()).expect("assembly failed");
    assert!(unit.is_fully_located());
    assert_eq!(unit.body[0].location, Some(Location::new("sample", 1, 1)));
}

#[test]
fn children_inherit_the_nearest_located_parent() {
    let located = call("print", vec![sym("x")]).with_location(Location::new("m.hy", 4, 2));
    let unit = assemble_program("m", &[located]).expect("assembly failed");

    let stmt = &unit.body[0];
    assert_eq!(stmt.location, Some(Location::new("m.hy", 4, 2)));
    let TargetKind::Print { values, .. } = &stmt.kind else {
        panic!("expected Print, got {:?}", stmt.kind);
    };
    assert_eq!(values[0].location, Some(Location::new("m.hy", 4, 2)));
}

#[test]
fn top_level_do_is_spliced_in_order() {
    let forest = vec![
        call("do", vec![call("def", vec![sym("a"), int(1)]), call("def", vec![sym("b"), int(2)])]),
        call("print", vec![sym("a")]),
    ];
    let unit = assemble_program("m", &forest).expect("assembly failed");
    let rendered: Vec<String> = unit.body.iter().map(TargetNode::to_string).collect();
    assert_eq!(rendered, vec!["a = 1", "b = 2", "print a"]);
}

#[test]
fn any_failure_aborts_the_whole_pass() {
    let forest = vec![call("def", vec![sym("x"), int(1)]), call("if", vec![sym("x")])];
    let err = assemble_program("m", &forest).expect_err("bad if");
    assert_eq!(err.kind(), LoweringErrorKind::ArityError);
}

#[test]
fn program_listing_reads_like_python() {
    let unit = assemble_program("sample", &sample_forest()).expect("assembly failed");
    let expected = "\
# module sample
x = 5
def inc(n):
    \"Add one.\"
    return n + 1
if x < 10:
    print inc(x)
else:
    print \"big\"
";
    assert_eq!(unit.to_string(), expected);
}

#[test]
fn program_serializes_to_json() {
    let unit = assemble_program("sample", &sample_forest()).expect("assembly failed");
    let json = unit.to_json().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["name"], "sample");
    assert_eq!(value["body"][0]["kind"]["node"], "Assign");
}

#[test]
fn compile_forest_reports_through_the_common_surface() {
    let bad = call("def", vec![sym("x")]).with_location(Location::new("bad.hy", 2, 1));
    let err = compile_forest("bad", &[bad]).expect_err("def without value");
    let report = generate_error_report(err.as_ref());
    assert!(report.starts_with("HYFORGE | ERROR | bad.hy:2:1 |"), "{}", report);
}
