use hyforge_core::lower::registry::{default_special_forms, default_structural_forms};
use hyforge_core::lower::{lower_special, FormRegistry, Lowered, Lowerer, SpecialHandler};
use hyforge_core::target::TargetKind;
use hyforge_core::tree::SourceNode;

#[test]
fn default_tables_cover_every_form() {
    let structural = default_structural_forms();
    assert_eq!(structural.names(), vec!["def", "defn"]);

    let special = default_special_forms();
    for name in [
        "print", "+", "-", "*", "/", "==", "<=", ">=", "<", ">", "!=", "in", "not-in", "is",
        "is-not", "if", "do", "return",
    ] {
        assert!(special.contains(name), "missing special form {}", name);
    }
    assert_eq!(special.len(), 18);
}

#[test]
fn register_replaces_and_reports_previous_handler() {
    let mut reg: FormRegistry<SpecialHandler> = FormRegistry::new();
    assert!(reg.is_empty());
    assert!(reg.register("when", lower_special::lower_if).is_none());
    assert!(reg.register("when", lower_special::lower_do).is_some());
    assert_eq!(reg.len(), 1);
    assert!(reg.unregister("when").is_some());
    assert!(!reg.contains("when"));
}

#[test]
fn custom_special_form_is_dispatched_without_touching_the_dispatcher() {
    let mut special = default_special_forms();
    special.register("progn", lower_special::lower_do);
    let lowerer = Lowerer::with_forms(default_structural_forms(), special);

    let node = SourceNode::expression("progn", vec![SourceNode::int(1), SourceNode::int(2)]);
    match lowerer.lower(&node).expect("progn") {
        Lowered::Sequence(nodes) => assert_eq!(nodes.len(), 2),
        other => panic!("expected a sequence, got {:?}", other),
    }
}

#[test]
fn removing_a_form_falls_back_to_a_plain_call() {
    let mut special = default_special_forms();
    special.unregister("print");
    let lowerer = Lowerer::with_forms(default_structural_forms(), special);

    let node = SourceNode::expression("print", vec![SourceNode::int(1)]);
    match lowerer.lower(&node).expect("call") {
        Lowered::Single(n) => assert!(matches!(n.kind, TargetKind::Call { .. })),
        other => panic!("expected a call, got {:?}", other),
    }
}
