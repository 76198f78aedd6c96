//! Closure capture and application semantics

use hexa::{Evaluator, Parser, Scanner, Value};

fn eval_source(source: &str) -> hexa::Result<Value> {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens()?;
    let mut parser = Parser::new(tokens);
    let program = parser.parse()?;
    let mut evaluator = Evaluator::new();
    evaluator.execute(&program)
}

#[test]
fn test_define_and_apply() {
    let source = r#"
        [def add [fn [a b] [+ a b]]]
        [add 5 7]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(12.0));
}

#[test]
fn test_immediate_application() {
    assert_eq!(
        eval_source("[[fn [a] [* a a]] 6]").unwrap(),
        Value::Number(36.0)
    );
}

#[test]
fn test_body_runs_in_sequence_returning_last() {
    let source = r#"
        [def f [fn [] 1 2 3]]
        [f]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(3.0));
}

#[test]
fn test_captured_environment_is_late_bound() {
    // The closure captures the environment, not a snapshot of its values:
    // rebinding y after the closure is built is visible at call time
    let source = r#"
        [def y 1]
        [def f [fn [] y]]
        [def y 2]
        [f]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(2.0));
}

#[test]
fn test_lexical_not_dynamic_scoping() {
    // get-x resolves x through its definition-site chain, not the caller's
    // frame, so the shadowing parameter is invisible to it
    let source = r#"
        [def x 1]
        [def get-x [fn [] x]]
        [def shadow [fn [x] [get-x]]]
        [shadow 99]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(1.0));
}

#[test]
fn test_closure_over_call_frame() {
    // The inner closure keeps make-adder's frame alive after the call ends
    let source = r#"
        [def make-adder [fn [n] [fn [x] [+ x n]]]]
        [def add5 [make-adder 5]]
        [add5 3]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(8.0));
}

#[test]
fn test_distinct_frames_per_call() {
    let source = r#"
        [def make-adder [fn [n] [fn [x] [+ x n]]]]
        [def add1 [make-adder 1]]
        [def add10 [make-adder 10]]
        [+ [add1 0] [add10 0]]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(11.0));
}

#[test]
fn test_parameter_shadows_global() {
    let source = r#"
        [def x 5]
        [def f [fn [x] [+ x 1]]]
        [f 10]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(11.0));

    // The global binding is untouched by the call
    let source = r#"
        [def x 5]
        [def f [fn [x] [+ x 1]]]
        [f 10]
        x
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(5.0));
}

#[test]
fn test_recursion_through_late_binding() {
    // fact is visible to its own body because the captured global
    // environment is consulted at call time
    let source = r#"
        [def fact [fn [n]
            [if [< n 2]
                1
                [* n [fact [- n 1]]]]]]
        [fact 5]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(120.0));
}

#[test]
fn test_closures_are_first_class() {
    let source = r#"
        [def twice [fn [f x] [f [f x]]]]
        [twice [fn [n] [* n 3]] 2]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(18.0));
}

#[test]
fn test_def_inside_body_stays_local() {
    // A def in a function body binds into the call frame, not the global
    // scope
    let source = r#"
        [def f [fn [] [def local 1] local]]
        [f]
        [if [= local 1] 1 2]
    "#;
    assert!(eval_source(source).is_err());
}

#[test]
fn test_natives_and_closures_share_calling_convention() {
    let source = r#"
        [def apply2 [fn [f a b] [f a b]]]
        [+ [apply2 + 1 2] [apply2 [fn [a b] [* a b]] 3 4]]
    "#;
    assert_eq!(eval_source(source).unwrap(), Value::Number(15.0));
}
