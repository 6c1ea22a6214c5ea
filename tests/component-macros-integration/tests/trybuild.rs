//! trybuild UI tests for component_macros

#[test]
fn ui_bean_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/bean_ok.rs");
    t.pass("tests/trybuild/bean_generic_ok.rs");
}
