// Copyright 2025-2026 Neil Henderson

use crate::codegen;
use crate::codegen::tests::utils::{assert_contains, assert_not_contains, generate_cpp, generate_cpp_unoptimized};
use crate::ir::TacInstruction;
use crate::parser::Program;

#[test]
fn generate_emits_the_fixed_preamble() {
    let cpp = generate_cpp("print 1;");
    assert_contains(&cpp, "#include <iostream>");
    assert_contains(&cpp, "#include <string>");
    assert_contains(&cpp, "#include <cmath>");
    assert_contains(&cpp, "using namespace std;");
}

#[test]
fn generate_main_with_folded_initializer() {
    let cpp = generate_cpp("int x = 2 + 3 * 4;\nprint x;\nnewline;");
    assert_contains(&cpp, "int main() {");
    assert_contains(&cpp, "int x = 0;");
    assert_contains(&cpp, "x = 14;");
    assert_contains(&cpp, "cout << x;");
    assert_contains(&cpp, "cout << endl;");
}

#[test]
fn generate_function_from_labeled_range() {
    let cpp = generate_cpp("func add(int a, int b) { return a + b; }\nprint add(1, 2);\nnewline;");

    // Forward declaration and definition, both returning int with typed parameters.
    assert_contains(&cpp, "int add(int a, int b);");
    assert_contains(&cpp, "int add(int a, int b) {");
    assert_contains(&cpp, "return t1;");

    // The function body is not duplicated into main.
    let body_marker = "int add(int a, int b) {";
    assert_eq!(cpp.matches(body_marker).count(), 1);
}

#[test]
fn generate_function_has_defensive_trailing_return() {
    let cpp = generate_cpp("func noop() { print 1; }\nnoop();");
    let function_body = cpp.split("int noop() {").nth(1).expect("Function should be emitted");
    let function_body = function_body.split("}\n").next().expect("Function body should close");
    assert_contains(function_body, "return 0;");
}

#[test]
fn generate_void_function_returns_zero_in_target() {
    // A valueless Slate return still returns a value in the emitted C++.
    let cpp = generate_cpp("func f(int n) { if (n > 0) { return; } print n; }\nf(1);");
    assert_contains(&cpp, "int f(int n)");
    assert_contains(&cpp, "return 0;");
}

#[test]
fn generate_declares_temps_with_defaults_at_function_top() {
    let cpp = generate_cpp_unoptimized("func triple(int n) { return n + n + n; }\nprint triple(2);");
    assert_contains(&cpp, "int t1 = 0;");
    assert_contains(&cpp, "int t2 = 0;");
}

#[test]
fn temp_typing_prefers_string_over_bool_over_int() {
    // t = string variable comparison: the equality makes it bool-flavored, but the string
    // operand wins.
    let cpp = generate_cpp_unoptimized("string s = \"a\";\nbool same = s == \"a\";\nprint same;");
    assert_contains(&cpp, "std::string t1 = \"\";");
}

#[test]
fn temp_typing_marks_comparison_results_as_bool() {
    let cpp = generate_cpp_unoptimized("int n = 5;\nbool big = n > 3;\nprint big;");
    assert_contains(&cpp, "bool t1 = false;");
}

#[test]
fn temp_typing_defaults_to_int() {
    let cpp = generate_cpp_unoptimized("int n = 1 + 2;\nprint n;");
    assert_contains(&cpp, "int t1 = 0;");
}

#[test]
fn generate_if_false_branches_become_goto() {
    let cpp = generate_cpp_unoptimized("int n = 9;\nif (n > 0) { print n; }");
    assert_contains(&cpp, "if (!(t1)) goto L2;");
    assert_contains(&cpp, "    L2:");
}

#[test]
fn generate_while_loop_round_trips_through_labels() {
    let cpp = generate_cpp_unoptimized("int n = 3;\nwhile (n > 0) { n = n - 1; }");
    assert_contains(&cpp, "    L1:");
    assert_contains(&cpp, "goto L1;");
    assert_contains(&cpp, "if (!(t1)) goto L2;");
}

#[test]
fn generate_input_statement() {
    let cpp = generate_cpp("int x;\ninput x;\nprint x;");
    assert_contains(&cpp, "cin >> x;");
}

#[test]
fn generate_block_local_gets_declared_with_its_type() {
    let cpp = generate_cpp("if (true) { string s = \"hi\"; print s; }");
    assert_contains(&cpp, "std::string s = \"hi\";");
}

#[test]
fn generate_emits_used_builtins_only() {
    assert!(codegen::builtins::is_builtin("pyramid"));
    assert!(!codegen::builtins::is_builtin("fact"));

    let cpp = generate_cpp("pyramid(5);");
    assert_contains(&cpp, "void pyramid(int height)");
    assert_not_contains(&cpp, "void diamond");
    assert_not_contains(&cpp, "bool isPrime");
}

#[test]
fn generate_skips_builtin_shadowed_by_user_function() {
    let cpp = generate_cpp("func max(int a, int b) { if (a > b) { return a; } return b; }\nprint max(2, 3);");
    // The user's definition wins over the canned routine.
    assert_not_contains(&cpp, "int max(int a, int b) { return a > b ? a : b; }");
    assert_contains(&cpp, "int max(int a, int b) {");
}

#[test]
fn generate_statement_call_without_result() {
    let cpp = generate_cpp("func shout() { print \"!\"; }\nshout();");
    assert_contains(&cpp, "    shout();");
}

#[test]
fn function_boundary_recovery_falls_back_without_endfunc_label() {
    // Hand-built TAC stream missing the endfunc label: the range ends at the first return.
    let tac = vec![
        TacInstruction::Label { name: "func_f".to_string() },
        TacInstruction::Print { value: "1".to_string() },
        TacInstruction::Return { value: None },
        TacInstruction::Print { value: "2".to_string() },
    ];
    let program = Program { declarations: Vec::new() };
    let cpp = codegen::generate(&tac, &program);

    let function_body = cpp.split("int f() {").nth(1).expect("Function should be emitted");
    let (body, rest) = function_body.split_once("}\n").expect("Function body should close");
    assert_contains(body, "cout << 1;");
    assert_not_contains(body, "cout << 2;");

    // The instruction after the fallback boundary lands in main.
    assert_contains(rest, "cout << 2;");
}

#[test]
fn print_has_no_trailing_newline_in_either_context() {
    let cpp = generate_cpp("func f() { print 1; }\nprint 2;");
    assert_not_contains(&cpp, "cout << 1 << endl;");
    assert_not_contains(&cpp, "cout << 2 << endl;");
}
