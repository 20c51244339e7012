use std::fs;

use quill::{
    error::{Error, ParseError, RuntimeError},
    run,
};
use walkdir::WalkDir;

/// Runs every script under `tests/scripts`.
///
/// Each script names its own expected result in a `# expect:` comment on the
/// first line, which is compared against the rendered value of `main`.
#[test]
fn script_corpus_works() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "ql")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected = source.lines()
                             .next()
                             .and_then(|line| line.strip_prefix("# expect:"))
                             .unwrap_or_else(|| panic!("{path:?} has no '# expect:' header"))
                             .trim()
                             .to_string();

        count += 1;
        match run(&source) {
            Ok(result) => {
                assert_eq!(result, expected, "script {path:?} returned the wrong value")
            },
            Err(e) => panic!("Script {path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_result(src: &str, expected: &str) {
    match run(src) {
        Ok(result) => assert_eq!(result, expected, "script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\nscript:\n{src}"),
    }
}

fn run_err(src: &str) -> Error {
    match run(src) {
        Ok(result) => panic!("Script returned '{result}' but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

/// Wraps an expression in a `main` that returns it.
fn assert_expr(expr: &str, expected: &str) {
    assert_result(&format!("func main() {{ return {expr}; }}"), expected);
}

#[test]
fn arithmetic_basics() {
    assert_expr("1 + 2", "3");
    assert_expr("8 - 5", "3");
    assert_expr("7 * 9", "63");
    assert_expr("10 / 4", "2.5");
    assert_expr("10 // 4", "2");
    assert_expr("-10 // 4", "-3");
    assert_expr("10 % 3", "1");
    assert_expr("-10 % 3", "-1");
    assert_expr("2 ^ 10", "1024");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_expr("10 / 0", "inf");
    assert_expr("-10 / 0", "-inf");
    assert_expr("tostr(0 / 0)", "NaN");
}

#[test]
fn operator_precedence() {
    assert_expr("2 + 3 ^ 2", "11");
    assert_expr("-2 ^ 3", "-8");
    assert_expr("2 ^ -1", "0.5");
    assert_expr("5 + 2 % 3", "7");
    assert_expr("2 + 3 * 4", "14");
    assert_expr("2 ^ 2 ^ 3", "256");
}

#[test]
fn comparisons_bind_looser_than_logic() {
    // `true == false or true` groups as `true == (false or true)`.
    assert_expr("true == false or true", "true");
    assert_expr("1 + 1 == 2", "true");
    assert_expr("2 < 3 ? 1 : 2", "1");
}

#[test]
fn logical_operators_do_not_short_circuit() {
    let src = "global hits;
               func bump() { hits = hits + 1; return true; }
               func main() {
                   hits = 0;
                   x = false and bump();
                   y = true or bump();
                   return hits;
               }";
    assert_result(src, "2");
}

#[test]
fn ternary_is_right_associative() {
    assert_expr("false ? 1 : true ? 2 : 3", "2");
    assert_expr("true ? 1 : true ? 2 : 3", "1");
}

#[test]
fn char_arithmetic_and_comparison() {
    assert_expr("'a' + 1", "98");
    assert_expr("'b' - 'a'", "1");
    assert_expr("'a' < 'b'", "true");
    assert_expr("'a' == 97", "true");
    assert_expr("tochar('a' + 1)", "b");
}

#[test]
fn string_concatenation_renders_operands() {
    assert_expr(r#""n = " + 42"#, "n = 42");
    assert_expr(r#"1 + "!""#, "1!");
    assert_expr(r#""a" + "b""#, "ab");
    assert_expr(r#""yes: " + true"#, "yes: true");
}

#[test]
fn string_indexing_counts_chars() {
    assert_expr(r#""hello"[1]"#, "e");
    assert_expr(r#"len("héllo")"#, "5");

    let err = run_err(r#"func main() { return "abc"[3]; }"#);
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::IndexOutOfRange { len: 3, found: 3, .. })));
}

#[test]
fn string_equality_is_structural() {
    assert_expr(r#""ab" == "a" + "b""#, "true");
    assert_expr(r#""ab" < "b""#, "true");
}

#[test]
fn assignment_is_an_expression() {
    assert_expr("x = 5", "5");
    assert_result("func main() { x = y = 3; return x + y; }", "6");
}

#[test]
fn compound_assignment() {
    assert_result("func main() { x = 2; x += 3; return x; }", "5");
    assert_result("func main() { x = 9; x /= 3; return x; }", "3");
    assert_result("func main() { x = 2; x ^= 3; return x; }", "8");
    assert_result("func main() { xs = [1, 2]; xs[0] += 10; return xs[0]; }", "11");
}

#[test]
fn increment_and_decrement() {
    assert_result("func main() { x = 1; return x++; }", "1");
    assert_result("func main() { x = 1; return ++x; }", "2");
    assert_result("func main() { x = 1; x--; return x; }", "0");
    assert_result("func main() { xs = [5]; xs[0]++; return xs[0]; }", "6");
    assert_result("func main() { c = 'a'; c++; return c; }", "b");

    // Both operands are evaluated in order: 0 + 2.
    assert_result("func main() { x = 0; x = x++ + ++x; return x; }", "2");
}

#[test]
fn list_literals_never_alias() {
    let src = "func main() {
                   xs = [1, 2];
                   ys = [1, 2];
                   append(xs, 3);
                   return len(ys);
               }";
    assert_result(src, "2");
}

#[test]
fn assignment_aliases_lists() {
    let src = "func main() {
                   xs = [1];
                   ys = xs;
                   append(ys, 2);
                   return len(xs);
               }";
    assert_result(src, "2");
}

#[test]
fn plus_mutates_lists_in_place() {
    let src = "func main() {
                   xs = [1];
                   ys = xs + 2;
                   return tostr(xs) + \" \" + tostr(ys);
               }";
    assert_result(src, "[1, 2] [1, 2]");

    assert_expr("tostr([1] + [2, 3])", "[1, 2, 3]");
    assert_expr("tostr(0 + [1, 2])", "[0, 1, 2]");

    // Self-append doubles the elements.
    assert_result("func main() { xs = [1, 2]; xs + xs; return len(xs); }", "4");
}

#[test]
fn clone_breaks_aliasing() {
    let src = "func main() {
                   xs = [[1], 2];
                   ys = clone(xs);
                   append(xs[0], 9);
                   append(xs, 3);
                   return tostr(ys);
               }";
    assert_result(src, "[[1], 2]");
}

#[test]
fn list_equality_is_structural() {
    assert_expr("[1, [2]] == [1, [2]]", "true");
    assert_expr("[1, 2] == [1, 3]", "false");
    assert_expr("[1, 2] != [1]", "true");
}

#[test]
fn closure_identity() {
    let src = "func main() {
                   f = func (x) { return x; };
                   g = f;
                   return f == g;
               }";
    assert_result(src, "true");

    // Re-evaluating the same literal yields the same identity.
    let src = "func make() { return func () { return 0; }; }
               func main() { return make() == make(); }";
    assert_result(src, "true");
}

#[test]
fn function_values_and_indirect_calls() {
    assert_result("func main() { sq = func (x) { return x * x; }; return sq(7); }", "49");
    assert_result("func main() { fns = [func (x) { return x + 1; }]; return fns[0](2); }", "3");
    assert_result("func double(x) { return 2 * x; } func main() { f = double; return f(21); }",
                  "42");
    assert_result("func double(x) { return 2 * x; }
                   func apply(f, x) { return f(x); }
                   func main() { return apply(double, 10); }",
                  "20");
    // A local binding shadows the function of the same name.
    assert_result("func double(x) { return 2 * x; } func main() { double = 5; return double; }",
                  "5");
    assert_expr("tostr(func (a, b) {})", "<func(2)>");
}

#[test]
fn if_and_elif_statements() {
    let src = "func grade(n) {
                   if (n >= 90) { return 'a'; }
                   elif (n >= 80) { return 'b'; }
                   else { return 'f'; }
               }
               func main() { return concat(tostr(grade(95)), tostr(grade(85)), tostr(grade(10))); }";
    assert_result(src, "abf");
}

#[test]
fn if_expression_yields_value() {
    assert_expr("if (true) 1 else 2", "1");
    assert_expr("if (false) 1 elif (true) 2 else 3", "2");
    assert_expr("tostr(if (false) 1)", "none");
}

#[test]
fn conditions_must_be_boolean() {
    let err = run_err("func main() { if (1) { return 2; } }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));

    let err = run_err("func main() { while (0) {} }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn for_loop_with_break_and_continue() {
    let src = "func main() {
                   total = 0;
                   for (i = 0; i < 10; i++) {
                       if (i % 2 == 0) { continue; }
                       if (i > 6) { break; }
                       total += i;
                   }
                   return total;
               }";
    // 1 + 3 + 5
    assert_result(src, "9");
}

#[test]
fn for_loop_scope_is_discarded() {
    let src = "func main() {
                   for (i = 0; i < 3; i++) {}
                   return i;
               }";
    let err = run_err(src);
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn while_and_do_while() {
    let src = "func main() {
                   n = 0;
                   while (n < 5) { n++; }
                   return n;
               }";
    assert_result(src, "5");

    // The do-while body runs before the first test.
    let src = "func main() {
                   n = 10;
                   do { n++; } while (false);
                   return n;
               }";
    assert_result(src, "11");
}

#[test]
fn foreach_over_list_string_and_range() {
    let src = "func main() {
                   total = 0;
                   foreach (x in [1, 2, 3]) { total += x; }
                   return total;
               }";
    assert_result(src, "6");

    let src = "func main() {
                   out = \"\";
                   foreach (c in \"abc\") { out = out + c; }
                   return out;
               }";
    assert_result(src, "abc");

    let src = "func main() {
                   total = 0;
                   foreach (i in [0..5]) { total += i; }
                   return total;
               }";
    assert_result(src, "10");
}

#[test]
fn foreach_break_does_not_leak() {
    let src = "func main() {
                   count = 0;
                   foreach (x in [1, 2, 3]) {
                       foreach (y in [1, 2, 3]) {
                           if (y == 2) { break; }
                           count++;
                       }
                   }
                   return count;
               }";
    assert_result(src, "3");
}

#[test]
fn return_exits_nested_loops() {
    let src = "func find() {
                   foreach (x in [1, 2, 3]) {
                       while (true) { return x; }
                   }
                   return 0;
               }
               func main() { return find(); }";
    assert_result(src, "1");
}

#[test]
fn control_flow_outside_loop_is_an_error() {
    let err = run_err("func main() { break; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::ControlFlowMisuse { .. })));

    let err = run_err("func main() { continue; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::ControlFlowMisuse { .. })));

    // The loop does not extend into functions it calls.
    let src = "func helper() { break; }
               func main() { while (true) { helper(); } }";
    let err = run_err(src);
    assert!(matches!(err, Error::Runtime(RuntimeError::ControlFlowMisuse { .. })));
}

#[test]
fn globals_are_shared_across_functions() {
    let src = "global counter;
               func bump() { counter = counter + 1; }
               func main() {
                   counter = 0;
                   bump();
                   bump();
                   return counter;
               }";
    assert_result(src, "2");
}

#[test]
fn globals_start_as_none() {
    assert_result("global x; func main() { return tostr(x); }", "none");
}

#[test]
fn parameters_shadow_globals() {
    let src = "global x;
               func set(x) { x = 99; return x; }
               func main() {
                   x = 1;
                   inner = set(5);
                   return tostr(inner) + \" \" + tostr(x);
               }";
    assert_result(src, "99 1");
}

#[test]
fn blocks_write_through_to_outer_frames() {
    let src = "func main() {
                   x = 1;
                   { x = 2; y = 3; }
                   return x;
               }";
    assert_result(src, "2");

    let src = "func main() {
                   { y = 3; }
                   return y;
               }";
    let err = run_err(src);
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn calls_do_not_see_caller_locals() {
    let src = "func peek() { return secret; }
               func main() {
                   secret = 42;
                   return peek();
               }";
    let err = run_err(src);
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn arguments_alias_lists() {
    let src = "func push(xs) { append(xs, 9); }
               func main() {
                   xs = [1];
                   push(xs);
                   return len(xs);
               }";
    assert_result(src, "2");
}

#[test]
fn recursion() {
    let src = "func fact(n) { return n == 0 ? 1 : n * fact(n - 1); }
               func main() { return fact(10); }";
    assert_result(src, "3628800");
}

#[test]
fn function_without_return_yields_none() {
    assert_result("func noop() {} func main() { return tostr(noop()); }", "none");
    assert_result("func main() {}", "none");
}

#[test]
fn call_arity_is_checked() {
    let src = "func add(a, b) { return a + b; }
               func main() { return add(1); }";
    let err = run_err(src);
    assert!(matches!(err, Error::Runtime(RuntimeError::ArityMismatch { .. })));

    let err = run_err("func main() { return len(); }");
    assert!(matches!(err, Error::Runtime(RuntimeError::ArityMismatch { .. })));

    let err = run_err("func main() { return pow(2); }");
    assert!(matches!(err, Error::Runtime(RuntimeError::ArityMismatch { .. })));
}

#[test]
fn undefined_names() {
    let err = run_err("func main() { return missing(); }");
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedFunction { .. })));

    let err = run_err("func main() { return missing; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn intrinsics_cannot_be_redefined() {
    let err = run_err("func len(x) { return 0; } func main() {}");
    assert!(matches!(err, Error::Runtime(RuntimeError::IntrinsicRedefinition { .. })));
}

#[test]
fn conversion_intrinsics() {
    assert_expr("tostr(1.5)", "1.5");
    assert_expr("tonum(\"3.5\") * 2", "7");
    assert_expr("tonum(\" 42 \")", "42");
    assert_expr("tonum('a')", "97");
    assert_expr("tonum(true)", "1");
    assert_expr("tobool(\"true\")", "true");
    assert_expr("tobool(0)", "false");
    assert_expr("tobool(2)", "true");
    assert_expr("tochar(97)", "a");
    assert_expr("tochar(\"x\")", "x");
    assert_expr("tostr(tolist(\"ab\"))", "[a, b]");

    let err = run_err("func main() { return tonum(\"abc\"); }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));

    let err = run_err("func main() { return tochar(97.5); }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn string_and_char_intrinsics() {
    assert_expr("concat(\"a\", \"b\", \"c\")", "abc");
    assert_expr("len(\"hello\")", "5");
    assert_expr("len([1, 2, 3])", "3");
    assert_expr("isdigit('7')", "true");
    assert_expr("isdigit('x')", "false");
    assert_expr("isspace(' ')", "true");

    // Unlike `+`, concat does not render non-strings.
    let err = run_err("func main() { return concat(\"a\", 1); }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn list_intrinsics() {
    assert_expr("tostr(append([1], 2))", "[1, 2]");
    assert_expr("tostr(range(2, 5))", "[2, 3, 4]");
    assert_expr("tostr(range(3, 3))", "[]");
    // A fractional spelling of an integral bound still lexes as one number.
    assert_expr("tostr([1.0..3])", "[1, 2]");
    assert_expr("tostr(remove([1, 2, 1], 1))", "[2, 1]");
    assert_expr("tostr(remove([1, 2], 9))", "[1, 2]");
    assert_expr("tostr(removeat([1, 2, 3], 1))", "[1, 3]");

    let err = run_err("func main() { return removeat([1], 5); }");
    assert!(matches!(err, Error::Runtime(RuntimeError::IndexOutOfRange { .. })));

    let err = run_err("func main() { return range(0.5, 2); }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn math_intrinsics() {
    assert_expr("sin(0)", "0");
    assert_expr("abs(-5)", "5");
    assert_expr("sqrt(9)", "3");
    assert_expr("floor(3.7)", "3");
    assert_expr("ceil(3.2)", "4");
    assert_expr("pow(2, 10)", "1024");
    assert_expr("tostr(sqrt(-1))", "NaN");
}

#[test]
fn indexing_errors() {
    let err = run_err("func main() { return [1, 2][2]; }");
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::IndexOutOfRange { len: 2, found: 2, .. })));

    let err = run_err("func main() { return [1, 2][-1]; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::IndexOutOfRange { found: -1, .. })));

    let err = run_err("func main() { return [1, 2][0.5]; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));

    let err = run_err("func main() { return 5[0]; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn typed_equality_rejects_mixed_types() {
    let err = run_err("func main() { return 1 == \"1\"; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));

    let err = run_err("func main() { return true < false; }");
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));

    let src = "func nothing() {}
               func main() { return nothing() == 1; }";
    let err = run_err(src);
    assert!(matches!(err, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn none_compares_to_none() {
    let src = "func nothing() {}
               func main() { return nothing() == nothing(); }";
    assert_result(src, "true");
}

#[test]
fn keywords_are_case_insensitive() {
    assert_result("FUNC MAIN() { RETURN TRUE; }", "true");
    assert_result("func main() { X = 1; return x; }", "1");
}

#[test]
fn comments_are_skipped() {
    let src = "# a leading comment
               func main() { # inline
                   return 1; # trailing
               }";
    assert_result(src, "1");
}

#[test]
fn parse_errors() {
    let err = run_err("func helper() {}");
    assert!(matches!(err, Error::Parse(ParseError::MissingMain { .. })));

    let err = run_err("func main(x) {}");
    assert!(matches!(err, Error::Parse(ParseError::MainWithParameters { .. })));

    let err = run_err("func main() {} func main() {}");
    assert!(matches!(err, Error::Parse(ParseError::DuplicateFunction { .. })));

    let err = run_err("global x; global x; func main() {}");
    assert!(matches!(err, Error::Parse(ParseError::DuplicateGlobal { .. })));

    let err = run_err("func main() { 1 = 2; }");
    assert!(matches!(err, Error::Parse(ParseError::InvalidAssignmentTarget { .. })));

    let err = run_err("func main() { 5++; }");
    assert!(matches!(err, Error::Parse(ParseError::InvalidAssignmentTarget { .. })));

    let err = run_err("func main() { return 1");
    assert!(matches!(err, Error::Parse(_)));

    // Globals must precede all function definitions.
    let err = run_err("func main() {} global x;");
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn lex_errors_carry_position() {
    let err = run_err("func main() { return \"open; }");
    assert!(matches!(err, Error::Parse(ParseError::Lex { .. })));

    let err = run_err("func main() { return 1.2.3; }");
    assert!(matches!(err, Error::Parse(ParseError::Lex { .. })));

    let err = run_err("func main() { return \"\\q\"; }");
    assert!(matches!(err, Error::Parse(ParseError::Lex { .. })));

    match run_err("func main() {\n    return @;\n}") {
        Error::Parse(ParseError::Lex { line, column, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(column, 12);
        },
        other => panic!("Expected a lex error, got: {other:?}"),
    }
}

#[test]
fn rendering() {
    assert_expr("tostr([1, 'a', \"s\", [true]])", "[1, a, s, [true]]");
    assert_expr("1000000", "1000000");
    assert_expr("1.25", "1.25");
}
