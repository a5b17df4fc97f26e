//! Integration tests for template parsing.

use kiste_compiler::parsing::{parse, LineType, Segment};
use kiste_compiler::testing::{assert_lines, Fixture};
use kiste_compiler::ErrorKind;
use rstest::rstest;

#[test]
fn test_text_with_escape_inside_render_body() {
    let source = "$class Greeting\n%pub fn render(&self) {\nHello ${name}!\n%}\n$endclass\n";
    let lines = parse(source, "greeting.kiste").unwrap();

    assert_lines(&lines)
        .count(5)
        .types(&[
            LineType::ClassBegin,
            LineType::CodePassthrough,
            LineType::Text,
            LineType::CodePassthrough,
            LineType::ClassEnd,
        ])
        .line(2, |line| {
            line.text()
                .depth(1)
                .class_depth(Some(0))
                .trailing_newline(true)
                .segments(&[
                    Segment::Literal("Hello ".into()),
                    Segment::Escape("name".into()),
                    Segment::Literal("!\n".into()),
                ]);
        });
}

#[test]
fn test_passthrough_opens_scope_for_blank_text() {
    let source = "$class V\n%pub fn render(&self) {\n%if x {\n\n%}\n%}\n$endclass\n";
    let lines = parse(source, "v.kiste").unwrap();

    assert_lines(&lines)
        .line(2, |line| {
            line.code("if x {").depth(1);
        })
        .line(3, |line| {
            line.text()
                .depth(2)
                .segments(&[Segment::Literal("\n".into())]);
        })
        .line(5, |line| {
            line.code("}").depth(1);
        });
}

#[test]
fn test_child_class_with_member() {
    let source = "$class Child : Parent\n$member Widget nav\n$endclass\n";
    let lines = parse(source, "child.kiste").unwrap();

    assert_lines(&lines)
        .count(3)
        .line(0, |line| {
            line.class_begin("Child").parent("Parent").class_depth(None);
        })
        .line(1, |line| {
            line.member("Widget", "nav").class_depth(Some(0));
        })
        .line(2, |line| {
            line.is(LineType::ClassEnd);
        });
}

#[test]
fn test_paths_are_accepted_for_parent_and_member_types() {
    let source = "$class Page : super::Layout\n$member ::widgets::Nav nav\n$endclass\n";
    let lines = parse(source, "page.kiste").unwrap();

    assert_lines(&lines)
        .line(0, |line| {
            line.parent("super::Layout");
        })
        .line(1, |line| {
            line.member("::widgets::Nav", "nav");
        });
}

#[test]
fn test_trim_markers() {
    let source = "$class V\n%fn render(&self) {\n    $|<b>${x}</b>$|\n%}\n$endclass\n";
    let lines = parse(source, "v.kiste").unwrap();

    assert_lines(&lines).line(2, |line| {
        line.text()
            .trailing_newline(false)
            .literal(0, "<b>")
            .escape(1, "x")
            .literal(2, "</b>");
    });
}

#[test]
fn test_blank_lines_outside_body_are_blank() {
    let lines = parse("\n$class V\n  \n$endclass\n", "v.kiste").unwrap();

    assert_lines(&lines)
        .types(&[
            LineType::Blank,
            LineType::ClassBegin,
            LineType::Blank,
            LineType::ClassEnd,
        ])
        .line(0, |line| {
            line.blank();
        });
}

#[test]
fn test_fixtures_parse() {
    for name in ["hello", "layout", "report"] {
        let fixture = Fixture::named(name);
        let result = parse(&fixture.source(), &fixture.template_name());
        assert!(result.is_ok(), "{}: {:?}", name, result.err());
    }
}

#[rstest]
#[case::text_outside_class("Hello\n", ErrorKind::Scope, 1, "Unexpected text outside of function")]
#[case::text_at_class_level("$class V\nHello\n", ErrorKind::Scope, 2, "Unexpected text outside of function")]
#[case::nested_class("$class A\n$class B\n", ErrorKind::Scope, 2, "Cannot open new class here, did you forget to call $endclass for A?")]
#[case::endclass_without_class("$endclass\n", ErrorKind::Scope, 1, "No class to end here")]
#[case::member_without_class("$member Nav nav\n", ErrorKind::Scope, 1, "Cannot add a member here, did you forget to call $class?")]
#[case::member_in_function("$class V\n%fn f() {\n$member Nav nav\n", ErrorKind::Scope, 3, "Cannot add a member inside a nested scope, members belong to the class body")]
#[case::endclass_in_function("$class V\n%fn f() {\n$endclass\n", ErrorKind::Scope, 3, "Cannot end class V inside a nested scope, check the closing curly braces")]
#[case::missing_class_name("$class\n", ErrorKind::Directive, 1, "Could not find class name")]
#[case::missing_colon("$class A B\n", ErrorKind::Directive, 1, "Unexpected character after class name, did you forget a ':'?")]
#[case::missing_parent("$class A :\n", ErrorKind::Directive, 1, "Could not find parent class name")]
#[case::parent_garbage("$class A : B C\n", ErrorKind::Directive, 1, "Unexpected trailing characters after parent class name")]
#[case::missing_member_name("$class V\n$member Nav\n", ErrorKind::Directive, 2, "Could not find member name")]
#[case::member_garbage("$class V\n$member Nav nav extra\n", ErrorKind::Directive, 2, "unexpected characters after member declaration")]
#[case::endclass_garbage("$class V\n$endclass V\n", ErrorKind::Directive, 2, "Unexpected trailing characters after $endclass")]
#[case::unknown_command("$class V\n%fn f() {\n$foo\n", ErrorKind::Lexical, 3, "Unknown command")]
#[case::unclosed_expression("$class V\n%fn f() {\n${x\n", ErrorKind::Lexical, 3, "missing closing brace")]
#[case::trim_not_last("$class V\n%fn f() {\na$|b\n", ErrorKind::Lexical, 3, "Trailing characters after trim-right ($|)")]
#[case::too_many_braces("%}\n", ErrorKind::Lexical, 1, "Too many closing curly braces in passthrough code")]
#[case::unclosed_braces("%fn f() {\n", ErrorKind::EndOfInput, 1, "not enough closing curly braces")]
#[case::unclosed_class("$class V\n\n", ErrorKind::EndOfInput, 2, "class V not ended at the end of the file, did you forget $endclass?")]
fn test_parse_errors(
    #[case] source: &str,
    #[case] kind: ErrorKind,
    #[case] line_no: usize,
    #[case] message: &str,
) {
    let err = parse(source, "bad.kiste").unwrap_err();
    assert_eq!(err.kind, kind);
    assert_eq!(err.line_no, line_no);
    assert_eq!(err.message, message);
    assert_eq!(err.filename, "bad.kiste");
}

#[test]
fn test_error_keeps_raw_line() {
    let err = parse("$class V\n%fn f() {\n    oops $nope\n", "bad.kiste").unwrap_err();
    assert_eq!(err.line, "    oops $nope");
    assert!(err.to_string().contains("Line:     oops $nope"));
}
