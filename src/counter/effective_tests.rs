use super::*;

fn count(source: &str) -> usize {
    let syntax = CommentSyntax::rust();
    EffectiveLocCounter::new(&syntax).count(source)
}

#[test]
fn count_empty_source() {
    assert_eq!(count(""), 0);
}

#[test]
fn count_code_only() {
    assert_eq!(count("fn main() {\n    work();\n}"), 3);
}

#[test]
fn count_excludes_blank_lines() {
    assert_eq!(count("fn main() {\n\n    work();\n\n}"), 3);
}

#[test]
fn count_excludes_whitespace_only_lines() {
    assert_eq!(count("fn main() {\n   \t\n}"), 2);
}

#[test]
fn count_excludes_single_line_comments() {
    assert_eq!(count("// top\nfn main() {\n    // inner\n}"), 2);
}

#[test]
fn count_excludes_doc_comments() {
    // "///" and "//!" share the "//" prefix
    assert_eq!(count("//! crate docs\n/// item docs\nfn f() {}"), 1);
}

#[test]
fn count_strips_single_line_header() {
    assert_eq!(count("/* Module: demo */\nfn f() {}\nfn g() {}"), 2);
}

#[test]
fn count_strips_multi_line_header() {
    let source = "/* Module: demo\n * details\n */\nfn f() {}";
    assert_eq!(count(source), 1);
}

#[test]
fn count_strips_indented_header_opener() {
    assert_eq!(count("   /* Module: demo */\nfn f() {}"), 1);
}

#[test]
fn count_unterminated_header_consumes_whole_file() {
    let source = "/* Module: demo\nfn f() {}\nfn g() {}";
    assert_eq!(count(source), 0);
}

#[test]
fn count_header_not_at_top_is_not_stripped() {
    // A block comment below line 0 is ordinary content: its lines are not
    // single-line comments, so they count.
    let source = "fn f() {}\n/* Module: demo */\nfn g() {}";
    assert_eq!(count(source), 3);
}

#[test]
fn count_block_comment_mid_file_counts_per_line() {
    let source = "fn f() {}\n/*\nnot a header\n*/\nfn g() {}";
    assert_eq!(count(source), 5);
}

#[test]
fn count_header_then_blanks_and_comments() {
    let mut source = String::from("/* Module: demo\n * one\n */\n");
    source.push_str("\n\n\n\n\n");
    source.push_str("// a\n// b\n");
    for i in 0..250 {
        source.push_str(&format!("let x{i} = {i};\n"));
    }
    assert_eq!(count(&source), 250);
}

#[test]
fn count_never_exceeds_raw_line_count() {
    let source = "/* Module: a */\nfn f() {}\n\n// c\nwork();\n";
    let raw = source.lines().count();
    assert!(count(source) <= raw);
}

#[test]
fn custom_syntax_markers() {
    let syntax = CommentSyntax {
        line_prefix: "#".to_string(),
        block_open: "\"\"\"".to_string(),
        block_close: "\"\"\"".to_string(),
    };
    let counter = EffectiveLocCounter::new(&syntax);

    // Opening and closing marker on the same first line: header is line 0 only.
    assert_eq!(counter.count("\"\"\" Module: py \"\"\"\nx = 1\n# c\n"), 1);
}
