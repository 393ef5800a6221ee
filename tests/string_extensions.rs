//! Integration tests for the public string utility API.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use strext::{
    is_null_or_empty, justify, parse_args, to_guid, to_snake_case, word_wrap, Error,
    Justification, StrExt,
};

#[test]
fn snake_case_examples() {
    for (input, expected) in [
        ("", ""),
        ("Foo", "foo"),
        ("HelloWorld", "hello_world"),
        ("TheCatSatOnTheMat", "the_cat_sat_on_the_mat"),
    ] {
        assert_eq!(to_snake_case(input), expected);
        assert_eq!(input.to_snake_case(), expected);
    }
}

#[test]
fn justify_keeps_width_and_edges() {
    let samples = ["", "x", "short", "a considerably longer sentence"];
    for s in samples {
        for width in [0, 1, 5, 12, 40] {
            for &mode in Justification::all() {
                assert_eq!(justify(s, width, mode).chars().count(), width);
            }
            if s.chars().count() <= width {
                assert!(justify(s, width, Justification::Left).starts_with(s));
                assert!(justify(s, width, Justification::Right).ends_with(s));
            }
        }
    }
}

#[test]
fn tokenizer_examples() {
    assert!(parse_args("").is_empty());
    assert!(parse_args(None::<&str>).is_empty());
    assert_eq!(parse_args("foo bar"), ["foo", "bar"]);
    assert_eq!(parse_args(r#"foo "bar baz" qux"#), ["foo", "bar baz", "qux"]);
    assert_eq!(parse_args("'it''s'").len(), 2);
}

#[test]
fn tokenizer_whitespace_boundaries_always_emit() {
    assert_eq!(parse_args(" foo"), ["", "foo"]);
    assert_eq!(parse_args(r#""a" b"#), ["a", "", "b"]);
    assert_eq!(parse_args("foo  "), ["foo", " "]);
}

#[test]
fn word_wrap_trailing_whitespace_gives_empty_chunk() {
    let chunks: Vec<&str> = word_wrap("abc   ", 3).unwrap().collect();
    assert_eq!(chunks, ["abc", ""]);
}

#[test]
fn tokenizer_handles_command_lines() {
    let args = "copy 'My Documents/report.txt' \"D:\\Back ups\" /y".parse_args();
    assert_eq!(args, ["copy", "My Documents/report.txt", "D:\\Back ups", "/y"]);
}

#[test]
fn word_wrap_bounds_and_order() {
    let text = "It was the best of times, it was the worst of times, it was the age of wisdom";
    for width in 1..=30 {
        let chunks: Vec<&str> = word_wrap(text, width).unwrap().collect();
        assert!(chunks.iter().all(|c| c.chars().count() <= width));
        let words: String = text.split_whitespace().collect();
        let rebuilt: String = chunks.iter().flat_map(|c| c.split_whitespace()).collect();
        assert_eq!(rebuilt, words);
    }
}

#[test]
fn word_wrap_argument_errors() {
    assert!(matches!(word_wrap(None::<&str>, 10), Err(Error::Argument { param: "input", .. })));
    assert!(matches!(word_wrap("text", 0), Err(Error::Argument { param: "width", .. })));
}

#[test]
fn compact_guid_expands() {
    assert_eq!(
        to_guid("12345678").unwrap().to_string(),
        "12345678-0000-0000-0000-000000000000"
    );
    assert!(matches!(to_guid("zzzzzzzz"), Err(Error::Format { .. })));
}

#[test]
fn remove_errors_when_too_long() {
    assert!(matches!("abc".remove_left(5), Err(Error::Argument { .. })));
    assert!(matches!("abc".remove_right(5), Err(Error::Argument { .. })));
    assert!(is_null_or_empty(None));
    assert!("".is_null_or_empty());
    assert!(" \t".is_null_or_whitespace());
}
