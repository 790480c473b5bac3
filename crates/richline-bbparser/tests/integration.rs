use console::strip_ansi_codes;
use proptest::prelude::*;
use richline_bbparser::{BBParser, Style, StyleRegistry, TagTransform};

fn test_registry() -> StyleRegistry {
    StyleRegistry::new().with_style(Style::color("magenta", "35"))
}

#[test]
fn test_output_modes() {
    let registry = test_registry();
    let input = "[red]hello[/red] [b]world[/b]";

    // Keep
    let parser = BBParser::new(&registry, TagTransform::Keep);
    assert_eq!(parser.parse(input), input);

    // Remove
    let parser = BBParser::new(&registry, TagTransform::Remove);
    assert_eq!(parser.parse(input), "hello world");

    // Apply
    let parser = BBParser::new(&registry, TagTransform::Apply);
    let output = parser.parse(input);
    assert!(output.contains("\x1b[31m"));
    assert!(output.contains("\x1b[1m"));
    assert!(output.contains("hello"));
    assert!(output.contains("world"));
}

#[test]
fn test_one_escape_per_tag_segment() {
    let registry = test_registry();
    let parser = BBParser::new(&registry, TagTransform::Apply);

    let output = parser.parse("[b][red]text[/red][/b]");
    assert_eq!(output.matches("\x1b[").count(), 4);
    assert_eq!(output, "\x1b[1m\x1b[1;31mtext\x1b[1m\x1b[m");
}

#[test]
fn test_custom_style_from_registry() {
    let registry = test_registry();
    let parser = BBParser::new(&registry, TagTransform::Apply);
    assert_eq!(parser.parse("[magenta]m[/]"), "\x1b[35mm\x1b[m");

    // The global registry does not know it.
    assert_eq!(richline_bbparser::render("[magenta]m[/]"), "\x1b[mm\x1b[m");
}

#[test]
fn test_unbalanced_tag_is_reported() {
    let registry = test_registry();
    let parser = BBParser::new(&registry, TagTransform::Apply);

    let (output, errors) = parser.parse_with_diagnostics("[b]unfinished");
    assert_eq!(output, "\x1b[1munfinished");
    assert!(!errors.is_empty());
    assert!(
        errors.to_string().contains("unbalanced"),
        "Got: {}",
        errors
    );
}

#[test]
fn test_unexpected_close_is_reported() {
    let registry = test_registry();
    let parser = BBParser::new(&registry, TagTransform::Apply);
    let (output, errors) = parser.parse_with_diagnostics("text[/b]");
    assert_eq!(output, "text\x1b[m");
    assert!(errors.to_string().contains("unexpected close"));
}

#[test]
fn test_strip_tags_keeps_literal_brackets() {
    assert_eq!(richline_bbparser::strip_tags("list [1"), "list [1");
}

fn open_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "red", "green", "cyan", "blue", "yellow", "gray", "white", "b", "i", "u", "s", "x",
    ])
}

proptest! {
    #[test]
    fn prop_parse_never_panics(input in ".{0,64}") {
        let _ = richline_bbparser::render(&input);
        let _ = richline_bbparser::strip_tags(&input);
    }

    #[test]
    fn prop_apply_minus_escapes_equals_remove(input in "[a-z \\[\\]/]{0,48}") {
        let registry = StyleRegistry::new();
        let applied = BBParser::new(&registry, TagTransform::Apply).parse(&input);
        let removed = BBParser::new(&registry, TagTransform::Remove).parse(&input);
        prop_assert_eq!(strip_ansi_codes(&applied).to_string(), removed);
    }

    #[test]
    fn prop_nested_markup_preserves_text(
        tags in prop::collection::vec(open_tag(), 1..6),
        words in prop::collection::vec("[a-z]{1,6}", 6),
    ) {
        // [t0]w0[t1]w1 ... [/tn]wn ... [/t0]
        let mut markup = String::new();
        let mut expected = String::new();
        for (i, tag) in tags.iter().enumerate() {
            markup.push_str(&format!("[{}]{}", tag, words[i]));
            expected.push_str(&words[i]);
        }
        for tag in tags.iter().rev() {
            markup.push_str(&format!("[/{}]", tag));
        }

        let parser = BBParser::new(StyleRegistry::global(), TagTransform::Apply);
        let output = parser.parse(&markup);
        prop_assert_eq!(output.matches("\x1b[").count(), tags.len() * 2);
        prop_assert_eq!(strip_ansi_codes(&output).to_string(), expected);

        let depths: Vec<usize> = parser.segments(&markup).iter().map(|s| s.depth()).collect();
        let mut want: Vec<usize> = (1..=tags.len()).collect();
        want.extend((0..tags.len()).rev());
        prop_assert_eq!(depths, want);
    }

    #[test]
    fn prop_slash_clears_any_depth(tags in prop::collection::vec(open_tag(), 0..10)) {
        let markup = format!("[{}]x[/]y", tags.join(" "));
        let parser = BBParser::new(StyleRegistry::global(), TagTransform::Apply);
        let segments = parser.segments(&markup);
        prop_assert_eq!(segments.last().map(|s| s.depth()), Some(0));
        prop_assert!(parser.parse(&markup).ends_with("\x1b[my"));
    }

    #[test]
    fn prop_close_on_empty_is_noop(closes in 1usize..8) {
        let markup = format!("{}done", "[/b]".repeat(closes));
        let parser = BBParser::new(StyleRegistry::global(), TagTransform::Apply);
        prop_assert!(parser.segments(&markup).iter().all(|s| s.depth() == 0));
        prop_assert!(parser.parse(&markup).ends_with("done"));
    }
}
