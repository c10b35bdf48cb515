//! Integration tests for the inline emphasis tokenizer.

use resumark::{tokenize, EmphasisFragment};

fn plain(text: &str) -> EmphasisFragment {
    EmphasisFragment::plain(text)
}

fn bold(text: &str) -> EmphasisFragment {
    EmphasisFragment::bold(text)
}

fn italic(text: &str) -> EmphasisFragment {
    EmphasisFragment::italic(text)
}

#[test]
fn plain_text_round_trips() {
    let inputs = [
        "no markers",
        "punctuation! and, commas.",
        "unicode: naïve café résumé",
        "  leading and trailing  ",
    ];
    for input in inputs {
        assert_eq!(tokenize(input), vec![plain(input)], "input {:?}", input);
    }
}

#[test]
fn empty_line_yields_nothing() {
    assert!(tokenize("").is_empty());
}

#[test]
fn bold_takes_precedence_over_italic() {
    assert_eq!(
        tokenize("**Senior** *Engineer*"),
        vec![bold("Senior"), plain(" "), italic("Engineer")]
    );
}

#[test]
fn whole_line_bold() {
    assert_eq!(tokenize("**everything**"), vec![bold("everything")]);
}

#[test]
fn whole_line_italic() {
    assert_eq!(tokenize("*everything*"), vec![italic("everything")]);
}

#[test]
fn emphasis_mid_sentence() {
    assert_eq!(
        tokenize("Improved **throughput** by *tuning* the cache"),
        vec![
            plain("Improved "),
            bold("throughput"),
            plain(" by "),
            italic("tuning"),
            plain(" the cache"),
        ]
    );
}

#[test]
fn asterisks_surrounded_by_spaces_stay_literal() {
    assert_eq!(tokenize("3 * 4"), vec![plain("3 * 4")]);
    assert_eq!(
        tokenize("matrix A * B * C"),
        vec![plain("matrix A * B * C")]
    );
}

#[test]
fn italic_opening_must_not_precede_whitespace() {
    // "* spaced*" cannot open an italic span, but "*tight*" can
    assert_eq!(tokenize("* spaced*"), vec![plain("* spaced*")]);
    assert_eq!(tokenize("*tight*"), vec![italic("tight")]);
}

#[test]
fn unmatched_markers_degrade_to_plain() {
    assert_eq!(tokenize("**unclosed"), vec![plain("**unclosed")]);
    assert_eq!(tokenize("trailing *"), vec![plain("trailing *")]);
    assert_eq!(
        tokenize("*italic* then *stray"),
        vec![italic("italic"), plain(" then *stray")]
    );
}

#[test]
fn no_nesting_is_modeled() {
    // Bold inner text cannot contain asterisks, so markers inside a
    // would-be bold span break it apart instead of nesting: the scan
    // finds the first well-formed single-asterisk span and leaves the
    // rest literal
    assert_eq!(
        tokenize("**a *b* c**"),
        vec![plain("*"), italic("a "), plain("b* c**")]
    );
}

#[test]
fn fragments_preserve_order_and_cover_line() {
    let line = "a **b** c *d* e";
    let fragments = tokenize(line);
    let reassembled: String = fragments
        .iter()
        .map(|f| match f {
            EmphasisFragment::Plain { text } => text.clone(),
            EmphasisFragment::Bold { text } => format!("**{}**", text),
            EmphasisFragment::Italic { text } => format!("*{}*", text),
        })
        .collect();
    assert_eq!(reassembled, line);
}