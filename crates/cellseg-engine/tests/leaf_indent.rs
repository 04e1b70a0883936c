use cellseg_engine::{
    IndentData, IndentOptions, LeafBuilder, LeafChain, RopeDocument, Span, compute_indent,
    layout::{Leaf, WhiteSpace, symbols_at_last_line},
    snapshot::{normalize_leaves, render},
};
use cellseg_syntax::{TokenKind, lex};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

fn leaf(span: Span, ws: WhiteSpace, width: usize) -> Leaf {
    Leaf::new(TokenKind::Text, span, ws, false, width, false)
}

#[test]
fn whitespace_with_line_break_short_circuits() {
    let options = IndentOptions::default();
    let mut chain = LeafChain::new();
    chain.push(leaf(Span::new(0, 50), WhiteSpace::measure(0, "        ", &options), 50));
    let b = chain.push(leaf(
        Span::new(53, 54),
        WhiteSpace::measure(50, "\n  ", &options),
        1,
    ));
    assert_eq!(compute_indent(&chain, b), Some(IndentData::new(0, 2)));
}

#[test]
fn two_leaves_on_one_line() {
    let options = IndentOptions::default();
    let mut chain = LeafChain::new();
    chain.push(leaf(Span::new(0, 3), WhiteSpace::empty(0), 3));
    let b = chain.push(leaf(Span::new(4, 6), WhiteSpace::measure(3, " ", &options), 2));
    assert_eq!(compute_indent(&chain, b), Some(IndentData::new(0, 1 + 3)));
}

#[test]
fn single_tab_leaf_is_tab_size_wide() {
    assert_eq!(symbols_at_last_line("\t", &IndentOptions { tab_size: 4 }), 4);
}

#[test]
fn disposal_ends_the_walk() {
    let text = "aa bb cc";
    let doc = RopeDocument::from(text);
    let mut chain = LeafBuilder::new(&doc, IndentOptions::default()).build(&lex(text));
    let ids: Vec<_> = chain.ids().collect();
    assert_eq!(compute_indent(&chain, ids[2]), Some(IndentData::new(0, 6)));

    chain.dispose(ids[1]);
    // Only cc's own whitespace remains reachable.
    assert_eq!(compute_indent(&chain, ids[2]), Some(IndentData::new(0, 1)));
    assert_eq!(compute_indent(&chain, ids[1]), None);
}

#[test]
fn mixed_widths_snapshot() {
    let text = "名前 = \"値\";\n\tif ok {\n\t\tgo();\n\t}\n";
    let doc = RopeDocument::from(text);
    let chain = LeafBuilder::new(&doc, IndentOptions::default()).build(&lex(text));
    assert_snapshot!(render(&normalize_leaves(&doc, &chain)), @r##"
    L0 0+0 w4 "名前"
    L0 0+5 w1 "="
    L0 0+7 w4 "\"値\""
    L0 0+11 w1 ";"
    L1 4+0 w2 "if"
    L1 4+3 w2 "ok"
    L1 4+6 w1 "{"
    L2 8+0 w2 "go"
    L2 8+2 w1 "("
    L2 8+3 w1 ")"
    L2 8+4 w1 ";"
    L3 4+0 w1 "}"
    "##);
}
