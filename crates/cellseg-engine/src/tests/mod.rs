//! End-to-end scenarios across the marker producer, the partitioner and the
//! leaf layout.

use cellseg_syntax::lex;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    cells::{CellOptions, cell_markers, split_cells},
    document::{DocumentMetrics, RopeDocument},
    intervals::{CellKind, partition_intervals},
    layout::{IndentData, IndentOptions, LeafBuilder, compute_indent},
    snapshot,
};

#[rstest]
#[case("", 1)]
#[case("plain\ntext\n", 1)]
#[case("# %%\na\n", 1)]
#[case("a\n# %%\nb\n# %% [md]\nc", 3)]
#[case("# %%\n# %%\n# %%\n", 3)]
fn cell_count(#[case] text: &str, #[case] expected: usize) {
    let doc = RopeDocument::from(text);
    let cells = split_cells(&doc, &CellOptions::default()).unwrap();
    snapshot::invariants(&doc, &cells);
    assert_eq!(cells.len(), expected);
}

#[test]
fn consecutive_markers_make_single_line_cells() {
    let doc = RopeDocument::from("# %%\n# %% [markdown]\ntext");
    let cells = split_cells(&doc, &CellOptions::default()).unwrap();
    let spans: Vec<_> = cells.iter().map(|c| (c.kind, c.lines.clone())).collect();
    assert_eq!(
        spans,
        vec![(CellKind::Code, 0..1), (CellKind::Markdown, 1..3)]
    );
}

#[test]
fn payload_passes_through_untouched() {
    let doc = RopeDocument::from("a\n# %% first\nb\n");
    let markers: Vec<_> = cell_markers(&doc, &CellOptions::default())
        .into_iter()
        .map(|m| crate::intervals::Marker {
            ordinal: m.ordinal,
            kind: m.kind,
            offset: m.offset,
            length: m.length,
            data: vec![m.ordinal as u8, 42],
        })
        .collect();
    let cells = partition_intervals(&doc, &markers, vec![], vec![0xff]).unwrap();
    assert_eq!(cells[0].data, Vec::<u8>::new());
    assert_eq!(cells[1].data, vec![0, 42]);
}

#[test]
fn indent_of_every_leaf_matches_its_column() {
    // Without tabs or wide characters the computed indent is the byte column.
    let text = "def f(x):\n    return g(x,\n             y)\n";
    let doc = RopeDocument::from(text);
    let chain = LeafBuilder::new(&doc, IndentOptions::default()).build(&lex(text));
    snapshot::check_chain(&chain);

    for (id, leaf) in chain.iter() {
        let start = leaf.span().start;
        let column = start - doc.line_start_offset(doc.line_number_of(start));
        let indent = compute_indent(&chain, id).unwrap();
        assert_eq!(indent.total(), column, "leaf at {start}");
    }
}

#[test]
fn tab_indented_line_reports_indent_units() {
    let text = "{\n\t\tx;\n}";
    let doc = RopeDocument::from(text);
    let chain = LeafBuilder::new(&doc, IndentOptions { tab_size: 2 }).build(&lex(text));
    let x = chain.leaf_starting_at(4).unwrap();
    let semi = chain.next(x).unwrap();
    assert_eq!(compute_indent(&chain, x), Some(IndentData::new(4, 0)));
    assert_eq!(compute_indent(&chain, semi), Some(IndentData::new(4, 1)));
    let close = chain.last().unwrap();
    assert!(chain.get(close).unwrap().is_end_of_code_block());
}
