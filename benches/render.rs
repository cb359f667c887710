//! Benchmarks for the rendering pass.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use rd2md::model::{AnchorIndex, DocTree, Label, NodeId, NodeKind};
use rd2md::render_document;

/// Build a manual-sized document: sections of prose, nested lists and code.
fn build_document(sections: usize) -> DocTree {
    let mut tree = DocTree::new();

    for s in 0..sections {
        tree.add_headline(NodeId::ROOT, 2, &format!("Section {s}"));
        tree.add_text_block(
            NodeId::ROOT,
            "RD is a lightweight markup language.\nIt is used for Ruby documentation\nと日本語の文書。",
        );

        let list = tree.add(NodeId::ROOT, NodeKind::EnumList);
        for i in 0..8 {
            let item = tree.add(list, NodeKind::EnumListItem);
            let para = tree.add(item, NodeKind::TextBlock);
            tree.add_string(para, &format!("Step {i} uses "));
            let code = tree.add(para, NodeKind::Code);
            tree.add_string(code, "a < b");
            tree.add_string(para, ", see ");
            let link = tree.add(
                para,
                NodeKind::Reference(Label::internal(format!("Section {}", (s + 1) % sections))),
            );
            tree.add_string(link, "next");

            let nested = tree.add(item, NodeKind::ItemList);
            let sub = tree.add(nested, NodeKind::ItemListItem);
            tree.add_text_block(sub, "detail");
        }

        tree.add_verbatim(
            NodeId::ROOT,
            &["require 'rd/rdfmt'", "tree = RD::RDTree.new(src)", "puts tree"],
        );
    }

    tree
}

fn bench_build_anchor_index(c: &mut Criterion) {
    let tree = build_document(50);
    c.bench_function("build_anchor_index", |b| {
        b.iter(|| AnchorIndex::build(&tree, "label-"));
    });
}

fn bench_render_document(c: &mut Criterion) {
    let tree = build_document(50);
    let anchors = AnchorIndex::build(&tree, "label-");
    c.bench_function("render_document", |b| {
        b.iter(|| render_document(&tree, &anchors).unwrap());
    });
}

criterion_group!(benches, bench_build_anchor_index, bench_render_document);
criterion_main!(benches);
