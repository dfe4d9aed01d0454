use bracktree::bracket::{BracketParser, parse_documents, parse_str};
use bracktree::cost::{Cost, CostModel, DocumentCostModel};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const REGRESSION_SHAPES: &[(&str, usize, usize)] = &[
    // (name, depth, fan-out)
    ("wide-d3-f20", 3, 20),
    ("deep-d12-f2", 12, 2),
    ("page-d5-f6", 5, 6),
];

/// Builds a synthetic page of nested sections, each holding a paragraph
/// with quoted text and a line break.
fn synthetic_document(depth: usize, fan_out: usize) -> String {
    fn write_section(out: &mut String, depth: usize, fan_out: usize, id: &mut usize) {
        *id += 1;
        out.push_str("{section");
        out.push_str(&format!("{{p{{#text:\"node {id} {{keeps}} braces\"}}{{br}}}}"));
        if depth > 1 {
            for _ in 0..fan_out {
                write_section(out, depth - 1, fan_out, id);
            }
        }
        out.push('}');
    }

    let mut out = String::from("{html{body");
    let mut id = 0;
    write_section(&mut out, depth, fan_out, &mut id);
    out.push_str("}}");
    out
}

fn bracket_parsing(c: &mut Criterion) {
    for &(name, depth, fan_out) in REGRESSION_SHAPES {
        let document = synthetic_document(depth, fan_out);
        c.bench_function(name, |b| {
            let mut parser = BracketParser::new_defaults();
            b.iter(|| parser.parse_str(black_box(&document)).unwrap());
        });
    }
}

fn bracket_reporting(c: &mut Criterion) {
    let documents: Vec<String> = (1..=64).map(|i| synthetic_document(4, 2 + i % 5)).collect();
    c.bench_function("parse-64-documents-parallel", |b| {
        b.iter(|| parse_documents(black_box(documents.as_slice())));
    });

    let old = parse_str(synthetic_document(5, 6)).unwrap();
    let new = parse_str(synthetic_document(5, 6).replace("braces", "brackets")).unwrap();
    let model = DocumentCostModel;
    c.bench_function("rename-costs-post-order", |b| {
        b.iter(|| {
            old.post_order_iter()
                .zip(new.post_order_iter())
                .fold(Cost::ZERO, |acc, (from, to)| acc + model.rename_cost(from, to))
        });
    });
}

criterion_group!(regression, bracket_parsing);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = bracket_reporting
}
criterion_main!(regression, reporting);
