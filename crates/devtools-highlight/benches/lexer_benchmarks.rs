use criterion::{Criterion, criterion_group, criterion_main};
use devtools_highlight::{Language, RenderNotifier, spans};
use std::hint::black_box;

fn sample_json(entries: usize) -> String {
    let items: Vec<String> = (0..entries)
        .map(|i| format!(r#"  {{"id": {i}, "name": "tool-{i}", "enabled": true, "ratio": 0.{i}}}"#))
        .collect();
    format!("[\n{}\n]", items.join(",\n"))
}

fn benchmark_lexers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let json = sample_json(200);
    group.bench_function("json_200_entries", |b| {
        b.iter(|| spans(Language::Json, black_box(&json)))
    });

    let script = "function add(a, b) { return a + b; } // sum\n".repeat(200);
    group.bench_function("javascript_200_lines", |b| {
        b.iter(|| spans(Language::JavaScript, black_box(&script)))
    });

    let entries: Vec<String> = (0..5_000).map(|i| format!("k{i}: v")).collect();
    let flow_yaml = format!("{{{}}}", entries.join(", "));
    group.bench_function("yaml_single_line_flow_map", |b| {
        b.iter(|| spans(Language::Yaml, black_box(&flow_yaml)))
    });

    group.finish();
}

fn benchmark_render_pass(c: &mut Criterion) {
    let notifier = RenderNotifier::highlighting();
    let json = sample_json(50);

    c.bench_function("render_pass_json_50", |b| {
        b.iter(|| {
            notifier.render(|doc| {
                doc.push_text("Result:\n").push_code(Some("json"), black_box(json.as_str()));
            })
        })
    });
}

criterion_group!(benches, benchmark_lexers, benchmark_render_pass);
criterion_main!(benches);
