use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::render_document;
use pulldown_cmark::{Parser, html};

fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::from("# Benchmark Page\n\n");
    for i in 0..sections {
        content.push_str(&format!(
            "## Section {i}\n\n\
             A paragraph with **bold**, _italic_ and `code` spans,\n\
             plus a [link](/page/{i}) and an ![image](/img/{i}.png).\n\n\
             > quoted line {i}\n> another quoted line\n\n\
             - first item\n- second item\n- third item\n\n\
             1. one\n2. two\n3. three\n\n\
             ```\nfn section_{i}() {{}}\n```\n\n"
        ));
    }
    content
}

fn bench_render_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    group.bench_function("render_document", |b| {
        b.iter(|| {
            let rendered = render_document(std::hint::black_box(&content));
            std::hint::black_box(rendered)
        });
    });

    group.bench_function("pulldown_cmark_baseline", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_document);
criterion_main!(benches);
