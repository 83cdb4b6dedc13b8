use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fontindex::{
    font::{FontDescription, Webfont},
    index::Indices,
};
use indexmap::IndexMap;

fn synthetic_catalog(size: usize) -> Vec<Webfont> {
    let categories = ["serif", "sans-serif", "display", "handwriting", "monospace"];
    (0..size)
        .map(|i| {
            let variants: Vec<String> = ["regular", "italic", "700", "700italic"]
                .iter()
                .map(|v| v.to_string())
                .collect();
            let files: IndexMap<String, String> = variants
                .iter()
                .map(|v| {
                    (
                        v.clone(),
                        format!("https://fonts.gstatic.com/s/family{}/v{}/{}.ttf", i, i % 40, v),
                    )
                })
                .collect();

            Webfont {
                family: Some(format!("Family Number {}", i)),
                version: Some(format!("v{}", i % 40)),
                category: Some(categories[i % categories.len()].to_string()),
                last_modified: Some("2021-01-15".to_string()),
                files: Some(files),
                variants: Some(variants),
                subsets: Some(vec!["latin".to_string(), "latin-ext".to_string()]),
            }
        })
        .collect()
}

fn bench_build_index(c: &mut Criterion) {
    let catalog = synthetic_catalog(1500);
    c.bench_function("build_index_1500", |b| {
        b.iter(|| {
            let indices: Indices = catalog
                .iter()
                .map(|font| FontDescription::from_webfont(black_box(font)).unwrap())
                .collect();
            black_box(indices)
        })
    });
}

criterion_group!(benches, bench_build_index);
criterion_main!(benches);
