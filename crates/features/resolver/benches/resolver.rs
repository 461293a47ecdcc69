use bemkit_classes::{ClassName, ClassValue};
use bemkit_domain::{CompoundRule, Props, props};
use bemkit_resolver::BemElement;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn resolver_with_axes(axes: usize) -> BemElement {
    let mut builder = BemElement::builder("bench").element("item");
    for axis in 0..axes {
        builder = builder
            .modifier(format!("axis{axis}"), ["a", "b", "c", "d"])
            .compound(CompoundRule::new(format!("bench--combo{axis}")).when(format!("axis{axis}"), "b"));
    }
    builder.build().expect("bench resolver")
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for axes in [1usize, 4, 16] {
        let resolver = resolver_with_axes(axes);
        let props: Props = (0..axes).map(|axis| (format!("axis{axis}"), "b")).collect();
        let extras = ClassValue::from(["is-active", "u-mt-2"]);

        group.bench_with_input(BenchmarkId::new("no_props", axes), &resolver, |b, r| {
            b.iter(|| black_box(r.class()));
        });

        group.bench_with_input(BenchmarkId::new("all_axes_active", axes), &props, |b, p| {
            b.iter(|| black_box(resolver.compute(p, &extras)));
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_with_defaults", |b| {
        b.iter(|| {
            let resolver = BemElement::builder("card")
                .modifier("size", ["sm", "md", "lg"])
                .default_modifier("size", "md")
                .build()
                .unwrap();
            black_box(resolver.with(&props! { "size" => "lg" }))
        });
    });
}

criterion_group!(benches, bench_compute, bench_build);
criterion_main!(benches);
