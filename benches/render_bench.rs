use criterion::Criterion;

// Consolidated benchmark suite for cutplan. Run with:
//    cargo bench

use cutplan::{render_diagram, DiagramConfig, Dimensions, TilingPlan};

/// Bench: plan computation
fn bench_compute_plan(c: &mut Criterion) {
    let sheet = Dimensions::new(30, 60);
    let area = Dimensions::new(400, 400);

    c.bench_function("compute_plan", |b| {
        b.iter(|| TilingPlan::compute(sheet, area).unwrap())
    });
}

/// Bench: full diagram render for the reference layout
fn bench_render_diagram(c: &mut Criterion) {
    let plan = TilingPlan::compute(Dimensions::new(30, 60), Dimensions::new(400, 400))
        .expect("valid plan");
    let config = DiagramConfig::default();

    c.bench_function("render_diagram", |b| {
        b.iter(|| render_diagram(&plan, &config).unwrap())
    });
}

/// Bench: dense layout where placement iteration dominates
fn bench_render_dense(c: &mut Criterion) {
    let plan = TilingPlan::compute(Dimensions::new(5, 5), Dimensions::new(400, 400))
        .expect("valid plan");
    let config = DiagramConfig::default();

    c.bench_function("render_diagram_dense", |b| {
        b.iter(|| render_diagram(&plan, &config).unwrap())
    });
}

fn main() {
    let mut c = Criterion::default();

    bench_compute_plan(&mut c);
    bench_render_diagram(&mut c);
    bench_render_dense(&mut c);

    c.final_summary();
}
