//! Benchmarks for hot-path drawing operations.
//!
//! Models realistic diagram workloads: axis-aligned strokes sweeping a
//! canvas (every cell goes through junction substitution), diagonal
//! rasterization, area fills, and justified text layout. Sizes match the
//! places these diagrams end up:
//!
//! - **70x15**: the default inline log diagram.
//! - **120x40**: a full-width console panel.
//! - **240x80**: a large dashboard dump.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use glyphgrid::{Canvas, HAlign, Point, VAlign};

const SIZES: [(i32, i32); 3] = [(70, 15), (120, 40), (240, 80)];

/// A canvas pre-covered with strokes so substitution takes the
/// role-lookup path instead of the blank-cell fast path.
fn ruled_canvas(width: i32, height: i32) -> Canvas {
    let mut canvas = Canvas::builtin(width, height, 1).unwrap();
    for y in (0..height).step_by(4) {
        canvas.line(Point::new(0, y), Point::new(width - 1, y));
    }
    for x in (0..width).step_by(8) {
        canvas.line(Point::new(x, 0), Point::new(x, height - 1));
    }
    canvas
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    for (width, height) in SIZES {
        group.bench_with_input(
            BenchmarkId::new("horizontal_ruled", format!("{width}x{height}")),
            &(width, height),
            |b, &(width, height)| {
                let canvas = ruled_canvas(width, height);
                b.iter(|| {
                    let mut canvas = canvas.clone();
                    canvas.line(black_box(Point::new(0, 1)), Point::new(width - 1, 1));
                    canvas
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("diagonal", format!("{width}x{height}")),
            &(width, height),
            |b, &(width, height)| {
                let canvas = Canvas::builtin(width, height, 1).unwrap();
                b.iter(|| {
                    let mut canvas = canvas.clone();
                    canvas.line(black_box(Point::new(0, 0)), Point::new(width - 1, height - 1));
                    canvas
                });
            },
        );
    }
    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    for (width, height) in SIZES {
        group.bench_with_input(
            BenchmarkId::new("rect_ruled", format!("{width}x{height}")),
            &(width, height),
            |b, &(width, height)| {
                let canvas = ruled_canvas(width, height);
                b.iter(|| {
                    let mut canvas = canvas.clone();
                    canvas.rect(black_box(Point::new(0, 0)), Point::new(width - 1, height - 1));
                    canvas
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("fill_rect", format!("{width}x{height}")),
            &(width, height),
            |b, &(width, height)| {
                let canvas = Canvas::builtin(width, height, 1).unwrap();
                b.iter(|| {
                    let mut canvas = canvas.clone();
                    canvas.fill_rect(black_box(Point::new(0, 0)), Point::new(width, height));
                    canvas
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("circle", format!("{width}x{height}")),
            &(width, height),
            |b, &(width, height)| {
                let canvas = Canvas::builtin(width, height, 1).unwrap();
                b.iter(|| {
                    let mut canvas = canvas.clone();
                    canvas.circle(
                        black_box(Point::new(width / 2, height / 2)),
                        height / 2 - 1,
                    );
                    canvas
                });
            },
        );
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let paragraph = "Grid storage, point addressing, line rasterization with \
        junction substitution, shape composition, and bounded justified \
        text layout with word wrapping. "
        .repeat(8);

    let mut group = c.benchmark_group("text");
    for (width, height) in SIZES {
        group.bench_with_input(
            BenchmarkId::new("text_box", format!("{width}x{height}")),
            &(width, height),
            |b, &(width, height)| {
                let canvas = Canvas::builtin(width, height, 1).unwrap();
                b.iter(|| {
                    let mut canvas = canvas.clone();
                    canvas.text_box(
                        Point::new(0, 0),
                        Point::new(width - 1, height - 1),
                        black_box(&paragraph),
                        HAlign::Center,
                        VAlign::Center,
                    );
                    canvas
                });
            },
        );
    }
    group.finish();

    c.bench_function("render_to_string", |bench| {
        let mut canvas = ruled_canvas(120, 40);
        canvas.text_box(
            Point::new(0, 0),
            Point::new(119, 39),
            &paragraph,
            HAlign::Left,
            VAlign::Top,
        );
        bench.iter(|| black_box(&canvas).to_string());
    });
}

criterion_group!(benches, bench_lines, bench_shapes, bench_text);
criterion_main!(benches);
