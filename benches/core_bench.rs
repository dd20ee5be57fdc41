use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use gradient_mesh_editor::{AppController, AppIntent, AppState, Mesh, ViewportRect};
use std::hint::black_box;

fn build_query_points(count: usize, viewport: &ViewportRect) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 1000) as f32 / 1000.0;
            let y = ((i * 7) % 1000) as f32 / 1000.0;
            viewport.mesh_to_client(Vec2::new(x, y))
        })
        .collect()
}

fn bench_mesh_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_build");

    for &division_count in &[4u32, 32, 128] {
        group.bench_with_input(
            BenchmarkId::from_parameter(division_count),
            &division_count,
            |b, &d| {
                b.iter(|| {
                    let mesh = Mesh::new(black_box(d)).expect("Mesh gueltig");
                    black_box(mesh.tangent_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_pick_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_point");
    let viewport = ViewportRect::new(0.0, 0.0, 1920.0, 1080.0);
    let query_points = build_query_points(1024, &viewport);

    for &division_count in &[16u32, 128] {
        let mesh = Mesh::new(division_count).expect("Mesh gueltig");

        group.bench_with_input(
            BenchmarkId::new("batch", division_count),
            &mesh,
            |b, mesh| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if mesh.pick_point(black_box(*point), &viewport, 10.0).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_point_drag(c: &mut Criterion) {
    let viewport = ViewportRect::new(0.0, 0.0, 800.0, 800.0);
    let path = build_query_points(256, &viewport);

    c.bench_function("point_drag_256_moves", |b| {
        b.iter_batched(
            || {
                let mut controller = AppController::new();
                let mut state = AppState::with_mesh(32).expect("Mesh gueltig");
                controller
                    .handle_intent(&mut state, AppIntent::ViewportMeasured { rect: viewport })
                    .expect("Viewport setzbar");
                let point = state
                    .mesh
                    .as_ref()
                    .and_then(|mesh| mesh.point_id_at(16, 16))
                    .expect("Punkt existiert");
                controller
                    .handle_intent(&mut state, AppIntent::PointerPressedOnPoint { point })
                    .expect("Drag startbar");
                (controller, state)
            },
            |(mut controller, mut state)| {
                for client in &path {
                    controller
                        .handle_intent(
                            &mut state,
                            AppIntent::PointerMoved {
                                client: *client,
                                shift: false,
                                ctrl: false,
                            },
                        )
                        .expect("Bewegung verarbeitbar");
                }
                black_box(state.point_count())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_mesh_build, bench_pick_point, bench_point_drag);
criterion_main!(benches);
