use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use physics_sandbox::*;
use std::hint::black_box;

const DT: f32 = 1.0 / 60.0;

fn prepare_sandbox(batches: Vec<SpawnBatch>) -> Sandbox {
    let config = SandboxConfig::default().with_population(batches);
    let mut sandbox = Sandbox::new(config).expect("valid config");
    sandbox.start();
    sandbox
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("sandbox_tick");
    for &count in &[10usize, 170, 1000] {
        group.bench_with_input(BenchmarkId::new("earth", count), &count, |b, &count| {
            let mut sandbox = prepare_sandbox(vec![SpawnBatch::new(ShapeKind::Circle, count)]);
            b.iter(|| sandbox.tick(black_box(DT)))
        });
    }
    group.finish();
}

fn bench_world_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");
    for &count in &[512usize, 2048] {
        for parallel in [false, true] {
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, count), &count, |b, &count| {
                let mut world = PhysicsWorld::new(DT);
                world.set_parallel_enabled(parallel);
                world.set_gravity(Vec2::new(0.0, 1.0));
                BoundaryFrame::build(&mut world, 1280.0, 720.0);
                for i in 0..count {
                    let x = 60.0 + (i % 58) as f32 * 20.0;
                    let y = 60.0 + (i / 58) as f32 * 10.0;
                    world.add_body(RigidBody::circle(Vec2::new(x, y), 8.0, BodyOptions::default()));
                }
                b.iter(|| world.step_once())
            });
        }
    }
    group.finish();
}

fn bench_spawn_churn(c: &mut Criterion) {
    c.bench_function("spawn_despawn_100", |b| {
        let mut sandbox = prepare_sandbox(Vec::new());
        b.iter(|| {
            sandbox.dispatch(Command::spawn_named("square", 100));
            for _ in 0..100 {
                sandbox.dispatch(Command::Despawn);
            }
            black_box(sandbox.registry().len())
        })
    });
}

criterion_group!(benches, bench_tick, bench_world_step, bench_spawn_churn);
criterion_main!(benches);
