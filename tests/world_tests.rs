use approx::assert_relative_eq;
use physics_sandbox::config::BOUNDARY_THICKNESS;
use physics_sandbox::*;

fn settle(preset: PresetId, shape: ShapeKind, frames: usize) -> (Sandbox, BodyHandle) {
    let config = SandboxConfig::default()
        .with_preset(preset)
        .with_population(vec![SpawnBatch::new(shape, 1)]);
    let mut sandbox = Sandbox::new(config).unwrap();
    sandbox.start();
    let dt = sandbox.world().time_step();
    for _ in 0..frames {
        sandbox.tick(dt);
    }
    let handle = sandbox.registry().handle_of(1).unwrap();
    (sandbox, handle)
}

#[test]
fn bodies_fall_under_gravity() {
    let (sandbox, handle) = settle(PresetId::Earth, ShapeKind::Circle, 10);
    let body = sandbox.world().body(handle).unwrap();
    assert!(body.position.y > 360.0, "y = {}", body.position.y);
    assert_relative_eq!(body.position.x, 640.0);
}

#[test]
fn floor_contains_falling_bodies() {
    let (sandbox, handle) = settle(PresetId::Earth, ShapeKind::Circle, 300);
    let body = sandbox.world().body(handle).unwrap();
    let resting_y = 720.0 - BOUNDARY_THICKNESS / 2.0 - 50.0;
    assert_relative_eq!(body.position.y, resting_y, epsilon = 0.5);
    assert!(body.velocity.length() < 10.0);
    assert!(!body.is_sleeping, "earth keeps sleeping disabled");
}

#[test]
fn resting_bodies_sleep_in_dense_atmosphere() {
    let (mut sandbox, handle) = settle(PresetId::DenseAtmosphere, ShapeKind::Square, 600);
    assert!(sandbox.world().body(handle).unwrap().is_sleeping);

    sandbox.dispatch(Command::ToggleGravity);
    assert!(!sandbox.world().body(handle).unwrap().is_sleeping);
}

#[test]
fn vacuum_leaves_bodies_where_they_spawned() {
    let (sandbox, handle) = settle(PresetId::Vacuum, ShapeKind::Triangle, 60);
    let body = sandbox.world().body(handle).unwrap();
    assert_eq!(body.position, Vec2::new(640.0, 360.0));
}

#[test]
fn density_sets_mass() {
    let (sandbox, handle) = settle(PresetId::Fluid, ShapeKind::Square, 0);
    let body = sandbox.world().body(handle).unwrap();
    assert_relative_eq!(body.mass(), 2500.0, epsilon = 1e-2);
}

#[test]
fn parallel_and_sequential_integration_agree() {
    let run = |parallel: bool| {
        let mut world = PhysicsWorld::default();
        world.set_parallel_enabled(parallel);
        world.set_gravity(Vec2::new(0.0, 1.0));
        for i in 0..32 {
            let x = 10.0 + i as f32 * 20.0;
            world.add_body(RigidBody::circle(Vec2::new(x, 0.0), 5.0, BodyOptions::default()));
        }
        for _ in 0..20 {
            world.step_once();
        }
        world.bodies().map(|body| body.position).collect::<Vec<_>>()
    };
    assert_eq!(run(false), run(true));
}

#[test]
fn world_is_send_and_sync() {
    fn assert_sync_send<T: Sync + Send>() {}
    assert_sync_send::<PhysicsWorld>();
}

#[test]
fn world_steps_from_another_thread() {
    use std::sync::{Arc, Mutex};

    let world = Arc::new(Mutex::new(PhysicsWorld::default()));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let world = Arc::clone(&world);
            std::thread::spawn(move || {
                let mut world = world.lock().unwrap();
                let dt = world.time_step();
                world.step(dt);
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(world.lock().unwrap().steps(), 4);
}
