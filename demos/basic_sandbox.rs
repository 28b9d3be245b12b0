use physics_sandbox::*;

fn main() -> Result<()> {
    let config = SandboxConfig::default()
        .with_seed(2024)
        .with_population(SpawnBatch::showcase());
    let mut sandbox = Sandbox::new(config)?;
    sandbox.start();
    println!("{}", sandbox.narrative());

    let dt = sandbox.world().time_step();
    for _ in 0..120 {
        sandbox.tick(dt);
    }

    sandbox.enqueue(Command::ToggleGravity);
    sandbox.enqueue(Command::spawn_named("square", 5));
    sandbox.tick(dt);
    println!("[{}] {}", sandbox.gravity_button_label(), sandbox.narrative());

    let preset: PresetId = "denseAtmosphere".parse()?;
    if let Some(text) = sandbox.dispatch(Command::SelectPreset {
        preset,
        reset: true,
    }) {
        println!("{text}");
    }

    sandbox.dispatch(Command::ToggleGravity);
    sandbox.dispatch(Command::spawn_named("circle", 3));
    for _ in 0..240 {
        sandbox.tick(dt);
    }

    for body in sandbox.registry().bodies() {
        if let Some(handle) = sandbox.registry().handle_of(body.id) {
            if let Some(rigid) = sandbox.world().body(handle) {
                println!(
                    "#{} {} {} at {:?} (asleep: {})",
                    body.id, body.shape, rigid.render.fill, rigid.position, rigid.is_sleeping
                );
            }
        }
    }
    println!(
        "{} frames, {} bodies in world",
        sandbox.clock().frame(),
        sandbox.world().body_count()
    );
    Ok(())
}
