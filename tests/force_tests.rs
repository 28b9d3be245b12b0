use physics_sandbox::sandbox::force::{EM_OFF, EM_ON, GRAVITY_OFF, GRAVITY_ON};
use physics_sandbox::*;

fn earth_sandbox(seed: u64) -> Sandbox {
    Sandbox::new(SandboxConfig::default().with_seed(seed)).expect("valid config")
}

#[test]
fn starts_earth_like() {
    let sandbox = earth_sandbox(0);
    assert_eq!(
        sandbox.force_state(),
        ForceState {
            gravity_enabled: true,
            electromagnetic_enabled: false
        }
    );
    assert_eq!(sandbox.world().gravity().y, 1.0);
    assert_eq!(sandbox.gravity_button_label(), "Gravity Enabled");
}

#[test]
fn gravity_toggle_round_trip() {
    let mut sandbox = earth_sandbox(0);
    let original = sandbox.world().gravity();

    assert_eq!(sandbox.dispatch(Command::ToggleGravity), Some(GRAVITY_OFF));
    assert!(!sandbox.force_state().gravity_enabled);
    assert_eq!(sandbox.world().gravity().y, 0.0);
    assert_eq!(sandbox.narrative(), GRAVITY_OFF);
    assert_eq!(sandbox.gravity_button_label(), "Gravity Disabled");

    assert_eq!(sandbox.dispatch(Command::ToggleGravity), Some(GRAVITY_ON));
    assert!(sandbox.force_state().gravity_enabled);
    assert_eq!(sandbox.world().gravity(), original);
    assert_eq!(
        sandbox.world().gravity().y,
        PresetId::Earth.preset().gravity_y
    );
}

#[test]
fn electromagnetic_toggle_round_trip() {
    let mut sandbox = earth_sandbox(0);
    assert_eq!(sandbox.dispatch(Command::ToggleElectromagnetic), Some(EM_ON));
    assert!(sandbox.force_state().electromagnetic_enabled);
    assert_eq!(sandbox.dispatch(Command::ToggleElectromagnetic), Some(EM_OFF));
    assert!(!sandbox.force_state().electromagnetic_enabled);
    assert!(sandbox.force_state().gravity_enabled);
}

#[test]
fn electromagnetic_toggle_leaves_trajectories_untouched() {
    let run = |toggle_em: bool| {
        let mut sandbox = earth_sandbox(5);
        sandbox.dispatch(Command::Spawn {
            shape: ShapeKind::Circle,
            count: 3,
        });
        if toggle_em {
            sandbox.dispatch(Command::ToggleElectromagnetic);
        }
        sandbox.start();
        let dt = sandbox.world().time_step();
        for _ in 0..90 {
            sandbox.tick(dt);
        }
        sandbox
            .world()
            .bodies()
            .filter(|body| !body.is_static)
            .map(|body| (body.position, body.velocity, body.charge))
            .collect::<Vec<_>>()
    };

    let plain = run(false);
    let charged = run(true);
    assert_eq!(plain, charged);
    assert!(charged.iter().all(|(_, _, charge)| *charge == 0.0));
}

#[test]
fn gravity_toggle_changes_trajectories() {
    let run = |toggle_gravity: bool| {
        let mut sandbox = earth_sandbox(5);
        sandbox.dispatch(Command::spawn_named("circle", 1));
        if toggle_gravity {
            sandbox.dispatch(Command::ToggleGravity);
        }
        sandbox.start();
        let dt = sandbox.world().time_step();
        for _ in 0..30 {
            sandbox.tick(dt);
        }
        let handle = sandbox.registry().handle_of(1).unwrap();
        sandbox.world().body(handle).unwrap().position
    };

    let falling = run(false);
    let floating = run(true);
    assert!(falling.y > floating.y + 10.0);
    assert_eq!(floating, Vec2::new(640.0, 360.0));
}

#[test]
fn current_description_follows_state() {
    let mut sandbox = earth_sandbox(0);
    assert_eq!(
        sandbox.forces().current_description(),
        format!("{GRAVITY_ON}\n\n{EM_OFF}")
    );
    sandbox.dispatch(Command::ToggleGravity);
    assert!(sandbox
        .forces()
        .current_description()
        .starts_with(GRAVITY_OFF));
}
