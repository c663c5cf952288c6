use bevy::math::primitives::Sphere;
use bevy::prelude::*;

use crate::simulation::focus::CameraTarget;
use crate::simulation::scenario::{Scenario, Tunable};
use crate::simulation::states::BodyKind;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex3(pub usize);

/// World-space → screen-space scaling factor for positions and radii.
/// Scenario units already match screen units; kept as a single knob.
const SCALE3D: f32 = 1.0;

/// Resting distance of the camera behind and above its target
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 60.0, 220.0);

/// Per-frame interpolation factor for the camera target
const FOLLOW_SMOOTHING: f32 = 0.08;

/// Entrypoint: hand a built scenario to the Bevy 3D viewer
pub fn run_3d(scenario: Scenario) {
    log::info!("run_3d: starting Bevy 3D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (control_input_3d, physics_step_3d, sync_transforms_3d, draw_trails_3d, camera_follow_3d),
        )
        .run();
}

fn body_color(kind: BodyKind) -> Color {
    match kind {
        BodyKind::Star => Color::srgb(1.0, 0.9, 0.4),
        BodyKind::Planet => Color::srgb(0.55, 0.75, 1.0),
    }
}

/// Startup system: spawn camera, light, and one sphere per body
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
            ..Default::default()
        },
        transform: Transform::from_translation(CAMERA_OFFSET).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, 200.0),
        ..Default::default()
    });

    // One sphere per body; kind picks size and color
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        let radius_screen = (b.radius() as f32) * SCALE3D;

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(radius_screen).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: body_color(b.kind),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    (b.x.x as f32) * SCALE3D,
                    (b.x.y as f32) * SCALE3D,
                    (b.x.z as f32) * SCALE3D,
                ),
                ..Default::default()
            },
            BodyIndex3(i),
        ));
    }
}

/// Keyboard control surface. Every change goes through Scenario::apply,
/// the same validated interface a tuning panel would use.
fn control_input_3d(keyboard: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>) {
    if keyboard.just_pressed(KeyCode::Space) {
        let resume = !scenario.running;
        if let Err(err) = scenario.apply(Tunable::Running(resume)) {
            log::warn!("pause toggle rejected: {err}");
        }
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        scenario.restart();
    }

    // Digits 1–9 focus that body; 0 or Escape drop the focus
    const DIGITS: [(KeyCode, usize); 9] = [
        (KeyCode::Digit1, 0),
        (KeyCode::Digit2, 1),
        (KeyCode::Digit3, 2),
        (KeyCode::Digit4, 3),
        (KeyCode::Digit5, 4),
        (KeyCode::Digit6, 5),
        (KeyCode::Digit7, 6),
        (KeyCode::Digit8, 7),
        (KeyCode::Digit9, 8),
    ];
    for (key, index) in DIGITS {
        if keyboard.just_pressed(key) {
            if let Err(err) = scenario.apply(Tunable::Focus { index, on: true }) {
                log::warn!("focus rejected: {err}");
            }
        }
    }
    if keyboard.just_pressed(KeyCode::Digit0) || keyboard.just_pressed(KeyCode::Escape) {
        if let Some(index) = scenario.focus.focused() {
            if let Err(err) = scenario.apply(Tunable::Focus { index, on: false }) {
                log::warn!("unfocus rejected: {err}");
            }
        }
    }

    // Trail limit up/down; shrinking truncates immediately
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        let limit = scenario.parameters.trail_limit + 50;
        if let Err(err) = scenario.apply(Tunable::TrailLimit(limit)) {
            log::warn!("trail limit rejected: {err}");
        }
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        let limit = scenario.parameters.trail_limit.saturating_sub(50).max(1);
        match scenario.apply(Tunable::TrailLimit(limit)) {
            Ok(()) => scenario.enforce_trail_limits(),
            Err(err) => log::warn!("trail limit rejected: {err}"),
        }
    }

    // Gravitational constant and time step, halve/double
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        let g = scenario.parameters.g * 0.5;
        if let Err(err) = scenario.apply(Tunable::GravitationalConstant(g)) {
            log::warn!("g rejected: {err}");
        }
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        let g = scenario.parameters.g * 2.0;
        if let Err(err) = scenario.apply(Tunable::GravitationalConstant(g)) {
            log::warn!("g rejected: {err}");
        }
    }
    if keyboard.just_pressed(KeyCode::Comma) {
        let dt = scenario.parameters.dt * 0.5;
        if let Err(err) = scenario.apply(Tunable::TimeStep(dt)) {
            log::warn!("dt rejected: {err}");
        }
    }
    if keyboard.just_pressed(KeyCode::Period) {
        let dt = scenario.parameters.dt * 2.0;
        if let Err(err) = scenario.apply(Tunable::TimeStep(dt)) {
            log::warn!("dt rejected: {err}");
        }
    }
}

/// Per-frame physics: exactly one driver tick per rendered frame
fn physics_step_3d(mut scenario: ResMut<Scenario>) {
    scenario.tick();
}

fn sync_transforms_3d(scenario: Res<Scenario>, mut query: Query<(&BodyIndex3, &mut Transform)>) {
    for (BodyIndex3(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation = Vec3::new(
                (b.x.x as f32) * SCALE3D,
                (b.x.y as f32) * SCALE3D,
                (b.x.z as f32) * SCALE3D,
            );
        }
    }
}

/// Draw each body's trail as a polyline
fn draw_trails_3d(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for b in &scenario.system.bodies {
        if b.trail.len() < 2 {
            continue;
        }
        let points = b
            .trail
            .iter()
            .map(|p| Vec3::new(p.x as f32, p.y as f32, p.z as f32) * SCALE3D);
        gizmos.linestrip(points, body_color(b.kind).with_alpha(0.4));
    }
}

#[derive(Default)]
struct FollowState {
    smoothed: Vec3,
}

/// Move the camera toward the current target point: the focused body's
/// position, or the centroid of all bodies when unfocused.
fn camera_follow_3d(
    scenario: Res<Scenario>,
    mut query: Query<&mut Transform, With<Camera3d>>,
    mut state: Local<FollowState>,
) {
    let target = scenario.focus.target_point(&scenario.system);
    let target = Vec3::new(target.x as f32, target.y as f32, target.z as f32) * SCALE3D;

    // Ease toward the target; track a focused body more tightly than
    // the slowly drifting centroid
    let smoothing = match scenario.focus.target() {
        CameraTarget::Body(_) => FOLLOW_SMOOTHING,
        CameraTarget::Centroid => FOLLOW_SMOOTHING * 0.5,
    };
    state.smoothed = state.smoothed.lerp(target, smoothing);

    for mut transform in &mut query {
        transform.translation = state.smoothed + CAMERA_OFFSET;
        transform.look_at(state.smoothed, Vec3::Y);
    }
}
