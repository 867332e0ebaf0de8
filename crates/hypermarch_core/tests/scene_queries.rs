//! Integration tests for scene construction and distance queries
//!
//! These tests verify the path from scene file to distance answers:
//! 1. Templates instantiate into scenes in the written order
//! 2. Nearest-object queries pick the right solid across solid kinds
//! 3. Distances never overestimate, so marching cannot overshoot

use hypermarch_core::{
    Color, DistanceField, HyperCube, HyperSphere, Parallelepiped, QueryError, Scene,
    SceneLoadError, SceneTemplate, SolidTemplate, Vec4,
};

const EPSILON: f32 = 0.0001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Two hypercubes and a hypersphere
fn demo_template() -> SceneTemplate {
    SceneTemplate::new("Demo")
        .with_object(SolidTemplate::hyper_cube([-5.0, 5.0, -5.0, 0.0], 10.0).with_name("small"))
        .with_object(
            SolidTemplate::hyper_cube([-10.0, 15.0, -7.0, 0.0], 20.0)
                .with_name("large")
                .with_color(Color::from_rgb255(201.0, 240.0, 124.0, 1.0)),
        )
        .with_object(SolidTemplate::hyper_sphere([15.0, 10.0, 9.0, 10.0], 4.0).with_name("ball"))
}

// ==================== Scene Loading Tests ====================

#[test]
fn test_demo_template_instantiates() {
    let scene = demo_template().instantiate().expect("demo scene should be valid");
    assert_eq!(scene.len(), 3);
    assert_eq!(scene.objects[0].color(), HyperCube::DEFAULT_COLOR);
    assert_eq!(scene.objects[2].color(), HyperSphere::DEFAULT_COLOR);
}

#[test]
fn test_invalid_template_reports_every_problem() {
    let template = SceneTemplate::new("Broken")
        .with_object(SolidTemplate::hyper_cube([0.0; 4], -1.0))
        .with_object(SolidTemplate::hyper_sphere([0.0; 4], -1.0));

    match template.instantiate() {
        Err(SceneLoadError::Invalid(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("Expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_scene_file_on_disk() {
    let dir = std::env::temp_dir().join("hypermarch_core_scene_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("single.ron");
    std::fs::write(
        &path,
        r#"SceneTemplate(
    name: "Single",
    objects: [
        SolidTemplate(type: "HyperSphere", center: (0.0, 10.0, 0.0, 0.0), radius: 4.0),
    ],
)"#,
    )
    .unwrap();

    let scene = SceneTemplate::load(&path).unwrap().instantiate().unwrap();
    let (_, distance) = scene.nearest_object_and_distance(Vec4::ZERO).unwrap();
    assert!(approx_eq(distance, 6.0));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_malformed_scene_file() {
    let dir = std::env::temp_dir().join("hypermarch_core_scene_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.ron");
    std::fs::write(&path, "SceneTemplate(name: ").unwrap();

    assert!(matches!(SceneTemplate::load(&path), Err(SceneLoadError::Parse(_))));

    std::fs::remove_file(&path).ok();
}

// ==================== Query Tests ====================

#[test]
fn test_nearest_across_solid_kinds() {
    let mut scene = Scene::default();
    scene.push(HyperCube::new(Vec4::new(10.0, 0.0, 0.0, 0.0), 2.0, Color::WHITE).unwrap());
    scene.push(HyperSphere::new(Vec4::new(0.0, -6.0, 0.0, 0.0), 1.0, Color::BLACK));

    let (nearest, distance) = scene.nearest_object_and_distance(Vec4::ZERO).unwrap();
    assert_eq!(nearest.kind_name(), "HyperSphere");
    assert!(approx_eq(distance, 5.0));

    // Move next to the cube
    let (nearest, distance) = scene
        .nearest_object_and_distance(Vec4::new(9.0, 1.0, 1.0, 1.0))
        .unwrap();
    assert_eq!(nearest.kind_name(), "HyperCube");
    assert!(approx_eq(distance, 1.0));
}

#[test]
fn test_distance_is_a_lower_bound() {
    let cube = HyperCube::new(Vec4::ZERO, 4.0, Color::WHITE).unwrap();
    let start = Vec4::new(-3.0, 2.0, 1.0, 2.0);
    let direction = Vec4::X;

    // Stepping by the reported distance never ends up past the x = 0 cell
    let mut point = start;
    for _ in 0..64 {
        let step = cube.distance_to(point).unwrap();
        if step < 0.001 {
            break;
        }
        point += direction * step;
    }
    assert!(point.x <= EPSILON, "overshot to {:?}", point);
    assert!(approx_eq(point.x, 0.0));
}

#[test]
fn test_slab_and_cube_agree_on_shared_face() {
    let cube = HyperCube::new(Vec4::ZERO, 1.0, Color::WHITE).unwrap();
    let face = Parallelepiped::from_directions(
        Vec4::new(0.0, 0.0, 0.0, 1.0),
        [Vec4::X, Vec4::Y, Vec4::Z],
        Color::WHITE,
    )
    .unwrap();

    let point = Vec4::new(0.5, 0.5, 0.5, 3.0);
    assert!(approx_eq(cube.distance_to(point).unwrap(), face.distance_to(point).unwrap()));
}

#[test]
fn test_empty_scene_query_is_an_error() {
    let scene = Scene::new(Vec::new());
    assert!(matches!(
        scene.nearest_object_and_distance(Vec4::ZERO),
        Err(QueryError::EmptyScene)
    ));
}
