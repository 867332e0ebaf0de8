//! Integration tests for marching and rendering
//!
//! These tests verify the full scene-camera-sink pipeline:
//! 1. Rays aimed at a solid hit it after the expected distance
//! 2. Rays aimed away from everything come back transparent
//! 3. Compositing lets near hits occlude far ones
//! 4. Rendered frames land in the framebuffer right side up

use hypermarch_core::{Color, HyperCube, HyperSphere, Scene, SceneTemplate, SolidTemplate, Vec4};
use hypermarch_render::{
    blend_colors, Camera, CameraSettings, Framebuffer, MarchOutcome, MarchSettings, OutputSink,
    Ray,
};

const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

fn single_sphere() -> Scene {
    Scene::new(vec![HyperSphere::new(Vec4::new(0.0, 10.0, 0.0, 0.0), 4.0, GREEN).into()])
}

// ==================== Marching Tests ====================

#[test]
fn test_ray_hits_sphere_dead_on() {
    let scene = single_sphere();
    let ray = Ray::new(&scene, Vec4::ZERO, Vec4::new(0.0, 1.0, 0.0, 0.0), MarchSettings::default());

    match ray.march().expect("march should not fail") {
        MarchOutcome::Hit { color, distance_traveled, .. } => {
            assert_eq!(color, GREEN);
            assert!((distance_traveled - 6.0).abs() < 0.03, "traveled {}", distance_traveled);
        }
        MarchOutcome::Miss => panic!("Ray aimed at the sphere should hit"),
    }
}

#[test]
fn test_ray_aimed_away_misses() {
    let scene = Scene::new(vec![
        HyperSphere::new(Vec4::new(0.0, 10.0, 0.0, 0.0), 4.0, GREEN).into(),
        HyperCube::new(Vec4::new(5.0, 5.0, 5.0, 5.0), 2.0, Color::BLACK).unwrap().into(),
    ]);
    let ray = Ray::new(&scene, Vec4::ZERO, Vec4::new(0.0, -1.0, -1.0, -1.0), MarchSettings::default());

    assert_eq!(ray.trace().unwrap(), Color::TRANSPARENT);
}

#[test]
fn test_tiny_cube_from_scene_file_does_not_blank_the_sphere() {
    let template = SceneTemplate::new("tiny")
        .with_object(SolidTemplate::hyper_sphere([0.0, 10.0, 0.0, 0.0], 4.0).with_color(GREEN))
        .with_object(SolidTemplate::hyper_cube([100.0, 0.0, 0.0, 0.0], 5e-7));
    let scene = template.instantiate().expect("tiny cube is a valid solid");

    let ray = Ray::new(&scene, Vec4::ZERO, Vec4::Y, MarchSettings::default());
    assert_eq!(ray.trace().unwrap(), GREEN);
}

#[test]
fn test_opaque_sample_occludes() {
    let far = Color::new(0.1, 0.2, 0.3, 0.4);
    assert_eq!(blend_colors(far, GREEN), GREEN);
}

// ==================== Rendering Tests ====================

/// Camera looking along +y at a sphere centered on its optical axis
fn sphere_camera(parallel: bool) -> Camera<Framebuffer> {
    let scene = Scene::new(vec![HyperSphere::new(Vec4::new(0.0, 12.0, 0.0, 0.0), 3.0, GREEN).into()]);
    let settings = CameraSettings {
        ana_slope: 0.0,
        parallel,
        ..Default::default()
    };
    Camera::new(Framebuffer::new(40, 20), scene, 20, 2, 10, 0.0, Vec4::ZERO).with_settings(settings)
}

#[test]
fn test_render_paints_sphere_in_the_middle() {
    let mut camera = sphere_camera(false);
    camera.render().unwrap();
    let fb = camera.into_sink();

    assert_eq!(fb.dimensions(), (40, 20));
    // Optical axis lands on logical pixel (10, 5), device pixels (20..22, 8..10)
    assert_eq!(fb.pixel(20, 9), Some(GREEN.to_rgba8()));
    // Corners see nothing but the white backdrop
    assert_eq!(fb.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(fb.pixel(39, 19), Some([255, 255, 255, 255]));
}

#[test]
fn test_render_is_deterministic_across_threads() {
    let mut serial = sphere_camera(false);
    let mut parallel = sphere_camera(true);
    serial.render().unwrap();
    parallel.render().unwrap();
    assert_eq!(serial.into_sink(), parallel.into_sink());
}

#[test]
fn test_rows_are_flipped() {
    // A sphere above the axis shows up near the top of the surface
    let scene = Scene::new(vec![HyperSphere::new(Vec4::new(0.0, 0.0, 4.0, 0.0), 1.5, GREEN).into()]);
    let settings = CameraSettings { ana_slope: 0.0, parallel: false, ..Default::default() };
    let mut camera = Camera::new(Framebuffer::new(10, 10), scene, 10, 1, 10, 0.0, Vec4::ZERO)
        .with_settings(settings);
    camera.render().unwrap();
    let fb = camera.into_sink();

    let green = GREEN.to_rgba8();
    let painted_rows: Vec<u32> = (0..10)
        .filter(|&y| (0..10).any(|x| fb.pixel(x, y) == Some(green)))
        .collect();
    assert!(!painted_rows.is_empty());
    assert!(painted_rows.iter().all(|&y| y < 5), "rows {:?}", painted_rows);
}
