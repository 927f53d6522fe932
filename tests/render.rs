use image::Rgb;
use mirrorball::animation::find_sphere_by_color;
use mirrorball::interval::Interval;
use mirrorball::output::save_image;
use mirrorball::{
    trace_ray, trace_ray_checked, Animation, Camera, Light, Ray, RenderError, Scene, Sphere, Vec3,
    BACKGROUND, EPS,
};

fn red_sphere() -> Sphere {
    Sphere::new(Vec3::new(0.0, -1.0, 6.0), 1.0, Rgb([255, 0, 0]), 500, 0.2)
}

fn ambient_scene(spheres: Vec<Sphere>) -> Scene {
    Scene::new(spheres, vec![Light::Ambient { intensity: 1.0 }])
}

#[test]
fn test_red_sphere_under_full_ambient() {
    let scene = ambient_scene(vec![red_sphere()]);
    // Straight down +Z, through the middle of the sphere's front face
    let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Z);

    let local_only = trace_ray(&ray, Interval::from_min(EPS), &scene, 0);
    assert_eq!(local_only, Rgb([255, 0, 0]));

    // With bounces the 0.2 mirror term sees only black background
    let reflected = trace_ray(&ray, Interval::from_min(EPS), &scene, 3);
    assert!((203..=204).contains(&reflected[0]), "{:?}", reflected);
    assert_eq!((reflected[1], reflected[2]), (0, 0));
}

#[test]
fn test_camera_center_ray_hits_red_sphere() {
    let scene = ambient_scene(vec![Sphere::new(
        Vec3::new(0.0, 0.0, 6.0),
        1.0,
        Rgb([255, 0, 0]),
        500,
        0.0,
    )]);
    let mut camera = Camera::new();
    camera.image_width = 16;
    camera.image_height = 16;
    let image = camera.render(&scene).unwrap();

    assert_eq!(*image.get_pixel(8, 8), Rgb([255, 0, 0]));
    assert_eq!(*image.get_pixel(0, 0), BACKGROUND);
}

#[test]
fn test_empty_scene_is_black() {
    let mut camera = Camera::new();
    camera.image_width = 12;
    camera.image_height = 9;
    let image = camera.render(&ambient_scene(Vec::new())).unwrap();
    assert!(image.pixels().all(|p| *p == BACKGROUND));
}

#[test]
fn test_image_rows_are_top_first() {
    // Sphere above the view axis lights up the upper half only
    let scene = ambient_scene(vec![Sphere::new(
        Vec3::new(0.0, 2.0, 6.0),
        1.5,
        Rgb([0, 255, 0]),
        -1,
        0.0,
    )]);
    let mut camera = Camera::new();
    camera.image_width = 20;
    camera.image_height = 20;
    let image = camera.render(&scene).unwrap();

    let green_rows: Vec<u32> = (0..20)
        .filter(|&y| (0..20).any(|x| *image.get_pixel(x, y) == Rgb([0, 255, 0])))
        .collect();
    assert!(!green_rows.is_empty());
    assert!(green_rows.iter().all(|&y| y < 10));
}

#[test]
fn test_degenerate_primary_ray() {
    let scene = ambient_scene(vec![red_sphere()]);
    let err = trace_ray_checked(&Ray::new(Vec3::ZERO, Vec3::ZERO), &scene, 3).unwrap_err();
    assert!(matches!(err, RenderError::DegenerateRay));
}

#[test]
fn test_shadowed_floor_is_darker() {
    let floor = Sphere::new(Vec3::new(0.0, -1001.0, 6.0), 1000.0, Rgb([200, 200, 200]), -1, 0.0);
    let blocker = Sphere::new(Vec3::new(0.0, 1.0, 6.0), 0.5, Rgb([0, 0, 255]), -1, 0.0);
    let lights = vec![
        Light::Ambient { intensity: 0.25 },
        Light::Point {
            intensity: 0.8,
            position: Vec3::new(0.0, 5.0, 6.0),
        },
    ];

    // Aim at the top of the floor, right below the light; lit intensity
    // saturates at 1.0 while the shadowed point keeps only the ambient 0.25
    let target = Vec3::new(0.0, -1.0, 6.0);
    let ray = Ray::new(Vec3::ZERO, (target - Vec3::ZERO).normalize());

    let lit = Scene::new(vec![floor.clone()], lights.clone());
    let shadowed = Scene::new(vec![floor, blocker], lights);

    let lit_color = trace_ray_checked(&ray, &lit, 0).unwrap();
    let shadow_color = trace_ray_checked(&ray, &shadowed, 0).unwrap();
    assert_eq!(lit_color, Rgb([200, 200, 200]));
    assert_eq!(shadow_color, Rgb([50, 50, 50]));
}

#[test]
fn test_bundled_scene_loads_and_animates() {
    let scene = Scene::load(concat!(env!("CARGO_MANIFEST_DIR"), "/scene/scene.txt")).unwrap();
    assert!(find_sphere_by_color(&scene, Rgb([255, 0, 0])).is_some());

    let animation = Animation::new(scene.clone(), 3).unwrap();
    let mut camera = Camera::new();
    camera.image_width = 8;
    camera.image_height = 8;

    let dir = tempfile::tempdir().unwrap();
    for (i, frame) in animation.iter() {
        let image = camera.render(&frame).unwrap();
        let path = dir.path().join(format!("frame_{}.ppm", i));
        save_image(&image, &path).unwrap();
        assert!(path.exists());
    }

    // Rendering frames never touches the loaded scene
    assert_eq!(Scene::load(concat!(env!("CARGO_MANIFEST_DIR"), "/scene/scene.txt")).unwrap(), scene);
}
