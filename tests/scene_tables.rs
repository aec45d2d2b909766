//! Structural tests pinning the classic scene tables to the demo's fixed
//! coordinate lists, and checking that the tables survive a JSON round trip.

use petals::{init_frame, LineStrip, PixelCanvas, Rgb, Scene, Stage};

fn strip_points(strip: &LineStrip) -> Vec<(f32, f32)> {
    strip.vertices.iter().map(|v| (v.x, v.y)).collect()
}

fn stage_points(stage: &Stage) -> Vec<Vec<(f32, f32)>> {
    stage.strips.iter().map(strip_points).collect()
}

#[test]
fn axes_span_the_full_normalized_range() {
    let scene = Scene::classic();
    let axes = &scene.stages()[0];

    assert_eq!(axes.name, "axes");
    assert_eq!(
        stage_points(axes),
        vec![
            vec![(-1.0, 0.0), (1.0, 0.0)],
            vec![(0.0, -1.0), (0.0, 1.0)],
        ]
    );
}

#[test]
fn lower_right_petals_match_the_fixed_coordinates() {
    let scene = Scene::classic();
    let stage = &scene.stages()[1];

    assert_eq!(stage.name, "lower-right");
    assert_eq!(
        stage_points(stage),
        vec![
            vec![(0.0, 0.0), (0.5, -0.9), (1.0, 0.0)],
            vec![(0.2, 0.0), (0.5, -0.6), (0.8, 0.0)],
            vec![(0.4, 0.0), (0.5, -0.3), (0.6, 0.0)],
        ]
    );
}

#[test]
fn upper_right_petals_match_the_fixed_coordinates() {
    let scene = Scene::classic();
    let stage = &scene.stages()[3];

    assert_eq!(stage.name, "upper-right");
    assert_eq!(
        stage_points(stage),
        vec![
            vec![(0.0, 0.0), (0.9, 0.5), (0.0, 1.0)],
            vec![(0.0, 0.2), (0.6, 0.5), (0.0, 0.8)],
            vec![(0.0, 0.4), (0.3, 0.5), (0.0, 0.6)],
        ]
    );
}

#[test]
fn opposite_quadrants_are_point_mirrors() {
    let scene = Scene::classic();
    let mirrored = |points: Vec<Vec<(f32, f32)>>| -> Vec<Vec<(f32, f32)>> {
        points
            .into_iter()
            .map(|strip| strip.into_iter().map(|(x, y)| (-x, -y)).collect())
            .collect()
    };

    // upper-left mirrors lower-right; lower-left mirrors upper-right
    assert_eq!(
        stage_points(&scene.stages()[2]),
        mirrored(stage_points(&scene.stages()[1]))
    );
    assert_eq!(
        stage_points(&scene.stages()[4]),
        mirrored(stage_points(&scene.stages()[3]))
    );
}

#[test]
fn stage_styles_carry_the_classic_colors() {
    let scene = Scene::classic();
    let colors: Vec<Rgb> = scene.stages().iter().map(|s| s.style.color).collect();

    assert_eq!(
        colors,
        [Rgb::WHITE, Rgb::GREEN, Rgb::RED, Rgb::BLUE, Rgb::CYAN]
    );
    for stage in scene.stages() {
        assert_eq!(stage.style.line_width, 2.0);
    }
}

#[test]
fn classic_coordinates_stay_in_range() {
    let scene = Scene::classic();
    for stage in scene.stages() {
        for strip in &stage.strips {
            assert!(strip.vertices.len() >= 2);
            for vertex in &strip.vertices {
                assert!((-1.0..=1.0).contains(&vertex.x), "{} x out of range", stage.name);
                assert!((-1.0..=1.0).contains(&vertex.y), "{} y out of range", stage.name);
            }
        }
        let color = stage.style.color;
        for component in [color.r, color.g, color.b] {
            assert!((0.0..=1.0).contains(&component));
        }
    }
}

#[test]
fn scene_survives_a_json_round_trip() {
    let scene = Scene::classic();
    let json = serde_json::to_string(&scene).unwrap();
    let reloaded: Scene = serde_json::from_str(&json).unwrap();

    assert_eq!(scene, reloaded);

    // The reloaded tables paint the identical frame.
    let mut original = PixelCanvas::new(500, 500);
    let mut round_tripped = PixelCanvas::new(500, 500);
    init_frame(&mut original);
    init_frame(&mut round_tripped);
    scene.paint(&mut original);
    reloaded.paint(&mut round_tripped);

    assert_eq!(original.as_raw(), round_tripped.as_raw());
}
