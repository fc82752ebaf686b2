//! Validates shard state determinism, coordinate transforms and compositing

use fracture::effect::parameters::parse_hex_color;
use fracture::effect::{CellTransform, FractureParameters, ShardState};
use fracture::fracture_image;
use fracture::geometry::WorkingSpace;
use image::{Rgba, RgbaImage};

fn gradient_source(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

#[test]
fn test_shard_state_is_deterministic() {
    let params = FractureParameters {
        shard_count: 50,
        intensity: 3.5,
        stability: 40.0,
        scatter: 25.0,
        ..FractureParameters::default()
    };

    for index in 0..200 {
        let first = ShardState::derive(index, &params);
        let second = ShardState::derive(index, &params);
        assert_eq!(first, second, "shard {index} state must be bit-identical");
    }
}

#[test]
fn test_identity_transform() {
    let params = FractureParameters::default();
    let space = WorkingSpace::new(800, 600, 1.0, 1.0);
    let transform = CellTransform::new(&params, &space, 800, 600);

    let point = [100.25, 33.5];
    let mapped = transform.apply(point);
    let expected = [
        point[0] - space.effective_width / 2.0 + 400.0,
        point[1] - space.effective_height / 2.0 + 300.0,
    ];
    assert_eq!(mapped, expected);
}

#[test]
fn test_zero_intensity_leaves_unstable_shards_in_place() {
    let params = FractureParameters {
        shard_count: 10,
        intensity: 0.0,
        stability: 0.0,
        scatter: 0.0,
        ..FractureParameters::default()
    };

    for index in 0..10 {
        let state = ShardState::derive(index, &params);
        assert!(!state.is_stable);
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.translation, [0.0, 0.0]);
        assert_eq!(state.scatter_rotation, 0.0);
    }
}

#[test]
fn test_stability_boundaries() {
    let all_stable = FractureParameters {
        stability: 100.0,
        ..FractureParameters::default()
    };
    let none_stable = FractureParameters {
        stability: 0.0,
        ..FractureParameters::default()
    };

    for index in 0..200 {
        assert!(ShardState::derive(index, &all_stable).is_stable);
        assert!(!ShardState::derive(index, &none_stable).is_stable);
    }
}

#[test]
fn test_zero_shards_passes_source_through() {
    let source = gradient_source(64, 48);
    let params = FractureParameters {
        shard_count: 0,
        ..FractureParameters::default()
    };

    let surface = fracture_image(&source, &params, 1).unwrap();
    assert_eq!(surface.dimensions(), source.dimensions());
    assert_eq!(surface.as_raw(), source.as_raw());
}

#[test]
fn test_identity_parameters_reproduce_source() {
    // Unstable shards with zero intensity and scatter repaint every covered
    // pixel with its own value, so the full render is still a no-op
    let source = gradient_source(64, 48);
    let params = FractureParameters {
        shard_count: 50,
        intensity: 0.0,
        stability: 0.0,
        scatter: 0.0,
        gap: 0.0,
        ..FractureParameters::default()
    };

    let surface = fracture_image(&source, &params, 9).unwrap();
    assert_eq!(surface.as_raw(), source.as_raw());
}

#[test]
fn test_render_is_reproducible_for_fixed_seed() {
    let source = gradient_source(80, 60);
    let params = FractureParameters {
        shard_count: 40,
        intensity: 4.0,
        stability: 30.0,
        scatter: 20.0,
        gap: 2.0,
        ..FractureParameters::default()
    };

    let first = fracture_image(&source, &params, 1234).unwrap();
    let second = fracture_image(&source, &params, 1234).unwrap();
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_displacement_changes_pixels() {
    let source = gradient_source(80, 60);
    let params = FractureParameters {
        shard_count: 40,
        intensity: 6.0,
        stability: 0.0,
        ..FractureParameters::default()
    };

    let surface = fracture_image(&source, &params, 1234).unwrap();
    assert_ne!(surface.as_raw(), source.as_raw());
}

#[test]
fn test_full_stability_suppresses_gap_strokes() {
    // Gaps only appear where glass actually separated, so a fully stable
    // render ignores the gap settings entirely
    let source = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
    let params = FractureParameters {
        shard_count: 30,
        intensity: 2.0,
        stability: 100.0,
        gap: 3.0,
        gap_color: Rgba([255, 0, 0, 255]),
        ..FractureParameters::default()
    };

    let surface = fracture_image(&source, &params, 5).unwrap();
    assert_eq!(surface.as_raw(), source.as_raw());
}

#[test]
fn test_zero_stability_strokes_every_boundary() {
    // With zero stability every boundary belongs to a displaced shard
    let source = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
    let params = FractureParameters {
        shard_count: 30,
        intensity: 0.0,
        stability: 0.0,
        gap: 3.0,
        gap_color: Rgba([255, 0, 0, 255]),
        ..FractureParameters::default()
    };

    let surface = fracture_image(&source, &params, 5).unwrap();
    let red_pixels = surface
        .pixels()
        .filter(|pixel| pixel.0 == [255, 0, 0, 255])
        .count();
    assert!(red_pixels > 0, "expected gap strokes on unstable boundaries");
}

#[test]
fn test_parameter_validation() {
    let valid = FractureParameters::default();
    assert!(valid.validate().is_ok());

    let cases = [
        FractureParameters {
            intensity: -1.0,
            ..FractureParameters::default()
        },
        FractureParameters {
            gap: f64::NAN,
            ..FractureParameters::default()
        },
        FractureParameters {
            stability: 150.0,
            ..FractureParameters::default()
        },
        FractureParameters {
            elongation_x: 0.0,
            ..FractureParameters::default()
        },
        FractureParameters {
            elongation_y: -2.0,
            ..FractureParameters::default()
        },
        FractureParameters {
            rotation: 360.0,
            ..FractureParameters::default()
        },
        FractureParameters {
            scatter: 181.0,
            ..FractureParameters::default()
        },
    ];
    for params in cases {
        assert!(params.validate().is_err());
    }
}

#[test]
fn test_hex_color_parsing() {
    assert_eq!(
        parse_hex_color("#ff0000").unwrap(),
        Rgba([255, 0, 0, 255])
    );
    assert_eq!(
        parse_hex_color("00Ff7f").unwrap(),
        Rgba([0, 255, 127, 255])
    );

    assert!(parse_hex_color("red").is_err());
    assert!(parse_hex_color("#ff00").is_err());
    assert!(parse_hex_color("#ff000g").is_err());
}
