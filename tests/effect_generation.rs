use egui::{Pos2, Vec2};
use paint_effects::generator;
use paint_effects::id_generator::IdGenerator;
use paint_effects::{Anchor, BrushType};
use rand::SeedableRng;
use rand::rngs::StdRng;

const CURSOR: Pos2 = Pos2::new(320.0, 240.0);
const SIZE: f32 = 50.0;

fn batches(brush: BrushType, count: u64) -> Vec<Vec<paint_effects::EffectShape>> {
    let mut rng = StdRng::seed_from_u64(0xF00D);
    let mut ids = IdGenerator::new();
    (0..count)
        .map(|_| generator::generate(brush, CURSOR, SIZE, &mut rng, &mut ids))
        .collect()
}

#[test]
fn test_batch_sizes_per_brush() {
    for (brush, expected) in [
        (BrushType::Foliage, 8),
        (BrushType::Fire, 6),
        (BrushType::Smoke, 5),
    ] {
        for batch in batches(brush, 20) {
            assert_eq!(batch.len(), expected);
            assert!(batch.iter().all(|s| s.brush() == brush && s.origin() == CURSOR));
        }
    }
}

#[test]
fn test_alpha_within_brush_range() {
    let expected = [
        (BrushType::Foliage, 100..=199),
        (BrushType::Fire, 120..=219),
        (BrushType::Smoke, 40..=119),
    ];
    for (brush, range) in expected {
        for shape in batches(brush, 100).into_iter().flatten() {
            assert!(range.contains(&shape.alpha()), "{} alpha {}", brush, shape.alpha());
            assert_eq!(shape.fill().a(), shape.alpha());
        }
    }
}

#[test]
fn test_colors_come_from_palette() {
    for brush in BrushType::ALL {
        for shape in batches(brush, 50).into_iter().flatten() {
            assert!(brush.palette().contains(shape.color()));
        }
    }
}

#[test]
fn test_offsets_bounded_by_brush_size() {
    // Half-extents of the offset region per brush, as fractions of the size
    let bounds = [
        (BrushType::Foliage, Vec2::new(0.5, 0.5)),
        (BrushType::Fire, Vec2::new(0.25, 0.8)),
        (BrushType::Smoke, Vec2::new(0.6, 1.5)),
    ];
    for (brush, fraction) in bounds {
        let limit = fraction * SIZE;
        for shape in batches(brush, 100).into_iter().flatten() {
            let offset = shape.offset();
            assert!(offset.x.abs() <= limit.x, "{} x offset {}", brush, offset.x);
            assert!(offset.y.abs() <= limit.y, "{} y offset {}", brush, offset.y);
        }
    }
}

#[test]
fn test_fire_rises_from_cursor() {
    for shape in batches(BrushType::Fire, 100).into_iter().flatten() {
        assert!(shape.offset().y <= 0.0);
        assert_eq!(shape.anchor(), Anchor::BottomCenter);
        // The flame's base sits at or above the cursor
        assert!(shape.rect().max.y <= CURSOR.y + 1e-3);
    }
}

#[test]
fn test_smoke_drifts_higher_than_fire() {
    let mean_y = |brush| {
        let offsets: Vec<f32> = batches(brush, 200)
            .into_iter()
            .flatten()
            .map(|s| s.offset().y)
            .collect();
        offsets.iter().sum::<f32>() / offsets.len() as f32
    };
    assert!(mean_y(BrushType::Smoke) < mean_y(BrushType::Fire));
}

#[test]
fn test_gradient_centers() {
    for brush in BrushType::ALL {
        let expected = if brush == BrushType::Fire {
            Vec2::new(0.5, 0.8)
        } else {
            Vec2::new(0.5, 0.5)
        };
        for shape in batches(brush, 5).into_iter().flatten() {
            assert_eq!(shape.gradient_center(), expected);
        }
    }
}

#[test]
fn test_ids_unique_across_batches() {
    let mut ids: Vec<_> = batches(BrushType::Foliage, 30)
        .into_iter()
        .flatten()
        .map(|s| s.id())
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
