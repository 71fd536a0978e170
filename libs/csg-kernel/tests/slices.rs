use csg_kernel::cross_section::CrossSection;
use csg_kernel::sweep::{extrude, solid_from_slices, ExtrudeParams};
use csg_kernel::validate::validate;
use csg_kernel::{KernelError, Vec2, Vec3};
use glam::DMat4;

fn triangle() -> CrossSection {
    CrossSection::from_points(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 10.0),
        Vec2::new(10.0, 10.0),
    ])
    .unwrap()
}

#[test]
fn solid_from_twisted_slices_has_fourteen_polygons() {
    let section = triangle();
    let solid = solid_from_slices(3, |i| {
        let i = i as f64;
        section.to_slice(
            &(DMat4::from_translation(Vec3::new(0.0, 0.0, i))
                * DMat4::from_rotation_z((5.0 * i).to_radians())),
        )
    })
    .unwrap();
    assert_eq!(solid.polygon_count(), 14);
    validate(&solid).unwrap();
    assert!(solid.volume() > 0.0);
}

#[test]
fn twisting_slices_in_place_is_rejected() {
    let section = triangle();
    let result = solid_from_slices(3, |i| {
        section.to_slice(&DMat4::from_rotation_z((5.0 * i as f64).to_radians()))
    });
    assert!(matches!(result, Err(KernelError::InvalidParameters { .. })));
}

#[test]
fn cross_section_sides_follow_counter_clockwise_order() {
    let observed: Vec<[f64; 2]> = triangle()
        .with_ccw_winding()
        .sides()
        .iter()
        .map(|side| [side.start.x, side.start.y])
        .collect();
    assert_eq!(observed, vec![[10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]);
}

#[test]
fn extruded_triangle_is_closed() {
    let solid = extrude(
        &triangle(),
        &ExtrudeParams {
            offset: Vec3::new(0.0, 0.0, 5.0),
            twist_angle: 30.0,
            twist_steps: 4,
        },
    )
    .unwrap();
    validate(&solid).unwrap();
    assert!(solid.volume() > 0.0);
}

#[test]
fn slices_with_different_side_counts_are_rejected() {
    let result = solid_from_slices(2, |i| {
        if i == 0 {
            triangle().to_slice(&DMat4::IDENTITY)
        } else {
            CrossSection::rectangle(Vec2::ZERO, Vec2::ONE)
                .unwrap()
                .to_slice(&DMat4::from_translation(Vec3::Z))
        }
    });
    assert!(matches!(result, Err(KernelError::SliceMismatch { .. })));
}
