//! Rounded box tessellation.
//!
//! The surface is a sphere of radius `round_radius` split into octants and
//! pushed out to the eight inner corners `center +- (radius - round_radius)`.
//! Columns walk around Z one quadrant at a time and rows run from the south
//! pole to the north pole. Where neighbouring columns or rows belong to
//! different octants the cell between them is a flat strip, so the eight
//! octants, twelve quarter-cylinder edges and six flat faces all come out of
//! one grid.

use config::constants::KernelConfig;

use crate::core::vec3::Vec3;
use crate::error::{KernelError, KernelResult};
use crate::polygon::{push_face, Polygon, SharedTag};
use crate::primitives::{quarter_segments, quarter_turn};
use crate::solid::Solid;

const TAG: &str = "rounded_cube";

/// Quadrant `k` maps a quarter-turn direction `(c, s)` to a direction in
/// the XY plane and an octant sign.
fn quadrant(k: usize, (c, s): (f64, f64)) -> ((f64, f64), (f64, f64)) {
    match k {
        0 => ((c, s), (1.0, 1.0)),
        1 => ((-s, c), (-1.0, 1.0)),
        2 => ((-c, -s), (-1.0, -1.0)),
        _ => ((s, -c), (1.0, -1.0)),
    }
}

pub(super) fn build(
    center: Vec3,
    radius: Vec3,
    round_radius: f64,
    resolution: u32,
    config: &KernelConfig,
) -> KernelResult<Solid> {
    let limit = radius.min_element();
    if !(round_radius > 0.0 && round_radius < limit) {
        return Err(KernelError::invalid_parameters(format!(
            "round radius must be in (0, {limit}), got {round_radius}"
        )));
    }

    let steps = quarter_segments(resolution);
    let inner = radius - Vec3::splat(round_radius);

    // (direction, sign) per column.
    let columns: Vec<_> = (0..4)
        .flat_map(|k| (0..=steps).map(move |m| quadrant(k, quarter_turn(m, steps))))
        .collect();
    // (cos, sin, z sign) of the elevation per row.
    let rows: Vec<(f64, f64, f64)> = (0..=steps)
        .map(|n| {
            let (c, s) = quarter_turn(n, steps);
            (s, -c, -1.0)
        })
        .chain((0..=steps).map(|n| {
            let (c, s) = quarter_turn(n, steps);
            (c, s, 1.0)
        }))
        .collect();

    let grid: Vec<Vec<Vec3>> = rows
        .iter()
        .map(|&(cos_phi, sin_phi, sz)| {
            columns
                .iter()
                .map(|&((ux, uy), (sx, sy))| {
                    let corner = center + inner * Vec3::new(sx, sy, sz);
                    corner + round_radius * Vec3::new(cos_phi * ux, cos_phi * uy, sin_phi)
                })
                .collect()
        })
        .collect();

    let shared = Some(SharedTag::new(TAG));
    let width = columns.len();
    let mut polygons: Vec<Polygon> = Vec::with_capacity((rows.len() - 1) * width + 2);
    for band in grid.windows(2) {
        let (lower, upper) = (&band[0], &band[1]);
        for c in 0..width {
            let next = (c + 1) % width;
            push_face(
                &[lower[c], lower[next], upper[next], upper[c]],
                config.tolerance,
                &shared,
                &mut polygons,
            )?;
        }
    }

    // First column of each quadrant touches the flat faces.
    let pole = |row: &[Vec3]| -> Vec<Vec3> {
        (0..4)
            .map(|k| row[k * (steps as usize + 1)])
            .collect()
    };
    if let (Some(south), Some(north)) = (grid.first(), grid.last()) {
        let mut bottom = pole(south);
        bottom.reverse();
        push_face(&bottom, config.tolerance, &shared, &mut polygons)?;
        push_face(&pole(north), config.tolerance, &shared, &mut polygons)?;
    }

    let solid = Solid::from_polygons(polygons).validated()?;
    tracing::debug!(
        center = ?center,
        radius = ?radius,
        round_radius,
        resolution,
        polygons = solid.polygon_count(),
        "generated rounded cube"
    );
    Ok(solid)
}
