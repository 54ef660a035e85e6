//! Grid collision detection and movement resolution
//!
//! The tricky part of the engine: the man's 1x2-cell bounding box is sampled
//! at six probe points, and horizontal and vertical motion are resolved
//! independently against the solid cell set, snapping to the blocking
//! surface on impact. There is no diagonal sliding past a corner in one
//! combined step.

use std::collections::BTreeSet;

use glam::IVec2;

use super::grid::{self, Cell};
use crate::consts::PROBE_INSET;
use crate::tuning::Tuning;

/// Probe points around the bounding box anchored at `pos`
///
/// `pos` is the top-left of the lower body cell; the box spans one cell
/// across and from one cell above `pos` down to the foot line. Probes sit
/// `PROBE_INSET` pixels inside each edge: both vertical extremes at both
/// horizontal edges, plus the vertical midline at both edges.
pub fn probe_points(pos: IVec2, tuning: &Tuning) -> [IVec2; 6] {
    let left = pos.x + PROBE_INSET;
    let right = pos.x + tuning.cell_width - PROBE_INSET;
    let top = pos.y - tuning.cell_height + PROBE_INSET;
    let mid = pos.y;
    let bottom = pos.y + tuning.cell_height - PROBE_INSET;
    [
        IVec2::new(left, top),
        IVec2::new(right, top),
        IVec2::new(left, mid),
        IVec2::new(right, mid),
        IVec2::new(left, bottom),
        IVec2::new(right, bottom),
    ]
}

/// Whether the footprint at `pos` overlaps any solid cell
pub fn collides(pos: IVec2, solids: &BTreeSet<Cell>, tuning: &Tuning) -> bool {
    probe_points(pos, tuning)
        .iter()
        .any(|&p| solids.contains(&grid::point_to_cell(p, tuning)))
}

/// First solid cell overlapped by the footprint at `pos`, in probe order
fn first_hit(pos: IVec2, solids: &BTreeSet<Cell>, tuning: &Tuning) -> Option<Cell> {
    probe_points(pos, tuning)
        .iter()
        .map(|&p| grid::point_to_cell(p, tuning))
        .find(|cell| solids.contains(cell))
}

/// Resolve one tick of motion against the solid cell set
///
/// Horizontal motion is all-or-nothing: a colliding step keeps the prior x.
/// Vertical motion snaps to the blocking surface instead: falling puts the
/// feet exactly on the cell's top, rising puts the head just under the
/// cell's underside. The combined result is clamped to the playable area.
/// Total pure function; always yields a position, possibly unchanged.
pub fn resolve_movement(
    pos: IVec2,
    vel: IVec2,
    solids: &BTreeSet<Cell>,
    tuning: &Tuning,
) -> IVec2 {
    let mut next = pos;

    let stepped = IVec2::new(next.x + vel.x, next.y);
    if !collides(stepped, solids, tuning) {
        next.x = stepped.x;
    }

    let stepped = IVec2::new(next.x, next.y + vel.y);
    if !collides(stepped, solids, tuning) {
        next.y = stepped.y;
    } else if let Some(hit) = first_hit(stepped, solids, tuning) {
        let surface = hit.row * tuning.cell_height;
        if vel.y > 0 {
            next.y = surface - tuning.cell_height;
        } else if vel.y < 0 {
            next.y = surface + 2 * tuning.cell_height;
        }
        // vel.y == 0 means the start position already overlapped; keep y
    }

    grid::clamp_to_area(next, tuning)
}

/// Whether the footprint at `pos` rests on a supporting cell
///
/// Samples the foot line one pixel row below the lower body cell at both
/// inset edges. Callers pass the effective floor, which includes staircase
/// junction cells, so the man can stand at the top or bottom of a stairway.
pub fn on_ground(pos: IVec2, solids: &BTreeSet<Cell>, tuning: &Tuning) -> bool {
    let feet = pos.y + tuning.cell_height;
    [pos.x + PROBE_INSET, pos.x + tuning.cell_width - PROBE_INSET]
        .iter()
        .any(|&x| solids.contains(&grid::point_to_cell(IVec2::new(x, feet), tuning)))
}
