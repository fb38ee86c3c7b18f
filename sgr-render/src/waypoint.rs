//! The submarine's path: a random handful of days, visited in calendar order.

use log::debug;
use rand::{seq::index, Rng};
use std::fmt;

use crate::{config::GridConfig, grid::Cell};

/// Pick up to `max` distinct day indices out of `len`, sorted ascending.
pub fn sample_waypoints<R: Rng + ?Sized>(len: usize, max: usize, rng: &mut R) -> Vec<usize> {
    let amount = max.min(len);
    let mut waypoints = index::sample(rng, len, amount).into_vec();
    waypoints.sort_unstable();
    debug!("Submarine waypoints: {:?}", waypoints);
    waypoints
}

/// One stop of the `moveSub` animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframe {
    pub percent: u32,
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% {{ transform: translate({}px, {}px); }}",
            self.percent, self.x, self.y
        )
    }
}

/// Keyframes translating the submarine through each waypoint's cell.
///
/// Fewer than two waypoints collapse to a single stationary `0%` frame,
/// at the origin when there are none.
pub fn keyframes(waypoints: &[usize], config: &GridConfig) -> Vec<Keyframe> {
    let frame = |percent: u32, point: usize| {
        let (x, y) = Cell::for_index(point, config).origin(config);
        Keyframe { percent, x, y }
    };
    match waypoints {
        [] => vec![Keyframe {
            percent: 0,
            x: 0,
            y: 0,
        }],
        [only] => vec![frame(0, *only)],
        _ => {
            let last = waypoints.len() - 1;
            waypoints
                .iter()
                .enumerate()
                .map(|(idx, point)| frame((idx * 100 / last) as u32, *point))
                .collect()
        }
    }
}
