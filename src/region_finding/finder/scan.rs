use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::region_finding::finder::matching::colors_match;
use crate::region_finding::finder::region::Region;
use crate::region_finding::finder::types::{EdgePolicy, FinderConfig};
use crate::region_finding::finder::visited::VisitedGrid;
use crate::region_finding::pixels::{Color, PixelBuffer, Point};

/// 3x3 block around a pixel minus the center, row by row.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

fn neighbors(
    center: Point,
    width: usize,
    height: usize,
    policy: EdgePolicy,
) -> impl Iterator<Item = Point> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = center.x.checked_add_signed(dx)?;
        let y = center.y.checked_add_signed(dy)?;
        policy.accepts(x, y, width, height).then_some(Point::new(x, y))
    })
}

/// Finds every 8-connected region of pixels matching `target` in a single raster pass.
///
/// Regions are returned in the order their seed pixel is met scanning top-to-bottom,
/// left-to-right. Each region is grown breadth-first from its seed; a neighbor is marked
/// visited the first time it is examined, whether or not it matches, so no pixel is ever
/// assigned to two regions. Regions smaller than `config.min_region_size` are dropped
/// and their pixels are not revisited.
pub fn scan_regions(image: &PixelBuffer, target: Color, config: &FinderConfig) -> Vec<Region> {
    let width = image.width();
    let height = image.height();
    let threshold = config.color_threshold;
    let min_size = config.effective_min_region_size();

    debug!(width, height, %target, threshold, min_size, "Scanning for regions");

    let matches = |x: usize, y: usize| {
        image
            .get_pixel(x, y)
            .is_some_and(|color| colors_match(color, target, threshold))
    };

    let mut visited = VisitedGrid::for_image(image);
    let mut queue = VecDeque::new();
    let mut regions = Vec::new();
    let mut discarded = 0usize;

    for y in 0..height {
        for x in 0..width {
            if visited.is_visited(x, y) || !matches(x, y) {
                continue;
            }
            visited.mark(x, y);

            let seed = Point::new(x, y);
            let mut region = Region::from_seed(seed);
            queue.push_back(seed);

            while let Some(current) = queue.pop_front() {
                for neighbor in neighbors(current, width, height, config.edge_policy) {
                    if !visited.mark(neighbor.x, neighbor.y) {
                        continue;
                    }
                    if matches(neighbor.x, neighbor.y) {
                        region.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }

            if region.len() >= min_size {
                trace!(x, y, size = region.len(), "Region accepted");
                regions.push(region);
            } else {
                discarded += 1;
            }
        }
    }

    debug!(
        regions = regions.len(),
        discarded,
        visited = visited.visited_count(),
        "Scan complete"
    );
    regions
}
