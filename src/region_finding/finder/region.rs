use crate::region_finding::pixels::Point;

/// Returned by `RegionFinder::largest_region` when a scan found nothing.
pub(crate) static EMPTY_REGION: Region = Region { points: Vec::new() };

/// A connected set of matching points, in the order they were discovered.
///
/// The first point is the seed the region was grown from. Points are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    points: Vec<Point>,
}

impl Region {
    pub(crate) fn from_seed(seed: Point) -> Self {
        Self { points: vec![seed] }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn seed(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Inclusive `(min, max)` corners, or `None` for an empty region.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        let (min, max) = self.points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
