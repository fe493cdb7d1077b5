use crate::region_finding::pixels::Color;

/// Whether every RGB channel of `a` is within `threshold` of `b`. Alpha is ignored.
pub fn colors_match(a: Color, b: Color, threshold: u8) -> bool {
    a.r.abs_diff(b.r) <= threshold
        && a.g.abs_diff(b.g) <= threshold
        && a.b.abs_diff(b.b) <= threshold
}
