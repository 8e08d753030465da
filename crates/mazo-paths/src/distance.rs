use mazo_core::Point;

/// Manhattan (L1) distance between two points.
///
/// On a 4-connected uniform-cost grid this never overestimates the true
/// path cost, which makes it an admissible (and consistent) A* heuristic.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_basics() {
        assert_eq!(manhattan(Point::ZERO, Point::ZERO), 0);
        assert_eq!(manhattan(Point::new(1, 2), Point::new(4, 6)), 7);
        // Symmetric.
        assert_eq!(
            manhattan(Point::new(-3, 5), Point::new(2, -1)),
            manhattan(Point::new(2, -1), Point::new(-3, 5))
        );
    }
}
