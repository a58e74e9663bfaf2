use tilepath_core::GridCell;

/// Euclidean distance between two cells, truncated toward zero.
///
/// Not admissible on its own when step costs exceed 1; [`PathSearch`]
/// compensates by reopening closed cells.
///
/// [`PathSearch`]: crate::PathSearch
#[inline]
pub fn euclidean(a: GridCell, b: GridCell) -> i32 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    (dx * dx + dy * dy).sqrt() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_truncates() {
        let o = GridCell::ZERO;
        assert_eq!(euclidean(o, o), 0);
        assert_eq!(euclidean(o, GridCell::new(3, 4)), 5);
        assert_eq!(euclidean(o, GridCell::new(1, 1)), 1); // 1.414
        assert_eq!(euclidean(o, GridCell::new(2, 2)), 2); // 2.828
        assert_eq!(euclidean(GridCell::new(2, 2), o), 2);
    }
}
