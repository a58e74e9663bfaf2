//! Plain-text debug view of a grid and a path.

use tilepath_core::{BLOCKED, CostGrid, GridCell};

/// Glyphs used by [`render_ascii`].
pub const START: char = 'S';
pub const END: char = 'E';
pub const STEP: char = '*';
pub const WALL: char = '#';
pub const VOID: char = ' ';

/// Draw the grid one row per line.
///
/// Passable cells show their cost (`0`-`9`, `+` above nine), blocked cells
/// show `#` and cells no terrain row defined are blank. Path cells are
/// overlaid with `*`, and the endpoints with `S` and `E`.
pub fn render_ascii(grid: &CostGrid, path: &[GridCell], start: GridCell, end: GridCell) -> String {
    let dims = grid.dimensions();
    let mut out = String::with_capacity(dims.len() + dims.rows.max(0) as usize);
    for y in 0..dims.rows {
        for x in 0..dims.cols {
            let cell = GridCell::new(x, y);
            let ch = if cell == start {
                START
            } else if cell == end {
                END
            } else if path.contains(&cell) {
                STEP
            } else {
                terrain_glyph(grid.raw_cost(cell))
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn terrain_glyph(cost: Option<i32>) -> char {
    match cost {
        None => VOID,
        Some(BLOCKED) => WALL,
        Some(v) if v < 0 => WALL,
        Some(v) => char::from_digit(v as u32, 10).unwrap_or('+'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_search::find_path;

    #[test]
    fn overlays_path() {
        let g = CostGrid::load("...\n~#.\n...\n", ".=1\n~=9").unwrap();
        let (s, e) = (GridCell::new(0, 0), GridCell::new(0, 2));
        let path = find_path(&g, s, e);
        let text = render_ascii(&g, &path, s, e);
        assert_eq!(text, "S**\n9#*\nE**\n");
    }

    #[test]
    fn glyphs() {
        assert_eq!(terrain_glyph(None), ' ');
        assert_eq!(terrain_glyph(Some(-1)), '#');
        assert_eq!(terrain_glyph(Some(0)), '0');
        assert_eq!(terrain_glyph(Some(12)), '+');
    }
}
