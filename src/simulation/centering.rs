//! Recentering grid content on the live region

use crate::game_of_life::Grid;

/// Shift the grid so the live cells sit in the middle.
///
/// Each axis is balanced one step at a time until the free space on either
/// side of the live region differs by at most one. The horizontal axis is
/// handled first. Returns the total `(dx, dy)` applied; an empty grid is
/// left alone.
pub fn center_on_live_cells(grid: &mut Grid) -> (isize, isize) {
    let bounds = grid.bounding_box_of_live_cells();
    if bounds.is_empty() {
        return (0, 0);
    }

    let dx = balance_axis(bounds.x_min, grid.width() - 1 - bounds.x_max);
    grid.shift(dx, 0);

    let dy = balance_axis(bounds.y_min, grid.height() - 1 - bounds.y_max);
    grid.shift(0, dy);

    (dx, dy)
}

/// Offset along one axis that balances the margin `before` the live region
/// against the margin `after` it. Only one direction is ever taken.
fn balance_axis(mut before: usize, mut after: usize) -> isize {
    let mut offset = 0;

    if after > before + 1 {
        while after > before + 1 {
            before += 1;
            after -= 1;
            offset += 1;
        }
    } else {
        while before > after + 1 {
            before -= 1;
            after += 1;
            offset -= 1;
        }
    }

    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative(cells: &[(usize, usize)]) -> Vec<(usize, usize)> {
        let x0 = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let y0 = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        cells.iter().map(|&(x, y)| (x - x0, y - y0)).collect()
    }

    fn margins(grid: &Grid) -> (usize, usize, usize, usize) {
        let b = grid.bounding_box_of_live_cells();
        (b.x_min, grid.width() - 1 - b.x_max, b.y_min, grid.height() - 1 - b.y_max)
    }

    #[test]
    fn test_balance_axis() {
        assert_eq!(balance_axis(0, 10), 5);
        assert_eq!(balance_axis(0, 9), 4);
        assert_eq!(balance_axis(10, 0), -5);
        assert_eq!(balance_axis(4, 5), 0);
        assert_eq!(balance_axis(5, 4), 0);
        assert_eq!(balance_axis(0, 0), 0);
    }

    #[test]
    fn test_left_half_region_is_centred() {
        let mut grid = Grid::new(40, 20).unwrap();
        for (x, y) in [(1, 3), (2, 3), (3, 4), (2, 5), (5, 5)] {
            grid.seed_cell(x, y).unwrap();
        }
        let before = relative(&grid.living_cells());

        center_on_live_cells(&mut grid);

        let (left, right, top, bottom) = margins(&grid);
        assert!(left.abs_diff(right) <= 1, "left {} right {}", left, right);
        assert!(top.abs_diff(bottom) <= 1, "top {} bottom {}", top, bottom);
        assert_eq!(relative(&grid.living_cells()), before);
    }

    #[test]
    fn test_right_bottom_region_shifts_back() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.seed_cell(19, 19).unwrap();
        grid.seed_cell(18, 19).unwrap();

        let (dx, dy) = center_on_live_cells(&mut grid);
        assert!(dx < 0 && dy < 0);
        let (left, right, top, bottom) = margins(&grid);
        assert!(left.abs_diff(right) <= 1);
        assert!(top.abs_diff(bottom) <= 1);
    }

    #[test]
    fn test_centering_is_idempotent() {
        let mut grid = Grid::new(30, 30).unwrap();
        for x in 0..20 {
            grid.seed_cell(x, 25).unwrap();
        }
        center_on_live_cells(&mut grid);
        let centred = grid.clone();

        assert_eq!(center_on_live_cells(&mut grid), (0, 0));
        assert_eq!(grid, centred);
    }

    #[test]
    fn test_full_span_axis_is_untouched() {
        let mut grid = Grid::new(5, 9).unwrap();
        for x in 0..5 {
            grid.seed_cell(x, 0).unwrap();
        }
        assert_eq!(center_on_live_cells(&mut grid), (0, 4));
        assert_eq!(grid.living_cells(), (0..5).map(|x| (x, 4)).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_grid_is_noop() {
        let mut grid = Grid::new(6, 6).unwrap();
        assert_eq!(center_on_live_cells(&mut grid), (0, 0));
        assert!(grid.is_empty());
    }
}
