//! One generation of Life on a bounded grid.
//!
//! Cells beyond the border are not there at all: they are neither wrapped around nor counted as
//! dead neighbors, so a corner cell only ever has 3 neighbors and an edge cell 5.

use tracing::trace;

use crate::grid::Grid;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// Offsets of the 8 cells around `(0, 0)`
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Advance `grid` by one generation of Conway's Life.
pub fn step(grid: &Grid) -> Grid {
    step_with(grid, &B3S23)
}

/// Advance `grid` by one generation under `rules`.
///
/// Every neighbor count is taken from `grid`, which is left untouched. The result is a new grid of
/// the same dimensions.
pub fn step_with(grid: &Grid, rules: &RuleSet) -> Grid {
    let (width, height) = grid.dimensions();

    let next = Grid::from_fn(width, height, |r, c| {
        let n = count_alive_neighbors(grid, r, c);
        rules.next_state(grid.at(r, c), n)
    });

    trace!(population = next.population(), "stepped");

    next
}

/// Number of live cells among the (up to 8) in-bounds neighbors of `(row, col)`
pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as isize, col as isize);

    NEIGHBORHOOD
        .iter()
        .map(|&(dr, dc)| (row + dr, col + dc))
        .filter(|&(r, c)| grid.is_valid_coordinate(r, c))
        .filter(|&(r, c)| grid.at(r as usize, c as usize))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_pattern;

    const T: bool = true;
    const F: bool = false;

    fn sample() -> Grid {
        Grid::from_rows(vec![vec![F, T, F], vec![T, T, F], vec![F, F, T]]).unwrap()
    }

    #[test]
    fn neighbor_counts() {
        let grid = sample();

        assert_eq!(count_alive_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_alive_neighbors(&grid, 0, 1), 2);
        assert_eq!(count_alive_neighbors(&grid, 1, 1), 3);
        assert_eq!(count_alive_neighbors(&grid, 2, 2), 1);
    }

    #[test]
    fn next_generation() {
        let expected =
            Grid::from_rows(vec![vec![T, T, F], vec![T, T, T], vec![F, T, F]]).unwrap();

        assert_eq!(step(&sample()), expected);
    }

    #[test]
    fn input_is_left_alone() {
        let grid = sample();
        let copy = grid.clone();

        let _ = step(&grid);

        assert_eq!(grid, copy);
    }

    #[test]
    fn edges_are_clipped() {
        let full = Grid::from_fn(5, 4, |_, _| true);

        assert_eq!(count_alive_neighbors(&full, 0, 0), 3);
        assert_eq!(count_alive_neighbors(&full, 3, 4), 3);
        assert_eq!(count_alive_neighbors(&full, 0, 2), 5);
        assert_eq!(count_alive_neighbors(&full, 2, 0), 5);
        assert_eq!(count_alive_neighbors(&full, 1, 1), 8);
    }

    #[test]
    fn no_wrap_around() {
        // A toroidal grid would see the live cells on the opposite edges
        let grid = parse_pattern("*...*\n.....\n*...*\n").unwrap();

        assert_eq!(count_alive_neighbors(&grid, 1, 0), 2);
        assert_eq!(count_alive_neighbors(&grid, 0, 0), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let grid = parse_pattern(".....\n..*..\n..*..\n..*..\n.....\n").unwrap();

        let next = step(&grid);
        insta::assert_snapshot!(next.to_string(), @r"
        .....
        .....
        .***.
        .....
        .....
        ");

        assert_eq!(step(&next), grid);
    }

    #[test]
    fn block_is_still() {
        let grid = parse_pattern("....\n.**.\n.**.\n....\n").unwrap();

        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn glider_moves() {
        let grid = parse_pattern(".*....\n..*...\n***...\n......\n......\n").unwrap();

        let moved = (0..4).fold(grid, |g, _| step(&g));
        insta::assert_snapshot!(moved.to_string(), @r"
        ......
        ..*...
        ...*..
        .***..
        ......
        ");
    }

    #[test]
    fn empty_grid_steps_to_empty() {
        assert_eq!(step(&Grid::empty(0, 0)), Grid::empty(0, 0));
    }

    #[test]
    fn other_rules() {
        // HighLife births on 6 as well as 3
        let highlife: RuleSet = "B36/S23".parse().unwrap();
        let grid = parse_pattern("***\n*.*\n*..\n").unwrap();

        assert_eq!(count_alive_neighbors(&grid, 1, 1), 6);
        assert!(step_with(&grid, &highlife).at(1, 1));
        assert!(!step(&grid).at(1, 1));
    }
}
