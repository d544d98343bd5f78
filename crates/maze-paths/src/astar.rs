use maze_core::{MazeGrid, Point};

use crate::engine::{NodeRef, SearchEngine, SearchStats, UNREACHABLE};
use crate::error::{Endpoint, SearchError};
use crate::path::Path;
use crate::traits::AstarPather;

/// Find a shortest path from `start` to `goal` on `grid`.
///
/// Convenience wrapper that runs [`SearchEngine::find_path`] on a fresh
/// engine. Callers issuing many queries should keep an engine around
/// instead.
pub fn find_path(grid: &MazeGrid, start: Point, goal: Point) -> Result<Option<Path>, SearchError> {
    SearchEngine::new(grid.range()).find_path(grid, start, goal)
}

fn check_in_bounds(grid: &MazeGrid, endpoint: Endpoint, point: Point) -> Result<(), SearchError> {
    if grid.is_in_bounds(point) {
        Ok(())
    } else {
        Err(SearchError::OutOfBounds { endpoint, point })
    }
}

fn check_open(grid: &MazeGrid, endpoint: Endpoint, point: Point) -> Result<(), SearchError> {
    if grid.is_passable(point) {
        Ok(())
    } else {
        Err(SearchError::InvalidEndpoint { endpoint, point })
    }
}

impl SearchEngine {
    /// Find a shortest path from `start` to `goal` on `grid`.
    ///
    /// Returns `Ok(Some(path))` with both endpoints included, or `Ok(None)`
    /// when the goal cannot be reached. Endpoints outside the grid or on a
    /// blocked cell are rejected before any search work is done.
    ///
    /// Among equally short paths the result is fixed: the open set is
    /// ordered by lowest `f = g + h`, then highest `g`, then earliest
    /// insertion, and neighbours are visited in the grid's documented order.
    pub fn find_path(
        &mut self,
        grid: &MazeGrid,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, SearchError> {
        self.stats = SearchStats::default();
        let checked = check_in_bounds(grid, Endpoint::Start, start)
            .and_then(|()| check_in_bounds(grid, Endpoint::Goal, goal))
            .and_then(|()| check_open(grid, Endpoint::Start, start))
            .and_then(|()| check_open(grid, Endpoint::Goal, goal));
        if let Err(e) = checked {
            log::debug!("astar: rejected query {start} -> {goal}: {e}");
            return Err(e);
        }

        if start == goal {
            log::trace!("astar: {start} is its own goal");
            return Ok(Some(Path::single(start)));
        }

        if self.rng != grid.range() {
            self.set_range(grid.range());
        }

        let found = self.search(grid, start, goal);
        match &found {
            Some((_, cost)) => log::debug!(
                "astar: {start} -> {goal}: cost {cost}, {} expanded, {} pushed",
                self.stats.expanded,
                self.stats.pushed
            ),
            None => log::debug!(
                "astar: {start} -> {goal}: no path, {} expanded",
                self.stats.expanded
            ),
        }
        Ok(found.map(|(points, cost)| Path::new(points, cost)))
    }

    /// Compute the shortest path from `from` to `to` using A* over any
    /// pather, without endpoint validation.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.search(pather, from, to).map(|(points, _)| points)
    }

    fn search<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<(Vec<Point>, i32)> {
        self.stats = SearchStats::default();
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some((vec![from], 0));
        }

        let cur_gen = self.next_generation();
        let mut seq: u64 = 0;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open = std::mem::take(&mut self.open);
        open.clear();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            g: 0,
            seq,
        });
        self.stats.pushed = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;
            let cn = &self.nodes[ci];

            // Closed already, or superseded by a cheaper re-insertion.
            if !cn.open || cn.g != current.g {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            self.stats.expanded += 1;
            let current_g = current.g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &(np, step) in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + step;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if !n.open || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    g: tentative_g,
                    seq,
                });
                self.stats.pushed += 1;
            }
        };

        self.nbuf = nbuf;
        self.open = open;

        if !found {
            return None;
        }

        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some((path, self.nodes[goal_idx].g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Connectivity, Range};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Build a grid from a picture: `#` is a wall, anything else is open.
    fn maze(picture: &str) -> MazeGrid {
        let rows: Vec<Vec<u8>> = picture
            .lines()
            .map(|l| l.bytes().map(|b| u8::from(b == b'#')).collect())
            .collect();
        MazeGrid::from_rows(&rows).unwrap()
    }

    fn tuples(path: &Path) -> Vec<(i32, i32)> {
        path.to_tuples()
    }

    #[test]
    fn straight_corridor() {
        let grid = MazeGrid::new(3, 1);
        let path = find_path(&grid, p(0, 0), p(2, 0)).unwrap().unwrap();
        assert_eq!(tuples(&path), vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(path.cost(), 2);
    }

    #[test]
    fn around_the_centre_pillar() {
        let grid = maze("...\n.#.\n...");
        let path = find_path(&grid, p(0, 0), p(2, 2)).unwrap().unwrap();
        assert_eq!(path.cost(), 4);
        assert!(path.is_valid_on(&grid));
        // Down first (neighbour order), then the deeper entry wins ties.
        assert_eq!(tuples(&path), vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn blocked_middle_row_has_no_path() {
        let grid = maze("...\n###\n...");
        assert_eq!(find_path(&grid, p(0, 0), p(0, 2)), Ok(None));
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let grid = maze(
            ".....\n\
             .###.\n\
             .#.#.\n\
             .###.\n\
             .....",
        );
        assert_eq!(find_path(&grid, p(0, 0), p(2, 2)), Ok(None));
        assert_eq!(find_path(&grid, p(2, 2), p(4, 4)), Ok(None));
    }

    #[test]
    fn start_equals_goal() {
        let grid = MazeGrid::new(4, 4);
        let path = find_path(&grid, p(2, 3), p(2, 3)).unwrap().unwrap();
        assert_eq!(path.points(), &[p(2, 3)]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let grid = MazeGrid::new(3, 3);
        assert_eq!(
            find_path(&grid, p(-1, 0), p(2, 2)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Start,
                point: p(-1, 0)
            })
        );
        assert_eq!(
            find_path(&grid, p(0, 0), p(3, 0)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                point: p(3, 0)
            })
        );
        // Even when start == goal.
        assert!(matches!(
            find_path(&grid, p(0, 5), p(0, 5)),
            Err(SearchError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn bounds_checked_before_walls() {
        let grid = maze("#..\n...\n...");
        assert_eq!(
            find_path(&grid, p(0, 0), p(9, 9)),
            Err(SearchError::OutOfBounds {
                endpoint: Endpoint::Goal,
                point: p(9, 9)
            })
        );
    }

    #[test]
    fn blocked_endpoints() {
        let grid = maze("#..\n...\n..#");
        assert_eq!(
            find_path(&grid, p(0, 0), p(1, 1)),
            Err(SearchError::InvalidEndpoint {
                endpoint: Endpoint::Start,
                point: p(0, 0)
            })
        );
        assert_eq!(
            find_path(&grid, p(1, 1), p(2, 2)),
            Err(SearchError::InvalidEndpoint {
                endpoint: Endpoint::Goal,
                point: p(2, 2)
            })
        );
        assert!(matches!(
            find_path(&grid, p(0, 0), p(0, 0)),
            Err(SearchError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn winding_maze() {
        let grid = maze(
            ".#...\n\
             .#.#.\n\
             .#.#.\n\
             ...#.",
        );
        let path = find_path(&grid, p(0, 0), p(4, 0)).unwrap().unwrap();
        assert!(path.is_valid_on(&grid));
        assert_eq!(path.cost(), 10);
        assert_eq!(path.start(), p(0, 0));
        assert_eq!(path.goal(), p(4, 0));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let grid = maze(
            "......\n\
             .##.#.\n\
             ......\n\
             .#.##.\n\
             ......",
        );
        let first = find_path(&grid, p(0, 0), p(5, 4)).unwrap();
        let mut eng = SearchEngine::new(Range::sized(1, 1));
        for _ in 0..5 {
            assert_eq!(eng.find_path(&grid, p(0, 0), p(5, 4)).unwrap(), first);
            // Interleave an unrelated query to dirty the arena.
            let _ = eng.find_path(&grid, p(5, 0), p(0, 4));
        }
    }

    #[test]
    fn engine_adapts_to_grid_size() {
        let mut eng = SearchEngine::new(Range::sized(2, 2));
        let big = MazeGrid::new(10, 3);
        let path = eng.find_path(&big, p(0, 0), p(9, 2)).unwrap().unwrap();
        assert_eq!(path.cost(), 11);
        assert_eq!(eng.range(), big.range());

        let small = MazeGrid::new(3, 1);
        let path = eng.find_path(&small, p(2, 0), p(0, 0)).unwrap().unwrap();
        assert_eq!(tuples(&path), vec![(2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn stats_are_reported() {
        let grid = MazeGrid::new(5, 1);
        let mut eng = SearchEngine::new(grid.range());
        eng.find_path(&grid, p(0, 0), p(4, 0)).unwrap();
        // The goal is popped, not expanded.
        assert_eq!(eng.stats().expanded, 4);
        assert_eq!(eng.stats().pushed, 5);
        eng.find_path(&grid, p(1, 0), p(1, 0)).unwrap();
        assert_eq!(eng.stats(), SearchStats::default());
    }

    #[test]
    fn rejected_query_clears_stats() {
        let grid = maze(".....
.....
....#");
        let mut eng = SearchEngine::new(grid.range());
        eng.find_path(&grid, p(0, 0), p(3, 2)).unwrap();
        assert_ne!(eng.stats(), SearchStats::default());

        assert!(eng.find_path(&grid, p(0, 0), p(4, 2)).is_err());
        assert_eq!(eng.stats(), SearchStats::default());

        eng.find_path(&grid, p(0, 0), p(3, 2)).unwrap();
        assert!(eng.find_path(&grid, p(-1, 0), p(3, 2)).is_err());
        assert_eq!(eng.stats(), SearchStats::default());
    }

    #[test]
    fn diagonal_moves_on_open_grid() {
        let grid = MazeGrid::new(3, 3).with_connectivity(Connectivity::Eight);
        let path = find_path(&grid, p(0, 0), p(2, 2)).unwrap().unwrap();
        assert_eq!(tuples(&path), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(path.cost(), 28);
    }

    #[test]
    fn diagonal_moves_do_not_cut_corners() {
        // The only diagonal out of (0, 0) squeezes past the wall at (1, 0).
        let grid = maze(".#\n..").with_connectivity(Connectivity::Eight);
        let path = find_path(&grid, p(0, 0), p(1, 1)).unwrap().unwrap();
        assert_eq!(tuples(&path), vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(path.cost(), 20);

        let sealed = maze(".#\n#.").with_connectivity(Connectivity::Eight);
        assert_eq!(find_path(&sealed, p(0, 0), p(1, 1)), Ok(None));
    }

    #[test]
    fn generic_pather_search() {
        // A pather over an unbounded plane with a wall at x == 2 except y == 4.
        struct Wall;
        impl crate::traits::Pather for Wall {
            fn neighbors(&self, p: Point, buf: &mut Vec<(Point, i32)>) {
                for d in maze_core::connectivity::ORTHOGONAL_DIRS {
                    let n = p + d;
                    if n.x != 2 || n.y == 4 {
                        buf.push((n, 1));
                    }
                }
            }
        }
        impl AstarPather for Wall {
            fn estimate(&self, from: Point, to: Point) -> i32 {
                crate::distance::manhattan(from, to)
            }
        }

        let mut eng = SearchEngine::new(Range::sized(5, 5));
        let path = eng.astar_path(&Wall, p(0, 0), p(4, 0)).unwrap();
        assert_eq!(path.len(), 13);
        assert_eq!(path[0], p(0, 0));
        assert_eq!(path[12], p(4, 0));
        assert!(path.contains(&p(2, 4)));
        // Outside the engine's range there is nothing to search.
        assert_eq!(eng.astar_path(&Wall, p(0, 0), p(9, 0)), None);
    }

    fn random_grid(rng: &mut StdRng, w: i32, h: i32, wall_pct: f64) -> MazeGrid {
        let rows: Vec<Vec<u8>> = (0..h)
            .map(|_| (0..w).map(|_| u8::from(rng.random_bool(wall_pct))).collect())
            .collect();
        MazeGrid::from_rows(&rows).unwrap()
    }

    #[test]
    fn matches_cost_map_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut eng = SearchEngine::new(Range::sized(1, 1));
        let mut oracle = SearchEngine::new(Range::sized(1, 1));
        let mut found = 0;
        for _ in 0..200 {
            let w = rng.random_range(1..16);
            let h = rng.random_range(1..16);
            let grid = random_grid(&mut rng, w, h, 0.3);
            let start = p(rng.random_range(0..w), rng.random_range(0..h));
            let goal = p(rng.random_range(0..w), rng.random_range(0..h));

            let result = eng.find_path(&grid, start, goal);
            if !grid.is_passable(start) || !grid.is_passable(goal) {
                assert!(matches!(result, Err(SearchError::InvalidEndpoint { .. })));
                continue;
            }

            oracle.cost_map(&grid, &[start], UNREACHABLE);
            let expected = oracle.cost_at(goal);

            match result.unwrap() {
                Some(path) => {
                    found += 1;
                    assert!(path.is_valid_on(&grid));
                    assert_eq!(path.cost(), expected);
                    assert_eq!(path.start(), start);
                    assert_eq!(path.goal(), goal);
                    // Determinism across engines.
                    assert_eq!(find_path(&grid, start, goal).unwrap(), Some(path));
                }
                None => assert_eq!(expected, UNREACHABLE),
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn eight_connected_paths_are_optimal_and_no_longer_than_four() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut oracle = SearchEngine::new(Range::sized(12, 12));
        for _ in 0..100 {
            let four = random_grid(&mut rng, 12, 12, 0.25);
            let eight = four.clone().with_connectivity(Connectivity::Eight);
            let start = p(0, 0);
            let goal = p(11, 11);
            if !four.is_passable(start) || !four.is_passable(goal) {
                continue;
            }
            let straight = find_path(&four, start, goal).unwrap();
            let diag = find_path(&eight, start, goal).unwrap();
            oracle.cost_map(&eight, &[start], UNREACHABLE);
            match &diag {
                Some(path) => {
                    assert!(path.is_valid_on(&eight));
                    assert_eq!(path.cost(), oracle.cost_at(goal));
                }
                None => assert_eq!(oracle.cost_at(goal), UNREACHABLE),
            }
            if let Some(path) = straight {
                // Every 4-connected walk is also an 8-connected one.
                let diag = diag.unwrap();
                assert!(diag.cost() <= path.cost() * 10);
            }
        }
    }

    #[test]
    fn shared_grid_across_threads() {
        let grid = maze(
            "........\n\
             .######.\n\
             ......#.\n\
             .####.#.\n\
             ........",
        );
        let expected = find_path(&grid, p(0, 0), p(7, 4)).unwrap();
        assert!(expected.is_some());
        let grid = &grid;
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || find_path(grid, p(0, 0), p(7, 4)).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
    }
}
