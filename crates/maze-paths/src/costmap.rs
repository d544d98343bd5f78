use maze_core::{MazeGrid, Point};

use crate::engine::{PathNode, SearchEngine, UNREACHABLE};

impl SearchEngine {
    /// Compute the cheapest cost from the nearest of `sources` to every
    /// reachable cell of `grid`, in the grid's own step-cost units.
    ///
    /// Costs follow the same moves as [`find_path`](Self::find_path), so on
    /// an 8-connected maze a diagonal counts 14 and an orthogonal step 10.
    /// Sources outside the grid or on a wall are ignored. Cells whose cost
    /// would exceed `max_cost` are left unreached; a negative `max_cost`
    /// reaches nothing. Returns the reached cells in order of increasing
    /// cost.
    ///
    /// Step costs are small positive integers, so the frontier is kept in a
    /// ring of per-cost buckets instead of a heap.
    pub fn cost_map(&mut self, grid: &MazeGrid, sources: &[Point], max_cost: i32) -> &[PathNode] {
        if self.rng != grid.range() {
            self.set_range(grid.range());
        }
        self.costs.fill(UNREACHABLE);
        self.cost_results.clear();
        if max_cost < 0 {
            return &self.cost_results;
        }

        let conn = grid.connectivity();
        let ring = conn.diagonal_cost().unwrap_or(conn.orthogonal_cost()) as usize + 1;
        let mut buckets = std::mem::take(&mut self.cost_buckets);
        buckets.iter_mut().for_each(Vec::clear);
        buckets.resize_with(ring, Vec::new);

        let mut pending = 0usize;
        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if !grid.is_passable(src) || self.costs[si] == 0 {
                continue;
            }
            self.costs[si] = 0;
            buckets[0].push(si);
            pending += 1;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut cost = 0i32;
        while pending > 0 {
            let slot = cost as usize % ring;
            let mut bucket = std::mem::take(&mut buckets[slot]);
            pending -= bucket.len();
            for &ci in &bucket {
                // Lowered into an earlier bucket after this entry was made.
                if self.costs[ci] != cost {
                    continue;
                }
                let cp = self.point(ci);
                self.cost_results.push(PathNode { pos: cp, cost });

                nbuf.clear();
                grid.neighbors_into(cp, &mut nbuf);
                for &(np, step) in &nbuf {
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    let nc = cost.saturating_add(step);
                    if nc > max_cost || nc >= self.costs[ni] {
                        continue;
                    }
                    self.costs[ni] = nc;
                    buckets[nc as usize % ring].push(ni);
                    pending += 1;
                }
            }
            bucket.clear();
            buckets[slot] = bucket;
            cost += 1;
        }

        self.nbuf = nbuf;
        self.cost_buckets = buckets;
        &self.cost_results
    }

    /// Cost recorded for `p` by the last [`cost_map`](Self::cost_map) call,
    /// or [`UNREACHABLE`] if `p` is outside the range or was not reached.
    pub fn cost_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.costs[i],
            None => UNREACHABLE,
        }
    }
}
