//! Nested adaptive grid: round-based median splits to a fixed point.

use std::cmp::Ordering;

use crate::geom2::{median_along, split_indices, weight_sum, Axis, Rect, WeightedPoint};
use crate::maybe_rayon::*;

use super::types::{Cell, Locator, Partition, PartitionCfg, PartitionError, SplitNode};

/// Partition `points` into axis-aligned cells holding at least `cfg.min_count` points each.
///
/// Starting from the bounding box, every cell with `>= 2 * min_count` points is split
/// at the median coordinate of its points along the longer side of its rectangle
/// (`cfg.tie_axis` on exact ties). Points with `coord <= median` go to the low child.
/// A split is kept only if both children hold `>= min_count` points; a cell whose split
/// is rejected is final. Rounds repeat until no cell changes.
///
/// If the whole input has fewer than `2 * min_count` points, the root cell is returned.
///
/// Errors: empty input, `min_count == 0`, or non-finite coordinates/weights.
pub fn partition(
    points: &[WeightedPoint],
    cfg: PartitionCfg,
) -> Result<Partition, PartitionError> {
    if cfg.min_count == 0 {
        return Err(PartitionError::invalid("min_count must be > 0"));
    }
    let bounds = validated_bounds(points)?;
    PartitionRunner::new(points, cfg).run(bounds)
}

/// Convenience: default tie-break, given `min_count`.
pub fn partition_with_min_count(
    points: &[WeightedPoint],
    min_count: usize,
) -> Result<Partition, PartitionError> {
    partition(points, PartitionCfg::with_min_count(min_count))
}

/// Bounding box of a non-empty set of finite points.
pub(crate) fn validated_bounds(points: &[WeightedPoint]) -> Result<Rect, PartitionError> {
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(PartitionError::invalid(format!(
            "point {i} has a non-finite coordinate or weight"
        )));
    }
    Rect::bounding(points).ok_or_else(|| PartitionError::invalid("point set is empty"))
}

/// A cell still on the frontier.
struct Pending {
    rect: Rect,
    idx: Vec<usize>,
    depth: u32,
    /// Reserved slot in the split tree.
    node: usize,
}

enum Step {
    Final(Pending),
    Split {
        node: usize,
        depth: u32,
        axis: Axis,
        at: f64,
        low: (Rect, Vec<usize>),
        high: (Rect, Vec<usize>),
    },
}

/// Runner carrying the shared input, the split tree and the emitted cells.
struct PartitionRunner<'a> {
    points: &'a [WeightedPoint],
    cfg: PartitionCfg,
    nodes: Vec<SplitNode>,
    cells: Vec<Cell>,
    rounds: usize,
}

impl<'a> PartitionRunner<'a> {
    fn new(points: &'a [WeightedPoint], cfg: PartitionCfg) -> Self {
        Self {
            points,
            cfg,
            nodes: Vec::new(),
            cells: Vec::new(),
            rounds: 0,
        }
    }

    fn run(mut self, bounds: Rect) -> Result<Partition, PartitionError> {
        let mut frontier = vec![Pending {
            rect: bounds,
            idx: (0..self.points.len()).collect(),
            depth: 0,
            node: self.reserve_node(),
        }];
        while !frontier.is_empty() {
            let (points, cfg) = (self.points, self.cfg);
            let steps: Vec<Step> = frontier
                .into_par_iter()
                .map(|cell| refine(points, cfg, cell))
                .collect();
            frontier = Vec::new();
            let mut changed = false;
            for step in steps {
                match step {
                    Step::Final(cell) => self.emit(cell),
                    Step::Split {
                        node,
                        depth,
                        axis,
                        at,
                        low,
                        high,
                    } => {
                        let low_node = self.reserve_node();
                        let high_node = self.reserve_node();
                        self.nodes[node] = SplitNode::Split {
                            axis,
                            at,
                            low: low_node,
                            high: high_node,
                        };
                        for ((rect, idx), node) in [(low, low_node), (high, high_node)] {
                            frontier.push(Pending {
                                rect,
                                idx,
                                depth,
                                node,
                            });
                        }
                        changed = true;
                    }
                }
            }
            if changed {
                self.rounds += 1;
            }
        }
        Ok(self.finish(bounds))
    }

    fn reserve_node(&mut self) -> usize {
        // Placeholder leaf; overwritten once the cell is final or split.
        self.nodes.push(SplitNode::Leaf(usize::MAX));
        self.nodes.len() - 1
    }

    fn emit(&mut self, cell: Pending) {
        self.nodes[cell.node] = SplitNode::Leaf(self.cells.len());
        self.cells.push(Cell {
            rect: cell.rect,
            count: cell.idx.len(),
            weight_sum: weight_sum(self.points, &cell.idx),
            points: cell.idx,
            depth: cell.depth,
        });
    }

    /// Sort cells into reading order and remap the tree leaves accordingly.
    fn finish(self, bounds: Rect) -> Partition {
        let Self {
            cfg,
            mut nodes,
            cells,
            rounds,
            ..
        } = self;
        let mut order: Vec<usize> = (0..cells.len()).collect();
        order.sort_by(|&a, &b| cmp_rects(&cells[a].rect, &cells[b].rect));
        let mut new_index = vec![0; cells.len()];
        for (new, &old) in order.iter().enumerate() {
            new_index[old] = new;
        }
        for node in &mut nodes {
            if let SplitNode::Leaf(k) = node {
                *k = new_index[*k];
            }
        }
        let mut slots: Vec<Option<Cell>> = cells.into_iter().map(Some).collect();
        let cells = order
            .iter()
            .filter_map(|&old| slots[old].take())
            .collect();
        Partition {
            cells,
            bounds,
            min_count: cfg.min_count,
            rounds,
            locator: Locator::Tree(nodes),
        }
    }
}

/// One refinement step for a single cell (independent of all other cells).
fn refine(points: &[WeightedPoint], cfg: PartitionCfg, cell: Pending) -> Step {
    let m = cfg.min_count;
    let n = cell.idx.len();
    if n < m.saturating_mul(2) {
        return Step::Final(cell);
    }
    let axis = cell.rect.longer_axis(cfg.tie_axis);
    let mut scratch = Vec::with_capacity(n);
    let Some(at) = median_along(points, &cell.idx, axis, &mut scratch) else {
        return Step::Final(cell);
    };
    let (low_idx, high_idx) = split_indices(points, &cell.idx, axis, at);
    // Covers degenerate cells too: identical coordinates all land on the low side.
    if low_idx.len() < m || high_idx.len() < m {
        return Step::Final(cell);
    }
    let (low_rect, high_rect) = cell.rect.split(axis, at);
    Step::Split {
        node: cell.node,
        depth: cell.depth + 1,
        axis,
        at,
        low: (low_rect, low_idx),
        high: (high_rect, high_idx),
    }
}

/// Reading order: bottom-to-top, then left-to-right.
pub(crate) fn cmp_rects(a: &Rect, b: &Rect) -> Ordering {
    a.y_min
        .total_cmp(&b.y_min)
        .then(a.x_min.total_cmp(&b.x_min))
        .then(a.y_max.total_cmp(&b.y_max))
        .then(a.x_max.total_cmp(&b.x_max))
}
