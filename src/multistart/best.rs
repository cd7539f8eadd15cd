//! Shared best-solution slot.

use std::sync::{Mutex, MutexGuard};

use log::debug;

use crate::models::Solution;

#[derive(Debug)]
struct BestState {
    solution: Solution,
    improvements: usize,
    history: Vec<f64>,
}

/// Best solution seen so far, safe to update from several workers.
///
/// A candidate replaces the incumbent only if it is strictly cheaper; the
/// comparison and the write happen under one lock so concurrent offers
/// cannot lose an improvement.
#[derive(Debug)]
pub(crate) struct BestSlot {
    inner: Mutex<BestState>,
}

impl BestSlot {
    pub(crate) fn new(initial: Solution) -> Self {
        let history = vec![initial.cost()];
        Self {
            inner: Mutex::new(BestState {
                solution: initial,
                improvements: 0,
                history,
            }),
        }
    }

    /// Offers a candidate. Returns `true` if it became the new best.
    pub(crate) fn offer(&self, candidate: Solution) -> bool {
        let mut state = self.lock();
        if candidate.cost() < state.solution.cost() {
            debug!(
                "new best: {:.4} -> {:.4} ({} routes)",
                state.solution.cost(),
                candidate.cost(),
                candidate.num_routes()
            );
            state.history.push(candidate.cost());
            state.solution = candidate;
            state.improvements += 1;
            true
        } else {
            false
        }
    }

    /// Yields `(best, improvements, cost history)`.
    pub(crate) fn into_parts(self) -> (Solution, usize, Vec<f64>) {
        let state = match self.inner.into_inner() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        (state.solution, state.improvements, state.history)
    }

    fn lock(&self) -> MutexGuard<'_, BestState> {
        // a panicking worker cannot leave a half-written solution behind
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Graph, Instance, Node, Route};

    fn solutions() -> (Solution, Solution) {
        let nodes = vec![
            Node::depot(),
            Node::new(1, 1.0).at(1.0, 0.0),
            Node::new(2, 1.0).at(5.0, 0.0),
        ];
        let dm = DistanceMatrix::from_nodes(&nodes);
        let inst = Instance::new(nodes, dm, 10.0).expect("valid");
        let g = Graph::new(&inst);
        let mut cheap = Solution::new();
        cheap.add_route(Route::round_trip(&g, 1));
        let mut dear = Solution::new();
        dear.add_route(Route::round_trip(&g, 2));
        (cheap, dear)
    }

    #[test]
    fn test_only_strict_improvement() {
        let (cheap, dear) = solutions();
        let slot = BestSlot::new(dear.clone());
        assert!(!slot.offer(dear));
        assert!(slot.offer(cheap.clone()));
        assert!(!slot.offer(cheap));

        let (best, improvements, history) = slot.into_parts();
        assert!((best.cost() - 2.0).abs() < 1e-10);
        assert_eq!(improvements, 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_concurrent_offers_keep_minimum() {
        let (cheap, dear) = solutions();
        let slot = BestSlot::new(dear.clone());
        std::thread::scope(|s| {
            for k in 0..8 {
                let candidate = if k == 5 { cheap.clone() } else { dear.clone() };
                let slot = &slot;
                s.spawn(move || {
                    slot.offer(candidate);
                });
            }
        });
        let (best, improvements, _) = slot.into_parts();
        assert!((best.cost() - 2.0).abs() < 1e-10);
        assert_eq!(improvements, 1);
    }
}
