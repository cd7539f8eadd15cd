//! Route merging: the edge-selection loop of the savings heuristic.

use log::trace;
use rand::Rng;

use super::{EdgeSelector, SavingsList};
use crate::models::{EdgeId, Graph, Route, Solution, DEPOT};

/// Mutable state of one merge pass.
///
/// Routes live in indexed slots; a slot is emptied when its route is
/// absorbed by a merge. `route_of` maps every customer to the slot of the
/// route currently serving it and `interior` marks customers that are no
/// longer adjacent to the depot. Both are updated within each merge step.
#[derive(Debug)]
pub struct MergeState<'g> {
    graph: &'g Graph<'g>,
    slots: Vec<Option<Route>>,
    route_of: Vec<usize>,
    interior: Vec<bool>,
    cost: f64,
    demand: f64,
    merges: usize,
}

impl<'g> MergeState<'g> {
    /// Takes over a starting solution, typically the dummy solution.
    ///
    /// Customers with another customer on both sides start interior; the
    /// first and last customer of every route start exterior.
    pub fn new(graph: &'g Graph<'g>, start: Solution) -> Self {
        let n = graph.instance().nodes().len();
        let cost = start.cost();
        let demand = start.demand();
        let mut route_of = vec![usize::MAX; n];
        let mut interior = vec![false; n];

        let slots: Vec<Option<Route>> = start
            .into_routes()
            .into_iter()
            .enumerate()
            .map(|(slot, route)| {
                let customers = route.customer_ids();
                let last = customers.len().saturating_sub(1);
                for (pos, &customer) in customers.iter().enumerate() {
                    route_of[customer] = slot;
                    interior[customer] = pos > 0 && pos < last;
                }
                Some(route)
            })
            .collect();

        Self {
            graph,
            slots,
            route_of,
            interior,
            cost,
            demand,
            merges: 0,
        }
    }

    /// Consumes the savings list until it is empty.
    ///
    /// Each step takes the candidate chosen by `selector`, applies it if the
    /// merge is feasible, and otherwise discards it.
    pub fn merge_all<R: Rng>(&mut self, list: &mut SavingsList, selector: EdgeSelector, rng: &mut R) {
        while self.step(list, selector, rng).is_some() {}
    }

    /// Takes one candidate from `list` and tries to apply it.
    ///
    /// The inverse of an applied edge leaves the list with it; the inverse
    /// of a rejected edge stays. Returns `None` once the list is empty,
    /// otherwise whether the merge was applied.
    pub fn step<R: Rng>(
        &mut self,
        list: &mut SavingsList,
        selector: EdgeSelector,
        rng: &mut R,
    ) -> Option<bool> {
        if list.is_empty() {
            return None;
        }
        let edge = list.take(selector.select(list.len(), rng))?;
        let merged = self.try_merge(edge);
        if merged {
            list.remove(self.graph.edge(edge).inverse);
        }
        Some(merged)
    }

    /// Applies edge `i → j` if the routes of `i` and `j` can be joined.
    ///
    /// Returns `false`, leaving the state untouched, when both nodes share a
    /// route, either is interior, or the joined demand exceeds capacity.
    /// Otherwise the route of `j` is spliced after `i` and removed.
    pub fn try_merge(&mut self, edge: EdgeId) -> bool {
        let edge = *self.graph.edge(edge);
        let (i, j) = (edge.origin, edge.end);
        let (ri, rj) = (self.route_of[i], self.route_of[j]);

        if !self.is_feasible(i, j, ri, rj) {
            return false;
        }
        let (Some(mut i_route), Some(mut j_route)) = (self.slots[ri].take(), self.slots[rj].take())
        else {
            return false;
        };

        // i must end its route
        i_route.remove_edge(i_route.depot_edge_position(i));
        if i_route.edges().len() > 1 {
            self.interior[i] = true;
        }
        if i_route.last_edge().map(|e| e.end) != Some(i) {
            i_route = i_route.reversed(self.graph);
        }

        // j must start its route
        j_route.remove_edge(j_route.depot_edge_position(j));
        if j_route.edges().len() > 1 {
            self.interior[j] = true;
        }
        if j_route.first_edge().map(|e| e.origin) != Some(j) {
            j_route = j_route.reversed(self.graph);
        }

        i_route.push_edge(edge, self.graph.demand(j));
        self.route_of[j] = ri;
        for e in j_route.edges() {
            i_route.push_edge(*e, self.graph.demand(e.end));
            if e.end != DEPOT {
                self.route_of[e.end] = ri;
            }
        }

        trace!(
            "merged {i} -> {j} (savings {:.3}): route {ri} absorbs route {rj}",
            edge.savings
        );

        self.slots[ri] = Some(i_route);
        self.cost -= edge.savings;
        self.merges += 1;
        true
    }

    fn is_feasible(&self, i: usize, j: usize, ri: usize, rj: usize) -> bool {
        if ri == rj || self.interior[i] || self.interior[j] {
            return false;
        }
        match (self.route(ri), self.route(rj)) {
            (Some(a), Some(b)) => a.demand() + b.demand() <= self.graph.instance().capacity(),
            _ => false,
        }
    }

    fn route(&self, slot: usize) -> Option<&Route> {
        self.slots.get(slot).and_then(|r| r.as_ref())
    }

    /// Route currently serving `customer`.
    pub fn route_of(&self, customer: usize) -> Option<&Route> {
        self.route_of.get(customer).and_then(|&slot| self.route(slot))
    }

    /// Returns `true` once `customer` has customers on both sides.
    pub fn is_interior(&self, customer: usize) -> bool {
        self.interior[customer]
    }

    /// Number of live routes.
    pub fn num_routes(&self) -> usize {
        self.slots.iter().filter(|r| r.is_some()).count()
    }

    /// Number of merges applied so far.
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Running solution cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Collects the surviving routes, in their original slot order.
    pub fn into_solution(self) -> Solution {
        let routes = self.slots.into_iter().flatten().collect();
        Solution::from_parts(routes, self.cost, self.demand)
    }
}
