//! Multi-start execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::best::BestSlot;
use super::config::MultiStartConfig;
use crate::constructive::{savings_pass, EdgeSelector, SavingsList};
use crate::error::SavingsResult;
use crate::models::{Graph, Instance, Solution};

/// Result of a multi-start run.
#[derive(Debug, Clone)]
pub struct MultiStartResult {
    /// Solution of the deterministic greedy pass.
    pub greedy: Solution,

    /// Cheapest solution found; never worse than `greedy`.
    pub best: Solution,

    /// Number of randomized passes completed.
    pub iterations: usize,

    /// Number of times the best solution improved.
    pub improvements: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost after the greedy pass and after each improvement.
    pub cost_history: Vec<f64>,

    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

/// Stopping rules shared by every worker.
struct Budget {
    start: Instant,
    time_limit: Option<Duration>,
    max_iterations: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl Budget {
    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// `true` once `passes` passes have been started or time is up.
    fn is_spent(&self, passes: usize) -> bool {
        if self.max_iterations > 0 && passes >= self.max_iterations {
            return true;
        }
        self.time_limit
            .is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

/// Executes the greedy pass followed by biased-randomized passes.
///
/// # Usage
///
/// ```
/// use u_savings::models::{Instance, Node};
/// use u_savings::distance::DistanceMatrix;
/// use u_savings::multistart::{MultiStartConfig, MultiStartRunner};
///
/// let nodes = vec![
///     Node::depot(),
///     Node::new(1, 4.0).at(1.0, 1.0),
///     Node::new(2, 3.0).at(2.0, -1.0),
///     Node::new(3, 5.0).at(-1.0, 2.0),
///     Node::new(4, 2.0).at(-2.0, -2.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes);
/// let instance = Instance::new(nodes, dm, 8.0).unwrap();
///
/// let config = MultiStartConfig::default()
///     .with_max_iterations(50)
///     .with_seed(7);
/// let result = MultiStartRunner::run(&instance, &config).unwrap();
/// assert!(result.best.cost() <= result.greedy.cost());
/// assert_eq!(result.best.num_served(), 4);
/// ```
pub struct MultiStartRunner;

impl MultiStartRunner {
    /// Runs the multi-start search.
    ///
    /// # Errors
    ///
    /// Returns [`SavingsError::InvalidConfig`](crate::error::SavingsError::InvalidConfig)
    /// if the configuration does not validate.
    pub fn run(instance: &Instance, config: &MultiStartConfig) -> SavingsResult<MultiStartResult> {
        Self::run_with_cancel(instance, config, None)
    }

    /// Runs the multi-start search with an optional cancellation token.
    ///
    /// If `cancel` is set to `true`, no further passes are started and the
    /// best solution found so far is returned.
    pub fn run_with_cancel(
        instance: &Instance,
        config: &MultiStartConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SavingsResult<MultiStartResult> {
        config.validate()?;

        let budget = Budget {
            start: Instant::now(),
            time_limit: config.time_limit_ms.map(Duration::from_millis),
            max_iterations: config.max_iterations,
            cancel,
        };
        let base_seed = config.seed.unwrap_or_else(rand::random);
        let selector = EdgeSelector::biased(config.beta1, config.beta2);

        let graph = Graph::new(instance);
        let template = SavingsList::build(&graph);

        let mut rng = StdRng::seed_from_u64(base_seed);
        let greedy = savings_pass(&graph, &template, EdgeSelector::Greedy, &mut rng);
        let slot = BestSlot::new(greedy.clone());

        // fewer than two customers: every pass returns the dummy solution
        let (iterations, cancelled) = if template.is_empty() {
            (0, budget.is_cancelled())
        } else {
            run_passes(&graph, &template, selector, &budget, &slot, config, rng, base_seed)
        };

        let (best, improvements, cost_history) = slot.into_parts();
        let elapsed = budget.start.elapsed();
        info!(
            "multi-start finished: {iterations} passes in {:?}, greedy {:.4}, best {:.4}, {improvements} improvements",
            elapsed,
            greedy.cost(),
            best.cost()
        );

        Ok(MultiStartResult {
            greedy,
            best,
            iterations,
            improvements,
            cancelled,
            cost_history,
            elapsed,
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn run_passes(
    graph: &Graph<'_>,
    template: &SavingsList,
    selector: EdgeSelector,
    budget: &Budget,
    slot: &BestSlot,
    config: &MultiStartConfig,
    rng: StdRng,
    base_seed: u64,
) -> (usize, bool) {
    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            return run_parallel(graph, template, selector, budget, slot, base_seed);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = (config, base_seed);

    run_sequential(graph, template, selector, budget, slot, rng)
}

fn run_sequential(
    graph: &Graph<'_>,
    template: &SavingsList,
    selector: EdgeSelector,
    budget: &Budget,
    slot: &BestSlot,
    mut rng: StdRng,
) -> (usize, bool) {
    let mut iterations = 0usize;
    loop {
        if budget.is_cancelled() {
            return (iterations, true);
        }
        if budget.is_spent(iterations) {
            return (iterations, false);
        }
        slot.offer(savings_pass(graph, template, selector, &mut rng));
        iterations += 1;
    }
}

#[cfg(feature = "parallel")]
fn run_parallel(
    graph: &Graph<'_>,
    template: &SavingsList,
    selector: EdgeSelector,
    budget: &Budget,
    slot: &BestSlot,
    base_seed: u64,
) -> (usize, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::AtomicUsize;

    let started = AtomicUsize::new(0);
    let completed = AtomicUsize::new(0);
    let cancelled = AtomicBool::new(false);
    let workers = rayon::current_num_threads().max(1);

    (0..workers).into_par_iter().for_each(|worker| {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(worker as u64 + 1));
        loop {
            if budget.is_cancelled() {
                cancelled.store(true, Ordering::Relaxed);
                return;
            }
            // claim a pass before running it so the iteration cap is exact
            if budget.is_spent(started.fetch_add(1, Ordering::Relaxed)) {
                return;
            }
            slot.offer(savings_pass(graph, template, selector, &mut rng));
            completed.fetch_add(1, Ordering::Relaxed);
        }
    });

    (
        completed.load(Ordering::Relaxed),
        cancelled.load(Ordering::Relaxed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::SolutionChecker;
    use crate::models::Node;
    use crate::distance::DistanceMatrix;

    fn ring(n: usize, capacity: f64) -> Instance {
        let mut nodes = vec![Node::depot()];
        for k in 1..=n {
            let angle = k as f64 * 2.399963;
            let radius = 5.0 + (k % 4) as f64 * 3.0;
            let demand = 1.0 + (k % 5) as f64;
            nodes.push(Node::new(k, demand).at(radius * angle.cos(), radius * angle.sin()));
        }
        let dm = DistanceMatrix::from_nodes(&nodes);
        Instance::new(nodes, dm, capacity).expect("valid")
    }

    #[test]
    fn test_best_never_worse_than_greedy() {
        let inst = ring(15, 12.0);
        let config = MultiStartConfig::default()
            .with_max_iterations(100)
            .with_seed(42);
        let result = MultiStartRunner::run(&inst, &config).expect("valid config");

        assert!(result.best.cost() <= result.greedy.cost());
        assert_eq!(result.iterations, 100);
        assert!(!result.cancelled);
        assert_eq!(result.cost_history.len(), result.improvements + 1);
        assert!(result.cost_history.windows(2).all(|w| w[1] < w[0]));

        let checker = SolutionChecker::new(&inst);
        assert!(checker.check(&result.greedy).is_empty());
        assert!(checker.check(&result.best).is_empty());
    }

    #[test]
    fn test_greedy_matches_single_pass() {
        let inst = ring(10, 10.0);
        let config = MultiStartConfig::default()
            .with_max_iterations(5)
            .with_seed(1);
        let result = MultiStartRunner::run(&inst, &config).expect("valid config");
        let direct = crate::constructive::clarke_wright_savings(&inst);
        assert!((result.greedy.cost() - direct.cost()).abs() < 1e-10);
        assert_eq!(result.greedy.num_routes(), direct.num_routes());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let inst = ring(12, 9.0);
        let config = MultiStartConfig::default()
            .without_time_limit()
            .with_max_iterations(40)
            .with_seed(11);
        let a = MultiStartRunner::run(&inst, &config).expect("valid config");
        let b = MultiStartRunner::run(&inst, &config).expect("valid config");
        assert_eq!(a.best.cost(), b.best.cost());
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_zero_time_budget_returns_greedy() {
        let inst = ring(8, 10.0);
        let config = MultiStartConfig::default().with_time_limit_ms(0);
        let result = MultiStartRunner::run(&inst, &config).expect("valid config");
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best.cost(), result.greedy.cost());
    }

    #[test]
    fn test_time_budget_stops_run() {
        let inst = ring(10, 10.0);
        let config = MultiStartConfig::default().with_time_limit_ms(50).with_seed(3);
        let result = MultiStartRunner::run(&inst, &config).expect("valid config");
        assert!(result.iterations > 0);
        assert!(result.elapsed >= Duration::from_millis(50));
    }

    #[test]
    fn test_cancelled_before_start() {
        let inst = ring(10, 10.0);
        let cancel = Arc::new(AtomicBool::new(true));
        let config = MultiStartConfig::default()
            .without_time_limit()
            .with_max_iterations(1_000_000);
        let result =
            MultiStartRunner::run_with_cancel(&inst, &config, Some(cancel)).expect("valid config");
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best.num_served(), 10);
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let inst = ring(10, 10.0);
        let cancel = Arc::new(AtomicBool::new(false));
        let config = MultiStartConfig::default().without_time_limit().with_max_iterations(usize::MAX);
        let flag = cancel.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(30));
            flag.store(true, Ordering::Relaxed);
        });
        let result =
            MultiStartRunner::run_with_cancel(&inst, &config, Some(cancel)).expect("valid config");
        handle.join().expect("canceller thread");
        assert!(result.cancelled);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let inst = ring(4, 10.0);
        let config = MultiStartConfig::default().with_betas(0.0, 0.5);
        assert!(MultiStartRunner::run(&inst, &config).is_err());
    }

    #[test]
    fn test_empty_and_single_instances() {
        let empty = Instance::new(vec![Node::depot()], DistanceMatrix::new(1), 5.0).expect("valid");
        let result = MultiStartRunner::run(&empty, &MultiStartConfig::default()).expect("valid config");
        assert_eq!(result.best.num_routes(), 0);
        assert_eq!(result.best.cost(), 0.0);
        assert_eq!(result.iterations, 0);

        let nodes = vec![Node::depot(), Node::new(1, 5.0).at(2.0, 0.0)];
        let dm = DistanceMatrix::from_nodes(&nodes);
        let single = Instance::new(nodes, dm, 5.0).expect("valid");
        let result = MultiStartRunner::run(&single, &MultiStartConfig::default()).expect("valid config");
        assert_eq!(result.best.num_routes(), 1);
        assert!((result.best.cost() - 4.0).abs() < 1e-10);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_run() {
        let inst = ring(15, 12.0);
        let config = MultiStartConfig::default()
            .without_time_limit()
            .with_max_iterations(200)
            .with_seed(9)
            .with_parallel(true);
        let result = MultiStartRunner::run(&inst, &config).expect("valid config");
        assert_eq!(result.iterations, 200);
        assert!(result.best.cost() <= result.greedy.cost());
        assert!(SolutionChecker::new(&inst).check(&result.best).is_empty());
    }
}
