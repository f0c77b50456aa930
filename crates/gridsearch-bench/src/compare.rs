use std::time::{Duration, Instant};

use gridsearch_core::Cell;
use gridsearch_paths::{GridOracle, SearchError, SearchResult, SearchStrategy};

use crate::quality::path_quality;

/// Measurements for one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyStats {
    pub name: String,
    /// Moves on the returned path, `None` if no path was found.
    pub steps: Option<usize>,
    pub expanded: usize,
    pub duration: Duration,
    /// See [`path_quality`].
    pub quality: f64,
}

/// Stats plus the full result, so the trace can be replayed later.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub stats: StrategyStats,
    pub result: SearchResult,
}

/// Output of [`compare`], in the order the strategies were given.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Step count of the reference strategy's path.
    pub baseline: Option<usize>,
    pub runs: Vec<StrategyRun>,
}

impl Comparison {
    /// Look up a run by strategy name.
    pub fn get(&self, name: &str) -> Option<&StrategyRun> {
        self.runs.iter().find(|r| r.stats.name == name)
    }

    /// Iterate over the stats of every run.
    pub fn iter(&self) -> impl Iterator<Item = &StrategyStats> {
        self.runs.iter().map(|r| &r.stats)
    }
}

/// Run `reference` for the baseline, then every strategy in `strategies`.
///
/// `reference` must always return a shortest path (see
/// [`Strategy::is_optimal`](gridsearch_paths::Strategy::is_optimal)); only
/// then is every quality at most 100. A run that beats the baseline is
/// logged as a warning.
///
/// Strategies that find no path are still reported, with `steps == None`
/// and zero quality. Fails only if the endpoints are invalid for the grid.
pub fn compare(
    strategies: &[&dyn SearchStrategy],
    reference: &dyn SearchStrategy,
    grid: &dyn GridOracle,
    start: Cell,
    goal: Cell,
) -> Result<Comparison, SearchError> {
    let baseline = reference.search(start, goal, grid)?.steps();
    log::debug!("baseline from {}: {:?}", reference.name(), baseline);

    let mut runs = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let name = strategy.name();
        log::info!("running {name}");

        let t0 = Instant::now();
        let result = strategy.search(start, goal, grid)?;
        let duration = t0.elapsed();

        let steps = result.steps();
        let stats = StrategyStats {
            name: name.to_string(),
            steps,
            expanded: result.expanded(),
            duration,
            quality: path_quality(baseline, steps),
        };
        if let (Some(s), Some(b)) = (steps, baseline) {
            if s < b {
                log::warn!(
                    "{name} found {s} steps, shorter than the {b}-step baseline from {}",
                    reference.name()
                );
            }
        }
        match steps {
            Some(s) => log::info!(
                "{name} reached the goal in {s} steps, {} expansions, {:?}",
                stats.expanded,
                duration
            ),
            None => log::info!("{name} found no path after {} expansions", stats.expanded),
        }
        runs.push(StrategyRun { stats, result });
    }

    Ok(Comparison { baseline, runs })
}
