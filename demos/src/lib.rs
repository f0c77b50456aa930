//! Command-line driver: generate a maze, compare the three strategies on it
//! and optionally replay one strategy's trace step by step.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridsearch_bench::compare;
use gridsearch_maze::{Maze, MazeConfig, MazeGen, render};
use gridsearch_paths::{ParseStrategyError, SearchStrategy, Strategy};

/// Compare breadth-first, depth-first and A* search on a random maze.
#[derive(Debug, Clone, Parser)]
#[command(name = "gridsearch", version, about)]
pub struct Args {
    /// Number of maze rows.
    #[arg(long, default_value_t = 10)]
    pub rows: i32,

    /// Number of maze columns.
    #[arg(long, default_value_t = 10)]
    pub cols: i32,

    /// Probability that a cell is a wall.
    #[arg(long, default_value_t = 0.25)]
    pub wall_prob: f64,

    /// Seed for a reproducible maze.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Regenerate up to this many times until the goal is reachable.
    #[arg(long, value_name = "ATTEMPTS")]
    pub solvable: Option<usize>,

    /// Strategy whose path length is the quality baseline. Must be optimal.
    #[arg(long, value_name = "STRATEGY", default_value = "bfs", value_parser = parse_reference)]
    pub reference: Strategy,

    /// Replay the expansion trace of this strategy.
    #[arg(long, value_name = "STRATEGY")]
    pub replay: Option<Strategy>,

    /// Pause between replayed steps, in milliseconds.
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}

/// Only strategies that always find a shortest path can set the baseline.
fn parse_reference(s: &str) -> Result<Strategy, String> {
    let strategy: Strategy = s.parse().map_err(|e: ParseStrategyError| e.to_string())?;
    if !strategy.is_optimal() {
        return Err(format!("{strategy} does not guarantee a shortest path"));
    }
    Ok(strategy)
}

impl Args {
    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.rows,
            cols: self.cols,
            wall_prob: self.wall_prob,
        }
    }
}

fn generate<R: rand::Rng>(mut mg: MazeGen<R>, args: &Args) -> anyhow::Result<Maze> {
    let config = args.maze_config();
    let maze = match args.solvable {
        Some(attempts) => mg.generate_solvable(&config, attempts)?,
        None => mg.generate(&config)?,
    };
    Ok(maze)
}

/// Run the whole demo, writing everything to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let maze = match args.seed {
        Some(seed) => generate(MazeGen::new(StdRng::seed_from_u64(seed)), args),
        None => generate(MazeGen::new(rand::rng()), args),
    }
    .context("generating maze")?;
    log::info!(
        "maze {} from {} to {}",
        maze.grid.dims(),
        maze.start,
        maze.goal
    );

    writeln!(out, "Random maze:")?;
    write!(out, "{}", render(&maze, None))?;

    let all = Strategy::ALL;
    let strategies: Vec<&dyn SearchStrategy> =
        all.iter().map(|s| s as &dyn SearchStrategy).collect();
    let cmp = compare(&strategies, &args.reference, &maze.grid, maze.start, maze.goal)
        .context("comparing strategies")?;

    for run in &cmp.runs {
        let name = &run.stats.name;
        match run.result.path() {
            Some(path) => {
                writeln!(out, "\n{name} reached the goal:")?;
                write!(out, "{}", render(&maze, Some(path)))?;
            }
            None => writeln!(out, "\n{name} found no path.")?,
        }
    }

    writeln!(out)?;
    write!(out, "{cmp}")?;

    if let Some(strategy) = args.replay {
        let Some(run) = cmp.get(strategy.short_name()) else {
            anyhow::bail!("no run recorded for {strategy}");
        };
        replay(&maze, run.result.trace(), args.delay_ms, out)?;
    }
    Ok(())
}

fn replay<W: Write>(
    maze: &Maze,
    trace: &gridsearch_paths::Trace,
    delay_ms: u64,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "\nReplay ({} expansions):", trace.len())?;
    for (i, step) in trace.iter().enumerate() {
        writeln!(out, "Step {i}: {}", step.cell)?;
        write!(out, "{}", render(maze, Some(&step.path)))?;
        if delay_ms > 0 {
            out.flush()?;
            thread::sleep(Duration::from_millis(delay_ms));
        }
    }
    Ok(())
}
