//! Text table for a [`Comparison`].

use std::fmt;

use crate::compare::Comparison;

const RULE_WIDTH: usize = 75;

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- ALGORITHM COMPARISON ---")?;
        write_row(f, "Alg.", "Steps", "Expanded", "Time (s)", "Quality (%)")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for s in self.iter() {
            let steps = s.steps.map_or_else(|| "-".to_string(), |n| n.to_string());
            write_row(
                f,
                &s.name,
                &steps,
                &s.expanded.to_string(),
                &format!("{:.6}", s.duration.as_secs_f64()),
                &format!("{:.2}", s.quality),
            )?;
        }
        Ok(())
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    steps: &str,
    expanded: &str,
    time: &str,
    quality: &str,
) -> fmt::Result {
    let line = format!("{name:<5} | {steps:<10} | {expanded:<20} | {time:<10} | {quality}");
    writeln!(f, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gridsearch_core::{Cell, Grid};
    use gridsearch_paths::Strategy;

    use crate::compare::{Comparison, compare};

    #[test]
    fn table_layout() {
        let g = Grid::parse("..#\n...").unwrap();
        let mut cmp: Comparison = compare(
            &[&Strategy::BreadthFirst, &Strategy::DepthFirst],
            &Strategy::BreadthFirst,
            &g,
            Cell::new(0, 0),
            Cell::new(1, 2),
        )
        .unwrap();
        for run in &mut cmp.runs {
            run.stats.duration = Duration::from_micros(1500);
        }
        let text = cmp.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "--- ALGORITHM COMPARISON ---");
        assert_eq!(
            lines[1],
            "Alg.  | Steps      | Expanded             | Time (s)   | Quality (%)"
        );
        assert_eq!(lines[2], "-".repeat(75));
        assert!(lines[3].starts_with("BFS   | 3          | "));
        assert!(lines[3].ends_with("| 0.001500   | 100.00"));
    }

    #[test]
    fn missing_path_shows_dash() {
        let g = Grid::parse(".#.").unwrap();
        let cmp = compare(
            &[&Strategy::AStar],
            &Strategy::BreadthFirst,
            &g,
            Cell::new(0, 0),
            Cell::new(0, 2),
        )
        .unwrap();
        let text = cmp.to_string();
        let row = text.lines().nth(3).unwrap();
        assert!(row.starts_with("A*    | -          | 1 "));
        assert!(row.ends_with("| 0.00"));
    }
}
