use anyhow::{ensure, Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pond_solver::{solve, Graph, Grid};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let paths = std::env::args().skip(1).collect::<Vec<_>>();
    ensure!(!paths.is_empty(), "Missing puzzle file argument");

    for (path, i) in paths.iter().zip(1..) {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read the puzzle {path:?}"))?;
        let grid = data
            .parse::<Grid>()
            .with_context(|| format!("Failed to parse the puzzle {path:?}"))?;
        log::debug!("Puzzle {path}:\n{grid}");

        let graph = Graph::new(&grid);
        let pb = ProgressBar::new(graph.open_cells().count() as u64).with_style(
            ProgressStyle::with_template("{spinner} [{elapsed}] {wide_bar} {pos}/{len}")
                .context("Invalid progress template")?,
        );
        let grouping = solve::solve_all(&graph, || pb.inc(1));
        pb.finish_and_clear();

        println!("\n{} {path}", style(format!("Test {i}:")).bold());
        print!("{grouping}");
    }

    Ok(())
}
