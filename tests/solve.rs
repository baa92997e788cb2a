use anyhow::{ensure, Context};
use pond_solver::{solve, Graph, Grid, Reach};

use crate::common::*;

mod common;

fn main() {
    run_tests("solve", |content| {
        let map = content
            .split_once(SEPARATOR)
            .map_or(content, |(input, _)| input)
            .trim();
        let grid = map.parse::<Grid>().context("Invalid map")?;
        let graph = Graph::new(&grid);

        let grouping = solve::solve_all(&graph, || {});

        // Validate every reported distance against a fresh search.
        for (reach, cells) in grouping.iter() {
            for &pos in cells {
                let source = graph.at(pos).context("Cell without node")?;
                let path = solve::shortest_path(&graph, source, graph.exit());
                ensure!(Reach::from(path.as_ref()) == reach, "Unstable result at {pos}");
            }
        }

        Ok(format!("{map}\n\n{SEPARATOR}{grouping}"))
    });
}
