use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::{Cell, Grid};

impl FromStr for Grid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().skip_while(|line| line.trim().is_empty());

        let header = lines.next().context("Missing header line")?;
        let mut fields = header.split_whitespace().map(|field| {
            field
                .parse::<usize>()
                .with_context(|| format!("Invalid number in header: {field:?}"))
        });
        let mut next_field = |name: &str| -> Result<usize> {
            fields
                .next()
                .with_context(|| format!("Missing {name} in header"))?
        };
        let height = next_field("height")?;
        let width = next_field("width")?;
        let exit_row = next_field("exit row")?;
        ensure!(fields.next().is_none(), "Trailing fields in header: {header:?}");
        ensure!(height > 0 && width > 0, "Empty pond {height}x{width}");
        ensure!(
            exit_row < height,
            "Exit row {exit_row} out of bound {height}"
        );

        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            let line = lines
                .next()
                .with_context(|| format!("Missing line {row}, expecting {height} lines"))?
                .trim_end();
            ensure!(
                line.chars().count() == width,
                "Width mismatch on line {row}, expecting width {width}",
            );
            cells.extend(line.chars().map(|ch| match ch {
                '.' => Cell::Open,
                _ => Cell::Obstacle,
            }));
        }
        ensure!(
            lines.all(|line| line.trim().is_empty()),
            "Unexpected content after {height} lines"
        );

        Ok(Grid {
            height,
            width,
            exit_row,
            cells: cells.into(),
        })
    }
}
