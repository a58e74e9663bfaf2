use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;

use tilepath_core::{CostGrid, GridCell, LoadOptions, ParseMode, Viewport};
use tilepath_search::{Pathfinder, path_cost};

use crate::render::render_ascii;

#[derive(Parser, Debug)]
#[command(name = "tilepath", version, about = "Find a least-cost path across a text cost grid")]
pub struct Cli {
    /// Terrain layout, one grid row per line
    pub terrain: PathBuf,

    /// Legend file with one `<char>=<cost>` entry per line
    pub legend: PathBuf,

    /// Start cell as `X,Y`
    #[arg(long, value_parser = parse_cell, allow_hyphen_values = true, required_unless_present = "start_point")]
    pub start: Option<GridCell>,

    /// End cell as `X,Y`
    #[arg(long, value_parser = parse_cell, allow_hyphen_values = true, required_unless_present = "end_point")]
    pub end: Option<GridCell>,

    /// Start as a host-space point `X,Y` on a 1024x768 viewport centred on the origin
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, conflicts_with = "start")]
    pub start_point: Option<(f32, f32)>,

    /// End as a host-space point `X,Y` on a 1024x768 viewport centred on the origin
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true, conflicts_with = "end")]
    pub end_point: Option<(f32, f32)>,

    /// Reject multi-character legend keys and ragged terrain rows
    #[arg(long)]
    pub strict: bool,

    /// Print the grid with the path drawn over it
    #[arg(long)]
    pub render: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            mode: if self.strict {
                ParseMode::Strict
            } else {
                ParseMode::Compat
            },
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Load the grid, run the search and format the report.
pub fn run(cli: &Cli) -> Result<String> {
    let grid = CostGrid::from_files(&cli.terrain, &cli.legend, &cli.load_options())
        .with_context(|| format!("failed to load {}", cli.terrain.display()))?;
    let mut pf = Pathfinder::new(Arc::new(grid));
    let view = Viewport::default();

    match (cli.start, cli.start_point) {
        (Some(cell), _) => pf.set_start(cell),
        (None, Some((x, y))) => pf.set_start_point(x, y, &view),
        (None, None) => bail!("no start given"),
    }
    match (cli.end, cli.end_point) {
        (Some(cell), _) => pf.set_end(cell),
        (None, Some((x, y))) => pf.set_end_point(x, y, &view),
        (None, None) => bail!("no end given"),
    }

    let mut out = String::new();
    if cli.render {
        out.push_str(&render_ascii(pf.grid(), pf.path(), pf.start(), pf.end()));
    }
    if pf.path().is_empty() {
        writeln!(out, "no path from {} to {}", pf.start(), pf.end())?;
        return Ok(out);
    }
    for cell in pf.path() {
        writeln!(out, "{},{}", cell.x, cell.y)?;
    }
    let cost = path_cost(&**pf.grid(), pf.path()).context("search returned a broken path")?;
    writeln!(out, "cost {cost}")?;
    Ok(out)
}

fn parse_pair(s: &str) -> Result<(&str, &str), String> {
    s.split_once(',')
        .map(|(a, b)| (a.trim(), b.trim()))
        .ok_or_else(|| format!("expected X,Y but got \u{201c}{s}\u{201d}"))
}

fn parse_cell(s: &str) -> Result<GridCell, String> {
    let (x, y) = parse_pair(s)?;
    let x = x.parse::<i32>().map_err(|e| format!("bad X: {e}"))?;
    let y = y.parse::<i32>().map_err(|e| format!("bad Y: {e}"))?;
    Ok(GridCell::new(x, y))
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = parse_pair(s)?;
    let x = x.parse::<f32>().map_err(|e| format!("bad X: {e}"))?;
    let y = y.parse::<f32>().map_err(|e| format!("bad Y: {e}"))?;
    Ok((x, y))
}
