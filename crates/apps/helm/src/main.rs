//! Interactive console for driving voxel vessels over an in-memory
//! grid: build a structure cell by cell, scan it into a vessel, then
//! steer it with line commands.

mod command;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use command::Command;
use glam::IVec3;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use vessel::{
    BlockGrid, Fleet, Heading, Material, MemoryGrid, Topology, Turn, Vessel, DEFAULT_PERIOD,
};

#[derive(Parser)]
#[command(name = "helm")]
#[command(about = "Console for scanning and steering voxel vessels", long_about = None)]
struct Cli {
    /// Directory vessel records are saved to and loaded from
    #[arg(long, default_value = "vessels")]
    vessels: PathBuf,

    /// Milliseconds between movement ticks
    #[arg(long)]
    period_ms: Option<u64>,

    /// Scan with the older 18-neighbor connectivity
    #[arg(long)]
    edge_scan: bool,

    /// Pre-populate the grid from a file of `x,y,z,MATERIAL,data` lines
    #[arg(long)]
    world_file: Option<PathBuf>,

    /// Owner name stamped on new vessels
    #[arg(long, default_value = "console")]
    owner: String,

    /// World name stamped on new vessels
    #[arg(long, default_value = "sandbox")]
    world: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let period = cli
        .period_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_PERIOD);
    let topology = if cli.edge_scan {
        Topology::Edge18
    } else {
        Topology::Moore26
    };

    let grid = Arc::new(Mutex::new(MemoryGrid::new()));
    let mut fleet = Fleet::new(grid, topology, period);

    if let Some(path) = &cli.world_file {
        let cells = load_world(path, fleet.grid())?;
        tracing::info!(cells, path = %path.display(), "world file loaded");
    }

    println!("{}", command::HELP);
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => {
                if let Err(err) = run(&cli, &mut fleet, cmd) {
                    eprintln!("error: {err:#}");
                }
            }
            Err(err) => eprintln!("error: {err:#}"),
        }
    }

    fleet.stop_all();
    Ok(())
}

fn run(cli: &Cli, fleet: &mut Fleet<MemoryGrid>, cmd: Command) -> Result<()> {
    match cmd {
        Command::Place {
            pos,
            material,
            data,
        } => {
            let mut grid = fleet.grid().lock().expect("grid lock poisoned");
            grid.set(pos, material, data);
        }
        Command::Probe { pos } => {
            let grid = fleet.grid().lock().expect("grid lock poisoned");
            let sample = grid.sample(pos);
            println!("{} {},{}", sample.pos, sample.material, sample.data);
        }
        Command::Create { name, seed } => {
            fleet.create(&name, seed, &cli.owner, &cli.world, Heading::North)?;
            let members = fleet
                .get(&name)
                .map(|v| v.lock().expect("vessel lock poisoned").len())
                .unwrap_or(0);
            println!("created {name:?} with {members} members");
        }
        Command::Delete { name } => fleet.remove(&name)?,
        Command::List => {
            for name in fleet.names() {
                let state = if fleet.is_moving(&name) {
                    "moving"
                } else {
                    "stopped"
                };
                let vessel = fleet.get(&name).expect("listed vessel exists");
                let vessel = vessel.lock().expect("vessel lock poisoned");
                println!("{name}: {state}, heading {}, {} members", vessel.heading(), vessel.len());
            }
        }
        Command::Start { name } => fleet.start(&name)?,
        Command::Stop { name } => fleet.stop(&name)?,
        Command::Left { name } => rotate(fleet, &name, Turn::CounterClockwise)?,
        Command::Right { name } => rotate(fleet, &name, Turn::Clockwise)?,
        Command::Up { name } => steer(fleet, &name, |v| v.set_heading(Heading::Up))?,
        Command::Down { name } => steer(fleet, &name, |v| v.set_heading(Heading::Down))?,
        Command::Forward { name } => steer(fleet, &name, |v| v.set_reversing(false))?,
        Command::Reverse { name } => steer(fleet, &name, |v| v.set_reversing(true))?,
        Command::Step { name } => {
            let vessel = lookup(fleet, &name)?;
            let grid = fleet.grid().clone();
            let mut grid = grid.lock().expect("grid lock poisoned");
            let mut vessel = vessel.lock().expect("vessel lock poisoned");
            vessel.translate(&mut *grid);
            println!("{name} heading {}", vessel.heading());
        }
        Command::Save => {
            fleet.save_all(&cli.vessels)?;
            println!("saved to {}", cli.vessels.display());
        }
        Command::Load => {
            let loaded = fleet.load_all(&cli.vessels)?;
            println!("loaded {loaded} vessels from {}", cli.vessels.display());
        }
        Command::Help => println!("{}", command::HELP),
        Command::Quit => {}
    }
    Ok(())
}

/// Seed the grid from a text file, one `x,y,z,MATERIAL,data` cell per
/// line. Blank lines and `#` comments are skipped.
fn load_world(path: &Path, grid: &Arc<Mutex<MemoryGrid>>) -> Result<usize> {
    let text = std::fs::read_to_string(path)?;
    let mut grid = grid.lock().expect("grid lock poisoned");
    let mut cells = 0;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 5 {
            bail!("{}:{}: expected 5 fields", path.display(), i + 1);
        }
        let number = |text: &str| -> Result<i32> {
            text.parse()
                .map_err(|_| anyhow!("{}:{}: invalid number {text:?}", path.display(), i + 1))
        };
        let pos = IVec3::new(number(fields[0])?, number(fields[1])?, number(fields[2])?);
        let material = Material::from_name(fields[3]).ok_or_else(|| {
            anyhow!("{}:{}: unknown material {:?}", path.display(), i + 1, fields[3])
        })?;
        let data: u8 = fields[4].parse().map_err(|_| {
            anyhow!("{}:{}: invalid data {:?}", path.display(), i + 1, fields[4])
        })?;

        grid.set(pos, material, data);
        cells += 1;
    }

    Ok(cells)
}

fn lookup(fleet: &Fleet<MemoryGrid>, name: &str) -> Result<Arc<Mutex<Vessel>>> {
    fleet
        .get(name)
        .cloned()
        .ok_or_else(|| anyhow!("no vessel named {name:?}"))
}

/// Grid lock first, then the vessel, matching the mover's tick order.
fn rotate(fleet: &Fleet<MemoryGrid>, name: &str, turn: Turn) -> Result<()> {
    let vessel = lookup(fleet, name)?;
    let grid = fleet.grid().clone();
    let mut grid = grid.lock().expect("grid lock poisoned");
    let mut vessel = vessel.lock().expect("vessel lock poisoned");
    vessel.rotate(&mut *grid, turn, None);
    println!("{name} heading {}", vessel.heading());
    Ok(())
}

fn with_vessel<F>(fleet: &Fleet<MemoryGrid>, name: &str, act: F) -> Result<()>
where
    F: FnOnce(&mut Vessel),
{
    let vessel = lookup(fleet, name)?;
    let mut vessel = vessel.lock().expect("vessel lock poisoned");
    act(&mut vessel);
    println!("{name} heading {}", vessel.heading());
    Ok(())
}

/// Steering commands change course and set the vessel moving; a
/// separate `start` is not needed.
fn steer<F>(fleet: &mut Fleet<MemoryGrid>, name: &str, act: F) -> Result<()>
where
    F: FnOnce(&mut Vessel),
{
    with_vessel(fleet, name, act)?;
    fleet.start(name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vessel::Material;

    #[test]
    fn test_steering_arms_the_mover() {
        let mut grid = MemoryGrid::new();
        grid.set(IVec3::new(0, -1, 0), Material::Stone, 0);
        let mut fleet = Fleet::new(
            Arc::new(Mutex::new(grid)),
            Topology::Moore26,
            Duration::from_millis(50),
        );
        fleet
            .create("tug", IVec3::ZERO, "console", "sandbox", Heading::North)
            .unwrap();

        assert!(!fleet.is_moving("tug"));
        steer(&mut fleet, "tug", |v| v.set_reversing(true)).unwrap();
        assert!(fleet.is_moving("tug"));
        assert!(fleet.get("tug").unwrap().lock().unwrap().is_reversing());
        fleet.stop_all();
    }

    #[test]
    fn test_steering_unknown_vessel_errors() {
        let mut fleet = Fleet::new(
            Arc::new(Mutex::new(MemoryGrid::new())),
            Topology::Moore26,
            Duration::from_millis(50),
        );
        assert!(steer(&mut fleet, "ghost", |v| v.set_heading(Heading::Up)).is_err());
    }
}
