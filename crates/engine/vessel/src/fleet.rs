//! Named registry of vessels and their movers
//!
//! A `Fleet` owns every active vessel in one world, keyed by name, and
//! is passed into command handlers. It holds the shared grid the
//! movers tick against. Nothing here guards two vessels claiming the
//! same cells; one vessel per coordinate region is a caller invariant.

use crate::grid::BlockGrid;
use crate::heading::Heading;
use crate::io::{self, PersistError};
use crate::mover::Mover;
use crate::scan::{ScanError, Topology};
use crate::vessel::Vessel;
use glam::IVec3;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("a vessel named {name:?} already exists")]
    AlreadyExists { name: String },

    #[error("no vessel named {name:?}")]
    UnknownVessel { name: String },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("fleet directory error")]
    Io(#[from] std::io::Error),
}

struct Entry {
    vessel: Arc<Mutex<Vessel>>,
    mover: Mover,
}

/// All active vessels over one shared grid.
pub struct Fleet<G: BlockGrid + Send + 'static> {
    grid: Arc<Mutex<G>>,
    topology: Topology,
    period: Duration,
    vessels: HashMap<String, Entry>,
}

impl<G: BlockGrid + Send + 'static> Fleet<G> {
    pub fn new(grid: Arc<Mutex<G>>, topology: Topology, period: Duration) -> Self {
        Self {
            grid,
            topology,
            period,
            vessels: HashMap::new(),
        }
    }

    /// The shared grid. Lock this BEFORE any vessel lock, matching the
    /// mover's tick order.
    pub fn grid(&self) -> &Arc<Mutex<G>> {
        &self.grid
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vessels.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Mutex<Vessel>>> {
        self.vessels.get(name).map(|e| &e.vessel)
    }

    /// Capture a new vessel from `seed` and register it under `name`.
    /// A failed scan registers nothing.
    pub fn create(
        &mut self,
        name: &str,
        seed: IVec3,
        owner: &str,
        world: &str,
        heading: Heading,
    ) -> Result<(), FleetError> {
        if self.vessels.contains_key(name) {
            return Err(FleetError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let vessel = {
            let grid = self.grid.lock().expect("grid lock poisoned");
            Vessel::capture(&*grid, seed, self.topology, owner, world, heading)?
        };

        self.insert(name.to_string(), vessel);
        Ok(())
    }

    fn insert(&mut self, name: String, vessel: Vessel) {
        self.vessels.insert(
            name,
            Entry {
                vessel: Arc::new(Mutex::new(vessel)),
                mover: Mover::new(),
            },
        );
    }

    /// Unregister `name`, stopping its mover first.
    pub fn remove(&mut self, name: &str) -> Result<(), FleetError> {
        match self.vessels.remove(name) {
            Some(mut entry) => {
                entry.mover.stop();
                tracing::info!(name, "vessel removed");
                Ok(())
            }
            None => Err(FleetError::UnknownVessel {
                name: name.to_string(),
            }),
        }
    }

    /// Arm the vessel's mover. No-op if already moving.
    pub fn start(&mut self, name: &str) -> Result<(), FleetError> {
        let period = self.period;
        let grid = self.grid.clone();
        let entry = self.entry_mut(name)?;
        entry.mover.start(entry.vessel.clone(), grid, period);
        Ok(())
    }

    /// Cancel the vessel's mover. No-op if not moving.
    pub fn stop(&mut self, name: &str) -> Result<(), FleetError> {
        self.entry_mut(name)?.mover.stop();
        Ok(())
    }

    pub fn is_moving(&self, name: &str) -> bool {
        self.vessels
            .get(name)
            .is_some_and(|entry| entry.mover.is_running())
    }

    /// Name of the vessel that owns `pos`, if any. Used by "act on the
    /// vessel I'm standing in" callers.
    pub fn vessel_at(&self, pos: IVec3) -> Option<String> {
        self.vessels.iter().find_map(|(name, entry)| {
            let vessel = entry.vessel.lock().expect("vessel lock poisoned");
            vessel.contains(pos).then(|| name.clone())
        })
    }

    /// Save every vessel under `dir` as `<name>.vessel`.
    pub fn save_all(&self, dir: &Path) -> Result<(), FleetError> {
        std::fs::create_dir_all(dir)?;
        for (name, entry) in &self.vessels {
            let vessel = entry.vessel.lock().expect("vessel lock poisoned");
            io::save_to_path(&vessel, &dir.join(format!("{name}.vessel")))?;
        }
        Ok(())
    }

    /// Load every `*.vessel` record under `dir`. Corrupt records are
    /// logged and skipped; the rest still load. Returns the number of
    /// vessels loaded.
    pub fn load_all(&mut self, dir: &Path) -> Result<usize, FleetError> {
        let mut loaded = 0;
        for dir_entry in std::fs::read_dir(dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("vessel") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(String::from) else {
                continue;
            };
            if self.vessels.contains_key(&name) {
                tracing::warn!(name, "vessel already registered, skipping file");
                continue;
            }
            match io::load_from_path(&path) {
                Ok(vessel) => {
                    self.insert(name, vessel);
                    loaded += 1;
                }
                Err(err) => {
                    tracing::error!(name, %err, "skipping corrupt vessel record");
                }
            }
        }
        Ok(loaded)
    }

    /// Stop every mover. Called on shutdown.
    pub fn stop_all(&mut self) {
        for entry in self.vessels.values_mut() {
            entry.mover.stop();
        }
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut Entry, FleetError> {
        self.vessels
            .get_mut(name)
            .ok_or_else(|| FleetError::UnknownVessel {
                name: name.to_string(),
            })
    }
}
