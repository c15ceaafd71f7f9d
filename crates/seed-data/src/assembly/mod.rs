//! Composition roots for seeding runs.
//!
//! An [`Assembly`] is an ordered list of seed units built by a plain
//! composition function ([`common`], [`development`]). Construction wires
//! dependencies through constructor arguments with the [`crate::db::DbHandle`]
//! threaded explicitly; [`Assembly::activate`] then runs every unit's
//! `seed()` to completion, in order, stopping at the first failure.
//! Activation consumes the assembly, so a run can never repeat.

mod common;
mod development;

pub use common::common;
pub use development::development;

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::seeders::{SeedError, SeedUnit};

/// Outcome of one completed unit within an activation.
#[derive(Debug)]
pub struct UnitReport {
    pub name: &'static str,
    pub rows_written: u64,
    pub elapsed: Duration,
}

/// Outcome of a full assembly activation.
#[derive(Debug)]
pub struct AssemblyReport {
    pub assembly: &'static str,
    pub units: Vec<UnitReport>,
}

impl AssemblyReport {
    /// Total rows written across all units.
    pub fn total_rows(&self) -> u64 {
        self.units.iter().map(|u| u.rows_written).sum()
    }
}

/// An ordered collection of seed units.
pub struct Assembly {
    name: &'static str,
    units: Vec<Box<dyn SeedUnit>>,
}

impl Assembly {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            units: Vec::new(),
        }
    }

    /// Splices an imported assembly's units ahead of this assembly's own.
    /// Imported units run first.
    pub fn include(mut self, imported: Assembly) -> Self {
        let mut units = imported.units;
        units.append(&mut self.units);
        self.units = units;
        self
    }

    /// Appends a unit. Units run in registration order.
    pub fn register(mut self, unit: impl SeedUnit + 'static) -> Self {
        self.units.push(Box::new(unit));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ordered unit names, as they would run.
    pub fn unit_names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name()).collect()
    }

    /// Runs every unit once, in order, awaiting each to completion before
    /// starting the next.
    ///
    /// A name that has already run within this activation is skipped. The
    /// first failing unit aborts the activation; its error is returned
    /// unmodified and later units never run. A failed activation leaves the
    /// store partially seeded.
    pub async fn activate(self) -> Result<AssemblyReport, SeedError> {
        info!(
            "Activating assembly '{}' ({} units)",
            self.name,
            self.units.len()
        );

        let mut provided: HashSet<&'static str> = HashSet::new();
        let mut units = Vec::with_capacity(self.units.len());

        for unit in &self.units {
            if !provided.insert(unit.name()) {
                debug!("Unit '{}' already provided, skipping", unit.name());
                continue;
            }

            let started = Instant::now();
            let rows_written = unit.seed().await?;
            units.push(UnitReport {
                name: unit.name(),
                rows_written,
                elapsed: started.elapsed(),
            });
        }

        info!("Assembly '{}' done", self.name);

        Ok(AssemblyReport {
            assembly: self.name,
            units,
        })
    }
}
