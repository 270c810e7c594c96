use tracing::{debug, debug_span};

use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::solid::Solid;

/// Builds the first solid of a pipeline.
pub type SeedFn = fn(&ResolvedConfig) -> Result<Solid>;

/// One construction step: takes the accumulated solid and returns the next.
pub type StageFn = fn(&ResolvedConfig, Solid) -> Result<Solid>;

/// A named construction step.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub apply: StageFn,
}

/// An ordered list of construction stages folded over a seed solid.
#[derive(Debug, Clone)]
pub struct Pipeline {
    part: &'static str,
    seed: SeedFn,
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Creates a pipeline for `part` starting from `seed`.
    #[must_use]
    pub fn new(part: &'static str, seed: SeedFn) -> Self {
        Self {
            part,
            seed,
            stages: Vec::new(),
        }
    }

    /// Appends a stage.
    #[must_use]
    pub fn stage(mut self, name: &'static str, apply: StageFn) -> Self {
        self.stages.push(Stage { name, apply });
        self
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name)
    }

    /// Runs every stage.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the seed or a stage.
    pub fn run(&self, config: &ResolvedConfig) -> Result<Solid> {
        self.run_through(config, self.stages.len())
    }

    /// Runs the seed and the stages up to and including `stage`, or every
    /// stage if no stage has that name.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the seed or a stage.
    pub fn run_until(&self, config: &ResolvedConfig, stage: &str) -> Result<Solid> {
        let count = self
            .stages
            .iter()
            .position(|s| s.name == stage)
            .map_or(self.stages.len(), |i| i + 1);
        self.run_through(config, count)
    }

    fn run_through(&self, config: &ResolvedConfig, count: usize) -> Result<Solid> {
        let _span = debug_span!("pipeline", part = self.part).entered();
        let mut solid = (self.seed)(config)?;
        for stage in self.stages.iter().take(count) {
            debug!(stage = stage.name, "applying stage");
            solid = (stage.apply)(config, solid)?;
        }
        Ok(solid)
    }
}
