//! Runtime orchestrator.
//!
//! [`CompassRuntime`] owns the catalog, the validated configuration and the
//! tool arena. Hosts call [`CompassRuntime::tick`] once per world tick for
//! every tool, [`CompassRuntime::use_tool`] when the holder uses a tool, and
//! [`CompassRuntime::render`] once per frame.

use std::collections::VecDeque;
use std::sync::Arc;

use compass_core::needle::{bearing_to_target, relative_bearing};
use compass_core::presentation;
use compass_core::tracking;
use compass_core::tuning::CraftingGrid;
use compass_core::{
    BlockId, CompassConfig, GridItem, HolderOracle, MaterialCatalog, Position, Tick, ToolId,
    ToolState, ToolTier, Tracker, TrackingOutcome, TuningRecipe, UpdateSchedule, WorldOracle,
};

use crate::error::{Result, RuntimeError};
use crate::events::CompassEvent;
use crate::frame::{NeedleFrame, UseReport};
use crate::persistence;
use crate::tools::{ToolInstance, ToolRegistry};

pub struct CompassRuntime {
    catalog: Arc<MaterialCatalog>,
    config: CompassConfig,
    schedule: UpdateSchedule,
    tools: ToolRegistry,
    events: VecDeque<CompassEvent>,
    event_capacity: usize,
}

impl CompassRuntime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &CompassConfig {
        &self.config
    }

    pub fn schedule(&self) -> UpdateSchedule {
        self.schedule
    }

    /// Adds a fresh, untuned tool of `tier`.
    pub fn spawn_tool(&mut self, tier: ToolTier) -> ToolId {
        self.restore_tool(tier, ToolState::new())
    }

    /// Adds a tool with previously persisted state.
    pub fn restore_tool(&mut self, tier: ToolTier, state: ToolState) -> ToolId {
        let spec = self.config.spec_for(tier);
        let id = self.tools.insert(ToolInstance::new(spec, state));
        tracing::debug!(tool = %id, %tier, range = spec.range, "tool registered");
        id
    }

    /// Adds a tool from its flat JSON record.
    pub fn load_tool(&mut self, tier: ToolTier, record: serde_json::Value) -> Result<ToolId> {
        let state = persistence::decode(record)?;
        Ok(self.restore_tool(tier, state))
    }

    pub fn save_tool(&self, id: ToolId) -> Result<serde_json::Value> {
        Ok(persistence::encode(&self.tool(id)?.state))
    }

    pub fn remove_tool(&mut self, id: ToolId) -> Result<ToolInstance> {
        let instance = self.tools.remove(id).ok_or(RuntimeError::UnknownTool(id))?;
        tracing::debug!(tool = %id, "tool removed");
        Ok(instance)
    }

    pub fn tool(&self, id: ToolId) -> Result<&ToolInstance> {
        self.tools.get(id).ok_or(RuntimeError::UnknownTool(id))
    }

    pub fn tool_ids(&self) -> Vec<ToolId> {
        self.tools.ids()
    }

    /// Scheduled update for one tool.
    ///
    /// Returns `None` on ticks that are not due; the state is untouched then.
    pub fn tick<W, H>(
        &mut self,
        id: ToolId,
        world: &W,
        holder: &H,
        tick: Tick,
    ) -> Result<Option<TrackingOutcome>>
    where
        W: WorldOracle + ?Sized,
        H: HolderOracle + ?Sized,
    {
        if !self.schedule.is_due(tick) {
            // Unknown ids still fail on off-ticks.
            self.tool(id)?;
            return Ok(None);
        }
        self.update(id, world, holder.position()).map(Some)
    }

    /// Scheduled update for every tool, all carried by `holder`.
    ///
    /// Returns how many tools scanned.
    pub fn tick_all<W, H>(&mut self, world: &W, holder: &H, tick: Tick) -> usize
    where
        W: WorldOracle + ?Sized,
        H: HolderOracle + ?Sized,
    {
        if !self.schedule.is_due(tick) {
            return 0;
        }
        let origin = holder.position();
        let ids = self.tools.ids();
        let mut scanned = 0;
        for id in ids {
            if self.update(id, world, origin).is_ok() {
                scanned += 1;
            }
        }
        tracing::trace!(%tick, scanned, "scheduled scan");
        scanned
    }

    /// Update outside the schedule, as when the holder uses the tool.
    pub fn force_update<W, H>(&mut self, id: ToolId, world: &W, holder: &H) -> Result<TrackingOutcome>
    where
        W: WorldOracle + ?Sized,
        H: HolderOracle + ?Sized,
    {
        self.update(id, world, holder.position())
    }

    /// Forced update plus the status line shown to the holder.
    pub fn use_tool<W, H>(&mut self, id: ToolId, world: &W, holder: &H) -> Result<UseReport>
    where
        W: WorldOracle + ?Sized,
        H: HolderOracle + ?Sized,
    {
        let outcome = self.force_update(id, world, holder)?;
        let tool = self.tool(id)?;
        let message = presentation::status_message(&tool.state, &self.catalog, holder.position());
        tracing::debug!(tool = %id, text = %message.text, "tool used");
        Ok(UseReport { outcome, message })
    }

    fn update<W>(&mut self, id: ToolId, world: &W, origin: Position) -> Result<TrackingOutcome>
    where
        W: WorldOracle + ?Sized,
    {
        let tool = self.tools.get_mut(id).ok_or(RuntimeError::UnknownTool(id))?;
        let tracker = Tracker::new(&self.catalog, tool.spec);
        let outcome = tracker.update(&mut tool.state, world, origin);
        tracing::debug!(
            tool = %id,
            %origin,
            revalidation = ?outcome.revalidation,
            transition = ?outcome.transition,
            "tool updated"
        );

        let mut events = CompassEvent::from_outcome(id, tool.state.tuned_material(), &outcome);
        // A stale tuning is reported once, not on every scan.
        if outcome.tuning_ignored && tool.tuning_reported {
            events.retain(|event| !matches!(event, CompassEvent::TuningIgnored { .. }));
        }
        tool.tuning_reported = outcome.tuning_ignored;

        for event in events {
            log_event(&event);
            self.push_event(event);
        }
        Ok(outcome)
    }

    /// Queues an event, dropping the oldest once `event_capacity` is reached.
    fn push_event(&mut self, event: CompassEvent) {
        if self.events.len() == self.event_capacity {
            if let Some(dropped) = self.events.pop_front() {
                tracing::trace!(tool = %dropped.tool(), "event queue full; oldest event dropped");
            }
        }
        self.events.push_back(event);
    }

    /// Events recorded since the last drain, oldest first.
    ///
    /// At most `event_capacity` events are kept between drains.
    pub fn drain_events(&mut self) -> Vec<CompassEvent> {
        self.events.drain(..).collect()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Locks a tool onto `material`, which must be in the catalog.
    ///
    /// The remembered target is left alone; the next update reconciles it.
    pub fn tune(&mut self, id: ToolId, material: &str) -> Result<()> {
        let material = self
            .catalog
            .by_id(material)
            .ok_or_else(|| RuntimeError::UnknownMaterial(material.to_owned()))?
            .id()
            .clone();
        let tool = self.tools.get_mut(id).ok_or(RuntimeError::UnknownTool(id))?;
        tracing::info!(tool = %id, %material, "tool tuned");
        tracking::tune(&mut tool.state, material);
        Ok(())
    }

    pub fn untune(&mut self, id: ToolId) -> Result<()> {
        let tool = self.tools.get_mut(id).ok_or(RuntimeError::UnknownTool(id))?;
        tracking::untune(&mut tool.state);
        tracing::info!(tool = %id, "tool untuned");
        Ok(())
    }

    /// Crafts the tool together with `ores` using the tuning recipe for
    /// `material`.
    ///
    /// Returns `false`, leaving the tool unchanged, when the grid does not
    /// match the recipe.
    pub fn craft_tuning(&mut self, id: ToolId, material: &str, ores: &[BlockId]) -> Result<bool> {
        let recipe = self
            .catalog
            .by_id(material)
            .map(TuningRecipe::new)
            .ok_or_else(|| RuntimeError::UnknownMaterial(material.to_owned()))?;
        let tool = self.tools.get_mut(id).ok_or(RuntimeError::UnknownTool(id))?;

        let current = tool.state.clone();
        let mut grid = CraftingGrid::new();
        grid.push(GridItem::Compass(&current));
        for &ore in ores {
            if grid.try_push(GridItem::Block(ore)).is_err() {
                return Ok(false);
            }
        }

        match recipe.assemble(&grid) {
            Some(tuned) => {
                tool.state = tuned;
                tracing::info!(tool = %id, material = %recipe.material(), "tool tuned by crafting");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Needle, colour and HUD label for one frame.
    pub fn render<H>(&mut self, id: ToolId, holder: &H, tick: Tick) -> Result<NeedleFrame>
    where
        H: HolderOracle + ?Sized,
    {
        let tool = self.tools.get_mut(id).ok_or(RuntimeError::UnknownTool(id))?;
        let bearing = tool
            .state
            .target_position()
            .map(|target| relative_bearing(bearing_to_target(holder, target), holder.facing()));
        let reading = tool.needle.sample(tick, bearing);

        Ok(NeedleFrame {
            fraction: reading.fraction(),
            color: presentation::display_color(&tool.state, &self.catalog),
            label: presentation::hud_label(&tool.state, &self.catalog),
            foil: presentation::is_foil(&tool.state, &self.catalog),
        })
    }

    pub fn tooltip(&self, id: ToolId) -> Result<Vec<String>> {
        let tool = self.tool(id)?;
        Ok(presentation::tooltip_lines(&tool.spec, &tool.state, &self.catalog))
    }
}

fn log_event(event: &CompassEvent) {
    match event {
        CompassEvent::TargetAcquired {
            tool,
            position,
            material,
        } => tracing::info!(tool = %tool, %position, %material, "target acquired"),
        CompassEvent::TargetMoved {
            tool,
            from,
            to,
            material,
        } => tracing::debug!(tool = %tool, %from, %to, %material, "target moved"),
        CompassEvent::TargetLost { tool, last } => {
            tracing::info!(tool = %tool, %last, "target lost")
        }
        CompassEvent::TuningIgnored { tool, material } => tracing::warn!(
            tool = %tool,
            %material,
            "tuned material missing from catalog; detecting by tier"
        ),
    }
}

/// Builder for [`CompassRuntime`].
pub struct RuntimeBuilder {
    catalog: Option<Arc<MaterialCatalog>>,
    config: CompassConfig,
    event_capacity: usize,
}

impl RuntimeBuilder {
    /// Events kept between drains unless overridden.
    pub const DEFAULT_EVENT_CAPACITY: usize = 100;

    fn new() -> Self {
        Self {
            catalog: None,
            config: CompassConfig::default(),
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Material catalog; defaults to the standard one.
    pub fn catalog(mut self, catalog: MaterialCatalog) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Catalog shared with other runtimes.
    pub fn shared_catalog(mut self, catalog: Arc<MaterialCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn config(mut self, config: CompassConfig) -> Self {
        self.config = config;
        self
    }

    /// Maximum number of undrained events; older ones are dropped first.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Validates the configuration and builds the runtime.
    pub fn build(self) -> Result<CompassRuntime> {
        self.config.validate()?;
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(MaterialCatalog::standard()));

        tracing::info!(
            materials = catalog.len(),
            basic_range = self.config.basic_range,
            advanced_range = self.config.advanced_range,
            master_range = self.config.master_range,
            update_interval = self.config.update_interval,
            "compass runtime ready"
        );

        Ok(CompassRuntime {
            schedule: UpdateSchedule::from_config(&self.config),
            catalog,
            config: self.config,
            tools: ToolRegistry::new(),
            events: VecDeque::with_capacity(self.event_capacity),
            event_capacity: self.event_capacity,
        })
    }
}
