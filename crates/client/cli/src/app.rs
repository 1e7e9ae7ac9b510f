//! Demo loop: a holder walks east through the world carrying one compass.
use anyhow::{Context, Result};
use compass_content::{CatalogLoader, ConfigLoader, DEFAULT_CONFIG_TOML};
use compass_core::{BlockPalette, FixedHolder, Position, Tick, ToolId};
use compass_runtime::{CompassRuntime, FileToolStore, NeedleFrame, VoxelWorld};

use crate::config::CliConfig;
use crate::{dirs, world};

/// Ticks the holder spends on each block.
const TICKS_PER_STEP: u64 = 10;
/// Yaw facing east (+x).
const FACING_EAST: f64 = 270.0;
/// Fixed key for the demo compass in the tool store.
const SAVED_TOOL: ToolId = ToolId(0);

pub struct DemoApp {
    config: CliConfig,
    runtime: CompassRuntime,
    world: VoxelWorld,
    store: Option<FileToolStore>,
}

impl DemoApp {
    pub fn new(config: CliConfig) -> Result<Self> {
        let palette = BlockPalette::standard();

        let catalog = match &config.catalog_path {
            Some(path) => CatalogLoader::load(path, &palette)?,
            None => CatalogLoader::standard(&palette)?,
        };
        let compass_config = match &config.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::parse(DEFAULT_CONFIG_TOML)?,
        };

        let world = world::generate(config.seed, config.world_extent, &palette, &catalog);
        let runtime = CompassRuntime::builder()
            .catalog(catalog)
            .config(compass_config)
            .build()
            .context("Failed to build compass runtime")?;

        let store = if config.enable_persistence {
            let dir = config
                .save_data_dir
                .clone()
                .unwrap_or_else(dirs::data_dir)
                .join("tools");
            Some(FileToolStore::new(&dir).with_context(|| {
                format!("Failed to open tool store at {}", dir.display())
            })?)
        } else {
            None
        };

        Ok(Self {
            config,
            runtime,
            world,
            store,
        })
    }

    pub fn run(mut self) -> Result<()> {
        let tool = self.spawn_compass()?;
        println!("Compass {} ({}):", tool, self.config.tier);
        for line in self.runtime.tooltip(tool)? {
            println!("  {line}");
        }
        println!();

        let start = Position::new(-self.config.world_extent / 2, 0, 0);
        let mut holder = FixedHolder::new(start, FACING_EAST);
        for t in 0..self.config.ticks {
            let tick = Tick(t);
            if t > 0 && t % TICKS_PER_STEP == 0 {
                holder.position = holder.position.offset(1, 0, 0);
            }

            let scanned = self.runtime.tick(tool, &self.world, &holder, tick)?;
            let frame = self.runtime.render(tool, &holder, tick)?;
            if scanned.is_some() {
                print_frame(tick, holder.position, &frame);
            }
        }

        for event in self.runtime.drain_events() {
            tracing::debug!(?event, "compass event");
        }

        let report = self.runtime.use_tool(tool, &self.world, &holder)?;
        println!();
        println!("{}", report.message.text);

        if let Some(store) = &self.store {
            store.save(SAVED_TOOL, &self.runtime.tool(tool)?.state)?;
            tracing::info!("Compass saved");
        }
        Ok(())
    }

    fn spawn_compass(&mut self) -> Result<ToolId> {
        let saved = match &self.store {
            Some(store) => store.load(SAVED_TOOL)?,
            None => None,
        };
        let tool = match saved {
            Some(state) => {
                tracing::info!("Restored saved compass");
                self.runtime.restore_tool(self.config.tier, state)
            }
            None => self.runtime.spawn_tool(self.config.tier),
        };

        if let Some(material) = &self.config.tune {
            self.runtime.tune(tool, material)?;
        }
        Ok(tool)
    }
}

fn print_frame(tick: Tick, holder: Position, frame: &NeedleFrame) {
    let label = frame.label.as_deref().unwrap_or("-");
    let needle = (frame.fraction * 360.0).round();
    println!(
        "tick {:>5}  at {:<16} needle {:>4}°  {}  {}{}",
        tick.0,
        holder.to_string(),
        needle,
        frame.color,
        label,
        if frame.foil { "  *" } else { "" },
    );
}
