use crate::catalog::{Material, MaterialCatalog, MaterialId};
use crate::config::ToolSpec;
use crate::env::WorldOracle;
use crate::scan::{self, ScanHit};
use crate::state::{Position, ToolState};

/// Result of re-checking the remembered target before searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Revalidation {
    /// Nothing was remembered.
    NotTracking,
    /// The block at the remembered position still matches.
    StillValid,
    /// The block changed; target and detected material were cleared.
    Cleared,
}

/// How the remembered target changed over one update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Acquired,
    Held,
    Retargeted,
    Lost,
    StillEmpty,
}

impl Transition {
    fn between(before: Option<Position>, after: Option<Position>) -> Self {
        match (before, after) {
            (None, Some(_)) => Transition::Acquired,
            (Some(a), Some(b)) if a == b => Transition::Held,
            (Some(_), Some(_)) => Transition::Retargeted,
            (Some(_), None) => Transition::Lost,
            (None, None) => Transition::StillEmpty,
        }
    }
}

/// Summary of one revalidate/search/commit cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingOutcome {
    pub previous: Option<Position>,
    pub revalidation: Revalidation,
    /// Committed target and the material found there.
    pub hit: Option<(Position, MaterialId)>,
    pub transition: Transition,
    /// A tuning id was persisted but is not in the catalog; the update ran
    /// as an untuned tool.
    pub tuning_ignored: bool,
}

/// Runs tracking cycles for tools of one [`ToolSpec`] against one catalog.
///
/// The tracker holds no per-tool data; every call takes the tool's
/// [`ToolState`] explicitly, so one tracker serves any number of tools.
#[derive(Clone, Copy, Debug)]
pub struct Tracker<'c> {
    catalog: &'c MaterialCatalog,
    spec: ToolSpec,
}

impl<'c> Tracker<'c> {
    pub fn new(catalog: &'c MaterialCatalog, spec: ToolSpec) -> Self {
        Self { catalog, spec }
    }

    pub fn spec(&self) -> ToolSpec {
        self.spec
    }

    /// Materials this tool looks for, plus whether a stale tuning was ignored.
    ///
    /// Tuned tools look only for their tuned material, regardless of tier.
    pub fn candidates(&self, state: &ToolState) -> (Vec<&'c Material>, bool) {
        match (state.tuned_material(), state.resolved_tuning(self.catalog)) {
            (_, Some(tuned)) => (vec![tuned], false),
            (Some(_), None) => (self.tier_candidates(), true),
            (None, None) => (self.tier_candidates(), false),
        }
    }

    fn tier_candidates(&self) -> Vec<&'c Material> {
        self.catalog.materials_for_tier(self.spec.tier.level())
    }

    /// Step 1: drops the remembered target if its block no longer matches.
    pub fn revalidate<W>(&self, state: &mut ToolState, world: &W) -> Revalidation
    where
        W: WorldOracle + ?Sized,
    {
        let Some(target) = state.target_position() else {
            return Revalidation::NotTracking;
        };
        let (candidates, _) = self.candidates(state);
        if scan::first_match(world, target, &candidates).is_some() {
            Revalidation::StillValid
        } else {
            state.clear_target();
            Revalidation::Cleared
        }
    }

    /// Step 2: searches the cube around `origin` without touching state.
    pub fn search<W>(&self, state: &ToolState, world: &W, origin: Position) -> Option<ScanHit<'c>>
    where
        W: WorldOracle + ?Sized,
    {
        let (candidates, _) = self.candidates(state);
        scan::find_best(world, origin, self.spec.range, &candidates)
    }

    /// Full cycle: revalidate, search, commit.
    ///
    /// Used for both scheduled ticks and forced updates; the caller decides
    /// when to invoke it.
    pub fn update<W>(&self, state: &mut ToolState, world: &W, origin: Position) -> TrackingOutcome
    where
        W: WorldOracle + ?Sized,
    {
        let previous = state.target_position();
        let revalidation = self.revalidate(state, world);

        let (candidates, tuning_ignored) = self.candidates(state);
        let found = scan::find_best(world, origin, self.spec.range, &candidates);

        let hit = match found {
            Some(hit) => {
                state.set_target(hit.position, hit.material.id().clone());
                Some((hit.position, hit.material.id().clone()))
            }
            None => {
                state.clear_target();
                None
            }
        };

        TrackingOutcome {
            previous,
            revalidation,
            transition: Transition::between(previous, state.target_position()),
            hit,
            tuning_ignored,
        }
    }

    /// Positions in range matching this tool's candidates.
    pub fn count_in_range<W>(&self, state: &ToolState, world: &W, origin: Position) -> usize
    where
        W: WorldOracle + ?Sized,
    {
        let (candidates, _) = self.candidates(state);
        scan::count_matches(world, origin, self.spec.range, &candidates)
    }
}

/// Locks a tool onto one material.
///
/// Only metadata is written; the remembered target is left as-is and the
/// next update reconciles it.
pub fn tune(state: &mut ToolState, material: impl Into<MaterialId>) {
    state.set_tuned(Some(material.into()));
}

/// Returns a tool to tier-based detection. The target is left as-is.
pub fn untune(state: &mut ToolState) {
    state.set_tuned(None);
}
