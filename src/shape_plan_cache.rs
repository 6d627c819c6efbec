// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use crate::{FaceId, Feature, Font, SegmentProperties, ShapePlan, ShapePlanKey};

type BuildHasher = core::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Shape plans of every face seen so far.
///
/// Plans are found by a linear scan of their face's list and are never
/// evicted. Key lookup and plan building both happen under the lock, so a
/// plan is built at most once per key.
#[derive(Default)]
pub struct PlanCache {
    plans: Mutex<HashMap<FaceId, Vec<Arc<ShapePlan>>, BuildHasher>>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache, created on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<PlanCache> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<FaceId, Vec<Arc<ShapePlan>>, BuildHasher>> {
        // plans are only ever appended, so a poisoned map is still consistent
        self.plans.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the plan matching these arguments, building it if needed.
    pub fn get_or_create(
        &self,
        font: &Font,
        props: &SegmentProperties,
        user_features: &[Feature],
        shaper_list: Option<&[&str]>,
    ) -> Arc<ShapePlan> {
        let mut plans = self.lock();
        let key = ShapePlanKey::new(font, props, user_features, shaper_list);
        let face_plans = plans.entry(font.id()).or_default();
        if let Some(plan) = face_plans.iter().find(|plan| *plan.key() == key) {
            return plan.clone();
        }

        let plan = Arc::new(ShapePlan::from_key(font, key));
        face_plans.push(plan.clone());
        log::debug!("{:?} now has {} cached plans", font.id(), face_plans.len());
        plan
    }

    /// Number of plans across all faces.
    pub fn len(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn plans_for(&self, face_id: FaceId) -> Vec<Arc<ShapePlan>> {
        self.lock().get(&face_id).cloned().unwrap_or_default()
    }

    /// Drops the plans of faces that no longer exist, returning how many
    /// plans were removed.
    pub fn purge_dropped_faces(&self) -> usize {
        let mut plans = self.lock();
        let before: usize = plans.values().map(Vec::len).sum();
        plans.retain(|_, face_plans| face_plans.iter().any(|plan| plan.is_face_alive()));
        let removed = before - plans.values().map(Vec::len).sum::<usize>();
        if removed > 0 {
            log::debug!("purged {} plans of dropped faces", removed);
        }
        removed
    }
}

impl core::fmt::Debug for PlanCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("PlanCache").finish()
    }
}
