use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Shallow-merge capability: overlay a partial next state onto the current
/// one without recursing into nested values.
///
/// This backs [`SetState::merge`](crate::SetState::merge), the variant
/// whose updater returns a patch instead of the whole next state. States
/// that are open records (maps) get the impl for free; struct states
/// implement it with an `Option`-per-field patch type, one
/// [`overlay`] call per field.
pub trait Merge {
    /// The partial next state accepted by [`merge_patch`](Merge::merge_patch).
    type Patch;

    /// Overlays `patch` onto `self`: patched keys replace the current
    /// value, everything else is left alone.
    fn merge_patch(&mut self, patch: Self::Patch);
}

// Open records: patched keys replace, unknown keys are inserted.
impl<K: Eq + Hash, V> Merge for HashMap<K, V> {
    type Patch = HashMap<K, V>;

    fn merge_patch(&mut self, patch: Self::Patch) {
        self.extend(patch);
    }
}

impl<K: Ord, V> Merge for BTreeMap<K, V> {
    type Patch = BTreeMap<K, V>;

    fn merge_patch(&mut self, patch: Self::Patch) {
        self.extend(patch);
    }
}

/// One-liner for `Option`-per-field patch structs:
/// `overlay(&mut self.volume, patch.volume)`.
pub fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
