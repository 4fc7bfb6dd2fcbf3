//! The retheme registry: remembers every patch it installs so that unload
//! can put the host back exactly the way content-setup found it.

use std::collections::HashMap;
use std::mem;
use std::sync::Arc;

use crate::host::{AssetRef, Host, PatchHandle};
use crate::resolve::resolve_entry_point;
use crate::settings::Settings;
use crate::targets;

/// One accessor to redirect: the mod that owns it, where it lives, and the
/// asset to serve instead. The full set of known targets is fixed data in
/// [`crate::targets`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PatchTarget {
    /// Name of the mod that owns the menu type.
    pub module: &'static str,

    /// Fully-qualified name of the menu type inside that mod.
    pub type_name: &'static str,

    /// Accessor on the type whose getter returns the logo texture.
    pub accessor: &'static str,

    /// Id of the replacement texture.
    pub asset_id: &'static str,
}

/// Owns every installed patch handle and the captured original default logo.
///
/// The table is an instance field rather than a static so that independent
/// registries cannot interfere with each other. The host framework calls
/// [`activate`](RethemeRegistry::activate) once per load cycle and
/// [`deactivate`](RethemeRegistry::deactivate) once per unload; `deactivate`
/// is also safe to call unpaired or twice.
#[derive(Default)]
pub struct RethemeRegistry {
    patches: HashMap<(&'static str, &'static str), Box<dyn PatchHandle>>,
    original_logo: Option<AssetRef>,
}

impl RethemeRegistry {
    pub fn new() -> RethemeRegistry {
        RethemeRegistry::default()
    }

    /// Number of accessors currently patched.
    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    /// Swaps the loader's logo and every third-party logo enabled in
    /// `settings`.
    pub fn activate(&mut self, host: &Host, settings: &Settings) {
        self.activate_targets(host, targets::LOADER_LOGO_ASSET, &settings.targets());
    }

    /// Swaps the loader's logo for `default_asset` and patches each target's
    /// getter to return its substitute texture.
    ///
    /// Failures are per-target: a missing mod is logged at info and anything
    /// else at warn, and the rest of the batch still runs. Activation always
    /// completes.
    pub fn activate_targets(
        &mut self,
        host: &Host,
        default_asset: &str,
        targets: &[PatchTarget],
    ) {
        // Swap the loader's own logo first, remembering the original so
        // unload can put it back. A missing slot means this session keeps
        // the stock logo.
        if let Some(original) = host.default_logo.get() {
            self.original_logo = Some(original);
            host.default_logo.set(host.assets.request(default_asset));
        }

        let mut installed = 0usize;

        for target in targets {
            match resolve_entry_point(host.mods, host.reflection, target) {
                Ok(entry) => {
                    let assets = Arc::clone(&host.assets);
                    let asset_id = target.asset_id;
                    let handle = host
                        .patcher
                        .install(entry, Box::new(move || assets.request(asset_id)));

                    let key = (target.type_name, target.accessor);
                    if let Some(displaced) = self.patches.insert(key, handle) {
                        // Nothing holds the displaced handle any more; the
                        // earlier hook stays installed until process exit.
                        mem::forget(displaced);
                    }

                    installed += 1;
                }

                Err(err) if err.is_expected() => log::info!("{err}"),
                Err(err) => log::warn!("{err}"),
            }
        }

        log::info!("rethemed {installed} of {} logo accessors", targets.len());
    }

    /// Reverts every installed patch and restores the original default logo
    /// if one was captured. A no-op on an empty registry.
    pub fn deactivate(&mut self, host: &Host) {
        // Dropping each handle reverts its patch.
        self.patches.clear();

        if let Some(original) = self.original_logo.take() {
            host.default_logo.set(original);
        }
    }
}
