//! Narrow interfaces over the pieces of the host runtime we touch: mod
//! lookup, member reflection, method patching, asset loading and the
//! loader's default-logo slot.
//!
//! Everything here is a seam. The registry only decides *what* to patch and
//! *when* to revert; the host supplies the machinery behind these traits.

use std::sync::Arc;

/// Opaque reference to a loaded mod.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModRef(pub usize);

/// Opaque reference to a type inside a mod.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TypeRef(pub usize);

/// Opaque reference to a named accessor on a type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AccessorRef(pub usize);

/// Opaque reference to an accessor's readable entry point (its getter).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EntryPointRef(pub usize);

/// Opaque handle to a loaded texture asset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AssetRef(pub usize);

/// Looks up loaded mods by name. Optional content is routinely absent, so a
/// failed lookup is not an error.
pub trait ModRegistry {
    fn try_get_mod(&self, name: &str) -> Option<ModRef>;
}

/// Late-bound member lookup inside a loaded mod.
pub trait Reflection {
    fn get_type(&self, module: ModRef, type_name: &str) -> Option<TypeRef>;

    /// Searches all visibility levels and both instance and static scope.
    fn get_accessor(&self, ty: TypeRef, name: &str) -> Option<AccessorRef>;

    fn read_entry_point(&self, accessor: AccessorRef) -> Option<EntryPointRef>;
}

/// Body installed over a logo getter. It ignores whatever the original
/// getter computed and produces the substitute texture instead. May be
/// invoked from any host thread at render time.
pub type LogoBody = Box<dyn Fn() -> AssetRef + Send + Sync>;

/// Handle for one installed patch. Dropping the handle fully reverts the
/// entry point to its pre-patch behaviour; composing correctly with patches
/// installed after this one is the installer's responsibility, not ours.
pub trait PatchHandle {}

/// Rewrites a live entry point so that invoking it runs `body` and returns
/// immediately.
pub trait PatchInstaller {
    fn install(&self, entry: EntryPointRef, body: LogoBody) -> Box<dyn PatchHandle>;
}

/// Loads texture assets by string id, immediately rather than on first use.
pub trait AssetProvider {
    fn request(&self, id: &str) -> AssetRef;
}

/// The loader's own default-logo slot. `get` returns `None` when the slot
/// could not be found this session, in which case the default logo is left
/// alone entirely.
pub trait DefaultLogoSlot {
    fn get(&self) -> Option<AssetRef>;
    fn set(&self, asset: AssetRef);
}

/// The capabilities the registry borrows from the host for one lifecycle
/// call.
pub struct Host<'h> {
    pub mods: &'h dyn ModRegistry,
    pub reflection: &'h dyn Reflection,
    pub patcher: &'h dyn PatchInstaller,
    pub assets: Arc<dyn AssetProvider + Send + Sync>,
    pub default_logo: &'h dyn DefaultLogoSlot,
}
