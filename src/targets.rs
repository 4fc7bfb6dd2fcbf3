//! The logo accessors we know how to retheme, grouped per settings toggle.
//! Type and accessor names have to match the target mods exactly; if a mod
//! reshuffles its menu internals, that target is skipped with a warning
//! until the table is updated.

use crate::registry::PatchTarget;

/// Replacement for the loader's own default logo.
pub const LOADER_LOGO_ASSET: &str = "relogo/textures/loader_logo_ko";

pub const CALAMITY: &[PatchTarget] = &[PatchTarget {
    module: "CalamityMod",
    type_name: "CalamityMod.MainMenu.CalamityMainMenu",
    accessor: "Logo",
    asset_id: "relogo/textures/calamity_logo_ko",
}];

pub const CALAMITY_VANILLA_MUSIC: &[PatchTarget] = &[
    PatchTarget {
        module: "UnCalamityModMusic",
        type_name: "UnCalamityModMusic.Content.Menus.ResurrectionMenu",
        accessor: "Logo",
        asset_id: "relogo/textures/calamity_logo_resurrection_ko",
    },
    PatchTarget {
        module: "UnCalamityModMusic",
        type_name: "UnCalamityModMusic.Content.Menus.MemoryMenu",
        accessor: "Logo",
        asset_id: "relogo/textures/calamity_logo_memory_ko",
    },
];

pub const INFERNUM: &[PatchTarget] = &[PatchTarget {
    module: "InfernumMode",
    type_name: "InfernumMode.Content.MainMenu.InfernumMainMenu",
    accessor: "Logo",
    asset_id: "relogo/textures/infernum_logo_ko",
}];

pub const CATALYST: &[PatchTarget] = &[PatchTarget {
    module: "CatalystMod",
    type_name: "CatalystMod.Content.MainMenus.AstrageldonStyle",
    accessor: "Logo",
    asset_id: "relogo/textures/catalyst_logo_ko",
}];

// Fargo's glow layer is a separate accessor on the same menu type.
pub const FARGO: &[PatchTarget] = &[
    PatchTarget {
        module: "FargowiltasSouls",
        type_name: "FargowiltasSouls.Content.UI.FargoMenuScreen",
        accessor: "Logo",
        asset_id: "relogo/textures/fargo_logo_ko",
    },
    PatchTarget {
        module: "FargowiltasSouls",
        type_name: "FargowiltasSouls.Content.UI.FargoMenuScreen",
        accessor: "LogoGlow",
        asset_id: "relogo/textures/fargo_logo_glow_ko",
    },
];

// Both Stars Above menus share one piece of artwork.
pub const STARS_ABOVE: &[PatchTarget] = &[
    PatchTarget {
        module: "StarsAbove",
        type_name: "StarsAbove.Menu.StarsAboveMainMenu",
        accessor: "Logo",
        asset_id: "relogo/textures/stars_above_logo_ko",
    },
    PatchTarget {
        module: "StarsAbove",
        type_name: "StarsAbove.Menu.StarsAboveMainMenu2",
        accessor: "Logo",
        asset_id: "relogo/textures/stars_above_logo_ko",
    },
];
