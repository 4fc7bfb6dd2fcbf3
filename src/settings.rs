//! Per-group toggles for which mods' logos get rethemed. Every toggle
//! defaults to enabled, and changes only take effect on the next content
//! reload, so the lifecycle never has to react to a toggle mid-session.

use std::io::Read;

use eyre::Result;
use serde::{Deserialize, Serialize};

use crate::registry::PatchTarget;
use crate::targets;

fn default_enabled() -> bool {
    true
}

/// The user's retheme settings, one toggle per target group. Parsed from
/// host-supplied JSON; missing fields fall back to enabled.
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_enabled")]
    pub calamity: bool,

    #[serde(default = "default_enabled")]
    pub calamity_vanilla_music: bool,

    #[serde(default = "default_enabled")]
    pub infernum: bool,

    #[serde(default = "default_enabled")]
    pub catalyst: bool,

    #[serde(default = "default_enabled")]
    pub fargo: bool,

    #[serde(default = "default_enabled")]
    pub stars_above: bool,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            calamity: true,
            calamity_vanilla_music: true,
            infernum: true,
            catalyst: true,
            fargo: true,
            stars_above: true,
        }
    }
}

impl Settings {
    /// Attempts to parse the contents of `reader` as a `Settings` value.
    pub fn parse_json(reader: impl Read) -> Result<Settings> {
        // Coerce with `?`.
        Ok(serde_json::from_reader(reader)?)
    }

    /// The ordered list of targets enabled by these settings.
    pub fn targets(&self) -> Vec<PatchTarget> {
        let mut list = Vec::new();

        if self.calamity {
            list.extend_from_slice(targets::CALAMITY);
        }

        if self.calamity_vanilla_music {
            list.extend_from_slice(targets::CALAMITY_VANILLA_MUSIC);
        }

        if self.infernum {
            list.extend_from_slice(targets::INFERNUM);
        }

        if self.catalyst {
            list.extend_from_slice(targets::CATALYST);
        }

        if self.fargo {
            list.extend_from_slice(targets::FARGO);
        }

        if self.stars_above {
            list.extend_from_slice(targets::STARS_ABOVE);
        }

        list
    }
}
