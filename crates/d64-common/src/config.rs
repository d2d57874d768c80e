// config.rs — game options from cvars or RON

/*
Copyright (C) 2007-2012 Samuel Villarreal

This program is free software; you can redistribute it and/or
modify it under the terms of the GNU General Public License
as published by the Free Software Foundation; either version 2
of the License, or (at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.

See the GNU General Public License for more details.
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cvar::CvarRegistry;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game options: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to write game options: {0}")]
    Write(#[from] ron::Error),
    #[error("invalid skill level {0}")]
    InvalidSkill(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Skill {
    Baby,
    Easy,
    #[default]
    Medium,
    Hard,
    Nightmare,
    DoomSlayer,
    UltraNightmare,
}

impl Skill {
    pub fn from_index(index: i32) -> Option<Skill> {
        Some(match index {
            0 => Skill::Baby,
            1 => Skill::Easy,
            2 => Skill::Medium,
            3 => Skill::Hard,
            4 => Skill::Nightmare,
            5 => Skill::DoomSlayer,
            6 => Skill::UltraNightmare,
            _ => return None,
        })
    }

    pub fn index(self) -> i32 {
        self as i32
    }
}

/// Session-wide toggles read by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub skill: Skill,
    pub netgame: bool,
    pub deathmatch: bool,
    pub nomonsters: bool,
    pub respawn_monsters: bool,
    pub respawn_specials: bool,
    pub fast_monsters: bool,
    pub compat_mobjpass: bool,
    pub no_spawn_sound: bool,
    pub complex_doom64: bool,
    pub cacodemon_alternative: bool,
    pub developer: bool,
    pub seed: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            skill: Skill::Medium,
            netgame: false,
            deathmatch: false,
            nomonsters: false,
            respawn_monsters: false,
            respawn_specials: false,
            fast_monsters: false,
            compat_mobjpass: true,
            no_spawn_sound: false,
            complex_doom64: false,
            cacodemon_alternative: false,
            developer: false,
            seed: 0,
        }
    }
}

// (cvar name, latched)
const BOOL_CVARS: &[(&str, bool)] = &[
    ("netgame", true),
    ("deathmatch", true),
    ("nomonsters", true),
    ("respawnmonsters", true),
    ("respawnitems", true),
    ("fastmonsters", true),
    ("compat_mobjpass", false),
    ("m_nospawnsound", false),
    ("m_complexdoom64", true),
    ("m_cacodemonalternative", true),
    ("developer", false),
];

impl GameOptions {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    fn bool_fields(&self) -> [bool; 11] {
        [
            self.netgame,
            self.deathmatch,
            self.nomonsters,
            self.respawn_monsters,
            self.respawn_specials,
            self.fast_monsters,
            self.compat_mobjpass,
            self.no_spawn_sound,
            self.complex_doom64,
            self.cacodemon_alternative,
            self.developer,
        ]
    }

    /// Register every option cvar with this value as the default.
    pub fn register_cvars(&self, cvars: &mut CvarRegistry) {
        cvars.register("skill", &self.skill.index().to_string(), true);
        for ((name, latched), value) in BOOL_CVARS.iter().zip(self.bool_fields()) {
            cvars.register(name, if value { "1" } else { "0" }, *latched);
        }
        cvars.register("rng_seed", &self.seed.to_string(), true);
    }

    pub fn from_cvars(cvars: &CvarRegistry) -> Result<Self, ConfigError> {
        let skill_index = cvars.value("skill") as i32;
        let skill = Skill::from_index(skill_index).ok_or(ConfigError::InvalidSkill(skill_index))?;
        let flag = |name: &str| cvars.value(name) == 1.0;
        Ok(Self {
            skill,
            netgame: flag("netgame"),
            deathmatch: flag("deathmatch"),
            nomonsters: flag("nomonsters"),
            respawn_monsters: flag("respawnmonsters"),
            respawn_specials: flag("respawnitems"),
            fast_monsters: flag("fastmonsters"),
            compat_mobjpass: flag("compat_mobjpass"),
            no_spawn_sound: flag("m_nospawnsound"),
            complex_doom64: flag("m_complexdoom64"),
            cacodemon_alternative: flag("m_cacodemonalternative"),
            developer: flag("developer"),
            seed: cvars.string("rng_seed").trim().parse().unwrap_or(0),
        })
    }

    /// Nightmare turns on monster respawning regardless of the toggle.
    pub fn monsters_respawn(&self) -> bool {
        self.respawn_monsters || self.skill == Skill::Nightmare
    }
}

// ============================================================
// Tests
// ============================================================
