// game.rs — simulation context shared by every routine

/*
Copyright (C) 1993-1997 Id Software, Inc.
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

use d64_common::config::{GameOptions, Skill};
use d64_common::cvar::{CvarRegistry, SetOutcome};
use d64_common::logging::init_logging;
use d64_common::random::Random;
use tracing::info;

use crate::error::{SimError, SimResult};
use crate::g_effects::TimedEffect;
use crate::g_local::*;
use crate::game_import::GameImport;
use crate::info::{mobjinfo, MOBJINFO};
use crate::states::{State, STATES};

/// State and type tables the simulation reads from.
#[derive(Debug, Clone, Copy)]
pub struct Definitions {
    pub states: &'static [State],
    pub mobjinfo: &'static [MobjInfo],
}

impl Default for Definitions {
    fn default() -> Self {
        Self { states: STATES, mobjinfo: MOBJINFO }
    }
}

impl Definitions {
    /// Out-of-range states read as the terminal state.
    pub fn state(&self, s: StateNum) -> State {
        self.states.get(s.index()).copied().unwrap_or(STATES[0])
    }

    pub fn info(&self, kind: MobjType) -> &'static MobjInfo {
        self.mobjinfo.get(kind as usize).unwrap_or_else(|| mobjinfo(kind))
    }
}

/// Per-level counters.
#[derive(Debug, Clone, Default)]
pub struct LevelLocals {
    pub leveltime: i32,
    pub totalkills: i32,
    pub totalitems: i32,
    pub totalsecret: i32,
    pub killcount: i32,
    pub exit_requested: bool,
}

/// Sound flood bookkeeping for one sector.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundSector {
    pub validcount: i32,
    pub soundtraversed: i32,
    pub soundtarget: Option<ActorHandle>,
}

/// Boss brain spawn spots and rotation.
#[derive(Debug, Clone, Default)]
pub struct BrainTargets {
    pub targets: Vec<ActorHandle>,
    pub on: usize,
    pub easy: bool,
}

pub struct GameContext {
    pub actors: ActorTable,
    pub players: [Player; MAXPLAYERS],
    pub options: GameOptions,
    /// Console variables the options are rebuilt from.
    pub cvars: CvarRegistry,
    pub random: Random,
    pub defs: Definitions,
    pub gi: Box<dyn GameImport>,

    pub level: LevelLocals,
    /// Set while a save game is being restored.
    pub loading_game: bool,

    pub validcount: i32,
    pub sound_sectors: Vec<SoundSector>,

    pub effects: Vec<TimedEffect>,
    pub brain: BrainTargets,

    /// Things held back until a line special spawns them.
    pub spawnlist: Vec<MapThing>,
    pub deathmatch_starts: Vec<MapThing>,
    pub player_starts: [Option<MapThing>; MAXPLAYERS],

    /// Actor that blocked the last horizontal move of the running thinker.
    pub blockthing: Option<ActorHandle>,
    /// Range of the last hitscan; melee puffs look different.
    pub attackrange: Fixed,

    /// First fatal error raised during the running tic.
    pub fatal: Option<SimError>,
}

impl GameContext {
    pub fn new(options: GameOptions, gi: Box<dyn GameImport>) -> Self {
        init_logging(options.developer);
        let random = Random::new(options.seed);
        let mut cvars = CvarRegistry::new();
        options.register_cvars(&mut cvars);
        Self {
            actors: ActorTable::new(),
            players: Default::default(),
            options,
            cvars,
            random,
            defs: Definitions::default(),
            gi,
            level: LevelLocals::default(),
            loading_game: false,
            validcount: 0,
            sound_sectors: Vec::new(),
            effects: Vec::new(),
            brain: BrainTargets::default(),
            spawnlist: Vec::new(),
            deathmatch_starts: Vec::new(),
            player_starts: [None; MAXPLAYERS],
            blockthing: None,
            attackrange: 0,
            fatal: None,
        }
    }

    pub fn with_definitions(mut self, defs: Definitions) -> Self {
        self.defs = defs;
        self
    }

    /// Change a console variable. Unlatched toggles take effect at once;
    /// latched ones wait for `apply_latched_cvars`.
    pub fn set_cvar(&mut self, name: &str, value: &str) -> SimResult<SetOutcome> {
        let outcome = self.cvars.set(name, value);
        if outcome == SetOutcome::Applied {
            self.rebuild_options()?;
        }
        Ok(outcome)
    }

    /// Commit latched cvars; called as a level loads. A new seed restarts
    /// the random streams.
    pub fn apply_latched_cvars(&mut self) -> SimResult<()> {
        if self.cvars.apply_latched() == 0 {
            return Ok(());
        }
        let seed = self.options.seed;
        self.rebuild_options()?;
        if self.options.seed != seed {
            self.random = Random::new(self.options.seed);
        }
        info!(skill = ?self.options.skill, seed = self.options.seed, "latched options applied");
        Ok(())
    }

    fn rebuild_options(&mut self) -> SimResult<()> {
        self.options = GameOptions::from_cvars(&self.cvars).map_err(|err| SimError::BadOptions(err.to_string()))?;
        Ok(())
    }

    pub fn skill(&self) -> Skill {
        self.options.skill
    }

    pub fn state(&self, s: StateNum) -> State {
        self.defs.state(s)
    }

    pub fn info(&self, kind: MobjType) -> &'static MobjInfo {
        self.defs.info(kind)
    }

    #[inline]
    pub fn p_random(&mut self, class: RandomClass) -> i32 {
        self.random.p_random(class)
    }

    #[inline]
    pub fn p_random_shift(&mut self, class: RandomClass, shift: u32) -> i32 {
        self.random.p_random_shift(class, shift)
    }

    /// Play `sfx` from `origin`, or at full volume without one. Null sounds are dropped.
    pub fn sound(&mut self, origin: Option<ActorHandle>, sfx: Sfx) {
        if sfx.is_none() {
            return;
        }
        self.gi.start_sound(origin, sfx);
    }

    /// Keep the first fatal error of the tic.
    pub fn latch(&mut self, err: SimError) {
        tracing::error!(error = %err, "fatal simulation error");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
    }

    pub fn netgame(&self) -> bool {
        self.options.netgame
    }

    /// Skills on which monsters attack without pausing between shots.
    pub fn fast_attacks(&self) -> bool {
        self.options.skill >= Skill::Nightmare || self.options.fast_monsters
    }

    /// Whether a monster picks a fresh direction right after attacking.
    /// Only plain nightmare and fast monsters skip it.
    pub fn reroutes_after_attack(&self) -> bool {
        self.options.skill != Skill::Nightmare && !self.options.fast_monsters
    }

    /// Players currently in the game, in slot order.
    pub fn players_in_game(&self) -> usize {
        self.players.iter().filter(|p| p.in_game).count()
    }
}
