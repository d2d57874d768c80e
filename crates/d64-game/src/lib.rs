#![allow(clippy::too_many_arguments, clippy::collapsible_if, clippy::collapsible_else_if,
         clippy::manual_range_contains, clippy::comparison_chain, clippy::identity_op,
         clippy::needless_range_loop, clippy::single_match, clippy::type_complexity)]
// Doom64 actor simulation: map objects, their state machines, monster AI,
// movement physics and the attack routines, driven one tic at a time over
// a world supplied through `GameImport`.

/*
Copyright (C) 1993-1997 Id Software, Inc.
Copyright (C) 1997 Midway Home Entertainment, Inc
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

pub mod actors;
pub mod error;
pub mod dispatch;
pub mod game_import;
pub mod game;
pub mod g_local;
pub mod info;
pub mod states;
pub mod sounds;
pub mod g_effects;
pub mod g_mobj;
pub mod g_phys;
pub mod g_combat;
pub mod g_weapon;
pub mod g_ai;
pub mod g_monster;
pub mod g_spawn;
pub mod g_main;
pub mod m_move;
pub mod m_misc;
pub mod m_zombie;
pub mod m_demon;
pub mod m_bruiser;
pub mod m_skull;
pub mod m_pain;
pub mod m_fatso;
pub mod m_cyber;
pub mod m_spider;
pub mod m_rect;
pub mod m_vile;
pub mod m_skel;
pub mod m_brain;

#[cfg(test)]
mod test_support;

pub use error::{SimError, SimResult};
pub use game::GameContext;
pub use game_import::GameImport;
