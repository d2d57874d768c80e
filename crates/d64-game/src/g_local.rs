// g_local.rs — Local definitions for the actor simulation

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

pub use d64_common::fixed::*;
pub use d64_common::random::RandomClass;

pub use crate::actors::{ActorHandle, ActorTable};
pub use crate::info::{MobjInfo, MobjType};
pub use crate::sounds::Sfx;
pub use crate::states::StateNum;

pub const TICRATE: i32 = 30;
pub const MAXPLAYERS: usize = 4;
pub const NUMCARDS: usize = 6;

pub const FLOATSPEED: Fixed = FRACUNIT * 4;
pub const VIEWHEIGHT: Fixed = 56 * FRACUNIT;
pub const MAXRADIUS: Fixed = 32 * FRACUNIT;
pub const GRAVITY: Fixed = FRACUNIT * 4;
pub const MAXMOVE: Fixed = 16 * FRACUNIT;
pub const STOPSPEED: Fixed = 0x1000;
pub const FRICTION: Fixed = 0xd200;

pub const USERANGE: Fixed = 70 * FRACUNIT;
pub const MELEERANGE: Fixed = 80 * FRACUNIT;
pub const ATTACKRANGE: Fixed = 16 * 64 * FRACUNIT;
pub const MISSILERANGE: Fixed = 32 * 64 * FRACUNIT;

pub const BASETHRESHOLD: i32 = 100;

/// Spawn z sentinels.
pub const ONFLOORZ: Fixed = MININT;
pub const ONCEILINGZ: Fixed = MAXINT;

pub type SectorId = usize;
pub type LineId = usize;

// ============================================================
// Flags
// ============================================================

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MobjFlags: u32 {
        const SPECIAL        = 0x0000_0001;
        const SOLID          = 0x0000_0002;
        const SHOOTABLE      = 0x0000_0004;
        const NOSECTOR       = 0x0000_0008;
        const NOBLOCKMAP     = 0x0000_0010;
        const AMBUSH         = 0x0000_0020;
        const JUSTHIT        = 0x0000_0040;
        const JUSTATTACKED   = 0x0000_0080;
        const SPAWNCEILING   = 0x0000_0100;
        const GRAVITY        = 0x0000_0200;
        const DROPOFF        = 0x0000_0400;
        const PICKUP         = 0x0000_0800;
        const NOCLIP         = 0x0000_1000;
        const TRIGTOUCH      = 0x0000_2000;
        const FLOAT          = 0x0000_4000;
        const TRIGDEATH      = 0x0000_8000;
        const MISSILE        = 0x0001_0000;
        const DROPPED        = 0x0002_0000;
        const SEETARGET      = 0x0004_0000;
        const NOBLOOD        = 0x0008_0000;
        const CORPSE         = 0x0010_0000;
        const INFLOAT        = 0x0020_0000;
        const COUNTKILL      = 0x0040_0000;
        const COUNTITEM      = 0x0080_0000;
        const SKULLFLY       = 0x0100_0000;
        const NOTDMATCH      = 0x0200_0000;
        const SHADOW         = 0x0400_0000;
        const COUNTSECRET    = 0x0800_0000;
        const FRIEND         = 0x1000_0000;
        const NIGHTMARE      = 0x2000_0000;
        const NOINFIGHTING   = 0x4000_0000;
    }
}

bitflags::bitflags! {
    /// Movement/collision state bits set by physics rather than by the type.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BlockFlags: u32 {
        const MOBJPASS     = 0x1;
        const MOBJSTAND    = 0x2;
        const MIDPOINTONLY = 0x4;
    }
}

bitflags::bitflags! {
    /// Map thing option bits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MapThingOptions: u16 {
        const EASY         = 0x0001;
        const NORMAL       = 0x0002;
        const HARD         = 0x0004;
        const AMBUSH       = 0x0008;
        const MULTI        = 0x0010;
        const SPAWN        = 0x0020;
        const ONTOUCH      = 0x0040;
        const ONDEATH      = 0x0080;
        const SECRET       = 0x0100;
        const NOINFIGHTING = 0x0200;
        const NODEATHMATCH = 0x0400;
        const NONETGAME    = 0x0800;
        const NIGHTMARE    = 0x1000;
        const FRIEND       = 0x2000;
        const DROPOFF      = 0x4000;
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LineFlags: u32 {
        const BLOCKING    = 0x0001;
        const TWOSIDED    = 0x0004;
        const SOUNDBLOCK  = 0x0040;
        /// Special is triggered when a monster walks into it.
        const USE         = 0x0200;
    }
}

// ============================================================
// Enums
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum DirType {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
    #[default]
    NoDir,
}

impl DirType {
    pub const COMPASS: [DirType; 8] = [
        DirType::East,
        DirType::NorthEast,
        DirType::North,
        DirType::NorthWest,
        DirType::West,
        DirType::SouthWest,
        DirType::South,
        DirType::SouthEast,
    ];

    pub fn from_index(i: usize) -> DirType {
        Self::COMPASS.get(i).copied().unwrap_or(DirType::NoDir)
    }

    pub fn opposite(self) -> DirType {
        match self {
            DirType::NoDir => DirType::NoDir,
            d => Self::from_index((d as usize + 4) % 8),
        }
    }

    pub fn is_diagonal(self) -> bool {
        self != DirType::NoDir && (self as usize) & 1 == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Live,
    Dead,
    Reborn,
}

/// Deferred physics callback executed at the start of the actor's next tic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingAction {
    #[default]
    None,
    SkullBash(Option<ActorHandle>),
    MissileHit(Option<ActorHandle>),
    ExplodeMissile,
    Remove,
    RespawnSpecial,
    SafeRemove,
}

impl PendingAction {
    pub fn is_none(&self) -> bool {
        matches!(self, PendingAction::None)
    }
}

// ============================================================
// Map things and players
// ============================================================

/// Placement record read from the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapThing {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub angle: i16,
    pub kind: i16,
    pub options: MapThingOptions,
    pub tid: i16,
}

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub in_game: bool,
    pub mo: Option<ActorHandle>,
    pub playerstate: PlayerState,
    pub health: i32,
    pub viewheight: Fixed,
    pub deltaviewheight: Fixed,
    pub onground: bool,
    pub pitch: Angle,
    pub cards: [bool; NUMCARDS],
    /// Bots hunt monsters instead of being hunted.
    pub bot: bool,
}

// ============================================================
// Actor
// ============================================================

/// A dynamic world object: monster, missile, pickup, decoration or player body.
#[derive(Debug, Clone)]
pub struct Actor {
    pub x: Fixed,
    pub y: Fixed,
    pub z: Fixed,
    pub momx: Fixed,
    pub momy: Fixed,
    pub momz: Fixed,
    pub angle: Angle,
    pub pitch: Angle,
    pub radius: Fixed,
    pub height: Fixed,
    pub floorz: Fixed,
    pub ceilingz: Fixed,
    pub sector: SectorId,

    pub kind: MobjType,
    pub info: &'static MobjInfo,
    pub state: StateNum,
    pub tics: i32,
    pub flags: MobjFlags,
    pub blockflag: BlockFlags,
    pub health: i32,
    pub alpha: i32,

    pub movedir: DirType,
    pub movecount: i32,
    pub reactiontime: i32,
    pub threshold: i32,
    pub lastlook: usize,

    /// Written only through `ActorTable::set_target`.
    pub target: Option<ActorHandle>,
    /// Written only through `ActorTable::set_tracer`.
    pub tracer: Option<ActorHandle>,
    pub refcount: i32,

    pub player: Option<usize>,
    pub spawnpoint: MapThing,
    pub tid: i32,
    pub pending: PendingAction,
    /// Logically dead, waiting for the last reference to clear.
    pub removed: bool,
}

impl Actor {
    pub fn new(kind: MobjType, info: &'static MobjInfo) -> Self {
        Self {
            x: 0,
            y: 0,
            z: 0,
            momx: 0,
            momy: 0,
            momz: 0,
            angle: 0,
            pitch: 0,
            radius: info.radius,
            height: info.height,
            floorz: 0,
            ceilingz: 0,
            sector: 0,
            kind,
            info,
            state: StateNum::S_NULL,
            tics: -1,
            flags: info.flags,
            blockflag: BlockFlags::empty(),
            health: info.spawnhealth,
            alpha: info.alpha,
            movedir: DirType::NoDir,
            movecount: 0,
            reactiontime: info.reactiontime,
            threshold: 0,
            lastlook: 0,
            target: None,
            tracer: None,
            refcount: 0,
            player: None,
            spawnpoint: MapThing::default(),
            tid: 0,
            pending: PendingAction::None,
            removed: false,
        }
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirtype_opposites() {
        assert_eq!(DirType::East.opposite(), DirType::West);
        assert_eq!(DirType::NorthEast.opposite(), DirType::SouthWest);
        assert_eq!(DirType::South.opposite(), DirType::North);
        assert_eq!(DirType::NoDir.opposite(), DirType::NoDir);
    }

    #[test]
    fn test_dirtype_diagonals() {
        assert!(DirType::NorthWest.is_diagonal());
        assert!(!DirType::North.is_diagonal());
        assert!(!DirType::NoDir.is_diagonal());
    }
}
