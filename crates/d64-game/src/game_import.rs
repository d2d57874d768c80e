// game_import.rs — world primitives supplied by the engine

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

//! The simulation never touches map geometry, the blockmap or the sound
//! device directly. Everything it needs from them goes through
//! [`GameImport`], which the host installs into the `GameContext` at level
//! load. Queries that must inspect actors receive the live table by
//! reference; the core applies every result itself so reference counts and
//! state changes stay in one place.

use crate::g_local::*;

/// Snapshot of a sector's heights and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectorInfo {
    pub floorheight: Fixed,
    pub ceilingheight: Fixed,
    pub ceiling_is_sky: bool,
    pub special: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineInfo {
    pub flags: LineFlags,
    pub special: i32,
    pub tag: i32,
    pub front: SectorId,
    pub back: Option<SectorId>,
    /// Sky texture on the middle of the line.
    pub sky: bool,
}

impl LineInfo {
    pub fn is_two_sided(&self) -> bool {
        self.flags.contains(LineFlags::TWOSIDED) && self.back.is_some()
    }

    /// The sector across the line from `from`.
    pub fn other_side(&self, from: SectorId) -> Option<SectorId> {
        if self.front == from {
            self.back
        } else {
            Some(self.front)
        }
    }
}

/// Outcome of a move validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub ok: bool,
    /// Floor and ceiling at the destination; applied on success.
    pub floorz: Fixed,
    pub ceilingz: Fixed,
    /// Actor that blocked the move.
    pub blocker: Option<ActorHandle>,
    /// Line that blocked the move.
    pub blockline: Option<LineId>,
    /// The move failed only because of height and a floater could adjust.
    pub floatok: bool,
    pub tmfloorz: Fixed,
    /// Special lines touched by the attempt.
    pub spec_lines: Vec<LineId>,
}

impl MoveResult {
    pub fn passed(floorz: Fixed, ceilingz: Fixed) -> Self {
        Self { ok: true, floorz, ceilingz, tmfloorz: floorz, ..Default::default() }
    }

    pub fn blocked() -> Self {
        Self::default()
    }
}

/// What the damage primitive did with a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageResult {
    /// Target immune or already dead.
    Ignored,
    Hurt,
    /// Hurt and flinched.
    Pain,
    Killed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AimResult {
    pub slope: Fixed,
    pub linetarget: Option<ActorHandle>,
}

/// Where a hitscan trace stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAttackHit {
    Nothing,
    Sky,
    Wall { x: Fixed, y: Fixed, z: Fixed },
    Actor { target: ActorHandle, x: Fixed, y: Fixed, z: Fixed },
}

/// One crossing reported during a path traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    Line(LineId),
    Thing(ActorHandle),
}

pub trait GameImport {
    // Spatial index
    /// Link an actor at its current position; returns the sector it is in.
    fn set_thing_position(&mut self, handle: ActorHandle, actor: &Actor) -> SectorId;
    fn unset_thing_position(&mut self, handle: ActorHandle);
    fn things_in_box(&self, actors: &ActorTable, x1: Fixed, y1: Fixed, x2: Fixed, y2: Fixed) -> Vec<ActorHandle>;

    // Geometry
    /// Sector containing the point.
    fn point_sector(&self, x: Fixed, y: Fixed) -> SectorId;
    fn sector(&self, sector: SectorId) -> SectorInfo;
    fn sector_lines(&self, sector: SectorId) -> Vec<LineId>;
    fn line(&self, line: LineId) -> LineInfo;
    /// Vertical gap through a two-sided line.
    fn line_opening(&self, line: LineId) -> Fixed;

    // Movement
    fn try_move(&mut self, actors: &ActorTable, mover: ActorHandle, x: Fixed, y: Fixed) -> MoveResult;
    fn check_position(&mut self, actors: &ActorTable, thing: ActorHandle, x: Fixed, y: Fixed) -> bool;
    fn check_on_mobj(&mut self, actors: &ActorTable, thing: ActorHandle) -> Option<ActorHandle>;
    /// Telefrag whatever stands at (x, y) and take the spot for `thing`.
    /// Returns false when the spot stays blocked.
    fn teleport_move(&mut self, actors: &ActorTable, thing: ActorHandle, x: Fixed, y: Fixed) -> bool;
    /// Walk the line from (x1,y1) to (x2,y2). Returns false when `visit` aborted.
    fn path_traverse(
        &mut self,
        x1: Fixed,
        y1: Fixed,
        x2: Fixed,
        y2: Fixed,
        visit: &mut dyn FnMut(Intercept) -> bool,
    ) -> bool;

    // Sight and hitscan
    fn check_sight(&mut self, actors: &ActorTable, looker: ActorHandle, target: ActorHandle) -> bool;
    fn aim_line_attack(&mut self, actors: &ActorTable, shooter: ActorHandle, angle: Angle, zheight: Fixed, distance: Fixed) -> AimResult;
    fn line_attack(&mut self, actors: &ActorTable, shooter: ActorHandle, angle: Angle, distance: Fixed, slope: Fixed) -> LineAttackHit;

    // Combat
    fn damage_mobj(
        &mut self,
        actors: &mut ActorTable,
        target: ActorHandle,
        inflictor: Option<ActorHandle>,
        source: Option<ActorHandle>,
        damage: i32,
    ) -> DamageResult;
    /// Victims of a blast centred on `spot` and the damage each one takes.
    fn radius_attack_targets(&mut self, actors: &ActorTable, spot: ActorHandle, damage: i32) -> Vec<(ActorHandle, i32)>;

    // Sound
    /// `None` origin plays at full volume.
    fn start_sound(&mut self, origin: Option<ActorHandle>, sfx: Sfx);
    fn stop_sound(&mut self, origin: ActorHandle);
    fn remove_sound_origin(&mut self, origin: ActorHandle);

    // Line specials
    fn use_special_line(&mut self, actors: &ActorTable, user: ActorHandle, line: LineId) -> bool;
    /// Queue the death trigger special tagged by a dead actor's tid.
    fn queue_death_special(&mut self, actors: &ActorTable, thing: ActorHandle);
    fn exit_level(&mut self);
}
