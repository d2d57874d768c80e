// test_support.rs — open-field world used by the unit tests

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

//! A single sector, floor 0 and ceiling 256, with no lines. Walls are
//! half-planes: `wall_x` blocks every spot at or east of it and `wall_y`
//! keeps movers inside a horizontal band. Every call that has a visible
//! effect is recorded so tests can assert on it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use d64_common::config::GameOptions;

use crate::g_local::*;
use crate::g_mobj::spawn_mobj;
use crate::game::GameContext;
use crate::game_import::*;

pub(crate) const TEST_SEED: u64 = 0x0d64;

pub(crate) struct MockWorld {
    pub sectors: Vec<SectorInfo>,
    pub sector_lines: Vec<Vec<LineId>>,
    pub lines: Vec<LineInfo>,
    /// Opening per line; unlisted lines are wide open.
    pub openings: HashMap<LineId, Fixed>,
    /// Lines reported by every path traversal.
    pub traverse_lines: Vec<LineId>,

    pub wall_x: Option<Fixed>,
    pub wall_line: Option<LineId>,
    /// Open band `(low, high)` on the y axis.
    pub wall_y: Option<(Fixed, Fixed)>,
    /// Special lines handed back with every move result.
    pub spec_lines: Vec<LineId>,
    pub use_result: bool,
    pub on_mobj: Option<ActorHandle>,
    pub sight: bool,
    /// Hurt actors flinch.
    pub pain: bool,

    pub moves: Vec<(ActorHandle, Fixed, Fixed)>,
    pub unlinked: Vec<ActorHandle>,
    pub stopped: Vec<ActorHandle>,
    pub sounds: Vec<(Option<ActorHandle>, Sfx)>,
    pub damage_log: Vec<(ActorHandle, i32)>,
    pub death_specials: Vec<ActorHandle>,
    pub used_lines: Vec<LineId>,
    pub exit_level: bool,
}

impl Default for MockWorld {
    fn default() -> Self {
        Self {
            sectors: vec![SectorInfo { floorheight: 0, ceilingheight: 256 * FRACUNIT, ..Default::default() }],
            sector_lines: vec![Vec::new()],
            lines: Vec::new(),
            openings: HashMap::new(),
            traverse_lines: Vec::new(),
            wall_x: None,
            wall_line: None,
            wall_y: None,
            spec_lines: Vec::new(),
            use_result: false,
            on_mobj: None,
            sight: true,
            pain: false,
            moves: Vec::new(),
            unlinked: Vec::new(),
            stopped: Vec::new(),
            sounds: Vec::new(),
            damage_log: Vec::new(),
            death_specials: Vec::new(),
            used_lines: Vec::new(),
            exit_level: false,
        }
    }
}

impl MockWorld {
    fn wall_blocks(&self, x: Fixed, y: Fixed) -> bool {
        if self.wall_x.is_some_and(|wx| x >= wx) {
            return true;
        }
        self.wall_y.is_some_and(|(lo, hi)| y < lo || y > hi)
    }

    /// First solid actor overlapping `mover` placed at (x, y).
    fn actor_blocker(&self, actors: &ActorTable, mover: ActorHandle, x: Fixed, y: Fixed) -> Option<ActorHandle> {
        let m = actors.get(mover)?;
        if m.flags.contains(MobjFlags::NOCLIP) {
            return None;
        }
        // missiles pass through whoever fired them
        let owner = m.target.filter(|_| m.flags.contains(MobjFlags::MISSILE));

        actors
            .iter()
            .filter(|&(h, a)| h != mover && Some(h) != owner && !a.removed && a.flags.contains(MobjFlags::SOLID))
            .find(|(_, a)| {
                let reach = a.radius + m.radius;
                (a.x - x).abs() < reach && (a.y - y).abs() < reach
            })
            .map(|(h, _)| h)
    }

    fn check(&self, actors: &ActorTable, mover: ActorHandle, x: Fixed, y: Fixed) -> MoveResult {
        let sec = self.sectors[0];
        if self.wall_blocks(x, y) {
            return MoveResult { blockline: self.wall_line, spec_lines: self.spec_lines.clone(), ..MoveResult::blocked() };
        }
        if let Some(blocker) = self.actor_blocker(actors, mover, x, y) {
            return MoveResult { blocker: Some(blocker), spec_lines: self.spec_lines.clone(), ..MoveResult::blocked() };
        }
        MoveResult { spec_lines: self.spec_lines.clone(), ..MoveResult::passed(sec.floorheight, sec.ceilingheight) }
    }
}

/// Forwards every primitive to the shared `MockWorld`.
struct MockImport {
    world: Rc<RefCell<MockWorld>>,
}

impl GameImport for MockImport {
    fn set_thing_position(&mut self, _handle: ActorHandle, _actor: &Actor) -> SectorId {
        0
    }

    fn unset_thing_position(&mut self, handle: ActorHandle) {
        self.world.borrow_mut().unlinked.push(handle);
    }

    fn things_in_box(&self, actors: &ActorTable, x1: Fixed, y1: Fixed, x2: Fixed, y2: Fixed) -> Vec<ActorHandle> {
        actors
            .iter()
            .filter(|(_, a)| !a.removed)
            .filter(|(_, a)| a.x + a.radius >= x1 && a.x - a.radius <= x2 && a.y + a.radius >= y1 && a.y - a.radius <= y2)
            .map(|(h, _)| h)
            .collect()
    }

    fn point_sector(&self, _x: Fixed, _y: Fixed) -> SectorId {
        0
    }

    fn sector(&self, sector: SectorId) -> SectorInfo {
        self.world.borrow().sectors.get(sector).copied().unwrap_or_default()
    }

    fn sector_lines(&self, sector: SectorId) -> Vec<LineId> {
        self.world.borrow().sector_lines.get(sector).cloned().unwrap_or_default()
    }

    fn line(&self, line: LineId) -> LineInfo {
        self.world.borrow().lines.get(line).copied().unwrap_or_default()
    }

    fn line_opening(&self, line: LineId) -> Fixed {
        self.world.borrow().openings.get(&line).copied().unwrap_or(128 * FRACUNIT)
    }

    fn try_move(&mut self, actors: &ActorTable, mover: ActorHandle, x: Fixed, y: Fixed) -> MoveResult {
        let mut world = self.world.borrow_mut();
        world.moves.push((mover, x, y));
        world.check(actors, mover, x, y)
    }

    fn check_position(&mut self, actors: &ActorTable, thing: ActorHandle, x: Fixed, y: Fixed) -> bool {
        self.world.borrow().check(actors, thing, x, y).ok
    }

    fn check_on_mobj(&mut self, _actors: &ActorTable, _thing: ActorHandle) -> Option<ActorHandle> {
        self.world.borrow().on_mobj
    }

    fn teleport_move(&mut self, _actors: &ActorTable, _thing: ActorHandle, _x: Fixed, _y: Fixed) -> bool {
        true
    }

    fn path_traverse(
        &mut self,
        _x1: Fixed,
        _y1: Fixed,
        _x2: Fixed,
        _y2: Fixed,
        visit: &mut dyn FnMut(Intercept) -> bool,
    ) -> bool {
        let lines = self.world.borrow().traverse_lines.clone();
        lines.into_iter().all(|l| visit(Intercept::Line(l)))
    }

    fn check_sight(&mut self, _actors: &ActorTable, _looker: ActorHandle, _target: ActorHandle) -> bool {
        self.world.borrow().sight
    }

    fn aim_line_attack(&mut self, actors: &ActorTable, shooter: ActorHandle, _angle: Angle, _zheight: Fixed, _distance: Fixed) -> AimResult {
        let linetarget = actors.get(shooter).and_then(|a| a.target).filter(|&t| actors.is_live(t));
        AimResult { slope: 0, linetarget }
    }

    fn line_attack(&mut self, actors: &ActorTable, shooter: ActorHandle, _angle: Angle, _distance: Fixed, _slope: Fixed) -> LineAttackHit {
        let hit = actors
            .get(shooter)
            .and_then(|a| a.target)
            .and_then(|t| actors.get(t).map(|a| (t, a)))
            .filter(|(_, a)| !a.removed && a.flags.contains(MobjFlags::SHOOTABLE));
        match hit {
            Some((target, a)) => LineAttackHit::Actor { target, x: a.x, y: a.y, z: a.z + (a.height >> 1) },
            None => LineAttackHit::Nothing,
        }
    }

    fn damage_mobj(
        &mut self,
        actors: &mut ActorTable,
        target: ActorHandle,
        _inflictor: Option<ActorHandle>,
        _source: Option<ActorHandle>,
        damage: i32,
    ) -> DamageResult {
        let Some(actor) = actors.get_mut(target) else {
            return DamageResult::Ignored;
        };
        if !actor.flags.contains(MobjFlags::SHOOTABLE) || actor.health <= 0 {
            return DamageResult::Ignored;
        }

        let mut world = self.world.borrow_mut();
        actor.health -= damage;
        world.damage_log.push((target, damage));
        if actor.health <= 0 {
            DamageResult::Killed
        } else if world.pain {
            DamageResult::Pain
        } else {
            DamageResult::Hurt
        }
    }

    fn radius_attack_targets(&mut self, actors: &ActorTable, spot: ActorHandle, damage: i32) -> Vec<(ActorHandle, i32)> {
        let Some((sx, sy)) = actors.get(spot).map(|s| (s.x, s.y)) else {
            return Vec::new();
        };
        actors
            .iter()
            .filter(|(_, a)| !a.removed && a.flags.contains(MobjFlags::SHOOTABLE))
            .filter_map(|(h, a)| {
                let dist = ((a.x - sx).abs().max((a.y - sy).abs()) - a.radius).max(0) >> FRACBITS;
                let amount = damage - dist;
                (amount > 0).then_some((h, amount))
            })
            .collect()
    }

    fn start_sound(&mut self, origin: Option<ActorHandle>, sfx: Sfx) {
        self.world.borrow_mut().sounds.push((origin, sfx));
    }

    fn stop_sound(&mut self, origin: ActorHandle) {
        self.world.borrow_mut().stopped.push(origin);
    }

    fn remove_sound_origin(&mut self, _origin: ActorHandle) {}

    fn use_special_line(&mut self, _actors: &ActorTable, _user: ActorHandle, line: LineId) -> bool {
        let mut world = self.world.borrow_mut();
        world.used_lines.push(line);
        world.use_result
    }

    fn queue_death_special(&mut self, _actors: &ActorTable, thing: ActorHandle) {
        self.world.borrow_mut().death_specials.push(thing);
    }

    fn exit_level(&mut self) {
        self.world.borrow_mut().exit_level = true;
    }
}

pub(crate) fn test_options() -> GameOptions {
    GameOptions { seed: TEST_SEED, compat_mobjpass: true, ..Default::default() }
}

/// Fresh context over an empty open field, plus a handle on the world.
pub(crate) fn test_context() -> (GameContext, Rc<RefCell<MockWorld>>) {
    test_context_with(test_options())
}

pub(crate) fn test_context_with(options: GameOptions) -> (GameContext, Rc<RefCell<MockWorld>>) {
    let world = Rc::new(RefCell::new(MockWorld::default()));
    let gi = MockImport { world: Rc::clone(&world) };
    (GameContext::new(options, Box::new(gi)), world)
}

/// Spawn `kind` on the floor at (x, y) map units, facing east.
pub(crate) fn spawn_at(ctx: &mut GameContext, kind: MobjType, x: i32, y: i32) -> ActorHandle {
    spawn_mobj(ctx, x * FRACUNIT, y * FRACUNIT, ONFLOORZ, kind)
}
