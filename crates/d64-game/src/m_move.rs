// m_move.rs — monster walking and chase direction search

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

use crate::error::{SimError, SimResult};
use crate::g_local::*;
use crate::g_phys::apply_move;
use crate::game::GameContext;

pub(crate) const XSPEED: [Fixed; 8] = [FRACUNIT, 47000, 0, -47000, -FRACUNIT, -47000, 0, 47000];
pub(crate) const YSPEED: [Fixed; 8] = [0, 47000, FRACUNIT, 47000, 0, -47000, -FRACUNIT, -47000];

const DIAGS: [DirType; 4] = [DirType::NorthWest, DirType::NorthEast, DirType::SouthWest, DirType::SouthEast];

/// Step once along `movedir`. Returns false if the move is blocked.
pub fn p_move(ctx: &mut GameContext, h: ActorHandle) -> bool {
    let Some(actor) = ctx.actors.get(h) else {
        return false;
    };
    if actor.movedir == DirType::NoDir {
        return false;
    }

    // can't walk while falling
    if actor.flags.contains(MobjFlags::GRAVITY) && actor.floorz != actor.z {
        return false;
    }

    let dir = actor.movedir as usize;
    let speed = actor.info.speed;
    let tryx = actor.x + speed * XSPEED[dir];
    let tryy = actor.y + speed * YSPEED[dir];

    let result = ctx.gi.try_move(&ctx.actors, h, tryx, tryy);
    if result.ok {
        apply_move(ctx, h, tryx, tryy, &result);
        return true;
    }

    let Some(actor) = ctx.actors.get_mut(h) else {
        return false;
    };

    // must adjust height
    if actor.flags.contains(MobjFlags::FLOAT) && result.floatok {
        if actor.z < result.tmfloorz {
            actor.z += FLOATSPEED;
        } else {
            actor.z -= FLOATSPEED;
        }
        return true;
    }

    if result.spec_lines.is_empty() {
        return false;
    }

    actor.movedir = DirType::NoDir;

    // open any specials
    let mut good = false;
    for &line in result.spec_lines.iter().rev() {
        if ctx.gi.line(line).flags.contains(LineFlags::USE) && ctx.gi.use_special_line(&ctx.actors, h, line) {
            good = true;
        }
    }
    good
}

/// Move along the current direction and pick a fresh step count.
pub fn try_walk(ctx: &mut GameContext, h: ActorHandle) -> bool {
    if !p_move(ctx, h) {
        return false;
    }

    let count = ctx.p_random(RandomClass::TryWalk) & 7;
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.movecount = count;
    }
    true
}

fn set_movedir(ctx: &mut GameContext, h: ActorHandle, dir: DirType) {
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.movedir = dir;
    }
}

fn walk_toward(ctx: &mut GameContext, h: ActorHandle, dir: DirType) -> bool {
    set_movedir(ctx, h, dir);
    try_walk(ctx, h)
}

/// Pick a new direction toward the target. The way back is only taken
/// when nothing else works.
pub fn new_chase_dir(ctx: &mut GameContext, h: ActorHandle) -> SimResult<()> {
    let Some(actor) = ctx.actors.get(h) else {
        return Ok(());
    };
    let Some(target) = actor.target.and_then(|t| ctx.actors.get(t)) else {
        return Err(SimError::NoChaseTarget { index: h.index() });
    };

    let olddir = actor.movedir;
    let turnaround = olddir.opposite();

    let deltax = target.x - actor.x;
    let deltay = target.y - actor.y;

    let mut d = [DirType::NoDir; 3];
    if deltax > 10 * FRACUNIT {
        d[1] = DirType::East;
    } else if deltax < -10 * FRACUNIT {
        d[1] = DirType::West;
    }

    if deltay < -10 * FRACUNIT {
        d[2] = DirType::South;
    } else if deltay > 10 * FRACUNIT {
        d[2] = DirType::North;
    }

    // try direct route
    if d[1] != DirType::NoDir && d[2] != DirType::NoDir {
        let diag = DIAGS[(((deltay < 0) as usize) << 1) + (deltax > 0) as usize];
        set_movedir(ctx, h, diag);
        if diag != turnaround && try_walk(ctx, h) {
            return Ok(());
        }
    }

    // try other directions
    if ctx.p_random(RandomClass::NewChase) > 200 || deltay.wrapping_abs() > deltax.wrapping_abs() {
        d.swap(1, 2);
    }

    if d[1] == turnaround {
        d[1] = DirType::NoDir;
    }
    if d[2] == turnaround {
        d[2] = DirType::NoDir;
    }

    for &dir in &d[1..] {
        if dir != DirType::NoDir && walk_toward(ctx, h, dir) {
            // either moved forward or attacked
            return Ok(());
        }
    }

    // there is no direct path to the player, so pick another direction
    if olddir != DirType::NoDir && walk_toward(ctx, h, olddir) {
        return Ok(());
    }

    // randomly determine direction of search
    let mut order = DirType::COMPASS;
    if ctx.p_random(RandomClass::NewChaseDir) & 1 == 0 {
        order.reverse();
    }
    for dir in order {
        if dir != turnaround && walk_toward(ctx, h, dir) {
            return Ok(());
        }
    }

    if turnaround != DirType::NoDir && walk_toward(ctx, h, turnaround) {
        return Ok(());
    }

    // can not move
    set_movedir(ctx, h, DirType::NoDir);
    Ok(())
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_import::LineInfo;
    use crate::test_support::*;
    use proptest::prelude::*;

    fn chaser(ctx: &mut GameContext, tx: i32, ty: i32) -> ActorHandle {
        let mo = spawn_at(ctx, MobjType::Demon1, 0, 0);
        let target = spawn_at(ctx, MobjType::Player, tx, ty);
        ctx.actors.set_target(mo, Some(target));
        mo
    }

    #[test]
    fn test_axis_aligned_targets_walk_straight() {
        for (tx, ty, dir) in [
            (512, 0, DirType::East),
            (-512, 0, DirType::West),
            (0, 512, DirType::North),
            (0, -512, DirType::South),
        ] {
            let (mut ctx, _world) = test_context();
            let mo = chaser(&mut ctx, tx, ty);
            new_chase_dir(&mut ctx, mo).unwrap();
            assert_eq!(ctx.actors.get(mo).unwrap().movedir, dir, "target at ({tx}, {ty})");
        }
    }

    #[test]
    fn test_diagonal_target_walks_diagonally() {
        let (mut ctx, _world) = test_context();
        let mo = chaser(&mut ctx, 512, -512);
        new_chase_dir(&mut ctx, mo).unwrap();
        assert_eq!(ctx.actors.get(mo).unwrap().movedir, DirType::SouthEast);
    }

    #[test]
    fn test_reverse_only_as_last_resort() {
        let (mut ctx, world) = test_context();
        // everything east of x = 1 is blocked
        world.borrow_mut().wall_x = Some(FRACUNIT);
        let mo = chaser(&mut ctx, 512, 0);
        ctx.actors.get_mut(mo).unwrap().movedir = DirType::East;

        new_chase_dir(&mut ctx, mo).unwrap();
        let dir = ctx.actors.get(mo).unwrap().movedir;
        assert_ne!(dir, DirType::West, "turnaround while other directions work");
        assert!(matches!(dir, DirType::North | DirType::South | DirType::NorthWest | DirType::SouthWest));
    }

    #[test]
    fn test_boxed_in_actor_turns_around() {
        let (mut ctx, world) = test_context();
        world.borrow_mut().wall_x = Some(FRACUNIT);
        world.borrow_mut().wall_y = Some((-FRACUNIT, FRACUNIT));
        let mo = chaser(&mut ctx, 512, 0);
        ctx.actors.get_mut(mo).unwrap().movedir = DirType::East;

        new_chase_dir(&mut ctx, mo).unwrap();
        assert_eq!(ctx.actors.get(mo).unwrap().movedir, DirType::West);
    }

    #[test]
    fn test_no_target_is_fatal() {
        let (mut ctx, _world) = test_context();
        let mo = spawn_at(&mut ctx, MobjType::Demon1, 0, 0);
        assert_eq!(new_chase_dir(&mut ctx, mo), Err(SimError::NoChaseTarget { index: mo.index() }));
    }

    #[test]
    fn test_falling_walker_cannot_step() {
        let (mut ctx, _world) = test_context();
        let mo = spawn_at(&mut ctx, MobjType::Demon1, 0, 0);
        let actor = ctx.actors.get_mut(mo).unwrap();
        actor.movedir = DirType::East;
        actor.z = 32 * FRACUNIT;
        assert!(!p_move(&mut ctx, mo));
    }

    #[test]
    fn test_blocked_step_triggers_use_lines() {
        let (mut ctx, world) = test_context();
        {
            let mut w = world.borrow_mut();
            w.wall_x = Some(FRACUNIT);
            w.lines.push(LineInfo { flags: LineFlags::USE, special: 1, ..Default::default() });
            w.spec_lines = vec![0];
            w.use_result = true;
        }
        let mo = spawn_at(&mut ctx, MobjType::Demon1, 0, 0);
        ctx.actors.get_mut(mo).unwrap().movedir = DirType::East;

        assert!(p_move(&mut ctx, mo), "opening a door counts as a move");
        assert_eq!(world.borrow().used_lines, vec![0]);
        assert_eq!(ctx.actors.get(mo).unwrap().movedir, DirType::NoDir);
    }

    proptest! {
        #[test]
        fn prop_chase_never_reverses_in_open_field(tx in -2000i32..2000, ty in -2000i32..2000, old in 0usize..8) {
            prop_assume!(tx.abs() > 128 || ty.abs() > 128);
            let (mut ctx, _world) = test_context();
            let mo = chaser(&mut ctx, tx, ty);
            let olddir = DirType::from_index(old);
            ctx.actors.get_mut(mo).unwrap().movedir = olddir;

            new_chase_dir(&mut ctx, mo).unwrap();
            let dir = ctx.actors.get(mo).unwrap().movedir;
            prop_assert_ne!(dir, olddir.opposite());
            prop_assert_ne!(dir, DirType::NoDir);
        }
    }
}
