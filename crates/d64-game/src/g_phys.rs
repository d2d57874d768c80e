// g_phys.rs — momentum integration, friction, gravity and stacking

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

use crate::g_local::*;
use crate::game::GameContext;
use crate::game_import::MoveResult;

/// Commit a validated move: relink at the new spot and take its heights.
pub fn apply_move(ctx: &mut GameContext, h: ActorHandle, x: Fixed, y: Fixed, result: &MoveResult) {
    ctx.gi.unset_thing_position(h);
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    actor.x = x;
    actor.y = y;
    actor.floorz = result.floorz;
    actor.ceilingz = result.ceilingz;

    let sector = ctx.gi.set_thing_position(h, actor);
    actor.sector = sector;
}

/// True when a blocking line leads into sky: sky middle texture or a
/// back sector with an open sky ceiling.
fn blocked_by_sky(ctx: &GameContext, result: &MoveResult) -> bool {
    let Some(line) = result.blockline.map(|l| ctx.gi.line(l)) else {
        return false;
    };
    if line.sky {
        return true;
    }
    line.back.is_some_and(|back| ctx.gi.sector(back).ceiling_is_sky)
}

// ============================================================
// Horizontal
// ============================================================

pub fn xy_movement(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get(h) else {
        return;
    };

    let mut xmove = actor.momx & !7;
    let mut ymove = actor.momy & !7;

    while xmove != 0 || ymove != 0 {
        let Some(actor) = ctx.actors.get(h) else {
            return;
        };

        let (ptryx, ptryy);
        if xmove > MAXMOVE || ymove > MAXMOVE || xmove < -MAXMOVE || ymove < -MAXMOVE {
            ptryx = actor.x + xmove / 2;
            ptryy = actor.y + ymove / 2;
            xmove >>= 1;
            ymove >>= 1;
        } else {
            ptryx = actor.x + xmove;
            ptryy = actor.y + ymove;
            xmove = 0;
            ymove = 0;
        }

        let result = ctx.gi.try_move(&ctx.actors, h, ptryx, ptryy);
        if result.ok {
            apply_move(ctx, h, ptryx, ptryy, &result);
            continue;
        }

        ctx.blockthing = result.blocker;
        let sky = blocked_by_sky(ctx, &result);

        let Some(actor) = ctx.actors.get_mut(h) else {
            return;
        };
        if actor.flags.contains(MobjFlags::SKULLFLY) {
            actor.pending = PendingAction::SkullBash(result.blocker);
        }

        if actor.flags.contains(MobjFlags::MISSILE) {
            // explode a missile, unless it flew into the sky
            actor.pending = if sky {
                PendingAction::Remove
            } else {
                PendingAction::MissileHit(result.blocker)
            };
            return;
        }

        actor.momx = 0;
        actor.momy = 0;
        return;
    }

    apply_friction(ctx, h);
}

fn apply_friction(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get(h) else {
        return;
    };

    // no friction for missiles or lost souls ever
    if actor.flags.intersects(MobjFlags::MISSILE | MobjFlags::SKULLFLY) {
        return;
    }

    // no friction when airborne
    if actor.z > actor.floorz && !actor.blockflag.contains(BlockFlags::MOBJSTAND) {
        return;
    }

    // do not stop sliding if halfway off a step with some momentum
    if actor.flags.contains(MobjFlags::CORPSE)
        && actor.floorz != ctx.gi.sector(actor.sector).floorheight
    {
        return;
    }

    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    if actor.momx > -STOPSPEED && actor.momx < STOPSPEED && actor.momy > -STOPSPEED && actor.momy < STOPSPEED {
        actor.momx = 0;
        actor.momy = 0;
    } else {
        actor.momx = (actor.momx >> 8) * (FRICTION >> 8);
        actor.momy = (actor.momy >> 8) * (FRICTION >> 8);
    }
}

// ============================================================
// Vertical
// ============================================================

pub fn z_movement(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get(h) else {
        return;
    };

    // float down towards target if too close
    let mut float_step = 0;
    if actor.flags.contains(MobjFlags::FLOAT) {
        if let Some(target) = actor.target.and_then(|t| ctx.actors.get(t)) {
            let z = actor.z + actor.momz;
            let dist = aprox_distance(actor.x - target.x, actor.y - target.y);
            let delta = (target.z + (actor.height >> 1)) - z;

            if delta < 0 && dist < -(delta * 3) {
                float_step = -FLOATSPEED;
            } else if delta > 0 && dist < delta * 3 {
                float_step = FLOATSPEED;
            }
        }
    }

    let ceiling_sky = ctx.gi.sector(actor.sector).ceiling_is_sky;
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };

    // adjust height
    actor.z += actor.momz;
    actor.z += float_step;

    let missile = actor.flags.contains(MobjFlags::MISSILE);
    let noclip = actor.flags.contains(MobjFlags::NOCLIP);

    // clip movement
    if actor.z <= actor.floorz {
        // hit the floor
        if actor.momz < 0 {
            actor.momz = 0;
        }
        actor.z = actor.floorz;

        if missile && !noclip && !actor.kind.is_ground_fire() {
            actor.pending = PendingAction::ExplodeMissile;
            return;
        }
    } else if actor.flags.contains(MobjFlags::GRAVITY) {
        // apply gravity
        if actor.momz == 0 {
            actor.momz = -(GRAVITY >> 1);
        } else {
            actor.momz -= (GRAVITY / FRACBITS) * 3;
        }
    }

    if actor.z + actor.height > actor.ceilingz {
        // hit the ceiling
        if actor.momz > 0 {
            actor.momz = 0;
        }

        // don't explode against sky
        if missile && ceiling_sky {
            actor.pending = PendingAction::Remove;
            return;
        }

        actor.z = actor.ceilingz - actor.height;

        if missile && !noclip {
            actor.pending = PendingAction::ExplodeMissile;
            return;
        }

        if missile && !noclip {
            actor.pending = PendingAction::ExplodeMissile;
        }
    }
}

// ============================================================
// Standing on other actors
// ============================================================

/// Returns true when the actor rests on another actor this tic and
/// vertical integration must be skipped.
pub fn on_mobj_z(ctx: &mut GameContext, h: ActorHandle) -> bool {
    let Some(actor) = ctx.actors.get(h) else {
        return false;
    };
    if !actor.blockflag.contains(BlockFlags::MOBJPASS) {
        return false;
    }
    let player = actor.player;

    let onmo = ctx.gi.check_on_mobj(&ctx.actors, h);
    let Some(top) = onmo.and_then(|o| ctx.actors.get(o)).map(|o| o.z + o.height) else {
        if player.is_some() {
            if let Some(actor) = ctx.actors.get_mut(h) {
                actor.blockflag.remove(BlockFlags::MOBJSTAND);
            }
        }
        return false;
    };

    let Some(actor) = ctx.actors.get_mut(h) else {
        return false;
    };
    let Some(pnum) = player else {
        return true;
    };

    let step = top - actor.z;
    if step <= 24 * FRACUNIT {
        let p = &mut ctx.players[pnum];
        p.viewheight -= step;
        p.deltaviewheight = (VIEWHEIGHT - p.viewheight) >> 3;
        p.onground = true;

        actor.z = top;
        actor.blockflag |= BlockFlags::MOBJSTAND;
    }
    actor.momz = 0;
    true
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g_mobj::{mobj_thinker, spawn_mobj};
    use crate::game_import::{LineInfo, SectorInfo};
    use crate::test_support::*;

    #[test]
    fn test_large_moves_are_split() {
        let (mut ctx, world) = test_context();
        let mo = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        ctx.actors.get_mut(mo).unwrap().momx = 40 * FRACUNIT;

        xy_movement(&mut ctx, mo);

        // 40 -> 20 + 10 + 10
        assert_eq!(world.borrow().moves.len(), 3, "half-steps while over MAXMOVE");
        assert_eq!(ctx.actors.get(mo).unwrap().x, 40 * FRACUNIT);
    }

    #[test]
    fn test_friction_and_stop_speed() {
        let (mut ctx, _world) = test_context();
        let mo = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        ctx.actors.get_mut(mo).unwrap().momx = 8 * FRACUNIT;
        xy_movement(&mut ctx, mo);
        assert_eq!(ctx.actors.get(mo).unwrap().momx, (8 * FRACUNIT >> 8) * (FRICTION >> 8));

        ctx.actors.get_mut(mo).unwrap().momx = STOPSPEED - 8;
        xy_movement(&mut ctx, mo);
        assert_eq!(ctx.actors.get(mo).unwrap().momx, 0, "slow movers stop dead");
    }

    #[test]
    fn test_blocked_walker_stops() {
        let (mut ctx, world) = test_context();
        world.borrow_mut().wall_x = Some(16 * FRACUNIT);
        let mo = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        ctx.actors.get_mut(mo).unwrap().momx = 30 * FRACUNIT;

        xy_movement(&mut ctx, mo);
        let actor = ctx.actors.get(mo).unwrap();
        assert_eq!(actor.momx, 0);
        assert!(actor.pending.is_none());
    }

    #[test]
    fn test_missile_into_wall_queues_hit() {
        let (mut ctx, world) = test_context();
        world.borrow_mut().wall_x = Some(16 * FRACUNIT);
        let ball = spawn_mobj(&mut ctx, 0, 0, 32 * FRACUNIT, MobjType::ProjImp1);
        ctx.actors.get_mut(ball).unwrap().momx = 30 * FRACUNIT;

        xy_movement(&mut ctx, ball);
        assert_eq!(ctx.actors.get(ball).unwrap().pending, PendingAction::MissileHit(None));
    }

    #[test]
    fn test_missile_into_sky_line_is_removed() {
        let (mut ctx, world) = test_context();
        {
            let mut w = world.borrow_mut();
            let open_sky = SectorInfo { ceiling_is_sky: true, ..w.sectors[0] };
            w.sectors.push(open_sky);
            w.lines.push(LineInfo { back: Some(1), ..Default::default() });
            w.wall_x = Some(16 * FRACUNIT);
            w.wall_line = Some(0);
        }
        let ball = spawn_mobj(&mut ctx, 0, 0, 32 * FRACUNIT, MobjType::ProjImp1);
        ctx.actors.get_mut(ball).unwrap().momx = 30 * FRACUNIT;

        xy_movement(&mut ctx, ball);
        assert_eq!(ctx.actors.get(ball).unwrap().pending, PendingAction::Remove);
    }

    #[test]
    fn test_missile_explodes_on_floor_once() {
        let (mut ctx, world) = test_context();
        let ball = spawn_mobj(&mut ctx, 0, 0, 4 * FRACUNIT, MobjType::ProjImp1);
        ctx.actors.get_mut(ball).unwrap().momz = -8 * FRACUNIT;

        mobj_thinker(&mut ctx, ball);
        assert_eq!(ctx.actors.get(ball).unwrap().pending, PendingAction::ExplodeMissile);

        crate::g_mobj::run_pending(&mut ctx, ball);
        let actor = ctx.actors.get(ball).unwrap();
        assert!(actor.pending.is_none());
        assert!(!actor.flags.contains(MobjFlags::MISSILE));

        for _ in 0..3 {
            mobj_thinker(&mut ctx, ball);
        }
        let deaths = world.borrow().sounds.iter().filter(|(o, _)| *o == Some(ball)).count();
        assert_eq!(deaths, 1, "death sound plays exactly once");
    }

    #[test]
    fn test_ground_fire_slides_along_floor() {
        let (mut ctx, _world) = test_context();
        let fire = spawn_mobj(&mut ctx, 0, 0, 0, MobjType::ProjRectFire);
        ctx.actors.get_mut(fire).unwrap().momz = -FRACUNIT;
        z_movement(&mut ctx, fire);
        assert!(ctx.actors.get(fire).unwrap().pending.is_none());
    }

    #[test]
    fn test_missile_vanishes_under_sky_ceiling() {
        let (mut ctx, world) = test_context();
        world.borrow_mut().sectors[0].ceiling_is_sky = true;
        let ball = spawn_mobj(&mut ctx, 0, 0, 240 * FRACUNIT, MobjType::ProjImp1);
        ctx.actors.get_mut(ball).unwrap().momz = 16 * FRACUNIT;

        z_movement(&mut ctx, ball);
        assert_eq!(ctx.actors.get(ball).unwrap().pending, PendingAction::Remove);
    }

    #[test]
    fn test_missile_explodes_on_solid_ceiling() {
        let (mut ctx, _world) = test_context();
        let ball = spawn_mobj(&mut ctx, 0, 0, 240 * FRACUNIT, MobjType::ProjImp1);
        ctx.actors.get_mut(ball).unwrap().momz = 16 * FRACUNIT;

        z_movement(&mut ctx, ball);
        let actor = ctx.actors.get(ball).unwrap();
        assert_eq!(actor.pending, PendingAction::ExplodeMissile);
        assert_eq!(actor.z, actor.ceilingz - actor.height);
    }

    #[test]
    fn test_gravity_two_rates() {
        let (mut ctx, _world) = test_context();
        let mo = spawn_mobj(&mut ctx, 0, 0, 64 * FRACUNIT, MobjType::Imp1);

        z_movement(&mut ctx, mo);
        assert_eq!(ctx.actors.get(mo).unwrap().momz, -(GRAVITY >> 1));
        z_movement(&mut ctx, mo);
        assert_eq!(ctx.actors.get(mo).unwrap().momz, -(GRAVITY >> 1) - (GRAVITY / 16) * 3);
    }

    #[test]
    fn test_player_steps_onto_actor() {
        let (mut ctx, world) = test_context();
        let crate_ = spawn_at(&mut ctx, MobjType::Barrel, 0, 0);
        let mo = spawn_mobj(&mut ctx, 0, 0, 24 * FRACUNIT, MobjType::Player);
        ctx.actors.get_mut(mo).unwrap().player = Some(0);
        ctx.players[0].viewheight = VIEWHEIGHT;
        world.borrow_mut().on_mobj = Some(crate_);

        assert!(on_mobj_z(&mut ctx, mo));
        let top = {
            let b = ctx.actors.get(crate_).unwrap();
            b.z + b.height
        };
        let actor = ctx.actors.get(mo).unwrap();
        assert_eq!(actor.z, top);
        assert!(actor.blockflag.contains(BlockFlags::MOBJSTAND));
        assert!(ctx.players[0].onground);

        world.borrow_mut().on_mobj = None;
        assert!(!on_mobj_z(&mut ctx, mo));
        assert!(!ctx.actors.get(mo).unwrap().blockflag.contains(BlockFlags::MOBJSTAND));
    }
}
