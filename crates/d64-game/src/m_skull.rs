// m_skull.rs — lost souls and stalkers

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

use crate::g_ai::a_face_target;
use crate::g_local::*;
use crate::g_mobj::set_mobj_state;
use crate::g_monster::{chase_or_raise, has_target, homing_missile, missile_attack, MissileDir};
use crate::game::GameContext;

const SKULLSPEED: Fixed = 40 * FRACUNIT;

/// Fly headlong at the target. The charge ends in `skull_bash` when it
/// hits something.
pub fn skull_attack(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    if actor.target.is_none() {
        return;
    }
    actor.flags |= MobjFlags::SKULLFLY;
    let sound = actor.info.attacksound;

    ctx.sound(Some(h), sound);
    a_face_target(ctx, h);

    let Some(actor) = ctx.actors.get(h) else {
        return;
    };
    let Some(dest) = actor.target.and_then(|t| ctx.actors.get(t)) else {
        return;
    };
    let (dx, dy, dz, dheight) = (dest.x, dest.y, dest.z, dest.height);

    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    actor.momx = fixed_mul(SKULLSPEED, cos_angle(actor.angle));
    actor.momy = fixed_mul(SKULLSPEED, sin_angle(actor.angle));

    let dist = (aprox_distance(dx - actor.x, dy - actor.y) / SKULLSPEED).max(1);
    actor.momz = (dz + (dheight >> 1) - actor.z) / dist;
}

pub fn a_skull_set_alpha(ctx: &mut GameContext, h: ActorHandle) {
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.alpha >>= 2;
    }
}

/// Nightmare souls bring the dead back while they hunt.
pub fn a_nightmare_lost_soul_chase(ctx: &mut GameContext, h: ActorHandle) {
    chase_or_raise(ctx, h, StateNum::S_SKUG_HEAL1);
}

// ============================================================
// Stalker
// ============================================================

pub fn a_stalker_decide(ctx: &mut GameContext, h: ActorHandle) {
    if ctx.p_random(RandomClass::StalkerDecide) < 85 {
        set_mobj_state(ctx, h, StateNum::S_STLK_ATK1_1);
    } else if ctx.p_random(RandomClass::StalkerDecide) < 170 {
        set_mobj_state(ctx, h, StateNum::S_STLK_ATK2_1);
    } else if ctx.p_random(RandomClass::StalkerDecide) < 256 {
        set_mobj_state(ctx, h, StateNum::S_STLK_ATK3_1);
    }
}

pub fn a_stalker_attack1(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Straight);
}

pub fn a_stalker_attack2(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    homing_missile(ctx, h, MissileDir::Straight, MobjType::ProjStalker2, 32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn test_skull_charge_aims_at_target_middle() {
        let (mut ctx, _world) = test_context();
        let skull = spawn_at(&mut ctx, MobjType::Skull, 0, 0);
        let target = spawn_at(&mut ctx, MobjType::Player, 400, 0);
        ctx.actors.get_mut(skull).unwrap().z = 100 * FRACUNIT;
        ctx.actors.set_target(skull, Some(target));

        skull_attack(&mut ctx, skull);
        let actor = ctx.actors.get(skull).unwrap();
        assert!(actor.flags.contains(MobjFlags::SKULLFLY));
        assert_eq!(actor.momx, fixed_mul(SKULLSPEED, cos_angle(0)));
        // 10 tics to cover 400 units, dropping to the player's middle
        assert_eq!(actor.momz, (28 * FRACUNIT - 100 * FRACUNIT) / 10);
    }

    #[test]
    fn test_skull_without_target_stays_put() {
        let (mut ctx, _world) = test_context();
        let skull = spawn_at(&mut ctx, MobjType::Skull, 0, 0);
        skull_attack(&mut ctx, skull);
        let actor = ctx.actors.get(skull).unwrap();
        assert!(!actor.flags.contains(MobjFlags::SKULLFLY));
        assert_eq!(actor.momx, 0);
    }

    #[test]
    fn test_stalker_decide_picks_an_attack() {
        let (mut ctx, _world) = test_context();
        let stalker = spawn_at(&mut ctx, MobjType::Stalker, 0, 0);
        let target = spawn_at(&mut ctx, MobjType::Player, 400, 0);
        ctx.actors.set_target(stalker, Some(target));

        let attacks = [StateNum::S_STLK_ATK1_1, StateNum::S_STLK_ATK2_1, StateNum::S_STLK_ATK3_1];
        for _ in 0..16 {
            a_stalker_decide(&mut ctx, stalker);
            let state = ctx.actors.get(stalker).unwrap().state;
            assert!(attacks.contains(&state), "unexpected state {state:?}");
        }
    }

    #[test]
    fn test_stalker_homing_shot_tracks() {
        let (mut ctx, _world) = test_context();
        let stalker = spawn_at(&mut ctx, MobjType::Stalker, 0, 0);
        let target = spawn_at(&mut ctx, MobjType::Player, 400, 0);
        ctx.actors.set_target(stalker, Some(target));

        a_stalker_attack2(&mut ctx, stalker);
        let (_, shot) = ctx.actors.iter().find(|(_, a)| a.kind == MobjType::ProjStalker2).expect("fired");
        assert_eq!(shot.tracer, Some(target));
    }
}
