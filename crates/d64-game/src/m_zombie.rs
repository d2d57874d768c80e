// m_zombie.rs — former humans: pistol, shotgun, chaingun, melee and heavy-weapon zombies

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

use crate::g_ai::{a_face_target, check_melee_range};
use crate::g_local::*;
use crate::g_mobj::set_mobj_state;
use crate::g_monster::{has_target, melee_hit, missile_attack, MissileDir};
use crate::g_weapon::{aim_line_attack, line_attack};
use crate::game::GameContext;

/// Play `sound`, turn to the target and return the facing angle with the
/// autoaim slope along it.
pub(crate) fn take_aim(ctx: &mut GameContext, h: ActorHandle, sound: Sfx) -> Option<(Angle, Fixed)> {
    if !has_target(ctx, h) {
        return None;
    }
    ctx.sound(Some(h), sound);
    a_face_target(ctx, h);
    let angle = ctx.actors.get(h)?.angle;
    let slope = aim_line_attack(ctx, h, angle, MISSILERANGE);
    Some((angle, slope))
}

pub(crate) fn spread(ctx: &mut GameContext, class: RandomClass, shift: u32) -> Angle {
    ctx.p_random_shift(class, shift) as Angle
}

pub fn a_pos_attack(ctx: &mut GameContext, h: ActorHandle) {
    let Some((angle, slope)) = take_aim(ctx, h, Sfx::Pistol) else {
        return;
    };
    let angle = angle.wrapping_add(spread(ctx, RandomClass::PosAttack, 20));
    let damage = (ctx.p_random(RandomClass::PosAttack) & 7) * 3 + 3;
    line_attack(ctx, h, angle, MISSILERANGE, slope, damage);
}

pub fn a_spos_attack(ctx: &mut GameContext, h: ActorHandle) {
    let Some((bangle, slope)) = take_aim(ctx, h, Sfx::Shotgun) else {
        return;
    };
    for _ in 0..3 {
        let angle = bangle.wrapping_add(spread(ctx, RandomClass::SPosAttack, 20));
        let damage = (ctx.p_random(RandomClass::SPosAttack) % 5) * 3 + 3;
        line_attack(ctx, h, angle, MISSILERANGE, slope, damage);
    }
}

pub fn a_cpos_attack(ctx: &mut GameContext, h: ActorHandle) {
    let Some((angle, slope)) = take_aim(ctx, h, Sfx::Pistol) else {
        return;
    };
    let angle = angle.wrapping_add(spread(ctx, RandomClass::CPosAttack, 20));
    let damage = (ctx.p_random(RandomClass::CPosAttack) % 5) * 3 + 3;
    line_attack(ctx, h, angle, MISSILERANGE, slope, damage);
}

/// Keep the chaingun spinning unless the target died or slipped out of view.
pub fn a_cpos_refire(ctx: &mut GameContext, h: ActorHandle) {
    a_face_target(ctx, h);

    if ctx.p_random(RandomClass::CPosRefire) < 40 {
        return;
    }

    let Some(actor) = ctx.actors.get(h) else {
        return;
    };
    let seestate = actor.info.seestate;
    let target = actor.target.filter(|&t| ctx.actors.get(t).is_some_and(|t| t.health > 0));
    let visible = match target {
        Some(t) => ctx.gi.check_sight(&ctx.actors, h, t),
        None => false,
    };
    if !visible {
        set_mobj_state(ctx, h, seestate);
    }
}

/// Seven pellets, each with a wide random spread on top of the shotgun jitter.
pub fn a_ssg_pos_attack(ctx: &mut GameContext, h: ActorHandle) {
    let Some((bangle, slope)) = take_aim(ctx, h, Sfx::Sht2fire) else {
        return;
    };
    for _ in 0..7 {
        let damage = 5 * (ctx.p_random(RandomClass::SsgPosAttack) % 3 + 1);
        let r1 = ctx.p_random(RandomClass::SsgPosAttack);
        let r2 = ctx.p_random(RandomClass::SsgPosAttack);
        let angle = bangle
            .wrapping_add(((r1 - r2) << 20) as Angle)
            .wrapping_add(spread(ctx, RandomClass::Shotgun, 19));
        line_attack(ctx, h, angle, MISSILERANGE, slope, damage);
    }
}

pub fn a_melee_zombie_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) || !check_melee_range(ctx, h) {
        return;
    }
    let damage = (ctx.p_random(RandomClass::MeleeZombieAttack) & 7) * 3 + 3;
    melee_hit(ctx, h, Sfx::Punch, damage);
}

pub fn a_plasma_zombie_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Left);
}

pub fn a_bfg_commando_raise(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    ctx.sound(Some(h), Sfx::Bfg);
}

pub fn a_bfg_commando_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn gunner(ctx: &mut GameContext, kind: MobjType) -> (ActorHandle, ActorHandle) {
        let mo = spawn_at(ctx, kind, 0, 0);
        let target = spawn_at(ctx, MobjType::Player, 512, 0);
        ctx.actors.set_target(mo, Some(target));
        (mo, target)
    }

    #[test]
    fn test_pistol_damage_range() {
        let (mut ctx, world) = test_context();
        let (zombie, target) = gunner(&mut ctx, MobjType::Possessed1);
        for _ in 0..4 {
            a_pos_attack(&mut ctx, zombie);
        }
        let log = world.borrow().damage_log.clone();
        assert_eq!(log.len(), 4);
        assert!(log.iter().all(|&(t, d)| t == target && (3..=24).contains(&d) && d % 3 == 0));
    }

    #[test]
    fn test_shotgun_fires_three_pellets() {
        let (mut ctx, world) = test_context();
        let (zombie, _) = gunner(&mut ctx, MobjType::Possessed2);
        a_spos_attack(&mut ctx, zombie);
        assert_eq!(world.borrow().damage_log.len(), 3);
        assert!(world.borrow().sounds.contains(&(Some(zombie), Sfx::Shotgun)));
    }

    #[test]
    fn test_super_shotgun_fires_seven_pellets() {
        let (mut ctx, world) = test_context();
        let (zombie, _) = gunner(&mut ctx, MobjType::SsgZombie);
        a_ssg_pos_attack(&mut ctx, zombie);
        let log = world.borrow().damage_log.clone();
        assert_eq!(log.len(), 7);
        assert!(log.iter().all(|&(_, d)| matches!(d, 5 | 10 | 15)));
    }

    #[test]
    fn test_no_target_no_shot() {
        let (mut ctx, world) = test_context();
        let zombie = spawn_at(&mut ctx, MobjType::Possessed1, 0, 0);
        a_pos_attack(&mut ctx, zombie);
        assert!(world.borrow().sounds.is_empty());
        assert!(world.borrow().damage_log.is_empty());
    }

    #[test]
    fn test_chaingunner_stops_when_target_dies() {
        let (mut ctx, _world) = test_context();
        let (guy, target) = gunner(&mut ctx, MobjType::ChainGuy);
        ctx.actors.get_mut(target).unwrap().health = 0;
        ctx.actors.get_mut(guy).unwrap().state = StateNum::S_CPOS_ATK4;

        // a handful of tries gets past the 40/256 keep-firing roll
        for _ in 0..32 {
            a_cpos_refire(&mut ctx, guy);
        }
        assert_ne!(ctx.actors.get(guy).unwrap().state, StateNum::S_CPOS_ATK4, "gave up firing");
    }

    #[test]
    fn test_melee_zombie_punches_in_reach() {
        let (mut ctx, world) = test_context();
        let zombie = spawn_at(&mut ctx, MobjType::MeleeZombie, 0, 0);
        let target = spawn_at(&mut ctx, MobjType::Player, 60, 0);
        ctx.actors.set_target(zombie, Some(target));
        ctx.actors.get_mut(zombie).unwrap().flags |= MobjFlags::SEETARGET;

        a_melee_zombie_attack(&mut ctx, zombie);
        assert!(world.borrow().sounds.contains(&(Some(zombie), Sfx::Punch)));
        assert_eq!(world.borrow().damage_log.len(), 1);
    }

    #[test]
    fn test_bfg_commando_fires_bfg() {
        let (mut ctx, _world) = test_context();
        let (commando, _) = gunner(&mut ctx, MobjType::BfgCommando);
        a_bfg_commando_attack(&mut ctx, commando);
        assert!(ctx.actors.iter().any(|(_, a)| a.kind == MobjType::ProjBfg));
    }
}
