// m_pain.rs — pain elementals

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

//! Three breeds share one body plan: the classic one spits lost souls, the
//! stalker breed spits stalkers, and the nightmare breed spits nightmare
//! souls, raises the dead and can switch to fireballs.

use crate::g_ai::{a_face_target, a_on_death_trigger};
use crate::g_local::*;
use crate::g_mobj::set_mobj_state;
use crate::g_monster::{chase_or_raise, has_target, missile_attack, shoot_soul, MissileDir};
use crate::game::GameContext;
use crate::m_misc::a_fall;

/// Half-spread of the two-soul volley.
const SOUL_SPREAD: Angle = 0x1555_0000;

#[derive(Debug, Clone, Copy)]
struct Breed {
    soul: MobjType,
    charge: Option<StateNum>,
}

const CLASSIC: Breed = Breed { soul: MobjType::Skull, charge: None };
const STALKER: Breed = Breed { soul: MobjType::Stalker, charge: Some(StateNum::S_STLK_ATK3_1) };
const NIGHTMARE: Breed = Breed { soul: MobjType::NightmareLostSoul, charge: None };

fn volley(ctx: &mut GameContext, h: ActorHandle, breed: Breed) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    let Some(angle) = ctx.actors.get(h).map(|a| a.angle) else {
        return;
    };
    shoot_soul(ctx, h, angle.wrapping_add(SOUL_SPREAD), breed.soul, breed.charge);
    shoot_soul(ctx, h, angle.wrapping_sub(SOUL_SPREAD), breed.soul, breed.charge);
}

/// Drop dead and let three souls loose.
fn death_burst(ctx: &mut GameContext, h: ActorHandle, breed: Breed) {
    a_fall(ctx, h);
    let Some(angle) = ctx.actors.get(h).map(|a| a.angle) else {
        return;
    };
    for turn in [ANG90, ANG180, ANG270] {
        shoot_soul(ctx, h, angle.wrapping_add(turn), breed.soul, breed.charge);
    }
    a_on_death_trigger(ctx, h);
}

pub fn a_pain_attack(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, CLASSIC);
}

pub fn a_pain_die(ctx: &mut GameContext, h: ActorHandle) {
    death_burst(ctx, h, CLASSIC);
}

pub fn a_pain_death_event(ctx: &mut GameContext, h: ActorHandle) {
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.alpha -= 0x3f;
    }
}

pub fn a_pain_elemental_stalker_attack(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, STALKER);
}

pub fn a_pain_elemental_stalker_die(ctx: &mut GameContext, h: ActorHandle) {
    death_burst(ctx, h, STALKER);
}

pub fn a_pain_elemental_nightmare_decide(ctx: &mut GameContext, h: ActorHandle) {
    if ctx.p_random(RandomClass::PainElementalNightmareDecide) < 128 {
        set_mobj_state(ctx, h, StateNum::S_PAIG_ATK1_1);
    } else if ctx.p_random(RandomClass::PainElementalNightmareDecide) < 256 {
        set_mobj_state(ctx, h, StateNum::S_PAIG_ATK2_1);
    }
}

pub fn a_pain_elemental_nightmare_attack(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, NIGHTMARE);
}

pub fn a_pain_elemental_nightmare_attack2(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Right);
    missile_attack(ctx, h, MissileDir::Left);
}

pub fn a_pain_elemental_nightmare_die(ctx: &mut GameContext, h: ActorHandle) {
    death_burst(ctx, h, NIGHTMARE);
}

pub fn a_pain_elemental_nightmare_chase(ctx: &mut GameContext, h: ActorHandle) {
    chase_or_raise(ctx, h, StateNum::S_PAIG_HEAL1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn souls(ctx: &GameContext, kind: MobjType) -> usize {
        ctx.actors.iter().filter(|(_, a)| a.kind == kind).count()
    }

    #[test]
    fn test_pain_attack_spits_two_souls() {
        let (mut ctx, _world) = test_context();
        let pain = spawn_at(&mut ctx, MobjType::Pain, 0, 0);
        let target = spawn_at(&mut ctx, MobjType::Player, 1024, 0);
        ctx.actors.set_target(pain, Some(target));

        a_pain_attack(&mut ctx, pain);
        assert_eq!(souls(&ctx, MobjType::Skull), 2);
    }

    #[test]
    fn test_stalker_breed_spits_stalkers() {
        let (mut ctx, _world) = test_context();
        let pain = spawn_at(&mut ctx, MobjType::PainElementalStalker, 0, 0);
        let target = spawn_at(&mut ctx, MobjType::Player, 1024, 0);
        ctx.actors.set_target(pain, Some(target));

        a_pain_elemental_stalker_attack(&mut ctx, pain);
        assert_eq!(souls(&ctx, MobjType::Stalker), 2);
        assert_eq!(souls(&ctx, MobjType::Skull), 0);
    }

    #[test]
    fn test_death_releases_three_souls() {
        let (mut ctx, _world) = test_context();
        let pain = spawn_at(&mut ctx, MobjType::Pain, 0, 0);
        a_pain_die(&mut ctx, pain);

        assert_eq!(souls(&ctx, MobjType::Skull), 3);
        assert!(!ctx.actors.get(pain).unwrap().flags.contains(MobjFlags::SOLID));
    }

    #[test]
    fn test_death_event_fades() {
        let (mut ctx, _world) = test_context();
        let pain = spawn_at(&mut ctx, MobjType::Pain, 0, 0);
        let alpha = ctx.actors.get(pain).unwrap().alpha;
        a_pain_death_event(&mut ctx, pain);
        assert_eq!(ctx.actors.get(pain).unwrap().alpha, alpha - 0x3f);
    }

    #[test]
    fn test_nightmare_fireballs() {
        let (mut ctx, _world) = test_context();
        let pain = spawn_at(&mut ctx, MobjType::PainElementalNightmare, 0, 0);
        let target = spawn_at(&mut ctx, MobjType::Player, 1024, 0);
        ctx.actors.set_target(pain, Some(target));

        a_pain_elemental_nightmare_attack2(&mut ctx, pain);
        assert_eq!(souls(&ctx, MobjType::ProjPainElementalNightmare), 2);
    }
}
