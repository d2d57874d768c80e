// m_bruiser.rs — barons, hell knights and the bruiser demon

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
use crate::g_combat::radius_attack;
use crate::g_local::*;
use crate::g_mobj::set_mobj_state;
use crate::g_monster::{fire_fan, has_target, melee_hit, missile_attack, MissileDir};
use crate::game::GameContext;

pub fn a_bruis_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    let damage = (ctx.p_random(RandomClass::BruisAttack) & 7) * 11 + 11;
    if melee_hit(ctx, h, Sfx::Scratch, damage) {
        return;
    }
    missile_attack(ctx, h, MissileDir::Straight);
}

/// Mostly fireballs, sometimes a carpet of flame.
pub fn a_bruiser_demon_random_attack(ctx: &mut GameContext, h: ActorHandle) {
    let next = if ctx.p_random(RandomClass::BruiserDemonDecide) < 220 {
        StateNum::S_BR64_ATK1_1
    } else {
        StateNum::S_BR64_ATK1_2
    };
    set_mobj_state(ctx, h, next);
}

pub fn a_bruiser_demon_fire(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    if let Some(fire) = fire_fan(ctx, h, MobjType::ProjBruiserDemon2) {
        let sound = ctx.actors.get(fire).map_or(Sfx::None, |f| f.info.seesound);
        ctx.sound(Some(fire), sound);
    }
}

/// A dying ground flame bursts, hurting everything near it on behalf of
/// whoever lit it.
pub fn a_bruiser_demon_explode_fire(ctx: &mut GameContext, h: ActorHandle) {
    let Some(owner) = ctx.actors.get(h).map(|a| a.target) else {
        return;
    };
    radius_attack(ctx, h, owner, 128);
    ctx.sound(Some(h), Sfx::Explode);
}
