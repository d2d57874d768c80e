// m_demon.rs — pinkies, hellhounds, imps and cacodemons

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
use crate::g_monster::{has_target, melee_hit, missile_attack, MissileDir};
use crate::game::GameContext;

/// Bite. The attack sound already played on entering the attack state.
pub fn a_sarg_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    let damage = (ctx.p_random(RandomClass::SargAttack) & 7) * 4 + 4;
    melee_hit(ctx, h, Sfx::None, damage);
}

pub fn a_hellhound_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    let damage = (ctx.p_random(RandomClass::HellhoundAttack) & 7) * 8 + 8;
    if melee_hit(ctx, h, Sfx::Scratch, damage) {
        return;
    }
    missile_attack(ctx, h, MissileDir::Left);
    missile_attack(ctx, h, MissileDir::Right);
}

pub fn a_troop_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Straight);
}

pub fn a_troop_melee(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    let damage = (ctx.p_random(RandomClass::TroopAttack) & 7) * 3 + 3;
    melee_hit(ctx, h, Sfx::Scratch, damage);
}

/// Cacodemons bite up close and spit otherwise.
pub fn a_head_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    let damage = (ctx.p_random(RandomClass::HeadAttack) & 7) * 8 + 8;
    if melee_hit(ctx, h, Sfx::Scratch, damage) {
        return;
    }
    missile_attack(ctx, h, MissileDir::Straight);
}
