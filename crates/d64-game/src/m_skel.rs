// m_skel.rs — revenants

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
use crate::g_monster::{has_target, homing_missile, melee_hit, MissileDir};
use crate::game::GameContext;

/// Shoulder rocket launch height in map units.
const SHOULDER_HEIGHT: i32 = 104;

fn shoulder_pair(ctx: &mut GameContext, h: ActorHandle, kind: MobjType) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    homing_missile(ctx, h, MissileDir::Left, kind, SHOULDER_HEIGHT);
    homing_missile(ctx, h, MissileDir::Right, kind, SHOULDER_HEIGHT);
}

pub fn a_skel_attack(ctx: &mut GameContext, h: ActorHandle) {
    shoulder_pair(ctx, h, MobjType::ProjUndead);
}

pub fn a_revenant_nightmare_attack(ctx: &mut GameContext, h: ActorHandle) {
    shoulder_pair(ctx, h, MobjType::ProjNightmareRevenant);
}

pub fn a_skel_whoosh(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    ctx.sound(Some(h), Sfx::Dart);
}

pub fn a_skel_fist(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    if !check_melee_range(ctx, h) {
        return;
    }
    let damage = (ctx.p_random(RandomClass::SkelFist) % 10 + 1) * 6;
    melee_hit(ctx, h, Sfx::Dartshoot, damage);
}
