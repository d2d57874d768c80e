// m_cyber.rs — cyberdemons and the annihilator

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
use crate::g_effects::start_mobj_explode;
use crate::g_local::*;
use crate::g_monster::{has_target, missile_attack, MissileDir};
use crate::game::GameContext;
use crate::m_fatso::{volley, VOLLEY1, VOLLEY2, VOLLEY3};

pub fn a_cyber_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Left);
}

pub fn a_bfg_cyber_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Left);
    ctx.sound(Some(h), Sfx::Bfg);
}

/// Chain of explosions over the body, with the death cry heard level-wide.
pub fn a_cyber_death_event(ctx: &mut GameContext, h: ActorHandle) {
    start_mobj_explode(ctx, h, 4, 12);
    let sound = ctx.actors.get(h).map_or(Sfx::None, |a| a.info.deathsound);
    ctx.sound(None, sound);
}

pub fn a_annihilator_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Left);
    missile_attack(ctx, h, MissileDir::Right);
}

pub fn a_annihilator_attack1(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY1);
}

pub fn a_annihilator_attack2(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY2);
}

pub fn a_annihilator_attack3(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY3);
}
