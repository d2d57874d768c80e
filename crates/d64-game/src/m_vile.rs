// m_vile.rs — the arch-vile and its hellfire

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

//! The vile marks its target with a column of fire that sticks to the
//! victim while the vile keeps it in view, then detonates it.

use crate::g_ai::a_face_target;
use crate::g_combat::{damage_mobj, radius_attack};
use crate::g_local::*;
use crate::g_mobj::{set_mobj_position, spawn_mobj};
use crate::g_monster::{chase_or_raise, has_target};
use crate::game::GameContext;

/// How far in front of the victim the fire burns.
const FIRE_LEAD: Fixed = 24 * FRACUNIT;

pub fn a_vile_chase(ctx: &mut GameContext, h: ActorHandle) {
    chase_or_raise(ctx, h, StateNum::S_VILE_HEAL1);
}

pub fn a_vile_start(ctx: &mut GameContext, h: ActorHandle) {
    ctx.sound(Some(h), Sfx::Vilatk);
}

pub fn a_start_fire(ctx: &mut GameContext, h: ActorHandle) {
    ctx.sound(Some(h), Sfx::Flamst);
    a_fire(ctx, h);
}

pub fn a_fire_crackle(ctx: &mut GameContext, h: ActorHandle) {
    ctx.sound(Some(h), Sfx::Flame);
    a_fire(ctx, h);
}

/// Keep the fire in front of its victim unless the vile lost sight of it.
pub fn a_fire(ctx: &mut GameContext, h: ActorHandle) {
    let Some(fire) = ctx.actors.get(h) else {
        return;
    };
    let Some(dest) = fire.tracer else {
        return;
    };
    let Some(vile) = fire.target else {
        return;
    };
    if !ctx.gi.check_sight(&ctx.actors, vile, dest) {
        return;
    }

    let Some((dx, dy, dz, an)) = ctx.actors.get(dest).map(|d| (d.x, d.y, d.z, d.angle)) else {
        return;
    };
    set_mobj_position(ctx, h, dx + fixed_mul(FIRE_LEAD, cos_angle(an)), dy + fixed_mul(FIRE_LEAD, sin_angle(an)));
    if let Some(fire) = ctx.actors.get_mut(h) {
        fire.z = dz;
    }
}

/// Light the hellfire on the target.
pub fn a_vile_target(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);

    let Some(target) = ctx.actors.get(h).and_then(|a| a.target) else {
        return;
    };
    let Some((tx, ty, tz)) = ctx.actors.get(target).map(|t| (t.x, t.y, t.z)) else {
        return;
    };

    let fog = spawn_mobj(ctx, tx, ty, tz, MobjType::Fire);
    ctx.actors.set_tracer(h, Some(fog));
    ctx.actors.set_target(fog, Some(h));
    ctx.actors.set_tracer(fog, Some(target));
    a_fire(ctx, fog);
}

/// Detonate: a direct hit that launches the victim, then a blast from the
/// fire between them.
pub fn a_vile_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);

    let Some((target, angle, fire)) = ctx.actors.get(h).and_then(|a| Some((a.target?, a.angle, a.tracer))) else {
        return;
    };
    if !ctx.gi.check_sight(&ctx.actors, h, target) {
        return;
    }

    ctx.sound(Some(h), Sfx::Explode);
    damage_mobj(ctx, target, Some(h), Some(h), 20);

    let Some(victim) = ctx.actors.get_mut(target) else {
        return;
    };
    victim.momz = 1000 * FRACUNIT / victim.info.mass.max(1);
    let (vx, vy) = (victim.x, victim.y);

    let Some(fire) = fire else {
        return;
    };
    // move the fire between the vile and the victim
    set_mobj_position(ctx, fire, vx - fixed_mul(FIRE_LEAD, cos_angle(angle)), vy - fixed_mul(FIRE_LEAD, sin_angle(angle)));
    radius_attack(ctx, fire, Some(h), 70);
}
