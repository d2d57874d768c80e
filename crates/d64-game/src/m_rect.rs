// m_rect.rs — the mother demon

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

use tracing::trace;

use crate::g_ai::{a_chase, a_face_target, a_tracer};
use crate::g_effects::{fade_mobj, start_mobj_explode};
use crate::g_local::*;
use crate::g_mobj::{set_mobj_state, spawn_mobj};
use crate::g_monster::{chase_or_raise, fire_fan, has_target};
use crate::game::GameContext;

/// Closer than this and she stops to stomp.
const RECT_MELEE_DIST: Fixed = 600 * FRACUNIT;

/// Live arm missiles allowed before she stops launching more.
const MAX_RECT_MISSILES: usize = 9;

pub fn a_rect_chase(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get(h) else {
        return;
    };
    let close = actor
        .target
        .and_then(|t| ctx.actors.get(t))
        .filter(|t| t.health > 0)
        .is_some_and(|t| aprox_distance(t.x - actor.x, t.y - actor.y) < RECT_MELEE_DIST);
    let (sound, melee) = (actor.info.attacksound, actor.info.meleestate);

    if !close {
        a_chase(ctx, h);
        return;
    }

    a_face_target(ctx, h);
    ctx.sound(Some(h), sound);
    set_mobj_state(ctx, h, melee);
}

pub fn a_rect_chase2(ctx: &mut GameContext, h: ActorHandle) {
    chase_or_raise(ctx, h, StateNum::S_RECT2_HEAL1);
}

/// One homing arm: `side` is the shoulder it leaves from, `out` how far
/// from the body, `up` its launch height, `heading` the turn away from the
/// facing and `delay` the tics before it starts to home.
struct Arm {
    side: Angle,
    out: Fixed,
    up: Fixed,
    heading: Angle,
    delay: i32,
}

const ARMS: [Arm; 4] = [
    Arm { side: ANG90.wrapping_neg(), out: 68 * FRACUNIT, up: 68 * FRACUNIT, heading: ANG270, delay: 5 },
    Arm { side: ANG90.wrapping_neg(), out: 50 * FRACUNIT, up: 139 * FRACUNIT, heading: ANG270, delay: 1 },
    Arm { side: ANG90, out: 68 * FRACUNIT, up: 68 * FRACUNIT, heading: ANG270.wrapping_neg(), delay: 5 },
    Arm { side: ANG90, out: 50 * FRACUNIT, up: 139 * FRACUNIT, heading: ANG270.wrapping_neg(), delay: 1 },
];

pub fn a_rect_missile(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);

    let live = ctx
        .actors
        .iter()
        .filter(|(_, a)| !a.removed && a.kind == MobjType::ProjRect)
        .count();
    if live >= MAX_RECT_MISSILES {
        trace!(live, "arm missiles capped");
        return;
    }

    let Some((x, y, z, angle, target)) = ctx.actors.get(h).map(|a| (a.x, a.y, a.z, a.angle, a.target)) else {
        return;
    };

    for arm in &ARMS {
        let an = angle.wrapping_add(arm.side);
        let mo = spawn_mobj(
            ctx,
            x + fixed_mul(arm.out, cos_angle(an)),
            y + fixed_mul(arm.out, sin_angle(an)),
            z + arm.up,
            MobjType::ProjRect,
        );
        ctx.actors.set_target(mo, Some(h));
        ctx.actors.set_tracer(mo, target);

        let Some(missile) = ctx.actors.get_mut(mo) else {
            continue;
        };
        missile.threshold = arm.delay;
        missile.angle = angle.wrapping_add(arm.heading);
        let speed = missile.info.speed;
        missile.momx = fixed_mul(speed, cos_angle(missile.angle));
        missile.momy = fixed_mul(speed, sin_angle(missile.angle));
    }
}

pub fn a_rect_missile2(ctx: &mut GameContext, h: ActorHandle) {
    a_rect_missile(ctx, h);
}

/// Arms fly straight for a few tics before homing.
pub fn a_rect_tracer(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    if actor.threshold >= 0 {
        actor.threshold -= 1;
        return;
    }
    a_tracer(ctx, h);
}

pub fn a_rect_ground_fire(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    if let Some(fire) = fire_fan(ctx, h, MobjType::ProjRectFire) {
        let sound = ctx.actors.get(fire).map_or(Sfx::None, |f| f.info.seesound);
        ctx.sound(Some(fire), sound);
    }
}

pub fn a_rect_ground_fire2(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_rect_ground_fire(ctx, h);
    ctx.sound(Some(h), Sfx::Rectatk);
}

/// Ground flames hug the floor and leave burning trails.
pub fn a_move_ground_fire(ctx: &mut GameContext, h: ActorHandle) {
    let Some(fire) = ctx.actors.get_mut(h) else {
        return;
    };
    if fire.z > fire.floorz && fire.momz > 0 {
        fire.z = fire.floorz;
    }
    let (x, y, floorz) = (fire.x, fire.y, fire.floorz);

    let trail = spawn_mobj(ctx, x, y, floorz, MobjType::PropFire);
    fade_mobj(ctx, trail, -8, 0, MobjFlags::empty());
}

pub fn a_rect_death_event(ctx: &mut GameContext, h: ActorHandle) {
    start_mobj_explode(ctx, h, 3, 32);
}
