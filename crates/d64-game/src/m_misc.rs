// m_misc.rs — generic actions shared across actor types

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

use crate::g_ai::{a_chase, a_face_target, a_on_death_trigger};
use crate::g_combat::radius_attack;
use crate::g_effects::fade_mobj;
use crate::g_local::*;
use crate::g_mobj::{set_mobj_state, spawn_mobj};
use crate::g_weapon::{aim_line_attack, line_attack};
use crate::game::GameContext;

// ============================================================
// Death and pain
// ============================================================

pub fn a_scream(ctx: &mut GameContext, h: ActorHandle) {
    let Some(deathsound) = ctx.actors.get(h).map(|a| a.info.deathsound) else {
        return;
    };

    let sound = match deathsound {
        Sfx::None => return,
        Sfx::Posdie1 | Sfx::Posdie2 | Sfx::Posdie3 => {
            [Sfx::Posdie1, Sfx::Posdie2, Sfx::Posdie3][(ctx.p_random(RandomClass::Scream) % 3) as usize]
        }
        Sfx::Impdth1 | Sfx::Impdth2 => [Sfx::Impdth1, Sfx::Impdth2][(ctx.p_random(RandomClass::Scream) & 1) as usize],
        other => other,
    };

    ctx.sound(Some(h), sound);
}

pub fn a_xscream(ctx: &mut GameContext, h: ActorHandle) {
    ctx.sound(Some(h), Sfx::Slop);
}

pub fn a_player_scream(ctx: &mut GameContext, h: ActorHandle) {
    ctx.sound(Some(h), Sfx::Plrdie);
}

pub fn a_pain(ctx: &mut GameContext, h: ActorHandle) {
    let Some((kind, painsound)) = ctx.actors.get(h).map(|a| (a.kind, a.info.painsound)) else {
        return;
    };
    // the mother demon is heard level-wide
    let origin = if kind == MobjType::Resurrector { None } else { Some(h) };
    ctx.sound(origin, painsound);
}

/// Stop blocking and let things walk over the body.
pub fn a_fall(ctx: &mut GameContext, h: ActorHandle) {
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.flags.remove(MobjFlags::SOLID);
        actor.blockflag |= BlockFlags::MIDPOINTONLY;
    }
}

pub fn a_explode(ctx: &mut GameContext, h: ActorHandle) {
    let source = ctx.actors.get(h).and_then(|a| a.target);
    radius_attack(ctx, h, source, 128);
}

pub fn a_barrel_explode(ctx: &mut GameContext, h: ActorHandle) {
    let Some((x, y, z, height)) = ctx.actors.get(h).map(|a| (a.x, a.y, a.z, a.height)) else {
        return;
    };
    ctx.sound(Some(h), Sfx::Explode);
    spawn_mobj(ctx, x + FRACUNIT, y + FRACUNIT, z + (height << 1), MobjType::Explosion1);
    a_explode(ctx, h);
    a_on_death_trigger(ctx, h);
}

// ============================================================
// Footsteps
// ============================================================

fn step(ctx: &mut GameContext, h: ActorHandle, sound: Sfx) {
    ctx.sound(Some(h), sound);
    a_chase(ctx, h);
}

pub fn a_hoof(ctx: &mut GameContext, h: ActorHandle) {
    step(ctx, h, Sfx::Cybhoof);
}

pub fn a_metal(ctx: &mut GameContext, h: ActorHandle) {
    step(ctx, h, Sfx::Metal);
}

pub fn a_baby_metal(ctx: &mut GameContext, h: ActorHandle) {
    step(ctx, h, Sfx::Bspistomp);
}

pub fn a_spider_mastermind_metal(ctx: &mut GameContext, h: ActorHandle) {
    step(ctx, h, Sfx::Spistomp);
}

pub fn a_annihilator_hoof(ctx: &mut GameContext, h: ActorHandle) {
    step(ctx, h, Sfx::Annhoof);
}

// ============================================================
// Alpha and smoke
// ============================================================

pub fn a_fade_out(ctx: &mut GameContext, h: ActorHandle) {
    fade_mobj(ctx, h, -8, 0x30, MobjFlags::empty());
}

pub fn a_fade_in(ctx: &mut GameContext, h: ActorHandle) {
    fade_mobj(ctx, h, 8, 0xff, MobjFlags::empty());
}

pub fn a_missile_set_alpha(ctx: &mut GameContext, h: ActorHandle) {
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.alpha >>= 1;
    }
}

/// Drop alpha to three quarters.
pub fn a_fade_alpha(ctx: &mut GameContext, h: ActorHandle) {
    if let Some(actor) = ctx.actors.get_mut(h) {
        let mut fade = actor.alpha * 3;
        if fade < 0 {
            fade += 3;
        }
        actor.alpha = fade >> 2;
    }
}

/// Smoke trail. Grenades also count down their fuse here.
pub fn a_spawn_smoke(ctx: &mut GameContext, h: ActorHandle) {
    let Some((x, y, z, kind)) = ctx.actors.get(h).map(|a| (a.x, a.y, a.z, a.kind)) else {
        return;
    };
    let smoke = spawn_mobj(ctx, x, y, z, MobjType::SmokeGray);
    if let Some(smoke) = ctx.actors.get_mut(smoke) {
        smoke.momz = FRACUNIT;
    }

    if kind != MobjType::ProjGrenade {
        return;
    }
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    actor.reactiontime -= 8;
    if actor.reactiontime > 0 {
        return;
    }
    actor.momx = 0;
    actor.momy = 0;
    actor.momz = 0;
    let (deathstate, deathsound) = (actor.info.deathstate, actor.info.deathsound);
    if set_mobj_state(ctx, h, deathstate) {
        ctx.sound(Some(h), deathsound);
    }
}

// ============================================================
// Cameras and player bodies
// ============================================================

/// Lock the camera on the thing tagged one past its own tid.
pub fn a_target_camera(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    actor.threshold = MAXINT;
    let (tid, missilestate) = (actor.tid, actor.info.missilestate);

    let found = ctx.actors.iter().find(|(_, mo)| !mo.removed && mo.tid == tid + 1).map(|(other, _)| other);
    if let Some(other) = found {
        ctx.actors.set_target(h, Some(other));
        set_mobj_state(ctx, h, missilestate);
    }
}

/// Pistol shot fired by a player body under monster control.
pub fn a_play_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !ctx.actors.get(h).is_some_and(|a| a.target.is_some()) {
        return;
    }
    ctx.sound(Some(h), Sfx::Pistol);
    a_face_target(ctx, h);

    let Some(angle) = ctx.actors.get(h).map(|a| a.angle) else {
        return;
    };
    let slope = aim_line_attack(ctx, h, angle, MISSILERANGE);
    let angle = angle.wrapping_add(ctx.p_random_shift(RandomClass::PlayAttack, 20) as Angle);
    let damage = (ctx.p_random(RandomClass::PlayAttack) % 5) * 3 + 3;
    line_attack(ctx, h, angle, MISSILERANGE, slope, damage);
}
