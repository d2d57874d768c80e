// m_brain.rs — boss brain, its shooter and the spawn cubes

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

use tracing::{debug, warn};

use d64_common::config::Skill;

use crate::g_ai::look_for_players;
use crate::g_local::*;
use crate::g_mobj::{remove_mobj, set_mobj_position, set_mobj_state, spawn_mobj};
use crate::g_weapon::spawn_missile;
use crate::game::GameContext;

/// Gather every spawn spot and start shooting at the first one.
pub fn a_brain_awake(ctx: &mut GameContext, _h: ActorHandle) {
    let targets: Vec<_> = ctx
        .actors
        .iter()
        .filter(|(_, a)| !a.removed && a.kind == MobjType::BossTarget)
        .map(|(h, _)| h)
        .collect();
    debug!(spots = targets.len(), "brain awake");

    ctx.brain.targets = targets;
    ctx.brain.on = 0;
    ctx.sound(None, Sfx::Bossit);
}

pub fn a_brain_pain(ctx: &mut GameContext, _h: ActorHandle) {
    ctx.sound(None, Sfx::Bospn);
}

/// A wall of rockets bursting behind the brain.
pub fn a_brain_scream(ctx: &mut GameContext, h: ActorHandle) {
    let Some((mx, my)) = ctx.actors.get(h).map(|a| (a.x, a.y)) else {
        return;
    };

    let mut x = mx - 196 * FRACUNIT;
    while x < mx + 320 * FRACUNIT {
        let y = my - 320 * FRACUNIT;
        let z = 128 + ctx.p_random(RandomClass::BrainScream) * 2 * FRACUNIT;
        let th = spawn_mobj(ctx, x, y, z, MobjType::ProjRocket);
        let momz = ctx.p_random(RandomClass::BrainScream) * 512;
        if let Some(rocket) = ctx.actors.get_mut(th) {
            rocket.momz = momz;
        }

        set_mobj_state(ctx, th, StateNum::S_ROCKET_DIE1);

        let trim = ctx.p_random(RandomClass::BrainScream) & 7;
        if let Some(rocket) = ctx.actors.get_mut(th) {
            rocket.tics = (rocket.tics - trim).max(1);
        }
        x += 8 * FRACUNIT;
    }

    ctx.sound(None, Sfx::Bosdth);
}

pub fn a_brain_die(ctx: &mut GameContext, _h: ActorHandle) {
    ctx.level.exit_requested = true;
    ctx.gi.exit_level();
}

/// Throw a cube at the next spawn spot. Easy skills only throw every
/// other time.
pub fn a_brain_spit(ctx: &mut GameContext, h: ActorHandle) {
    ctx.brain.easy = !ctx.brain.easy;
    if ctx.skill() <= Skill::Easy && !ctx.brain.easy {
        return;
    }

    if ctx.brain.targets.is_empty() {
        warn!("brain spit with no spawn spots");
        return;
    }
    let targ = ctx.brain.targets[ctx.brain.on % ctx.brain.targets.len()];
    ctx.brain.on = (ctx.brain.on + 1) % ctx.brain.targets.len();

    let Some(cube) = spawn_missile(ctx, h, Some(targ), MobjType::SpawnShot, 0, 0, 0, true) else {
        return;
    };
    ctx.actors.set_target(cube, Some(targ));

    let Some(dy) = ctx.actors.get(targ).zip(ctx.actors.get(h)).map(|(t, m)| t.y - m.y) else {
        return;
    };
    let Some(c) = ctx.actors.get(cube) else {
        return;
    };
    let tics = ctx.state(c.state).tics;
    let flight = if c.momy != 0 && tics > 0 { (dy / c.momy) / tics } else { 0 };
    if let Some(c) = ctx.actors.get_mut(cube) {
        c.reactiontime = flight;
    }
}

pub fn a_spawn_sound(ctx: &mut GameContext, h: ActorHandle) {
    a_spawn_fly(ctx, h);
}

/// Monster a cube turns into, by a 0..255 roll.
fn spawn_pick(r: i32) -> MobjType {
    match r {
        0..=49 => MobjType::Imp1,
        50..=89 => MobjType::Possessed2,
        90..=119 => MobjType::Demon2,
        120..=129 => MobjType::Pain,
        130..=159 => MobjType::Cacodemon,
        160..=161 => MobjType::Vile,
        162..=171 => MobjType::Undead,
        172..=191 => MobjType::Baby,
        192..=221 => MobjType::Mancubus,
        222..=245 => MobjType::Bruiser2,
        _ => MobjType::Bruiser1,
    }
}

/// Count down the flight; on arrival hatch a monster at the spot.
pub fn a_spawn_fly(ctx: &mut GameContext, h: ActorHandle) {
    let Some(cube) = ctx.actors.get_mut(h) else {
        return;
    };
    cube.reactiontime -= 1;
    if cube.reactiontime != 0 {
        // still flying
        return;
    }

    let target = cube.target;

    let Some((tx, ty, tz)) = target.and_then(|t| ctx.actors.get(t)).map(|t| (t.x, t.y, t.z)) else {
        remove_mobj(ctx, h);
        return;
    };

    let fog = spawn_mobj(ctx, tx, ty, tz, MobjType::SpawnFire);
    ctx.sound(Some(fog), Sfx::Telept);

    let kind = spawn_pick(ctx.p_random(RandomClass::SpawnFly));
    let newmobj = spawn_mobj(ctx, tx, ty, tz, kind);
    if look_for_players(ctx, newmobj, true) {
        let seestate = ctx.info(kind).seestate;
        set_mobj_state(ctx, newmobj, seestate);
    }

    // telefrag anything in this spot
    if ctx.gi.teleport_move(&ctx.actors, newmobj, tx, ty) {
        set_mobj_position(ctx, newmobj, tx, ty);
    }
    debug!(?kind, "spawn cube hatched");

    remove_mobj(ctx, h);
}
