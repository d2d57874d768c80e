// g_weapon.rs — puffs, blood, missile launching and hitscan

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

use crate::g_combat::damage_mobj;
use crate::g_local::*;
use crate::g_mobj::{explode_missile, set_mobj_position, set_mobj_state, spawn_mobj};
use crate::g_phys::apply_move;
use crate::game::GameContext;
use crate::game_import::LineAttackHit;

// ============================================================
// Puffs and blood
// ============================================================

pub fn spawn_puff(ctx: &mut GameContext, x: Fixed, y: Fixed, z: Fixed) {
    let z = z + ctx.p_random_shift(RandomClass::SpawnPuff, 10);
    let th = spawn_mobj(ctx, x, y, z, MobjType::SmokeSmall);
    let trim = ctx.p_random(RandomClass::SpawnPuff) & 1;
    if let Some(puff) = ctx.actors.get_mut(th) {
        puff.momz = FRACUNIT;
        puff.tics = (puff.tics - trim).max(1);
    }

    // don't make punches spark on the wall
    if ctx.attackrange == MELEERANGE {
        set_mobj_state(ctx, th, StateNum::S_PUFF3);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloodColor {
    Red,
    Green,
    Blue,
    Purple,
}

impl BloodColor {
    /// Blood type, random class, and the frames for medium and light hits.
    fn params(self) -> (MobjType, RandomClass, StateNum, StateNum) {
        match self {
            BloodColor::Red => (MobjType::Blood, RandomClass::SpawnBlood, StateNum::S_BLOOD2, StateNum::S_BLOOD3),
            BloodColor::Green => (
                MobjType::GreenBlood,
                RandomClass::SpawnGreenBlood,
                StateNum::S_GREENBLOOD2,
                StateNum::S_GREENBLOOD3,
            ),
            BloodColor::Blue => (
                MobjType::BlueBlood,
                RandomClass::SpawnBlueBlood,
                StateNum::S_BLUEBLOOD2,
                StateNum::S_BLUEBLOOD3,
            ),
            BloodColor::Purple => (
                MobjType::PurpleBlood,
                RandomClass::SpawnPurpleBlood,
                StateNum::S_PURPLEBLOOD2,
                StateNum::S_PURPLEBLOOD3,
            ),
        }
    }

    /// Color a monster bleeds when shot.
    pub fn of(kind: MobjType) -> BloodColor {
        use MobjType::*;
        match kind {
            Bruiser1 | Bruiser2 | Belphegor | Knightmare | HellCentaur | CyberBaron | BruiserDemon => BloodColor::Green,
            Cacodemon | CacodemonClassic | NightmareCacodemon | Cacolantern | Abaddon => BloodColor::Blue,
            NightmareSpectre | NightmareMancubus | NightmareRevenant | PainElementalNightmare => BloodColor::Purple,
            _ => BloodColor::Red,
        }
    }
}

pub fn spawn_blood(ctx: &mut GameContext, x: Fixed, y: Fixed, z: Fixed, damage: i32) {
    spawn_colored_blood(ctx, BloodColor::Red, x, y, z, damage);
}

/// Three drops scattered around the hit. Lighter hits skip the first frames.
pub fn spawn_colored_blood(ctx: &mut GameContext, color: BloodColor, x: Fixed, y: Fixed, z: Fixed, damage: i32) {
    let (kind, class, medium, light) = color.params();
    let (mut x, mut y, mut z) = (x, y, z);

    for _ in 0..3 {
        if color == BloodColor::Purple {
            x += ctx.p_random_shift(class, 12);
            y += ctx.p_random_shift(class, 12);
            z += ctx.p_random_shift(class, 11);
        } else {
            z += ctx.p_random_shift(class, 11);
            x += ctx.p_random_shift(class, 12);
            y += ctx.p_random_shift(class, 12);
        }

        let th = spawn_mobj(ctx, x, y, z, kind);
        let trim = ctx.p_random(class) & 1;
        if let Some(drop) = ctx.actors.get_mut(th) {
            drop.momz = FRACUNIT * 2;
            drop.tics = (drop.tics - trim).max(1);
        }

        if (9..=12).contains(&damage) {
            set_mobj_state(ctx, th, medium);
        } else if damage < 9 {
            set_mobj_state(ctx, th, light);
        }
    }
}

// ============================================================
// Missiles
// ============================================================

/// Launch height and forward offset of a player projectile.
fn player_missile_origin(kind: MobjType) -> (Fixed, i32) {
    use MobjType::*;
    match kind {
        ProjRocket | ProjRocketQuadDamage => (42 * FRACUNIT, 30),
        ProjPlasma | ProjPlasmaQuadDamage | ProjNail | ProjNailQuadDamage | ProjFlamethrower => (32 * FRACUNIT, 40),
        ProjBfg | ProjBfgQuadDamage | ProjBfg10k | ProjBfg10kQuadDamage => (32 * FRACUNIT, 30),
        _ => (32 * FRACUNIT, 0),
    }
}

/// Push a freshly launched missile to `(x, y)`; it explodes in place when
/// the spot is blocked.
fn launch(ctx: &mut GameContext, th: ActorHandle, x: Fixed, y: Fixed) {
    let result = ctx.gi.try_move(&ctx.actors, th, x, y);
    if result.ok {
        apply_move(ctx, th, x, y, &result);
    } else {
        explode_missile(ctx, th);
    }
}

/// Fire a player projectile, autoaiming straight ahead and then a little to
/// either side.
pub fn spawn_player_missile(ctx: &mut GameContext, source: ActorHandle, kind: MobjType) -> Option<ActorHandle> {
    let (height, offset) = player_missile_origin(kind);
    let (sx, sy, sz, sangle, pitch) = ctx.actors.get(source).map(|a| (a.x, a.y, a.z, a.angle, a.pitch))?;

    // see which target is to be aimed at
    let mut an = sangle;
    let mut aim = ctx.gi.aim_line_attack(&ctx.actors, source, an, height, ATTACKRANGE);
    if aim.linetarget.is_none() {
        an = an.wrapping_add(1 << 26);
        aim = ctx.gi.aim_line_attack(&ctx.actors, source, an, height, ATTACKRANGE);
        if aim.linetarget.is_none() {
            an = an.wrapping_sub(2 << 26);
            aim = ctx.gi.aim_line_attack(&ctx.actors, source, an, height, ATTACKRANGE);
        }
    }
    if aim.linetarget.is_none() {
        an = sangle;
    }

    let th = spawn_mobj(ctx, sx, sy, sz + height, kind);
    let info = ctx.info(kind);
    ctx.sound(Some(th), info.seesound);
    ctx.actors.set_target(th, Some(source));

    // unaimed shots follow the view pitch
    let frac = if aim.linetarget.is_none() { fixed_mul(info.speed, cos_angle(pitch)) } else { info.speed };

    if let Some(missile) = ctx.actors.get_mut(th) {
        missile.angle = an;
        missile.momx = fixed_mul(frac, cos_angle(an));
        missile.momy = fixed_mul(frac, sin_angle(an));
        missile.momz = fixed_mul(info.speed, aim.slope);
    }

    let x = sx + offset * (cos_angle(an) >> FRACBITS);
    let y = sy + offset * (sin_angle(an) >> FRACBITS);
    launch(ctx, th, x, y);
    Some(th)
}

/// Launch `kind` from `source`, offset by `xoffs`/`yoffs` and `heightoffs`
/// map units up. With a `dest` the missile is pitched toward its middle
/// and checked against the launch spot.
pub fn spawn_missile(
    ctx: &mut GameContext,
    source: ActorHandle,
    dest: Option<ActorHandle>,
    kind: MobjType,
    xoffs: Fixed,
    yoffs: Fixed,
    heightoffs: i32,
    aim: bool,
) -> Option<ActorHandle> {
    let (sx, sy, sz, sangle, nightmare) = ctx
        .actors
        .get(source)
        .map(|a| (a.x, a.y, a.z, a.angle, a.flags.contains(MobjFlags::NIGHTMARE)))?;

    let x = sx + xoffs;
    let y = sy + yoffs;
    let z = sz + heightoffs * FRACUNIT;

    let th = spawn_mobj(ctx, x, y, z, kind);
    let info = ctx.info(kind);
    ctx.sound(Some(th), info.seesound);

    // where it came from
    ctx.actors.set_target(th, Some(source));

    let dest = dest
        .and_then(|d| ctx.actors.get(d))
        .map(|d| (d.x, d.y, d.z, d.height, d.flags.contains(MobjFlags::SHADOW)));

    let mut an = match dest {
        Some((dx, dy, ..)) if aim => point_to_angle2(x, y, dx, dy),
        _ => sangle,
    };
    if dest.is_some_and(|d| d.4) {
        an = an.wrapping_add(ctx.p_random_shift(RandomClass::Shadow, 20) as Angle);
    }

    let mut speed = info.speed;
    let missile = ctx.actors.get_mut(th)?;
    if nightmare {
        missile.flags |= MobjFlags::NIGHTMARE;
        speed *= 2;
    }

    missile.angle = an;
    missile.momx = fixed_mul(speed, cos_angle(an));
    missile.momy = fixed_mul(speed, sin_angle(an));

    if let Some((dx, dy, dz, dheight, _)) = dest {
        let dist = if speed > 0 { (aprox_distance(dx - x, dy - y) / speed).max(1) } else { 1 };
        if kind != MobjType::ProjRect {
            missile.momz = (dz + dheight / 2 - z) / dist;
        }
        launch(ctx, th, x, y);
    }

    Some(th)
}

/// Every dart projector tagged `tid` fires `kind`. Homing types lock on to
/// `target`.
pub fn spawn_dart_missile(ctx: &mut GameContext, tid: i32, kind: MobjType, target: Option<ActorHandle>) -> Vec<ActorHandle> {
    let projectors: Vec<_> = ctx
        .actors
        .iter()
        .filter(|(_, a)| !a.removed && a.kind == MobjType::DestProjectile && a.tid == tid)
        .map(|(h, a)| (h, a.radius, a.angle, a.height))
        .collect();

    let homing = matches!(kind, MobjType::ProjTracer | MobjType::ProjRect | MobjType::ProjUndead);
    let mut fired = Vec::with_capacity(projectors.len());

    for (mo, radius, angle, height) in projectors {
        let xoffs = fixed_mul(radius, cos_angle(angle));
        let yoffs = fixed_mul(radius, sin_angle(angle));

        let th = if homing {
            let Some(th) = spawn_missile(ctx, mo, target, kind, xoffs, yoffs, (height << 1) / FRACUNIT, true) else {
                continue;
            };
            if let Some((x, y)) = ctx.actors.get(th).map(|a| (a.x + a.momx, a.y + a.momy)) {
                set_mobj_position(ctx, th, x, y);
            }
            ctx.actors.set_tracer(th, target);
            th
        } else {
            let Some(th) = spawn_missile(ctx, mo, None, kind, xoffs, yoffs, 0, false) else {
                continue;
            };
            th
        };
        fired.push(th);
    }
    fired
}

// ============================================================
// Hitscan
// ============================================================

/// Vertical slope toward whatever the shooter is facing, 0 without a target.
pub fn aim_line_attack(ctx: &mut GameContext, shooter: ActorHandle, angle: Angle, distance: Fixed) -> Fixed {
    ctx.gi.aim_line_attack(&ctx.actors, shooter, angle, 0, distance).slope
}

/// Fire one bullet. Walls get a puff, actors bleed (or puff when bloodless)
/// and take `damage`.
pub fn line_attack(ctx: &mut GameContext, shooter: ActorHandle, angle: Angle, distance: Fixed, slope: Fixed, damage: i32) {
    ctx.attackrange = distance;

    match ctx.gi.line_attack(&ctx.actors, shooter, angle, distance, slope) {
        LineAttackHit::Nothing | LineAttackHit::Sky => {}
        LineAttackHit::Wall { x, y, z } => spawn_puff(ctx, x, y, z),
        LineAttackHit::Actor { target, x, y, z } => {
            let Some((noblood, kind)) = ctx.actors.get(target).map(|a| (a.flags.contains(MobjFlags::NOBLOOD), a.kind)) else {
                return;
            };
            if noblood {
                spawn_puff(ctx, x, y, z);
            } else {
                spawn_colored_blood(ctx, BloodColor::of(kind), x, y, z, damage);
            }
            if damage > 0 {
                damage_mobj(ctx, target, Some(shooter), Some(shooter), damage);
            }
        }
    }
}

// ============================================================
// Tests
// ============================================================
