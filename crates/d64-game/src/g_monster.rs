// g_monster.rs — monster weapons shared by every family

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

use crate::g_ai::{a_chase, check_melee_range, face_actor};
use crate::g_combat::{damage_mobj, radius_attack};
use crate::g_local::*;
use crate::g_mobj::{set_mobj_position, set_mobj_state, spawn_mobj};
use crate::g_phys::apply_move;
use crate::g_weapon::spawn_missile;
use crate::game::GameContext;
use crate::game_import::Intercept;
use crate::m_move::{XSPEED, YSPEED};
use crate::m_skull::skull_attack;

// ============================================================
// Projectile launch table
// ============================================================

/// Side of the body a missile leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileDir {
    Straight,
    Left,
    Right,
}

impl MissileDir {
    /// Launch angle for a shooter facing `angle`.
    pub fn angle(self, angle: Angle) -> Angle {
        match self {
            MissileDir::Straight => angle,
            MissileDir::Left => angle.wrapping_add(ANG45),
            MissileDir::Right => angle.wrapping_sub(ANG45),
        }
    }
}

/// Where and what a monster type fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissileSpec {
    /// Sideways offset in map units.
    pub offs: i32,
    /// Launch height in map units.
    pub height: i32,
    pub kind: MobjType,
    pub aim: bool,
}

const fn spec(offs: i32, height: i32, kind: MobjType, aim: bool) -> Option<MissileSpec> {
    Some(MissileSpec { offs, height, kind, aim })
}

pub fn missile_spec(shooter: MobjType) -> Option<MissileSpec> {
    use MobjType::*;
    match shooter {
        Mancubus => spec(50, 69, ProjFatso, true),
        Imp1 => spec(0, 64, ProjImp1, true),
        Imp2 => spec(0, 64, ProjImp2, true),
        Baby => spec(20, 28, ProjBaby, false),
        Cacodemon => spec(0, 46, ProjHead, true),
        Cyborg | CyborgTitle => spec(45, 88, ProjRocket, true),
        Bruiser1 => spec(0, 48, ProjBruiser2, true),
        Bruiser2 => spec(0, 48, ProjBruiser1, true),
        Annihilator => spec(45, 88, ProjRocket, true),
        Hellhound => spec(20, 46, ProjHead, true),
        DukeOfHell => spec(50, 69, ProjDukeOfHell, true),
        BruiserDemon => spec(0, 48, ProjBruiserDemon1, true),
        Belphegor => spec(0, 48, ProjBruiser1, true),
        Hectebus => spec(50, 69, ProjHectebus, true),
        DarkImp => spec(0, 64, ProjDarkImp, true),
        Cacolantern => spec(0, 46, ProjCacolantern, true),
        Abaddon => spec(0, 46, ProjAbaddon, true),
        NightmareCacodemon => spec(0, 46, ProjNightmareCacodemon, true),
        PainElementalNightmare => spec(32, 32, ProjPainElementalNightmare, true),
        NightmareMancubus => spec(50, 69, ProjNightmareMancubus, true),
        HellCentaur => spec(0, 48, ProjBruiser1, true),
        NightCrawler => spec(20, 28, ProjRocket, false),
        HardcoreImp => spec(0, 64, ProjHardcoreImp, true),
        PlasmaZombie => spec(12, 42, ProjPlasma, true),
        BfgCommando => spec(12, 32, ProjBfg, true),
        BfgCyberdemon => spec(45, 88, ProjBfg, true),
        Stalker => spec(0, 32, ProjStalker1, true),
        Arthronailer => spec(20, 28, ProjArthronailer, false),
        _ => None,
    }
}

/// Fire the shooter's projectile from one side of its body. Types without
/// a launch entry do nothing.
pub fn missile_attack(ctx: &mut GameContext, h: ActorHandle, dir: MissileDir) -> Option<ActorHandle> {
    let actor = ctx.actors.get(h)?;
    let Some(spec) = missile_spec(actor.kind) else {
        trace!(kind = ?actor.kind, "no projectile for shooter");
        return None;
    };

    let angle = dir.angle(actor.angle);
    let offs = spec.offs * FRACUNIT;
    let (dx, dy) = match dir {
        MissileDir::Straight => (0, 0),
        _ => (fixed_mul(offs, cos_angle(angle)), fixed_mul(offs, sin_angle(angle))),
    };
    let target = actor.target;

    spawn_missile(ctx, h, target, spec.kind, dx, dy, spec.height, spec.aim)
}

/// Swing a fired missile by `delta` and re-aim its momentum at its base speed.
pub fn turn_missile(ctx: &mut GameContext, mo: Option<ActorHandle>, delta: Angle) {
    let Some(mo) = mo.and_then(|m| ctx.actors.get_mut(m)) else {
        return;
    };
    mo.angle = mo.angle.wrapping_add(delta);
    let speed = mo.info.speed;
    mo.momx = fixed_mul(speed, cos_angle(mo.angle));
    mo.momy = fixed_mul(speed, sin_angle(mo.angle));
}

/// Three ground flames fanned out from the shooter's feet.
pub fn fire_fan(ctx: &mut GameContext, h: ActorHandle, kind: MobjType) -> Option<ActorHandle> {
    let (x, y, z, an) = ctx.actors.get(h).map(|a| (a.x, a.y, a.z, a.angle))?;
    let speed = ctx.info(kind).speed;

    let mut last = None;
    for angle in [an, an.wrapping_sub(ANG45), an.wrapping_add(ANG45)] {
        let mo = spawn_mobj(ctx, x, y, z, kind);
        ctx.actors.set_target(mo, Some(h));
        if let Some(fire) = ctx.actors.get_mut(mo) {
            fire.angle = angle;
            fire.momx = fixed_mul(speed, cos_angle(angle));
            fire.momy = fixed_mul(speed, sin_angle(angle));
        }
        last = Some(mo);
    }
    last
}

/// Launch a homing `kind` that locks on to the shooter's target.
pub fn homing_missile(ctx: &mut GameContext, h: ActorHandle, dir: MissileDir, kind: MobjType, height: i32) -> Option<ActorHandle> {
    let (angle, target) = ctx.actors.get(h).map(|a| (dir.angle(a.angle), a.target))?;

    let mo = spawn_missile(
        ctx,
        h,
        target,
        kind,
        fixed_mul(26 * FRACUNIT, cos_angle(angle)),
        fixed_mul(26 * FRACUNIT, sin_angle(angle)),
        height,
        true,
    )?;
    if let Some((x, y)) = ctx.actors.get(mo).map(|m| (m.x + m.momx, m.y + m.momy)) {
        set_mobj_position(ctx, mo, x, y);
    }
    ctx.actors.set_tracer(mo, target);
    Some(mo)
}

// ============================================================
// Melee
// ============================================================

/// Hit the target in melee range for `damage`, playing `sound` first.
/// Returns false when the target is out of reach.
pub fn melee_hit(ctx: &mut GameContext, h: ActorHandle, sound: Sfx, damage: i32) -> bool {
    if !check_melee_range(ctx, h) {
        return false;
    }
    let Some(target) = ctx.actors.get(h).and_then(|a| a.target) else {
        return false;
    };
    ctx.sound(Some(h), sound);
    damage_mobj(ctx, target, Some(h), Some(h), damage);
    true
}

/// True when the actor has a target to shoot at. Callers face it first.
pub fn has_target(ctx: &GameContext, h: ActorHandle) -> bool {
    ctx.actors.get(h).is_some_and(|a| a.target.is_some())
}

// ============================================================
// Soul launchers
// ============================================================

/// More than this many souls of one type and the launcher stays quiet.
const MAX_SOULS: usize = 17;

/// Throw a `kind` soul at `angle` and send it flying at the launcher's
/// target. A soul spawned inside a wall dies on the spot. `charge` is the
/// state the soul enters before its charge; `None` uses its missile state.
pub fn shoot_soul(ctx: &mut GameContext, h: ActorHandle, angle: Angle, kind: MobjType, charge: Option<StateNum>) {
    // souls waiting to be freed still count
    let count = ctx.actors.iter().filter(|(_, a)| a.kind == kind).count();
    if count >= MAX_SOULS {
        return;
    }

    let Some((ax, ay, az, radius, target)) = ctx.actors.get(h).map(|a| (a.x, a.y, a.z, a.info.radius, a.target)) else {
        return;
    };

    let prestep = 4 * FRACUNIT + 3 * (radius + ctx.info(kind).radius) / 2;
    let x = ax + fixed_mul(prestep, cos_angle(angle));
    let y = ay + fixed_mul(prestep, sin_angle(angle));
    let z = az + 16 * FRACUNIT;

    let soul = spawn_mobj(ctx, x, y, z, kind);

    let result = ctx.gi.try_move(&ctx.actors, soul, x, y);
    if result.ok {
        apply_move(ctx, soul, x, y, &result);
    }

    if !result.ok || crosses_solid_wall(ctx, ax, ay, x, y) {
        // kill it immediately
        damage_mobj(ctx, soul, Some(h), Some(h), 10000);
        radius_attack(ctx, soul, Some(soul), 128);
        return;
    }

    ctx.actors.set_target(soul, target);
    let state = charge.unwrap_or(ctx.info(kind).missilestate);
    if set_mobj_state(ctx, soul, state) {
        skull_attack(ctx, soul);
    }
}

/// True when the segment crosses a one-sided line.
fn crosses_solid_wall(ctx: &mut GameContext, x1: Fixed, y1: Fixed, x2: Fixed, y2: Fixed) -> bool {
    let mut lines = Vec::new();
    ctx.gi.path_traverse(x1, y1, x2, y2, &mut |hit| {
        if let Intercept::Line(line) = hit {
            lines.push(line);
        }
        true
    });
    lines.into_iter().any(|l| ctx.gi.line(l).back.is_none())
}

// ============================================================
// Corpse raising
// ============================================================

/// Look one step ahead for a corpse to bring back. On success the healer
/// turns to face it and enters `heal`; otherwise it keeps chasing.
pub fn chase_or_raise(ctx: &mut GameContext, h: ActorHandle, heal: StateNum) {
    if !raise_corpse(ctx, h, heal) {
        a_chase(ctx, h);
    }
}

fn raise_corpse(ctx: &mut GameContext, h: ActorHandle, heal: StateNum) -> bool {
    let Some(actor) = ctx.actors.get(h) else {
        return false;
    };
    if actor.movedir == DirType::NoDir {
        return false;
    }

    let dir = actor.movedir as usize;
    let tryx = actor.x + actor.info.speed * XSPEED[dir];
    let tryy = actor.y + actor.info.speed * YSPEED[dir];
    let reach = ctx.info(MobjType::NightmareLostSoul).radius;

    let nearby = ctx.gi.things_in_box(
        &ctx.actors,
        tryx - MAXRADIUS * 2,
        tryy - MAXRADIUS * 2,
        tryx + MAXRADIUS * 2,
        tryy + MAXRADIUS * 2,
    );

    let Some(corpse) = nearby.into_iter().find(|&c| can_raise(ctx, c, tryx, tryy, reach)) else {
        return false;
    };

    // face the corpse, not the target
    face_actor(ctx, h, corpse);
    set_mobj_state(ctx, h, heal);
    ctx.sound(Some(corpse), Sfx::Slop);

    let Some(info) = ctx.actors.get(corpse).map(|c| c.info) else {
        return true;
    };
    set_mobj_state(ctx, corpse, info.raisestate);
    if let Some(c) = ctx.actors.get_mut(corpse) {
        c.height <<= 2;
        c.flags = info.flags;
        c.health = info.spawnhealth;
    }
    ctx.actors.set_target(corpse, None);
    trace!(healer = h.index(), corpse = corpse.index(), "raised corpse");
    true
}

/// A corpse can come back when its death has settled, it has a raise
/// sequence, it touches the spot ahead and it fits at full height.
fn can_raise(ctx: &mut GameContext, c: ActorHandle, tryx: Fixed, tryy: Fixed, reach: Fixed) -> bool {
    let Some(corpse) = ctx.actors.get(c) else {
        return false;
    };
    if !corpse.flags.contains(MobjFlags::CORPSE) || corpse.tics != -1 || corpse.info.raisestate.is_null() {
        return false;
    }

    let maxdist = corpse.info.radius + reach;
    if (corpse.x - tryx).abs() > maxdist || (corpse.y - tryy).abs() > maxdist {
        return false;
    }
    let (x, y) = (corpse.x, corpse.y);

    let Some(corpse) = ctx.actors.get_mut(c) else {
        return false;
    };
    corpse.momx = 0;
    corpse.momy = 0;
    corpse.height <<= 2;
    let fits = ctx.gi.check_position(&ctx.actors, c, x, y);
    if let Some(corpse) = ctx.actors.get_mut(c) {
        corpse.height >>= 2;
    }
    fits
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g_mobj::remove_mobj;
    use crate::test_support::*;

    fn shooter(ctx: &mut GameContext, kind: MobjType) -> (ActorHandle, ActorHandle) {
        let mo = spawn_at(ctx, kind, 0, 0);
        let target = spawn_at(ctx, MobjType::Player, 512, 0);
        ctx.actors.set_target(mo, Some(target));
        (mo, target)
    }

    #[test]
    fn test_missile_attack_uses_launch_table() {
        let (mut ctx, _world) = test_context();
        let (imp, _) = shooter(&mut ctx, MobjType::Imp1);

        let mo = missile_attack(&mut ctx, imp, MissileDir::Straight).expect("imp fires");
        let missile = ctx.actors.get(mo).unwrap();
        assert_eq!(missile.kind, MobjType::ProjImp1);
        assert_eq!(missile.target, Some(imp));
        assert_eq!(missile.z, 64 * FRACUNIT);
    }

    #[test]
    fn test_side_offsets_mirror() {
        let (mut ctx, _world) = test_context();
        let (fatso, _) = shooter(&mut ctx, MobjType::Mancubus);

        let left = missile_attack(&mut ctx, fatso, MissileDir::Left).unwrap();
        let right = missile_attack(&mut ctx, fatso, MissileDir::Right).unwrap();
        let ly = ctx.actors.get(left).unwrap().y;
        let ry = ctx.actors.get(right).unwrap().y;
        assert!(ly > 0, "left shot leaves from the left side");
        assert!(ry < 0, "right shot leaves from the right side");
    }

    #[test]
    fn test_unlisted_shooter_fires_nothing() {
        let (mut ctx, _world) = test_context();
        let (demon, _) = shooter(&mut ctx, MobjType::Demon1);
        let before = ctx.actors.len();
        assert_eq!(missile_attack(&mut ctx, demon, MissileDir::Straight), None);
        assert_eq!(ctx.actors.len(), before);
    }

    #[test]
    fn test_turn_missile_reaims_momentum() {
        let (mut ctx, _world) = test_context();
        let (imp, _) = shooter(&mut ctx, MobjType::Imp1);
        let mo = missile_attack(&mut ctx, imp, MissileDir::Straight);

        turn_missile(&mut ctx, mo, ANG90);
        let missile = ctx.actors.get(mo.unwrap()).unwrap();
        let speed = missile.info.speed;
        assert_eq!(missile.momx, fixed_mul(speed, cos_angle(missile.angle)));
        assert_eq!(missile.momy, fixed_mul(speed, sin_angle(missile.angle)));
        assert!(missile.momy > 0);
    }

    #[test]
    fn test_fire_fan_spreads_three_flames() {
        let (mut ctx, _world) = test_context();
        let (brute, _) = shooter(&mut ctx, MobjType::BruiserDemon);
        fire_fan(&mut ctx, brute, MobjType::ProjBruiserDemon2);

        let angles: Vec<Angle> = ctx
            .actors
            .iter()
            .filter(|(_, a)| a.kind == MobjType::ProjBruiserDemon2)
            .map(|(_, a)| a.angle)
            .collect();
        assert_eq!(angles, vec![0, ANG45.wrapping_neg(), ANG45]);
    }

    #[test]
    fn test_melee_hit_needs_reach() {
        let (mut ctx, world) = test_context();
        let (imp, target) = shooter(&mut ctx, MobjType::Imp1);
        ctx.actors.get_mut(imp).unwrap().flags |= MobjFlags::SEETARGET;

        assert!(!melee_hit(&mut ctx, imp, Sfx::Scratch, 10));
        set_mobj_position(&mut ctx, target, 40 * FRACUNIT, 0);
        assert!(melee_hit(&mut ctx, imp, Sfx::Scratch, 10));
        assert_eq!(world.borrow().damage_log, vec![(target, 10)]);
    }

    #[test]
    fn test_soul_cap() {
        let (mut ctx, _world) = test_context();
        let (pain, _) = shooter(&mut ctx, MobjType::Pain);
        for i in 0..MAX_SOULS as i32 {
            spawn_at(&mut ctx, MobjType::Skull, -2000, i * 100);
        }
        let before = ctx.actors.len();
        shoot_soul(&mut ctx, pain, 0, MobjType::Skull, None);
        assert_eq!(ctx.actors.len(), before);
    }

    #[test]
    fn test_soul_cap_counts_souls_pending_free() {
        let (mut ctx, _world) = test_context();
        let (pain, _) = shooter(&mut ctx, MobjType::Pain);
        let souls: Vec<_> =
            (0..MAX_SOULS as i32).map(|i| spawn_at(&mut ctx, MobjType::Skull, -2000, i * 100)).collect();
        ctx.actors.acquire(souls[0]);
        remove_mobj(&mut ctx, souls[0]);
        assert!(ctx.actors.get(souls[0]).is_some_and(|a| a.removed), "held soul lingers");

        let before = ctx.actors.len();
        shoot_soul(&mut ctx, pain, 0, MobjType::Skull, None);
        assert_eq!(ctx.actors.len(), before);
    }

    #[test]
    fn test_soul_charges_target() {
        let (mut ctx, _world) = test_context();
        let (pain, target) = shooter(&mut ctx, MobjType::Pain);
        shoot_soul(&mut ctx, pain, 0, MobjType::Skull, None);

        let (_, soul) = ctx.actors.iter().find(|(_, a)| a.kind == MobjType::Skull).expect("soul spawned");
        assert_eq!(soul.target, Some(target));
        assert!(soul.flags.contains(MobjFlags::SKULLFLY));
        assert!(soul.momx > 0);
    }

    #[test]
    fn test_soul_in_wall_dies() {
        let (mut ctx, world) = test_context();
        world.borrow_mut().wall_x = Some(20 * FRACUNIT);
        let (pain, _) = shooter(&mut ctx, MobjType::Pain);
        shoot_soul(&mut ctx, pain, 0, MobjType::Skull, None);

        let (_, soul) = ctx.actors.iter().find(|(_, a)| a.kind == MobjType::Skull).expect("soul spawned");
        assert!(soul.flags.contains(MobjFlags::CORPSE));
    }

    #[test]
    fn test_healer_raises_settled_corpse() {
        let (mut ctx, world) = test_context();
        let vile = spawn_at(&mut ctx, MobjType::Vile, 0, 0);
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 70, 0);
        damage_mobj(&mut ctx, imp, None, None, 100);
        {
            let corpse = ctx.actors.get_mut(imp).unwrap();
            corpse.tics = -1;
        }
        ctx.actors.get_mut(vile).unwrap().movedir = DirType::East;

        chase_or_raise(&mut ctx, vile, StateNum::S_VILE_HEAL1);
        assert_eq!(ctx.actors.get(vile).unwrap().state, StateNum::S_VILE_HEAL1);
        let raised = ctx.actors.get(imp).unwrap();
        assert_eq!(raised.health, raised.info.spawnhealth);
        assert_eq!(raised.flags, raised.info.flags);
        assert_eq!(raised.height, raised.info.height);
        assert!(world.borrow().sounds.contains(&(Some(imp), Sfx::Slop)));
    }

    #[test]
    fn test_raiser_wobbles_toward_shadow_corpse() {
        let (mut ctx, _world) = test_context();
        let vile = spawn_at(&mut ctx, MobjType::Vile, 0, 0);
        let spectre = spawn_at(&mut ctx, MobjType::Demon2, 70, 0);
        damage_mobj(&mut ctx, spectre, None, None, 200);
        {
            let corpse = ctx.actors.get_mut(spectre).unwrap();
            corpse.tics = -1;
            assert!(corpse.flags.contains(MobjFlags::SHADOW));
        }
        ctx.actors.get_mut(vile).unwrap().movedir = DirType::East;

        let mut expected = ctx.random.clone();
        let fuzz = expected.p_random_shift(RandomClass::FaceTarget, 21);

        assert!(raise_corpse(&mut ctx, vile, StateNum::S_VILE_HEAL1));
        assert_eq!(ctx.actors.get(vile).unwrap().angle, fuzz as u32, "corpse is due east");
        assert_eq!(
            ctx.p_random(RandomClass::FaceTarget),
            expected.p_random(RandomClass::FaceTarget),
            "facing a shadow draws from the face-target stream"
        );
    }

    #[test]
    fn test_fresh_corpse_stays_down() {
        let (mut ctx, _world) = test_context();
        let vile = spawn_at(&mut ctx, MobjType::Vile, 0, 0);
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 70, 0);
        damage_mobj(&mut ctx, imp, None, None, 100);
        ctx.actors.get_mut(vile).unwrap().movedir = DirType::East;

        assert!(!raise_corpse(&mut ctx, vile, StateNum::S_VILE_HEAL1), "still falling");
    }

    #[test]
    fn test_cramped_corpse_is_skipped() {
        let (mut ctx, world) = test_context();
        let vile = spawn_at(&mut ctx, MobjType::Vile, 0, 0);
        let cramped = spawn_at(&mut ctx, MobjType::Imp1, 70, -50);
        let open = spawn_at(&mut ctx, MobjType::Imp1, 70, 50);
        for imp in [cramped, open] {
            damage_mobj(&mut ctx, imp, None, None, 100);
            ctx.actors.get_mut(imp).unwrap().tics = -1;
        }
        ctx.actors.set_target(open, Some(vile));
        ctx.actors.get_mut(vile).unwrap().movedir = DirType::East;
        world.borrow_mut().wall_y = Some((-40 * FRACUNIT, 1000 * FRACUNIT));

        assert!(raise_corpse(&mut ctx, vile, StateNum::S_VILE_HEAL1));
        let raised = ctx.actors.get(open).unwrap();
        assert_eq!(raised.health, raised.info.spawnhealth);
        assert_eq!(raised.target, None, "raised monsters forget who killed them");
        assert!(ctx.actors.get(cramped).unwrap().flags.contains(MobjFlags::CORPSE));
    }
}
