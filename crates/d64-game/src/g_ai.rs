// g_ai.rs — Monster awareness, targeting and chasing

/*
Copyright (C) 1993-1997 Id Software, Inc.
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

use crate::g_local::*;
use crate::g_mobj::{set_mobj_state, spawn_mobj};
use crate::game::GameContext;
use crate::m_move::{new_chase_dir, p_move};

// ============================================================
// Sound propagation
// ============================================================

/// Alert target recorded for a sector by the last noise that reached it.
pub fn sector_soundtarget(ctx: &GameContext, sector: SectorId) -> Option<ActorHandle> {
    ctx.sound_sectors.get(sector).and_then(|s| s.soundtarget)
}

fn set_sector_soundtarget(ctx: &mut GameContext, sector: SectorId, target: Option<ActorHandle>) {
    let Some(slot) = ctx.sound_sectors.get_mut(sector) else {
        return;
    };
    let old = std::mem::replace(&mut slot.soundtarget, target);
    if old == target {
        return;
    }
    if let Some(t) = target {
        ctx.actors.acquire(t);
    }
    if let Some(o) = old {
        ctx.actors.release(o);
    }
}

/// Flood outward from `sec` through open two-sided lines. A sound-blocking
/// line is crossed once; the second one stops the flood.
fn recursive_sound(ctx: &mut GameContext, sec: SectorId, soundblocks: i32, target: Option<ActorHandle>) {
    let validcount = ctx.validcount;
    let Some(ss) = ctx.sound_sectors.get_mut(sec) else {
        return;
    };

    // already flooded
    if ss.validcount == validcount && ss.soundtraversed <= soundblocks + 1 {
        return;
    }

    ss.validcount = validcount;
    ss.soundtraversed = soundblocks + 1;
    set_sector_soundtarget(ctx, sec, target);

    for line in ctx.gi.sector_lines(sec) {
        let check = ctx.gi.line(line);
        if !check.is_two_sided() {
            continue;
        }

        // closed door
        if ctx.gi.line_opening(line) <= 0 {
            continue;
        }

        let Some(other) = check.other_side(sec) else {
            continue;
        };

        if check.flags.contains(LineFlags::SOUNDBLOCK) {
            if soundblocks == 0 {
                recursive_sound(ctx, other, 1, target);
            }
        } else {
            recursive_sound(ctx, other, soundblocks, target);
        }
    }
}

/// Wake up monsters within earshot of `emitter`, pointing them at `target`.
pub fn noise_alert(ctx: &mut GameContext, target: Option<ActorHandle>, emitter: ActorHandle) {
    let Some(sector) = ctx.actors.get(emitter).map(|a| a.sector) else {
        return;
    };
    ctx.validcount += 1;
    recursive_sound(ctx, sector, 0, target);
}

// ============================================================
// Range checks
// ============================================================

pub fn check_melee_range(ctx: &GameContext, h: ActorHandle) -> bool {
    let Some(actor) = ctx.actors.get(h) else {
        return false;
    };
    if !actor.flags.contains(MobjFlags::SEETARGET) {
        return false;
    }
    let Some(pl) = actor.target.and_then(|t| ctx.actors.get(t)) else {
        return false;
    };

    aprox_distance(pl.x - actor.x, pl.y - actor.y) < MELEERANGE
}

pub fn check_missile_range(ctx: &mut GameContext, h: ActorHandle) -> bool {
    let Some(actor) = ctx.actors.get_mut(h) else {
        return false;
    };
    if !actor.flags.contains(MobjFlags::SEETARGET) {
        return false;
    }

    if actor.flags.contains(MobjFlags::JUSTHIT) {
        // the target just hit the enemy, so fight back!
        actor.flags.remove(MobjFlags::JUSTHIT);
        return true;
    }

    // do not attack yet
    if actor.reactiontime != 0 {
        return false;
    }

    let (x, y, kind, has_melee) = (actor.x, actor.y, actor.kind, !actor.info.meleestate.is_null());
    let target = actor.target;
    let Some(target) = target.and_then(|t| ctx.actors.get(t)) else {
        return false;
    };

    let mut dist = aprox_distance(x - target.x, y - target.y) - 64 * FRACUNIT;

    // no melee attack, so fire more
    if !has_melee {
        dist -= 128 * FRACUNIT;
    }

    dist >>= 16;

    // too far away
    if matches!(kind, MobjType::Vile | MobjType::Resurrector2) && dist > 14 * 64 {
        return false;
    }

    if kind == MobjType::Skull {
        dist >>= 1;
    }

    dist = dist.min(200);

    ctx.p_random(RandomClass::MissRange) >= dist
}

// ============================================================
// Targeting
// ============================================================

/// Pick a target. Returns true only when the current target is visible and,
/// unless `allaround`, in front (or close enough to notice anyway).
pub fn look_for_players(ctx: &mut GameContext, h: ActorHandle, allaround: bool) -> bool {
    let Some(actor) = ctx.actors.get(h) else {
        return false;
    };

    let target = actor.target.and_then(|t| ctx.actors.get(t).map(|a| (t, a)));
    let has_live_target = target.is_some_and(|(_, t)| t.health > 0);

    if !has_live_target || !actor.flags.contains(MobjFlags::SEETARGET) {
        if !actor.kind.is_player_body() {
            let mut index = 0;

            // find other players
            if ctx.netgame() {
                let mut num = 0;
                let mut cur = 0;
                for (i, p) in ctx.players.iter().enumerate() {
                    if p.in_game {
                        num += 1;
                        if p.mo.is_some() && actor.target == p.mo {
                            cur = i;
                        }
                    }
                }
                if num == 0 {
                    return false;
                }
                index = (cur + 1) % num;

                // don't bother with dead targets
                let alive = ctx.players[index]
                    .mo
                    .and_then(|mo| ctx.actors.get(mo))
                    .is_some_and(|mo| mo.health > 0);
                if !alive {
                    return false;
                }
            }

            let mo = ctx.players[index].mo;
            ctx.actors.set_target(h, mo);
        } else {
            // bots find a killable target as close as possible
            let (x, y) = (actor.x, actor.y);
            let mut best = None;
            let mut dist2 = MAXINT;
            for (other, mo) in ctx.actors.iter() {
                if !mo.flags.contains(MobjFlags::COUNTKILL)
                    || mo.kind.is_player_body()
                    || mo.health <= 0
                    || other == h
                    || mo.removed
                {
                    continue;
                }
                let dist = aprox_distance(mo.x - x, mo.y - y);
                if dist < dist2 {
                    best = Some(other);
                    dist2 = dist;
                }
            }
            if best.is_some() {
                ctx.actors.set_target(h, best);
            }
        }
        return false;
    }

    if sector_soundtarget(ctx, actor.sector).is_none() && !allaround {
        let Some((_, target)) = target else {
            return false;
        };
        let an = point_to_angle2(actor.x, actor.y, target.x, target.y).wrapping_sub(actor.angle);

        if an > ANG90 && an < ANG270 {
            let dist = aprox_distance(target.x - actor.x, target.y - actor.y);

            // behind back; if real close, react anyway
            if dist > MELEERANGE {
                return false;
            }
        }
    }

    true
}

fn see_sound(ctx: &mut GameContext, seesound: Sfx) -> Sfx {
    match seesound {
        Sfx::Possit1 | Sfx::Possit2 | Sfx::Possit3 => {
            [Sfx::Possit1, Sfx::Possit2, Sfx::Possit3][(ctx.p_random(RandomClass::See) % 3) as usize]
        }
        Sfx::Impsit1 | Sfx::Impsit2 => [Sfx::Impsit1, Sfx::Impsit2][(ctx.p_random(RandomClass::See) & 1) as usize],
        other => other,
    }
}

/// Stay in state until a player is sighted.
pub fn a_look(ctx: &mut GameContext, h: ActorHandle) {
    if !look_for_players(ctx, h, false) {
        let Some(actor) = ctx.actors.get_mut(h) else {
            return;
        };
        // any shot will wake up
        actor.threshold = 0;
        let ambush = actor.flags.contains(MobjFlags::AMBUSH);
        let sector = actor.sector;

        let Some(targ) = sector_soundtarget(ctx, sector) else {
            return;
        };
        let shootable = ctx.actors.get(targ).is_some_and(|t| t.flags.contains(MobjFlags::SHOOTABLE));
        if !shootable || ambush {
            return;
        }
        ctx.actors.set_target(h, Some(targ));
    }

    let Some((kind, seesound, seestate)) = ctx.actors.get(h).map(|a| (a.kind, a.info.seesound, a.info.seestate)) else {
        return;
    };

    // go into chase state
    if !seesound.is_none() {
        let sound = see_sound(ctx, seesound);
        let full_volume = matches!(
            kind,
            MobjType::Resurrector | MobjType::Cyborg | MobjType::Resurrector2 | MobjType::Annihilator
        );
        ctx.sound(if full_volume { None } else { Some(h) }, sound);
    }

    set_mobj_state(ctx, h, seestate);
}

/// Run the chase direction search, latching a missing target as fatal.
pub fn chase_dir(ctx: &mut GameContext, h: ActorHandle) {
    if let Err(err) = new_chase_dir(ctx, h) {
        ctx.latch(err);
    }
}

/// Close in on the target, attacking when in range.
pub fn a_chase(ctx: &mut GameContext, h: ActorHandle) {
    let fast = ctx.fast_attacks();
    let reroute = ctx.reroutes_after_attack();
    let netgame = ctx.netgame();

    let Some(actor) = ctx.actors.get(h) else {
        return;
    };
    let target = actor.target.and_then(|t| ctx.actors.get(t));
    let target_alive = target.is_some_and(|t| t.health > 0);
    let target_shootable = target.is_some_and(|t| t.flags.contains(MobjFlags::SHOOTABLE));

    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };

    if actor.reactiontime != 0 {
        actor.reactiontime -= 1;
    }

    // modify target threshold
    if actor.threshold != 0 {
        if !target_alive {
            actor.threshold = 0;
        } else {
            actor.threshold -= 1;
        }
    }

    // turn towards movement direction if not there yet
    if (actor.movedir as usize) < 8 {
        actor.angle &= 7 << 29;
        let delta = actor.angle.wrapping_sub((actor.movedir as u32) << 29) as i32;

        if delta > 0 {
            actor.angle = actor.angle.wrapping_sub(ANG45);
        } else if delta < 0 {
            actor.angle = actor.angle.wrapping_add(ANG45);
        }
    }

    if !target_shootable {
        // look for a new target
        if look_for_players(ctx, h, true) {
            return;
        }
        if let Some(spawnstate) = ctx.actors.get(h).map(|a| a.info.spawnstate) {
            set_mobj_state(ctx, h, spawnstate);
        }
        return;
    }

    // do not attack twice in a row
    if actor.flags.contains(MobjFlags::JUSTATTACKED) {
        actor.flags.remove(MobjFlags::JUSTATTACKED);
        if reroute {
            chase_dir(ctx, h);
        }
        return;
    }

    let info = actor.info;
    let movecount = actor.movecount;

    // check for melee attack
    if !info.meleestate.is_null() && check_melee_range(ctx, h) {
        ctx.sound(Some(h), info.attacksound);
        set_mobj_state(ctx, h, info.meleestate);
        return;
    }

    // check for missile attack
    if !info.missilestate.is_null() && (fast || movecount == 0) && check_missile_range(ctx, h) {
        set_mobj_state(ctx, h, info.missilestate);
        if let Some(actor) = ctx.actors.get_mut(h) {
            actor.flags |= MobjFlags::JUSTATTACKED;
        }
        return;
    }

    // possibly choose another target
    let Some(actor) = ctx.actors.get(h) else {
        return;
    };
    if netgame
        && actor.threshold == 0
        && !actor.flags.contains(MobjFlags::SEETARGET)
        && look_for_players(ctx, h, true)
    {
        return;
    }

    // chase towards player
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    actor.movecount -= 1;
    if actor.movecount < 0 || !p_move(ctx, h) {
        chase_dir(ctx, h);
    }

    // make active sound
    if !info.activesound.is_none() && ctx.p_random(RandomClass::See) < 3 {
        ctx.sound(Some(h), info.activesound);
    }
}

pub fn a_face_target(ctx: &mut GameContext, h: ActorHandle) {
    if let Some(target) = ctx.actors.get(h).and_then(|a| a.target) {
        face_actor(ctx, h, target);
    }
}

/// Turn `h` toward `other`, with a random wobble when `other` is a shadow.
pub fn face_actor(ctx: &mut GameContext, h: ActorHandle, other: ActorHandle) {
    let Some(actor) = ctx.actors.get(h) else {
        return;
    };
    let Some(target) = ctx.actors.get(other) else {
        return;
    };

    let angle = point_to_angle2(actor.x, actor.y, target.x, target.y);
    let shadow = target.flags.contains(MobjFlags::SHADOW);
    let fuzz = if shadow { ctx.p_random_shift(RandomClass::FaceTarget, 21) } else { 0 };

    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.flags.remove(MobjFlags::AMBUSH);
        actor.angle = angle.wrapping_add(fuzz as u32);
    }
}

const TRACEANGLE: Angle = 0x1000_0000;

/// Homing missile steering with a smoke trail.
pub fn a_tracer(ctx: &mut GameContext, h: ActorHandle) {
    let Some((x, y, z, momx, momy)) = ctx.actors.get(h).map(|a| (a.x, a.y, a.z, a.momx, a.momy)) else {
        return;
    };

    let th = spawn_mobj(ctx, x - momx, y - momy, z, MobjType::SmokeRed);
    let trim = ctx.p_random(RandomClass::Tracer) & 3;
    if let Some(smoke) = ctx.actors.get_mut(th) {
        smoke.momz = FRACUNIT;
        smoke.tics = (smoke.tics - trim).max(1);
    }

    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    let threshold = actor.threshold;
    actor.threshold -= 1;
    if threshold < -100 {
        return;
    }
    let tracer = actor.tracer;

    // adjust direction
    let Some(dest) = tracer.and_then(|t| ctx.actors.get(t)).filter(|d| d.health > 0) else {
        return;
    };
    let (dx, dy, dz, dheight) = (dest.x, dest.y, dest.z, dest.height);

    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };

    // change angle
    let exact = point_to_angle2(actor.x, actor.y, dx, dy);
    if exact != actor.angle {
        if exact.wrapping_sub(actor.angle) > 0x8000_0000 {
            actor.angle = actor.angle.wrapping_sub(TRACEANGLE);
            if exact.wrapping_sub(actor.angle) < 0x8000_0000 {
                actor.angle = exact;
            }
        } else {
            actor.angle = actor.angle.wrapping_add(TRACEANGLE);
            if exact.wrapping_sub(actor.angle) > 0x8000_0000 {
                actor.angle = exact;
            }
        }
    }

    let speed = actor.info.speed;
    actor.momx = fixed_mul(speed, cos_angle(actor.angle));
    actor.momy = fixed_mul(speed, sin_angle(actor.angle));

    // change slope
    let dist = (aprox_distance(dx - actor.x, dy - actor.y) / speed).max(1);

    let mut slope = (dheight << 2) - dheight;
    if slope < 0 {
        slope += 3;
    }
    let slope = (dz + (slope >> 2) - actor.z) / dist;

    if slope < actor.momz {
        actor.momz -= FRACUNIT >> 2;
    } else {
        actor.momz += FRACUNIT >> 2;
    }
}

/// Fire the death special once every actor sharing the tid is dead.
pub fn a_on_death_trigger(ctx: &mut GameContext, h: ActorHandle) {
    let Some(mo) = ctx.actors.get(h) else {
        return;
    };
    if !mo.flags.contains(MobjFlags::TRIGDEATH) {
        return;
    }

    let tid = mo.tid;
    if ctx.actors.iter().any(|(_, other)| !other.removed && other.tid == tid && other.health > 0) {
        return;
    }

    ctx.gi.queue_death_special(&ctx.actors, h);
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_import::LineInfo;
    use d64_common::config::Skill;
    use crate::test_support::*;

    /// Three sectors in a row: 0 -(open)- 1 -(soundblock)- 2 -(soundblock)- 3
    fn corridor(world: &mut MockWorld) {
        let sec = world.sectors[0];
        world.sectors = vec![sec; 4];
        world.lines = vec![
            LineInfo { flags: LineFlags::TWOSIDED, front: 0, back: Some(1), ..Default::default() },
            LineInfo { flags: LineFlags::TWOSIDED | LineFlags::SOUNDBLOCK, front: 1, back: Some(2), ..Default::default() },
            LineInfo { flags: LineFlags::TWOSIDED | LineFlags::SOUNDBLOCK, front: 2, back: Some(3), ..Default::default() },
        ];
        world.sector_lines = vec![vec![0], vec![0, 1], vec![1, 2], vec![2]];
    }

    #[test]
    fn test_noise_crosses_one_sound_block() {
        let (mut ctx, world) = test_context();
        corridor(&mut world.borrow_mut());
        ctx.sound_sectors = vec![Default::default(); 4];
        let player = spawn_at(&mut ctx, MobjType::Player, 0, 0);

        noise_alert(&mut ctx, Some(player), player);

        assert_eq!(sector_soundtarget(&ctx, 0), Some(player));
        assert_eq!(sector_soundtarget(&ctx, 1), Some(player));
        assert_eq!(sector_soundtarget(&ctx, 2), Some(player));
        assert_eq!(sector_soundtarget(&ctx, 3), None, "second sound block stops the flood");
        assert_eq!(ctx.actors.refcount(player), 3, "each alerted sector holds a reference");
    }

    #[test]
    fn test_noise_skips_closed_doors() {
        let (mut ctx, world) = test_context();
        corridor(&mut world.borrow_mut());
        world.borrow_mut().openings.insert(0, 0);
        ctx.sound_sectors = vec![Default::default(); 4];
        let player = spawn_at(&mut ctx, MobjType::Player, 0, 0);

        noise_alert(&mut ctx, Some(player), player);
        assert_eq!(sector_soundtarget(&ctx, 1), None);
    }

    #[test]
    fn test_melee_range_needs_sight() {
        let (mut ctx, _world) = test_context();
        let demon = spawn_at(&mut ctx, MobjType::Demon1, 0, 0);
        let player = spawn_at(&mut ctx, MobjType::Player, 60, 0);
        ctx.actors.set_target(demon, Some(player));

        assert!(!check_melee_range(&ctx, demon));
        ctx.actors.get_mut(demon).unwrap().flags |= MobjFlags::SEETARGET;
        assert!(check_melee_range(&ctx, demon));
    }

    #[test]
    fn test_missile_range_just_hit_forces_shot() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let player = spawn_at(&mut ctx, MobjType::Player, 3000, 0);
        ctx.actors.set_target(imp, Some(player));
        let actor = ctx.actors.get_mut(imp).unwrap();
        actor.flags |= MobjFlags::SEETARGET | MobjFlags::JUSTHIT;
        actor.reactiontime = 5;

        assert!(check_missile_range(&mut ctx, imp));
        assert!(!ctx.actors.get(imp).unwrap().flags.contains(MobjFlags::JUSTHIT));
        assert!(!check_missile_range(&mut ctx, imp), "reaction time still pending");
    }

    #[test]
    fn test_vile_refuses_long_shots() {
        let (mut ctx, _world) = test_context();
        let vile = spawn_at(&mut ctx, MobjType::Vile, 0, 0);
        let player = spawn_at(&mut ctx, MobjType::Player, 15 * 64 + 200, 0);
        ctx.actors.set_target(vile, Some(player));
        let actor = ctx.actors.get_mut(vile).unwrap();
        actor.flags |= MobjFlags::SEETARGET;
        actor.reactiontime = 0;

        for _ in 0..20 {
            assert!(!check_missile_range(&mut ctx, vile));
        }
    }

    #[test]
    fn test_look_wakes_on_sector_noise() {
        let (mut ctx, world) = test_context();
        ctx.sound_sectors = vec![Default::default(); 1];
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let player = spawn_at(&mut ctx, MobjType::Player, 512, 0);
        ctx.players[0].in_game = true;
        ctx.players[0].mo = None;

        a_look(&mut ctx, imp);
        assert_eq!(ctx.actors.get(imp).unwrap().state, StateNum::S_TROO_STND);

        noise_alert(&mut ctx, Some(player), player);
        a_look(&mut ctx, imp);
        let actor = ctx.actors.get(imp).unwrap();
        assert_eq!(actor.target, Some(player));
        assert_eq!(actor.state, actor.info.seestate);
        let sights = world
            .borrow()
            .sounds
            .iter()
            .filter(|(o, s)| *o == Some(imp) && matches!(s, Sfx::Impsit1 | Sfx::Impsit2))
            .count();
        assert_eq!(sights, 1, "sight sound plays once");
    }

    #[test]
    fn test_ambush_ignores_noise() {
        let (mut ctx, _world) = test_context();
        ctx.sound_sectors = vec![Default::default(); 1];
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let player = spawn_at(&mut ctx, MobjType::Player, 512, 0);
        ctx.actors.get_mut(imp).unwrap().flags |= MobjFlags::AMBUSH;

        noise_alert(&mut ctx, Some(player), player);
        a_look(&mut ctx, imp);
        assert_eq!(ctx.actors.get(imp).unwrap().state, StateNum::S_TROO_STND);
    }

    #[test]
    fn test_bot_targets_nearest_monster() {
        let (mut ctx, _world) = test_context();
        let bot = spawn_at(&mut ctx, MobjType::PlayerBot1, 0, 0);
        let far = spawn_at(&mut ctx, MobjType::Imp1, 900, 0);
        let near = spawn_at(&mut ctx, MobjType::Imp1, 300, 0);

        assert!(!look_for_players(&mut ctx, bot, true));
        assert_eq!(ctx.actors.get(bot).unwrap().target, Some(near));
        assert_ne!(ctx.actors.get(bot).unwrap().target, Some(far));
    }

    #[test]
    fn test_look_ignores_targets_behind() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let player = spawn_at(&mut ctx, MobjType::Player, -512, 0);
        ctx.actors.set_target(imp, Some(player));
        ctx.actors.get_mut(imp).unwrap().flags |= MobjFlags::SEETARGET;

        assert!(!look_for_players(&mut ctx, imp, false), "target behind its back");
        assert!(look_for_players(&mut ctx, imp, true));
    }

    #[test]
    fn test_face_target_clears_ambush() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let player = spawn_at(&mut ctx, MobjType::Player, 0, 512);
        ctx.actors.set_target(imp, Some(player));
        ctx.actors.get_mut(imp).unwrap().flags |= MobjFlags::AMBUSH;

        a_face_target(&mut ctx, imp);
        let actor = ctx.actors.get(imp).unwrap();
        assert_eq!(actor.angle, ANG90 - 1, "steep octants count back from the quarter turn");
        assert!(!actor.flags.contains(MobjFlags::AMBUSH));
    }

    #[test]
    fn test_chase_without_target_returns_to_spawn() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        set_mobj_state(&mut ctx, imp, StateNum::S_TROO_RUN1);
        a_chase(&mut ctx, imp);
        assert_eq!(ctx.actors.get(imp).unwrap().state, StateNum::S_TROO_STND);
    }

    fn movedir_after_attack(skill: Skill, fast_monsters: bool) -> DirType {
        let (mut ctx, _world) = test_context();
        ctx.options.skill = skill;
        ctx.options.fast_monsters = fast_monsters;
        let player = spawn_at(&mut ctx, MobjType::Player, 512, 0);
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        set_mobj_state(&mut ctx, imp, StateNum::S_TROO_RUN1);
        ctx.actors.set_target(imp, Some(player));
        ctx.actors.get_mut(imp).unwrap().flags |= MobjFlags::JUSTATTACKED;

        a_chase(&mut ctx, imp);
        let actor = ctx.actors.get(imp).unwrap();
        assert!(!actor.flags.contains(MobjFlags::JUSTATTACKED));
        actor.movedir
    }

    #[test]
    fn test_chase_reroutes_after_attack() {
        for skill in [Skill::Hard, Skill::DoomSlayer, Skill::UltraNightmare] {
            assert_ne!(movedir_after_attack(skill, false), DirType::NoDir, "{skill:?} should pick a direction");
        }
        assert_eq!(movedir_after_attack(Skill::Nightmare, false), DirType::NoDir);
        assert_eq!(movedir_after_attack(Skill::Hard, true), DirType::NoDir, "fast monsters hold still");
    }

    #[test]
    fn test_death_trigger_waits_for_whole_group() {
        let (mut ctx, world) = test_context();
        let a = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let b = spawn_at(&mut ctx, MobjType::Imp1, 256, 0);
        for h in [a, b] {
            let actor = ctx.actors.get_mut(h).unwrap();
            actor.tid = 7;
            actor.flags |= MobjFlags::TRIGDEATH;
        }

        ctx.actors.get_mut(a).unwrap().health = 0;
        a_on_death_trigger(&mut ctx, a);
        assert!(world.borrow().death_specials.is_empty());

        ctx.actors.get_mut(b).unwrap().health = 0;
        a_on_death_trigger(&mut ctx, b);
        assert_eq!(world.borrow().death_specials, vec![b]);
    }

    #[test]
    fn test_tracer_turns_toward_dest() {
        let (mut ctx, _world) = test_context();
        let player = spawn_at(&mut ctx, MobjType::Player, 0, 512);
        let rocket = spawn_at(&mut ctx, MobjType::ProjTracer, 0, 0);
        ctx.actors.set_tracer(rocket, Some(player));
        let before = ctx.actors.len();

        a_tracer(&mut ctx, rocket);
        let actor = ctx.actors.get(rocket).unwrap();
        assert_eq!(actor.angle, TRACEANGLE, "turn by one step toward the target");
        assert_eq!(actor.threshold, -1);
        assert_eq!(ctx.actors.len(), before + 1, "smoke puff");
    }
}
