// g_main.rs — level setup, the per-tic actor pass and teardown

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

use tracing::{debug, info};

use crate::error::{SimError, SimResult};
use crate::g_effects::{clear_effects, run_effects};
use crate::g_local::*;
use crate::g_mobj::{mobj_thinker, run_pending};
use crate::g_spawn::{spawn_map_thing, spawn_player};
use crate::game::{BrainTargets, GameContext, LevelLocals, SoundSector};

/// Seat a player for the next level load. The player comes in with a
/// fresh inventory.
pub fn join_player(ctx: &mut GameContext, index: usize, bot: bool) {
    let Some(p) = ctx.players.get_mut(index) else {
        return;
    };
    p.in_game = true;
    p.bot = bot;
    p.playerstate = PlayerState::Reborn;
}

/// Drop everything the previous level left behind.
pub fn teardown(ctx: &mut GameContext) {
    clear_effects(ctx);
    ctx.actors.clear();
    ctx.spawnlist.clear();
    ctx.deathmatch_starts.clear();
    ctx.player_starts = [None; MAXPLAYERS];
    ctx.sound_sectors.clear();
    ctx.brain = BrainTargets::default();
    ctx.blockthing = None;
    ctx.fatal = None;
    for p in ctx.players.iter_mut() {
        p.mo = None;
    }
    debug!("level torn down");
}

/// Start a level over `numsectors` sectors: place every map thing, then put
/// the players on their starts.
pub fn load_level(ctx: &mut GameContext, numsectors: usize, things: &[MapThing]) -> SimResult<()> {
    if ctx.players_in_game() == 0 {
        return Err(SimError::NoPlayerInGame);
    }
    ctx.apply_latched_cvars()?;

    teardown(ctx);
    ctx.level = LevelLocals::default();
    ctx.sound_sectors = vec![SoundSector::default(); numsectors];

    for mthing in things {
        spawn_map_thing(ctx, mthing)?;
    }

    for i in 0..MAXPLAYERS {
        if !ctx.players[i].in_game {
            continue;
        }
        let Some(start) = player_start(ctx, i) else {
            continue;
        };
        spawn_player(ctx, &start)?;
    }

    info!(
        things = things.len(),
        actors = ctx.actors.len(),
        kills = ctx.level.totalkills,
        items = ctx.level.totalitems,
        secrets = ctx.level.totalsecret,
        deferred = ctx.spawnlist.len(),
        "level loaded"
    );
    Ok(())
}

/// Deathmatch players rotate through the deathmatch starts; everyone else
/// uses their own.
fn player_start(ctx: &GameContext, i: usize) -> Option<MapThing> {
    let dm = &ctx.deathmatch_starts;
    let start = if ctx.options.deathmatch && !dm.is_empty() { Some(dm[i % dm.len()]) } else { ctx.player_starts[i] };
    start.map(|s| MapThing { kind: i as i16 + 1, ..s })
}

/// Refresh the see-target flag of every active monster.
fn sight_pass(ctx: &mut GameContext) {
    for h in ctx.actors.handles() {
        let Some(actor) = ctx.actors.get(h) else {
            continue;
        };
        if actor.removed || !actor.flags.contains(MobjFlags::COUNTKILL) || actor.tics == -1 {
            continue;
        }
        let seen = match actor.target {
            Some(t) if ctx.actors.is_live(t) => ctx.gi.check_sight(&ctx.actors, h, t),
            _ => false,
        };
        if let Some(actor) = ctx.actors.get_mut(h) {
            actor.flags.set(MobjFlags::SEETARGET, seen);
        }
    }
}

/// Advance the level by one tic.
pub fn run_tic(ctx: &mut GameContext) -> SimResult<()> {
    ctx.level.leveltime += 1;
    run_effects(ctx);
    sight_pass(ctx);

    ctx.actors.begin_pass();
    while let Some(h) = ctx.actors.next_in_pass() {
        let pending = match ctx.actors.get(h) {
            Some(a) => !a.pending.is_none(),
            None => continue,
        };
        if pending {
            run_pending(ctx, h);
        } else {
            mobj_thinker(ctx, h);
        }
    }

    match ctx.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use d64_common::config::Skill;
    use d64_common::cvar::SetOutcome;

    const ALL_SKILLS: MapThingOptions =
        MapThingOptions::EASY.union(MapThingOptions::NORMAL).union(MapThingOptions::HARD);

    fn thing(kind: i16, x: i16, y: i16) -> MapThing {
        MapThing { x, y, z: 0, angle: 0, kind, options: ALL_SKILLS, tid: 0 }
    }

    #[test]
    fn test_load_needs_a_player() {
        let (mut ctx, _world) = test_context();
        assert_eq!(load_level(&mut ctx, 1, &[thing(1, 0, 0)]), Err(SimError::NoPlayerInGame));
    }

    #[test]
    fn test_load_places_things_and_players() {
        let (mut ctx, _world) = test_context();
        join_player(&mut ctx, 0, false);
        load_level(&mut ctx, 2, &[thing(1, 0, 0), thing(3001, 300, 0), thing(2012, 0, 300)]).unwrap();

        assert_eq!(ctx.sound_sectors.len(), 2);
        assert_eq!(ctx.level.totalkills, 1);
        let mo = ctx.players[0].mo.expect("player body");
        assert_eq!(ctx.actors.get(mo).unwrap().health, crate::g_spawn::MAXHEALTH);
        assert_eq!(ctx.actors.iter().count(), 3);
    }

    #[test]
    fn test_reload_clears_previous_level() {
        let (mut ctx, _world) = test_context();
        join_player(&mut ctx, 0, false);
        load_level(&mut ctx, 1, &[thing(1, 0, 0), thing(3001, 300, 0)]).unwrap();
        load_level(&mut ctx, 1, &[thing(1, 0, 0)]).unwrap();
        assert_eq!(ctx.actors.iter().count(), 1);
        assert_eq!(ctx.level.totalkills, 0);
    }

    #[test]
    fn test_deathmatch_uses_deathmatch_starts() {
        let (mut ctx, _world) = test_context();
        ctx.options.deathmatch = true;
        join_player(&mut ctx, 0, false);
        load_level(&mut ctx, 1, &[thing(1, 0, 0), thing(11, 512, 256)]).unwrap();
        let mo = ctx.players[0].mo.unwrap();
        let body = ctx.actors.get(mo).unwrap();
        assert_eq!((body.x, body.y), (512 * FRACUNIT, 256 * FRACUNIT));
    }

    #[test]
    fn test_latched_options_wait_for_load() {
        let (mut ctx, _world) = test_context();
        join_player(&mut ctx, 0, false);
        assert_eq!(ctx.set_cvar("skill", "4"), Ok(SetOutcome::Latched));
        assert_eq!(ctx.set_cvar("compat_mobjpass", "0"), Ok(SetOutcome::Applied));
        assert_eq!(ctx.options.skill, Skill::Medium);
        assert!(!ctx.options.compat_mobjpass, "unlatched toggles apply at once");

        load_level(&mut ctx, 1, &[thing(1, 0, 0)]).unwrap();
        assert_eq!(ctx.options.skill, Skill::Nightmare);
        assert!(ctx.options.monsters_respawn());
    }

    #[test]
    fn test_new_seed_restarts_random_streams() {
        let (mut ctx, _world) = test_context();
        join_player(&mut ctx, 0, false);
        ctx.set_cvar("rng_seed", "99").unwrap();
        load_level(&mut ctx, 1, &[thing(1, 0, 0)]).unwrap();

        let mut fresh = d64_common::random::Random::new(99);
        assert_eq!(ctx.options.seed, 99);
        assert_eq!(ctx.p_random(RandomClass::See), fresh.p_random(RandomClass::See));
    }

    #[test]
    fn test_bad_latched_skill_fails_load() {
        let (mut ctx, _world) = test_context();
        join_player(&mut ctx, 0, false);
        ctx.set_cvar("skill", "9").unwrap();
        let err = load_level(&mut ctx, 1, &[thing(1, 0, 0)]).unwrap_err();
        assert!(matches!(err, SimError::BadOptions(_)), "{err}");
    }

    #[test]
    fn test_unknown_thing_aborts_load() {
        let (mut ctx, _world) = test_context();
        join_player(&mut ctx, 0, false);
        let err = load_level(&mut ctx, 1, &[thing(1, 0, 0), thing(-7, 1, 2)]).unwrap_err();
        assert!(matches!(err, SimError::UnknownThingType { kind: -7, .. }));
    }

    #[test]
    fn test_tic_counts_time_and_refreshes_sight() {
        let (mut ctx, world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let player = spawn_at(&mut ctx, MobjType::Player, 1000, 0);
        ctx.actors.set_target(imp, Some(player));

        run_tic(&mut ctx).unwrap();
        assert_eq!(ctx.level.leveltime, 1);
        assert!(ctx.actors.get(imp).unwrap().flags.contains(MobjFlags::SEETARGET));

        world.borrow_mut().sight = false;
        run_tic(&mut ctx).unwrap();
        assert!(!ctx.actors.get(imp).unwrap().flags.contains(MobjFlags::SEETARGET));
    }

    #[test]
    fn test_pending_callback_runs_instead_of_thinker() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        ctx.actors.get_mut(imp).unwrap().pending = PendingAction::Remove;
        run_tic(&mut ctx).unwrap();
        assert!(ctx.actors.get(imp).map_or(true, |a| a.removed));
    }

    #[test]
    fn test_latched_error_surfaces_once() {
        let (mut ctx, _world) = test_context();
        ctx.latch(SimError::NoChaseTarget { index: 3 });
        assert_eq!(run_tic(&mut ctx), Err(SimError::NoChaseTarget { index: 3 }));
        assert_eq!(run_tic(&mut ctx), Ok(()));
    }

    #[test]
    fn test_charging_skull_bites_once_next_tic() {
        let (mut ctx, world) = test_context();
        let skull = spawn_at(&mut ctx, MobjType::Skull, 0, 0);
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 40, 0);
        {
            let s = ctx.actors.get_mut(skull).unwrap();
            s.flags |= MobjFlags::SKULLFLY;
            s.momx = 20 * FRACUNIT;
        }

        run_tic(&mut ctx).unwrap();
        assert!(world.borrow().damage_log.is_empty(), "the bite lands on the following tic");

        run_tic(&mut ctx).unwrap();
        let s = ctx.actors.get(skull).unwrap();
        assert!(!s.flags.contains(MobjFlags::SKULLFLY));
        assert_eq!((s.momx, s.momy, s.momz), (0, 0, 0));
        assert_eq!(s.state, s.info.spawnstate);

        for _ in 0..4 {
            run_tic(&mut ctx).unwrap();
        }
        let bites = world.borrow().damage_log.iter().filter(|&&(t, _)| t == imp).count();
        assert_eq!(bites, 1);
    }

    #[test]
    fn test_melee_monster_closes_in_and_hits() {
        let (mut ctx, world) = test_context();
        join_player(&mut ctx, 0, false);
        load_level(&mut ctx, 1, &[thing(3002, 0, 0), thing(1, 10, 0)]).unwrap();

        let player = ctx.players[0].mo.unwrap();
        let (demon, _) = ctx.actors.iter().find(|(_, a)| a.kind == MobjType::Demon1).expect("demon placed");
        let melee = ctx.info(MobjType::Demon1).meleestate;

        let mut entered_melee = false;
        for _ in 0..200 {
            run_tic(&mut ctx).unwrap();
            entered_melee |= ctx.actors.get(demon).is_some_and(|d| d.state == melee);
            if world.borrow().damage_log.iter().any(|&(t, dmg)| t == player && dmg > 0) {
                break;
            }
        }

        assert!(entered_melee, "demon never reached its melee state");
        assert!(
            world.borrow().damage_log.iter().any(|&(t, dmg)| t == player && dmg > 0),
            "player took no damage"
        );
    }
}
