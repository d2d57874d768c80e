// g_combat.rs — damage outcomes, death and splash damage

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

use tracing::debug;

use crate::g_local::*;
use crate::g_mobj::{set_mobj_state, spawn_mobj};
use crate::game::GameContext;
use crate::game_import::DamageResult;

/// Hit `target` for `damage` points. The engine decides armor, health and
/// knockback; the outcome drives pain, retargeting and death here.
pub fn damage_mobj(
    ctx: &mut GameContext,
    target: ActorHandle,
    inflictor: Option<ActorHandle>,
    source: Option<ActorHandle>,
    damage: i32,
) -> DamageResult {
    if !ctx.actors.is_live(target) {
        return DamageResult::Ignored;
    }

    let result = ctx.gi.damage_mobj(&mut ctx.actors, target, inflictor, source, damage);

    match result {
        DamageResult::Ignored => return result,
        DamageResult::Killed => {
            kill_mobj(ctx, source, target);
            return result;
        }
        DamageResult::Pain => {
            let Some(actor) = ctx.actors.get_mut(target) else {
                return result;
            };
            // fight back!
            actor.flags |= MobjFlags::JUSTHIT;
            let painstate = actor.info.painstate;
            if !painstate.is_null() && !set_mobj_state(ctx, target, painstate) {
                return result;
            }
        }
        DamageResult::Hurt => {}
    }

    let Some(actor) = ctx.actors.get_mut(target) else {
        return result;
    };
    // we're awake now...
    actor.reactiontime = 0;

    let Some(src) = source.filter(|&s| s != target) else {
        return result;
    };
    let (src_kind, src_player) = match ctx.actors.get(src) {
        Some(s) => (s.kind, s.player.is_some()),
        None => return result,
    };

    let Some(actor) = ctx.actors.get(target) else {
        return result;
    };
    let retarget = (actor.threshold == 0 || actor.kind == MobjType::Vile)
        && src_kind != MobjType::Vile
        && (src_player || !actor.flags.contains(MobjFlags::NOINFIGHTING))
        && actor.target != Some(src);
    if !retarget {
        return result;
    }

    // if not intent on another player, chase after this one
    ctx.actors.set_target(target, Some(src));
    let Some(actor) = ctx.actors.get_mut(target) else {
        return result;
    };
    actor.threshold = BASETHRESHOLD;
    let (state, spawnstate, seestate) = (actor.state, actor.info.spawnstate, actor.info.seestate);
    if state == spawnstate && !seestate.is_null() {
        set_mobj_state(ctx, target, seestate);
    }
    result
}

/// Item a dead monster leaves behind.
fn death_drop(kind: MobjType) -> Option<MobjType> {
    match kind {
        MobjType::Possessed1 => Some(MobjType::AmmoClip),
        MobjType::Possessed2 => Some(MobjType::WeapShotgun),
        MobjType::ChainGuy => Some(MobjType::WeapChaingun),
        _ => None,
    }
}

pub fn kill_mobj(ctx: &mut GameContext, source: Option<ActorHandle>, target: ActorHandle) {
    let Some(actor) = ctx.actors.get_mut(target) else {
        return;
    };

    actor.flags.remove(MobjFlags::SHOOTABLE | MobjFlags::FLOAT | MobjFlags::SKULLFLY);
    actor.flags |= MobjFlags::CORPSE | MobjFlags::DROPOFF;
    actor.height >>= 2;

    if actor.flags.contains(MobjFlags::COUNTKILL) {
        ctx.level.killcount += 1;
    }

    if let Some(p) = actor.player {
        actor.flags.remove(MobjFlags::SOLID);
        if let Some(player) = ctx.players.get_mut(p) {
            player.playerstate = PlayerState::Dead;
            player.health = actor.health.max(0);
        }
    }

    let info = actor.info;
    let (kind, x, y) = (actor.kind, actor.x, actor.y);
    let state = if actor.health < -info.spawnhealth && !info.xdeathstate.is_null() {
        info.xdeathstate
    } else {
        info.deathstate
    };

    debug!(?kind, index = target.index(), killer = ?source.map(|s| s.index()), "killed");

    if set_mobj_state(ctx, target, state) {
        let trim = ctx.p_random(RandomClass::KillMobj) & 3;
        if let Some(actor) = ctx.actors.get_mut(target) {
            if actor.tics != -1 {
                actor.tics = (actor.tics - trim).max(1);
            }
        }
    }

    if let Some(item) = death_drop(kind) {
        let mo = spawn_mobj(ctx, x, y, ONFLOORZ, item);
        if let Some(drop) = ctx.actors.get_mut(mo) {
            // special versions of items
            drop.flags |= MobjFlags::DROPPED;
        }
    }
}

/// Blast centred on `spot`. Victims and their damage come from the engine.
pub fn radius_attack(ctx: &mut GameContext, spot: ActorHandle, source: Option<ActorHandle>, damage: i32) {
    if !ctx.actors.contains(spot) {
        return;
    }
    let victims = ctx.gi.radius_attack_targets(&ctx.actors, spot, damage);
    for (victim, amount) in victims {
        if amount > 0 {
            damage_mobj(ctx, victim, Some(spot), source, amount);
        }
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn test_pain_enters_pain_state() {
        let (mut ctx, world) = test_context();
        world.borrow_mut().pain = true;
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);

        assert_eq!(damage_mobj(&mut ctx, imp, None, None, 5), DamageResult::Pain);
        let actor = ctx.actors.get(imp).unwrap();
        assert_eq!(actor.state, StateNum::S_TROO_PAIN);
        assert!(actor.flags.contains(MobjFlags::JUSTHIT));
        assert_eq!(actor.reactiontime, 0);
    }

    #[test]
    fn test_damage_retargets_to_attacker() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let zombie = spawn_at(&mut ctx, MobjType::Possessed1, 256, 0);

        damage_mobj(&mut ctx, imp, Some(zombie), Some(zombie), 3);
        let actor = ctx.actors.get(imp).unwrap();
        assert_eq!(actor.target, Some(zombie));
        // entering the see state runs one chase step, which ticks the threshold
        assert_eq!(actor.threshold, BASETHRESHOLD - 1);
        assert_ne!(actor.state, actor.info.spawnstate, "woken from its spawn state");
        assert_eq!(ctx.actors.refcount(zombie), 1);
    }

    #[test]
    fn test_no_infighting_ignores_monsters() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let zombie = spawn_at(&mut ctx, MobjType::Possessed1, 256, 0);
        ctx.actors.get_mut(imp).unwrap().flags |= MobjFlags::NOINFIGHTING;

        damage_mobj(&mut ctx, imp, Some(zombie), Some(zombie), 3);
        assert_eq!(ctx.actors.get(imp).unwrap().target, None);
    }

    #[test]
    fn test_kill_makes_corpse() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let height = ctx.actors.get(imp).unwrap().height;

        assert_eq!(damage_mobj(&mut ctx, imp, None, None, 1000), DamageResult::Killed);
        let actor = ctx.actors.get(imp).unwrap();
        assert!(actor.flags.contains(MobjFlags::CORPSE | MobjFlags::DROPOFF));
        assert!(!actor.flags.contains(MobjFlags::SHOOTABLE));
        assert_eq!(actor.height, height >> 2);
        assert_eq!(ctx.level.killcount, 1);
        assert!(actor.tics >= 1);
    }

    #[test]
    fn test_overkill_gibs() {
        let (mut ctx, _world) = test_context();
        let a = spawn_at(&mut ctx, MobjType::Possessed1, 0, 0);
        let b = spawn_at(&mut ctx, MobjType::Possessed1, 256, 0);

        damage_mobj(&mut ctx, a, None, None, 20);
        damage_mobj(&mut ctx, b, None, None, 100);
        assert_eq!(ctx.actors.get(a).unwrap().state, StateNum::S_POSS_DIE1);
        assert_eq!(ctx.actors.get(b).unwrap().state, StateNum::S_POSS_XDIE1);
    }

    #[test]
    fn test_zombie_drops_clip() {
        let (mut ctx, _world) = test_context();
        let zombie = spawn_at(&mut ctx, MobjType::Possessed1, 0, 0);
        damage_mobj(&mut ctx, zombie, None, None, 100);

        let clip = ctx.actors.iter().find(|(_, a)| a.kind == MobjType::AmmoClip).map(|(_, a)| a.flags);
        assert!(clip.is_some_and(|f| f.contains(MobjFlags::DROPPED)), "clip dropped");
    }

    #[test]
    fn test_dead_player_state() {
        let (mut ctx, _world) = test_context();
        let mo = spawn_at(&mut ctx, MobjType::Player, 0, 0);
        ctx.actors.get_mut(mo).unwrap().player = Some(0);
        ctx.players[0].in_game = true;

        damage_mobj(&mut ctx, mo, None, None, 500);
        assert_eq!(ctx.players[0].playerstate, PlayerState::Dead);
        assert!(!ctx.actors.get(mo).unwrap().flags.contains(MobjFlags::SOLID));
    }

    #[test]
    fn test_corpses_ignore_damage() {
        let (mut ctx, _world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        damage_mobj(&mut ctx, imp, None, None, 1000);
        assert_eq!(damage_mobj(&mut ctx, imp, None, None, 10), DamageResult::Ignored);
        assert_eq!(ctx.level.killcount, 1);
    }

    #[test]
    fn test_radius_attack_hits_neighbours_only() {
        let (mut ctx, world) = test_context();
        let barrel = spawn_at(&mut ctx, MobjType::Barrel, 0, 0);
        let near = spawn_at(&mut ctx, MobjType::Imp1, 64, 0);
        let far = spawn_at(&mut ctx, MobjType::Imp1, 1024, 0);
        ctx.actors.get_mut(barrel).unwrap().flags.remove(MobjFlags::SHOOTABLE);

        radius_attack(&mut ctx, barrel, None, 128);
        let log = world.borrow().damage_log.clone();
        assert!(log.iter().any(|&(t, _)| t == near));
        assert!(!log.iter().any(|&(t, _)| t == far));
    }
}
