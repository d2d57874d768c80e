// g_mobj.rs — actor lifecycle, state dispatch and the per-tic thinker

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

use crate::g_combat::damage_mobj;
use crate::g_effects::{create_fade_in, create_fade_out, fade_mobj};
use crate::g_local::*;
use crate::g_phys::{on_mobj_z, xy_movement, z_movement};
use crate::g_weapon::{spawn_blood, spawn_puff};
use crate::game::GameContext;

// ============================================================
// Spawning and removal
// ============================================================

/// Create an actor of `kind` and link it into the world. The spawn state is
/// entered without running its action.
pub fn spawn_mobj(ctx: &mut GameContext, x: Fixed, y: Fixed, z: Fixed, kind: MobjType) -> ActorHandle {
    let info = ctx.info(kind);
    let mut actor = Actor::new(kind, info);
    actor.x = x;
    actor.y = y;

    if actor.flags.contains(MobjFlags::SOLID)
        && ctx.options.compat_mobjpass
        && !actor.flags.intersects(MobjFlags::NOCLIP | MobjFlags::SPECIAL)
    {
        actor.blockflag |= BlockFlags::MOBJPASS;
    }

    if !ctx.loading_game {
        if actor.flags.contains(MobjFlags::COUNTKILL) {
            ctx.level.totalkills += 1;
        }
        if actor.flags.contains(MobjFlags::COUNTITEM) {
            ctx.level.totalitems += 1;
        }
    }

    let st = ctx.state(info.spawnstate);
    actor.state = info.spawnstate;
    actor.tics = st.tics;

    let h = ctx.actors.insert(actor);
    link_mobj(ctx, h);

    let Some(actor) = ctx.actors.get_mut(h) else {
        return h;
    };
    let sec = ctx.gi.sector(actor.sector);
    actor.floorz = sec.floorheight;
    actor.ceilingz = sec.ceilingheight;
    actor.z = match z {
        ONFLOORZ => actor.floorz,
        ONCEILINGZ => actor.ceilingz - info.height,
        _ => z,
    };
    h
}

/// Link an actor into the spatial index at its current position.
pub fn link_mobj(ctx: &mut GameContext, h: ActorHandle) {
    let sector = match ctx.actors.get(h) {
        Some(actor) => ctx.gi.set_thing_position(h, actor),
        None => return,
    };
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.sector = sector;
    }
}

/// Move an actor to a new position, relinking it.
pub fn set_mobj_position(ctx: &mut GameContext, h: ActorHandle, x: Fixed, y: Fixed) {
    ctx.gi.unset_thing_position(h);
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.x = x;
        actor.y = y;
    }
    link_mobj(ctx, h);
}

/// Take an actor out of play. Respawning pickups turn into dormant
/// placeholders instead; everything else drops its links and is freed once
/// nothing references it.
pub fn remove_mobj(ctx: &mut GameContext, h: ActorHandle) {
    let respawn_specials = ctx.options.respawn_specials;
    let leveltime = ctx.level.leveltime;

    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    if actor.removed {
        return;
    }

    if respawn_specials
        && actor.flags.contains(MobjFlags::SPECIAL)
        && !actor.flags.contains(MobjFlags::DROPPED)
        && actor.kind != MobjType::ItemInvulSphere
        && actor.kind != MobjType::ItemInvisSphere
    {
        actor.reactiontime = leveltime;
        actor.flags.remove(MobjFlags::SPECIAL);
        actor.alpha = 80;
        actor.pending = PendingAction::RespawnSpecial;
        debug!(kind = ?actor.kind, index = h.index(), "pickup waiting to respawn");
        return;
    }

    ctx.actors.set_target(h, None);
    ctx.actors.set_tracer(h, None);

    ctx.gi.remove_sound_origin(h);
    ctx.gi.unset_thing_position(h);

    if !ctx.actors.free_actor(h) {
        if let Some(actor) = ctx.actors.get_mut(h) {
            actor.pending = PendingAction::SafeRemove;
        }
    }
}

// ============================================================
// State dispatch
// ============================================================

/// Enter `state`, running its action, and keep following zero-tic
/// successors. Returns false once the actor is gone.
pub fn set_mobj_state(ctx: &mut GameContext, h: ActorHandle, state: StateNum) -> bool {
    let mut state = state;

    loop {
        if !ctx.actors.is_live(h) {
            return false;
        }

        if state.is_null() {
            if let Some(actor) = ctx.actors.get_mut(h) {
                actor.state = StateNum::S_NULL;
            }
            remove_mobj(ctx, h);
            return false;
        }

        let st = ctx.state(state);
        if let Some(actor) = ctx.actors.get_mut(h) {
            actor.state = state;
            actor.tics = st.tics;
            if st.action.is_none() {
                actor.pending = PendingAction::None;
            }
        }

        if let Some(action) = st.action {
            action.call(ctx, h);
        }

        // freed itself
        let Some(actor) = ctx.actors.get(h).filter(|a| !a.removed) else {
            return false;
        };
        if actor.tics != 0 {
            return true;
        }
        state = st.next;
    }
}

// ============================================================
// Deferred physics callbacks
// ============================================================

pub fn explode_missile(ctx: &mut GameContext, h: ActorHandle) {
    let Some(deathstate) = ctx.actors.get(h).map(|a| a.info.deathstate) else {
        return;
    };
    if !set_mobj_state(ctx, h, deathstate) {
        return;
    }

    let trim = ctx.p_random(RandomClass::Explode) & 1;
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    actor.momx = 0;
    actor.momy = 0;
    actor.momz = 0;
    actor.tics = (actor.tics - trim).max(1);
    actor.flags.remove(MobjFlags::MISSILE);

    let deathsound = actor.info.deathsound;
    if !deathsound.is_none() {
        ctx.gi.stop_sound(h);
        ctx.sound(Some(h), deathsound);
    }
}

/// A missile struck `thing` (or a wall when `None`).
pub fn missile_hit(ctx: &mut GameContext, h: ActorHandle, thing: Option<ActorHandle>) {
    let Some((kind, base, owner)) = ctx.actors.get(h).map(|a| (a.kind, a.info.damage, a.target)) else {
        return;
    };
    let thing = thing.filter(|&t| ctx.actors.is_live(t));
    let mut damage = 0;

    if let Some(t) = thing {
        damage = ((ctx.p_random(RandomClass::Damage) & 7) + 1) * base;
        damage_mobj(ctx, t, Some(h), owner, damage);

        if kind.is_ground_fire() {
            if let Some(victim) = ctx.actors.get_mut(t) {
                if victim.player.is_some() && victim.info.mass != 0 {
                    victim.momz += (1500 / victim.info.mass) * FRACUNIT;
                }
            }
        }
    }

    let bleeds = thing
        .and_then(|t| ctx.actors.get(t))
        .is_some_and(|a| !a.flags.contains(MobjFlags::NOBLOOD));
    let Some((x, y, z)) = ctx.actors.get(h).map(|a| (a.x, a.y, a.z)) else {
        return;
    };

    match kind {
        MobjType::ProjDart => {
            if bleeds {
                spawn_blood(ctx, x, y, z, damage);
            } else {
                ctx.sound(Some(h), Sfx::Darthit);
                spawn_puff(ctx, x, y, z);
            }
        }
        MobjType::ProjNail if bleeds => spawn_blood(ctx, x, y, z, damage),
        _ => {}
    }

    explode_missile(ctx, h);
}

/// A charging skull rammed `thing` (or a wall when `None`).
pub fn skull_bash(ctx: &mut GameContext, h: ActorHandle, thing: Option<ActorHandle>) {
    let Some(base) = ctx.actors.get(h).map(|a| a.info.damage) else {
        return;
    };

    if let Some(t) = thing.filter(|&t| ctx.actors.is_live(t)) {
        let damage = ((ctx.p_random(RandomClass::SkullFly) & 7) + 1) * base;
        damage_mobj(ctx, t, Some(h), Some(h), damage);
    }

    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    actor.flags.remove(MobjFlags::SKULLFLY);
    actor.momx = 0;
    actor.momy = 0;
    actor.momz = 0;
    let spawnstate = actor.info.spawnstate;
    set_mobj_state(ctx, h, spawnstate);
}

/// Run the queued callback of an actor. The callback is taken first so it
/// executes once.
pub fn run_pending(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    let pending = std::mem::take(&mut actor.pending);

    match pending {
        PendingAction::None => {}
        PendingAction::SkullBash(thing) => skull_bash(ctx, h, thing),
        PendingAction::MissileHit(thing) => missile_hit(ctx, h, thing),
        PendingAction::ExplodeMissile => explode_missile(ctx, h),
        PendingAction::Remove => remove_mobj(ctx, h),
        PendingAction::RespawnSpecial => {
            if !respawn_specials(ctx, h) {
                if let Some(actor) = ctx.actors.get_mut(h) {
                    actor.pending = PendingAction::RespawnSpecial;
                }
            }
        }
        PendingAction::SafeRemove => {
            ctx.actors.safe_remove(h);
        }
    }
}

// ============================================================
// Respawning
// ============================================================

/// Count down a dead monster on nightmare and bring a fresh copy back at
/// its spawn spot.
pub fn nightmare_respawn(ctx: &mut GameContext, h: ActorHandle) {
    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    actor.movecount += 1;
    if actor.movecount < 12 * TICRATE {
        return;
    }
    if ctx.level.leveltime & 31 != 0 {
        return;
    }
    if ctx.p_random(RandomClass::Respawn) > 4 {
        return;
    }

    let Some((kind, mthing, spawnceiling)) = ctx
        .actors
        .get(h)
        .map(|a| (a.kind, a.spawnpoint, a.info.flags.contains(MobjFlags::SPAWNCEILING)))
    else {
        return;
    };
    let x = int_to_fixed(mthing.x as i32);
    let y = int_to_fixed(mthing.y as i32);

    // something is occupying its position?
    if !ctx.gi.check_position(&ctx.actors, h, x, y) {
        return;
    }

    // don't respawn in an insta-kill sector
    let sector = ctx.gi.point_sector(x, y);
    if ctx.gi.sector(sector).special == 666 {
        if let Some(actor) = ctx.actors.get_mut(h) {
            actor.flags.remove(MobjFlags::COUNTKILL);
        }
        return;
    }

    let z = if spawnceiling { ONCEILINGZ } else { ONFLOORZ };
    let mo = spawn_mobj(ctx, x, y, z, kind);

    if let Some(fresh) = ctx.actors.get_mut(mo) {
        fresh.spawnpoint = mthing;
        fresh.angle = ANG45.wrapping_mul((mthing.angle as i32 / 45) as u32);
        if kind == MobjType::Demon2 {
            fresh.alpha = 0x30;
        } else {
            fresh.alpha = 0;
        }
        if mthing.options.contains(MapThingOptions::AMBUSH) {
            fresh.flags |= MobjFlags::AMBUSH;
        }
        fresh.reactiontime = 18;
    }
    if kind != MobjType::Demon2 {
        create_fade_in(ctx, mo);
    }

    if !ctx.options.no_spawn_sound {
        ctx.sound(Some(mo), Sfx::Spawn);
    }

    debug!(?kind, x = mthing.x, y = mthing.y, "nightmare respawn");

    create_fade_out(ctx, h);
}

/// Tick a dormant pickup. Returns true once it has started coming back.
pub fn respawn_specials(ctx: &mut GameContext, h: ActorHandle) -> bool {
    let leveltime = ctx.level.leveltime;
    let Some(special) = ctx.actors.get_mut(h) else {
        return true;
    };

    if special.alpha != 80 {
        special.alpha = 80;
    }

    // wait at least 30 seconds
    if leveltime - special.reactiontime < 30 * TICRATE {
        return false;
    }

    special.reactiontime = 0;
    special.pending = PendingAction::None;
    let flags = special.flags | MobjFlags::SPECIAL;

    fade_mobj(ctx, h, 8, 0xff, flags);

    if !ctx.options.no_spawn_sound {
        ctx.sound(Some(h), Sfx::Spawn);
    }
    true
}

// ============================================================
// Thinker
// ============================================================

pub fn mobj_thinker(ctx: &mut GameContext, h: ActorHandle) {
    ctx.blockthing = None;

    let Some(actor) = ctx.actors.get(h) else {
        return;
    };

    // momentum movement
    if actor.momx != 0 || actor.momy != 0 {
        xy_movement(ctx, h);
    }

    let Some(actor) = ctx.actors.get(h).filter(|a| !a.removed) else {
        return;
    };
    if !actor.pending.is_none() && actor.pending != PendingAction::RespawnSpecial {
        return;
    }

    if actor.z != actor.floorz || actor.momz != 0 || ctx.blockthing.is_some() {
        if !on_mobj_z(ctx, h) {
            z_movement(ctx, h);
        }
    }

    let Some(actor) = ctx.actors.get_mut(h).filter(|a| !a.removed) else {
        return;
    };
    if !actor.pending.is_none() {
        return;
    }

    // cycle through states, calling action functions at transitions
    if actor.tics != -1 {
        actor.tics -= 1;

        // you can cycle through multiple states in a tic
        if actor.tics <= 0 {
            let cur = actor.state;
            let next = ctx.state(cur).next;
            set_mobj_state(ctx, h, next);
        }
        return;
    }

    // check for nightmare respawn
    if !actor.flags.contains(MobjFlags::COUNTKILL) || !ctx.options.monsters_respawn() {
        return;
    }
    actor.momx = 0;
    actor.momy = 0;
    actor.momz = 0;
    nightmare_respawn(ctx, h);
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Action;
    use crate::game::Definitions;
    use crate::info::MOBJINFO;
    use crate::states::{State, STATES};
    use crate::test_support::*;

    #[test]
    fn test_spawn_on_floor_and_ceiling() {
        let (mut ctx, world) = test_context();
        world.borrow_mut().sectors[0].floorheight = 16 * FRACUNIT;

        let imp = spawn_mobj(&mut ctx, 0, 0, ONFLOORZ, MobjType::Imp1);
        let caco = spawn_mobj(&mut ctx, 0, 0, ONCEILINGZ, MobjType::Cacodemon);

        let imp = ctx.actors.get(imp).unwrap();
        assert_eq!(imp.z, 16 * FRACUNIT);
        assert_eq!(imp.floorz, 16 * FRACUNIT);
        assert_eq!(imp.reactiontime, imp.info.reactiontime);
        assert!(imp.blockflag.contains(BlockFlags::MOBJPASS));
        assert_eq!(imp.state, imp.info.spawnstate);

        let caco = ctx.actors.get(caco).unwrap();
        assert_eq!(caco.z, caco.ceilingz - caco.info.height);
        assert_eq!(ctx.level.totalkills, 2);
    }

    #[test]
    fn test_spawn_does_not_count_while_loading() {
        let (mut ctx, _world) = test_context();
        ctx.loading_game = true;
        spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        spawn_at(&mut ctx, MobjType::ItemSoulsphere, 64, 0);
        assert_eq!(ctx.level.totalkills, 0);
        assert_eq!(ctx.level.totalitems, 0);
    }

    #[test]
    fn test_pickups_do_not_get_mobjpass() {
        let (mut ctx, _world) = test_context();
        let barrel = spawn_at(&mut ctx, MobjType::Barrel, 0, 0);
        let medkit = spawn_at(&mut ctx, MobjType::ItemMedkit, 64, 0);
        assert!(ctx.actors.get(barrel).unwrap().blockflag.contains(BlockFlags::MOBJPASS));
        assert!(!ctx.actors.get(medkit).unwrap().blockflag.contains(BlockFlags::MOBJPASS));

        ctx.options.compat_mobjpass = false;
        let barrel2 = spawn_at(&mut ctx, MobjType::Barrel, 128, 0);
        assert!(!ctx.actors.get(barrel2).unwrap().blockflag.contains(BlockFlags::MOBJPASS));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut ctx, world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let zombie = spawn_at(&mut ctx, MobjType::Possessed1, 64, 0);
        ctx.actors.set_target(zombie, Some(imp));

        remove_mobj(&mut ctx, imp);
        remove_mobj(&mut ctx, imp);

        assert!(ctx.actors.contains(imp), "still referenced by the zombie");
        assert_eq!(ctx.actors.refcount(imp), 1);
        assert_eq!(world.borrow().unlinked.iter().filter(|&&u| u == imp).count(), 1);

        ctx.actors.set_target(zombie, None);
        assert!(!ctx.actors.contains(imp));
    }

    #[test]
    fn test_remove_drops_own_links() {
        let (mut ctx, _world) = test_context();
        let a = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let b = spawn_at(&mut ctx, MobjType::Imp1, 64, 0);
        ctx.actors.set_target(a, Some(b));
        ctx.actors.set_tracer(a, Some(b));
        assert_eq!(ctx.actors.refcount(b), 2);

        remove_mobj(&mut ctx, a);
        assert!(!ctx.actors.contains(a));
        assert_eq!(ctx.actors.refcount(b), 0);
    }

    #[test]
    fn test_respawning_pickup_becomes_placeholder() {
        let (mut ctx, _world) = test_context();
        ctx.options.respawn_specials = true;
        ctx.level.leveltime = 77;
        let medkit = spawn_at(&mut ctx, MobjType::ItemMedkit, 0, 0);
        let invul = spawn_at(&mut ctx, MobjType::ItemInvulSphere, 64, 0);

        remove_mobj(&mut ctx, medkit);
        remove_mobj(&mut ctx, invul);

        let placeholder = ctx.actors.get(medkit).unwrap();
        assert!(!placeholder.removed);
        assert_eq!(placeholder.alpha, 80);
        assert_eq!(placeholder.reactiontime, 77);
        assert!(!placeholder.flags.contains(MobjFlags::SPECIAL));
        assert_eq!(placeholder.pending, PendingAction::RespawnSpecial);
        assert!(!ctx.actors.contains(invul), "invulnerability never respawns");
    }

    #[test]
    fn test_placeholder_comes_back_after_thirty_seconds() {
        let (mut ctx, world) = test_context();
        ctx.options.respawn_specials = true;
        let medkit = spawn_at(&mut ctx, MobjType::ItemMedkit, 0, 0);
        remove_mobj(&mut ctx, medkit);

        ctx.level.leveltime = 30 * TICRATE - 1;
        assert!(!respawn_specials(&mut ctx, medkit));
        ctx.level.leveltime = 30 * TICRATE;
        assert!(respawn_specials(&mut ctx, medkit));

        assert_eq!(ctx.effects.len(), 1, "fade back in");
        assert!(world.borrow().sounds.contains(&(Some(medkit), Sfx::Spawn)));
    }

    #[test]
    fn test_null_state_removes() {
        let (mut ctx, _world) = test_context();
        let puff = spawn_at(&mut ctx, MobjType::SmokeSmall, 0, 0);
        assert!(!set_mobj_state(&mut ctx, puff, StateNum::S_NULL));
        assert!(!ctx.actors.contains(puff));
        assert!(!set_mobj_state(&mut ctx, puff, StateNum::S_PUFF1), "stale handle stays dead");
    }

    #[test]
    fn test_zero_tic_states_chain_in_one_call() {
        let mut states = STATES.to_vec();
        let scream = |tics, next| State { tics, action: Some(Action::PlayerScream), next, ..STATES[0] };
        states[StateNum::S_PLAY_RUN1.index()] = scream(0, StateNum::S_PLAY_RUN2);
        states[StateNum::S_PLAY_RUN2.index()] = scream(0, StateNum::S_PLAY_RUN3);
        states[StateNum::S_PLAY_RUN3.index()] = scream(5, StateNum::S_PLAY_RUN1);
        let defs = Definitions { states: Box::leak(states.into_boxed_slice()), mobjinfo: MOBJINFO };

        let (ctx, world) = test_context();
        let mut ctx = ctx.with_definitions(defs);
        let mo = spawn_at(&mut ctx, MobjType::Player, 0, 0);

        assert!(set_mobj_state(&mut ctx, mo, StateNum::S_PLAY_RUN1));
        let actor = ctx.actors.get(mo).unwrap();
        assert_eq!(actor.state, StateNum::S_PLAY_RUN3);
        assert_eq!(actor.tics, 5);
        let screams = world.borrow().sounds.iter().filter(|(_, s)| *s == Sfx::Plrdie).count();
        assert_eq!(screams, 3, "every state in the chain runs its action once");
    }

    #[test]
    fn test_state_without_action_clears_pending() {
        let (mut ctx, _world) = test_context();
        let mo = spawn_at(&mut ctx, MobjType::Possessed1, 0, 0);
        ctx.actors.get_mut(mo).unwrap().pending = PendingAction::ExplodeMissile;
        set_mobj_state(&mut ctx, mo, StateNum::S_POSS_RAISE1);
        assert!(ctx.actors.get(mo).unwrap().pending.is_none());
    }

    #[test]
    fn test_thinker_counts_down_tics() {
        let (mut ctx, _world) = test_context();
        let mo = spawn_at(&mut ctx, MobjType::Possessed1, 0, 0);
        set_mobj_state(&mut ctx, mo, StateNum::S_POSS_RAISE1);

        for _ in 0..4 {
            mobj_thinker(&mut ctx, mo);
        }
        assert_eq!(ctx.actors.get(mo).unwrap().state, StateNum::S_POSS_RAISE1);
        mobj_thinker(&mut ctx, mo);
        assert_eq!(ctx.actors.get(mo).unwrap().state, StateNum::S_POSS_RAISE2);
    }

    #[test]
    fn test_missile_explodes_once() {
        let (mut ctx, world) = test_context();
        let imp = spawn_at(&mut ctx, MobjType::Imp1, 0, 0);
        let ball = spawn_mobj(&mut ctx, 0, 0, 32 * FRACUNIT, MobjType::ProjImp1);
        ctx.actors.set_target(ball, Some(imp));
        ctx.actors.get_mut(ball).unwrap().momx = 10 * FRACUNIT;

        explode_missile(&mut ctx, ball);
        let actor = ctx.actors.get(ball).unwrap();
        assert_eq!(actor.state, actor.info.deathstate);
        assert_eq!((actor.momx, actor.momy, actor.momz), (0, 0, 0));
        assert!(!actor.flags.contains(MobjFlags::MISSILE));
        assert!(actor.tics >= 1);
        assert!(world.borrow().stopped.contains(&ball));
    }
}
