// m_spider.rs — arachnotrons, arthronailers and the spider mastermind

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

use crate::g_ai::a_face_target;
use crate::g_effects::start_mobj_explode;
use crate::g_local::*;
use crate::g_mobj::set_mobj_state;
use crate::g_monster::{has_target, missile_attack, MissileDir};
use crate::g_weapon::line_attack;
use crate::game::GameContext;
use crate::m_zombie::{spread, take_aim};

pub fn a_bspi_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Left);
    missile_attack(ctx, h, MissileDir::Right);
}

/// Turn and hold still for a moment before the next burst.
pub fn a_bspi_face_target(ctx: &mut GameContext, h: ActorHandle) {
    a_face_target(ctx, h);
    if let Some(actor) = ctx.actors.get_mut(h) {
        actor.reactiontime = 5;
    }
}

pub fn a_arthronailer_attack(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Left);
    missile_attack(ctx, h, MissileDir::Right);
    ctx.sound(Some(h), Sfx::Nailgun);
}

// ============================================================
// Mastermind
// ============================================================

pub fn a_spid_attack(ctx: &mut GameContext, h: ActorHandle) {
    let Some((bangle, slope)) = take_aim(ctx, h, Sfx::Pistol) else {
        return;
    };
    for _ in 0..3 {
        let angle = bangle.wrapping_add(spread(ctx, RandomClass::SpidAttack, 20));
        let damage = (ctx.p_random(RandomClass::SpidAttack) & 5) * 3 + 3;
        line_attack(ctx, h, angle, MISSILERANGE, slope, damage);
    }
}

/// Keep firing while the target stays in view, with a short pause every
/// few bursts.
pub fn a_spid_refire(ctx: &mut GameContext, h: ActorHandle) {
    a_face_target(ctx, h);

    if ctx.p_random(RandomClass::SpidRefire) < 10 {
        return;
    }

    let Some(actor) = ctx.actors.get(h) else {
        return;
    };
    let info = actor.info;
    let in_view = actor.flags.contains(MobjFlags::SEETARGET)
        && actor.target.and_then(|t| ctx.actors.get(t)).is_some_and(|t| t.health > 0);

    if !in_view {
        set_mobj_state(ctx, h, info.seestate);
        if let Some(actor) = ctx.actors.get_mut(h) {
            actor.reactiontime = 5;
        }
        return;
    }

    let Some(actor) = ctx.actors.get_mut(h) else {
        return;
    };
    let rt = actor.reactiontime;
    actor.reactiontime -= 1;
    if rt == 0 {
        set_mobj_state(ctx, h, info.missilestate);
        if let Some(actor) = ctx.actors.get_mut(h) {
            actor.reactiontime = 5;
        }
    }
}

pub fn a_spid_death_event(ctx: &mut GameContext, h: ActorHandle) {
    start_mobj_explode(ctx, h, 2, 14);
    let sound = ctx.actors.get(h).map_or(Sfx::None, |a| a.info.deathsound);
    ctx.sound(None, sound);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn setup(ctx: &mut GameContext, kind: MobjType) -> (ActorHandle, ActorHandle) {
        let mo = spawn_at(ctx, kind, 0, 0);
        let target = spawn_at(ctx, MobjType::Player, 900, 0);
        ctx.actors.set_target(mo, Some(target));
        (mo, target)
    }

    #[test]
    fn test_arachnotron_fires_pair() {
        let (mut ctx, _world) = test_context();
        let (baby, _) = setup(&mut ctx, MobjType::Baby);
        a_bspi_attack(&mut ctx, baby);
        assert_eq!(ctx.actors.iter().filter(|(_, a)| a.kind == MobjType::ProjBaby).count(), 2);
    }

    #[test]
    fn test_bspi_face_target_pauses() {
        let (mut ctx, _world) = test_context();
        let (baby, _) = setup(&mut ctx, MobjType::Baby);
        a_bspi_face_target(&mut ctx, baby);
        assert_eq!(ctx.actors.get(baby).unwrap().reactiontime, 5);
    }

    #[test]
    fn test_arthronailer_nails_and_rattles() {
        let (mut ctx, world) = test_context();
        let (nailer, _) = setup(&mut ctx, MobjType::Arthronailer);
        a_arthronailer_attack(&mut ctx, nailer);
        assert_eq!(ctx.actors.iter().filter(|(_, a)| a.kind == MobjType::ProjArthronailer).count(), 2);
        assert!(world.borrow().sounds.contains(&(Some(nailer), Sfx::Nailgun)));
    }

    #[test]
    fn test_mastermind_burst_damage() {
        let (mut ctx, world) = test_context();
        let (spider, target) = setup(&mut ctx, MobjType::Spider);
        a_spid_attack(&mut ctx, spider);

        let log = world.borrow().damage_log.clone();
        assert_eq!(log.len(), 3);
        // & 5 leaves only 0, 1, 4 or 5
        assert!(log.iter().all(|&(t, d)| t == target && matches!(d, 3 | 6 | 15 | 18)), "{log:?}");
    }

    #[test]
    fn test_refire_gives_up_on_lost_sight() {
        let (mut ctx, _world) = test_context();
        let (spider, _) = setup(&mut ctx, MobjType::Spider);
        ctx.actors.get_mut(spider).unwrap().reactiontime = 0;

        for _ in 0..16 {
            a_spid_refire(&mut ctx, spider);
            if ctx.actors.get(spider).unwrap().reactiontime == 5 {
                break;
            }
        }
        assert_eq!(ctx.actors.get(spider).unwrap().reactiontime, 5);
    }

    #[test]
    fn test_death_event_queues_explosions() {
        let (mut ctx, world) = test_context();
        let spider = spawn_at(&mut ctx, MobjType::Spider, 0, 0);
        a_spid_death_event(&mut ctx, spider);
        assert_eq!(ctx.effects.len(), 1);
        assert!(world.borrow().sounds.contains(&(None, Sfx::Spidth)));
    }
}
