// g_effects.rs — short-lived effects bound to one actor (alpha fades, death explosions)

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
use crate::g_mobj::{remove_mobj, spawn_mobj};
use crate::game::GameContext;

/// An effect holds a counted reference to its actor for as long as it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedEffect {
    /// Step alpha toward `dest_alpha`; restore `flag_reserve` when a fade in
    /// completes, remove the actor when a fade out reaches zero.
    MobjFade {
        mobj: ActorHandle,
        amount: i32,
        dest_alpha: i32,
        flag_reserve: MobjFlags,
    },
    /// One cosmetic explosion every `delay_max + 1` tics, `lifetime + 1` times.
    MobjExplode {
        mobj: ActorHandle,
        delay: i32,
        delay_max: i32,
        lifetime: i32,
    },
}

impl TimedEffect {
    pub fn mobj(&self) -> ActorHandle {
        match *self {
            TimedEffect::MobjFade { mobj, .. } | TimedEffect::MobjExplode { mobj, .. } => mobj,
        }
    }
}

// ============================================================
// Creation
// ============================================================

fn add_effect(ctx: &mut GameContext, effect: TimedEffect) {
    ctx.actors.acquire(effect.mobj());
    ctx.effects.push(effect);
}

/// Generic fade toward `alpha` by `amount` per tic.
pub fn fade_mobj(ctx: &mut GameContext, mobj: ActorHandle, amount: i32, alpha: i32, flags: MobjFlags) {
    if !ctx.actors.contains(mobj) {
        return;
    }
    add_effect(
        ctx,
        TimedEffect::MobjFade { mobj, amount, dest_alpha: alpha, flag_reserve: flags },
    );
}

/// Strip SHOOTABLE and SPECIAL while the actor is not fully visible.
fn reserve_flags(ctx: &mut GameContext, mobj: ActorHandle) -> MobjFlags {
    let Some(actor) = ctx.actors.get_mut(mobj) else {
        return MobjFlags::empty();
    };
    let reserve = actor.flags & (MobjFlags::SHOOTABLE | MobjFlags::SPECIAL);
    actor.flags.remove(reserve);
    reserve
}

/// Fade in to the type's alpha, restoring SHOOTABLE/SPECIAL at the end.
pub fn create_fade_in(ctx: &mut GameContext, mobj: ActorHandle) {
    let Some(dest) = ctx.actors.get(mobj).map(|a| a.info.alpha) else {
        return;
    };
    let reserve = reserve_flags(ctx, mobj);
    fade_mobj(ctx, mobj, 8, dest, reserve);
}

/// Fade out to nothing and remove the actor.
pub fn create_fade_out(ctx: &mut GameContext, mobj: ActorHandle) {
    let reserve = reserve_flags(ctx, mobj);
    fade_mobj(ctx, mobj, -8, 0, reserve);
}

pub fn start_mobj_explode(ctx: &mut GameContext, mobj: ActorHandle, delay_max: i32, lifetime: i32) {
    add_effect(ctx, TimedEffect::MobjExplode { mobj, delay: 0, delay_max, lifetime });
}

// ============================================================
// Ticking
// ============================================================

/// Returns true when the fade is finished.
fn fade_tick(ctx: &mut GameContext, mobj: ActorHandle, amount: i32, dest: i32, reserve: MobjFlags) -> bool {
    let Some(actor) = ctx.actors.get_mut(mobj) else {
        return true;
    };

    if actor.alpha == dest {
        return true;
    }

    actor.alpha += amount;

    if amount <= 0 {
        if dest < actor.alpha {
            return false;
        }
        actor.alpha = dest;
        if dest == 0 {
            remove_mobj(ctx, mobj);
        }
        return true;
    }

    if actor.alpha < dest {
        return false;
    }
    actor.alpha = dest;
    actor.flags |= reserve;
    true
}

fn explode_tick(ctx: &mut GameContext, mobj: ActorHandle, delay: &mut i32, delay_max: i32, lifetime: &mut i32) -> bool {
    let d = *delay;
    *delay -= 1;
    if d > 0 {
        return false;
    }
    *delay = delay_max;

    let origin = ctx
        .actors
        .get(mobj)
        .filter(|a| !a.state.is_null())
        .map(|a| (a.x, a.y, a.z, a.height));

    if let Some((x, y, z, height)) = origin {
        let x = ctx.p_random_shift(RandomClass::MobjExplode, 14) + x;
        let y = ctx.p_random_shift(RandomClass::MobjExplode, 14) + y;
        let z = ctx.p_random_shift(RandomClass::MobjExplode, 14) + z;

        let exp = spawn_mobj(ctx, x, y, z + (height << 1), MobjType::Explosion2);
        if *lifetime & 1 == 0 {
            ctx.sound(Some(exp), Sfx::Explode);
        }
    }

    let l = *lifetime;
    *lifetime -= 1;
    l == 0
}

/// Run every effect once. Finished effects drop their actor reference.
pub fn run_effects(ctx: &mut GameContext) {
    let running = std::mem::take(&mut ctx.effects);
    let mut kept = Vec::with_capacity(running.len());

    for mut effect in running {
        let done = match &mut effect {
            TimedEffect::MobjFade { mobj, amount, dest_alpha, flag_reserve } => {
                fade_tick(ctx, *mobj, *amount, *dest_alpha, *flag_reserve)
            }
            TimedEffect::MobjExplode { mobj, delay, delay_max, lifetime } => {
                explode_tick(ctx, *mobj, delay, *delay_max, lifetime)
            }
        };

        if done {
            ctx.actors.release(effect.mobj());
        } else {
            kept.push(effect);
        }
    }

    // effects started while running go after the survivors
    kept.append(&mut ctx.effects);
    ctx.effects = kept;
}

/// Drop every effect without running it.
pub fn clear_effects(ctx: &mut GameContext) {
    for effect in std::mem::take(&mut ctx.effects) {
        ctx.actors.release(effect.mobj());
    }
}

// ============================================================
// Tests
// ============================================================
