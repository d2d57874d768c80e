// m_fatso.rs — mancubus, duke of hell and hectebus volleys

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

//! The three-step fat volley: each step fires a pair from the arm
//! cannons, one of them swung outward so successive steps sweep the room.
//! The duke of hell, the hectebus and the annihilator reuse the same
//! pattern.

use crate::g_ai::a_face_target;
use crate::g_local::*;
use crate::g_monster::{has_target, missile_attack, turn_missile, MissileDir};
use crate::g_weapon::spawn_missile;
use crate::game::GameContext;

pub const FATSPREAD: Angle = ANG90 / 4;

/// One step of the sweep: `(side, swing)` pairs in firing order.
pub(crate) type Volley = [(MissileDir, Angle); 2];

pub(crate) const VOLLEY1: Volley = [(MissileDir::Right, 0), (MissileDir::Left, FATSPREAD)];
pub(crate) const VOLLEY2: Volley = [(MissileDir::Left, 0), (MissileDir::Right, FATSPREAD.wrapping_neg())];
pub(crate) const VOLLEY3: Volley = [
    (MissileDir::Right, (FATSPREAD / 4).wrapping_neg()),
    (MissileDir::Left, FATSPREAD / 4),
];

pub(crate) fn volley(ctx: &mut GameContext, h: ActorHandle, shots: Volley) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    for (dir, swing) in shots {
        let mo = missile_attack(ctx, h, dir);
        if swing != 0 {
            turn_missile(ctx, mo, swing);
        }
    }
}

fn wind_up(ctx: &mut GameContext, h: ActorHandle, sound: Sfx) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    ctx.sound(Some(h), sound);
}

pub fn a_fat_raise(ctx: &mut GameContext, h: ActorHandle) {
    wind_up(ctx, h, Sfx::Fattatk);
}

pub fn a_fat_attack1(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY1);
}

pub fn a_fat_attack2(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY2);
}

pub fn a_fat_attack3(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY3);
}

pub fn a_duke_of_hell_raise(ctx: &mut GameContext, h: ActorHandle) {
    wind_up(ctx, h, Sfx::Dkhlatk);
}

pub fn a_duke_of_hell_attack1(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY1);
}

pub fn a_duke_of_hell_attack2(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY2);
}

pub fn a_duke_of_hell_attack3(ctx: &mut GameContext, h: ActorHandle) {
    volley(ctx, h, VOLLEY3);
}

// ============================================================
// Hectebus
// ============================================================

/// Centre-launched hectebus shots, swung by each listed offset.
fn hect_spray(ctx: &mut GameContext, h: ActorHandle, swings: &[Angle]) {
    let Some(target) = ctx.actors.get(h).and_then(|a| a.target) else {
        return;
    };
    for &swing in swings {
        let mo = spawn_missile(ctx, h, Some(target), MobjType::ProjHectebus, 0, 0, 69, true);
        turn_missile(ctx, mo, swing);
    }
}

pub fn a_hect_attack1(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Right);
    hect_spray(ctx, h, &[FATSPREAD / 2, FATSPREAD, FATSPREAD + FATSPREAD / 2]);
}

pub fn a_hect_attack2(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Left);
    hect_spray(
        ctx,
        h,
        &[
            (FATSPREAD / 2).wrapping_neg(),
            FATSPREAD.wrapping_neg(),
            (FATSPREAD + FATSPREAD / 2).wrapping_neg(),
        ],
    );
}

pub fn a_hect_attack3(ctx: &mut GameContext, h: ActorHandle) {
    if !has_target(ctx, h) {
        return;
    }
    a_face_target(ctx, h);
    missile_attack(ctx, h, MissileDir::Right);
    missile_attack(ctx, h, MissileDir::Left);
    hect_spray(
        ctx,
        h,
        &[FATSPREAD / 2, (FATSPREAD / 2).wrapping_neg(), FATSPREAD, FATSPREAD.wrapping_neg()],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn setup(ctx: &mut GameContext, kind: MobjType) -> ActorHandle {
        let mo = spawn_at(ctx, kind, 0, 0);
        let target = spawn_at(ctx, MobjType::Player, 800, 0);
        ctx.actors.set_target(mo, Some(target));
        mo
    }

    fn shots(ctx: &GameContext, kind: MobjType) -> Vec<Angle> {
        let mut v: Vec<_> = ctx.actors.iter().filter(|(_, a)| a.kind == kind).map(|(_, a)| a.angle).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_fatspread_value() {
        assert_eq!(FATSPREAD, 0x1000_0000);
    }

    fn fired_in_order(ctx: &GameContext, kind: MobjType) -> Vec<&Actor> {
        ctx.actors.iter().filter(|(_, a)| a.kind == kind).map(|(_, a)| a).collect()
    }

    #[test]
    fn test_first_volley_swings_left_shot_out() {
        let (mut ctx, _world) = test_context();
        let fat = setup(&mut ctx, MobjType::Mancubus);
        a_fat_attack1(&mut ctx, fat);

        let fired = fired_in_order(&ctx, MobjType::ProjFatso);
        assert_eq!(fired.len(), 2);
        let (right, left) = (fired[0], fired[1]);
        // the arm offsets alone part the pair by a few degrees
        let gap = left.angle.wrapping_sub(right.angle) as i32;
        assert!((gap - FATSPREAD as i32).abs() < 0x0800_0000, "gap {gap:#x}");
        assert_eq!(left.momx, fixed_mul(left.info.speed, cos_angle(left.angle)));
    }

    #[test]
    fn test_second_volley_swings_right_shot_out() {
        let (mut ctx, _world) = test_context();
        let fat = setup(&mut ctx, MobjType::Mancubus);
        a_fat_attack2(&mut ctx, fat);

        let fired = fired_in_order(&ctx, MobjType::ProjFatso);
        let (left, right) = (fired[0], fired[1]);
        let gap = left.angle.wrapping_sub(right.angle) as i32;
        assert!((gap - FATSPREAD as i32).abs() < 0x0800_0000, "gap {gap:#x}");
    }

    #[test]
    fn test_raise_plays_windup() {
        let (mut ctx, world) = test_context();
        let duke = setup(&mut ctx, MobjType::DukeOfHell);
        a_duke_of_hell_raise(&mut ctx, duke);
        assert!(world.borrow().sounds.contains(&(Some(duke), Sfx::Dkhlatk)));
    }

    #[test]
    fn test_hectebus_spray_counts() {
        let (mut ctx, _world) = test_context();
        let hect = setup(&mut ctx, MobjType::Hectebus);
        a_hect_attack1(&mut ctx, hect);
        assert_eq!(shots(&ctx, MobjType::ProjHectebus).len(), 4);
        a_hect_attack3(&mut ctx, hect);
        assert_eq!(shots(&ctx, MobjType::ProjHectebus).len(), 10);
    }
}
