// dispatch.rs — state action routines by name

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

//! States store an `Action` tag instead of a function pointer so a state
//! table can be built in a `const` and compared in tests. `Action::call`
//! maps the tag to the routine that runs when an actor enters the state.

use crate::g_ai;
use crate::g_local::ActorHandle;
use crate::game::GameContext;
use crate::{
    m_brain, m_bruiser, m_cyber, m_demon, m_fatso, m_misc, m_pain, m_rect, m_skel, m_skull, m_spider,
    m_vile, m_zombie,
};

macro_rules! actions {
    ($($name:ident => $func:path,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Action {
            $($name),*
        }

        impl Action {
            /// Run the routine for `h`, which has just entered the state.
            pub fn call(self, ctx: &mut GameContext, h: ActorHandle) {
                match self {
                    $(Action::$name => $func(ctx, h),)*
                }
            }
        }
    };
}

actions! {
    // generic AI
    Look => g_ai::a_look,
    Chase => g_ai::a_chase,
    FaceTarget => g_ai::a_face_target,
    Tracer => g_ai::a_tracer,
    OnDeathTrigger => g_ai::a_on_death_trigger,

    // shared sounds and effects
    Scream => m_misc::a_scream,
    XScream => m_misc::a_xscream,
    PlayerScream => m_misc::a_player_scream,
    Pain => m_misc::a_pain,
    Fall => m_misc::a_fall,
    Explode => m_misc::a_explode,
    BarrelExplode => m_misc::a_barrel_explode,
    Hoof => m_misc::a_hoof,
    Metal => m_misc::a_metal,
    BabyMetal => m_misc::a_baby_metal,
    SpiderMastermindMetal => m_misc::a_spider_mastermind_metal,
    AnnihilatorHoof => m_misc::a_annihilator_hoof,
    FadeOut => m_misc::a_fade_out,
    FadeIn => m_misc::a_fade_in,
    MissileSetAlpha => m_misc::a_missile_set_alpha,
    FadeAlpha => m_misc::a_fade_alpha,
    SpawnSmoke => m_misc::a_spawn_smoke,
    TargetCamera => m_misc::a_target_camera,
    PlayAttack => m_misc::a_play_attack,

    // zombies
    PosAttack => m_zombie::a_pos_attack,
    SPosAttack => m_zombie::a_spos_attack,
    CPosAttack => m_zombie::a_cpos_attack,
    CPosRefire => m_zombie::a_cpos_refire,
    SsgPosAttack => m_zombie::a_ssg_pos_attack,
    MeleeZombieAttack => m_zombie::a_melee_zombie_attack,
    PlasmaZombieAttack => m_zombie::a_plasma_zombie_attack,
    BfgCommandoRaise => m_zombie::a_bfg_commando_raise,
    BfgCommandoAttack => m_zombie::a_bfg_commando_attack,

    // demons, imps, cacodemons
    SargAttack => m_demon::a_sarg_attack,
    HellhoundAttack => m_demon::a_hellhound_attack,
    TroopAttack => m_demon::a_troop_attack,
    TroopMelee => m_demon::a_troop_melee,
    HeadAttack => m_demon::a_head_attack,

    // barons
    BruisAttack => m_bruiser::a_bruis_attack,
    BruiserDemonRandomAttack => m_bruiser::a_bruiser_demon_random_attack,
    BruiserDemonFire => m_bruiser::a_bruiser_demon_fire,
    BruiserDemonExplodeFire => m_bruiser::a_bruiser_demon_explode_fire,

    // lost souls
    SkullAttack => m_skull::skull_attack,
    SkullSetAlpha => m_skull::a_skull_set_alpha,
    NightmareLostSoulChase => m_skull::a_nightmare_lost_soul_chase,
    StalkerDecide => m_skull::a_stalker_decide,
    StalkerAttack1 => m_skull::a_stalker_attack1,
    StalkerAttack2 => m_skull::a_stalker_attack2,

    // pain elementals
    PainAttack => m_pain::a_pain_attack,
    PainDie => m_pain::a_pain_die,
    PainDeathEvent => m_pain::a_pain_death_event,
    PainElementalStalkerAttack => m_pain::a_pain_elemental_stalker_attack,
    PainElementalStalkerDie => m_pain::a_pain_elemental_stalker_die,
    PainElementalNightmareDecide => m_pain::a_pain_elemental_nightmare_decide,
    PainElementalNightmareAttack => m_pain::a_pain_elemental_nightmare_attack,
    PainElementalNightmareAttack2 => m_pain::a_pain_elemental_nightmare_attack2,
    PainElementalNightmareDie => m_pain::a_pain_elemental_nightmare_die,
    PainElementalNightmareChase => m_pain::a_pain_elemental_nightmare_chase,

    // mancubi and friends
    FatRaise => m_fatso::a_fat_raise,
    FatAttack1 => m_fatso::a_fat_attack1,
    FatAttack2 => m_fatso::a_fat_attack2,
    FatAttack3 => m_fatso::a_fat_attack3,
    DukeOfHellRaise => m_fatso::a_duke_of_hell_raise,
    DukeOfHellAttack1 => m_fatso::a_duke_of_hell_attack1,
    DukeOfHellAttack2 => m_fatso::a_duke_of_hell_attack2,
    DukeOfHellAttack3 => m_fatso::a_duke_of_hell_attack3,
    HectAttack1 => m_fatso::a_hect_attack1,
    HectAttack2 => m_fatso::a_hect_attack2,
    HectAttack3 => m_fatso::a_hect_attack3,

    // cyberdemons
    CyberAttack => m_cyber::a_cyber_attack,
    BfgCyberAttack => m_cyber::a_bfg_cyber_attack,
    CyberDeathEvent => m_cyber::a_cyber_death_event,
    AnnihilatorAttack => m_cyber::a_annihilator_attack,
    AnnihilatorAttack1 => m_cyber::a_annihilator_attack1,
    AnnihilatorAttack2 => m_cyber::a_annihilator_attack2,
    AnnihilatorAttack3 => m_cyber::a_annihilator_attack3,

    // spiders
    BspiAttack => m_spider::a_bspi_attack,
    BspiFaceTarget => m_spider::a_bspi_face_target,
    ArthronailerAttack => m_spider::a_arthronailer_attack,
    SpidAttack => m_spider::a_spid_attack,
    SpidRefire => m_spider::a_spid_refire,
    SpidDeathEvent => m_spider::a_spid_death_event,

    // mother demon
    RectChase => m_rect::a_rect_chase,
    RectChase2 => m_rect::a_rect_chase2,
    RectMissile => m_rect::a_rect_missile,
    RectMissile2 => m_rect::a_rect_missile2,
    RectTracer => m_rect::a_rect_tracer,
    RectGroundFire => m_rect::a_rect_ground_fire,
    RectGroundFire2 => m_rect::a_rect_ground_fire2,
    MoveGroundFire => m_rect::a_move_ground_fire,
    RectDeathEvent => m_rect::a_rect_death_event,

    // arch-vile
    VileChase => m_vile::a_vile_chase,
    VileStart => m_vile::a_vile_start,
    VileTarget => m_vile::a_vile_target,
    VileAttack => m_vile::a_vile_attack,
    StartFire => m_vile::a_start_fire,
    Fire => m_vile::a_fire,
    FireCrackle => m_vile::a_fire_crackle,

    // revenants
    SkelAttack => m_skel::a_skel_attack,
    RevenantNightmareAttack => m_skel::a_revenant_nightmare_attack,
    SkelWhoosh => m_skel::a_skel_whoosh,
    SkelFist => m_skel::a_skel_fist,

    // boss brain
    BrainAwake => m_brain::a_brain_awake,
    BrainPain => m_brain::a_brain_pain,
    BrainScream => m_brain::a_brain_scream,
    BrainDie => m_brain::a_brain_die,
    BrainSpit => m_brain::a_brain_spit,
    SpawnSound => m_brain::a_spawn_sound,
    SpawnFly => m_brain::a_spawn_fly,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g_local::*;
    use crate::test_support::*;

    #[test]
    fn test_every_state_action_resolves() {
        // each tag in the built-in table names a routine; entering every
        // state with a throwaway actor must not panic
        for state in crate::states::STATES.iter() {
            let Some(action) = state.action else {
                continue;
            };
            let (mut ctx, _world) = test_context();
            let target = spawn_at(&mut ctx, MobjType::Player, 900, 0);
            let h = spawn_at(&mut ctx, MobjType::Possessed1, 0, 0);
            ctx.actors.set_target(h, Some(target));
            action.call(&mut ctx, h);
        }
    }

    #[test]
    fn test_call_runs_matching_routine() {
        let (mut ctx, world) = test_context();
        let h = spawn_at(&mut ctx, MobjType::Vile, 0, 0);
        Action::VileStart.call(&mut ctx, h);
        assert!(world.borrow().sounds.contains(&(Some(h), Sfx::Vilatk)), "vile start plays its cue");
    }
}
