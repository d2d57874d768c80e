// states.rs — frame/state table driving every actor

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

//! Each actor sits in exactly one state at a time. A state names the
//! sprite frame to show, how many tics to hold it (-1 holds forever), the
//! action routine to run on entry and the state that follows.
//!
//! `StateNum` is an index into a state slice. The built-in table is
//! `STATES`; callers may supply their own slice through `Definitions`.

use crate::dispatch::Action;

#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    SPOT,
    ITEM,
    PLAY,
    POSS,
    SPOS,
    CPOS,
    RIFL,
    ZMEL,
    SSGZ,
    PLZM,
    BFGC,
    SARG,
    HHND,
    TROO,
    HEAD,
    BOSS,
    BR64,
    SKUL,
    SKUG,
    STLK,
    PAIN,
    PAIS,
    PAIG,
    FATT,
    DUKE,
    HECT,
    BSPI,
    ANAI,
    CYBR,
    BCYB,
    SCYB,
    ANNI,
    SPID,
    RECT,
    VILE,
    FIRE,
    SKEL,
    SKEN,
    BBRN,
    BOSF,
    SPFR,
    BAR1,
    MISL,
    GREN,
    PLSS,
    BFS1,
    BAL1,
    BAL2,
    BAL7,
    MANF,
    APLS,
    FATB,
    RECM,
    RFIR,
    BFIR,
    DART,
    NAIL,
    FLAM,
    STLS,
    PUFF,
    BLUD,
    BLDG,
    BLDB,
    BLDP,
    SMOK,
    SMKR,
    EXPL,
    EXP2,
    PFIR,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub sprite: Sprite,
    pub frame: u8,
    pub tics: i32,
    pub action: Option<Action>,
    pub next: StateNum,
}

/// Index of a state in a state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StateNum(pub u16);

impl StateNum {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_null(self) -> bool {
        self == StateNum::S_NULL
    }
}

macro_rules! action_of {
    (Null) => {
        None
    };
    ($a:ident) => {
        Some(Action::$a)
    };
}

macro_rules! states {
    ($($name:ident => ($sprite:ident, $frame:expr, $tics:expr, $action:ident, $next:ident),)*) => {
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[repr(u16)]
        enum Index {
            $($name),*
        }

        #[allow(non_upper_case_globals)]
        impl StateNum {
            $(pub const $name: StateNum = StateNum(Index::$name as u16);)*
        }

        const TABLE: &[State] = &[
            $(State {
                sprite: Sprite::$sprite,
                frame: $frame,
                tics: $tics,
                action: action_of!($action),
                next: StateNum::$next,
            }),*
        ];

        pub static STATES: &[State] = TABLE;
        pub const NUMSTATES: usize = TABLE.len();
    };
}

states! {
    S_NULL => (SPOT, 0, -1, Null, S_NULL),
    S_SPOT => (SPOT, 0, -1, Null, S_SPOT),
    S_ITEM => (ITEM, 0, -1, Null, S_ITEM),
    S_PLAY => (PLAY, 0, -1, Null, S_NULL),
    S_PLAY_RUN1 => (PLAY, 0, 4, Null, S_PLAY_RUN2),
    S_PLAY_RUN2 => (PLAY, 1, 4, Null, S_PLAY_RUN3),
    S_PLAY_RUN3 => (PLAY, 2, 4, Null, S_PLAY_RUN4),
    S_PLAY_RUN4 => (PLAY, 3, 4, Null, S_PLAY_RUN1),
    S_PLAY_ATK1 => (PLAY, 4, 12, Null, S_PLAY),
    S_PLAY_ATK2 => (PLAY, 5, 6, Null, S_PLAY_ATK1),
    S_PLAY_PAIN => (PLAY, 6, 4, Null, S_PLAY_PAIN2),
    S_PLAY_PAIN2 => (PLAY, 6, 4, Pain, S_PLAY),
    S_PLAY_DIE1 => (PLAY, 7, 10, Null, S_PLAY_DIE2),
    S_PLAY_DIE2 => (PLAY, 8, 10, PlayerScream, S_PLAY_DIE3),
    S_PLAY_DIE3 => (PLAY, 9, 10, Fall, S_PLAY_DIE4),
    S_PLAY_DIE4 => (PLAY, 10, 10, Null, S_PLAY_DIE5),
    S_PLAY_DIE5 => (PLAY, 11, -1, Null, S_NULL),
    S_PLAY_XDIE1 => (PLAY, 12, 5, Null, S_PLAY_XDIE2),
    S_PLAY_XDIE2 => (PLAY, 13, 5, XScream, S_PLAY_XDIE3),
    S_PLAY_XDIE3 => (PLAY, 14, 5, Fall, S_PLAY_XDIE4),
    S_PLAY_XDIE4 => (PLAY, 15, 5, Null, S_PLAY_XDIE5),
    S_PLAY_XDIE5 => (PLAY, 16, -1, Null, S_NULL),
    S_POSS_STND => (POSS, 0, 10, Look, S_POSS_STND2),
    S_POSS_STND2 => (POSS, 1, 10, Look, S_POSS_STND),
    S_POSS_RUN1 => (POSS, 0, 4, Chase, S_POSS_RUN2),
    S_POSS_RUN2 => (POSS, 0, 4, Chase, S_POSS_RUN3),
    S_POSS_RUN3 => (POSS, 1, 4, Chase, S_POSS_RUN4),
    S_POSS_RUN4 => (POSS, 1, 4, Chase, S_POSS_RUN5),
    S_POSS_RUN5 => (POSS, 2, 4, Chase, S_POSS_RUN6),
    S_POSS_RUN6 => (POSS, 2, 4, Chase, S_POSS_RUN7),
    S_POSS_RUN7 => (POSS, 3, 4, Chase, S_POSS_RUN8),
    S_POSS_RUN8 => (POSS, 3, 4, Chase, S_POSS_RUN1),
    S_POSS_PAIN => (POSS, 6, 3, Null, S_POSS_PAIN2),
    S_POSS_PAIN2 => (POSS, 6, 3, Pain, S_POSS_RUN1),
    S_POSS_DIE1 => (POSS, 7, 5, Null, S_POSS_DIE2),
    S_POSS_DIE2 => (POSS, 8, 5, Scream, S_POSS_DIE3),
    S_POSS_DIE3 => (POSS, 9, 5, Fall, S_POSS_DIE4),
    S_POSS_DIE4 => (POSS, 10, 5, OnDeathTrigger, S_POSS_DIE5),
    S_POSS_DIE5 => (POSS, 11, -1, Null, S_NULL),
    S_POSS_XDIE1 => (POSS, 12, 5, Null, S_POSS_XDIE2),
    S_POSS_XDIE2 => (POSS, 13, 5, XScream, S_POSS_XDIE3),
    S_POSS_XDIE3 => (POSS, 14, 5, Fall, S_POSS_XDIE4),
    S_POSS_XDIE4 => (POSS, 15, 5, OnDeathTrigger, S_POSS_XDIE5),
    S_POSS_XDIE5 => (POSS, 16, -1, Null, S_NULL),
    S_POSS_RAISE1 => (POSS, 10, 5, Null, S_POSS_RAISE2),
    S_POSS_RAISE2 => (POSS, 9, 5, Null, S_POSS_RAISE3),
    S_POSS_RAISE3 => (POSS, 8, 5, Null, S_POSS_RAISE4),
    S_POSS_RAISE4 => (POSS, 7, 5, Null, S_POSS_RUN1),
    S_POSS_ATK1 => (POSS, 4, 10, FaceTarget, S_POSS_ATK2),
    S_POSS_ATK2 => (POSS, 5, 8, PosAttack, S_POSS_ATK3),
    S_POSS_ATK3 => (POSS, 4, 8, Null, S_POSS_RUN1),
    S_SPOS_ATK1 => (SPOS, 4, 10, FaceTarget, S_SPOS_ATK2),
    S_SPOS_ATK2 => (SPOS, 5, 10, SPosAttack, S_SPOS_ATK3),
    S_SPOS_ATK3 => (SPOS, 4, 10, Null, S_POSS_RUN1),
    S_CPOS_ATK1 => (CPOS, 4, 10, FaceTarget, S_CPOS_ATK2),
    S_CPOS_ATK2 => (CPOS, 5, 4, CPosAttack, S_CPOS_ATK3),
    S_CPOS_ATK3 => (CPOS, 4, 4, CPosAttack, S_CPOS_ATK4),
    S_CPOS_ATK4 => (CPOS, 5, 1, CPosRefire, S_CPOS_ATK2),
    S_RIFL_ATK1 => (RIFL, 4, 10, FaceTarget, S_RIFL_ATK2),
    S_RIFL_ATK2 => (RIFL, 5, 8, PlayAttack, S_RIFL_ATK3),
    S_RIFL_ATK3 => (RIFL, 4, 8, Null, S_POSS_RUN1),
    S_ZMEL_ATK1 => (ZMEL, 4, 8, FaceTarget, S_ZMEL_ATK2),
    S_ZMEL_ATK2 => (ZMEL, 5, 6, MeleeZombieAttack, S_ZMEL_ATK3),
    S_ZMEL_ATK3 => (ZMEL, 4, 6, Null, S_POSS_RUN1),
    S_SSGZ_ATK1 => (SSGZ, 4, 10, FaceTarget, S_SSGZ_ATK2),
    S_SSGZ_ATK2 => (SSGZ, 5, 10, SsgPosAttack, S_SSGZ_ATK3),
    S_SSGZ_ATK3 => (SSGZ, 4, 10, Null, S_POSS_RUN1),
    S_PLZM_ATK1 => (PLZM, 4, 10, FaceTarget, S_PLZM_ATK2),
    S_PLZM_ATK2 => (PLZM, 5, 4, PlasmaZombieAttack, S_PLZM_ATK3),
    S_PLZM_ATK3 => (PLZM, 4, 4, PlasmaZombieAttack, S_PLZM_ATK4),
    S_PLZM_ATK4 => (PLZM, 4, 8, Null, S_POSS_RUN1),
    S_BFGC_ATK1 => (BFGC, 4, 20, BfgCommandoRaise, S_BFGC_ATK2),
    S_BFGC_ATK2 => (BFGC, 5, 10, BfgCommandoAttack, S_BFGC_ATK3),
    S_BFGC_ATK3 => (BFGC, 4, 10, Null, S_POSS_RUN1),
    S_SARG_STND => (SARG, 0, 10, Look, S_SARG_STND2),
    S_SARG_STND2 => (SARG, 1, 10, Look, S_SARG_STND),
    S_SARG_RUN1 => (SARG, 0, 2, Chase, S_SARG_RUN2),
    S_SARG_RUN2 => (SARG, 0, 2, Chase, S_SARG_RUN3),
    S_SARG_RUN3 => (SARG, 1, 2, Chase, S_SARG_RUN4),
    S_SARG_RUN4 => (SARG, 1, 2, Chase, S_SARG_RUN5),
    S_SARG_RUN5 => (SARG, 2, 2, Chase, S_SARG_RUN6),
    S_SARG_RUN6 => (SARG, 2, 2, Chase, S_SARG_RUN7),
    S_SARG_RUN7 => (SARG, 3, 2, Chase, S_SARG_RUN8),
    S_SARG_RUN8 => (SARG, 3, 2, Chase, S_SARG_RUN1),
    S_SARG_PAIN => (SARG, 6, 3, Null, S_SARG_PAIN2),
    S_SARG_PAIN2 => (SARG, 6, 3, Pain, S_SARG_RUN1),
    S_SARG_DIE1 => (SARG, 7, 5, Null, S_SARG_DIE2),
    S_SARG_DIE2 => (SARG, 8, 5, Scream, S_SARG_DIE3),
    S_SARG_DIE3 => (SARG, 9, 5, Fall, S_SARG_DIE4),
    S_SARG_DIE4 => (SARG, 10, 5, OnDeathTrigger, S_SARG_DIE5),
    S_SARG_DIE5 => (SARG, 11, 5, Null, S_SARG_DIE6),
    S_SARG_DIE6 => (SARG, 12, -1, Null, S_NULL),
    S_SARG_RAISE1 => (SARG, 11, 5, Null, S_SARG_RAISE2),
    S_SARG_RAISE2 => (SARG, 10, 5, Null, S_SARG_RAISE3),
    S_SARG_RAISE3 => (SARG, 9, 5, Null, S_SARG_RAISE4),
    S_SARG_RAISE4 => (SARG, 8, 5, Null, S_SARG_RAISE5),
    S_SARG_RAISE5 => (SARG, 7, 5, Null, S_SARG_RUN1),
    S_SARG_ATK1 => (SARG, 4, 8, FaceTarget, S_SARG_ATK2),
    S_SARG_ATK2 => (SARG, 5, 8, FaceTarget, S_SARG_ATK3),
    S_SARG_ATK3 => (SARG, 6, 8, SargAttack, S_SARG_RUN1),
    S_HHND_ATK1 => (HHND, 4, 8, FaceTarget, S_HHND_ATK2),
    S_HHND_ATK2 => (HHND, 5, 8, FaceTarget, S_HHND_ATK3),
    S_HHND_ATK3 => (HHND, 6, 8, HellhoundAttack, S_SARG_RUN1),
    S_TROO_STND => (TROO, 0, 10, Look, S_TROO_STND2),
    S_TROO_STND2 => (TROO, 1, 10, Look, S_TROO_STND),
    S_TROO_RUN1 => (TROO, 0, 3, Chase, S_TROO_RUN2),
    S_TROO_RUN2 => (TROO, 0, 3, Chase, S_TROO_RUN3),
    S_TROO_RUN3 => (TROO, 1, 3, Chase, S_TROO_RUN4),
    S_TROO_RUN4 => (TROO, 1, 3, Chase, S_TROO_RUN5),
    S_TROO_RUN5 => (TROO, 2, 3, Chase, S_TROO_RUN6),
    S_TROO_RUN6 => (TROO, 2, 3, Chase, S_TROO_RUN7),
    S_TROO_RUN7 => (TROO, 3, 3, Chase, S_TROO_RUN8),
    S_TROO_RUN8 => (TROO, 3, 3, Chase, S_TROO_RUN1),
    S_TROO_PAIN => (TROO, 6, 3, Null, S_TROO_PAIN2),
    S_TROO_PAIN2 => (TROO, 6, 3, Pain, S_TROO_RUN1),
    S_TROO_DIE1 => (TROO, 7, 5, Null, S_TROO_DIE2),
    S_TROO_DIE2 => (TROO, 8, 5, Scream, S_TROO_DIE3),
    S_TROO_DIE3 => (TROO, 9, 5, Fall, S_TROO_DIE4),
    S_TROO_DIE4 => (TROO, 10, 5, OnDeathTrigger, S_TROO_DIE5),
    S_TROO_DIE5 => (TROO, 11, -1, Null, S_NULL),
    S_TROO_XDIE1 => (TROO, 12, 5, Null, S_TROO_XDIE2),
    S_TROO_XDIE2 => (TROO, 13, 5, XScream, S_TROO_XDIE3),
    S_TROO_XDIE3 => (TROO, 14, 5, Fall, S_TROO_XDIE4),
    S_TROO_XDIE4 => (TROO, 15, 5, OnDeathTrigger, S_TROO_XDIE5),
    S_TROO_XDIE5 => (TROO, 16, -1, Null, S_NULL),
    S_TROO_RAISE1 => (TROO, 10, 5, Null, S_TROO_RAISE2),
    S_TROO_RAISE2 => (TROO, 9, 5, Null, S_TROO_RAISE3),
    S_TROO_RAISE3 => (TROO, 8, 5, Null, S_TROO_RAISE4),
    S_TROO_RAISE4 => (TROO, 7, 5, Null, S_TROO_RUN1),
    S_TROO_MELEE1 => (TROO, 8, 8, FaceTarget, S_TROO_MELEE2),
    S_TROO_MELEE2 => (TROO, 9, 8, FaceTarget, S_TROO_MELEE3),
    S_TROO_MELEE3 => (TROO, 10, 6, TroopMelee, S_TROO_RUN1),
    S_TROO_ATK1 => (TROO, 8, 8, FaceTarget, S_TROO_ATK2),
    S_TROO_ATK2 => (TROO, 9, 8, FaceTarget, S_TROO_ATK3),
    S_TROO_ATK3 => (TROO, 10, 6, TroopAttack, S_TROO_RUN1),
    S_HEAD_STND => (HEAD, 0, 10, Look, S_HEAD_STND),
    S_HEAD_RUN1 => (HEAD, 0, 3, Chase, S_HEAD_RUN1),
    S_HEAD_ATK1 => (HEAD, 1, 5, FaceTarget, S_HEAD_ATK2),
    S_HEAD_ATK2 => (HEAD, 2, 5, FaceTarget, S_HEAD_ATK3),
    S_HEAD_ATK3 => (HEAD, 3, 5, HeadAttack, S_HEAD_RUN1),
    S_HEAD_PAIN1 => (HEAD, 4, 3, Null, S_HEAD_PAIN2),
    S_HEAD_PAIN2 => (HEAD, 4, 3, Pain, S_HEAD_PAIN3),
    S_HEAD_PAIN3 => (HEAD, 5, 6, Null, S_HEAD_RUN1),
    S_HEAD_DIE1 => (HEAD, 6, 8, Null, S_HEAD_DIE2),
    S_HEAD_DIE2 => (HEAD, 7, 8, Scream, S_HEAD_DIE3),
    S_HEAD_DIE3 => (HEAD, 8, 8, Null, S_HEAD_DIE4),
    S_HEAD_DIE4 => (HEAD, 9, 8, Fall, S_HEAD_DIE5),
    S_HEAD_DIE5 => (HEAD, 10, 8, OnDeathTrigger, S_HEAD_DIE6),
    S_HEAD_DIE6 => (HEAD, 11, -1, Null, S_NULL),
    S_HEAD_RAISE1 => (HEAD, 11, 8, Null, S_HEAD_RAISE2),
    S_HEAD_RAISE2 => (HEAD, 10, 8, Null, S_HEAD_RAISE3),
    S_HEAD_RAISE3 => (HEAD, 9, 8, Null, S_HEAD_RAISE4),
    S_HEAD_RAISE4 => (HEAD, 8, 8, Null, S_HEAD_RAISE5),
    S_HEAD_RAISE5 => (HEAD, 7, 8, Null, S_HEAD_RAISE6),
    S_HEAD_RAISE6 => (HEAD, 6, 8, Null, S_HEAD_RUN1),
    S_BOSS_STND => (BOSS, 0, 10, Look, S_BOSS_STND2),
    S_BOSS_STND2 => (BOSS, 1, 10, Look, S_BOSS_STND),
    S_BOSS_RUN1 => (BOSS, 0, 3, Chase, S_BOSS_RUN2),
    S_BOSS_RUN2 => (BOSS, 0, 3, Chase, S_BOSS_RUN3),
    S_BOSS_RUN3 => (BOSS, 1, 3, Chase, S_BOSS_RUN4),
    S_BOSS_RUN4 => (BOSS, 1, 3, Chase, S_BOSS_RUN5),
    S_BOSS_RUN5 => (BOSS, 2, 3, Chase, S_BOSS_RUN6),
    S_BOSS_RUN6 => (BOSS, 2, 3, Chase, S_BOSS_RUN7),
    S_BOSS_RUN7 => (BOSS, 3, 3, Chase, S_BOSS_RUN8),
    S_BOSS_RUN8 => (BOSS, 3, 3, Chase, S_BOSS_RUN1),
    S_BOSS_PAIN => (BOSS, 6, 3, Null, S_BOSS_PAIN2),
    S_BOSS_PAIN2 => (BOSS, 6, 3, Pain, S_BOSS_RUN1),
    S_BOSS_DIE1 => (BOSS, 7, 5, Null, S_BOSS_DIE2),
    S_BOSS_DIE2 => (BOSS, 8, 5, Scream, S_BOSS_DIE3),
    S_BOSS_DIE3 => (BOSS, 9, 5, Fall, S_BOSS_DIE4),
    S_BOSS_DIE4 => (BOSS, 10, 5, OnDeathTrigger, S_BOSS_DIE5),
    S_BOSS_DIE5 => (BOSS, 11, 5, Null, S_BOSS_DIE6),
    S_BOSS_DIE6 => (BOSS, 12, 5, Null, S_BOSS_DIE7),
    S_BOSS_DIE7 => (BOSS, 13, -1, Null, S_NULL),
    S_BOSS_RAISE1 => (BOSS, 12, 5, Null, S_BOSS_RAISE2),
    S_BOSS_RAISE2 => (BOSS, 11, 5, Null, S_BOSS_RAISE3),
    S_BOSS_RAISE3 => (BOSS, 10, 5, Null, S_BOSS_RAISE4),
    S_BOSS_RAISE4 => (BOSS, 9, 5, Null, S_BOSS_RAISE5),
    S_BOSS_RAISE5 => (BOSS, 8, 5, Null, S_BOSS_RAISE6),
    S_BOSS_RAISE6 => (BOSS, 7, 5, Null, S_BOSS_RUN1),
    S_BOSS_ATK1 => (BOSS, 4, 8, FaceTarget, S_BOSS_ATK2),
    S_BOSS_ATK2 => (BOSS, 5, 8, FaceTarget, S_BOSS_ATK3),
    S_BOSS_ATK3 => (BOSS, 6, 8, BruisAttack, S_BOSS_RUN1),
    S_BR64_STND => (BR64, 0, 10, Look, S_BR64_STND2),
    S_BR64_STND2 => (BR64, 1, 10, Look, S_BR64_STND),
    S_BR64_RUN1 => (BR64, 0, 3, Chase, S_BR64_RUN2),
    S_BR64_RUN2 => (BR64, 0, 3, Chase, S_BR64_RUN3),
    S_BR64_RUN3 => (BR64, 1, 3, Chase, S_BR64_RUN4),
    S_BR64_RUN4 => (BR64, 1, 3, Chase, S_BR64_RUN5),
    S_BR64_RUN5 => (BR64, 2, 3, Chase, S_BR64_RUN6),
    S_BR64_RUN6 => (BR64, 2, 3, Chase, S_BR64_RUN7),
    S_BR64_RUN7 => (BR64, 3, 3, Chase, S_BR64_RUN8),
    S_BR64_RUN8 => (BR64, 3, 3, Chase, S_BR64_RUN1),
    S_BR64_PAIN => (BR64, 6, 3, Null, S_BR64_PAIN2),
    S_BR64_PAIN2 => (BR64, 6, 3, Pain, S_BR64_RUN1),
    S_BR64_DIE1 => (BR64, 7, 5, Null, S_BR64_DIE2),
    S_BR64_DIE2 => (BR64, 8, 5, Scream, S_BR64_DIE3),
    S_BR64_DIE3 => (BR64, 9, 5, Fall, S_BR64_DIE4),
    S_BR64_DIE4 => (BR64, 10, 5, OnDeathTrigger, S_BR64_DIE5),
    S_BR64_DIE5 => (BR64, 11, 5, Null, S_BR64_DIE6),
    S_BR64_DIE6 => (BR64, 12, 5, Null, S_BR64_DIE7),
    S_BR64_DIE7 => (BR64, 13, -1, Null, S_NULL),
    S_BR64_RAISE1 => (BR64, 12, 5, Null, S_BR64_RAISE2),
    S_BR64_RAISE2 => (BR64, 11, 5, Null, S_BR64_RAISE3),
    S_BR64_RAISE3 => (BR64, 10, 5, Null, S_BR64_RAISE4),
    S_BR64_RAISE4 => (BR64, 9, 5, Null, S_BR64_RAISE5),
    S_BR64_RAISE5 => (BR64, 8, 5, Null, S_BR64_RAISE6),
    S_BR64_RAISE6 => (BR64, 7, 5, Null, S_BR64_RUN1),
    S_BR64_ATK => (BR64, 4, 0, BruiserDemonRandomAttack, S_BR64_RUN1),
    S_BR64_ATK1_1 => (BR64, 4, 8, FaceTarget, S_BR64_ATK1_1B),
    S_BR64_ATK1_1B => (BR64, 5, 8, BruisAttack, S_BR64_RUN1),
    S_BR64_ATK1_2 => (BR64, 4, 8, FaceTarget, S_BR64_ATK1_2B),
    S_BR64_ATK1_2B => (BR64, 6, 8, BruiserDemonFire, S_BR64_RUN1),
    S_SKUL_STND => (SKUL, 0, 5, Look, S_SKUL_STND2),
    S_SKUL_STND2 => (SKUL, 1, 5, Look, S_SKUL_STND),
    S_SKUL_RUN1 => (SKUL, 0, 3, Chase, S_SKUL_RUN2),
    S_SKUL_RUN2 => (SKUL, 1, 3, Chase, S_SKUL_RUN1),
    S_SKUL_ATK1 => (SKUL, 2, 5, FaceTarget, S_SKUL_ATK2),
    S_SKUL_ATK2 => (SKUL, 3, 4, SkullAttack, S_SKUL_ATK3),
    S_SKUL_ATK3 => (SKUL, 2, 4, Null, S_SKUL_ATK4),
    S_SKUL_ATK4 => (SKUL, 3, 4, Null, S_SKUL_ATK3),
    S_SKUL_PAIN1 => (SKUL, 4, 3, Null, S_SKUL_PAIN2),
    S_SKUL_PAIN2 => (SKUL, 4, 3, Pain, S_SKUL_RUN1),
    S_SKUL_DIE1 => (SKUL, 5, 5, SkullSetAlpha, S_SKUL_DIE2),
    S_SKUL_DIE2 => (SKUL, 6, 5, Scream, S_SKUL_DIE3),
    S_SKUL_DIE3 => (SKUL, 7, 5, Null, S_SKUL_DIE4),
    S_SKUL_DIE4 => (SKUL, 8, 5, Fall, S_SKUL_DIE5),
    S_SKUL_DIE5 => (SKUL, 9, 5, OnDeathTrigger, S_SKUL_DIE6),
    S_SKUL_DIE6 => (SKUL, 10, 5, Null, S_NULL),
    S_SKUG_RUN1 => (SKUG, 0, 3, NightmareLostSoulChase, S_SKUG_RUN2),
    S_SKUG_RUN2 => (SKUG, 1, 3, NightmareLostSoulChase, S_SKUG_RUN1),
    S_SKUG_HEAL1 => (SKUG, 4, 8, Null, S_SKUG_HEAL2),
    S_SKUG_HEAL2 => (SKUG, 5, 8, Null, S_SKUG_HEAL3),
    S_SKUG_HEAL3 => (SKUG, 6, 8, Null, S_SKUG_RUN1),
    S_STLK_STND => (STLK, 0, 5, Look, S_STLK_STND2),
    S_STLK_STND2 => (STLK, 1, 5, Look, S_STLK_STND),
    S_STLK_RUN1 => (STLK, 0, 3, Chase, S_STLK_RUN2),
    S_STLK_RUN2 => (STLK, 1, 3, Chase, S_STLK_RUN1),
    S_STLK_ATK => (STLK, 2, 0, StalkerDecide, S_STLK_RUN1),
    S_STLK_ATK1_1 => (STLK, 2, 5, FaceTarget, S_STLK_ATK1_2),
    S_STLK_ATK1_2 => (STLK, 3, 5, StalkerAttack1, S_STLK_RUN1),
    S_STLK_ATK2_1 => (STLK, 2, 5, FaceTarget, S_STLK_ATK2_2),
    S_STLK_ATK2_2 => (STLK, 3, 5, StalkerAttack2, S_STLK_RUN1),
    S_STLK_ATK3_1 => (STLK, 2, 5, FaceTarget, S_STLK_ATK3_2),
    S_STLK_ATK3_2 => (STLK, 3, 4, SkullAttack, S_STLK_ATK3_3),
    S_STLK_ATK3_3 => (STLK, 2, 4, Null, S_STLK_ATK3_4),
    S_STLK_ATK3_4 => (STLK, 3, 4, Null, S_STLK_ATK3_3),
    S_PAIN_STND => (PAIN, 0, 10, Look, S_PAIN_STND),
    S_PAIN_RUN1 => (PAIN, 0, 3, Chase, S_PAIN_RUN2),
    S_PAIN_RUN2 => (PAIN, 0, 3, Chase, S_PAIN_RUN3),
    S_PAIN_RUN3 => (PAIN, 1, 3, Chase, S_PAIN_RUN4),
    S_PAIN_RUN4 => (PAIN, 1, 3, Chase, S_PAIN_RUN5),
    S_PAIN_RUN5 => (PAIN, 2, 3, Chase, S_PAIN_RUN6),
    S_PAIN_RUN6 => (PAIN, 2, 3, Chase, S_PAIN_RUN1),
    S_PAIN_PAIN1 => (PAIN, 6, 6, Null, S_PAIN_PAIN2),
    S_PAIN_PAIN2 => (PAIN, 6, 6, Pain, S_PAIN_RUN1),
    S_PAIN_DIE1 => (PAIN, 7, 8, Null, S_PAIN_DIE2),
    S_PAIN_DIE2 => (PAIN, 8, 8, Scream, S_PAIN_DIE3),
    S_PAIN_DIE3 => (PAIN, 9, 8, PainDie, S_PAIN_DIE4),
    S_PAIN_DIE4 => (PAIN, 10, 8, PainDeathEvent, S_PAIN_DIE5),
    S_PAIN_DIE5 => (PAIN, 11, 8, PainDeathEvent, S_PAIN_DIE6),
    S_PAIN_DIE6 => (PAIN, 12, 8, Null, S_NULL),
    S_PAIN_RAISE1 => (PAIN, 12, 8, Null, S_PAIN_RAISE2),
    S_PAIN_RAISE2 => (PAIN, 11, 8, Null, S_PAIN_RAISE3),
    S_PAIN_RAISE3 => (PAIN, 10, 8, Null, S_PAIN_RAISE4),
    S_PAIN_RAISE4 => (PAIN, 9, 8, Null, S_PAIN_RAISE5),
    S_PAIN_RAISE5 => (PAIN, 8, 8, Null, S_PAIN_RAISE6),
    S_PAIN_RAISE6 => (PAIN, 7, 8, Null, S_PAIN_RUN1),
    S_PAIN_ATK1 => (PAIN, 3, 5, FaceTarget, S_PAIN_ATK2),
    S_PAIN_ATK2 => (PAIN, 4, 5, FaceTarget, S_PAIN_ATK3),
    S_PAIN_ATK3 => (PAIN, 5, 5, FaceTarget, S_PAIN_ATK4),
    S_PAIN_ATK4 => (PAIN, 5, 0, PainAttack, S_PAIN_RUN1),
    S_PAIS_STND => (PAIS, 0, 10, Look, S_PAIS_STND),
    S_PAIS_RUN1 => (PAIS, 0, 3, Chase, S_PAIS_RUN2),
    S_PAIS_RUN2 => (PAIS, 0, 3, Chase, S_PAIS_RUN3),
    S_PAIS_RUN3 => (PAIS, 1, 3, Chase, S_PAIS_RUN4),
    S_PAIS_RUN4 => (PAIS, 1, 3, Chase, S_PAIS_RUN5),
    S_PAIS_RUN5 => (PAIS, 2, 3, Chase, S_PAIS_RUN6),
    S_PAIS_RUN6 => (PAIS, 2, 3, Chase, S_PAIS_RUN1),
    S_PAIS_PAIN1 => (PAIS, 6, 6, Null, S_PAIS_PAIN2),
    S_PAIS_PAIN2 => (PAIS, 6, 6, Pain, S_PAIS_RUN1),
    S_PAIS_DIE1 => (PAIS, 7, 8, Null, S_PAIS_DIE2),
    S_PAIS_DIE2 => (PAIS, 8, 8, Scream, S_PAIS_DIE3),
    S_PAIS_DIE3 => (PAIS, 9, 8, PainElementalStalkerDie, S_PAIS_DIE4),
    S_PAIS_DIE4 => (PAIS, 10, 8, PainDeathEvent, S_PAIS_DIE5),
    S_PAIS_DIE5 => (PAIS, 11, 8, PainDeathEvent, S_PAIS_DIE6),
    S_PAIS_DIE6 => (PAIS, 12, 8, Null, S_NULL),
    S_PAIS_RAISE1 => (PAIS, 12, 8, Null, S_PAIS_RAISE2),
    S_PAIS_RAISE2 => (PAIS, 11, 8, Null, S_PAIS_RAISE3),
    S_PAIS_RAISE3 => (PAIS, 10, 8, Null, S_PAIS_RAISE4),
    S_PAIS_RAISE4 => (PAIS, 9, 8, Null, S_PAIS_RAISE5),
    S_PAIS_RAISE5 => (PAIS, 8, 8, Null, S_PAIS_RAISE6),
    S_PAIS_RAISE6 => (PAIS, 7, 8, Null, S_PAIS_RUN1),
    S_PAIS_ATK1 => (PAIS, 3, 5, FaceTarget, S_PAIS_ATK2),
    S_PAIS_ATK2 => (PAIS, 4, 5, FaceTarget, S_PAIS_ATK3),
    S_PAIS_ATK3 => (PAIS, 5, 5, FaceTarget, S_PAIS_ATK4),
    S_PAIS_ATK4 => (PAIS, 5, 0, PainElementalStalkerAttack, S_PAIS_RUN1),
    S_PAIG_STND => (PAIG, 0, 10, Look, S_PAIG_STND),
    S_PAIG_RUN1 => (PAIG, 0, 3, PainElementalNightmareChase, S_PAIG_RUN2),
    S_PAIG_RUN2 => (PAIG, 0, 3, PainElementalNightmareChase, S_PAIG_RUN3),
    S_PAIG_RUN3 => (PAIG, 1, 3, PainElementalNightmareChase, S_PAIG_RUN4),
    S_PAIG_RUN4 => (PAIG, 1, 3, PainElementalNightmareChase, S_PAIG_RUN5),
    S_PAIG_RUN5 => (PAIG, 2, 3, PainElementalNightmareChase, S_PAIG_RUN6),
    S_PAIG_RUN6 => (PAIG, 2, 3, PainElementalNightmareChase, S_PAIG_RUN1),
    S_PAIG_PAIN1 => (PAIG, 6, 6, Null, S_PAIG_PAIN2),
    S_PAIG_PAIN2 => (PAIG, 6, 6, Pain, S_PAIG_RUN1),
    S_PAIG_DIE1 => (PAIG, 7, 8, Null, S_PAIG_DIE2),
    S_PAIG_DIE2 => (PAIG, 8, 8, Scream, S_PAIG_DIE3),
    S_PAIG_DIE3 => (PAIG, 9, 8, PainElementalNightmareDie, S_PAIG_DIE4),
    S_PAIG_DIE4 => (PAIG, 10, 8, PainDeathEvent, S_PAIG_DIE5),
    S_PAIG_DIE5 => (PAIG, 11, 8, PainDeathEvent, S_PAIG_DIE6),
    S_PAIG_DIE6 => (PAIG, 12, 8, Null, S_NULL),
    S_PAIG_RAISE1 => (PAIG, 12, 8, Null, S_PAIG_RAISE2),
    S_PAIG_RAISE2 => (PAIG, 11, 8, Null, S_PAIG_RAISE3),
    S_PAIG_RAISE3 => (PAIG, 10, 8, Null, S_PAIG_RAISE4),
    S_PAIG_RAISE4 => (PAIG, 9, 8, Null, S_PAIG_RAISE5),
    S_PAIG_RAISE5 => (PAIG, 8, 8, Null, S_PAIG_RAISE6),
    S_PAIG_RAISE6 => (PAIG, 7, 8, Null, S_PAIG_RUN1),
    S_PAIG_ATK => (PAIG, 3, 0, PainElementalNightmareDecide, S_PAIG_RUN1),
    S_PAIG_ATK1_1 => (PAIG, 3, 5, FaceTarget, S_PAIG_ATK1_2),
    S_PAIG_ATK1_2 => (PAIG, 4, 5, FaceTarget, S_PAIG_ATK1_3),
    S_PAIG_ATK1_3 => (PAIG, 5, 5, PainElementalNightmareAttack, S_PAIG_RUN1),
    S_PAIG_ATK2_1 => (PAIG, 3, 5, FaceTarget, S_PAIG_ATK2_2),
    S_PAIG_ATK2_2 => (PAIG, 5, 8, PainElementalNightmareAttack2, S_PAIG_RUN1),
    S_PAIG_HEAL1 => (PAIG, 13, 8, Null, S_PAIG_HEAL2),
    S_PAIG_HEAL2 => (PAIG, 14, 8, Null, S_PAIG_HEAL3),
    S_PAIG_HEAL3 => (PAIG, 15, 8, Null, S_PAIG_RUN1),
    S_FATT_STND => (FATT, 0, 10, Look, S_FATT_STND2),
    S_FATT_STND2 => (FATT, 1, 10, Look, S_FATT_STND),
    S_FATT_RUN1 => (FATT, 0, 4, Chase, S_FATT_RUN2),
    S_FATT_RUN2 => (FATT, 0, 4, Chase, S_FATT_RUN3),
    S_FATT_RUN3 => (FATT, 1, 4, Chase, S_FATT_RUN4),
    S_FATT_RUN4 => (FATT, 1, 4, Chase, S_FATT_RUN5),
    S_FATT_RUN5 => (FATT, 2, 4, Chase, S_FATT_RUN6),
    S_FATT_RUN6 => (FATT, 2, 4, Chase, S_FATT_RUN7),
    S_FATT_RUN7 => (FATT, 3, 4, Chase, S_FATT_RUN8),
    S_FATT_RUN8 => (FATT, 3, 4, Chase, S_FATT_RUN1),
    S_FATT_PAIN => (FATT, 6, 3, Null, S_FATT_PAIN2),
    S_FATT_PAIN2 => (FATT, 6, 3, Pain, S_FATT_RUN1),
    S_FATT_DIE1 => (FATT, 7, 5, Null, S_FATT_DIE2),
    S_FATT_DIE2 => (FATT, 8, 5, Scream, S_FATT_DIE3),
    S_FATT_DIE3 => (FATT, 9, 5, Fall, S_FATT_DIE4),
    S_FATT_DIE4 => (FATT, 10, 5, OnDeathTrigger, S_FATT_DIE5),
    S_FATT_DIE5 => (FATT, 11, 5, Null, S_FATT_DIE6),
    S_FATT_DIE6 => (FATT, 12, 5, Null, S_FATT_DIE7),
    S_FATT_DIE7 => (FATT, 13, -1, Null, S_NULL),
    S_FATT_RAISE1 => (FATT, 12, 5, Null, S_FATT_RAISE2),
    S_FATT_RAISE2 => (FATT, 11, 5, Null, S_FATT_RAISE3),
    S_FATT_RAISE3 => (FATT, 10, 5, Null, S_FATT_RAISE4),
    S_FATT_RAISE4 => (FATT, 9, 5, Null, S_FATT_RAISE5),
    S_FATT_RAISE5 => (FATT, 8, 5, Null, S_FATT_RAISE6),
    S_FATT_RAISE6 => (FATT, 7, 5, Null, S_FATT_RUN1),
    S_FATT_ATK1 => (FATT, 4, 20, FatRaise, S_FATT_ATK2),
    S_FATT_ATK2 => (FATT, 5, 10, FatAttack1, S_FATT_ATK3),
    S_FATT_ATK3 => (FATT, 4, 5, FaceTarget, S_FATT_ATK4),
    S_FATT_ATK4 => (FATT, 5, 10, FatAttack2, S_FATT_ATK5),
    S_FATT_ATK5 => (FATT, 4, 5, FaceTarget, S_FATT_ATK6),
    S_FATT_ATK6 => (FATT, 5, 10, FatAttack3, S_FATT_ATK7),
    S_FATT_ATK7 => (FATT, 4, 5, FaceTarget, S_FATT_RUN1),
    S_DUKE_ATK1 => (DUKE, 4, 20, DukeOfHellRaise, S_DUKE_ATK2),
    S_DUKE_ATK2 => (DUKE, 5, 10, DukeOfHellAttack1, S_DUKE_ATK3),
    S_DUKE_ATK3 => (DUKE, 4, 5, FaceTarget, S_DUKE_ATK4),
    S_DUKE_ATK4 => (DUKE, 5, 10, DukeOfHellAttack2, S_DUKE_ATK5),
    S_DUKE_ATK5 => (DUKE, 4, 5, FaceTarget, S_DUKE_ATK6),
    S_DUKE_ATK6 => (DUKE, 5, 10, DukeOfHellAttack3, S_DUKE_ATK7),
    S_DUKE_ATK7 => (DUKE, 4, 5, FaceTarget, S_FATT_RUN1),
    S_HECT_ATK1 => (HECT, 4, 20, FatRaise, S_HECT_ATK2),
    S_HECT_ATK2 => (HECT, 5, 10, HectAttack1, S_HECT_ATK3),
    S_HECT_ATK3 => (HECT, 4, 5, FaceTarget, S_HECT_ATK4),
    S_HECT_ATK4 => (HECT, 5, 10, HectAttack2, S_HECT_ATK5),
    S_HECT_ATK5 => (HECT, 4, 5, FaceTarget, S_HECT_ATK6),
    S_HECT_ATK6 => (HECT, 5, 10, HectAttack3, S_HECT_ATK7),
    S_HECT_ATK7 => (HECT, 4, 5, FaceTarget, S_FATT_RUN1),
    S_BSPI_STND => (BSPI, 0, 10, Look, S_BSPI_STND2),
    S_BSPI_STND2 => (BSPI, 1, 10, Look, S_BSPI_STND),
    S_BSPI_SIGHT => (BSPI, 0, 20, Null, S_BSPI_RUN1),
    S_BSPI_RUN1 => (BSPI, 0, 3, BabyMetal, S_BSPI_RUN2),
    S_BSPI_RUN2 => (BSPI, 0, 3, Chase, S_BSPI_RUN3),
    S_BSPI_RUN3 => (BSPI, 1, 3, Chase, S_BSPI_RUN4),
    S_BSPI_RUN4 => (BSPI, 1, 3, Chase, S_BSPI_RUN5),
    S_BSPI_RUN5 => (BSPI, 2, 3, BabyMetal, S_BSPI_RUN6),
    S_BSPI_RUN6 => (BSPI, 2, 3, Chase, S_BSPI_RUN7),
    S_BSPI_RUN7 => (BSPI, 3, 3, Chase, S_BSPI_RUN8),
    S_BSPI_RUN8 => (BSPI, 3, 3, Chase, S_BSPI_RUN1),
    S_BSPI_ATK1 => (BSPI, 4, 20, BspiFaceTarget, S_BSPI_ATK2),
    S_BSPI_ATK2 => (BSPI, 5, 4, BspiAttack, S_BSPI_ATK3),
    S_BSPI_ATK3 => (BSPI, 4, 4, Null, S_BSPI_ATK4),
    S_BSPI_ATK4 => (BSPI, 5, 1, SpidRefire, S_BSPI_ATK2),
    S_ANAI_ATK1 => (ANAI, 4, 20, BspiFaceTarget, S_ANAI_ATK2),
    S_ANAI_ATK2 => (ANAI, 5, 4, ArthronailerAttack, S_ANAI_ATK3),
    S_ANAI_ATK3 => (ANAI, 4, 4, Null, S_ANAI_ATK4),
    S_ANAI_ATK4 => (ANAI, 5, 1, SpidRefire, S_ANAI_ATK2),
    S_BSPI_PAIN1 => (BSPI, 6, 3, Null, S_BSPI_PAIN2),
    S_BSPI_PAIN2 => (BSPI, 6, 3, Pain, S_BSPI_RUN1),
    S_BSPI_DIE1 => (BSPI, 7, 20, Scream, S_BSPI_DIE2),
    S_BSPI_DIE2 => (BSPI, 8, 7, Fall, S_BSPI_DIE3),
    S_BSPI_DIE3 => (BSPI, 9, 7, Null, S_BSPI_DIE4),
    S_BSPI_DIE4 => (BSPI, 10, 7, OnDeathTrigger, S_BSPI_DIE5),
    S_BSPI_DIE5 => (BSPI, 11, 7, Null, S_BSPI_DIE6),
    S_BSPI_DIE6 => (BSPI, 12, 7, Null, S_BSPI_DIE7),
    S_BSPI_DIE7 => (BSPI, 13, -1, Null, S_NULL),
    S_BSPI_RAISE1 => (BSPI, 13, 5, Null, S_BSPI_RAISE2),
    S_BSPI_RAISE2 => (BSPI, 12, 5, Null, S_BSPI_RAISE3),
    S_BSPI_RAISE3 => (BSPI, 11, 5, Null, S_BSPI_RAISE4),
    S_BSPI_RAISE4 => (BSPI, 10, 5, Null, S_BSPI_RAISE5),
    S_BSPI_RAISE5 => (BSPI, 9, 5, Null, S_BSPI_RAISE6),
    S_BSPI_RAISE6 => (BSPI, 8, 5, Null, S_BSPI_RAISE7),
    S_BSPI_RAISE7 => (BSPI, 7, 5, Null, S_BSPI_RUN1),
    S_CYBR_STND => (CYBR, 0, 10, Look, S_CYBR_STND2),
    S_CYBR_STND2 => (CYBR, 1, 10, Look, S_CYBR_STND),
    S_CYBR_RUN1 => (CYBR, 0, 4, Hoof, S_CYBR_RUN2),
    S_CYBR_RUN2 => (CYBR, 0, 4, Chase, S_CYBR_RUN3),
    S_CYBR_RUN3 => (CYBR, 1, 4, Chase, S_CYBR_RUN4),
    S_CYBR_RUN4 => (CYBR, 1, 4, Chase, S_CYBR_RUN5),
    S_CYBR_RUN5 => (CYBR, 2, 4, Metal, S_CYBR_RUN6),
    S_CYBR_RUN6 => (CYBR, 2, 4, Chase, S_CYBR_RUN7),
    S_CYBR_RUN7 => (CYBR, 3, 4, Chase, S_CYBR_RUN8),
    S_CYBR_RUN8 => (CYBR, 3, 4, Chase, S_CYBR_RUN1),
    S_CYBR_ATK1 => (CYBR, 4, 6, FaceTarget, S_CYBR_ATK2),
    S_CYBR_ATK2 => (CYBR, 5, 12, CyberAttack, S_CYBR_ATK3),
    S_CYBR_ATK3 => (CYBR, 4, 12, FaceTarget, S_CYBR_ATK4),
    S_CYBR_ATK4 => (CYBR, 5, 12, CyberAttack, S_CYBR_ATK5),
    S_CYBR_ATK5 => (CYBR, 4, 12, FaceTarget, S_CYBR_ATK6),
    S_CYBR_ATK6 => (CYBR, 5, 12, CyberAttack, S_CYBR_RUN1),
    S_BCYB_ATK1 => (BCYB, 4, 6, FaceTarget, S_BCYB_ATK2),
    S_BCYB_ATK2 => (BCYB, 5, 12, BfgCyberAttack, S_BCYB_ATK3),
    S_BCYB_ATK3 => (BCYB, 4, 12, FaceTarget, S_CYBR_RUN1),
    S_SCYB_ATK1 => (SCYB, 4, 6, FaceTarget, S_SCYB_ATK2),
    S_SCYB_ATK2 => (SCYB, 5, 4, SpidAttack, S_SCYB_ATK3),
    S_SCYB_ATK3 => (SCYB, 5, 4, SpidAttack, S_SCYB_ATK4),
    S_SCYB_ATK4 => (SCYB, 4, 1, SpidRefire, S_SCYB_ATK2),
    S_CYBR_PAIN => (CYBR, 6, 10, Pain, S_CYBR_RUN1),
    S_CYBR_DIE1 => (CYBR, 7, 10, CyberDeathEvent, S_CYBR_DIE2),
    S_CYBR_DIE2 => (CYBR, 8, 10, Null, S_CYBR_DIE3),
    S_CYBR_DIE3 => (CYBR, 9, 10, Null, S_CYBR_DIE4),
    S_CYBR_DIE4 => (CYBR, 10, 10, Null, S_CYBR_DIE5),
    S_CYBR_DIE5 => (CYBR, 11, 10, Null, S_CYBR_DIE6),
    S_CYBR_DIE6 => (CYBR, 12, 10, Null, S_CYBR_DIE7),
    S_CYBR_DIE7 => (CYBR, 13, 30, Fall, S_CYBR_DIE8),
    S_CYBR_DIE8 => (CYBR, 14, -1, OnDeathTrigger, S_NULL),
    S_ANNI_RUN1 => (ANNI, 0, 4, AnnihilatorHoof, S_ANNI_RUN2),
    S_ANNI_RUN2 => (ANNI, 0, 4, Chase, S_ANNI_RUN3),
    S_ANNI_RUN3 => (ANNI, 1, 4, Chase, S_ANNI_RUN4),
    S_ANNI_RUN4 => (ANNI, 1, 4, Chase, S_ANNI_RUN5),
    S_ANNI_RUN5 => (ANNI, 2, 4, Metal, S_ANNI_RUN6),
    S_ANNI_RUN6 => (ANNI, 2, 4, Chase, S_ANNI_RUN7),
    S_ANNI_RUN7 => (ANNI, 3, 4, Chase, S_ANNI_RUN8),
    S_ANNI_RUN8 => (ANNI, 3, 4, Chase, S_ANNI_RUN1),
    S_ANNI_ATK1 => (ANNI, 4, 6, FaceTarget, S_ANNI_ATK2),
    S_ANNI_ATK2 => (ANNI, 5, 12, AnnihilatorAttack, S_ANNI_ATK3),
    S_ANNI_ATK3 => (ANNI, 4, 12, FaceTarget, S_ANNI_ATK4),
    S_ANNI_ATK4 => (ANNI, 5, 8, AnnihilatorAttack1, S_ANNI_ATK5),
    S_ANNI_ATK5 => (ANNI, 5, 8, AnnihilatorAttack2, S_ANNI_ATK6),
    S_ANNI_ATK6 => (ANNI, 5, 8, AnnihilatorAttack3, S_ANNI_RUN1),
    S_SPID_STND => (SPID, 0, 10, Look, S_SPID_STND2),
    S_SPID_STND2 => (SPID, 1, 10, Look, S_SPID_STND),
    S_SPID_RUN1 => (SPID, 0, 3, SpiderMastermindMetal, S_SPID_RUN2),
    S_SPID_RUN2 => (SPID, 0, 3, Chase, S_SPID_RUN3),
    S_SPID_RUN3 => (SPID, 1, 3, Chase, S_SPID_RUN4),
    S_SPID_RUN4 => (SPID, 1, 3, Chase, S_SPID_RUN5),
    S_SPID_RUN5 => (SPID, 2, 3, SpiderMastermindMetal, S_SPID_RUN6),
    S_SPID_RUN6 => (SPID, 2, 3, Chase, S_SPID_RUN7),
    S_SPID_RUN7 => (SPID, 3, 3, Chase, S_SPID_RUN8),
    S_SPID_RUN8 => (SPID, 3, 3, Chase, S_SPID_RUN1),
    S_SPID_ATK1 => (SPID, 4, 20, FaceTarget, S_SPID_ATK2),
    S_SPID_ATK2 => (SPID, 5, 4, SpidAttack, S_SPID_ATK3),
    S_SPID_ATK3 => (SPID, 6, 4, SpidAttack, S_SPID_ATK4),
    S_SPID_ATK4 => (SPID, 6, 1, SpidRefire, S_SPID_ATK2),
    S_SPID_PAIN1 => (SPID, 7, 3, Null, S_SPID_PAIN2),
    S_SPID_PAIN2 => (SPID, 7, 3, Pain, S_SPID_RUN1),
    S_SPID_DIE1 => (SPID, 8, 20, SpidDeathEvent, S_SPID_DIE2),
    S_SPID_DIE2 => (SPID, 9, 10, Scream, S_SPID_DIE3),
    S_SPID_DIE3 => (SPID, 10, 10, Fall, S_SPID_DIE4),
    S_SPID_DIE4 => (SPID, 11, 10, Null, S_SPID_DIE5),
    S_SPID_DIE5 => (SPID, 12, 10, Null, S_SPID_DIE6),
    S_SPID_DIE6 => (SPID, 13, 30, OnDeathTrigger, S_SPID_DIE7),
    S_SPID_DIE7 => (SPID, 14, -1, Null, S_NULL),
    S_RECT_STND => (RECT, 0, 10, Look, S_RECT_STND2),
    S_RECT_STND2 => (RECT, 1, 10, Look, S_RECT_STND),
    S_RECT_RUN1 => (RECT, 0, 4, Hoof, S_RECT_RUN2),
    S_RECT_RUN2 => (RECT, 0, 4, RectChase, S_RECT_RUN3),
    S_RECT_RUN3 => (RECT, 1, 4, RectChase, S_RECT_RUN4),
    S_RECT_RUN4 => (RECT, 1, 4, RectChase, S_RECT_RUN5),
    S_RECT_RUN5 => (RECT, 2, 4, Metal, S_RECT_RUN6),
    S_RECT_RUN6 => (RECT, 2, 4, RectChase, S_RECT_RUN7),
    S_RECT_RUN7 => (RECT, 3, 4, RectChase, S_RECT_RUN8),
    S_RECT_RUN8 => (RECT, 3, 4, RectChase, S_RECT_RUN1),
    S_RECT_MELEE1 => (RECT, 4, 8, FaceTarget, S_RECT_MELEE2),
    S_RECT_MELEE2 => (RECT, 5, 8, RectGroundFire, S_RECT_MELEE3),
    S_RECT_MELEE3 => (RECT, 4, 8, Null, S_RECT_RUN1),
    S_RECT_ATK1 => (RECT, 6, 8, FaceTarget, S_RECT_ATK2),
    S_RECT_ATK2 => (RECT, 7, 8, RectMissile, S_RECT_ATK3),
    S_RECT_ATK3 => (RECT, 6, 8, Null, S_RECT_RUN1),
    S_RECT_PAIN1 => (RECT, 8, 4, Null, S_RECT_PAIN2),
    S_RECT_PAIN2 => (RECT, 8, 4, Pain, S_RECT_RUN1),
    S_RECT_DIE1 => (RECT, 9, 5, RectDeathEvent, S_RECT_DIE2),
    S_RECT_DIE2 => (RECT, 10, 5, Null, S_RECT_DIE3),
    S_RECT_DIE3 => (RECT, 11, 5, Null, S_RECT_DIE4),
    S_RECT_DIE4 => (RECT, 12, 5, Null, S_RECT_DIE5),
    S_RECT_DIE5 => (RECT, 13, 5, Null, S_RECT_DIE6),
    S_RECT_DIE6 => (RECT, 14, 60, OnDeathTrigger, S_RECT_DIE7),
    S_RECT_DIE7 => (RECT, 15, -1, Null, S_NULL),
    S_RECT2_RUN1 => (RECT, 0, 4, Hoof, S_RECT2_RUN2),
    S_RECT2_RUN2 => (RECT, 0, 4, RectChase2, S_RECT2_RUN3),
    S_RECT2_RUN3 => (RECT, 1, 4, RectChase2, S_RECT2_RUN4),
    S_RECT2_RUN4 => (RECT, 1, 4, RectChase2, S_RECT2_RUN5),
    S_RECT2_RUN5 => (RECT, 2, 4, Metal, S_RECT2_RUN6),
    S_RECT2_RUN6 => (RECT, 2, 4, RectChase2, S_RECT2_RUN7),
    S_RECT2_RUN7 => (RECT, 3, 4, RectChase2, S_RECT2_RUN8),
    S_RECT2_RUN8 => (RECT, 3, 4, RectChase2, S_RECT2_RUN1),
    S_RECT2_MELEE1 => (RECT, 4, 8, FaceTarget, S_RECT2_MELEE2),
    S_RECT2_MELEE2 => (RECT, 5, 8, RectGroundFire2, S_RECT2_MELEE3),
    S_RECT2_MELEE3 => (RECT, 4, 8, Null, S_RECT2_RUN1),
    S_RECT2_ATK1 => (RECT, 6, 8, FaceTarget, S_RECT2_ATK2),
    S_RECT2_ATK2 => (RECT, 7, 8, RectMissile2, S_RECT2_ATK3),
    S_RECT2_ATK3 => (RECT, 6, 8, Null, S_RECT2_RUN1),
    S_RECT2_HEAL1 => (RECT, 16, 10, Null, S_RECT2_HEAL2),
    S_RECT2_HEAL2 => (RECT, 17, 10, Null, S_RECT2_HEAL3),
    S_RECT2_HEAL3 => (RECT, 18, 10, Null, S_RECT2_RUN1),
    S_VILE_STND => (VILE, 0, 10, Look, S_VILE_STND2),
    S_VILE_STND2 => (VILE, 1, 10, Look, S_VILE_STND),
    S_VILE_RUN1 => (VILE, 0, 2, VileChase, S_VILE_RUN2),
    S_VILE_RUN2 => (VILE, 0, 2, VileChase, S_VILE_RUN3),
    S_VILE_RUN3 => (VILE, 1, 2, VileChase, S_VILE_RUN4),
    S_VILE_RUN4 => (VILE, 1, 2, VileChase, S_VILE_RUN5),
    S_VILE_RUN5 => (VILE, 2, 2, VileChase, S_VILE_RUN6),
    S_VILE_RUN6 => (VILE, 2, 2, VileChase, S_VILE_RUN7),
    S_VILE_RUN7 => (VILE, 3, 2, VileChase, S_VILE_RUN8),
    S_VILE_RUN8 => (VILE, 3, 2, VileChase, S_VILE_RUN9),
    S_VILE_RUN9 => (VILE, 4, 2, VileChase, S_VILE_RUN10),
    S_VILE_RUN10 => (VILE, 4, 2, VileChase, S_VILE_RUN11),
    S_VILE_RUN11 => (VILE, 5, 2, VileChase, S_VILE_RUN12),
    S_VILE_RUN12 => (VILE, 5, 2, VileChase, S_VILE_RUN1),
    S_VILE_ATK1 => (VILE, 6, 0, VileStart, S_VILE_ATK2),
    S_VILE_ATK2 => (VILE, 6, 10, FaceTarget, S_VILE_ATK3),
    S_VILE_ATK3 => (VILE, 7, 8, VileTarget, S_VILE_ATK4),
    S_VILE_ATK4 => (VILE, 8, 8, FaceTarget, S_VILE_ATK5),
    S_VILE_ATK5 => (VILE, 9, 8, FaceTarget, S_VILE_ATK6),
    S_VILE_ATK6 => (VILE, 10, 8, FaceTarget, S_VILE_ATK7),
    S_VILE_ATK7 => (VILE, 11, 8, FaceTarget, S_VILE_ATK8),
    S_VILE_ATK8 => (VILE, 12, 8, FaceTarget, S_VILE_ATK9),
    S_VILE_ATK9 => (VILE, 13, 8, FaceTarget, S_VILE_ATK10),
    S_VILE_ATK10 => (VILE, 14, 8, VileAttack, S_VILE_ATK11),
    S_VILE_ATK11 => (VILE, 15, 20, Null, S_VILE_RUN1),
    S_VILE_HEAL1 => (VILE, 16, 10, Null, S_VILE_HEAL2),
    S_VILE_HEAL2 => (VILE, 17, 10, Null, S_VILE_HEAL3),
    S_VILE_HEAL3 => (VILE, 18, 10, Null, S_VILE_RUN1),
    S_VILE_PAIN1 => (VILE, 19, 5, Null, S_VILE_PAIN2),
    S_VILE_PAIN2 => (VILE, 19, 5, Pain, S_VILE_RUN1),
    S_VILE_DIE1 => (VILE, 20, 7, Null, S_VILE_DIE2),
    S_VILE_DIE2 => (VILE, 21, 7, Scream, S_VILE_DIE3),
    S_VILE_DIE3 => (VILE, 22, 7, Fall, S_VILE_DIE4),
    S_VILE_DIE4 => (VILE, 23, 7, Null, S_VILE_DIE5),
    S_VILE_DIE5 => (VILE, 24, 7, Null, S_VILE_DIE6),
    S_VILE_DIE6 => (VILE, 25, 7, OnDeathTrigger, S_VILE_DIE7),
    S_VILE_DIE7 => (VILE, 26, -1, Null, S_NULL),
    S_FIRE1 => (FIRE, 0, 2, StartFire, S_FIRE2),
    S_FIRE2 => (FIRE, 1, 2, Fire, S_FIRE3),
    S_FIRE3 => (FIRE, 0, 2, Fire, S_FIRE4),
    S_FIRE4 => (FIRE, 1, 2, Fire, S_FIRE5),
    S_FIRE5 => (FIRE, 2, 2, FireCrackle, S_FIRE6),
    S_FIRE6 => (FIRE, 1, 2, Fire, S_FIRE7),
    S_FIRE7 => (FIRE, 2, 2, Fire, S_FIRE8),
    S_FIRE8 => (FIRE, 3, 2, Fire, S_FIRE9),
    S_FIRE9 => (FIRE, 2, 2, Fire, S_FIRE10),
    S_FIRE10 => (FIRE, 3, 2, Fire, S_FIRE11),
    S_FIRE11 => (FIRE, 4, 2, Fire, S_FIRE12),
    S_FIRE12 => (FIRE, 3, 2, Fire, S_FIRE13),
    S_FIRE13 => (FIRE, 4, 2, FireCrackle, S_FIRE14),
    S_FIRE14 => (FIRE, 5, 2, Fire, S_FIRE15),
    S_FIRE15 => (FIRE, 4, 2, Fire, S_FIRE16),
    S_FIRE16 => (FIRE, 5, 2, Fire, S_NULL),
    S_SKEL_STND => (SKEL, 0, 10, Look, S_SKEL_STND2),
    S_SKEL_STND2 => (SKEL, 1, 10, Look, S_SKEL_STND),
    S_SKEL_RUN1 => (SKEL, 0, 2, Chase, S_SKEL_RUN2),
    S_SKEL_RUN2 => (SKEL, 0, 2, Chase, S_SKEL_RUN3),
    S_SKEL_RUN3 => (SKEL, 1, 2, Chase, S_SKEL_RUN4),
    S_SKEL_RUN4 => (SKEL, 1, 2, Chase, S_SKEL_RUN5),
    S_SKEL_RUN5 => (SKEL, 2, 2, Chase, S_SKEL_RUN6),
    S_SKEL_RUN6 => (SKEL, 2, 2, Chase, S_SKEL_RUN7),
    S_SKEL_RUN7 => (SKEL, 3, 2, Chase, S_SKEL_RUN8),
    S_SKEL_RUN8 => (SKEL, 3, 2, Chase, S_SKEL_RUN1),
    S_SKEL_PAIN => (SKEL, 6, 3, Null, S_SKEL_PAIN2),
    S_SKEL_PAIN2 => (SKEL, 6, 3, Pain, S_SKEL_RUN1),
    S_SKEL_DIE1 => (SKEL, 7, 5, Null, S_SKEL_DIE2),
    S_SKEL_DIE2 => (SKEL, 8, 5, Scream, S_SKEL_DIE3),
    S_SKEL_DIE3 => (SKEL, 9, 5, Fall, S_SKEL_DIE4),
    S_SKEL_DIE4 => (SKEL, 10, 5, OnDeathTrigger, S_SKEL_DIE5),
    S_SKEL_DIE5 => (SKEL, 11, 5, Null, S_SKEL_DIE6),
    S_SKEL_DIE6 => (SKEL, 12, -1, Null, S_NULL),
    S_SKEL_RAISE1 => (SKEL, 11, 5, Null, S_SKEL_RAISE2),
    S_SKEL_RAISE2 => (SKEL, 10, 5, Null, S_SKEL_RAISE3),
    S_SKEL_RAISE3 => (SKEL, 9, 5, Null, S_SKEL_RAISE4),
    S_SKEL_RAISE4 => (SKEL, 8, 5, Null, S_SKEL_RAISE5),
    S_SKEL_RAISE5 => (SKEL, 7, 5, Null, S_SKEL_RUN1),
    S_SKEL_FIST1 => (SKEL, 6, 0, FaceTarget, S_SKEL_FIST2),
    S_SKEL_FIST2 => (SKEL, 6, 6, SkelWhoosh, S_SKEL_FIST3),
    S_SKEL_FIST3 => (SKEL, 7, 6, FaceTarget, S_SKEL_FIST4),
    S_SKEL_FIST4 => (SKEL, 8, 6, SkelFist, S_SKEL_RUN1),
    S_SKEL_MISS1 => (SKEL, 9, 0, FaceTarget, S_SKEL_MISS2),
    S_SKEL_MISS2 => (SKEL, 9, 10, FaceTarget, S_SKEL_MISS3),
    S_SKEL_MISS3 => (SKEL, 10, 10, SkelAttack, S_SKEL_MISS4),
    S_SKEL_MISS4 => (SKEL, 10, 10, FaceTarget, S_SKEL_RUN1),
    S_SKEN_MISS1 => (SKEN, 9, 0, FaceTarget, S_SKEN_MISS2),
    S_SKEN_MISS2 => (SKEN, 9, 10, FaceTarget, S_SKEN_MISS3),
    S_SKEN_MISS3 => (SKEN, 10, 10, RevenantNightmareAttack, S_SKEN_MISS4),
    S_SKEN_MISS4 => (SKEN, 10, 10, FaceTarget, S_SKEL_RUN1),
    S_BRAIN => (BBRN, 0, -1, Null, S_NULL),
    S_BRAIN_PAIN => (BBRN, 1, 36, BrainPain, S_BRAIN),
    S_BRAIN_DIE1 => (BBRN, 0, 100, BrainScream, S_BRAIN_DIE2),
    S_BRAIN_DIE2 => (BBRN, 0, 10, Null, S_BRAIN_DIE3),
    S_BRAIN_DIE3 => (BBRN, 0, 10, Null, S_BRAIN_DIE4),
    S_BRAIN_DIE4 => (BBRN, 0, -1, BrainDie, S_NULL),
    S_BRAINEYE => (SPOT, 0, 10, Look, S_BRAINEYE),
    S_BRAINEYESEE => (SPOT, 0, 181, BrainAwake, S_BRAINEYE1),
    S_BRAINEYE1 => (SPOT, 0, 150, BrainSpit, S_BRAINEYE1),
    S_SPAWN1 => (BOSF, 0, 3, SpawnSound, S_SPAWN2),
    S_SPAWN2 => (BOSF, 1, 3, SpawnFly, S_SPAWN3),
    S_SPAWN3 => (BOSF, 2, 3, SpawnFly, S_SPAWN4),
    S_SPAWN4 => (BOSF, 3, 3, SpawnFly, S_SPAWN1),
    S_SPAWN5 => (BOSF, 0, 3, SpawnFly, S_SPAWN2),
    S_SPAWNFIRE1 => (SPFR, 0, 4, Null, S_SPAWNFIRE2),
    S_SPAWNFIRE2 => (SPFR, 1, 4, Null, S_SPAWNFIRE3),
    S_SPAWNFIRE3 => (SPFR, 2, 4, Null, S_SPAWNFIRE4),
    S_SPAWNFIRE4 => (SPFR, 3, 4, Null, S_SPAWNFIRE5),
    S_SPAWNFIRE5 => (SPFR, 4, 4, Null, S_SPAWNFIRE6),
    S_SPAWNFIRE6 => (SPFR, 5, 4, Null, S_SPAWNFIRE7),
    S_SPAWNFIRE7 => (SPFR, 6, 4, Null, S_SPAWNFIRE8),
    S_SPAWNFIRE8 => (SPFR, 7, 4, Null, S_NULL),
    S_CAMERA => (SPOT, 0, 4, TargetCamera, S_CAMERA),
    S_CAMERA_TRACK => (SPOT, 0, 1, FaceTarget, S_CAMERA_TRACK),
    S_BAR1 => (BAR1, 0, -1, Null, S_NULL),
    S_BEXP1 => (BAR1, 1, 5, Null, S_BEXP2),
    S_BEXP2 => (BAR1, 2, 5, Scream, S_BEXP3),
    S_BEXP3 => (BAR1, 3, 5, Null, S_BEXP4),
    S_BEXP4 => (BAR1, 4, 10, BarrelExplode, S_BEXP5),
    S_BEXP5 => (BAR1, 5, 10, Null, S_NULL),
    S_ROCKET1 => (MISL, 0, 3, SpawnSmoke, S_ROCKET1),
    S_ROCKET_DIE1 => (MISL, 1, 4, Explode, S_ROCKET_DIE2),
    S_ROCKET_DIE2 => (MISL, 2, 4, MissileSetAlpha, S_ROCKET_DIE3),
    S_ROCKET_DIE3 => (MISL, 3, 4, MissileSetAlpha, S_NULL),
    S_GRENADE1 => (GREN, 0, 3, SpawnSmoke, S_GRENADE1),
    S_GRENADE_DIE1 => (GREN, 1, 4, Explode, S_GRENADE_DIE2),
    S_GRENADE_DIE2 => (GREN, 2, 4, MissileSetAlpha, S_GRENADE_DIE3),
    S_GRENADE_DIE3 => (GREN, 3, 4, MissileSetAlpha, S_NULL),
    S_PLASMA1 => (PLSS, 0, 2, Null, S_PLASMA2),
    S_PLASMA2 => (PLSS, 1, 2, Null, S_PLASMA1),
    S_PLASMA_DIE1 => (PLSS, 2, 4, FadeAlpha, S_PLASMA_DIE2),
    S_PLASMA_DIE2 => (PLSS, 3, 4, FadeAlpha, S_PLASMA_DIE3),
    S_PLASMA_DIE3 => (PLSS, 4, 4, FadeAlpha, S_NULL),
    S_BFGSHOT1 => (BFS1, 0, 2, Null, S_BFGSHOT2),
    S_BFGSHOT2 => (BFS1, 1, 2, Null, S_BFGSHOT1),
    S_BFGSHOT_DIE1 => (BFS1, 2, 8, FadeAlpha, S_BFGSHOT_DIE2),
    S_BFGSHOT_DIE2 => (BFS1, 3, 8, FadeAlpha, S_BFGSHOT_DIE3),
    S_BFGSHOT_DIE3 => (BFS1, 4, 8, FadeAlpha, S_BFGSHOT_DIE4),
    S_BFGSHOT_DIE4 => (BFS1, 5, 8, FadeAlpha, S_NULL),
    S_TBALL1 => (BAL1, 0, 2, Null, S_TBALL2),
    S_TBALL2 => (BAL1, 1, 2, Null, S_TBALL1),
    S_TBALL_DIE1 => (BAL1, 2, 4, Null, S_TBALL_DIE2),
    S_TBALL_DIE2 => (BAL1, 3, 4, FadeAlpha, S_TBALL_DIE3),
    S_TBALL_DIE3 => (BAL1, 4, 4, FadeAlpha, S_NULL),
    S_RBALL1 => (BAL2, 0, 2, Null, S_RBALL2),
    S_RBALL2 => (BAL2, 1, 2, Null, S_RBALL1),
    S_RBALL_DIE1 => (BAL2, 2, 4, Null, S_RBALL_DIE2),
    S_RBALL_DIE2 => (BAL2, 3, 4, FadeAlpha, S_RBALL_DIE3),
    S_RBALL_DIE3 => (BAL2, 4, 4, FadeAlpha, S_NULL),
    S_BRBALL1 => (BAL7, 0, 2, Null, S_BRBALL2),
    S_BRBALL2 => (BAL7, 1, 2, Null, S_BRBALL1),
    S_BRBALL_DIE1 => (BAL7, 2, 4, Null, S_BRBALL_DIE2),
    S_BRBALL_DIE2 => (BAL7, 3, 4, FadeAlpha, S_BRBALL_DIE3),
    S_BRBALL_DIE3 => (BAL7, 4, 4, FadeAlpha, S_NULL),
    S_FATSHOT1 => (MANF, 0, 2, Null, S_FATSHOT2),
    S_FATSHOT2 => (MANF, 1, 2, Null, S_FATSHOT1),
    S_FATSHOT_DIE1 => (MANF, 2, 4, Explode, S_FATSHOT_DIE2),
    S_FATSHOT_DIE2 => (MANF, 3, 4, MissileSetAlpha, S_FATSHOT_DIE3),
    S_FATSHOT_DIE3 => (MANF, 4, 4, MissileSetAlpha, S_NULL),
    S_ARACH_PLAZ1 => (APLS, 0, 5, Null, S_ARACH_PLAZ2),
    S_ARACH_PLAZ2 => (APLS, 1, 5, Null, S_ARACH_PLAZ1),
    S_ARACH_PLAZ_DIE1 => (APLS, 2, 4, Null, S_ARACH_PLAZ_DIE2),
    S_ARACH_PLAZ_DIE2 => (APLS, 3, 4, FadeAlpha, S_ARACH_PLAZ_DIE3),
    S_ARACH_PLAZ_DIE3 => (APLS, 4, 4, FadeAlpha, S_NULL),
    S_TRACER1 => (FATB, 0, 2, Tracer, S_TRACER2),
    S_TRACER2 => (FATB, 1, 2, Tracer, S_TRACER1),
    S_TRACER_DIE1 => (FATB, 2, 4, Explode, S_TRACER_DIE2),
    S_TRACER_DIE2 => (FATB, 3, 4, MissileSetAlpha, S_TRACER_DIE3),
    S_TRACER_DIE3 => (FATB, 4, 4, MissileSetAlpha, S_NULL),
    S_RECTMISSILE1 => (RECM, 0, 2, RectTracer, S_RECTMISSILE2),
    S_RECTMISSILE2 => (RECM, 1, 2, RectTracer, S_RECTMISSILE1),
    S_RECTMISSILE_DIE1 => (RECM, 2, 4, Explode, S_RECTMISSILE_DIE2),
    S_RECTMISSILE_DIE2 => (RECM, 3, 4, MissileSetAlpha, S_RECTMISSILE_DIE3),
    S_RECTMISSILE_DIE3 => (RECM, 4, 4, MissileSetAlpha, S_NULL),
    S_GROUNDFIRE1 => (RFIR, 0, 2, MoveGroundFire, S_GROUNDFIRE2),
    S_GROUNDFIRE2 => (RFIR, 1, 2, MoveGroundFire, S_GROUNDFIRE1),
    S_GROUNDFIRE_DIE1 => (RFIR, 2, 4, Null, S_GROUNDFIRE_DIE2),
    S_GROUNDFIRE_DIE2 => (RFIR, 3, 4, FadeAlpha, S_NULL),
    S_BR64FIRE1 => (BFIR, 0, 2, MoveGroundFire, S_BR64FIRE2),
    S_BR64FIRE2 => (BFIR, 1, 2, MoveGroundFire, S_BR64FIRE1),
    S_BR64FIRE_DIE1 => (BFIR, 2, 4, BruiserDemonExplodeFire, S_BR64FIRE_DIE2),
    S_BR64FIRE_DIE2 => (BFIR, 3, 4, FadeAlpha, S_NULL),
    S_DART1 => (DART, 0, 2, Null, S_DART1),
    S_DART_DIE1 => (DART, 1, 4, Null, S_NULL),
    S_NAIL1 => (NAIL, 0, 2, Null, S_NAIL1),
    S_NAIL_DIE1 => (NAIL, 1, 4, Null, S_NULL),
    S_FLAME1 => (FLAM, 0, 2, Null, S_FLAME2),
    S_FLAME2 => (FLAM, 1, 2, Null, S_FLAME3),
    S_FLAME3 => (FLAM, 2, 2, Null, S_FLAME1),
    S_FLAME_DIE1 => (FLAM, 3, 4, FadeAlpha, S_FLAME_DIE2),
    S_FLAME_DIE2 => (FLAM, 4, 4, FadeAlpha, S_NULL),
    S_STLKSHOT1 => (STLS, 0, 2, Null, S_STLKSHOT2),
    S_STLKSHOT2 => (STLS, 1, 2, Null, S_STLKSHOT1),
    S_STLKSHOT_DIE1 => (STLS, 2, 4, Null, S_STLKSHOT_DIE2),
    S_STLKSHOT_DIE2 => (STLS, 3, 4, FadeAlpha, S_STLKSHOT_DIE3),
    S_STLKSHOT_DIE3 => (STLS, 4, 4, FadeAlpha, S_NULL),
    S_PUFF1 => (PUFF, 0, 4, Null, S_PUFF2),
    S_PUFF2 => (PUFF, 1, 4, Null, S_PUFF3),
    S_PUFF3 => (PUFF, 2, 4, Null, S_PUFF4),
    S_PUFF4 => (PUFF, 3, 4, Null, S_NULL),
    S_BLOOD1 => (BLUD, 0, 8, Null, S_BLOOD2),
    S_BLOOD2 => (BLUD, 1, 8, Null, S_BLOOD3),
    S_BLOOD3 => (BLUD, 2, 8, Null, S_NULL),
    S_GREENBLOOD1 => (BLDG, 0, 8, Null, S_GREENBLOOD2),
    S_GREENBLOOD2 => (BLDG, 1, 8, Null, S_GREENBLOOD3),
    S_GREENBLOOD3 => (BLDG, 2, 8, Null, S_NULL),
    S_BLUEBLOOD1 => (BLDB, 0, 8, Null, S_BLUEBLOOD2),
    S_BLUEBLOOD2 => (BLDB, 1, 8, Null, S_BLUEBLOOD3),
    S_BLUEBLOOD3 => (BLDB, 2, 8, Null, S_NULL),
    S_PURPLEBLOOD1 => (BLDP, 0, 8, Null, S_PURPLEBLOOD2),
    S_PURPLEBLOOD2 => (BLDP, 1, 8, Null, S_PURPLEBLOOD3),
    S_PURPLEBLOOD3 => (BLDP, 2, 8, Null, S_NULL),
    S_SMOKE_GRAY1 => (SMOK, 0, 4, Null, S_SMOKE_GRAY2),
    S_SMOKE_GRAY2 => (SMOK, 1, 4, Null, S_SMOKE_GRAY3),
    S_SMOKE_GRAY3 => (SMOK, 2, 4, Null, S_SMOKE_GRAY4),
    S_SMOKE_GRAY4 => (SMOK, 3, 4, Null, S_NULL),
    S_SMOKE_RED1 => (SMKR, 0, 4, Null, S_SMOKE_RED2),
    S_SMOKE_RED2 => (SMKR, 1, 4, Null, S_SMOKE_RED3),
    S_SMOKE_RED3 => (SMKR, 2, 4, Null, S_SMOKE_RED4),
    S_SMOKE_RED4 => (SMKR, 3, 4, Null, S_NULL),
    S_EXPLOSION1 => (EXPL, 0, 3, Null, S_EXPLOSION2),
    S_EXPLOSION2 => (EXPL, 1, 3, Null, S_EXPLOSION3),
    S_EXPLOSION3 => (EXPL, 2, 3, Null, S_EXPLOSION4),
    S_EXPLOSION4 => (EXPL, 3, 3, Null, S_EXPLOSION5),
    S_EXPLOSION5 => (EXPL, 4, 3, Null, S_NULL),
    S_BIGEXPL1 => (EXP2, 0, 4, Null, S_BIGEXPL2),
    S_BIGEXPL2 => (EXP2, 1, 4, Null, S_BIGEXPL3),
    S_BIGEXPL3 => (EXP2, 2, 4, FadeAlpha, S_BIGEXPL4),
    S_BIGEXPL4 => (EXP2, 3, 4, FadeAlpha, S_BIGEXPL5),
    S_BIGEXPL5 => (EXP2, 4, 4, FadeAlpha, S_NULL),
    S_PROPFIRE1 => (PFIR, 0, 3, Null, S_PROPFIRE2),
    S_PROPFIRE2 => (PFIR, 1, 3, Null, S_PROPFIRE3),
    S_PROPFIRE3 => (PFIR, 2, 3, Null, S_PROPFIRE1),
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_state_is_first() {
        assert_eq!(StateNum::S_NULL.index(), 0);
        assert!(StateNum::default().is_null());
    }

    #[test]
    fn test_successors_are_in_range() {
        for (i, st) in STATES.iter().enumerate() {
            assert!(st.next.index() < NUMSTATES, "state {} points past the table", i);
        }
    }

    #[test]
    fn test_named_states_resolve() {
        let st = &STATES[StateNum::S_PUFF3.index()];
        assert_eq!(st.sprite, Sprite::PUFF);
        assert_eq!(st.next, StateNum::S_PUFF4);
        assert_eq!(STATES[StateNum::S_VILE_HEAL1.index()].next, StateNum::S_VILE_HEAL2);
    }

    #[test]
    fn test_death_sequences_terminate() {
        // Every death chain must reach S_NULL or a frame held forever.
        for start in [StateNum::S_POSS_DIE1, StateNum::S_SKUL_DIE1, StateNum::S_ROCKET_DIE1, StateNum::S_BLOOD1] {
            let mut s = start;
            let mut steps = 0;
            while !s.is_null() && STATES[s.index()].tics != -1 {
                s = STATES[s.index()].next;
                steps += 1;
                assert!(steps < 64, "chain from {:?} loops", start);
            }
        }
    }
}
