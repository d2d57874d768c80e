// info.rs — per-type actor definitions

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

use d64_common::fixed::{Fixed, FRACUNIT};

use crate::g_local::MobjFlags;
use crate::sounds::Sfx;
use crate::states::StateNum;

type S = StateNum;

/// Static stats shared by every actor of one type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobjInfo {
    /// Editor number used by map placement, -1 when not placeable.
    pub doomednum: i32,
    pub spawnstate: StateNum,
    pub spawnhealth: i32,
    pub seestate: StateNum,
    pub seesound: Sfx,
    pub reactiontime: i32,
    pub attacksound: Sfx,
    pub painstate: StateNum,
    pub painchance: i32,
    pub painsound: Sfx,
    pub meleestate: StateNum,
    pub missilestate: StateNum,
    pub deathstate: StateNum,
    pub xdeathstate: StateNum,
    pub deathsound: Sfx,
    /// Walking step in map units for monsters, fixed-point velocity for missiles.
    pub speed: i32,
    pub radius: Fixed,
    pub height: Fixed,
    pub mass: i32,
    pub damage: i32,
    pub activesound: Sfx,
    pub flags: MobjFlags,
    pub alpha: i32,
    pub raisestate: StateNum,
}

impl MobjInfo {
    pub const DEFAULT: MobjInfo = MobjInfo {
        doomednum: -1,
        spawnstate: S::S_NULL,
        spawnhealth: 1000,
        seestate: S::S_NULL,
        seesound: Sfx::None,
        reactiontime: 8,
        attacksound: Sfx::None,
        painstate: S::S_NULL,
        painchance: 0,
        painsound: Sfx::None,
        meleestate: S::S_NULL,
        missilestate: S::S_NULL,
        deathstate: S::S_NULL,
        xdeathstate: S::S_NULL,
        deathsound: Sfx::None,
        speed: 0,
        radius: 20 * FRACUNIT,
        height: 16 * FRACUNIT,
        mass: 100,
        damage: 0,
        activesound: Sfx::None,
        flags: MobjFlags::empty(),
        alpha: 255,
        raisestate: S::S_NULL,
    };
}

// ============================================================
// Flag sets
// ============================================================

const MONSTER: MobjFlags = MobjFlags::SOLID
    .union(MobjFlags::SHOOTABLE)
    .union(MobjFlags::GRAVITY)
    .union(MobjFlags::COUNTKILL);
const FLYER: MobjFlags = MobjFlags::SOLID
    .union(MobjFlags::SHOOTABLE)
    .union(MobjFlags::FLOAT)
    .union(MobjFlags::COUNTKILL);
const PROJECTILE: MobjFlags = MobjFlags::NOBLOCKMAP
    .union(MobjFlags::MISSILE)
    .union(MobjFlags::DROPOFF);
const MARKER: MobjFlags = MobjFlags::NOBLOCKMAP.union(MobjFlags::NOSECTOR);
const PICKUP: MobjFlags = MobjFlags::SPECIAL;
const COUNTED_PICKUP: MobjFlags = MobjFlags::SPECIAL.union(MobjFlags::COUNTITEM);

// ============================================================
// Family templates
// ============================================================

const ZOMBIE: MobjInfo = MobjInfo {
    spawnstate: S::S_POSS_STND,
    spawnhealth: 20,
    seestate: S::S_POSS_RUN1,
    seesound: Sfx::Possit1,
    attacksound: Sfx::Pistol,
    painstate: S::S_POSS_PAIN,
    painchance: 200,
    painsound: Sfx::Dbpain1,
    missilestate: S::S_POSS_ATK1,
    deathstate: S::S_POSS_DIE1,
    xdeathstate: S::S_POSS_XDIE1,
    deathsound: Sfx::Posdie1,
    speed: 8,
    radius: 32 * FRACUNIT,
    height: 87 * FRACUNIT,
    activesound: Sfx::Posact,
    flags: MONSTER,
    raisestate: S::S_POSS_RAISE1,
    ..MobjInfo::DEFAULT
};

const DEMON: MobjInfo = MobjInfo {
    spawnstate: S::S_SARG_STND,
    spawnhealth: 150,
    seestate: S::S_SARG_RUN1,
    seesound: Sfx::Sargsit,
    attacksound: Sfx::Sargatk,
    painstate: S::S_SARG_PAIN,
    painchance: 180,
    painsound: Sfx::Dbpain2,
    meleestate: S::S_SARG_ATK1,
    deathstate: S::S_SARG_DIE1,
    deathsound: Sfx::Sargdie,
    speed: 10,
    radius: 44 * FRACUNIT,
    height: 100 * FRACUNIT,
    mass: 400,
    activesound: Sfx::Dbact,
    flags: MONSTER,
    raisestate: S::S_SARG_RAISE1,
    ..MobjInfo::DEFAULT
};

const IMP: MobjInfo = MobjInfo {
    spawnstate: S::S_TROO_STND,
    spawnhealth: 60,
    seestate: S::S_TROO_RUN1,
    seesound: Sfx::Impsit1,
    painstate: S::S_TROO_PAIN,
    painchance: 200,
    painsound: Sfx::Dbpain2,
    meleestate: S::S_TROO_MELEE1,
    missilestate: S::S_TROO_ATK1,
    deathstate: S::S_TROO_DIE1,
    xdeathstate: S::S_TROO_XDIE1,
    deathsound: Sfx::Impdth1,
    speed: 8,
    radius: 42 * FRACUNIT,
    height: 94 * FRACUNIT,
    activesound: Sfx::Impact,
    flags: MONSTER,
    raisestate: S::S_TROO_RAISE1,
    ..MobjInfo::DEFAULT
};

const CACO: MobjInfo = MobjInfo {
    spawnstate: S::S_HEAD_STND,
    spawnhealth: 400,
    seestate: S::S_HEAD_RUN1,
    seesound: Sfx::Headsit,
    painstate: S::S_HEAD_PAIN1,
    painchance: 128,
    painsound: Sfx::Dbpain2,
    meleestate: S::S_HEAD_ATK1,
    missilestate: S::S_HEAD_ATK1,
    deathstate: S::S_HEAD_DIE1,
    deathsound: Sfx::Headdie,
    speed: 8,
    radius: 55 * FRACUNIT,
    height: 90 * FRACUNIT,
    mass: 400,
    activesound: Sfx::Dbact,
    flags: FLYER,
    raisestate: S::S_HEAD_RAISE1,
    ..MobjInfo::DEFAULT
};

const BRUISER: MobjInfo = MobjInfo {
    spawnstate: S::S_BOSS_STND,
    spawnhealth: 1000,
    seestate: S::S_BOSS_RUN1,
    seesound: Sfx::Bos1sit,
    painstate: S::S_BOSS_PAIN,
    painchance: 50,
    painsound: Sfx::Dbpain2,
    meleestate: S::S_BOSS_ATK1,
    missilestate: S::S_BOSS_ATK1,
    deathstate: S::S_BOSS_DIE1,
    deathsound: Sfx::Bos1die,
    speed: 8,
    radius: 24 * FRACUNIT,
    height: 100 * FRACUNIT,
    mass: 1000,
    activesound: Sfx::Dbact,
    flags: MONSTER,
    raisestate: S::S_BOSS_RAISE1,
    ..MobjInfo::DEFAULT
};

const SKULL: MobjInfo = MobjInfo {
    spawnstate: S::S_SKUL_STND,
    spawnhealth: 60,
    seestate: S::S_SKUL_RUN1,
    attacksound: Sfx::Skullatk,
    painstate: S::S_SKUL_PAIN1,
    painchance: 256,
    painsound: Sfx::Dbpain2,
    missilestate: S::S_SKUL_ATK1,
    deathstate: S::S_SKUL_DIE1,
    deathsound: Sfx::Implod,
    speed: 8,
    radius: 28 * FRACUNIT,
    height: 64 * FRACUNIT,
    mass: 50,
    damage: 3,
    activesound: Sfx::Dbact,
    flags: FLYER,
    ..MobjInfo::DEFAULT
};

const PAIN: MobjInfo = MobjInfo {
    spawnstate: S::S_PAIN_STND,
    spawnhealth: 400,
    seestate: S::S_PAIN_RUN1,
    seesound: Sfx::Pesit,
    painstate: S::S_PAIN_PAIN1,
    painchance: 128,
    painsound: Sfx::Pepain,
    missilestate: S::S_PAIN_ATK1,
    deathstate: S::S_PAIN_DIE1,
    deathsound: Sfx::Pedie,
    speed: 8,
    radius: 60 * FRACUNIT,
    height: 112 * FRACUNIT,
    mass: 400,
    activesound: Sfx::Peact,
    flags: FLYER,
    raisestate: S::S_PAIN_RAISE1,
    ..MobjInfo::DEFAULT
};

const FATSO: MobjInfo = MobjInfo {
    spawnstate: S::S_FATT_STND,
    spawnhealth: 600,
    seestate: S::S_FATT_RUN1,
    seesound: Sfx::Fattsit,
    painstate: S::S_FATT_PAIN,
    painchance: 80,
    painsound: Sfx::Dbpain2,
    missilestate: S::S_FATT_ATK1,
    deathstate: S::S_FATT_DIE1,
    deathsound: Sfx::Fattdie,
    speed: 8,
    radius: 60 * FRACUNIT,
    height: 108 * FRACUNIT,
    mass: 1000,
    activesound: Sfx::Manact,
    flags: MONSTER,
    raisestate: S::S_FATT_RAISE1,
    ..MobjInfo::DEFAULT
};

const ARACHNOTRON: MobjInfo = MobjInfo {
    spawnstate: S::S_BSPI_STND,
    spawnhealth: 500,
    seestate: S::S_BSPI_SIGHT,
    seesound: Sfx::Bspisit,
    painstate: S::S_BSPI_PAIN1,
    painchance: 128,
    painsound: Sfx::Bsppain,
    missilestate: S::S_BSPI_ATK1,
    deathstate: S::S_BSPI_DIE1,
    deathsound: Sfx::Bspidie,
    speed: 12,
    radius: 64 * FRACUNIT,
    height: 80 * FRACUNIT,
    mass: 600,
    activesound: Sfx::Dbact,
    flags: MONSTER,
    raisestate: S::S_BSPI_RAISE1,
    ..MobjInfo::DEFAULT
};

const CYBERDEMON: MobjInfo = MobjInfo {
    spawnstate: S::S_CYBR_STND,
    spawnhealth: 4000,
    seestate: S::S_CYBR_RUN1,
    seesound: Sfx::Cybsit,
    painstate: S::S_CYBR_PAIN,
    painchance: 20,
    painsound: Sfx::Cybpain,
    missilestate: S::S_CYBR_ATK1,
    deathstate: S::S_CYBR_DIE1,
    deathsound: Sfx::Cybdth,
    speed: 16,
    radius: 70 * FRACUNIT,
    height: 170 * FRACUNIT,
    mass: 1000,
    activesound: Sfx::Cybact,
    flags: MONSTER,
    ..MobjInfo::DEFAULT
};

const MOTHER_DEMON: MobjInfo = MobjInfo {
    spawnstate: S::S_RECT_STND,
    spawnhealth: 5000,
    seestate: S::S_RECT_RUN1,
    seesound: Sfx::Rectsit,
    attacksound: Sfx::Rectatk,
    painstate: S::S_RECT_PAIN1,
    painchance: 50,
    painsound: Sfx::Rectpain,
    meleestate: S::S_RECT_MELEE1,
    missilestate: S::S_RECT_ATK1,
    deathstate: S::S_RECT_DIE1,
    deathsound: Sfx::Rectdie,
    speed: 30,
    radius: 128 * FRACUNIT,
    height: 100 * FRACUNIT,
    mass: 1000,
    activesound: Sfx::Rectact,
    flags: MONSTER,
    ..MobjInfo::DEFAULT
};

const REVENANT: MobjInfo = MobjInfo {
    spawnstate: S::S_SKEL_STND,
    spawnhealth: 300,
    seestate: S::S_SKEL_RUN1,
    seesound: Sfx::Skelsit,
    painstate: S::S_SKEL_PAIN,
    painchance: 100,
    painsound: Sfx::Skepain,
    meleestate: S::S_SKEL_FIST1,
    missilestate: S::S_SKEL_MISS1,
    deathstate: S::S_SKEL_DIE1,
    deathsound: Sfx::Skeldth,
    speed: 10,
    radius: 20 * FRACUNIT,
    height: 100 * FRACUNIT,
    mass: 500,
    activesound: Sfx::Skelact,
    flags: MONSTER,
    raisestate: S::S_SKEL_RAISE1,
    ..MobjInfo::DEFAULT
};

const MISSILE: MobjInfo = MobjInfo {
    spawnhealth: 1000,
    radius: 8 * FRACUNIT,
    height: 8 * FRACUNIT,
    mass: 100,
    flags: PROJECTILE,
    ..MobjInfo::DEFAULT
};

const ROCKET: MobjInfo = MobjInfo {
    spawnstate: S::S_ROCKET1,
    seesound: Sfx::Missile,
    deathstate: S::S_ROCKET_DIE1,
    deathsound: Sfx::Explode,
    speed: 20 * FRACUNIT,
    radius: 11 * FRACUNIT,
    damage: 20,
    ..MISSILE
};

const PLASMA: MobjInfo = MobjInfo {
    spawnstate: S::S_PLASMA1,
    seesound: Sfx::Plasma,
    deathstate: S::S_PLASMA_DIE1,
    deathsound: Sfx::Explode,
    speed: 25 * FRACUNIT,
    radius: 13 * FRACUNIT,
    damage: 5,
    alpha: 160,
    ..MISSILE
};

const BFG_SHOT: MobjInfo = MobjInfo {
    spawnstate: S::S_BFGSHOT1,
    seesound: Sfx::Bfg,
    deathstate: S::S_BFGSHOT_DIE1,
    deathsound: Sfx::Bfgexp,
    speed: 25 * FRACUNIT,
    radius: 13 * FRACUNIT,
    damage: 100,
    alpha: 160,
    ..MISSILE
};

const IMP_BALL: MobjInfo = MobjInfo {
    spawnstate: S::S_TBALL1,
    seesound: Sfx::Bdmissile,
    deathstate: S::S_TBALL_DIE1,
    deathsound: Sfx::Implod,
    speed: 10 * FRACUNIT,
    radius: 6 * FRACUNIT,
    damage: 3,
    ..MISSILE
};

const HEAD_BALL: MobjInfo = MobjInfo {
    spawnstate: S::S_RBALL1,
    seesound: Sfx::Bdmissile,
    deathstate: S::S_RBALL_DIE1,
    deathsound: Sfx::Implod,
    speed: 10 * FRACUNIT,
    radius: 6 * FRACUNIT,
    damage: 5,
    ..MISSILE
};

const BARON_BALL: MobjInfo = MobjInfo {
    spawnstate: S::S_BRBALL1,
    seesound: Sfx::Bdmissile,
    deathstate: S::S_BRBALL_DIE1,
    deathsound: Sfx::Implod,
    speed: 15 * FRACUNIT,
    radius: 6 * FRACUNIT,
    damage: 8,
    ..MISSILE
};

const FAT_SHOT: MobjInfo = MobjInfo {
    spawnstate: S::S_FATSHOT1,
    seesound: Sfx::Bdmissile,
    deathstate: S::S_FATSHOT_DIE1,
    deathsound: Sfx::Explode,
    speed: 20 * FRACUNIT,
    radius: 6 * FRACUNIT,
    damage: 8,
    ..MISSILE
};

const ARACH_PLASMA: MobjInfo = MobjInfo {
    spawnstate: S::S_ARACH_PLAZ1,
    seesound: Sfx::Plasma,
    deathstate: S::S_ARACH_PLAZ_DIE1,
    deathsound: Sfx::Implod,
    speed: 25 * FRACUNIT,
    radius: 13 * FRACUNIT,
    damage: 5,
    ..MISSILE
};

const HOMING: MobjInfo = MobjInfo {
    spawnstate: S::S_TRACER1,
    seesound: Sfx::Tracer,
    deathstate: S::S_TRACER_DIE1,
    deathsound: Sfx::Explode,
    speed: 10 * FRACUNIT,
    radius: 11 * FRACUNIT,
    damage: 10,
    ..MISSILE
};

const GROUND_FIRE: MobjInfo = MobjInfo {
    spawnstate: S::S_GROUNDFIRE1,
    seesound: Sfx::Flamst,
    deathstate: S::S_GROUNDFIRE_DIE1,
    deathsound: Sfx::Flame,
    speed: 20 * FRACUNIT,
    radius: 8 * FRACUNIT,
    height: 64 * FRACUNIT,
    damage: 5,
    flags: PROJECTILE.union(MobjFlags::GRAVITY),
    ..MISSILE
};

const STALKER_SHOT: MobjInfo = MobjInfo {
    spawnstate: S::S_STLKSHOT1,
    seesound: Sfx::Bdmissile,
    deathstate: S::S_STLKSHOT_DIE1,
    deathsound: Sfx::Implod,
    speed: 15 * FRACUNIT,
    radius: 6 * FRACUNIT,
    damage: 4,
    ..MISSILE
};

const EFFECT: MobjInfo = MobjInfo {
    flags: MobjFlags::NOBLOCKMAP,
    ..MobjInfo::DEFAULT
};

const BLOOD: MobjInfo = MobjInfo {
    spawnstate: S::S_BLOOD1,
    ..EFFECT
};

const SPOT: MobjInfo = MobjInfo {
    spawnstate: S::S_SPOT,
    flags: MARKER,
    ..MobjInfo::DEFAULT
};

const ITEM: MobjInfo = MobjInfo {
    spawnstate: S::S_ITEM,
    flags: PICKUP,
    ..MobjInfo::DEFAULT
};

const PLAYER: MobjInfo = MobjInfo {
    spawnstate: S::S_PLAY,
    spawnhealth: 100,
    seestate: S::S_PLAY_RUN1,
    reactiontime: 0,
    painstate: S::S_PLAY_PAIN,
    painchance: 255,
    painsound: Sfx::Plrpain,
    missilestate: S::S_PLAY_ATK1,
    deathstate: S::S_PLAY_DIE1,
    xdeathstate: S::S_PLAY_XDIE1,
    deathsound: Sfx::Plrdie,
    radius: 16 * FRACUNIT,
    height: 56 * FRACUNIT,
    flags: MobjFlags::SOLID
        .union(MobjFlags::SHOOTABLE)
        .union(MobjFlags::GRAVITY)
        .union(MobjFlags::DROPOFF)
        .union(MobjFlags::PICKUP),
    ..MobjInfo::DEFAULT
};

// ============================================================
// Type table
// ============================================================

macro_rules! mobj_types {
    ($($name:ident => $info:expr,)*) => {
        /// Every actor type. Players and bots come first so `kind > PlayerBot3`
        /// reads as "not a player body".
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum MobjType {
            $($name),*
        }

        impl MobjType {
            pub const ALL: &'static [MobjType] = &[$(MobjType::$name),*];
        }

        pub static MOBJINFO: &[MobjInfo] = &[$($info),*];
    };
}

mobj_types! {
    Player => PLAYER,
    PlayerBot1 => PLAYER,
    PlayerBot2 => PLAYER,
    PlayerBot3 => PLAYER,

    // zombies
    Possessed1 => MobjInfo { doomednum: 3004, ..ZOMBIE },
    Possessed2 => MobjInfo {
        doomednum: 9,
        spawnhealth: 30,
        seesound: Sfx::Possit2,
        attacksound: Sfx::None,
        painchance: 170,
        missilestate: S::S_SPOS_ATK1,
        deathsound: Sfx::Posdie2,
        ..ZOMBIE
    },
    ChainGuy => MobjInfo {
        doomednum: 65,
        spawnhealth: 70,
        seesound: Sfx::Chnsit,
        attacksound: Sfx::Chnatk,
        painchance: 170,
        painsound: Sfx::Chnpain,
        missilestate: S::S_CPOS_ATK1,
        deathsound: Sfx::Chndie,
        activesound: Sfx::Chnact,
        ..ZOMBIE
    },
    RifleGuy => MobjInfo {
        doomednum: 4001,
        spawnhealth: 40,
        seesound: Sfx::Gruntsit,
        painsound: Sfx::Gruntpain,
        missilestate: S::S_RIFL_ATK1,
        deathsound: Sfx::Gruntdie,
        ..ZOMBIE
    },
    BeheadedRocketeer => MobjInfo {
        doomednum: 4002,
        spawnhealth: 50,
        missilestate: S::S_RIFL_ATK1,
        deathsound: Sfx::Posdie3,
        ..ZOMBIE
    },
    MeleeZombie => MobjInfo {
        doomednum: 4003,
        spawnhealth: 50,
        seesound: Sfx::Possit3,
        attacksound: Sfx::Punch,
        meleestate: S::S_ZMEL_ATK1,
        missilestate: S::S_NULL,
        speed: 12,
        ..ZOMBIE
    },
    SsgZombie => MobjInfo {
        doomednum: 4004,
        spawnhealth: 60,
        seesound: Sfx::Possit2,
        painchance: 150,
        missilestate: S::S_SSGZ_ATK1,
        deathsound: Sfx::Posdie2,
        ..ZOMBIE
    },
    PlasmaZombie => MobjInfo {
        doomednum: 4005,
        spawnhealth: 60,
        seesound: Sfx::Possit3,
        painchance: 150,
        missilestate: S::S_PLZM_ATK1,
        deathsound: Sfx::Posdie3,
        ..ZOMBIE
    },
    BfgCommando => MobjInfo {
        doomednum: 4006,
        spawnhealth: 150,
        seesound: Sfx::Sssit,
        painchance: 100,
        missilestate: S::S_BFGC_ATK1,
        deathsound: Sfx::Ssdth,
        ..ZOMBIE
    },

    // demons
    Demon1 => MobjInfo { doomednum: 3002, ..DEMON },
    Demon2 => MobjInfo {
        doomednum: 58,
        painsound: Sfx::Spcpain,
        activesound: Sfx::Spcact,
        flags: MONSTER.union(MobjFlags::SHADOW),
        alpha: 180,
        ..DEMON
    },
    GreenDemon => MobjInfo { doomednum: 4010, spawnhealth: 200, speed: 12, ..DEMON },
    BloodDemon => MobjInfo { doomednum: 4011, spawnhealth: 300, speed: 12, ..DEMON },
    NightmareSpectre => MobjInfo {
        doomednum: 4012,
        spawnhealth: 300,
        speed: 14,
        flags: MONSTER.union(MobjFlags::SHADOW),
        alpha: 120,
        ..DEMON
    },
    Centaur => MobjInfo {
        doomednum: 4013,
        spawnhealth: 250,
        seesound: Sfx::Centaursit,
        attacksound: Sfx::Centauratk,
        painsound: Sfx::Centaurpain,
        deathsound: Sfx::Centaurdie,
        activesound: Sfx::Centauract,
        ..DEMON
    },
    CentaurLeader => MobjInfo {
        doomednum: 4014,
        spawnhealth: 450,
        seesound: Sfx::Centaursit,
        attacksound: Sfx::Centauratk,
        painsound: Sfx::Centaurpain,
        deathsound: Sfx::Centaurdie,
        activesound: Sfx::Centauract,
        ..DEMON
    },
    Hellhound => MobjInfo {
        doomednum: 4015,
        spawnhealth: 200,
        meleestate: S::S_HHND_ATK1,
        missilestate: S::S_HHND_ATK1,
        speed: 14,
        ..DEMON
    },

    // imps
    Imp1 => MobjInfo { doomednum: 3001, ..IMP },
    Imp2 => MobjInfo {
        doomednum: 3007,
        speed: 16,
        flags: MONSTER.union(MobjFlags::SHADOW),
        alpha: 180,
        ..IMP
    },
    DarkImp => MobjInfo { doomednum: 4020, spawnhealth: 90, seesound: Sfx::Impsit2, deathsound: Sfx::Impdth2, ..IMP },
    NamiDarkImp => MobjInfo { doomednum: 4021, spawnhealth: 120, missilestate: S::S_NULL, speed: 12, ..IMP },
    ImpWarrior => MobjInfo { doomednum: 4022, spawnhealth: 150, missilestate: S::S_NULL, speed: 10, ..IMP },
    HardcoreImp => MobjInfo { doomednum: 4023, spawnhealth: 100, painsound: Sfx::Imppain, ..IMP },

    // cacodemons
    Cacodemon => MobjInfo { doomednum: 3005, ..CACO },
    CacodemonClassic => MobjInfo { doomednum: 4030, missilestate: S::S_NULL, ..CACO },
    NightmareCacodemon => MobjInfo { doomednum: 4031, spawnhealth: 600, alpha: 160, ..CACO },
    Cacolantern => MobjInfo {
        doomednum: 4032,
        spawnhealth: 800,
        painsound: Sfx::Headpain,
        activesound: Sfx::Headact,
        ..CACO
    },
    Abaddon => MobjInfo { doomednum: 4033, spawnhealth: 1200, speed: 12, ..CACO },

    // barons
    Bruiser1 => MobjInfo { doomednum: 3003, ..BRUISER },
    Bruiser2 => MobjInfo {
        doomednum: 69,
        spawnhealth: 500,
        seesound: Sfx::Bos2sit,
        painsound: Sfx::Kntpain,
        deathsound: Sfx::Bos2die,
        activesound: Sfx::Kntact,
        ..BRUISER
    },
    CyberBaron => MobjInfo { doomednum: 4040, spawnhealth: 1500, missilestate: S::S_NULL, ..BRUISER },
    Belphegor => MobjInfo {
        doomednum: 4041,
        spawnhealth: 1500,
        seesound: Sfx::Belsit,
        painsound: Sfx::Belpain,
        deathsound: Sfx::Beldie,
        activesound: Sfx::Belact,
        ..BRUISER
    },
    Knightmare => MobjInfo { doomednum: 4042, spawnhealth: 800, missilestate: S::S_NULL, speed: 12, ..BRUISER },
    HellCentaur => MobjInfo {
        doomednum: 4043,
        spawnhealth: 900,
        seesound: Sfx::Centaurmissilesit,
        deathsound: Sfx::Centaurmissiledie,
        ..BRUISER
    },
    BruiserDemon => MobjInfo {
        doomednum: 4044,
        spawnstate: S::S_BR64_STND,
        spawnhealth: 2000,
        seestate: S::S_BR64_RUN1,
        seesound: Sfx::Br64sit,
        painstate: S::S_BR64_PAIN,
        painsound: Sfx::Brpain,
        meleestate: S::S_BR64_ATK1_1,
        missilestate: S::S_BR64_ATK,
        deathstate: S::S_BR64_DIE1,
        deathsound: Sfx::Br64die,
        activesound: Sfx::Bract,
        raisestate: S::S_BR64_RAISE1,
        ..BRUISER
    },

    // lost souls
    Skull => MobjInfo { doomednum: 3006, ..SKULL },
    TerrorSoul => MobjInfo { doomednum: 4050, spawnhealth: 100, damage: 5, ..SKULL },
    NightmareLostSoul => MobjInfo {
        doomednum: 4051,
        spawnhealth: 120,
        seestate: S::S_SKUG_RUN1,
        damage: 4,
        ..SKULL
    },
    Stalker => MobjInfo {
        doomednum: 4052,
        spawnstate: S::S_STLK_STND,
        spawnhealth: 150,
        seestate: S::S_STLK_RUN1,
        seesound: Sfx::Stlksit,
        painsound: Sfx::Stlkpain,
        missilestate: S::S_STLK_ATK,
        ..SKULL
    },

    // pain elementals
    Pain => MobjInfo { doomednum: 71, ..PAIN },
    Abomination => MobjInfo { doomednum: 4060, spawnhealth: 600, ..PAIN },
    SoulKeeper => MobjInfo { doomednum: 4061, spawnhealth: 500, ..PAIN },
    PainElementalStalker => MobjInfo {
        doomednum: 4062,
        spawnstate: S::S_PAIS_STND,
        seestate: S::S_PAIS_RUN1,
        painstate: S::S_PAIS_PAIN1,
        missilestate: S::S_PAIS_ATK1,
        deathstate: S::S_PAIS_DIE1,
        raisestate: S::S_PAIS_RAISE1,
        ..PAIN
    },
    PainElementalNightmare => MobjInfo {
        doomednum: 4063,
        spawnstate: S::S_PAIG_STND,
        spawnhealth: 600,
        seestate: S::S_PAIG_RUN1,
        painstate: S::S_PAIG_PAIN1,
        missilestate: S::S_PAIG_ATK,
        deathstate: S::S_PAIG_DIE1,
        raisestate: S::S_PAIG_RAISE1,
        ..PAIN
    },

    // mancubi
    Mancubus => MobjInfo { doomednum: 67, ..FATSO },
    MancubusRocket => MobjInfo { doomednum: 4070, missilestate: S::S_NULL, ..FATSO },
    NightmareMancubus => MobjInfo { doomednum: 4071, spawnhealth: 1000, alpha: 160, ..FATSO },
    DukeOfHell => MobjInfo {
        doomednum: 4072,
        spawnhealth: 1200,
        seesound: Sfx::Dkhlsit,
        attacksound: Sfx::Dkhlatk,
        painsound: Sfx::Dkhlhit,
        missilestate: S::S_DUKE_ATK1,
        deathsound: Sfx::Dkhldie,
        ..FATSO
    },
    Hectebus => MobjInfo { doomednum: 4073, spawnhealth: 1000, missilestate: S::S_HECT_ATK1, ..FATSO },

    // arachnotrons
    Baby => MobjInfo { doomednum: 68, ..ARACHNOTRON },
    NightCrawler => MobjInfo { doomednum: 4080, spawnhealth: 700, ..ARACHNOTRON },
    Arthronailer => MobjInfo { doomednum: 4081, spawnhealth: 600, missilestate: S::S_ANAI_ATK1, ..ARACHNOTRON },
    ArachnoBaron => MobjInfo { doomednum: 4082, spawnhealth: 1000, missilestate: S::S_NULL, ..ARACHNOTRON },
    Darknotron => MobjInfo {
        doomednum: 4083,
        spawnhealth: 800,
        seesound: Sfx::Darknotronsit,
        missilestate: S::S_NULL,
        deathsound: Sfx::Darknotrondie,
        activesound: Sfx::Darknotronact,
        ..ARACHNOTRON
    },

    // cyberdemons
    Cyborg => MobjInfo { doomednum: 16, ..CYBERDEMON },
    CyborgTitle => MobjInfo { doomednum: 4090, ..CYBERDEMON },
    Annihilator => MobjInfo {
        doomednum: 4091,
        spawnhealth: 3000,
        seestate: S::S_ANNI_RUN1,
        seesound: Sfx::Annsit,
        missilestate: S::S_ANNI_ATK1,
        deathsound: Sfx::Anndth,
        ..CYBERDEMON
    },
    BfgCyberdemon => MobjInfo { doomednum: 4092, missilestate: S::S_BCYB_ATK1, ..CYBERDEMON },
    CyberdemonShotgun => MobjInfo { doomednum: 4093, missilestate: S::S_SCYB_ATK1, ..CYBERDEMON },
    Thamuz => MobjInfo {
        doomednum: 4094,
        spawnhealth: 6000,
        seesound: Sfx::Tsit1,
        painsound: Sfx::Tpain,
        missilestate: S::S_NULL,
        deathsound: Sfx::Tdie,
        ..CYBERDEMON
    },
    Harbinger => MobjInfo {
        doomednum: 4095,
        spawnhealth: 5000,
        seesound: Sfx::Ferrysee,
        painsound: Sfx::Ferrypain,
        missilestate: S::S_NULL,
        deathsound: Sfx::Ferrydie,
        activesound: Sfx::Ferrylaugh,
        ..CYBERDEMON
    },
    Spider => MobjInfo {
        doomednum: 7,
        spawnstate: S::S_SPID_STND,
        spawnhealth: 3000,
        seestate: S::S_SPID_RUN1,
        seesound: Sfx::Spisit,
        attacksound: Sfx::Shotgun,
        painstate: S::S_SPID_PAIN1,
        painchance: 40,
        painsound: Sfx::Spipain1,
        missilestate: S::S_SPID_ATK1,
        deathstate: S::S_SPID_DIE1,
        deathsound: Sfx::Spidth,
        speed: 12,
        radius: 128 * FRACUNIT,
        height: 100 * FRACUNIT,
        ..CYBERDEMON
    },

    // mother demons
    Resurrector => MobjInfo { doomednum: 3000, ..MOTHER_DEMON },
    Resurrector2 => MobjInfo {
        doomednum: 4100,
        seestate: S::S_RECT2_RUN1,
        meleestate: S::S_RECT2_MELEE1,
        missilestate: S::S_RECT2_ATK1,
        ..MOTHER_DEMON
    },
    Resurrector3 => MobjInfo { doomednum: 4101, spawnhealth: 6000, ..MOTHER_DEMON },
    ResurrectorInferno => MobjInfo { doomednum: 4102, spawnhealth: 6000, ..MOTHER_DEMON },
    ResurrectorBfg => MobjInfo { doomednum: 4103, spawnhealth: 7000, ..MOTHER_DEMON },

    // arch-vile
    Vile => MobjInfo {
        doomednum: 64,
        spawnstate: S::S_VILE_STND,
        spawnhealth: 700,
        seestate: S::S_VILE_RUN1,
        seesound: Sfx::Vilsit,
        painstate: S::S_VILE_PAIN1,
        painchance: 10,
        painsound: Sfx::Vipain,
        missilestate: S::S_VILE_ATK1,
        deathstate: S::S_VILE_DIE1,
        deathsound: Sfx::Vildth,
        speed: 15,
        radius: 20 * FRACUNIT,
        height: 100 * FRACUNIT,
        mass: 500,
        activesound: Sfx::Vilact,
        flags: MONSTER,
        ..MobjInfo::DEFAULT
    },

    // revenants
    Undead => MobjInfo { doomednum: 66, ..REVENANT },
    NightmareRevenant => MobjInfo { doomednum: 4110, spawnhealth: 600, missilestate: S::S_SKEN_MISS1, alpha: 160, ..REVENANT },
    DeepOne => MobjInfo {
        doomednum: 4111,
        spawnhealth: 400,
        seesound: Sfx::Deeponesit,
        painsound: Sfx::Deeponepain1,
        missilestate: S::S_NULL,
        deathsound: Sfx::Deeponedie,
        activesound: Sfx::Deeponeact1,
        ..REVENANT
    },

    // boss brain
    BossBrain => MobjInfo {
        doomednum: 88,
        spawnstate: S::S_BRAIN,
        spawnhealth: 250,
        painstate: S::S_BRAIN_PAIN,
        painchance: 255,
        painsound: Sfx::Bospn,
        deathstate: S::S_BRAIN_DIE1,
        deathsound: Sfx::Bosdth,
        radius: 16 * FRACUNIT,
        height: 16 * FRACUNIT,
        mass: 10_000_000,
        flags: MobjFlags::SOLID.union(MobjFlags::SHOOTABLE),
        ..MobjInfo::DEFAULT
    },
    BossSpit => MobjInfo {
        doomednum: 89,
        spawnstate: S::S_BRAINEYE,
        seestate: S::S_BRAINEYESEE,
        height: 32 * FRACUNIT,
        flags: MARKER,
        ..MobjInfo::DEFAULT
    },
    BossTarget => MobjInfo { doomednum: 87, height: 32 * FRACUNIT, ..SPOT },
    SpawnShot => MobjInfo {
        spawnstate: S::S_SPAWN1,
        seesound: Sfx::Bospn,
        reactiontime: 8,
        deathsound: Sfx::Telept,
        speed: 10 * FRACUNIT,
        radius: 6 * FRACUNIT,
        height: 32 * FRACUNIT,
        damage: 3,
        flags: PROJECTILE.union(MobjFlags::NOCLIP),
        ..MISSILE
    },
    SpawnFire => MobjInfo { spawnstate: S::S_SPAWNFIRE1, ..EFFECT },

    // projectiles
    ProjRocket => ROCKET,
    ProjRocketQuadDamage => MobjInfo { damage: 80, ..ROCKET },
    ProjGrenade => MobjInfo {
        spawnstate: S::S_GRENADE1,
        deathstate: S::S_GRENADE_DIE1,
        reactiontime: 64,
        speed: 18 * FRACUNIT,
        flags: PROJECTILE.union(MobjFlags::GRAVITY),
        ..ROCKET
    },
    ProjPlasma => PLASMA,
    ProjPlasmaQuadDamage => MobjInfo { damage: 20, ..PLASMA },
    ProjBfg => BFG_SHOT,
    ProjBfgQuadDamage => MobjInfo { damage: 400, ..BFG_SHOT },
    ProjBfg10k => MobjInfo { seesound: Sfx::Bfg10kf, damage: 150, ..BFG_SHOT },
    ProjBfg10kQuadDamage => MobjInfo { seesound: Sfx::Bfg10kf, damage: 600, ..BFG_SHOT },
    ProjDart => MobjInfo {
        spawnstate: S::S_DART1,
        seesound: Sfx::Dartshoot,
        deathstate: S::S_DART_DIE1,
        speed: 16 * FRACUNIT,
        radius: 13 * FRACUNIT,
        damage: 4,
        ..MISSILE
    },
    ProjNail => MobjInfo {
        spawnstate: S::S_NAIL1,
        seesound: Sfx::Nailgun,
        deathstate: S::S_NAIL_DIE1,
        deathsound: Sfx::Nailtink,
        speed: 30 * FRACUNIT,
        radius: 4 * FRACUNIT,
        damage: 3,
        ..MISSILE
    },
    ProjNailQuadDamage => MobjInfo {
        spawnstate: S::S_NAIL1,
        seesound: Sfx::Nailgun,
        deathstate: S::S_NAIL_DIE1,
        deathsound: Sfx::Nailtink,
        speed: 30 * FRACUNIT,
        radius: 4 * FRACUNIT,
        damage: 12,
        ..MISSILE
    },
    ProjFlamethrower => MobjInfo {
        spawnstate: S::S_FLAME1,
        seesound: Sfx::Flamefire1,
        deathstate: S::S_FLAME_DIE1,
        deathsound: Sfx::Flamedie1,
        speed: 18 * FRACUNIT,
        damage: 2,
        alpha: 200,
        ..MISSILE
    },
    ProjImp1 => IMP_BALL,
    ProjImp2 => MobjInfo { speed: 20 * FRACUNIT, alpha: 180, ..IMP_BALL },
    ProjDarkImp => MobjInfo { speed: 15 * FRACUNIT, damage: 4, ..IMP_BALL },
    ProjHardcoreImp => MobjInfo { speed: 20 * FRACUNIT, damage: 5, ..IMP_BALL },
    ProjHead => HEAD_BALL,
    ProjNightmareCacodemon => MobjInfo { speed: 15 * FRACUNIT, alpha: 160, ..HEAD_BALL },
    ProjCacolantern => MobjInfo { speed: 15 * FRACUNIT, damage: 7, ..HEAD_BALL },
    ProjAbaddon => MobjInfo { speed: 20 * FRACUNIT, damage: 8, ..HEAD_BALL },
    ProjBruiser1 => BARON_BALL,
    ProjBruiser2 => MobjInfo { damage: 10, ..BARON_BALL },
    ProjBruiserDemon1 => MobjInfo { speed: 18 * FRACUNIT, damage: 10, ..BARON_BALL },
    ProjBruiserDemon2 => MobjInfo {
        spawnstate: S::S_BR64FIRE1,
        deathstate: S::S_BR64FIRE_DIE1,
        ..GROUND_FIRE
    },
    ProjFatso => FAT_SHOT,
    ProjNightmareMancubus => MobjInfo { speed: 30 * FRACUNIT, alpha: 160, ..FAT_SHOT },
    ProjDukeOfHell => MobjInfo { damage: 10, ..FAT_SHOT },
    ProjHectebus => MobjInfo { damage: 10, speed: 25 * FRACUNIT, ..FAT_SHOT },
    ProjBaby => ARACH_PLASMA,
    ProjArthronailer => MobjInfo {
        spawnstate: S::S_NAIL1,
        seesound: Sfx::Nailgun,
        deathstate: S::S_NAIL_DIE1,
        deathsound: Sfx::Nailtink,
        speed: 30 * FRACUNIT,
        damage: 4,
        ..ARACH_PLASMA
    },
    ProjPainElementalNightmare => MobjInfo { damage: 6, alpha: 160, ..ARACH_PLASMA },
    ProjTracer => HOMING,
    ProjUndead => HOMING,
    ProjNightmareRevenant => MobjInfo { speed: 15 * FRACUNIT, alpha: 160, ..HOMING },
    ProjStalker1 => STALKER_SHOT,
    ProjStalker2 => MobjInfo { spawnstate: S::S_TRACER1, deathstate: S::S_TRACER_DIE1, ..STALKER_SHOT },
    ProjRect => MobjInfo {
        spawnstate: S::S_RECTMISSILE1,
        deathstate: S::S_RECTMISSILE_DIE1,
        speed: 18 * FRACUNIT,
        damage: 12,
        ..HOMING
    },
    ProjRectFire => GROUND_FIRE,
    ProjThamuzFire => MobjInfo { damage: 8, ..GROUND_FIRE },
    ProjResurrectorInfernoFire => MobjInfo { damage: 10, speed: 25 * FRACUNIT, ..GROUND_FIRE },

    // effects
    Fire => MobjInfo { spawnstate: S::S_FIRE1, alpha: 200, ..EFFECT },
    PropFire => MobjInfo { spawnstate: S::S_PROPFIRE1, alpha: 200, ..EFFECT },
    SmokeGray => MobjInfo { spawnstate: S::S_SMOKE_GRAY1, alpha: 120, ..EFFECT },
    SmokeRed => MobjInfo { spawnstate: S::S_SMOKE_RED1, alpha: 120, ..EFFECT },
    SmokeSmall => MobjInfo { spawnstate: S::S_PUFF1, alpha: 160, ..EFFECT },
    Blood => BLOOD,
    GreenBlood => MobjInfo { spawnstate: S::S_GREENBLOOD1, ..BLOOD },
    BlueBlood => MobjInfo { spawnstate: S::S_BLUEBLOOD1, ..BLOOD },
    PurpleBlood => MobjInfo { spawnstate: S::S_PURPLEBLOOD1, ..BLOOD },
    Explosion1 => MobjInfo { spawnstate: S::S_EXPLOSION1, alpha: 200, ..EFFECT },
    Explosion2 => MobjInfo { spawnstate: S::S_BIGEXPL1, alpha: 200, ..EFFECT },
    Barrel => MobjInfo {
        doomednum: 2035,
        spawnstate: S::S_BAR1,
        spawnhealth: 20,
        deathstate: S::S_BEXP1,
        deathsound: Sfx::Explode,
        radius: 10 * FRACUNIT,
        height: 42 * FRACUNIT,
        flags: MobjFlags::SOLID
            .union(MobjFlags::SHOOTABLE)
            .union(MobjFlags::NOBLOOD)
            .union(MobjFlags::GRAVITY),
        ..MobjInfo::DEFAULT
    },
    Camera => MobjInfo {
        doomednum: 4200,
        spawnstate: S::S_CAMERA,
        missilestate: S::S_CAMERA_TRACK,
        flags: MARKER,
        ..MobjInfo::DEFAULT
    },
    DestProjectile => MobjInfo { doomednum: 4201, ..SPOT },
    DestTeleport => MobjInfo { doomednum: 14, ..SPOT },

    // items
    ItemBonusHealth => MobjInfo { doomednum: 2014, flags: COUNTED_PICKUP, ..ITEM },
    ItemBonusArmor => MobjInfo { doomednum: 2015, flags: COUNTED_PICKUP, ..ITEM },
    ItemStimpack => MobjInfo { doomednum: 2011, ..ITEM },
    ItemMedkit => MobjInfo { doomednum: 2012, ..ITEM },
    ItemSoulsphere => MobjInfo { doomednum: 2013, flags: COUNTED_PICKUP, ..ITEM },
    ItemInvulSphere => MobjInfo { doomednum: 2022, flags: COUNTED_PICKUP, ..ITEM },
    ItemInvisSphere => MobjInfo { doomednum: 2024, flags: COUNTED_PICKUP, ..ITEM },
    ItemArmor1 => MobjInfo { doomednum: 2018, ..ITEM },
    ItemArmor2 => MobjInfo { doomednum: 2019, ..ITEM },
    ItemArmor3 => MobjInfo { doomednum: 4300, ..ITEM },
    ItemMaxArmorBonus => MobjInfo { doomednum: 4301, flags: COUNTED_PICKUP, ..ITEM },
    ItemHellPotion => MobjInfo { doomednum: 4302, flags: COUNTED_PICKUP, ..ITEM },
    ItemQuadDamage => MobjInfo { doomednum: 4303, flags: COUNTED_PICKUP, ..ITEM },
    AmmoClip => MobjInfo { doomednum: 2007, ..ITEM },
    AmmoClipBox => MobjInfo { doomednum: 2048, ..ITEM },
    AmmoShell => MobjInfo { doomednum: 2008, ..ITEM },
    AmmoShellBox => MobjInfo { doomednum: 2049, ..ITEM },
    AmmoRocket => MobjInfo { doomednum: 2010, ..ITEM },
    AmmoRocketBox => MobjInfo { doomednum: 2046, ..ITEM },
    AmmoCell => MobjInfo { doomednum: 2047, ..ITEM },
    AmmoCellPack => MobjInfo { doomednum: 17, ..ITEM },
    AmmoNailBox => MobjInfo { doomednum: 4310, ..ITEM },
    AmmoNailSmallBox => MobjInfo { doomednum: 4311, ..ITEM },
    AmmoFuelSmall => MobjInfo { doomednum: 4312, ..ITEM },
    AmmoFuelLarge => MobjInfo { doomednum: 4313, ..ITEM },
    WeapShotgun => MobjInfo { doomednum: 2001, ..ITEM },
    WeapSshotgun => MobjInfo { doomednum: 82, ..ITEM },
    WeapChaingun => MobjInfo { doomednum: 2002, ..ITEM },
    WeapLauncher => MobjInfo { doomednum: 2003, ..ITEM },
    WeapPlasma => MobjInfo { doomednum: 2004, ..ITEM },
    WeapChainsaw => MobjInfo { doomednum: 2005, ..ITEM },
    WeapBfg => MobjInfo { doomednum: 2006, ..ITEM },
    WeapHexaShotgun => MobjInfo { doomednum: 4320, ..ITEM },
    WeapQuadShotgun => MobjInfo { doomednum: 4321, ..ITEM },
    WeapNailgun => MobjInfo { doomednum: 4322, ..ITEM },
    WeapFlamethrower => MobjInfo { doomednum: 4323, ..ITEM },
    WeapBfg10k => MobjInfo { doomednum: 4324, ..ITEM },
}

pub const NUMMOBJTYPES: usize = MobjType::ALL.len();

/// Built-in definition of `kind`.
pub fn mobjinfo(kind: MobjType) -> &'static MobjInfo {
    &MOBJINFO[kind as usize]
}

impl MobjType {
    pub fn from_index(i: usize) -> Option<MobjType> {
        Self::ALL.get(i).copied()
    }

    /// Player bodies, human or bot.
    pub fn is_player_body(self) -> bool {
        self <= MobjType::PlayerBot3
    }

    /// Projectiles that crawl along the floor instead of bursting on it.
    pub fn is_ground_fire(self) -> bool {
        matches!(
            self,
            MobjType::ProjRectFire
                | MobjType::ProjBruiserDemon2
                | MobjType::ProjThamuzFire
                | MobjType::ProjResurrectorInfernoFire
        )
    }
}

/// Type placed by editor number `doomednum` in `table`.
pub fn find_doomednum(table: &[MobjInfo], doomednum: i32) -> Option<MobjType> {
    table
        .iter()
        .position(|info| info.doomednum == doomednum)
        .and_then(MobjType::from_index)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::NUMSTATES;

    #[test]
    fn test_table_matches_type_list() {
        assert_eq!(MOBJINFO.len(), NUMMOBJTYPES);
        assert_eq!(mobjinfo(MobjType::Possessed1).doomednum, 3004);
        assert_eq!(mobjinfo(MobjType::Spider).doomednum, 7);
    }

    #[test]
    fn test_doomednums_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (i, info) in MOBJINFO.iter().enumerate() {
            if info.doomednum > 0 {
                assert!(seen.insert(info.doomednum), "duplicate editor number on type {}", i);
            }
        }
    }

    #[test]
    fn test_find_doomednum() {
        assert_eq!(find_doomednum(MOBJINFO, 3001), Some(MobjType::Imp1));
        assert_eq!(find_doomednum(MOBJINFO, 14), Some(MobjType::DestTeleport));
        assert_eq!(find_doomednum(MOBJINFO, 31337), None);
    }

    #[test]
    fn test_state_references_in_range() {
        for info in MOBJINFO {
            for s in [
                info.spawnstate,
                info.seestate,
                info.painstate,
                info.meleestate,
                info.missilestate,
                info.deathstate,
                info.xdeathstate,
                info.raisestate,
            ] {
                assert!(s.index() < NUMSTATES);
            }
        }
    }

    #[test]
    fn test_counted_monsters_can_wake() {
        for (i, info) in MOBJINFO.iter().enumerate() {
            if info.flags.contains(MobjFlags::COUNTKILL) {
                assert!(!info.seestate.is_null(), "monster type {} has no see state", i);
                assert!(!info.deathstate.is_null(), "monster type {} has no death state", i);
            }
        }
    }

    #[test]
    fn test_player_bodies_sort_first() {
        assert!(MobjType::PlayerBot3.is_player_body());
        assert!(!MobjType::Possessed1.is_player_body());
        assert!(MobjType::Possessed1 > MobjType::PlayerBot3);
    }
}
