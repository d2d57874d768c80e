// g_spawn.rs — map thing placement and line-triggered spawning

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

//! Turning map things into actors. Placement runs the skill and game-mode
//! filters first, then the type substitutions, then the option flags.

use tracing::{debug, info, warn};

use d64_common::config::Skill;

use crate::error::{SimError, SimResult};
use crate::g_effects::{create_fade_in, create_fade_out};
use crate::g_local::*;
use crate::g_mobj::{remove_mobj, spawn_mobj};
use crate::game::GameContext;
use crate::info::find_doomednum;

/// Map thing type marking a deathmatch start.
const DEATHMATCH_START: i16 = 11;
const MAX_DEATHMATCH_STARTS: usize = 10;

/// Health a reborn player starts with.
pub const MAXHEALTH: i32 = 100;

// ============================================================
// Substitution tables
// ============================================================

use MobjType as T;

/// Harder variants swapped in on the doomslayer skill, applied in order.
const DOOMSLAYER_SWAPS: &[(MobjType, MobjType)] = &[
    (T::Possessed1, T::Possessed2),
    (T::Imp1, T::Imp2),
    (T::Bruiser2, T::Bruiser1),
    (T::Demon2, T::Bruiser2),
    (T::Demon1, T::Demon2),
    (T::AmmoShellBox, T::AmmoShell),
    (T::AmmoClipBox, T::AmmoClip),
    (T::AmmoRocketBox, T::AmmoRocket),
    (T::AmmoCellPack, T::AmmoCell),
    (T::ItemMedkit, T::ItemStimpack),
    (T::ItemInvisSphere, T::ItemMedkit),
    (T::ItemInvulSphere, T::ItemSoulsphere),
];

/// How a randomizer rule picks its replacement.
enum Roll {
    /// `P_Random % len` indexes the list.
    Modulo(&'static [MobjType]),
    /// The first bucket whose bound exceeds the raw roll, else the fallback.
    Below(&'static [(i32, MobjType)], MobjType),
}

struct Randomize {
    from: &'static [MobjType],
    roll: Roll,
}

/// Complex Doom 64 randomizer. Every rule is checked in order against the
/// type produced so far, so a pick can be re-rolled by a later rule.
const RANDOMIZER: &[Randomize] = &[
    Randomize {
        from: &[T::AmmoClip],
        roll: Roll::Modulo(&[T::AmmoNailBox, T::AmmoClipBox, T::AmmoNailSmallBox, T::AmmoClip]),
    },
    Randomize { from: &[T::AmmoClipBox], roll: Roll::Modulo(&[T::AmmoNailBox, T::AmmoClipBox]) },
    Randomize { from: &[T::AmmoShell], roll: Roll::Modulo(&[T::AmmoShellBox, T::AmmoShell]) },
    Randomize { from: &[T::AmmoRocket], roll: Roll::Modulo(&[T::AmmoRocketBox, T::AmmoRocket]) },
    Randomize {
        from: &[T::AmmoCell],
        roll: Roll::Modulo(&[T::AmmoFuelLarge, T::AmmoFuelSmall, T::AmmoCellPack, T::AmmoCell]),
    },
    Randomize { from: &[T::AmmoCellPack], roll: Roll::Modulo(&[T::AmmoFuelLarge, T::AmmoCellPack]) },
    Randomize { from: &[T::WeapChaingun], roll: Roll::Modulo(&[T::WeapNailgun, T::WeapChaingun]) },
    Randomize {
        from: &[T::WeapSshotgun],
        roll: Roll::Modulo(&[T::WeapHexaShotgun, T::WeapQuadShotgun, T::WeapSshotgun]),
    },
    Randomize { from: &[T::WeapPlasma], roll: Roll::Modulo(&[T::WeapFlamethrower, T::WeapPlasma]) },
    Randomize { from: &[T::WeapBfg], roll: Roll::Modulo(&[T::WeapBfg10k, T::WeapBfg]) },
    Randomize { from: &[T::ItemInvisSphere], roll: Roll::Below(&[(236, T::ItemInvisSphere)], T::ItemQuadDamage) },
    Randomize { from: &[T::ItemBonusHealth], roll: Roll::Modulo(&[T::ItemHellPotion, T::ItemBonusHealth]) },
    Randomize { from: &[T::ItemBonusArmor], roll: Roll::Modulo(&[T::ItemMaxArmorBonus, T::ItemBonusArmor]) },
    Randomize { from: &[T::ItemArmor1], roll: Roll::Below(&[(251, T::ItemArmor1)], T::ItemArmor3) },
    Randomize { from: &[T::ItemArmor2], roll: Roll::Modulo(&[T::ItemArmor3, T::ItemArmor2]) },
    Randomize {
        from: &[T::Possessed1, T::Possessed2],
        roll: Roll::Below(
            &[
                (31, T::MeleeZombie),
                (62, T::Possessed1),
                (93, T::Possessed2),
                (124, T::ChainGuy),
                (155, T::RifleGuy),
                (186, T::BeheadedRocketeer),
                (217, T::PlasmaZombie),
                (250, T::SsgZombie),
            ],
            T::BfgCommando,
        ),
    },
    Randomize {
        from: &[T::Demon1, T::Demon2],
        roll: Roll::Modulo(&[
            T::Centaur,
            T::Hellhound,
            T::NightmareSpectre,
            T::BloodDemon,
            T::GreenDemon,
            T::Demon2,
            T::Demon1,
        ]),
    },
    Randomize {
        from: &[T::Imp1, T::Imp2],
        roll: Roll::Modulo(&[T::HardcoreImp, T::ImpWarrior, T::NamiDarkImp, T::DarkImp, T::Imp2, T::Imp1]),
    },
    Randomize {
        from: &[T::Bruiser1],
        roll: Roll::Below(
            &[
                (38, T::Bruiser1),
                (76, T::CyberBaron),
                (114, T::Belphegor),
                (152, T::BruiserDemon),
                (190, T::HellCentaur),
                (230, T::DeepOne),
                (243, T::Resurrector3),
            ],
            T::Vile,
        ),
    },
    Randomize {
        from: &[T::Bruiser2],
        roll: Roll::Modulo(&[T::CentaurLeader, T::Knightmare, T::NightmareRevenant, T::Undead, T::Bruiser2]),
    },
    Randomize {
        from: &[T::Cacodemon, T::CacodemonClassic],
        roll: Roll::Modulo(&[T::Abaddon, T::Cacolantern, T::NightmareCacodemon, T::CacodemonClassic, T::Cacodemon]),
    },
    Randomize {
        from: &[T::Pain],
        roll: Roll::Modulo(&[
            T::PainElementalNightmare,
            T::PainElementalStalker,
            T::SoulKeeper,
            T::Abomination,
            T::Pain,
        ]),
    },
    Randomize {
        from: &[T::Skull],
        roll: Roll::Modulo(&[T::NightmareLostSoul, T::Stalker, T::TerrorSoul, T::Skull]),
    },
    Randomize {
        from: &[T::Mancubus],
        roll: Roll::Modulo(&[T::NightmareMancubus, T::Hectebus, T::MancubusRocket, T::DukeOfHell, T::Mancubus]),
    },
    Randomize {
        from: &[T::Baby],
        roll: Roll::Modulo(&[T::Darknotron, T::ArachnoBaron, T::Arthronailer, T::NightCrawler, T::Baby]),
    },
    Randomize {
        from: &[T::Cyborg],
        roll: Roll::Modulo(&[
            T::Harbinger,
            T::Thamuz,
            T::CyberdemonShotgun,
            T::BfgCyberdemon,
            T::Annihilator,
            T::Cyborg,
        ]),
    },
    Randomize {
        from: &[T::Resurrector],
        roll: Roll::Modulo(&[T::ResurrectorBfg, T::ResurrectorInferno, T::Resurrector2, T::Resurrector]),
    },
];

/// Monsters that come back doubled on ultra-nightmare or with the
/// nightmare placement option.
const NIGHTMARE_DOUBLED: &[MobjType] = &[
    T::Possessed1,
    T::Possessed2,
    T::Demon1,
    T::Demon2,
    T::Imp1,
    T::Imp2,
    T::Bruiser1,
    T::Bruiser2,
    T::Cacodemon,
    T::CacodemonClassic,
    T::Pain,
    T::Skull,
    T::Mancubus,
    T::Baby,
    T::Cyborg,
    T::Resurrector,
];

fn apply_doomslayer_swaps(mut kind: MobjType) -> MobjType {
    for &(from, to) in DOOMSLAYER_SWAPS {
        if kind == from {
            kind = to;
        }
    }
    kind
}

fn randomize(ctx: &mut GameContext, mut kind: MobjType) -> MobjType {
    for rule in RANDOMIZER {
        if !rule.from.contains(&kind) {
            continue;
        }
        let r = ctx.p_random(RandomClass::Randomizer);
        kind = match rule.roll {
            Roll::Modulo(picks) => picks[r as usize % picks.len()],
            Roll::Below(buckets, fallback) => {
                buckets.iter().find(|&&(bound, _)| r < bound).map_or(fallback, |&(_, t)| t)
            }
        };
    }
    kind
}

/// Skill bit a thing's options must carry to appear.
fn skill_bit(skill: Skill) -> MapThingOptions {
    match skill {
        Skill::Baby => MapThingOptions::EASY,
        Skill::Nightmare | Skill::DoomSlayer | Skill::UltraNightmare => MapThingOptions::HARD,
        s => MapThingOptions::from_bits_truncate(1 << (s.index() - 1)),
    }
}

fn double_nightmare(actor: &mut Actor) {
    actor.health *= 2;
    actor.alpha = 128;
    actor.flags |= MobjFlags::NIGHTMARE;
}

// ============================================================
// Placement
// ============================================================

/// Place one map thing. Starts are recorded rather than spawned, and
/// filtered or deferred things return `Ok(None)`.
pub fn spawn_map_thing(ctx: &mut GameContext, mthing: &MapThing) -> SimResult<Option<ActorHandle>> {
    if mthing.kind == DEATHMATCH_START {
        if ctx.deathmatch_starts.len() < MAX_DEATHMATCH_STARTS {
            ctx.deathmatch_starts.push(*mthing);
        }
        return Ok(None);
    }

    if (1..=MAXPLAYERS as i16).contains(&mthing.kind) {
        ctx.player_starts[mthing.kind as usize - 1] = Some(*mthing);
        return Ok(None);
    }

    if !ctx.netgame() && mthing.options.contains(MapThingOptions::MULTI) {
        return Ok(None);
    }
    if !mthing.options.intersects(skill_bit(ctx.skill())) {
        return Ok(None);
    }

    let Some(mut kind) = find_doomednum(ctx.defs.mobjinfo, mthing.kind as i32) else {
        return Err(SimError::UnknownThingType { kind: mthing.kind as i32, x: mthing.x as i32, y: mthing.y as i32 });
    };

    if ctx.options.cacodemon_alternative && kind == MobjType::Cacodemon {
        kind = MobjType::CacodemonClassic;
    }
    if ctx.skill() == Skill::DoomSlayer {
        kind = apply_doomslayer_swaps(kind);
    }
    if ctx.options.complex_doom64 {
        kind = randomize(ctx, kind);
    }

    let info = ctx.info(kind);
    if ctx.options.deathmatch && info.flags.contains(MobjFlags::NOTDMATCH) {
        return Ok(None);
    }
    if ctx.options.nomonsters && (kind == MobjType::Skull || info.flags.contains(MobjFlags::COUNTKILL)) {
        return Ok(None);
    }

    if mthing.options.contains(MapThingOptions::SPAWN) {
        let mut deferred = *mthing;
        deferred.options.remove(MapThingOptions::SPAWN);
        ctx.spawnlist.push(deferred);
        return Ok(None);
    }

    let x = int_to_fixed(mthing.x as i32);
    let y = int_to_fixed(mthing.y as i32);
    let z = if info.flags.contains(MobjFlags::SPAWNCEILING) { ONCEILINGZ } else { ONFLOORZ };
    let h = spawn_mobj(ctx, x, y, z, kind);

    if let Some(mobj) = ctx.actors.get_mut(h) {
        mobj.z += int_to_fixed(mthing.z as i32);
        mobj.spawnpoint = *mthing;
        mobj.tid = mthing.tid as i32;
    }

    let solid = ctx.actors.get(h).is_some_and(|a| a.flags.contains(MobjFlags::SOLID) && a.player.is_none());
    if solid && !ctx.gi.check_position(&ctx.actors, h, x, y) {
        debug!(?kind, x = mthing.x, y = mthing.y, "placement blocked");
        remove_mobj(ctx, h);
        return Ok(None);
    }

    let tics = ctx.actors.get(h).map_or(0, |a| a.tics);
    if tics > 0 {
        let r = ctx.p_random(RandomClass::SpawnThing);
        if let Some(mobj) = ctx.actors.get_mut(h) {
            mobj.tics = 1 + r % tics;
        }
    }

    let doomslayer = ctx.skill() == Skill::DoomSlayer;
    let ultra = ctx.skill() == Skill::UltraNightmare;
    let mut secret = false;
    if let Some(mobj) = ctx.actors.get_mut(h) {
        mobj.angle = ANG45.wrapping_mul((mthing.angle as i32 / 45) as u32);

        let opts = mthing.options;
        if opts.contains(MapThingOptions::AMBUSH) {
            mobj.flags |= MobjFlags::AMBUSH;
        }
        if opts.contains(MapThingOptions::ONDEATH) {
            mobj.flags |= MobjFlags::TRIGDEATH;
        }
        if opts.contains(MapThingOptions::ONTOUCH) {
            mobj.flags |= MobjFlags::TRIGTOUCH;
        }
        if opts.contains(MapThingOptions::NOINFIGHTING) {
            mobj.flags |= MobjFlags::NOINFIGHTING;
        }
        if opts.contains(MapThingOptions::NIGHTMARE) {
            double_nightmare(mobj);
        }
        if opts.contains(MapThingOptions::SECRET) {
            mobj.flags |= MobjFlags::COUNTSECRET;
            secret = true;
        }
        if opts.contains(MapThingOptions::FRIEND) {
            mobj.flags |= MobjFlags::FRIEND;
        }
        if opts.contains(MapThingOptions::DROPOFF) {
            mobj.flags |= MobjFlags::DROPOFF;
        }
        if mobj.flags.is_empty() {
            mobj.blockflag |= BlockFlags::MIDPOINTONLY;
        }

        if doomslayer {
            mobj.flags |= MobjFlags::NOINFIGHTING;
        }
        // stacks with the placement option
        if (opts.contains(MapThingOptions::NIGHTMARE) || ultra) && NIGHTMARE_DOUBLED.contains(&kind) {
            double_nightmare(mobj);
        }
    }
    if secret {
        ctx.level.totalsecret += 1;
    }

    Ok(Some(h))
}

/// Put a player's body on its start spot.
pub fn spawn_player(ctx: &mut GameContext, mthing: &MapThing) -> SimResult<()> {
    if mthing.kind <= 0 || mthing.kind as usize > MAXPLAYERS {
        return Ok(());
    }
    let idx = mthing.kind as usize - 1;
    if !ctx.players[idx].in_game {
        return Ok(());
    }

    if ctx.players[idx].playerstate == PlayerState::Reborn {
        player_reborn(&mut ctx.players[idx]);
    }

    if mthing.options.is_empty() {
        return Err(SimError::UnavailablePlayerStart { player: idx });
    }

    let h = spawn_mobj(ctx, int_to_fixed(mthing.x as i32), int_to_fixed(mthing.y as i32), ONFLOORZ, MobjType::Player);
    let health = ctx.players[idx].health;
    if let Some(mobj) = ctx.actors.get_mut(h) {
        mobj.angle = ANG45.wrapping_mul((mthing.angle as i32 / 45) as u32);
        mobj.player = Some(idx);
        mobj.health = health;
        mobj.tid = mthing.tid as i32;
        mobj.z += int_to_fixed(mthing.z as i32);
    }

    let deathmatch = ctx.options.deathmatch;
    let p = &mut ctx.players[idx];
    p.mo = Some(h);
    p.playerstate = PlayerState::Live;
    p.viewheight = VIEWHEIGHT;
    p.deltaviewheight = 0;
    p.pitch = 0;
    if deathmatch {
        p.cards = [true; NUMCARDS];
    }

    info!(player = idx, x = mthing.x, y = mthing.y, "player spawned");
    Ok(())
}

/// Fresh inventory for a player coming back from the dead or a new game.
pub fn player_reborn(p: &mut Player) {
    *p = Player { in_game: p.in_game, bot: p.bot, playerstate: PlayerState::Live, health: MAXHEALTH, ..Default::default() };
}

// ============================================================
// Line specials
// ============================================================

/// Bring in every deferred thing tagged `tag`, fading it in. Returns true
/// if anything appeared.
pub fn ev_spawn_mobj_template(ctx: &mut GameContext, tag: i32, silent: bool) -> bool {
    let templates: Vec<MapThing> = ctx.spawnlist.iter().filter(|m| m.tid as i32 == tag).copied().collect();
    let mut ok = false;

    for mthing in templates {
        let h = match spawn_map_thing(ctx, &mthing) {
            Ok(Some(h)) => h,
            Ok(None) => continue,
            Err(err) => {
                warn!(error = %err, tag, "spawn template skipped");
                continue;
            }
        };

        let (solid, x, y) = match ctx.actors.get(h) {
            Some(a) => (a.flags.contains(MobjFlags::SOLID), a.x, a.y),
            None => continue,
        };
        if solid && !ctx.gi.check_position(&ctx.actors, h, x, y) {
            remove_mobj(ctx, h);
            continue;
        }

        let Some(mobj) = ctx.actors.get_mut(h) else {
            continue;
        };
        mobj.reactiontime = 18;
        let kind = mobj.kind;

        if !silent && !ctx.options.no_spawn_sound {
            ctx.sound(Some(h), Sfx::Spawn);
        }

        if kind == MobjType::Demon2 {
            if let Some(mobj) = ctx.actors.get_mut(h) {
                mobj.alpha = 0x30;
            }
        } else {
            if let Some(mobj) = ctx.actors.get_mut(h) {
                mobj.alpha = 0;
            }
            create_fade_in(ctx, h);
        }
        ok = true;
    }

    debug!(tag, ok, "spawn template");
    ok
}

/// Fade out and remove every actor tagged `tag` except teleport
/// destinations.
pub fn ev_fade_out_mobj(ctx: &mut GameContext, tag: i32) -> bool {
    let respawning = ctx.netgame() && ctx.options.respawn_specials;
    let tagged: Vec<ActorHandle> = ctx
        .actors
        .iter()
        .filter(|(_, a)| !a.removed && a.tid == tag && a.kind != MobjType::DestTeleport)
        .map(|(h, _)| h)
        .collect();

    for &h in &tagged {
        let Some(mo) = ctx.actors.get_mut(h) else {
            continue;
        };
        mo.flags.remove(MobjFlags::SPECIAL);
        if mo.flags.contains(MobjFlags::TRIGDEATH) {
            mo.flags = MobjFlags::empty();
        }
        if respawning && mo.pending == PendingAction::RespawnSpecial {
            mo.pending = PendingAction::None;
            mo.alpha = 0xff;
        }
        create_fade_out(ctx, h);
    }

    !tagged.is_empty()
}
