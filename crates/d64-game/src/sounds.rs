// sounds.rs — sound effect identifiers

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

/// Sound lump index passed to the sound system. Order matches the lump table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum Sfx {
    #[default]
    None,
    Punch,
    Spawn,
    Explode,
    Implod,
    Pistol,
    Shotgun,
    Plasma,
    Bfg,
    Sawup,
    Sawidle,
    Saw1,
    Saw2,
    Missile,
    Bfgexp,
    Pstart,
    Pstop,
    Doorup,
    Doordown,
    Secmove,
    Switch1,
    Switch2,
    Itemup,
    Sgcock,
    Oof,
    Telept,
    Noway,
    Sht2fire,
    Sht2load1,
    Sht2load2,
    Sht2load3,
    Plrpain,
    Plrdie,
    Slop,
    Possit1,
    Possit2,
    Possit3,
    Posdie1,
    Posdie2,
    Posdie3,
    Posact,
    Dbpain1,
    Dbpain2,
    Dbact,
    Scratch,
    Impsit1,
    Impsit2,
    Impdth1,
    Impdth2,
    Impact,
    Sargsit,
    Sargatk,
    Sargdie,
    Bos1sit,
    Bos1die,
    Headsit,
    Headdie,
    Skullatk,
    Bos2sit,
    Bos2die,
    Pesit,
    Pepain,
    Pedie,
    Bspisit,
    Bspidie,
    Bspilift,
    Bspistomp,
    Fattatk,
    Fattsit,
    Fatthit,
    Fattdie,
    Bdmissile,
    Skelact,
    Tracer,
    Dart,
    Dartshoot,
    Cybsit,
    Cybdth,
    Cybhoof,
    Metal,
    Door2up,
    Door2dwn,
    Powerup,
    Laser,
    Electric,
    Thndrlow,
    Thndrhigh,
    Quake,
    Darthit,
    Rectact,
    Rectatk,
    Rectdie,
    Rectpain,
    Rectsit,
    Skelsit,
    Skeldth,
    Spisit,
    Spidth,
    Spistomp,
    Annsit,
    Anndth,
    Annhoof,
    Gechsit,
    Gechatk,
    Gechdie,
    Dkhlatk,
    Dkhlsit,
    Dkhlhit,
    Dkhldie,
    Br64sit,
    Br64die,
    Vilatk,
    Vilsit,
    Vipain,
    Vildth,
    Vilact,
    Flamst,
    Flame,
    Quaddamageact,
    Quaddamageatt,
    Nailgun,
    Nailtink,
    Bossit,
    Bospn,
    Bosdth,
    Keenpn,
    Keendt,
    Sssit,
    Ssdth,
    Belsit,
    Belpain,
    Beldie,
    Belact,
    Stlksit,
    Stlkpain,
    Quadshotgunfire,
    Quadshotgunopen,
    Quadshotgunload,
    Quadshotgunclose,
    Tsit1,
    Tsit2,
    Tpain,
    Tdie,
    Tapocast,
    Gruntsit,
    Gruntpain,
    Gruntdie,
    Ferrysee,
    Ferrypain,
    Ferrydie,
    Ferrylaugh,
    Chnsit,
    Chnatk,
    Chnpain,
    Chndie,
    Chnact,
    Spcpain,
    Spcact,
    Imppain,
    Headpain,
    Headact,
    Kntpain,
    Kntact,
    Brpain,
    Bract,
    Manact,
    Peact,
    Bsppain,
    Skepain,
    Cybpain,
    Cybact,
    Spipain1,
    Spipain2,
    Hexashotgunfire,
    Centaursit,
    Centauratk,
    Centaurpain,
    Centaurdie,
    Centauract,
    Centaurmissilesit,
    Centaurmissiledie,
    Bfg10kelectric,
    Bfg10kf,
    Bfg10kcool,
    Wizardsit,
    Wizardatk,
    Wizardpain,
    Wizarddie,
    Wizardact,
    Darknotronsit,
    Darknotrondie,
    Darknotronact,
    Darknotronstomp,
    Darknotronplasma,
    Deeponesit,
    Deeponeatk1,
    Deeponeatk2,
    Deeponepain1,
    Deeponepain2,
    Deeponepain3,
    Deeponepain4,
    Deeponedie,
    Deeponeact1,
    Deeponeact2,
    Deeponefire,
    Deeponehit,
    Flamefire1,
    Flamefire2,
    Flameburn,
    Flamedie1,
    Flamedie2,
    Flamedie3,
}

impl Sfx {
    pub fn is_none(self) -> bool {
        self == Sfx::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_indices_follow_lump_order() {
        assert_eq!(Sfx::None as u16, 0);
        assert_eq!(Sfx::Punch as u16, 1);
        assert_eq!(Sfx::Possit1 as u16 + 1, Sfx::Possit2 as u16);
        assert!(Sfx::None.is_none());
        assert!(!Sfx::Explode.is_none());
    }
}
