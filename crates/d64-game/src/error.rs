// error.rs — fatal simulation errors

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

use thiserror::Error;

/// Conditions that abort a level load or a running tic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("unknown thing type {kind} at ({x}, {y})")]
    UnknownThingType { kind: i32, x: i32, y: i32 },
    #[error("attempt to spawn player {player} at unavailable start point")]
    UnavailablePlayerStart { player: usize },
    #[error("chase direction requested for actor {index} without a target")]
    NoChaseTarget { index: usize },
    #[error("no player in game")]
    NoPlayerInGame,
    #[error("bad game options: {0}")]
    BadOptions(String),
}

pub type SimResult<T> = Result<T, SimError>;
