#![allow(clippy::too_many_arguments, clippy::collapsible_if, clippy::collapsible_else_if,
         clippy::manual_range_contains, clippy::comparison_chain, clippy::identity_op)]
// Shared primitives for the Doom64 actor simulation: fixed-point math,
// per-call-site random streams, console variables, options and logging.

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

pub mod fixed;
pub mod random;
pub mod cvar;
pub mod config;
pub mod logging;
