// cvar.rs — console variables behind the game options

/*
Copyright (C) 1997-2001 Id Software, Inc.
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

use std::collections::HashMap;
use tracing::debug;

/// A console variable. Latched variables hold a pending value until the
/// next level load.
#[derive(Clone, Debug)]
pub struct Cvar {
    pub name: String,
    pub string: String,
    pub value: f32,
    pub latch: bool,
    pub pending: Option<String>,
}

/// What a `set` did with the new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Applied,
    Latched,
    Unchanged,
}

#[derive(Default)]
pub struct CvarRegistry {
    vars: Vec<Cvar>,
    by_name: HashMap<String, usize>,
}

fn parse_value(s: &str) -> f32 {
    s.trim().parse::<f32>().unwrap_or(0.0)
}

impl CvarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Cvar> {
        self.by_name.get(name).map(|&i| &self.vars[i])
    }

    /// Numeric value, 0 if the variable does not exist.
    pub fn value(&self, name: &str) -> f32 {
        self.find(name).map_or(0.0, |v| v.value)
    }

    /// String value, "" if the variable does not exist.
    pub fn string(&self, name: &str) -> &str {
        self.find(name).map_or("", |v| v.string.as_str())
    }

    /// Create `name` with `default`. Registering an existing name keeps its
    /// current value.
    pub fn register(&mut self, name: &str, default: &str, latch: bool) {
        if let Some(&i) = self.by_name.get(name) {
            self.vars[i].latch |= latch;
            return;
        }
        self.by_name.insert(name.to_string(), self.vars.len());
        self.vars.push(Cvar {
            name: name.to_string(),
            string: default.to_string(),
            value: parse_value(default),
            latch,
            pending: None,
        });
    }

    /// Change a variable. Unknown names are created unlatched.
    pub fn set(&mut self, name: &str, value: &str) -> SetOutcome {
        let Some(&i) = self.by_name.get(name) else {
            self.register(name, value, false);
            return SetOutcome::Applied;
        };
        let var = &mut self.vars[i];

        if var.latch {
            let current = var.pending.as_deref().unwrap_or(&var.string);
            if current == value {
                return SetOutcome::Unchanged;
            }
            debug!(cvar = name, value, "latched until the next level");
            var.pending = Some(value.to_string());
            return SetOutcome::Latched;
        }

        if var.string == value {
            return SetOutcome::Unchanged;
        }
        var.string = value.to_string();
        var.value = parse_value(value);
        SetOutcome::Applied
    }

    /// Commit every pending latched value. Returns how many changed.
    pub fn apply_latched(&mut self) -> usize {
        let mut applied = 0;
        for var in &mut self.vars {
            if let Some(pending) = var.pending.take() {
                var.value = parse_value(&pending);
                var.string = pending;
                applied += 1;
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_keeps_existing_value() {
        let mut cvars = CvarRegistry::new();
        cvars.register("nomonsters", "1", false);
        cvars.register("nomonsters", "0", true);
        assert_eq!(cvars.string("nomonsters"), "1", "existing value must be kept");
        assert!(cvars.find("nomonsters").unwrap().latch);
    }

    #[test]
    fn test_latched_value_waits_for_apply() {
        let mut cvars = CvarRegistry::new();
        cvars.register("skill", "1", true);
        assert_eq!(cvars.set("skill", "3"), SetOutcome::Latched);
        assert_eq!(cvars.set("skill", "3"), SetOutcome::Unchanged);
        assert_eq!(cvars.value("skill"), 1.0, "latched until the next level");
        assert_eq!(cvars.apply_latched(), 1);
        assert_eq!(cvars.value("skill"), 3.0);
        assert_eq!(cvars.apply_latched(), 0);
    }

    #[test]
    fn test_unlatched_set_applies_now() {
        let mut cvars = CvarRegistry::new();
        cvars.register("developer", "0", false);
        assert_eq!(cvars.set("developer", "1"), SetOutcome::Applied);
        assert_eq!(cvars.value("developer"), 1.0);
        assert_eq!(cvars.set("developer", "1"), SetOutcome::Unchanged);
    }

    #[test]
    fn test_missing_and_unparsable() {
        let mut cvars = CvarRegistry::new();
        assert_eq!(cvars.value("nonexistent"), 0.0);
        assert_eq!(cvars.string("nonexistent"), "");
        cvars.set("rng_seed", "abc");
        assert_eq!(cvars.value("rng_seed"), 0.0);
        assert_eq!(cvars.string("rng_seed"), "abc");
    }
}
