use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreErrorCode};

pub const ITEMS_CACHE_FILE: &str = "items_cache.json";
pub const CREATURES_CACHE_FILE: &str = "creatures_cache.json";
pub const LOCATIONS_CACHE_FILE: &str = "locations_cache.json";
pub const COLORS_CACHE_FILE: &str = "colors_cache.json";
pub const COMMANDS_CACHE_FILE: &str = "commands_cache.json";
pub const TAMING_CACHE_FILE: &str = "taming_cache.json";

/// Spawnable item with its GFI blueprint code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub id: String,
}

/// Spawnable creature with its entity class path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureEntry {
    pub name: String,
    pub class: String,
}

/// Teleport target; `code` holds the "x y z" coordinate triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    pub id: i64,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TamingEntry {
    pub name: String,
    #[serde(default)]
    pub tame_type: String,
    #[serde(default)]
    pub feed: String,
    #[serde(default)]
    pub notes: String,
}

/// Static definition of a console command. `syntax` is a whitespace token
/// template: one or two literal verb tokens followed by `<Placeholder>`
/// tokens in the order they are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
    pub syntax: String,
}

/// Read-only reference data loaded once at startup and passed explicitly to
/// the resolver and renderers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogs {
    items: Vec<ItemEntry>,
    creatures: Vec<CreatureEntry>,
    locations: Vec<LocationEntry>,
    colors: Vec<ColorEntry>,
    commands: Vec<CommandDescriptor>,
    taming: Vec<TamingEntry>,
}

impl Catalogs {
    /// Build catalogs from already-loaded lists. Items, creatures, locations
    /// and commands are sorted case-insensitively by name; colors and taming
    /// keep their given order.
    pub fn new(
        mut items: Vec<ItemEntry>,
        mut creatures: Vec<CreatureEntry>,
        mut locations: Vec<LocationEntry>,
        colors: Vec<ColorEntry>,
        mut commands: Vec<CommandDescriptor>,
        taming: Vec<TamingEntry>,
    ) -> Self {
        items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        creatures.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        locations.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        commands.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        Self {
            items,
            creatures,
            locations,
            colors,
            commands,
            taming,
        }
    }

    /// Load every cache file found under `dir`. A missing or unparseable
    /// cache yields an empty catalog for that list; only a path that is not
    /// a directory at all is an error.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CoreError> {
        if !dir.is_dir() {
            return Err(CoreError::new(
                CoreErrorCode::Io,
                format!("{} is not a directory", dir.display()),
            ));
        }

        Ok(Self::new(
            load_cache(&dir.join(ITEMS_CACHE_FILE)),
            load_cache(&dir.join(CREATURES_CACHE_FILE)),
            load_cache(&dir.join(LOCATIONS_CACHE_FILE)),
            load_cache(&dir.join(COLORS_CACHE_FILE)),
            load_cache(&dir.join(COMMANDS_CACHE_FILE)),
            load_cache(&dir.join(TAMING_CACHE_FILE)),
        ))
    }

    pub fn items(&self) -> &[ItemEntry] {
        &self.items
    }

    pub fn creatures(&self) -> &[CreatureEntry] {
        &self.creatures
    }

    pub fn locations(&self) -> &[LocationEntry] {
        &self.locations
    }

    pub fn colors(&self) -> &[ColorEntry] {
        &self.colors
    }

    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    pub fn taming(&self) -> &[TamingEntry] {
        &self.taming
    }

    pub fn filter_items(&self, needle: &str) -> Vec<&ItemEntry> {
        filter_by_name(&self.items, needle, |e| &e.name)
    }

    pub fn filter_creatures(&self, needle: &str) -> Vec<&CreatureEntry> {
        filter_by_name(&self.creatures, needle, |e| &e.name)
    }

    pub fn filter_locations(&self, needle: &str) -> Vec<&LocationEntry> {
        filter_by_name(&self.locations, needle, |e| &e.name)
    }

    pub fn filter_colors(&self, needle: &str) -> Vec<&ColorEntry> {
        filter_by_name(&self.colors, needle, |e| &e.name)
    }

    /// Command filtering matches the name or the description, like the
    /// original search box.
    pub fn filter_commands(&self, needle: &str) -> Vec<&CommandDescriptor> {
        let needle = needle.to_lowercase();
        self.commands
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn find_command(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn taming_for(&self, creature_name: &str) -> Option<&TamingEntry> {
        self.taming
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(creature_name))
    }
}

fn filter_by_name<'a, T>(
    entries: &'a [T],
    needle: &str,
    name: impl Fn(&T) -> &str,
) -> Vec<&'a T> {
    let needle = needle.to_lowercase();
    entries
        .iter()
        .filter(|e| name(e).to_lowercase().contains(&needle))
        .collect()
}

fn load_cache<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let Ok(bytes) = fs::read(path) else {
        return Vec::new();
    };
    serde_json::from_slice(&bytes).unwrap_or_default()
}
