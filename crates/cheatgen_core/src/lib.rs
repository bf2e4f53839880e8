mod catalog;
mod error;
mod favorites;
mod render;
mod resolver;
mod session;

pub use catalog::{
    COLORS_CACHE_FILE, COMMANDS_CACHE_FILE, CREATURES_CACHE_FILE, Catalogs, ColorEntry,
    CommandDescriptor, CreatureEntry, ITEMS_CACHE_FILE, ItemEntry, LOCATIONS_CACHE_FILE,
    LocationEntry, TAMING_CACHE_FILE, TamingEntry,
};
pub use error::{CoreError, CoreErrorCode};
pub use favorites::{FAVORITES_FILE, FavoriteEntry, FavoritesStore};
pub use render::{render, render_dino_color, render_give_item, render_summon, render_teleport};
pub use resolver::{
    ChoiceOption, ParameterSlot, SlotKind, SlotValue, ValueFormat, resolve_parameters,
};
pub use session::CommandSession;
