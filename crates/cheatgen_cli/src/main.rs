use std::path::PathBuf;
use std::process;

use cheatgen_core::{
    Catalogs, CommandSession, FAVORITES_FILE, FavoritesStore, SlotKind, SlotValue,
    render_dino_color, render_give_item, render_summon, render_teleport,
};
use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Directory holding the cached JSON catalogs and favorites.json.
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the item catalog.
    Items {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List the creature catalog.
    Creatures {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List the teleport location catalog.
    Locations {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List the dino color palette.
    Colors {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List the console command catalog.
    Commands {
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show taming info for one creature.
    Taming {
        #[arg(value_name = "CREATURE")]
        name: String,
    },
    /// Build a give-item command for an item.
    Gfi {
        #[arg(value_name = "ITEM")]
        item: String,
        #[arg(long, default_value_t = 1)]
        amount: i64,
        #[arg(long, default_value_t = 0)]
        quality: i64,
        /// Spawn the blueprint instead of the raw item.
        #[arg(long)]
        blueprint: bool,
    },
    /// Build a creature spawn command.
    Summon {
        #[arg(value_name = "CREATURE")]
        creature: String,
    },
    /// Build a teleport command for a named location.
    Teleport {
        #[arg(value_name = "LOCATION")]
        location: String,
    },
    /// Build a dino color command for a region and color.
    DinoColor {
        #[arg(value_name = "REGION")]
        region: u8,
        #[arg(value_name = "COLOR")]
        color: String,
    },
    /// Resolve a console command's parameters and build the command string.
    Build {
        #[arg(value_name = "COMMAND")]
        command: String,
        /// Set a parameter, e.g. --set "Radius=2000" or --set "Category=wild".
        #[arg(long = "set", value_name = "LABEL=VALUE")]
        set: Vec<String>,
        /// List the resolved parameter slots instead of rendering.
        #[arg(long = "show-params")]
        show_params: bool,
    },
    /// Manage saved favorite commands.
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
}

#[derive(Debug, Subcommand)]
enum FavAction {
    /// Save a command string as a favorite.
    Add {
        #[arg(value_name = "COMMAND")]
        command: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "Commands")]
        category: String,
    },
    /// Remove a favorite by its command string.
    Remove {
        #[arg(value_name = "COMMAND")]
        command: String,
    },
    /// List saved favorites.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let catalogs = Catalogs::load_from_dir(&cli.data_dir).unwrap_or_else(|e| {
        eprintln!("Error loading catalogs from {}: {e}", cli.data_dir.display());
        process::exit(1);
    });

    match cli.command {
        Command::Items { filter, json } => {
            let entries = catalogs.filter_items(filter.as_deref().unwrap_or(""));
            if json {
                print_json(&entries);
            } else {
                for item in entries {
                    println!("{}\t{}", item.name, item.id);
                }
            }
        }
        Command::Creatures { filter, json } => {
            let entries = catalogs.filter_creatures(filter.as_deref().unwrap_or(""));
            if json {
                print_json(&entries);
            } else {
                for creature in entries {
                    println!("{}\t{}", creature.name, creature.class);
                }
            }
        }
        Command::Locations { filter, json } => {
            let entries = catalogs.filter_locations(filter.as_deref().unwrap_or(""));
            if json {
                print_json(&entries);
            } else {
                for location in entries {
                    println!("{}\t{}", location.name, location.code);
                }
            }
        }
        Command::Colors { filter, json } => {
            let entries = catalogs.filter_colors(filter.as_deref().unwrap_or(""));
            if json {
                print_json(&entries);
            } else {
                for color in entries {
                    println!("{}\t{}\t{}", color.name, color.id, color.hex);
                }
            }
        }
        Command::Commands { filter, json } => {
            let entries = catalogs.filter_commands(filter.as_deref().unwrap_or(""));
            if json {
                print_json(&entries);
            } else {
                for command in entries {
                    println!("{}\t{}", command.name, command.description);
                }
            }
        }
        Command::Taming { name } => {
            let Some(entry) = catalogs.taming_for(&name) else {
                eprintln!("no taming data for '{name}'");
                process::exit(1);
            };
            println!("Tame type: {}", entry.tame_type);
            println!("Feed: {}", entry.feed);
            println!("Notes: {}", entry.notes);
        }
        Command::Gfi {
            item,
            amount,
            quality,
            blueprint,
        } => {
            let entry = pick_entry("item", &item, catalogs.items(), |i| &i.name);
            emit(render_give_item(Some(entry), amount, quality, blueprint));
        }
        Command::Summon { creature } => {
            let entry = pick_entry("creature", &creature, catalogs.creatures(), |c| &c.name);
            emit(render_summon(Some(entry)));
        }
        Command::Teleport { location } => {
            let entry = pick_entry("location", &location, catalogs.locations(), |l| &l.name);
            emit(render_teleport(Some(entry)));
        }
        Command::DinoColor { region, color } => {
            let entry = pick_entry("color", &color, catalogs.colors(), |c| &c.name);
            emit(render_dino_color(region, Some(entry)));
        }
        Command::Build {
            command,
            set,
            show_params,
        } => {
            let descriptor =
                pick_entry("command", &command, catalogs.commands(), |c| &c.name).clone();
            let mut session = CommandSession::new();
            session.select(Some(&descriptor), &catalogs);

            for pair in &set {
                apply_edit(&mut session, pair);
            }

            if show_params {
                print_params(&session);
                return;
            }

            emit(session.render());
        }
        Command::Fav { action } => {
            let mut store = FavoritesStore::load(&cli.data_dir.join(FAVORITES_FILE));
            match action {
                FavAction::Add {
                    command,
                    description,
                    category,
                } => {
                    let description = description.unwrap_or_else(|| command.clone());
                    let added = store
                        .add(command, description, category)
                        .unwrap_or_else(|e| {
                            eprintln!("Error saving favorites: {e}");
                            process::exit(1);
                        });
                    if !added {
                        eprintln!("already a favorite");
                        process::exit(1);
                    }
                }
                FavAction::Remove { command } => {
                    let removed = store.remove(&command).unwrap_or_else(|e| {
                        eprintln!("Error saving favorites: {e}");
                        process::exit(1);
                    });
                    if !removed {
                        eprintln!("no favorite with that command");
                        process::exit(1);
                    }
                }
                FavAction::List { category, json } => {
                    let entries = store.entries(category.as_deref());
                    if json {
                        print_json(&entries);
                    } else {
                        for entry in entries {
                            println!("{}\t{}\t{}", entry.category, entry.description, entry.command);
                        }
                    }
                }
            }
        }
    }
}

/// Resolve a catalog query: exact name match first, then a unique
/// case-insensitive substring match.
fn pick_entry<'a, T>(kind: &str, query: &str, all: &'a [T], name: impl Fn(&T) -> &str) -> &'a T {
    if let Some(hit) = all.iter().find(|e| name(e).eq_ignore_ascii_case(query)) {
        return hit;
    }

    let needle = query.to_lowercase();
    let hits: Vec<&T> = all
        .iter()
        .filter(|e| name(e).to_lowercase().contains(&needle))
        .collect();
    match hits.as_slice() {
        [only] => only,
        [] => {
            eprintln!("no {kind} matches '{query}'");
            process::exit(1);
        }
        many => {
            eprintln!("'{query}' is ambiguous: {} {kind} entries match", many.len());
            process::exit(1);
        }
    }
}

fn apply_edit(session: &mut CommandSession, pair: &str) {
    let Some((label, raw)) = pair.split_once('=') else {
        eprintln!("--set expects LABEL=VALUE, got '{pair}'");
        process::exit(1);
    };
    let label = label.trim();

    let Some(index) = session
        .slots()
        .iter()
        .position(|slot| slot.label.eq_ignore_ascii_case(label))
    else {
        eprintln!("command has no parameter named '{label}'");
        process::exit(1);
    };

    let slot = &session.slots()[index];
    let value = match slot.kind {
        SlotKind::Integer => {
            let parsed = raw.trim().parse::<i64>().unwrap_or_else(|_| {
                eprintln!("'{raw}' is not an integer for parameter '{label}'");
                process::exit(1);
            });
            SlotValue::Integer(parsed)
        }
        SlotKind::Boolean => SlotValue::Boolean(parse_bool(raw, label)),
        SlotKind::Text => SlotValue::Text(raw.to_string()),
        SlotKind::Choice => {
            let selected = slot
                .choices
                .iter()
                .position(|option| {
                    option.display.eq_ignore_ascii_case(raw.trim())
                        || option
                            .value
                            .as_deref()
                            .is_some_and(|v| v.eq_ignore_ascii_case(raw.trim()))
                })
                .unwrap_or_else(|| {
                    eprintln!("'{raw}' is not an option for parameter '{label}'");
                    process::exit(1);
                });
            SlotValue::Choice(Some(selected))
        }
    };

    session.set_value(index, value).unwrap_or_else(|e| {
        eprintln!("Error setting '{label}': {e}");
        process::exit(1);
    });
}

fn parse_bool(raw: &str, label: &str) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => true,
        "0" | "false" | "no" => false,
        _ => {
            eprintln!("'{raw}' is not a boolean for parameter '{label}'");
            process::exit(1);
        }
    }
}

fn print_params(session: &CommandSession) {
    for (slot, value) in session.slots().iter().zip(session.values()) {
        let kind = match slot.kind {
            SlotKind::Integer => "integer",
            SlotKind::Boolean => "boolean",
            SlotKind::Text => "text",
            SlotKind::Choice => "choice",
        };
        let mut line = format!("{}\t{kind}", slot.label);
        if let Some((lo, hi)) = slot.range {
            line.push_str(&format!("\t{lo}..={hi}"));
        }
        if !slot.choices.is_empty() {
            line.push_str(&format!("\t{} options", slot.choices.len()));
        }
        if !slot.editable {
            line.push_str("\tfixed");
        }
        line.push_str(&format!("\t= {}", describe_value(slot, value)));
        println!("{line}");
    }
}

fn describe_value(slot: &cheatgen_core::ParameterSlot, value: &SlotValue) -> String {
    match value {
        SlotValue::Integer(v) => v.to_string(),
        SlotValue::Boolean(b) => b.to_string(),
        SlotValue::Text(text) => text.clone(),
        SlotValue::Choice(None) => "(none)".to_string(),
        SlotValue::Choice(Some(index)) => slot
            .choices
            .get(*index)
            .map(|option| option.display.clone())
            .unwrap_or_else(|| "(none)".to_string()),
    }
}

/// Print the rendered command; an empty render means nothing to emit and
/// exits non-zero so scripts can tell the difference.
fn emit(rendered: String) {
    if rendered.is_empty() {
        process::exit(1);
    }
    println!("{rendered}");
}

fn print_json<T: serde::Serialize>(entries: &T) {
    let json = serde_json::to_value(entries).unwrap_or(JsonValue::Null);
    let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
        eprintln!("Error rendering JSON output: {e}");
        process::exit(1);
    });
    println!("{rendered}");
}
