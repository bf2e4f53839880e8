use crate::catalog::{Catalogs, CommandDescriptor};

/// One selectable entry of a Choice slot. `value` is the machine identifier
/// emitted into the command; the display label is the render fallback when a
/// catalog carries no separate identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub display: String,
    pub value: Option<String>,
}

impl ChoiceOption {
    pub fn new(display: impl Into<String>, value: Option<String>) -> Self {
        Self {
            display: display.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Integer,
    Boolean,
    Text,
    Choice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    #[default]
    Plain,
    /// The stored integer encodes tenths; rendered as `value/10` with one
    /// decimal digit (the gamma slider).
    Tenths,
}

/// Current value of one slot. A Choice holds the index of the selected
/// option; `None` means nothing is selected and the command cannot render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    Integer(i64),
    Boolean(bool),
    Text(String),
    Choice(Option<usize>),
}

/// One user-editable parameter derived from a command descriptor. Slot lists
/// are rebuilt from scratch whenever the selected command changes; nothing
/// here persists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSlot {
    pub label: String,
    pub kind: SlotKind,
    pub range: Option<(i64, i64)>,
    pub choices: Vec<ChoiceOption>,
    pub default: SlotValue,
    pub format: ValueFormat,
    pub editable: bool,
}

impl ParameterSlot {
    fn integer(label: &str, lo: i64, hi: i64) -> Self {
        Self::integer_with_default(label, lo, hi, lo.max(0))
    }

    fn integer_with_default(label: &str, lo: i64, hi: i64, default: i64) -> Self {
        Self {
            label: label.to_string(),
            kind: SlotKind::Integer,
            range: Some((lo, hi)),
            choices: Vec::new(),
            default: SlotValue::Integer(default),
            format: ValueFormat::Plain,
            editable: true,
        }
    }

    fn boolean(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: SlotKind::Boolean,
            range: None,
            choices: Vec::new(),
            default: SlotValue::Boolean(false),
            format: ValueFormat::Plain,
            editable: true,
        }
    }

    fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: SlotKind::Text,
            range: None,
            choices: Vec::new(),
            default: SlotValue::Text(String::new()),
            format: ValueFormat::Plain,
            editable: true,
        }
    }

    fn choice(label: &str, choices: Vec<ChoiceOption>) -> Self {
        let default = if choices.is_empty() { None } else { Some(0) };
        Self {
            label: label.to_string(),
            kind: SlotKind::Choice,
            range: None,
            choices,
            default: SlotValue::Choice(default),
            format: ValueFormat::Plain,
            editable: true,
        }
    }

    /// The structurally fixed slot of SpawnExactDino: always renders as a
    /// literal 0 and rejects edits.
    fn fixed_zero(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: SlotKind::Integer,
            range: Some((0, 0)),
            choices: Vec::new(),
            default: SlotValue::Integer(0),
            format: ValueFormat::Plain,
            editable: false,
        }
    }

    fn tenths(mut self) -> Self {
        self.format = ValueFormat::Tenths;
        self
    }
}

enum ResolveRule {
    /// Hand-authored slot sequence for one command name.
    Named {
        name: &'static str,
        build: fn(&Catalogs) -> Vec<ParameterSlot>,
    },
    /// Fixed slot sequence keyed on the shape of the syntax template.
    Shape {
        matches: fn(&CommandDescriptor) -> bool,
        build: fn(&Catalogs) -> Vec<ParameterSlot>,
    },
}

// Priority order matters: named overrides win over the template shape, the
// generic placeholder grammar is the fallback for everything else.
const RULES: &[ResolveRule] = &[
    ResolveRule::Named {
        name: "KillAOE",
        build: kill_aoe_slots,
    },
    ResolveRule::Named {
        name: "SetGamma",
        build: set_gamma_slots,
    },
    ResolveRule::Named {
        name: "ClearWater",
        build: clear_water_slots,
    },
    ResolveRule::Named {
        name: "SpawnExactDino",
        build: spawn_exact_dino_slots,
    },
    ResolveRule::Shape {
        matches: has_gfi_shape,
        build: give_item_slots,
    },
];

/// Resolve a command descriptor into its ordered parameter slots. Pure: the
/// same descriptor and catalogs always produce the same slot list, and a
/// template without placeholders resolves to an empty list.
pub fn resolve_parameters(
    descriptor: &CommandDescriptor,
    catalogs: &Catalogs,
) -> Vec<ParameterSlot> {
    for rule in RULES {
        match rule {
            ResolveRule::Named { name, build } if descriptor.name == *name => {
                return build(catalogs);
            }
            ResolveRule::Shape { matches, build } if matches(descriptor) => {
                return build(catalogs);
            }
            _ => {}
        }
    }

    generic_slots(&descriptor.syntax)
}

const KILL_AOE_CATEGORIES: &[&str] = &["pawns", "dinos", "tamed", "players", "wild", "structures"];

fn kill_aoe_slots(_catalogs: &Catalogs) -> Vec<ParameterSlot> {
    let categories = KILL_AOE_CATEGORIES
        .iter()
        .map(|c| ChoiceOption::new(*c, Some((*c).to_string())))
        .collect();
    vec![
        ParameterSlot::choice("Category", categories),
        ParameterSlot::integer("Radius", 0, 9999),
    ]
}

fn set_gamma_slots(_catalogs: &Catalogs) -> Vec<ParameterSlot> {
    // 0..=60 in tenths; default 10 renders as 1.0.
    vec![ParameterSlot::integer_with_default("Value", 0, 60, 10).tenths()]
}

fn clear_water_slots(_catalogs: &Catalogs) -> Vec<ParameterSlot> {
    vec![ParameterSlot::boolean("ClearWater")]
}

fn spawn_exact_dino_slots(catalogs: &Catalogs) -> Vec<ParameterSlot> {
    vec![
        ParameterSlot::choice("Blueprint", creature_choices(catalogs)),
        ParameterSlot::choice("Saddle Blueprint", item_choices(catalogs)),
        ParameterSlot::integer("Saddle Quality", 0, 9999),
        ParameterSlot::integer("Base Level", 0, 9999),
        ParameterSlot::integer("Extra Levels", 0, 9999),
        ParameterSlot::text("Base Stats"),
        ParameterSlot::text("Added Stats"),
        ParameterSlot::text("Name"),
        ParameterSlot::boolean("Cloned"),
        ParameterSlot::boolean("Neutered"),
        ParameterSlot::text("Tamed Date"),
        ParameterSlot::text("Uploaded From"),
        ParameterSlot::text("Imprinter Name"),
        ParameterSlot::text("Imprinter ID"),
        ParameterSlot::integer("Imprint Quality", 0, 100),
        ParameterSlot::fixed_zero("Fixed 0"),
        ParameterSlot::text("Region Colors"),
        ParameterSlot::integer("Creature ID", -9999, 9999),
        ParameterSlot::integer("Experience", -9999, 9999),
        ParameterSlot::integer("Spawn Distance", -9999, 9999),
        ParameterSlot::integer("Spawn Y", -9999, 9999),
        ParameterSlot::integer("Spawn Z", -9999, 9999),
    ]
}

fn has_gfi_shape(descriptor: &CommandDescriptor) -> bool {
    descriptor
        .syntax
        .split_whitespace()
        .nth(1)
        .is_some_and(|token| token.eq_ignore_ascii_case("GFI"))
}

fn give_item_slots(catalogs: &Catalogs) -> Vec<ParameterSlot> {
    vec![
        ParameterSlot::choice("Blueprint / GFI", item_choices(catalogs)),
        ParameterSlot::integer("Amount", 1, 9999),
        ParameterSlot::integer("Quality", 0, 100),
        ParameterSlot::boolean("Force Blueprint"),
    ]
}

const INTEGER_MARKERS: &[&str] = &["Amount", "Level", "Quality", "Stats"];
const BOOLEAN_PREFIXES: &[&str] = &["true", "false", "prevent", "cloned", "neutered"];

fn generic_slots(syntax: &str) -> Vec<ParameterSlot> {
    placeholders(syntax)
        .into_iter()
        .map(classify_placeholder)
        .collect()
}

fn classify_placeholder(name: &str) -> ParameterSlot {
    if INTEGER_MARKERS.iter().any(|marker| name.contains(marker)) {
        return ParameterSlot::integer(name, 0, 999_999);
    }

    let lower = name.to_lowercase();
    if BOOLEAN_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        return ParameterSlot::boolean(name);
    }

    // Unclassifiable placeholders still succeed as free text.
    ParameterSlot::text(name)
}

/// Extract `<...>` placeholder names left to right.
fn placeholders(syntax: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = syntax;
    while let Some(open) = rest.find('<') {
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('>') else {
            break;
        };
        out.push(&tail[..close]);
        rest = &tail[close + 1..];
    }
    out
}

fn item_choices(catalogs: &Catalogs) -> Vec<ChoiceOption> {
    catalogs
        .items()
        .iter()
        .map(|item| ChoiceOption::new(item.name.clone(), Some(item.id.clone())))
        .collect()
}

fn creature_choices(catalogs: &Catalogs) -> Vec<ChoiceOption> {
    catalogs
        .creatures()
        .iter()
        .map(|creature| ChoiceOption::new(creature.name.clone(), Some(creature.class.clone())))
        .collect()
}

/// Default values for a freshly resolved slot list, in slot order.
pub(crate) fn default_values(slots: &[ParameterSlot]) -> Vec<SlotValue> {
    slots.iter().map(|slot| slot.default.clone()).collect()
}
