use crate::catalog::{ColorEntry, CommandDescriptor, CreatureEntry, ItemEntry, LocationEntry};
use crate::resolver::{ParameterSlot, SlotValue, ValueFormat};

const CLEAR_WATER_COMMAND: &str = "ClearWater";
const FOG_SETTING: &str = "r.VolumetricFog";
const COLOR_REGION_MAX: u8 = 5;

/// Render the current slot values of a command into the literal console
/// string. Absent inputs never fail: no descriptor, an unselected choice, or
/// a slots/values mismatch all yield the empty string, which callers treat
/// as "nothing to emit".
pub fn render(
    descriptor: Option<&CommandDescriptor>,
    slots: &[ParameterSlot],
    values: &[SlotValue],
) -> String {
    let Some(descriptor) = descriptor else {
        return String::new();
    };

    // The fog toggle ignores its syntax template entirely and emits the
    // engine setting directly. Checked means fog off, so the usual boolean
    // polarity is inverted here.
    if descriptor.name == CLEAR_WATER_COMMAND {
        return match values.first() {
            Some(SlotValue::Boolean(checked)) => {
                let state = if *checked { "0" } else { "1" };
                format!("{FOG_SETTING} {state}")
            }
            _ => String::new(),
        };
    }

    if slots.len() != values.len() {
        return String::new();
    }

    let mut parts: Vec<String> = descriptor
        .syntax
        .split_whitespace()
        .take(2)
        .map(ToOwned::to_owned)
        .collect();

    for (slot, value) in slots.iter().zip(values) {
        match value {
            SlotValue::Integer(v) => parts.push(format_integer(slot, *v)),
            SlotValue::Boolean(b) => parts.push(if *b { "1" } else { "0" }.to_string()),
            SlotValue::Text(text) => {
                let trimmed = text.trim();
                // Empty text contributes no token at all.
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_string());
                }
            }
            SlotValue::Choice(selected) => {
                let Some(option) = selected.and_then(|index| slot.choices.get(index)) else {
                    return String::new();
                };
                parts.push(option.value.clone().unwrap_or_else(|| option.display.clone()));
            }
        }
    }

    parts.join(" ")
}

fn format_integer(slot: &ParameterSlot, value: i64) -> String {
    match slot.format {
        ValueFormat::Plain => value.to_string(),
        ValueFormat::Tenths => format!("{:.1}", value as f64 / 10.0),
    }
}

/// `cheat gfi <id> <amount> <quality> <blueprint>`.
pub fn render_give_item(
    item: Option<&ItemEntry>,
    amount: i64,
    quality: i64,
    blueprint: bool,
) -> String {
    match item {
        Some(item) => format!(
            "cheat gfi {} {} {} {}",
            item.id,
            amount,
            quality,
            u8::from(blueprint)
        ),
        None => String::new(),
    }
}

pub fn render_summon(creature: Option<&CreatureEntry>) -> String {
    match creature {
        Some(creature) => format!("admincheat Summon {}", creature.class),
        None => String::new(),
    }
}

/// The location code carries the coordinate triple; anything that does not
/// split into exactly three tokens renders as nothing.
pub fn render_teleport(location: Option<&LocationEntry>) -> String {
    let Some(location) = location else {
        return String::new();
    };
    let coords: Vec<&str> = location.code.split_whitespace().collect();
    match coords.as_slice() {
        [x, y, z] => format!("cheat setplayerpos {x} {y} {z}"),
        _ => String::new(),
    }
}

pub fn render_dino_color(region: u8, color: Option<&ColorEntry>) -> String {
    if region > COLOR_REGION_MAX {
        return String::new();
    }
    match color {
        Some(color) => format!("cheat setTargetDinoColor {} {}", region, color.id),
        None => String::new(),
    }
}
