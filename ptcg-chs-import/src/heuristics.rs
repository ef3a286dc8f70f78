//! Text-matching rules over the localized vendor strings.
//!
//! These are brittle by nature. Each rule lives behind one function so a
//! correction touches one place; nothing else in the crate matches on these
//! strings directly.

/// Marks staff-only or unreleased variants in `rarityText`.
pub const STAFF_MARKER: char = '☆';

/// Opening sentence of the rules reminder printed on every Pokémon Tool.
pub const TOOL_RULE_PREFIX: &str = "宝可梦道具可以附着在自己的宝可梦身上";

/// Rules-reminder sentences removed from trainer and special energy text.
///
/// Order matters: the full supporter sentence goes before its unpunctuated
/// variant.
const RULE_REMINDERS: &[&str] = &[
    "在自己的回合可以使用任意张物品卡。",
    "宝可梦道具可以附着在自己的宝可梦身上。每只宝可梦身上只可以附着1张宝可梦道具，并保持附加状态。",
    "在自己的回合只可以使用1张支援者卡。",
    "在自己的回合只可以将1张竞技场卡放到战斗区旁。如果有别的名称的竞技场卡被放入场上，则将此卡放入弃牌区。",
    "在1副卡组中只能放入1张同名的◇（棱镜之星）卡。这张卡牌不会被放入弃牌区，而会被放入放逐区。",
    "在自己的回合只可以使用1张支援者卡",
];

/// Edition qualifiers stripped from the front of set display names.
const EDITION_PREFIXES: &[&str] = &["强化包", "补充包"];

/// Characters that may separate an edition qualifier from the set name.
const EDITION_SEPARATORS: &[char] = &['·', ' ', '　', ':', '：', '-'];

pub fn is_staff_variant(rarity_text: &str) -> bool {
    rarity_text.contains(STAFF_MARKER)
}

/// Drop the staff marker so the remaining text decodes as a rarity.
pub fn strip_staff_marker(rarity_text: &str) -> String {
    rarity_text.replace(STAFF_MARKER, "")
}

pub fn is_tool_rule_text(rule_text: &str) -> bool {
    rule_text.starts_with(TOOL_RULE_PREFIX)
}

/// Remove rules reminders and `|` separators from a rule text.
pub fn strip_rule_reminders(rule_text: &str) -> String {
    let mut text = rule_text.to_string();
    for reminder in RULE_REMINDERS {
        text = text.replace(reminder, "");
    }
    text.replace('|', "")
}

/// `基本草能量【G】`-style names lose their brackets, keeping the qualifier.
pub fn strip_energy_name_brackets(name: &str) -> String {
    if name.contains('【') {
        name.replace(['【', '】'], "")
    } else {
        name.to_string()
    }
}

/// Strip a leading edition qualifier (and one separator after it).
///
/// Returns `None` when the name carries no qualifier.
pub fn trim_edition_prefix(name: &str) -> Option<String> {
    let mut trimmed = None;
    let mut current = name;
    for prefix in EDITION_PREFIXES {
        if let Some(rest) = current.strip_prefix(prefix) {
            let rest = rest
                .strip_prefix(|c: char| EDITION_SEPARATORS.contains(&c))
                .unwrap_or(rest);
            current = rest;
            trimmed = Some(rest.to_string());
        }
    }
    trimmed
}

#[cfg(test)]
#[path = "tests/heuristics_tests.rs"]
mod tests;
