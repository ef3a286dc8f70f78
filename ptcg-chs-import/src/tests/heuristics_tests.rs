use super::*;

#[test]
fn staff_marker_detected_anywhere() {
    assert!(is_staff_variant("☆SR"));
    assert!(is_staff_variant("SR☆"));
    assert!(!is_staff_variant("SR"));
    assert_eq!(strip_staff_marker("☆SR"), "SR");
}

#[test]
fn tool_prefix_must_lead() {
    assert!(is_tool_rule_text(
        "宝可梦道具可以附着在自己的宝可梦身上。每只宝可梦身上只可以附着1张宝可梦道具，并保持附加状态。|附着了这张卡牌的宝可梦，HP+30。"
    ));
    assert!(!is_tool_rule_text("从牌库上方抽取3张卡牌。宝可梦道具可以附着在自己的宝可梦身上"));
}

#[test]
fn rule_reminders_and_pipes_removed() {
    let raw = "从自己的牌库上方抽取3张卡牌。|在自己的回合可以使用任意张物品卡。";
    assert_eq!(strip_rule_reminders(raw), "从自己的牌库上方抽取3张卡牌。");

    let supporter = "将手牌放回牌库。|在自己的回合只可以使用1张支援者卡。";
    assert_eq!(strip_rule_reminders(supporter), "将手牌放回牌库。");

    let unpunctuated = "抽2张。在自己的回合只可以使用1张支援者卡";
    assert_eq!(strip_rule_reminders(unpunctuated), "抽2张。");
}

#[test]
fn energy_brackets_stripped() {
    assert_eq!(strip_energy_name_brackets("基本草能量【G】"), "基本草能量G");
    assert_eq!(strip_energy_name_brackets("基本草能量"), "基本草能量");
}

#[test]
fn edition_prefix_trimmed_with_one_separator() {
    assert_eq!(
        trim_edition_prefix("强化包·天空的怒吼").as_deref(),
        Some("天空的怒吼")
    );
    assert_eq!(trim_edition_prefix("补充包 ：X").as_deref(), Some("：X"));
    assert_eq!(trim_edition_prefix("补充包究极之光").as_deref(), Some("究极之光"));
}

#[test]
fn edition_prefix_only_at_start() {
    assert_eq!(trim_edition_prefix("太阳&月亮 强化包"), None);
    assert_eq!(trim_edition_prefix("太阳&月亮"), None);
}
