use super::*;
use ptcg_chs_core::{Label, Mechanic, Rarity, Stage};
use serde_json::{Value, json};

fn card(value: Value) -> RawCard {
    serde_json::from_value(value).unwrap()
}

fn precedence() -> SymbolPrecedence {
    SymbolPrecedence::from_chronological(["CSM1aC", "CSM1bC", "PROMO"])
}

fn ctx(symbol: &str) -> SetContext<'_> {
    SetContext {
        symbol,
        series: Series::SunMoon,
    }
}

fn pikachu() -> Value {
    json!({
        "name": "皮卡丘",
        "cardType": "1",
        "pokemonType": "",
        "image": "img\\CSM1aC\\060.png",
        "details": {
            "rarityText": "C",
            "collectionNumber": "060/128",
            "illustratorName": ["Mitsuhiro Arita"],
            "regulationMarkText": "A",
            "attribute": "4",
            "evolveText": "基础",
            "hp": 60,
            "weaknessType": "6",
            "weaknessFormula": "×2",
            "retreatCost": 1,
            "yorenCode": "025",
            "abilityItemList": [
                { "abilityName": "电击", "abilityText": "none", "abilityDamage": "20", "abilityCost": "4" },
                { "abilityName": "none", "abilityText": "none", "abilityDamage": "none", "abilityCost": "" },
                { "abilityName": "撞击", "abilityText": "抛硬币。", "abilityDamage": "10+", "abilityCost": "" },
            ],
        },
    })
}

#[test]
fn collection_number_forms() {
    assert_eq!(
        split_collection_number("060/128"),
        (Some("060".into()), Some("128".into()))
    );
    assert_eq!(split_collection_number("GRA"), (Some("GRA".into()), None));
    assert_eq!(split_collection_number("SM-P"), (None, Some("SM-P".into())));
    assert_eq!(split_collection_number("S-P"), (None, Some("S-P".into())));
    assert_eq!(split_collection_number("???"), (None, None));
    assert_eq!(split_collection_number("1/2/3"), (None, None));
}

#[test]
fn pokemon_card_normalizes() {
    let card = normalize_card(&card(pikachu()), ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();

    assert_eq!(card.name, "皮卡丘");
    assert_eq!(card.card_type(), CardType::Pokemon);
    assert_eq!(card.card_no(), Some("060"));
    assert_eq!(card.collection.set_collect_num.as_deref(), Some("128"));
    assert_eq!(card.collection.set_symbol, "CSM1aC");
    assert_eq!(card.collection.artist_name.as_deref(), Some("Mitsuhiro Arita"));
    assert_eq!(card.collection.rarity, Rarity::Common);
    assert_eq!(card.regulation_mark.as_deref(), Some("A"));
    assert_eq!(card.image_path, "img\\CSM1aC\\060.png");

    let attr = card.kind.pokemon().unwrap();
    assert_eq!(attr.energy_type, Energy::Lightning);
    assert_eq!(attr.stage, Stage::Basic);
    assert_eq!(attr.hp, 60);
    assert_eq!(attr.retreat_cost, 1);
    assert_eq!(attr.pokedex.as_deref(), Some("025"));
    assert_eq!(attr.weakness.as_ref().unwrap().weakness_type, Energy::Fighting);
    assert!(attr.resistance.is_none());
    assert!(attr.abilities.is_empty());
}

#[test]
fn empty_attacks_dropped_and_empty_cost_is_zero() {
    let card = normalize_card(&card(pikachu()), ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    let attacks = &card.kind.pokemon().unwrap().attacks;
    assert_eq!(attacks.len(), 2);
    assert_eq!(attacks[0].text, "");
    assert_eq!(attacks[0].cost, vec![Energy::Lightning]);
    assert_eq!(attacks[1].cost, vec![Energy::Zero]);
    assert_eq!(attacks[1].damage, "10+");
}

#[test]
fn pokemon_text_lists_attacks() {
    let card = normalize_card(&card(pikachu()), ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    assert_eq!(card.text, "电击\t20\n\nnone\t\n\n撞击\t10+\n抛硬币。\n");
}

#[test]
fn ability_shapes_both_read() {
    let mut old = pikachu();
    old["details"]["featureName"] = json!("静电");
    old["details"]["featureText"] = json!("麻痹。");
    let single = normalize_card(&card(old), ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    let abilities = &single.kind.pokemon().unwrap().abilities;
    assert_eq!(abilities.len(), 1);
    assert!(single.text.starts_with("静电\n麻痹。\n"));

    let mut new = pikachu();
    new["details"]["cardFeatureItemList"] = json!([
        { "featureName": "一", "featureDesc": "甲" },
        { "featureName": "二", "featureDesc": "乙" },
    ]);
    let listed = normalize_card(&card(new), ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    let names: Vec<&str> = listed
        .kind
        .pokemon()
        .unwrap()
        .abilities
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, ["一", "二"]);
}

#[test]
fn staff_variant_skipped() {
    let mut raw = pikachu();
    raw["details"]["rarityText"] = json!("☆C");
    assert!(
        normalize_card(&card(raw), ctx("CSM1aC"), &precedence())
            .unwrap()
            .is_none()
    );
}

#[test]
fn reprint_filed_under_earliest_symbol() {
    let mut raw = pikachu();
    raw["details"]["commodityList"] = json!([
        { "commodityCode": "CSM1bC" },
        { "commodityCode": "CSM1aC" },
    ]);
    let card = normalize_card(&card(raw), ctx("CSM1bC"), &precedence())
        .unwrap()
        .unwrap();
    assert_eq!(card.collection.set_symbol, "CSM1aC");
}

#[test]
fn unknown_reprint_symbol_is_fatal() {
    let mut raw = pikachu();
    raw["details"]["commodityList"] = json!([{ "commodityCode": "NOPE" }]);
    let err = normalize_card(&card(raw), ctx("CSM1aC"), &precedence()).unwrap_err();
    assert!(matches!(err, NormalizeError::UnknownSymbol { ref symbol, .. } if symbol == "NOPE"));
}

#[test]
fn missing_required_fields() {
    let mut raw = pikachu();
    raw["details"]
        .as_object_mut()
        .unwrap()
        .remove("collectionNumber");
    let err = normalize_card(&card(raw), ctx("CSM1aC"), &precedence()).unwrap_err();
    assert!(matches!(
        err,
        NormalizeError::MissingField {
            field: "collectionNumber",
            ..
        }
    ));

    let mut raw = pikachu();
    raw["details"].as_object_mut().unwrap().remove("rarityText");
    let err = normalize_card(&card(raw), ctx("CSM1aC"), &precedence()).unwrap_err();
    assert!(matches!(err, NormalizeError::MissingField { field: "rarityText", .. }));
}

#[test]
fn unknown_code_is_fatal_and_named() {
    let mut raw = pikachu();
    raw["details"]["evolveText"] = json!("3阶进化");
    let err = normalize_card(&card(raw), ctx("CSM1aC"), &precedence()).unwrap_err();
    assert!(err.to_string().contains("3阶进化"));
    assert!(err.to_string().contains("CSM1aC 060/128"));
}

#[test]
fn retreat_cost_defaults_to_zero() {
    let mut raw = pikachu();
    raw["details"].as_object_mut().unwrap().remove("retreatCost");
    let card = normalize_card(&card(raw), ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    assert_eq!(card.kind.pokemon().unwrap().retreat_cost, 0);
}

#[test]
fn trainer_text_loses_reminders() {
    let raw = card(json!({
        "name": "精灵球",
        "cardType": "2",
        "details": {
            "trainerType": "1",
            "ruleText": "抛1次硬币。|在自己的回合可以使用任意张物品卡。",
            "rarityText": "U",
            "collectionNumber": "120/128",
        },
    }));
    let card = normalize_card(&raw, ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    assert_eq!(card.card_type(), CardType::Item);
    assert_eq!(card.text, "抛1次硬币。\n");
    assert!(card.kind.pokemon().is_none());
    assert!(card.kind.energy().is_none());
}

#[test]
fn tool_classified_by_rule_prefix() {
    let raw = card(json!({
        "name": "讲究头带",
        "cardType": "2",
        "details": {
            "trainerType": "1",
            "ruleText": "宝可梦道具可以附着在自己的宝可梦身上。每只宝可梦身上只可以附着1张宝可梦道具，并保持附加状态。|伤害+30。",
            "rarityText": "U",
            "collectionNumber": "121/128",
        },
    }));
    let card = normalize_card(&raw, ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    assert_eq!(card.card_type(), CardType::Tool);
    assert_eq!(card.text, "伤害+30。\n");
}

#[test]
fn basic_energy_name_and_payload() {
    let raw = card(json!({
        "name": "基本雷能量【L】",
        "cardType": "3",
        "energyType": "1",
        "details": {
            "rarityText": "无标记",
            "collectionNumber": "LIG",
            "yorenCode": "Y460",
        },
    }));
    let card = normalize_card(&raw, ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    assert_eq!(card.name, "基本雷能量L");
    assert_eq!(card.text, "");
    assert_eq!(card.card_no(), Some("LIG"));
    assert_eq!(card.kind.energy().unwrap().energy, Energy::Lightning);
    assert_eq!(card.effect_id(), ptcg_chs_core::effect_fingerprint(&card.name, &card.kind));
}

#[test]
fn mechanic_and_label_carried() {
    let mut raw = pikachu();
    raw["pokemonType"] = json!("4|5");
    let card = normalize_card(&card(raw), ctx("CSM1aC"), &precedence())
        .unwrap()
        .unwrap();
    assert_eq!(card.mechanic, Some(Mechanic::Gx));
    assert_eq!(card.label, Some(Label::UltraBeast));
}

#[test]
fn promo_token_leaves_card_unnumbered() {
    let mut raw = pikachu();
    raw["details"]["collectionNumber"] = json!("SM-P");
    let card = normalize_card(&card(raw), ctx("PROMO"), &precedence())
        .unwrap()
        .unwrap();
    assert_eq!(card.card_no(), None);
    assert_eq!(card.collection.set_collect_num.as_deref(), Some("SM-P"));
    assert_eq!(card.collection.set_symbol, "PROMO");
}
