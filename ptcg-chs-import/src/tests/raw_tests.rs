use super::*;
use serde_json::json;

#[test]
fn hp_and_retreat_accept_numbers_and_strings() {
    let details: RawDetails = serde_json::from_value(json!({
        "hp": "130",
        "retreatCost": 2,
    }))
    .unwrap();
    assert_eq!(details.hp, Some(130));
    assert_eq!(details.retreat_cost, Some(2));
}

#[test]
fn empty_integer_string_reads_as_missing() {
    let details: RawDetails = serde_json::from_value(json!({ "retreatCost": "" })).unwrap();
    assert_eq!(details.retreat_cost, None);
}

#[test]
fn non_integer_hp_is_rejected() {
    let result: Result<RawDetails, _> = serde_json::from_value(json!({ "hp": "lots" }));
    assert!(result.is_err());
}

#[test]
fn numeric_codes_read_as_strings() {
    let card: RawCard = serde_json::from_value(json!({
        "name": "皮卡丘",
        "cardType": 1,
        "details": { "attribute": 4, "collectionNumber": "060/128" },
    }))
    .unwrap();
    assert_eq!(card.card_type.as_deref(), Some("1"));
    assert_eq!(card.details.attribute.as_deref(), Some("4"));
}

#[test]
fn both_ability_shapes_parse() {
    let old: RawDetails = serde_json::from_value(json!({
        "featureName": "激流",
        "featureText": "造成伤害。",
    }))
    .unwrap();
    assert_eq!(old.feature_name.as_deref(), Some("激流"));
    assert!(old.card_feature_item_list.is_none());

    let new: RawDetails = serde_json::from_value(json!({
        "cardFeatureItemList": [
            { "featureName": "一", "featureDesc": "甲" },
            { "featureName": "二", "featureDesc": "乙" },
        ],
    }))
    .unwrap();
    let list = new.card_feature_item_list.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].feature_desc.as_deref(), Some("乙"));
}

#[test]
fn missing_fields_default() {
    let doc: RawDocument = serde_json::from_value(json!({
        "collections": [
            { "name": "太阳&月亮", "commodityCode": "CSM1aC", "cards": [ {} ] },
        ],
        "unrelated": true,
    }))
    .unwrap();
    let coll = &doc.collections[0];
    assert_eq!(coll.sales_date, None);
    assert_eq!(coll.series, None);
    let card = &coll.cards[0];
    assert!(card.name.is_none());
    assert!(card.details.ability_item_list.is_none());
    assert!(card.details.commodity_list.is_none());
}
