use super::*;
use ptcg_chs_core::{Energy, Rarity, Stage, TrainerType};
use serde_json::json;

fn collection(symbol: &str, card_no: &str) -> CollectionAttr {
    CollectionAttr {
        series: Series::SunMoon,
        set_symbol: symbol.into(),
        card_no: Some(card_no.into()),
        set_collect_num: Some("128".into()),
        artist_name: None,
        rarity: Rarity::Common,
    }
}

fn pokemon() -> Card {
    let attr = PokemonAttr {
        energy_type: Energy::Lightning,
        stage: Stage::Basic,
        hp: 60,
        abilities: vec![],
        weakness: None,
        resistance: None,
        retreat_cost: 1,
        pokedex: Some("025".into()),
        attacks: vec![],
    };
    Card::new("皮卡丘", "", CardKind::Pokemon(attr), collection("CSM1aC", "060"))
}

#[test]
fn card_record_writes_nulls() {
    let trainer = Card::new(
        "精灵球",
        "抛硬币。\n",
        CardKind::Trainer(TrainerType::Item),
        collection("CSM1aC", "120"),
    );
    let value = serde_json::to_value(CardRecord::from(&trainer)).unwrap();
    assert_eq!(value["type"], json!("Item"));
    assert_eq!(value["mechanic"], json!(null));
    assert_eq!(value["label"], json!(null));
    assert_eq!(value["pokemon_attr"], json!(null));
    assert_eq!(value["energy_attr"], json!(null));
    assert_eq!(value["regulation_mark"], json!(null));
    assert_eq!(value["effect_id"], json!(trainer.effect_id()));
    assert_eq!(
        value["collection_attr"],
        json!({
            "series": "Sun & Moon",
            "set_symbol": "CSM1aC",
            "card_no": "120",
            "set_collect_num": "128",
            "artist_name": null,
            "rarity": "C",
        })
    );
}

#[test]
fn payload_follows_kind() {
    let record = CardRecord::from(&pokemon());
    assert!(record.pokemon_attr.is_some());
    assert!(record.energy_attr.is_none());

    let energy = Card::new(
        "基本草能量",
        "",
        CardKind::BasicEnergy(EnergyAttr {
            energy: Energy::Grass,
        }),
        collection("CSM1aC", "GRA"),
    );
    let value = serde_json::to_value(CardRecord::from(&energy)).unwrap();
    assert_eq!(value["type"], json!("Basic Energy"));
    assert_eq!(value["energy_attr"], json!({ "energy": "G" }));
    assert_eq!(value["pokemon_attr"], json!(null));
}

#[test]
fn pokemon_attr_shape() {
    let value = serde_json::to_value(CardRecord::from(&pokemon())).unwrap();
    assert_eq!(
        value["pokemon_attr"],
        json!({
            "energy_type": "L",
            "stage": "Basic",
            "hp": 60,
            "abilities": [],
            "weakness": null,
            "resistance": null,
            "retreat_cost": 1,
            "pokedex": "025",
            "attacks": [],
        })
    );
}

#[test]
fn empty_set_omits_cards() {
    let mut set = PSet::new("空", "CSM1aC", Some("2017-12-01".into()), Series::SunMoon);
    set.refresh_count();
    let value = serde_json::to_value(SetRecord::from(&set)).unwrap();
    assert!(value.get("cards").is_none());
    assert_eq!(value["cards_num"], json!(0));
    assert_eq!(value["main_expansion"], json!(true));
    assert_eq!(value["release_date"], json!("2017-12-01"));
}

#[test]
fn set_record_carries_cards_in_order() {
    let mut set = PSet::new("礼盒", "CSEC", None, Series::SwordShield);
    set.cards.push(pokemon());
    set.refresh_count();
    let mut catalog = Catalog::new();
    catalog.insert("CSEC", set);

    let records = catalog_records(&catalog);
    assert_eq!(records.len(), 1);
    assert!(!records[0].main_expansion);
    assert_eq!(records[0].cards_num, 1);
    assert_eq!(records[0].cards[0].name, "皮卡丘");
}
