use super::*;
use crate::record::CardRecord;
use ptcg_chs_core::{CardType, CollectionAttr, Rarity, Series};

fn card(symbol: &str, card_no: &str, effect_id: &str) -> CardRecord {
    CardRecord {
        name: format!("{symbol}-{card_no}"),
        text: String::new(),
        card_type: CardType::Item,
        mechanic: None,
        label: None,
        pokemon_attr: None,
        collection_attr: CollectionAttr {
            series: Series::SunMoon,
            set_symbol: symbol.into(),
            card_no: Some(card_no.into()),
            set_collect_num: None,
            artist_name: None,
            rarity: Rarity::Uncommon,
        },
        energy_attr: None,
        regulation_mark: None,
        effect_id: effect_id.into(),
    }
}

fn sets() -> Vec<SetRecord> {
    let set = |symbol: &str, cards: Vec<CardRecord>| SetRecord {
        name: symbol.into(),
        symbol: symbol.into(),
        release_date: None,
        series: Series::SunMoon,
        main_expansion: true,
        cards_num: cards.len(),
        cards,
    };
    vec![
        set("EMPTY", vec![]),
        set("CSM1aC", vec![card("CSM1aC", "060", "aaa"), card("CSM1aC", "128", "bbb")]),
        set("CSM1cC", vec![card("CSM1cC", "137", "ccc")]),
    ]
}

#[test]
fn default_list_resolves_in_order() {
    let regulation = derive_banned(&sets(), &default_banned());
    assert!(regulation.standard.is_empty());
    assert_eq!(regulation.expanded, ["aaa", "bbb", "ccc"]);
}

#[test]
fn unmatched_entries_skipped() {
    let regulation = derive_banned(&sets(), &[BannedCard::new("CSM1aC", "999")]);
    assert!(regulation.expanded.is_empty());
}

#[test]
fn lookup_uses_filed_symbol() {
    // A card filed under SMP but published in another entry still matches.
    let mut sets = sets();
    sets[0].cards.push(card("SMP", "NaN3", "ddd"));
    let regulation = derive_banned(&sets, &[BannedCard::new("SMP", "NaN3")]);
    assert_eq!(regulation.expanded, ["ddd"]);
}

#[test]
fn written_compact() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_regulation(dir.path(), &derive_banned(&sets(), &default_banned())).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text, r#"{"standard":[],"expanded":["aaa","bbb","ccc"]}"#);
}

#[test]
fn banned_list_from_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banned.yaml");
    std::fs::write(&path, "- set: CSM1cC\n  card_no: \"137\"\n").unwrap();
    assert_eq!(load_banned(&path).unwrap(), vec![BannedCard::new("CSM1cC", "137")]);
}
