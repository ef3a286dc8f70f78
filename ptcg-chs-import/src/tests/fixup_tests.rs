use super::*;

#[test]
fn builtin_corrects_ssp_138() {
    let fixups = builtin_fixups();
    assert_eq!(fixups.len(), 1);
    assert_eq!(fixups[0].to_string(), "SSP-138");
    assert_eq!(
        fixups[0].patch,
        FixupPatch::AttackCost {
            attack: 0,
            cost: vec![Energy::Colorless]
        }
    );
}

#[test]
fn yaml_fixups_parse() {
    let yaml = r#"
- set: CSM1aC
  card_no: "060"
  patch:
    kind: attack_cost
    attack: 1
    cost: [R, C]
"#;
    let fixups = parse_fixups(yaml, "fixups.yaml").unwrap();
    assert_eq!(
        fixups,
        vec![Fixup::attack_cost(
            "CSM1aC",
            "060",
            1,
            vec![Energy::Fire, Energy::Colorless]
        )]
    );
}

#[test]
fn unknown_patch_kind_rejected() {
    let yaml = r#"
- set: SSP
  card_no: "1"
  patch:
    kind: rename
"#;
    let err = parse_fixups(yaml, "bad.yaml").unwrap_err();
    assert!(matches!(err, FixupError::Parse { ref path, .. } if path == "bad.yaml"));
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixups.yaml");
    std::fs::write(
        &path,
        "- set: SSP\n  card_no: \"2\"\n  patch:\n    kind: attack_cost\n    attack: 0\n    cost: [W]\n",
    )
    .unwrap();
    let fixups = load_fixups(&path).unwrap();
    assert_eq!(fixups[0].card_no, "2");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_fixups(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, FixupError::Io { .. }));
}

#[test]
fn missing_targets_report_why() {
    let mut catalog = Catalog::new();
    let fixup = Fixup::attack_cost("SSP", "138", 0, vec![Energy::Colorless]);
    assert_eq!(fixup.apply(&mut catalog), FixupOutcome::SetNotFound);

    catalog.insert(
        "SSP",
        ptcg_chs_core::PSet::new("剑&盾 特典卡", "SSP", None, ptcg_chs_core::Series::SwordShield),
    );
    assert_eq!(fixup.apply(&mut catalog), FixupOutcome::CardNotFound);
}

fn charizard(filed_under: &str) -> Card {
    use ptcg_chs_core::{Attack, CardKind, CollectionAttr, PokemonAttr, Rarity, Series, Stage};

    Card::new(
        "喷火龙V",
        "",
        CardKind::Pokemon(PokemonAttr {
            energy_type: Energy::Fire,
            stage: Stage::Basic,
            hp: 220,
            abilities: Vec::new(),
            weakness: None,
            resistance: None,
            retreat_cost: 2,
            pokedex: Some("006".into()),
            attacks: vec![Attack {
                name: "龙之爪".into(),
                text: String::new(),
                cost: vec![Energy::Fire],
                damage: "60".into(),
            }],
        }),
        CollectionAttr {
            series: Series::SwordShield,
            set_symbol: filed_under.into(),
            card_no: Some("138".into()),
            set_collect_num: None,
            artist_name: None,
            rarity: Rarity::Rare,
        },
    )
}

fn first_cost(catalog: &Catalog, key: &str) -> Vec<Energy> {
    catalog.get(key).unwrap().cards[0]
        .kind
        .pokemon()
        .unwrap()
        .attacks[0]
        .cost
        .clone()
}

#[test]
fn merged_copies_patched_together() {
    use ptcg_chs_core::{PSet, Series};

    let mut catalog = Catalog::new();
    let mut ssp = PSet::new("剑&盾 特典卡", "SSP", None, Series::SwordShield);
    ssp.cards.push(charizard("SSP"));
    let mut gift = PSet::new("喷火龙VMAX套装礼盒", "PROMO", None, Series::SwordShield);
    gift.cards.push(charizard("SSP"));
    let mut other = PSet::new("其他", "CS1aC", None, Series::SwordShield);
    other.cards.push(charizard("CS1aC"));
    catalog.insert("SSP", ssp);
    catalog.insert("PROMO-Charizard", gift);
    catalog.insert("CS1aC", other);

    let outcome = builtin_fixups()[0].apply(&mut catalog);

    assert_eq!(outcome, FixupOutcome::Applied);
    assert_eq!(first_cost(&catalog, "SSP"), vec![Energy::Colorless]);
    assert_eq!(first_cost(&catalog, "PROMO-Charizard"), vec![Energy::Colorless]);
    assert_eq!(first_cost(&catalog, "CS1aC"), vec![Energy::Fire]);
}

#[test]
fn trainer_target_not_applicable() {
    use ptcg_chs_core::{CardKind, CollectionAttr, PSet, Rarity, Series, TrainerType};

    let mut ssp = PSet::new("剑&盾 特典卡", "SSP", None, Series::SwordShield);
    ssp.cards.push(Card::new(
        "博士的研究",
        "",
        CardKind::Trainer(TrainerType::Supporter),
        CollectionAttr {
            series: Series::SwordShield,
            set_symbol: "SSP".into(),
            card_no: Some("138".into()),
            set_collect_num: None,
            artist_name: None,
            rarity: Rarity::Common,
        },
    ));
    let mut catalog = Catalog::new();
    catalog.insert("SSP", ssp);
    assert_eq!(
        builtin_fixups()[0].apply(&mut catalog),
        FixupOutcome::NotApplicable
    );
}
