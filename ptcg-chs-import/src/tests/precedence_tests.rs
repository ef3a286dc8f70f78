use super::*;
use serde_json::json;

fn document() -> RawDocument {
    serde_json::from_value(json!({
        "collections": [
            { "name": "newest", "commodityCode": "C" },
            { "name": "middle", "commodityCode": "B" },
            { "name": "oldest", "commodityCode": "A" },
        ]
    }))
    .unwrap()
}

#[test]
fn document_order_is_reversed() {
    let table = SymbolPrecedence::from_document(&document());
    assert_eq!(table.position("A"), Some(0));
    assert_eq!(table.position("C"), Some(2));
    assert_eq!(table.len(), 3);
}

#[test]
fn earliest_symbol_wins() {
    let table = SymbolPrecedence::from_document(&document());
    assert_eq!(table.earliest(&["B", "A"]), Ok(Some("A")));
    assert_eq!(table.earliest(&["C", "B"]), Ok(Some("B")));
    assert_eq!(table.earliest(&["C"]), Ok(Some("C")));
}

#[test]
fn empty_list_has_no_earliest() {
    let table = SymbolPrecedence::from_document(&document());
    let none: [&str; 0] = [];
    assert_eq!(table.earliest(&none), Ok(None));
}

#[test]
fn unknown_symbol_is_reported() {
    let table = SymbolPrecedence::from_document(&document());
    assert_eq!(table.earliest(&["A", "Z"]), Err("Z"));
}

#[test]
fn repeated_symbol_keeps_first_position() {
    let table = SymbolPrecedence::from_chronological(["A", "B", "A"]);
    assert_eq!(table.position("A"), Some(0));
    assert_eq!(table.position("B"), Some(1));
}
