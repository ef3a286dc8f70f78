//! Raw card record to domain [`Card`].

use ptcg_chs_core::{
    Ability, Attack, Card, CardKind, CardType, CollectionAttr, Energy, EnergyAttr, PokemonAttr,
    Resistance, Series, TrainerType, Weakness,
};
use thiserror::Error;

use crate::decode::{self, DecodeError, TypeCodes};
use crate::heuristics;
use crate::precedence::SymbolPrecedence;
use crate::raw::{RawAttack, RawCard, RawDetails};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("{card}: missing required field `{field}`")]
    MissingField { card: String, field: &'static str },
    #[error("{card}: {source}")]
    Decode {
        card: String,
        #[source]
        source: DecodeError,
    },
    #[error("{card}: listed under unknown set symbol {symbol:?}")]
    UnknownSymbol { card: String, symbol: String },
    #[error("{card}: decoded to the unrefined card type {card_type}")]
    CoarseType { card: String, card_type: CardType },
}

/// Miniset tokens that stand in for a card number.
const MINISET_TOKENS: &[&str] = &["DAR", "FAI", "FIG", "FIR", "GRA", "LIG", "MET", "PSY", "WAT"];

/// Promo tokens printed instead of a set total.
const PROMO_TOKENS: &[&str] = &["SM-P", "S-P"];

/// The set a card record is being normalized for.
#[derive(Debug, Clone, Copy)]
pub struct SetContext<'a> {
    pub symbol: &'a str,
    pub series: Series,
}

/// Split `collectionNumber` into `(card_no, set_collect_num)`.
///
/// `"060/128"` is card 060 of 128. A lone miniset token is the card number;
/// a lone promo token is the sub-collection with no number.
pub fn split_collection_number(raw: &str) -> (Option<String>, Option<String>) {
    let parts: Vec<&str> = raw.split('/').collect();
    if let [card_no, collect_num] = parts.as_slice() {
        return (Some(card_no.to_string()), Some(collect_num.to_string()));
    }
    let token = parts.first().copied().unwrap_or_default();
    if MINISET_TOKENS.contains(&token) {
        (Some(token.to_string()), None)
    } else if PROMO_TOKENS.contains(&token) {
        (None, Some(token.to_string()))
    } else {
        (None, None)
    }
}

/// Normalize one card record.
///
/// Returns `Ok(None)` for staff-only variants, which are not catalog entries.
pub fn normalize_card(
    raw: &RawCard,
    set: SetContext<'_>,
    precedence: &SymbolPrecedence,
) -> Result<Option<Card>, NormalizeError> {
    let n = Normalizer { raw, set };
    let details = &raw.details;

    let rarity_text = n.required(details.rarity_text.as_deref(), "rarityText")?;
    if heuristics::is_staff_variant(rarity_text) {
        return Ok(None);
    }

    let name = n.required(raw.name.as_deref(), "name")?;
    let card_type = n.decode(decode::decode_card_type(TypeCodes {
        card_type: n.required(raw.card_type.as_deref(), "cardType")?,
        trainer_type: details.trainer_type.as_deref(),
        energy_type: raw.energy_type.as_deref(),
        rule_text: details.rule_text.as_deref(),
    }))?;

    let kind = match card_type {
        CardType::Pokemon => CardKind::Pokemon(n.pokemon_attr()?),
        CardType::Item => CardKind::Trainer(TrainerType::Item),
        CardType::Tool => CardKind::Trainer(TrainerType::Tool),
        CardType::Supporter => CardKind::Trainer(TrainerType::Supporter),
        CardType::Stadium => CardKind::Trainer(TrainerType::Stadium),
        CardType::BasicEnergy => {
            let code = n.required(details.yoren_code.as_deref(), "yorenCode")?;
            CardKind::BasicEnergy(EnergyAttr {
                energy: n.decode(decode::decode_energy(code))?,
            })
        }
        CardType::SpecialEnergy => CardKind::SpecialEnergy,
        CardType::Trainer | CardType::Energy => {
            return Err(NormalizeError::CoarseType {
                card: n.describe(),
                card_type,
            });
        }
    };

    let text = n.card_text(&kind)?;
    let name = if card_type == CardType::BasicEnergy {
        heuristics::strip_energy_name_brackets(name)
    } else {
        name.to_string()
    };

    let (card_no, set_collect_num) = split_collection_number(
        n.required(details.collection_number.as_deref(), "collectionNumber")?,
    );
    let collection = CollectionAttr {
        series: set.series,
        set_symbol: n.filed_symbol(precedence)?,
        card_no,
        set_collect_num,
        artist_name: details
            .illustrator_name
            .as_ref()
            .and_then(|names| names.first().cloned()),
        rarity: n.decode(decode::decode_rarity(rarity_text))?,
    };

    let card = Card::new(name, text, kind, collection)
        .with_mechanic(decode::decode_mechanic(
            raw.pokemon_type.as_deref(),
            raw.special_card.as_deref(),
        ))
        .with_label(decode::decode_label(
            raw.pokemon_type.as_deref(),
            raw.special_card.as_deref(),
        ))
        .with_regulation_mark(details.regulation_mark_text.clone())
        .with_image_path(raw.image.clone().unwrap_or_default());
    Ok(Some(card))
}

struct Normalizer<'a> {
    raw: &'a RawCard,
    set: SetContext<'a>,
}

impl<'a> Normalizer<'a> {
    fn details(&self) -> &'a RawDetails {
        &self.raw.details
    }

    /// How errors name the record.
    fn describe(&self) -> String {
        let name = self.raw.name.as_deref().unwrap_or("<unnamed>");
        match self.details().collection_number.as_deref() {
            Some(no) => format!("{} {} ({})", self.set.symbol, no, name),
            None => format!("{} ({})", self.set.symbol, name),
        }
    }

    fn required<T: ?Sized>(
        &self,
        value: Option<&'a T>,
        field: &'static str,
    ) -> Result<&'a T, NormalizeError> {
        value.ok_or_else(|| NormalizeError::MissingField {
            card: self.describe(),
            field,
        })
    }

    fn decode<T>(&self, result: Result<T, DecodeError>) -> Result<T, NormalizeError> {
        result.map_err(|source| NormalizeError::Decode {
            card: self.describe(),
            source,
        })
    }

    fn filed_symbol(&self, precedence: &SymbolPrecedence) -> Result<String, NormalizeError> {
        let symbols: Vec<&str> = match &self.details().commodity_list {
            Some(list) if !list.is_empty() => list
                .iter()
                .map(|c| c.commodity_code.as_deref().unwrap_or(self.set.symbol))
                .collect(),
            _ => vec![self.set.symbol],
        };
        match precedence.earliest(&symbols) {
            Ok(Some(symbol)) => Ok(symbol.to_string()),
            Ok(None) => Ok(self.set.symbol.to_string()),
            Err(symbol) => Err(NormalizeError::UnknownSymbol {
                card: self.describe(),
                symbol: symbol.to_string(),
            }),
        }
    }

    fn abilities(&self) -> Vec<Ability> {
        let details = self.details();
        if let (Some(name), Some(text)) = (&details.feature_name, &details.feature_text) {
            return vec![Ability {
                name: name.clone(),
                text: text.clone(),
            }];
        }
        details
            .card_feature_item_list
            .iter()
            .flatten()
            .map(|feat| Ability {
                name: feat.feature_name.clone().unwrap_or_default(),
                text: feat.feature_desc.clone().unwrap_or_default(),
            })
            .collect()
    }

    fn attack(&self, raw: &RawAttack) -> Result<Option<Attack>, NormalizeError> {
        let name = vendor_text(raw.ability_name.as_deref());
        let text = vendor_text(raw.ability_text.as_deref());
        let damage = vendor_text(raw.ability_damage.as_deref());
        if name.is_empty() && text.is_empty() && damage.is_empty() {
            return Ok(None);
        }

        let cost_codes = raw.ability_cost.as_deref().unwrap_or_default();
        let cost = if cost_codes.is_empty() {
            vec![Energy::Zero]
        } else {
            cost_codes
                .split(',')
                .filter(|code| !code.is_empty())
                .map(|code| self.decode(decode::decode_energy(code)))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Some(Attack {
            name: name.to_string(),
            text: text.to_string(),
            cost,
            damage: damage.to_string(),
        }))
    }

    fn pokemon_attr(&self) -> Result<PokemonAttr, NormalizeError> {
        let details = self.details();
        let attribute = self.required(details.attribute.as_deref(), "attribute")?;
        let energy_type = self.decode(decode::decode_energy(attribute))?;
        let evolve_text = self.required(details.evolve_text.as_deref(), "evolveText")?;
        let stage = self.decode(decode::decode_stage(evolve_text))?;
        let hp = details.hp.ok_or_else(|| NormalizeError::MissingField {
            card: self.describe(),
            field: "hp",
        })?;

        let weakness = match details.weakness_type.as_deref() {
            Some(code) => Some(Weakness {
                weakness_type: self.decode(decode::decode_energy(code))?,
                weakness_value: details.weakness_formula.clone().unwrap_or_default(),
            }),
            None => None,
        };
        let resistance = match details.resistance_type.as_deref() {
            Some(code) => Some(Resistance {
                resistance_type: self.decode(decode::decode_energy(code))?,
                resistance_value: details.resistance_formula.clone().unwrap_or_default(),
            }),
            None => None,
        };

        let mut attacks = Vec::new();
        for raw in details.ability_item_list.iter().flatten() {
            if let Some(attack) = self.attack(raw)? {
                attacks.push(attack);
            }
        }

        Ok(PokemonAttr {
            energy_type,
            stage,
            hp,
            abilities: self.abilities(),
            weakness,
            resistance,
            retreat_cost: details.retreat_cost.unwrap_or(0),
            pokedex: details.yoren_code.clone(),
            attacks,
        })
    }

    /// The free-text blob published as `text`.
    fn card_text(&self, kind: &CardKind) -> Result<String, NormalizeError> {
        let details = self.details();
        match kind {
            CardKind::Pokemon(attr) => {
                let mut text = String::new();
                for ability in &attr.abilities {
                    text.push_str(&format!("{}\n{}\n", ability.name, ability.text));
                }
                for raw in details.ability_item_list.iter().flatten() {
                    let Some(attack_text) = raw.ability_text.as_deref() else {
                        continue;
                    };
                    // The attack name is printed verbatim, `none` included.
                    text.push_str(&format!(
                        "{}\t{}\n{}\n",
                        raw.ability_name.as_deref().unwrap_or_default(),
                        vendor_text(raw.ability_damage.as_deref()),
                        vendor_text(Some(attack_text)),
                    ));
                }
                Ok(text)
            }
            CardKind::BasicEnergy(_) => Ok(String::new()),
            CardKind::Trainer(_) | CardKind::SpecialEnergy => {
                let rule = self.required(details.rule_text.as_deref(), "ruleText")?;
                Ok(format!("{}\n", heuristics::strip_rule_reminders(rule)))
            }
        }
    }
}

/// Vendor text fields spell "empty" as `none`.
fn vendor_text(value: Option<&str>) -> &str {
    match value {
        Some("none") | None => "",
        Some(s) => s,
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
