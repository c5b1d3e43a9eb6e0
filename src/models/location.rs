use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::decoder::object::{array, elements, nullable, object, required};
use crate::decoder::{self, literal, unrecognized, Decode};
use crate::utils::errors::DecodeError;

/// Symbol printed on a location card, used to declare adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArkhamLocationSymbol {
    Circle,
    Heart,
    Square,
    Triangle,
    Plus,
    Diamond,
    Moon,
}

impl ArkhamLocationSymbol {
    pub const ALL: [ArkhamLocationSymbol; 7] = [
        ArkhamLocationSymbol::Circle,
        ArkhamLocationSymbol::Heart,
        ArkhamLocationSymbol::Square,
        ArkhamLocationSymbol::Triangle,
        ArkhamLocationSymbol::Plus,
        ArkhamLocationSymbol::Diamond,
        ArkhamLocationSymbol::Moon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArkhamLocationSymbol::Circle => "Circle",
            ArkhamLocationSymbol::Heart => "Heart",
            ArkhamLocationSymbol::Square => "Square",
            ArkhamLocationSymbol::Triangle => "Triangle",
            ArkhamLocationSymbol::Plus => "Plus",
            ArkhamLocationSymbol::Diamond => "Diamond",
            ArkhamLocationSymbol::Moon => "Moon",
        }
    }
}

impl Display for ArkhamLocationSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArkhamLocationSymbol {
    type Err = DecodeError;

    /// Exact, case-sensitive match against the wire literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == s)
            .ok_or_else(|| unrecognized(Self::TYPE_NAME, s))
    }
}

impl Decode for ArkhamLocationSymbol {
    const TYPE_NAME: &'static str = "ArkhamLocationSymbol";

    fn decode_at(value: &Value, path: &str) -> Result<Self, DecodeError> {
        literal(value, path)
    }
}

/// Visibility lifecycle of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArkhamLocationStatus {
    Revealed,
    Unrevealed,
    OutOfPlay,
}

impl ArkhamLocationStatus {
    pub const ALL: [ArkhamLocationStatus; 3] = [
        ArkhamLocationStatus::Revealed,
        ArkhamLocationStatus::Unrevealed,
        ArkhamLocationStatus::OutOfPlay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArkhamLocationStatus::Revealed => "Revealed",
            ArkhamLocationStatus::Unrevealed => "Unrevealed",
            ArkhamLocationStatus::OutOfPlay => "OutOfPlay",
        }
    }
}

impl Display for ArkhamLocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArkhamLocationStatus {
    type Err = DecodeError;

    /// Exact, case-sensitive match against the wire literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| unrecognized(Self::TYPE_NAME, s))
    }
}

impl Decode for ArkhamLocationStatus {
    const TYPE_NAME: &'static str = "ArkhamLocationStatus";

    fn decode_at(value: &Value, path: &str) -> Result<Self, DecodeError> {
        literal(value, path)
    }
}

/// Server-reported snapshot of a board location.
///
/// Only ever produced by decoding a payload. A change on the board arrives
/// as a new snapshot that replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArkhamLocation {
    name: String,
    card_code: String,
    location_symbol: Option<ArkhamLocationSymbol>,
    connected_location_symbols: Vec<ArkhamLocationSymbol>,
    shroud: u32,
    image: String,
    investigators: Vec<String>,
    enemies: Vec<String>,
    clues: u32,
    doom: u32,
    status: ArkhamLocationStatus,
}

impl ArkhamLocation {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn card_code(&self) -> &str {
        &self.card_code
    }

    pub fn location_symbol(&self) -> Option<ArkhamLocationSymbol> {
        self.location_symbol
    }

    /// Symbols of adjacent locations, in the order the server sent them.
    pub fn connected_location_symbols(&self) -> &[ArkhamLocationSymbol] {
        &self.connected_location_symbols
    }

    pub fn shroud(&self) -> u32 {
        self.shroud
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Ids of the investigators standing here. Not checked against anything.
    pub fn investigators(&self) -> &[String] {
        &self.investigators
    }

    pub fn enemies(&self) -> &[String] {
        &self.enemies
    }

    pub fn clues(&self) -> u32 {
        self.clues
    }

    pub fn doom(&self) -> u32 {
        self.doom
    }

    pub fn status(&self) -> ArkhamLocationStatus {
        self.status
    }

    pub fn is_revealed(&self) -> bool {
        self.status == ArkhamLocationStatus::Revealed
    }

    pub fn is_connected_to(&self, symbol: ArkhamLocationSymbol) -> bool {
        self.connected_location_symbols.contains(&symbol)
    }

    pub fn has_investigator(&self, id: &str) -> bool {
        self.investigators.iter().any(|i| i == id)
    }

    pub fn has_enemies(&self) -> bool {
        !self.enemies.is_empty()
    }
}

impl Decode for ArkhamLocation {
    const TYPE_NAME: &'static str = "ArkhamLocation";

    fn decode_at(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let fields = object(value, path, Self::TYPE_NAME)?;

        Ok(Self {
            name: required(fields, path, "name")?,
            card_code: required(fields, path, "cardCode")?,
            location_symbol: nullable(fields, path, "locationSymbol")?,
            connected_location_symbols: array(
                fields,
                path,
                "connectedLocationSymbols",
                "ArkhamLocationSymbol[]",
            )?,
            shroud: required(fields, path, "shroud")?,
            image: required(fields, path, "image")?,
            investigators: array(fields, path, "investigators", "UUID[]")?,
            enemies: array(fields, path, "enemies", "UUID[]")?,
            clues: required(fields, path, "clues")?,
            doom: required(fields, path, "doom")?,
            status: required(fields, path, "status")?,
        })
    }
}

impl<'de> Deserialize<'de> for ArkhamLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decoder::deserialize(deserializer)
    }
}

/// Decodes a board snapshot sent as an array of locations.
pub fn decode_locations(value: &Value) -> Result<Vec<ArkhamLocation>, DecodeError> {
    elements(value, decoder::ROOT, "ArkhamLocation[]")
}
