use std::fmt::Display;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::decoder::object::{field_path, object, required};
use crate::decoder::{self, mismatch, unrecognized, Decode};
use crate::utils::errors::DecodeError;

/// Discriminator of an [`ArkhamAction`], sent as the `tag` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArkhamActionType {
    Investigate,
    TakeResource,
    DrawCard,
    PlayCard,
    Move,
}

impl ArkhamActionType {
    pub const ALL: [ArkhamActionType; 5] = [
        ArkhamActionType::Investigate,
        ArkhamActionType::TakeResource,
        ArkhamActionType::DrawCard,
        ArkhamActionType::PlayCard,
        ArkhamActionType::Move,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ArkhamActionType::Investigate => "InvestigateAction",
            ArkhamActionType::TakeResource => "TakeResourceAction",
            ArkhamActionType::DrawCard => "DrawCardAction",
            ArkhamActionType::PlayCard => "PlayCardAction",
            ArkhamActionType::Move => "MoveAction",
        }
    }
}

impl Display for ArkhamActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ArkhamActionType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| unrecognized(Self::TYPE_NAME, s))
    }
}

impl Decode for ArkhamActionType {
    const TYPE_NAME: &'static str = "ArkhamActionType";

    fn decode_at(value: &Value, path: &str) -> Result<Self, DecodeError> {
        decoder::literal(value, path)
    }
}

/// A player-initiated game action.
///
/// On the wire this is `{"tag": ..., "contents": ...}`; the variants without
/// a payload carry `"contents": []`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArkhamAction {
    /// Investigate the location or card with the given id.
    Investigate(String),
    TakeResource,
    DrawCard,
    /// Play the card at this index of the hand.
    PlayCard(u32),
    /// Move to the location with the given id.
    Move(String),
}

impl ArkhamAction {
    pub fn action_type(&self) -> ArkhamActionType {
        match self {
            ArkhamAction::Investigate(_) => ArkhamActionType::Investigate,
            ArkhamAction::TakeResource => ArkhamActionType::TakeResource,
            ArkhamAction::DrawCard => ArkhamActionType::DrawCard,
            ArkhamAction::PlayCard(_) => ArkhamActionType::PlayCard,
            ArkhamAction::Move(_) => ArkhamActionType::Move,
        }
    }

    /// Hands the action to the `handler` method for its variant.
    pub fn dispatch<H: ActionHandler>(&self, handler: &mut H) -> H::Output {
        match self {
            ArkhamAction::Investigate(target) => handler.investigate(target),
            ArkhamAction::TakeResource => handler.take_resource(),
            ArkhamAction::DrawCard => handler.draw_card(),
            ArkhamAction::PlayCard(index) => handler.play_card(*index),
            ArkhamAction::Move(destination) => handler.move_to(destination),
        }
    }
}

/// Receives an [`ArkhamAction`] through [`ArkhamAction::dispatch`].
///
/// There is one method per variant and none of them has a default, so a new
/// action cannot be added without every handler learning about it.
pub trait ActionHandler {
    type Output;

    fn investigate(&mut self, target: &str) -> Self::Output;
    fn take_resource(&mut self) -> Self::Output;
    fn draw_card(&mut self) -> Self::Output;
    fn play_card(&mut self, index: u32) -> Self::Output;
    fn move_to(&mut self, destination: &str) -> Self::Output;
}

impl Serialize for ArkhamAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ArkhamAction", 2)?;
        state.serialize_field("tag", self.action_type().tag())?;
        match self {
            ArkhamAction::Investigate(id) | ArkhamAction::Move(id) => {
                state.serialize_field("contents", id)?
            }
            ArkhamAction::PlayCard(index) => state.serialize_field("contents", index)?,
            ArkhamAction::TakeResource | ArkhamAction::DrawCard => {
                state.serialize_field("contents", &[(); 0])?
            }
        }
        state.end()
    }
}

impl Decode for ArkhamAction {
    const TYPE_NAME: &'static str = "ArkhamAction";

    fn decode_at(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let fields = object(value, path, Self::TYPE_NAME)?;
        let kind: ArkhamActionType = required(fields, path, "tag")?;

        Ok(match kind {
            ArkhamActionType::Investigate => {
                ArkhamAction::Investigate(required(fields, path, "contents")?)
            }
            ArkhamActionType::TakeResource => {
                empty_contents(fields.get("contents"), path)?;
                ArkhamAction::TakeResource
            }
            ArkhamActionType::DrawCard => {
                empty_contents(fields.get("contents"), path)?;
                ArkhamAction::DrawCard
            }
            ArkhamActionType::PlayCard => ArkhamAction::PlayCard(required(fields, path, "contents")?),
            ArkhamActionType::Move => ArkhamAction::Move(required(fields, path, "contents")?),
        })
    }
}

fn empty_contents(contents: Option<&Value>, path: &str) -> Result<(), DecodeError> {
    match contents {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(items)) if items.is_empty() => Ok(()),
        Some(other) => Err(mismatch(&field_path(path, "contents"), "[]", other)),
    }
}

impl<'de> Deserialize<'de> for ArkhamAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        decoder::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;
    use serde_json::json;

    /// Records which branch ran and with what payload.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl ActionHandler for Recorder {
        type Output = &'static str;

        fn investigate(&mut self, target: &str) -> Self::Output {
            self.calls.push(format!("investigate {target}"));
            "investigate"
        }

        fn take_resource(&mut self) -> Self::Output {
            self.calls.push("take_resource".to_string());
            "take_resource"
        }

        fn draw_card(&mut self) -> Self::Output {
            self.calls.push("draw_card".to_string());
            "draw_card"
        }

        fn play_card(&mut self, index: u32) -> Self::Output {
            self.calls.push(format!("play_card {index}"));
            "play_card"
        }

        fn move_to(&mut self, destination: &str) -> Self::Output {
            self.calls.push(format!("move_to {destination}"));
            "move_to"
        }
    }

    #[test]
    fn test_play_card_routes_to_one_branch() {
        let action = decode::<ArkhamAction>(&json!({"tag": "PlayCardAction", "contents": 3})).unwrap();
        assert_eq!(action, ArkhamAction::PlayCard(3));

        let mut recorder = Recorder::default();
        // Only the play-card branch should run, with the decoded index
        assert_eq!(action.dispatch(&mut recorder), "play_card");
        assert_eq!(recorder.calls, vec!["play_card 3".to_string()]);
    }

    #[test]
    fn test_dispatch_covers_every_variant() {
        let actions = [
            ArkhamAction::Investigate("01111".to_string()),
            ArkhamAction::TakeResource,
            ArkhamAction::DrawCard,
            ArkhamAction::PlayCard(0),
            ArkhamAction::Move("01112".to_string()),
        ];
        let mut recorder = Recorder::default();
        for action in &actions {
            action.dispatch(&mut recorder);
        }
        assert_eq!(
            recorder.calls,
            vec![
                "investigate 01111",
                "take_resource",
                "draw_card",
                "play_card 0",
                "move_to 01112"
            ]
        );
    }

    #[test]
    fn test_tags_match_the_wire_literals() {
        for kind in ArkhamActionType::ALL {
            assert_eq!(kind.tag().parse::<ArkhamActionType>(), Ok(kind));
        }
        assert_eq!(ArkhamActionType::Move.to_string(), "MoveAction");

        let error = "Move".parse::<ArkhamActionType>().unwrap_err();
        assert_eq!(error.expected(), "ArkhamActionType");
    }

    #[test]
    fn test_serialize_shapes() {
        assert_eq!(
            serde_json::to_value(ArkhamAction::Investigate("01111".to_string())).unwrap(),
            json!({"tag": "InvestigateAction", "contents": "01111"})
        );
        assert_eq!(
            serde_json::to_value(ArkhamAction::PlayCard(3)).unwrap(),
            json!({"tag": "PlayCardAction", "contents": 3})
        );
        // Payload-less actions still carry an empty contents array
        assert_eq!(
            serde_json::to_value(ArkhamAction::TakeResource).unwrap(),
            json!({"tag": "TakeResourceAction", "contents": []})
        );
        assert_eq!(
            serde_json::to_value(ArkhamAction::DrawCard).unwrap(),
            json!({"tag": "DrawCardAction", "contents": []})
        );
    }

    #[test]
    fn test_encoded_actions_decode_back() {
        let actions = [
            ArkhamAction::Investigate("01111".to_string()),
            ArkhamAction::TakeResource,
            ArkhamAction::DrawCard,
            ArkhamAction::PlayCard(7),
            ArkhamAction::Move("01112".to_string()),
        ];
        for action in actions {
            let text = serde_json::to_string(&action).unwrap();
            let decoded: ArkhamAction = serde_json::from_str(&text).unwrap();
            assert_eq!(decoded, action);
        }
    }

    #[test]
    fn test_empty_payload_variants_tolerate_missing_contents() {
        assert_eq!(
            decode::<ArkhamAction>(&json!({"tag": "DrawCardAction"})).unwrap(),
            ArkhamAction::DrawCard
        );

        let error =
            decode::<ArkhamAction>(&json!({"tag": "TakeResourceAction", "contents": [1]})).unwrap_err();
        assert_eq!(error.path(), "$.contents");
        assert_eq!(error.expected(), "[]");
    }

    #[test]
    fn test_payload_shape_follows_the_tag() {
        let error =
            decode::<ArkhamAction>(&json!({"tag": "PlayCardAction", "contents": "3"})).unwrap_err();
        assert_eq!(error.path(), "$.contents");

        let error = decode::<ArkhamAction>(&json!({"tag": "MoveAction"})).unwrap_err();
        assert!(matches!(error, DecodeError::MissingField { .. }));

        let error = decode::<ArkhamAction>(&json!({"tag": "FightAction", "contents": []})).unwrap_err();
        assert_eq!(error.path(), "$.tag");
        assert!(matches!(error, DecodeError::UnrecognizedValue { .. }));

        let error = decode::<ArkhamAction>(&json!({"tag": 4})).unwrap_err();
        assert_eq!(error.path(), "$.tag");
        assert_eq!(error.expected(), "ArkhamActionType");
    }
}
