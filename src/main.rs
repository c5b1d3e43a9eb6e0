use std::io::Read;
use std::{env, fs, io, process};

use arkham_types::logger;
use arkham_types::models::exit_code::ExitCode;
use arkham_types::models::settings::Settings;
use arkham_types::utils::logger::Logger;
use arkham_types::{decode, decode_locations, ArkhamAction, ArkhamLocation, PayloadError};
use serde_json::Value;

/// What a payload turned out to be once decoded.
#[derive(Debug)]
enum Decoded {
    Location(ArkhamLocation),
    Board(Vec<ArkhamLocation>),
    Action(ArkhamAction),
}

fn main() {
    let settings = Settings::load().unwrap_or_else(|e| {
        logger!(WARN, "[SETTINGS] Falling back to defaults: {e}");
        Settings::default()
    });
    Logger::set_verbose(settings.verbose);

    let path = env::args().nth(1).or_else(|| settings.payload_path.clone());
    let code = match inspect(path.as_deref(), settings.pretty) {
        Ok(()) => ExitCode::Decoded,
        Err(error) => {
            logger!(ERROR, "[INSPECT] {error}");
            ExitCode::from(&error)
        }
    };
    process::exit(code as i32);
}

fn inspect(path: Option<&str>, pretty: bool) -> Result<(), PayloadError> {
    let raw = read_payload(path)?;
    logger!(DEBUG, "[INSPECT] Read {} bytes from {}", raw.len(), path.unwrap_or("stdin"));

    let value: Value = serde_json::from_str(&raw)?;
    let encoded = match classify(&value)? {
        Decoded::Location(location) => {
            logger!(
                INFO,
                "[LOCATION] {} ({}) {} shroud={} clues={} doom={}",
                location.name(),
                location.card_code(),
                location.status(),
                location.shroud(),
                location.clues(),
                location.doom()
            );
            encode(&location, pretty)?
        }
        Decoded::Board(board) => {
            logger!(INFO, "[BOARD] {} locations", board.len());
            for location in &board {
                logger!(DEBUG, "[BOARD] {} ({})", location.name(), location.status());
            }
            encode(&board, pretty)?
        }
        Decoded::Action(action) => {
            logger!(INFO, "[ACTION] {}", action.action_type());
            encode(&action, pretty)?
        }
    };

    println!("{encoded}");
    Ok(())
}

fn read_payload(path: Option<&str>) -> Result<String, io::Error> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Arrays are board snapshots, objects with a `tag` are actions, anything
/// else must be a single location.
fn classify(value: &Value) -> Result<Decoded, PayloadError> {
    let decoded = match value {
        Value::Array(_) => Decoded::Board(decode_locations(value)?),
        Value::Object(fields) if fields.contains_key("tag") => Decoded::Action(decode(value)?),
        _ => Decoded::Location(decode(value)?),
    };
    Ok(decoded)
}

fn encode<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkham_types::{ArkhamActionType, Decode, DecodeError};
    use serde_json::json;
    use uuid::Uuid;

    fn attic() -> Value {
        json!({
            "name": "Attic",
            "cardCode": "01111",
            "locationSymbol": "Circle",
            "connectedLocationSymbols": ["Heart"],
            "shroud": 2,
            "image": "attic.jpg",
            "investigators": [],
            "enemies": [],
            "clues": 1,
            "doom": 0,
            "status": "Unrevealed"
        })
    }

    /// Writes `contents` to a fresh file under the temp dir and returns its path.
    fn payload_file(contents: &str) -> String {
        let path = env::temp_dir().join(format!("arkham-inspect-{}.json", Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_array_is_a_board() {
        let decoded = classify(&json!([attic(), attic()])).unwrap();
        assert!(matches!(decoded, Decoded::Board(ref board) if board.len() == 2));
    }

    #[test]
    fn test_tagged_object_is_an_action() {
        let decoded = classify(&json!({"tag": "MoveAction", "contents": "01112"})).unwrap();
        match decoded {
            Decoded::Action(action) => assert_eq!(action, ArkhamAction::Move("01112".to_string())),
            other => panic!("expected an action, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_object_is_a_location() {
        let decoded = classify(&attic()).unwrap();
        assert!(matches!(decoded, Decoded::Location(ref location) if location.name() == "Attic"));
    }

    #[test]
    fn test_bad_tag_fails_as_an_action() {
        let error = classify(&json!({"tag": "FightAction", "contents": []})).unwrap_err();
        match error {
            // The action decoder rejected it, not the location decoder
            PayloadError::Decode(DecodeError::UnrecognizedValue { path, expected, .. }) => {
                assert_eq!(path, "$.tag");
                assert_eq!(expected, ArkhamActionType::TYPE_NAME);
            }
            other => panic!("expected an action decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_payload_fails_as_a_location() {
        let error = classify(&json!("Attic")).unwrap_err();
        assert!(matches!(
            error,
            PayloadError::Decode(DecodeError::TypeMismatch { ref expected, .. }) if expected == "ArkhamLocation"
        ));
    }

    #[test]
    fn test_inspect_decodes_a_file() {
        let path = payload_file(&attic().to_string());
        assert!(inspect(Some(&path), false).is_ok());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_inspect_failures_map_to_exit_codes() {
        let missing = env::temp_dir().join(format!("arkham-inspect-{}.json", Uuid::new_v4()));
        let error = inspect(missing.to_str(), false).unwrap_err();
        assert_eq!(ExitCode::from(&error), ExitCode::ReadFailed);

        let path = payload_file("{\"name\": ");
        let error = inspect(Some(&path), false).unwrap_err();
        assert_eq!(ExitCode::from(&error), ExitCode::MalformedJson);
        fs::remove_file(path).unwrap();

        let path = payload_file(r#"{"tag": "FightAction", "contents": []}"#);
        let error = inspect(Some(&path), true).unwrap_err();
        assert_eq!(ExitCode::from(&error), ExitCode::DecodeFailed);
        fs::remove_file(path).unwrap();
    }
}
