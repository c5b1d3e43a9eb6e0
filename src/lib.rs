//! Client-side types for the Arkham Horror companion: player actions and
//! board locations, with an explicit JSON decoder for server payloads.

pub mod decoder;
pub mod models;
pub mod utils;

pub use decoder::{decode, Decode};
pub use models::action::{ActionHandler, ArkhamAction, ArkhamActionType};
pub use models::location::{
    decode_locations, ArkhamLocation, ArkhamLocationStatus, ArkhamLocationSymbol,
};
pub use utils::errors::{DecodeError, PayloadError};
