use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Unknown card: {card_id} {location}")]
    UnknownCard {
        card_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Unknown board view: {key} {location}")]
    UnknownView { key: String, location: ErrorLocation },

    #[error("Gateway error: {source} {location}")]
    Gateway {
        #[source]
        source: sm_client::ClientError,
        location: ErrorLocation,
    },
}

impl BoardError {
    #[track_caller]
    pub fn unknown_card(card_id: Uuid) -> Self {
        BoardError::UnknownCard {
            card_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_view<S: Into<String>>(key: S) -> Self {
        BoardError::UnknownView {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the underlying failure is a stale-version rejection
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            BoardError::Gateway { source, .. } if source.is_conflict()
        )
    }
}

impl From<sm_client::ClientError> for BoardError {
    #[track_caller]
    fn from(source: sm_client::ClientError) -> Self {
        BoardError::Gateway {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, BoardError>;
