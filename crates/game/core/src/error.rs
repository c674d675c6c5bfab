//! Error infrastructure for tactics-core.
//!
//! Every failure the core can observe is one of four kinds: a handle that does
//! not resolve, a placement onto an occupied tile, a lookup that finds nothing,
//! or a confirm aimed outside the legal set. None of them is fatal. The
//! registry and grid report them as [`GridError`]; the facade and the selection
//! state machine log them and degrade to a no-op.

use crate::state::{EntityId, Position, TileId};

/// Severity level of an error, used to pick a log level and recovery strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request was sound but the board state refused it (tile taken,
    /// destination out of the highlighted set). Retrying elsewhere may work.
    Recoverable,

    /// The request itself was malformed (handle or coordinate does not
    /// resolve).
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common classification interface for tactics-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for metrics, logs, and tests.
    fn error_code(&self) -> &'static str;
}

/// Failures surfaced by grid, registry, and turn-action operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    #[error("tile {0} does not belong to the grid")]
    InvalidTile(TileId),

    #[error("entity {0} is already placed on the board")]
    DuplicateEntity(EntityId),

    #[error("tile {tile} is already occupied by {occupant}")]
    AlreadyOccupied { tile: TileId, occupant: EntityId },

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("no tile at {0}")]
    PositionNotFound(Position),

    #[error("tile {tile} is not a legal destination")]
    IllegalDestination { tile: TileId },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidTile(_) | Self::DuplicateEntity(_) => ErrorSeverity::Validation,
            Self::EntityNotFound(_) | Self::PositionNotFound(_) => ErrorSeverity::Validation,
            Self::AlreadyOccupied { .. } | Self::IllegalDestination { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTile(_) | Self::DuplicateEntity(_) => "invalid_argument",
            Self::AlreadyOccupied { .. } => "already_occupied",
            Self::EntityNotFound(_) | Self::PositionNotFound(_) => "not_found",
            Self::IllegalDestination { .. } => "illegal_destination",
        }
    }
}

/// Logs a degraded call at a level matching the error severity.
pub(crate) fn log_degraded(operation: &'static str, error: &GridError) {
    let severity = error.severity();
    match severity {
        ErrorSeverity::Validation => tracing::warn!(
            "{} - {} [{}/{}] -- ignored",
            operation,
            error,
            severity.as_str(),
            error.error_code()
        ),
        ErrorSeverity::Recoverable => tracing::info!(
            "{} - {} [{}/{}] -- rejected",
            operation,
            error,
            severity.as_str(),
            error.error_code()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_the_four_categories() {
        assert_eq!(GridError::InvalidTile(TileId(9)).error_code(), "invalid_argument");
        assert_eq!(
            GridError::AlreadyOccupied {
                tile: TileId(1),
                occupant: EntityId(1)
            }
            .error_code(),
            "already_occupied"
        );
        assert_eq!(GridError::EntityNotFound(EntityId(3)).error_code(), "not_found");
        assert_eq!(
            GridError::IllegalDestination { tile: TileId(0) }.error_code(),
            "illegal_destination"
        );
    }

    #[test]
    fn rejections_are_recoverable() {
        let error = GridError::IllegalDestination { tile: TileId(0) };
        assert!(error.severity().is_recoverable());
        assert_eq!(
            GridError::EntityNotFound(EntityId(1)).severity(),
            ErrorSeverity::Validation
        );
    }

    #[test]
    fn off_board_coordinates_are_validation_errors() {
        let error = GridError::PositionNotFound(Position::new(-1, 7));
        assert_eq!(error.error_code(), "not_found");
        assert_eq!(error.severity().as_str(), "validation");
        assert_eq!(error.to_string(), "no tile at (-1, 7)");
    }
}
