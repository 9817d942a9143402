//! Work-event records
//!
//! A `WorkRecord` describes one status a piece held, attributed to a user,
//! with a start time and an optional end time. Optional fields carry the
//! `ABSENT` sentinel (`-1`) instead of `Option` so that records stay `Copy`
//! and compare structurally on all six fields.

/// Sentinel stored in optional fields (`piece_id`, `user_id`, `end_time`)
pub const ABSENT: i64 = -1;

/// Last decimal digit that marks a status code as an error
const ERROR_DIGIT: i64 = 3;

/// One observed status event for a piece
///
/// Immutable once constructed. Equality and hashing cover every field, so two
/// records with the same `id` but different contents are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkRecord {
    id: i64,
    piece_id: i64,
    status: i64,
    user_id: i64,
    start_time: i64,
    end_time: i64,
}

impl WorkRecord {
    /// Create a record; absent optional fields must already be `ABSENT`
    pub fn new(
        id: i64,
        piece_id: i64,
        status: i64,
        user_id: i64,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            id,
            piece_id,
            status,
            user_id,
            start_time,
            end_time,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn piece_id(&self) -> i64 {
        self.piece_id
    }

    pub fn status(&self) -> i64 {
        self.status
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    pub fn end_time(&self) -> i64 {
        self.end_time
    }

    /// True when the record is attached to a piece
    pub fn has_piece(&self) -> bool {
        self.piece_id > ABSENT
    }

    /// True when the record is attributed to a user
    pub fn has_user(&self) -> bool {
        self.user_id > ABSENT
    }

    /// True when the status has finished (end time recorded)
    pub fn has_ended(&self) -> bool {
        self.end_time > 0
    }

    /// True when the status code ends in the error digit
    pub fn is_error_status(&self) -> bool {
        is_error_status(self.status)
    }

    /// Time spent in this status, or `None` while it is still in progress
    pub fn duration(&self) -> Option<i64> {
        self.has_ended()
            .then_some(self.end_time.saturating_sub(self.start_time))
    }
}

/// Status codes whose last decimal digit is 3 denote an error condition
pub fn is_error_status(status: i64) -> bool {
    status % 10 == ERROR_DIGIT
}
