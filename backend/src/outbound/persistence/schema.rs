//! Diesel table definitions.
//!
//! Must stay in step with `backend/migrations`.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Store-assigned identifier (`BIGSERIAL`).
        id -> Int8,
        name -> Text,
        email -> Text,
        /// Constrained to be non-negative by a `CHECK`.
        age -> Int4,
    }
}
