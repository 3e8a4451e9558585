//! Diesel schema for todo lifecycle persistence.

diesel::table! {
    /// Todo records with soft-delete support.
    todos (id) {
        /// Todo identifier.
        id -> Uuid,
        /// Task description text.
        #[max_length = 255]
        task -> Varchar,
        /// Completion flag, 0 or 1.
        is_done -> SmallInt,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Soft-deletion timestamp; null while the record is active.
        deleted_at -> Nullable<Timestamptz>,
    }
}
