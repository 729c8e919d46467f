//! Diesel schema for task persistence.

diesel::table! {
    /// Assigned task records.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Owning account identifier.
        owner_id -> Uuid,
        /// Task name.
        #[max_length = 200]
        task_name -> Varchar,
        /// Assignment date.
        assigned_on -> Timestamptz,
        /// Projected submission date.
        projected_submission -> Timestamptz,
        /// Actual submission date, when set.
        actual_submission -> Nullable<Timestamptz>,
        /// Free-form progress marker.
        progress -> Text,
        /// Free-form report-submission marker.
        report_submission -> Text,
        /// Free-form review text.
        review -> Text,
        /// Rating on a 0 to 5 scale.
        rating -> Int2,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
