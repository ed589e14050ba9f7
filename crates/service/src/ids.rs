use uuid::Uuid;

/// Fresh record identifier: a random 128-bit UUIDv4 in hyphenated form.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
