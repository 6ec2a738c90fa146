//! Record ids: the first 8 hex digits of a v4 UUID.

pub fn short_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
