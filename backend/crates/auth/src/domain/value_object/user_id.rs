//! User ID
//!
//! The identity provider's `uid`, a UUIDv4 shared with the kernel so that
//! other crates can name users without depending on `auth`.

pub use kernel::id::UserId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_new() {
        let user_id = UserId::new();
        assert_eq!(user_id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_user_id_from_token_subject() {
        let user_id = UserId::new();
        let subject = user_id.to_string();
        assert_eq!(subject.parse::<UserId>().unwrap(), user_id);
    }
}
