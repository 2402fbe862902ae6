use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_roundtrip() {
        let user_id = UserId::from_i64(7);
        assert_eq!(user_id.as_i64(), 7);
    }

    #[test]
    fn test_user_id_display() {
        let user_id = UserId::from_i64(7);
        assert_eq!(user_id.to_string(), "7");
    }
}
