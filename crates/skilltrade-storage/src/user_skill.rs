//! User skill storage - byte-level API for per-user skill declarations.

use crate::define_simple_storage;

define_simple_storage! {
    /// Low-level user-skill storage with byte-level API
    pub struct UserSkillStorage { table: "user_skills" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redb::Database;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_put_get_and_delete() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = UserSkillStorage::new(db).unwrap();

        storage.put_raw("us-001", b"row").unwrap();
        assert_eq!(storage.get_raw("us-001").unwrap().unwrap(), b"row");

        let deleted = storage.delete("us-001").unwrap();
        assert!(deleted);
        assert!(storage.get_raw("us-001").unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_returns_false() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db = Arc::new(Database::create(db_path).unwrap());
        let storage = UserSkillStorage::new(db).unwrap();

        assert!(!storage.delete("us-404").unwrap());
    }
}
