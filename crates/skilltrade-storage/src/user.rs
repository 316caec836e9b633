//! User storage - byte-level API for user profile persistence.

use crate::define_simple_storage;

define_simple_storage! {
    /// Low-level user storage with byte-level API
    pub struct UserStorage { table: "users" }
}
