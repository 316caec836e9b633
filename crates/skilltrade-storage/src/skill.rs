//! Skill catalog storage - byte-level API for canonical skill identities.

use crate::define_simple_storage;

define_simple_storage! {
    /// Low-level skill catalog storage with byte-level API
    pub struct SkillStorage { table: "skills" }
}
