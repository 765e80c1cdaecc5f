// src/engine/user_directory.rs

use std::collections::{HashMap, hash_map::Entry};

use crate::models::user::User;

/// Username -> account mapping.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user.
    ///
    /// Returns `false` if the username is already taken; the existing
    /// account is left untouched.
    pub fn register(&mut self, username: &str, password: &str) -> bool {
        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(User::new(username, password));
                true
            }
        }
    }

    /// True iff the user exists and the password matches exactly.
    pub fn validate(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|user| user.password == password)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_keeps_first_password() {
        let mut dir = UserDirectory::new();
        assert!(dir.register("alice", "x"));
        assert!(!dir.register("alice", "y"));
        assert!(dir.validate("alice", "x"));
        assert!(!dir.validate("alice", "y"));
        assert_eq!(dir.user_count(), 1);
    }

    #[test]
    fn unknown_user_never_validates() {
        let mut dir = UserDirectory::new();
        dir.register("alice", "x");
        assert!(!dir.validate("bob", "x"));
        assert!(!dir.validate("bob", ""));
    }

    #[test]
    fn password_comparison_is_case_sensitive() {
        let mut dir = UserDirectory::new();
        dir.register("carol", "Secret");
        assert!(!dir.validate("carol", "secret"));
        assert!(dir.validate("carol", "Secret"));
    }

    #[test]
    fn empty_password_is_accepted() {
        let mut dir = UserDirectory::new();
        assert!(dir.register("dave", ""));
        assert!(dir.validate("dave", ""));
        assert!(!dir.validate("dave", " "));
    }
}
