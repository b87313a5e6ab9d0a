//! Mock data builders for creating test options.
//!
//! This module provides builder patterns for creating option lists and
//! widget props without repeating projection boilerplate in every test.

use simple_select::{OptionProjections, SelectProps};

/// Option type used across the integration tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
}

/// Builder for creating test users
pub struct UserBuilder {
    user: User,
}

#[allow(dead_code)]
impl UserBuilder {
    /// Create a new user builder with the given ID
    pub fn new(id: u32) -> Self {
        Self {
            user: User {
                id,
                name: format!("User {id}"),
            },
        }
    }

    /// Set the display name
    pub fn name(mut self, name: &str) -> Self {
        self.user.name = name.to_string();
        self
    }

    /// Build the user
    pub fn build(self) -> User {
        self.user
    }
}

/// Key by id, label by name, compare by id
pub fn user_projections() -> OptionProjections<User> {
    OptionProjections::new(|u: &User| u.id.to_string(), |u: &User| u.name.clone(), |u: &User| u.id)
}

/// Three users whose names overlap on "arry"
pub fn cartwrights() -> Vec<User> {
    vec![
        UserBuilder::new(1).name("Larry Cartwright").build(),
        UserBuilder::new(2).name("Lorenzo Kris").build(),
        UserBuilder::new(3).name("Barry Cartwright").build(),
    ]
}

/// Five users with distinct names
#[allow(dead_code)]
pub fn five_users() -> Vec<User> {
    vec![
        UserBuilder::new(1).name("Ada Lovelace").build(),
        UserBuilder::new(2).name("Alan Turing").build(),
        UserBuilder::new(3).name("Grace Hopper").build(),
        UserBuilder::new(4).name("Edsger Dijkstra").build(),
        UserBuilder::new(5).name("Barbara Liskov").build(),
    ]
}

/// Props over `options` with user projections and the given change callback
#[allow(dead_code)]
pub fn user_props<F>(options: Vec<User>, on_change: F) -> SelectProps<User>
where
    F: Fn(Option<User>) + Send + Sync + 'static,
{
    SelectProps::new(options, user_projections(), on_change)
}
