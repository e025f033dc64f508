//! Session collaborator contract and role-based page gating
//!
//! Authentication itself is delegated to the backend. This module only models
//! what the crate consumes from it: the current user and their role, and which
//! pages that role may open.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role as reported by the session collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Football club staff managing a roster
    Club,
    /// Independent or club-affiliated scout
    Scout,
    /// Platform administrator
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Club => f.write_str("club"),
            Role::Scout => f.write_str("scout"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub identifier: String,
    pub role: Role,
    pub display_name: String,
}

/// Session collaborator: who is signed in, if anyone
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;
}

/// A fixed session, for demos and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<CurrentUser>,
}

impl StaticSession {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<CurrentUser> {
        self.user.clone()
    }
}

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Roster,
    MatchMedia,
    AiScouting,
    Explore,
    Transfers,
    Messages,
    Wishlist,
}

impl Page {
    /// Menu order
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::Roster,
        Page::MatchMedia,
        Page::AiScouting,
        Page::Explore,
        Page::Transfers,
        Page::Messages,
        Page::Wishlist,
    ];

    /// Access policy for this page
    pub fn policy(&self) -> PageAccess {
        match self {
            Page::Dashboard | Page::Transfers | Page::Messages => PageAccess::Authenticated,
            Page::Roster | Page::MatchMedia | Page::AiScouting => {
                PageAccess::HasRole(vec![Role::Club, Role::Admin])
            }
            Page::Explore | Page::Wishlist => PageAccess::HasRole(vec![Role::Scout, Role::Admin]),
        }
    }
}

/// Authorization policy for a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAccess {
    /// Any signed-in user
    Authenticated,

    /// User must have one of these roles
    HasRole(Vec<Role>),
}

impl PageAccess {
    /// Check if the session satisfies this policy
    pub fn check(&self, user: Option<&CurrentUser>) -> bool {
        match self {
            PageAccess::Authenticated => user.is_some(),
            PageAccess::HasRole(roles) => user.is_some_and(|u| roles.contains(&u.role)),
        }
    }
}

/// Pages shown in the navigation menu for `user`, in menu order
pub fn menu_for(user: Option<&CurrentUser>) -> Vec<Page> {
    Page::ALL
        .into_iter()
        .filter(|page| page.policy().check(user))
        .collect()
}
