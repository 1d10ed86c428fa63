//! Access policy: which role may perform which operation.
//!
//! This is the single source of truth for authorization. Handlers never
//! hand-roll role checks; they ask the policy (directly or through the
//! API layer's extractors).

use crate::project::Comment;

/// Well-known role names as they appear in JWT claims.
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Caller role. `Anonymous` means no credentials were presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Anonymous,
}

impl Role {
    /// Parse a role claim. Unknown role strings are treated as anonymous
    /// rather than rejected, so a stale token never escalates privileges.
    pub fn from_claim(claim: &str) -> Role {
        match claim {
            ROLE_ADMIN => Role::Admin,
            ROLE_USER => Role::User,
            _ => Role::Anonymous,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::User => ROLE_USER,
            Role::Anonymous => "anonymous",
        }
    }
}

/// An operation subject to authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List or fetch projects.
    ReadProjects,
    /// Create, patch, or delete a project.
    WriteProject,
    AddComment,
    /// Edit or delete a comment the caller authored.
    ModifyOwnComment,
    /// Edit or delete someone else's comment.
    ModifyAnyComment,
    AddReaction,
    Export,
    /// Overwrite the whole store from an import payload.
    Import,
}

/// The deployment-level policy. `public_read` controls whether anonymous
/// callers may browse projects; everything else is fixed.
#[derive(Debug, Clone, Copy)]
pub struct Policy {
    pub public_read: bool,
}

impl Policy {
    pub const fn new(public_read: bool) -> Self {
        Policy { public_read }
    }

    /// The authorization rule table.
    pub fn allows(&self, role: Role, action: Action) -> bool {
        use Action::*;
        match role {
            Role::Admin => true,
            Role::User => matches!(
                action,
                ReadProjects | AddComment | ModifyOwnComment | AddReaction | Export
            ),
            Role::Anonymous => matches!(action, ReadProjects) && self.public_read,
        }
    }

    /// Author-or-admin rule for comment edit/delete.
    pub fn can_modify_comment(&self, role: Role, caller_user_id: &str, comment: &Comment) -> bool {
        if comment.user_id == caller_user_id {
            self.allows(role, Action::ModifyOwnComment)
        } else {
            self.allows(role, Action::ModifyAnyComment)
        }
    }
}
