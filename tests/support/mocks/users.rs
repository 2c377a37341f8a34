// tests/support/mocks/users.rs
use once_cell::sync::Lazy;
use uuid::Uuid;

use quire_core::application::dto::AuthenticatedUser;
use quire_core::domain::user::{Role, UserId};

/// Fixed principals so assertions can compare owner ids.
pub static ALICE: Lazy<UserId> = Lazy::new(|| {
    UserId::new(
        Uuid::parse_str("5f0c2a4e-8a1d-4d8e-9a6b-0c1f2e3d4a5b")
            .expect("invalid uuid in tests/support/mocks/users.rs"),
    )
});

pub static BOB: Lazy<UserId> = Lazy::new(|| {
    UserId::new(
        Uuid::parse_str("7b3e9d10-1c2f-4a5b-8e7d-6f5a4b3c2d1e")
            .expect("invalid uuid in tests/support/mocks/users.rs"),
    )
});

pub fn author() -> AuthenticatedUser {
    AuthenticatedUser::new(*ALICE, "alice", Role::Author)
}

pub fn admin() -> AuthenticatedUser {
    AuthenticatedUser::new(*BOB, "bob", Role::Admin)
}
