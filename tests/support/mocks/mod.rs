// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod dp_repos;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

pub use dp_repos::{AlwaysTakenLookup, InMemoryDpRepository, RacingWriteRepo};
pub use security::{
    ADMIN_TOKEN, DummyTokenManager, EXPIRED_TOKEN, MEMBER_TOKEN, OTHER_MEMBER_TOKEN,
    StrictPasswordHasher,
};
pub use time::{FixedClock, fixed_now};
pub use user_repo::InMemoryUserRepo;
pub use util::SequenceIdGenerator;
