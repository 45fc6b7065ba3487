//! Repository traits

mod repositories;

pub use repositories::{
    ChatRepository, MemberRepository, MessageRepository, RepoResult, UserRepository,
};
