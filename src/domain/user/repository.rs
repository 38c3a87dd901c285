// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::User;
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;
}
