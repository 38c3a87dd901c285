// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, gate::ensure_allowed};
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::{article::ArticleId, policy::Action},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Hard delete, reserved to administrators.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        ensure_allowed(actor, Action::Delete)?;
        let id = ArticleId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
