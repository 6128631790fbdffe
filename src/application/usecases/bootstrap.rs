use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::application::usecases::authentication::hash_password;
use crate::config::config_model::AdminAuth;
use crate::domain::entities::admin_users::InsertAdminUserEntity;
use crate::domain::entities::hero_content::InsertHeroContentEntity;
use crate::domain::repositories::admin_users::AdminUserRepository;
use crate::domain::repositories::hero_content::HeroContentRepository;

const DEFAULT_ADMIN_ROLE: &str = "admin";

/// First-boot seeding: the single admin account and the hero singleton.
/// Both seeds are conflict-tolerant, so re-running at every boot is safe.
pub struct BootstrapUseCase<A, H>
where
    A: AdminUserRepository + Send + Sync + 'static,
    H: HeroContentRepository + Send + Sync + 'static,
{
    admin_user_repo: Arc<A>,
    hero_content_repo: Arc<H>,
}

impl<A, H> BootstrapUseCase<A, H>
where
    A: AdminUserRepository + Send + Sync + 'static,
    H: HeroContentRepository + Send + Sync + 'static,
{
    pub fn new(admin_user_repo: Arc<A>, hero_content_repo: Arc<H>) -> Self {
        Self {
            admin_user_repo,
            hero_content_repo,
        }
    }

    pub async fn run(&self, admin_auth: &AdminAuth) -> Result<()> {
        let password_hash = hash_password(&admin_auth.seed_password)?;

        self.admin_user_repo
            .seed(InsertAdminUserEntity {
                username: admin_auth.seed_username.clone(),
                password_hash,
                role: DEFAULT_ADMIN_ROLE.to_string(),
            })
            .await?;
        info!(username = %admin_auth.seed_username, "bootstrap: admin account ensured");

        self.hero_content_repo.seed(default_hero_content()).await?;
        info!("bootstrap: hero content ensured");

        Ok(())
    }
}

fn default_hero_content() -> InsertHeroContentEntity {
    InsertHeroContentEntity {
        id: 1,
        title: "Master the Art of Cryptocurrency Trading".to_string(),
        subtitle: "TRADING CRYPTO ACADEMY".to_string(),
        description: "The best trading education platform with experienced mentors.".to_string(),
        whatsapp_number: "6281234567890".to_string(),
        discord_invite_link: "https://discord.gg/your-invite-code".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    use crate::domain::repositories::admin_users::MockAdminUserRepository;
    use crate::domain::repositories::hero_content::MockHeroContentRepository;

    #[tokio::test]
    async fn seeds_admin_with_verifiable_hash_and_hero_defaults() {
        let mut admin_repo = MockAdminUserRepository::new();
        admin_repo
            .expect_seed()
            .withf(|entity| {
                let parsed = PasswordHash::new(&entity.password_hash).unwrap();
                entity.username == "admin"
                    && entity.role == "admin"
                    && Argon2::default()
                        .verify_password(b"ChangeMe123!", &parsed)
                        .is_ok()
            })
            .once()
            .returning(|_| Ok(()));

        let mut hero_repo = MockHeroContentRepository::new();
        hero_repo
            .expect_seed()
            .withf(|entity| entity.id == 1 && !entity.title.is_empty())
            .once()
            .returning(|_| Ok(()));

        let usecase = BootstrapUseCase::new(Arc::new(admin_repo), Arc::new(hero_repo));
        let admin_auth = AdminAuth {
            jwt_secret: "secret".to_string(),
            token_ttl_seconds: 3600,
            seed_username: "admin".to_string(),
            seed_password: "ChangeMe123!".to_string(),
        };

        usecase.run(&admin_auth).await.unwrap();
    }
}
