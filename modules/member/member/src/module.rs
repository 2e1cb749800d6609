use std::sync::Arc;

use axum::Router;
use member_sdk::MemberApi;
use tracing::info;

use crate::api::rest::routes;
use crate::config::MemberConfig;
use crate::domain::repo::MemberRepository;
use crate::domain::service::Service;
use crate::infra::storage::{InMemoryMemberRepository, SeaOrmMemberRepository};
use crate::local_client::LocalClient;

/// Wires the member store, domain service, REST routes and in-process client.
pub struct MemberModule {
    service: Arc<Service>,
}

impl MemberModule {
    /// Builds the module over a SQL store when `dsn` is given, otherwise over
    /// the in-memory store.
    ///
    /// # Errors
    /// Returns an error if the database cannot be reached or migrated.
    pub async fn init(config: &MemberConfig, dsn: Option<&str>) -> anyhow::Result<Self> {
        info!("Initializing member module");

        let repo: Arc<dyn MemberRepository> = match dsn {
            Some(dsn) => {
                info!("Using SQL member store");
                Arc::new(SeaOrmMemberRepository::connect(dsn).await?)
            }
            None => {
                info!("No database configured, using in-memory member store");
                Arc::new(InMemoryMemberRepository::new())
            }
        };

        let module = Self::with_repository(repo, config);
        info!("Member module initialized");
        Ok(module)
    }

    #[must_use]
    pub fn with_repository(repo: Arc<dyn MemberRepository>, config: &MemberConfig) -> Self {
        let service = Service::new(repo, config.to_service_config());
        Self {
            service: Arc::new(service),
        }
    }

    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering member REST routes");
        routes::register_routes(router, self.service.clone())
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn MemberApi> {
        Arc::new(LocalClient::new(self.service.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use member_sdk::{MemberPatch, NewMember};

    #[tokio::test]
    async fn test_init_without_database_uses_memory_store() {
        let module = MemberModule::init(&MemberConfig::default(), None)
            .await
            .unwrap();
        let client = module.client();

        client
            .create_member(NewMember {
                id: "1".to_owned(),
                member_id: "M1".to_owned(),
                ..NewMember::default()
            })
            .await
            .unwrap();
        assert_eq!(client.get_member("1", "M1").await.unwrap().version, 1);
    }

    #[tokio::test]
    async fn test_config_reaches_service() {
        let config = MemberConfig {
            treat_empty_as_unset: false,
            ..MemberConfig::default()
        };
        let module =
            MemberModule::with_repository(Arc::new(InMemoryMemberRepository::new()), &config);
        let client = module.client();
        client
            .create_member(NewMember {
                id: "1".to_owned(),
                member_id: "M1".to_owned(),
                ..NewMember::default()
            })
            .await
            .unwrap();

        let applied = client
            .patch_member(MemberPatch {
                email: Some(String::new()),
                ..MemberPatch::new("1", "M1")
            })
            .await
            .unwrap();
        assert_eq!(applied, 1);
    }
}
