//! Engine-specific database creation.
//!
//! All engines share the same required fields (server, project, environment
//! selector); engine options such as `postgres_user` or `redis_password` go
//! in `extra`.

use std::sync::Arc;

use log::debug;
use serde_json::{json, Value};

use coolify_core::{merge_payload, EnvSelector};

use crate::errors::Result;
use crate::http::HttpClient;

/// Creation endpoints of the databases namespace.
#[derive(Debug, Clone)]
pub struct DatabaseCreate {
    http: Arc<HttpClient>,
}

macro_rules! database_engines {
    ($(($method:ident, $endpoint:literal, $doc:literal)),+ $(,)?) => {
        $(
            #[doc = $doc]
            pub async fn $method(
                &self,
                server_uuid: &str,
                project_uuid: &str,
                env: EnvSelector,
                extra: Option<Value>,
            ) -> Result<Value> {
                self.create($endpoint, server_uuid, project_uuid, env, extra).await
            }
        )+
    };
}

impl DatabaseCreate {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    async fn create(
        &self,
        endpoint: &str,
        server_uuid: &str,
        project_uuid: &str,
        env: EnvSelector,
        extra: Option<Value>,
    ) -> Result<Value> {
        let base = json!({
            "server_uuid": server_uuid,
            "project_uuid": project_uuid,
        });
        let mut payload = merge_payload(base, extra)?;
        if let Value::Object(ref mut map) = payload {
            env.apply(map);
        }
        debug!("Creating database via {}", endpoint);
        self.http.post(endpoint, &[], Some(&payload)).await
    }

    database_engines! {
        (postgresql, "databases/postgresql", "Create a PostgreSQL database."),
        (clickhouse, "databases/clickhouse", "Create a Clickhouse database."),
        (dragonfly, "databases/dragonfly", "Create a DragonFly database."),
        (redis, "databases/redis", "Create a Redis database."),
        (keydb, "databases/keydb", "Create a KeyDB database."),
        (mariadb, "databases/mariadb", "Create a MariaDB database."),
        (mysql, "databases/mysql", "Create a MySQL database."),
        (mongodb, "databases/mongodb", "Create a MongoDB database."),
    }
}
