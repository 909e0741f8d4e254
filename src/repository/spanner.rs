use anyhow::{Context, Result};
use async_trait::async_trait;
use gcloud_gax::grpc::Code;
use gcloud_googleapis::spanner::admin::database::v1::{
    CreateDatabaseRequest, GetDatabaseDdlRequest, GetDatabaseRequest, UpdateDatabaseDdlRequest,
};
use gcloud_googleapis::spanner::admin::instance::v1::{
    CreateInstanceRequest, GetInstanceRequest, Instance,
};
use gcloud_spanner::admin::AdminClientConfig;
use gcloud_spanner::admin::client::Client as AdminClient;
use gcloud_spanner::client::{Client, ClientConfig};
use gcloud_spanner::key::{Key, all_keys};
use gcloud_spanner::mutation::{delete, insert_or_update};
use gcloud_spanner::statement::Statement;
use std::sync::Arc;

use super::{TodoRepository, assign_id};
use crate::config::SpannerConfig;
use crate::models::Todo;

const TABLE: &str = "todos";

const CREATE_TABLE_DDL: &str = r#"
CREATE TABLE todos (
    id STRING(MAX) NOT NULL,
    text STRING(MAX) NOT NULL,
    done BOOL NOT NULL,
) PRIMARY KEY (id)
"#;

/// Todo repository backed by a Cloud Spanner table
///
/// Connects to the emulator when `SPANNER_EMULATOR_HOST` is set, production
/// Spanner otherwise.
#[derive(Clone)]
pub struct SpannerTodoRepository {
    inner: Arc<Client>,
}

impl SpannerTodoRepository {
    /// Provision the instance, database and `todos` table if missing, then connect.
    pub async fn from_config(config: &SpannerConfig) -> Result<Self> {
        auto_provision(config).await?;

        let database_path = config.database_path();

        match &config.emulator_host {
            Some(host) => tracing::info!("Connecting to Spanner emulator at: {}", host),
            None => tracing::info!("Connecting to production Spanner"),
        }

        // ClientConfig::default() picks up SPANNER_EMULATOR_HOST on its own
        let client = Client::new(&database_path, ClientConfig::default())
            .await
            .context("Failed to create Spanner client")?;

        tracing::info!("Successfully connected to Spanner database: {}", database_path);

        Ok(Self {
            inner: Arc::new(client),
        })
    }

    async fn query(&self, statement: Statement) -> Result<Vec<Todo>> {
        let mut tx = self
            .inner
            .single()
            .await
            .context("Failed to create read transaction")?;

        let mut result_set = tx
            .query(statement)
            .await
            .context("Failed to query todos from Spanner")?;

        let mut todos = Vec::new();
        while let Some(row) = result_set.next().await? {
            let id: String = row.column_by_name("id")?;
            todos.push(Todo {
                id: Some(id),
                text: row.column_by_name("text")?,
                done: row.column_by_name("done")?,
            });
        }
        Ok(todos)
    }
}

#[async_trait]
impl TodoRepository for SpannerTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>> {
        let statement = Statement::new("SELECT id, text, done FROM todos ORDER BY id");
        let todos = self.query(statement).await?;
        tracing::debug!("Listed {} todos", todos.len());
        Ok(todos)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>> {
        let mut statement = Statement::new("SELECT id, text, done FROM todos WHERE id = @id");
        statement.add_param("id", &id.to_string());

        let todo = self.query(statement).await?.into_iter().next();
        if todo.is_none() {
            tracing::debug!("Todo not found with id: {}", id);
        }
        Ok(todo)
    }

    async fn save(&self, mut todo: Todo) -> Result<Todo> {
        let id = assign_id(&todo);

        let mutation = insert_or_update(
            TABLE,
            &["id", "text", "done"],
            &[&id, &todo.text, &todo.done],
        );

        self.inner
            .apply(vec![mutation])
            .await
            .context("Failed to save todo to Spanner")?;

        tracing::debug!("Saved todo with id: {}", id);
        todo.id = Some(id);
        Ok(todo)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let key = id.to_string();
        self.inner
            .apply(vec![delete(TABLE, Key::new(&key))])
            .await
            .context("Failed to delete todo from Spanner")?;

        tracing::debug!("Deleted todo with id: {}", id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.inner
            .apply(vec![delete(TABLE, all_keys())])
            .await
            .context("Failed to delete all todos from Spanner")?;
        Ok(())
    }
}

/// Create the configured instance, database and table when they don't exist,
/// so a fresh emulator needs no manual setup.
async fn auto_provision(config: &SpannerConfig) -> Result<()> {
    tracing::info!("Starting auto-provisioning checks...");

    let admin_client = AdminClient::new(AdminClientConfig::default())
        .await
        .context("Failed to create Spanner admin client")?;

    let project_path = format!("projects/{}", config.project);
    let instance_path = format!("{}/instances/{}", project_path, config.instance);
    let database_path = config.database_path();

    ensure_instance_exists(&admin_client, config, &project_path, &instance_path).await?;
    ensure_database_exists(&admin_client, config, &instance_path, &database_path).await?;
    ensure_table_exists(&admin_client, &database_path).await?;

    tracing::info!("Auto-provisioning complete");
    Ok(())
}

async fn ensure_instance_exists(
    admin_client: &AdminClient,
    config: &SpannerConfig,
    project_path: &str,
    instance_path: &str,
) -> Result<()> {
    let get_request = GetInstanceRequest {
        name: instance_path.to_string(),
        field_mask: None,
    };

    match admin_client.instance().get_instance(get_request, None).await {
        Ok(_) => {
            tracing::info!("Instance already exists: {}", instance_path);
            Ok(())
        }
        Err(status) if status.code() == Code::NotFound => {
            tracing::info!("Instance not found, creating: {}", instance_path);

            let instance_config = if config.emulator_host.is_some() {
                format!("{}/instanceConfigs/emulator-config", project_path)
            } else {
                format!("{}/instanceConfigs/regional-us-central1", project_path)
            };

            let create_request = CreateInstanceRequest {
                parent: project_path.to_string(),
                instance_id: config.instance.clone(),
                instance: Some(Instance {
                    name: instance_path.to_string(),
                    config: instance_config,
                    display_name: format!("{} instance", config.instance),
                    node_count: 1,
                    ..Default::default()
                }),
            };

            admin_client
                .instance()
                .create_instance(create_request, None)
                .await
                .context("Failed to start instance creation")?
                .wait(None)
                .await
                .context("Failed to create instance")?;

            tracing::info!("Instance created successfully: {}", instance_path);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to check instance existence: {}",
            e.message()
        )),
    }
}

async fn ensure_database_exists(
    admin_client: &AdminClient,
    config: &SpannerConfig,
    instance_path: &str,
    database_path: &str,
) -> Result<()> {
    let get_request = GetDatabaseRequest {
        name: database_path.to_string(),
    };

    match admin_client.database().get_database(get_request, None).await {
        Ok(_) => {
            tracing::info!("Database already exists: {}", database_path);
            Ok(())
        }
        Err(status) if status.code() == Code::NotFound => {
            tracing::info!("Database not found, creating: {}", database_path);

            let create_request = CreateDatabaseRequest {
                parent: instance_path.to_string(),
                create_statement: format!("CREATE DATABASE `{}`", config.database),
                extra_statements: vec![],
                encryption_config: None,
                database_dialect: 1, // Google Standard SQL
                proto_descriptors: vec![],
            };

            admin_client
                .database()
                .create_database(create_request, None)
                .await
                .context("Failed to start database creation")?
                .wait(None)
                .await
                .context("Failed to create database")?;

            tracing::info!("Database created successfully: {}", database_path);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!(
            "Failed to check database existence: {}",
            e.message()
        )),
    }
}

async fn ensure_table_exists(admin_client: &AdminClient, database_path: &str) -> Result<()> {
    let get_ddl_request = GetDatabaseDdlRequest {
        database: database_path.to_string(),
    };

    let statements = admin_client
        .database()
        .get_database_ddl(get_ddl_request, None)
        .await
        .context("Failed to get database DDL")?
        .into_inner()
        .statements;

    if statements.iter().any(|stmt| declares_todos_table(stmt)) {
        tracing::info!("Table '{}' already exists", TABLE);
        return Ok(());
    }

    tracing::info!("Table '{}' not found, creating...", TABLE);

    let update_request = UpdateDatabaseDdlRequest {
        database: database_path.to_string(),
        statements: vec![CREATE_TABLE_DDL.trim().to_string()],
        operation_id: String::new(),
        proto_descriptors: vec![],
        throughput_mode: false,
    };

    admin_client
        .database()
        .update_database_ddl(update_request, None)
        .await
        .context("Failed to start table creation")?
        .wait(None)
        .await
        .context("Failed to create table")?;

    tracing::info!("Table '{}' created successfully", TABLE);
    Ok(())
}

fn declares_todos_table(ddl: &str) -> bool {
    ddl.contains("CREATE TABLE todos ") || ddl.contains("CREATE TABLE `todos`")
}
