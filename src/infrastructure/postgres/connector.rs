use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgConnection},
    Connection,
};
use std::str::FromStr;
use tracing::{debug, error, info, warn};
use crate::domain::{
    error::{HermesError, Result},
    ports::{SqlConnection, SqlConnector},
};

/// Opens PostgreSQL probes from either a `postgres://` URL or a libpq `key=value` string.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresConnector;

#[async_trait]
impl SqlConnector for PostgresConnector {
    async fn open(&self, credentials: &str) -> Result<Box<dyn SqlConnection>> {
        let options = parse_options(credentials)?;

        debug!("Parsed PostgreSQL options for host {}", options.get_host());
        Ok(Box::new(PostgresProbe {
            options,
            connection: None,
        }))
    }
}

fn parse_options(credentials: &str) -> Result<PgConnectOptions> {
    let credentials = credentials.trim();
    if credentials.starts_with("postgres://") || credentials.starts_with("postgresql://") {
        return PgConnectOptions::from_str(credentials).map_err(|e| {
            error!("Rejected PostgreSQL connection URL: {}", e);
            HermesError::InvalidCredentials
        });
    }
    parse_key_value(credentials)
}

/// `host=db port=5432 user=reader password=pw dbname=orders sslmode=disable`
fn parse_key_value(credentials: &str) -> Result<PgConnectOptions> {
    let mut options = PgConnectOptions::new();
    let mut pairs = 0;

    for pair in credentials.split_whitespace() {
        let Some((key, value)) = pair.split_once('=') else {
            error!("Rejected PostgreSQL connection string: `{}` is not a key=value pair", pair);
            return Err(HermesError::InvalidCredentials);
        };
        let value = value.trim_matches('\'');

        options = match key {
            "host" | "hostaddr" => options.host(value),
            "port" => options.port(value.parse().map_err(|e| {
                error!("Rejected PostgreSQL port {}: {}", value, e);
                HermesError::InvalidCredentials
            })?),
            "user" => options.username(value),
            "password" => options.password(value),
            "dbname" => options.database(value),
            "sslmode" => options.ssl_mode(value.parse().map_err(|e| {
                error!("Rejected PostgreSQL sslmode {}: {}", value, e);
                HermesError::InvalidCredentials
            })?),
            "sslrootcert" => options.ssl_root_cert(value),
            "application_name" => options.application_name(value),
            other => {
                debug!("Ignoring PostgreSQL connection parameter {}", other);
                options
            }
        };
        pairs += 1;
    }

    if pairs == 0 {
        error!("Rejected empty PostgreSQL connection string");
        return Err(HermesError::InvalidCredentials);
    }
    Ok(options)
}

/// Connects lazily on the first ping, like a `database/sql` style handle.
struct PostgresProbe {
    options: PgConnectOptions,
    connection: Option<PgConnection>,
}

#[async_trait]
impl SqlConnection for PostgresProbe {
    async fn ping(&mut self) -> Result<()> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => PgConnection::connect_with(&self.options).await.map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                HermesError::Unreachable
            })?,
        };
        let connection = self.connection.insert(connection);

        connection.ping().await.map_err(|e| {
            error!("PostgreSQL ping failed: {}", e);
            HermesError::Unreachable
        })?;

        info!("PostgreSQL endpoint {} is reachable", self.options.get_host());
        Ok(())
    }

    async fn close(self: Box<Self>) {
        if let Some(connection) = self.connection {
            if let Err(e) = connection.close().await {
                warn!("Failed to close PostgreSQL connection cleanly: {}", e);
            }
        }
    }
}
