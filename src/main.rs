//! Portal client entrypoint: loads configuration, restores the persisted
//! session and refreshes the view the session lands on.

use std::env;

use config::Config;
use dotenvy::dotenv;

use govportal_client::domain::session::Role;
use govportal_client::models::config::ClientConfig;
use govportal_client::{bootstrap, catalog, services};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let client_config = match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let (backend, mut state) = bootstrap(&client_config);
    log::info!(
        "{} services available against {}",
        catalog::SERVICES.len(),
        client_config.api_base_url
    );

    match state.session().cloned() {
        None => {
            log::info!("No persisted session; starting at {}", state.view());
        }
        Some(session) => {
            log::info!(
                "Restored {:?} session for {}",
                session.role,
                session.identity.display_identity
            );
            match session.role {
                Role::Citizen => {
                    match services::application::load_dashboard(&backend, &mut state).await {
                        Ok(outcome) => {
                            if let Some(dashboard) = outcome.applied() {
                                log::info!(
                                    "{} application(s) on file, profile present: {}",
                                    dashboard.applications.len(),
                                    dashboard.has_profile()
                                );
                            }
                        }
                        Err(err) => log::warn!("Could not refresh dashboard: {err}"),
                    }
                }
                Role::Administrator => match services::admin::load_all(&backend, &state).await {
                    Ok(data) => log::info!(
                        "{} applications total, {} pending review",
                        data.stats.total,
                        data.stats.pending
                    ),
                    Err(err) => log::warn!("Could not load admin dashboard: {err}"),
                },
            }
        }
    }
}
