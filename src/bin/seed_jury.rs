//! Create a jury account
//!
//! Jury accounts are provisioned out-of-band rather than through the API:
//!
//! ```text
//! seed_jury <jury_id> <name> <email> <department> <password>
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hacktrack::{
    config::CONFIG,
    db::{self, repositories::JuryRepository},
    utils::password,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [jury_id, name, email, department, plaintext] = args.as_slice() else {
        anyhow::bail!("usage: seed_jury <jury_id> <name> <email> <department> <password>");
    };

    let pool = db::create_pool(&CONFIG.database).await?;
    db::run_migrations(&pool).await?;

    let password_hash = password::hash_password(plaintext);
    let jury = JuryRepository::create(&pool, jury_id, name, email, department, &password_hash)
        .await?;

    tracing::info!(jury_id = %jury.jury_id, email = %jury.email, "Jury account created");

    Ok(())
}
