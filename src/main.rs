// src/main.rs

use quiz_backend::config::Config;
use quiz_backend::engine::{QuestionBank, QuizEngine};
use quiz_backend::routes;
use quiz_backend::state::AppState;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if config.jwt_secret_generated {
        tracing::warn!("JWT_SECRET not set, using a random secret for this process");
    }

    let bank = match &config.quiz_bank_path {
        Some(path) => {
            tracing::info!("Loading quiz bank from {}", path.display());
            QuestionBank::from_file(path)?
        }
        None => QuestionBank::general_knowledge()?,
    };
    tracing::info!("{} quiz(zes) loaded", bank.list_quizzes().len());

    let engine = QuizEngine::new(bank);
    seed_admin_user(&engine, &config);

    let state = AppState::new(engine, config.clone());

    // Create the Axum application router
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

fn seed_admin_user(engine: &QuizEngine, config: &Config) {
    if engine.register_user(&config.admin_username, &config.admin_password) {
        tracing::info!("Seeded admin user: {}", config.admin_username);
    }
    tracing::info!("{} user(s) registered", engine.user_count());
}
