use anyhow::Context;
use crop_doctor_webapp::{api, app_state::AppState, config, llm};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Cargar .env e inicializar logging
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 2. Cargar configuración
    let cfg = config::AppConfig::from_env().context("Error al cargar la configuración")?;
    if cfg.groq_api_key.is_none() {
        warn!("GROQ_API_KEY no configurada: el chat y el análisis responderán con error.");
    }

    // 3. Inicializar gestor de LLMs
    let llm_manager =
        llm::LlmManager::from_config(&cfg).context("Error inicializando LLM Manager")?;
    info!(
        "Modelos: chat={}, visión={}",
        llm_manager.chat_model, llm_manager.vision_model
    );

    // 4. Estado compartido y router (API + frontend estático)
    let app_state = AppState::new(cfg.clone(), llm_manager);
    let app = api::create_app(app_state);

    // 5. Iniciar el servidor
    let listener = tokio::net::TcpListener::bind(&cfg.server_addr)
        .await
        .with_context(|| format!("No se pudo abrir {}", cfg.server_addr))?;
    info!("🚀 Servidor escuchando en http://{}", cfg.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Señal de apagado recibida, iniciando cierre del servidor.");
        })
        .await
        .context("Error en el servidor HTTP")?;

    info!("✅ Servidor cerrado correctamente.");
    Ok(())
}
