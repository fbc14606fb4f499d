use anyhow::Context;
use stayfinder_app::modules;
use stayfinder_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load StayFinder settings")?;

    stayfinder_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        "stayfinder-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    tracing::info!(
        modules = registry.module_count(),
        "stayfinder-app bootstrap complete"
    );

    stayfinder_http::start_server(&registry, &settings).await?;

    registry.stop_modules().await?;
    Ok(())
}
