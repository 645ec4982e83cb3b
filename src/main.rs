mod frontend;

use dioxus::LaunchBuilder;
use frontend::app::App;
use workdesk::config::AppConfig;
use workdesk::router::views::preload_all;
use workdesk::router::{RouteTable, StaticViewResolver};
use workdesk::session::TokenStore;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Logging setup
    env_logger::Builder::new()
        .parse_filters(&config.logging.filter)
        .init();

    let table = RouteTable::standard();
    table.validate()?;
    config.validate(&table)?;

    let store = TokenStore::from_config(&config.session)?;

    // Short-lived runtime for start-up work; the renderer brings its own
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let views = preload_all(&StaticViewResolver::new(), &table).await?;
        log::debug!("{} views available", views.len());
        if store.load().await? {
            log::info!("Signed in from a previous session");
        }
        anyhow::Ok(())
    })?;
    drop(runtime);

    log::info!(
        "Starting with base path {} and unmatched policy {}",
        config.router.base_path,
        config.router.unmatched
    );

    let builder = LaunchBuilder::new().with_context(config).with_context(store);
    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop_config());
    builder.launch(App);

    Ok(())
}

#[cfg(feature = "desktop")]
fn desktop_config() -> dioxus_desktop::Config {
    use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

    let size = LogicalSize::new(1100.0, 720.0);
    Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("WorkDesk")
                .with_inner_size(size)
                .with_min_inner_size(size),
        )
        .with_menu(None)
}
