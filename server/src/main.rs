use std::path::Path;

use color_eyre::eyre::Result;
use leptos::config::get_configuration;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    server::init_tracing(tracing::Level::INFO);

    // Address and site root come from [[workspace.metadata.leptos]] or LEPTOS_* env vars.
    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let site_root = conf.leptos_options.site_root.to_string();

    let app = server::create_router(Path::new(&site_root));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("serving {site_root} on http://{addr}");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
