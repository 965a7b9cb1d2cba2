// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - Static file serving for the hydration bundle
//
// The product backend is a separate service; its location comes from
// PRODUCT_API_URL and is handed to the browser through the rendered page.

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
const HEALTH_PROBE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(3);

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::prelude::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use leptos_meta::MetaTags;
    use product_manager::web_app::app::App as WebApp;
    use product_manager::web_app::config::ClientConfig;
    use tracing_subscriber::EnvFilter;

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Product API: {}", config.api_url);

    probe_backend(&config).await;

    // Leptos configuration
    let conf = leptos_config::get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list({
            let config = config.clone();
            move || view! { <WebApp config=config.clone() /> }
        });
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with proper shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                let config = config.clone();
                move || {
                    view! {
                        <!DOCTYPE html>
                        <html lang="en">
                            <head>
                                <meta charset="utf-8"/>
                                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                                <AutoReload options=leptos_options.clone() />
                                <HydrationScripts options=leptos_options.clone()/>
                                <MetaTags/>
                            </head>
                            <body>
                                <WebApp config=config.clone() />
                            </body>
                        </html>
                    }
                }
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

/// Check that the product backend answers before serving pages
///
/// Only logs: the page still works once the backend comes up.
#[cfg(feature = "ssr")]
async fn probe_backend(config: &product_manager::web_app::config::ClientConfig) {
    use product_manager::web_app::api::{HttpProductApi, ProductApi};

    let api = HttpProductApi::new(config);

    match tokio::time::timeout(HEALTH_PROBE_TIMEOUT, api.health()).await {
        Ok(Ok(health)) if health.is_ok() => {
            tracing::info!("Product API is up: {}", health.message);
        }
        Ok(Ok(health)) => {
            tracing::warn!(status = %health.status, "Product API reports an unhealthy status");
        }
        Ok(Err(e)) => {
            tracing::warn!("Product API is not reachable yet: {}", e);
        }
        Err(_) => {
            tracing::warn!(
                "Product API did not answer the health check within {:?}",
                HEALTH_PROBE_TIMEOUT
            );
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
