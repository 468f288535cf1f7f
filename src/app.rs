use crate::{
    config::Config,
    error::Result,
    routes::api_routes,
    services::{
        FeaturedCatalog, MockGenerator, OpenAiGenerator, RecommendationGenerator,
        RecommendationService,
    },
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        // Always bind to 0.0.0.0 for container compatibility
        let bind_address = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&bind_address)?;
        info!("Starting server at http://{}:{}", self.host, self.port);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        // The generation backend is chosen once here; nothing downstream
        // reads the environment again.
        let generator: Arc<dyn RecommendationGenerator> = if self.config.use_mock_data {
            info!("Mock data enabled, live generation calls are disabled");
            Arc::new(MockGenerator::new().context("Failed to load mock recommendations")?)
        } else {
            Arc::new(
                OpenAiGenerator::new(&self.config)
                    .context("Failed to initialize generation client")?,
            )
        };

        let catalog = FeaturedCatalog::load().context("Failed to load featured catalog")?;

        let recommendation_service = web::Data::new(RecommendationService::new(generator));
        let featured_catalog = web::Data::new(catalog);

        // Bound as a separate statement so the non-`Send` `HttpServer`
        // temporary is dropped before the await; the `Server` handle itself
        // is `Send`, which lets callers `tokio::spawn` this future.
        let server = HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(recommendation_service.clone())
                .app_data(featured_catalog.clone())
                .service(api_routes())
        })
        .listen(listener)?
        .run();

        server.await?;

        Ok(())
    }
}
