use itzgen::config;
use itzgen::telemetry::{get_subscriber, init_subscriber};

use itzgen::http_server::HttpServer;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cfg = config::Settings::new().expect("cannot parse configuration");
    let subscriber = get_subscriber("itzgen-server".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let http_server = HttpServer::build(cfg)
        .await
        .expect("cannot build http server");
    http_server.run().await.expect("http server stopped");
}
