use std::process::ExitCode;

use log::{error, info};
use zoo_admin_frontend::components::{LogNotifier, ResourceView, TableColumns};
use zoo_admin_frontend::services::ResourceApi;
use zoo_admin_frontend::{AdminApp, ClientConfig, Route};

/// Print one screen as a plain text table
fn print_view<F: TableColumns, A: ResourceApi<F>>(view: &ResourceView<F, A>) {
    println!("{}", F::HEADERS.join(" | "));
    match view.placeholder() {
        Some(message) => println!("{}", message),
        None => {
            for (id, cells) in view.rows() {
                println!("#{} {}", id, cells.join(" | "));
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let mut app = AdminApp::from_config(&config);
    let mut notifier = LogNotifier;

    info!("Starting zoo admin console at {}", path);
    let route = match app.navigate(&path, &mut notifier).await {
        Ok(route) => route,
        Err(_) => return ExitCode::FAILURE,
    };

    println!("== {} ==", route.title());
    match route {
        Route::Animals => print_view(&app.animals),
        Route::Cares => print_view(&app.cares),
    }
    ExitCode::SUCCESS
}
