use anyhow::Result;

fn main() -> Result<()> {
    // Initialize core
    hyuga_core::init()?;

    // Create and initialize application
    let mut app = hyuga_core::App::new()?;

    let gateway = hyuga_vacations::VacationClient::new(&app.config().services.api_base_url)?;
    app.register_view(Box::new(hyuga_ui::CalendarViewProvider::new(gateway)));
    app.initialize()?;

    tracing::info!("Hyuga application started");

    println!("Hyuga - 휴가 달력");
    println!("\nConfiguration:");
    println!("  Config directory: {}", app.config().config_dir.display());
    println!("  Backend API: {}", app.config().services.api_base_url);
    println!("\nRoutes:");
    for view in app.views() {
        println!("  {} -> {}", view.route(), view.title());
    }

    // Graceful shutdown
    app.shutdown()?;

    Ok(())
}
