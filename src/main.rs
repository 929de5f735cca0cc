use aprende_letras::LetrasApp;
use aprende_letras::config::AppConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Configuración no válida ({e}); se usan los valores por defecto");
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Amelia Aprende Letras",
        options,
        Box::new(move |cc| match LetrasApp::new(&config, cc.storage) {
            Ok(app) => Ok(Box::new(app)),
            Err(e) => {
                log::error!("No se pudo cargar el catálogo: {e}");
                Err(Box::new(e))
            }
        }),
    )
}
