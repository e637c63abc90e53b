use cropboard::app::Cropboard;
use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cropboard=info")),
        )
        .init();

    Application::new().run(|cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(1100.0), px(760.0)), cx);
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Cropboard".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(options, |_window, cx| cx.new(Cropboard::new)) {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
        }
        cx.activate(true);
    });
}
