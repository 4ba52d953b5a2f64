use dioxus_logger::tracing::{info, Level};
use rewards_settings::TheApp;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting rewards settings");

    #[cfg(feature = "desktop")]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Rewards settings");
        dioxus::LaunchBuilder::desktop()
            .with_cfg(dioxus_desktop::Config::new().with_window(window))
            .launch(TheApp);
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(TheApp);
}
