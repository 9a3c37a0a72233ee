use env_logger::Env;

use snake::config::{CONFIG_PATH, GameConfig};
use snake::session::GameSession;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let session = match GameSession::new(&config) {
        Ok(session) => session,
        Err(err) => {
            log::error!("Invalid game config: {err}");
            return;
        }
    };
    macroquad::Window::from_config(config.window_conf(), session.run());
}
