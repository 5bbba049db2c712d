use log::error;
use sparkbox::Visualizer;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = Visualizer::new().run() {
        error!("{err}");
        std::process::exit(1);
    }
}
