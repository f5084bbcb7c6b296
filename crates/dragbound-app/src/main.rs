//! Replay entry point.

fn main() {
    env_logger::init();

    let config = match dragbound_app::AppConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    match dragbound_app::run(&config).and_then(|outcomes| dragbound_app::render(&outcomes, config.pretty)) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            log::error!("Replay failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
