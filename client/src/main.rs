use std::{
    process,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use common::config::Config;

fn main() {
    // Logs go to stderr and would scribble over the maze, so they stay off
    // unless `RUST_LOG` asks for them.
    env_logger::init();

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || shutdown.store(true, Ordering::SeqCst))
            .expect("error setting Ctrl-C handler");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid configuration.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    if let Err(e) = client::run::run_client(config, shutdown) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}
