mod app;
mod audio;
mod config;
mod library;
mod playlist;
mod runtime;
mod ui;
mod visualizer;

fn main() {
    if let Err(e) = runtime::run() {
        eprintln!("spiro: {e}");
        std::process::exit(1);
    }
}
