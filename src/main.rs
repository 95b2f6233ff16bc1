#[cfg(not(target_arch = "wasm32"))]
mod cli;

#[cfg(target_arch = "wasm32")]
fn main() {
    flagquiz::wasm::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(error) = cli::entrypoint() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
