use std::process;

fn main() {
    if let Err(e) = argform::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
