use std::process::exit;

fn main() {
    if let Err(err) = treesh_cli::run() {
        log::error!("{err}");
        eprintln!("treesh: {err}");
        exit(1);
    }
}
