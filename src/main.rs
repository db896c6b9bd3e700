fn main() {
    if let Err(err) = textquad::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
