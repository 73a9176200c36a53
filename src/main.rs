fn main() {
    if let Err(err) = skosgraph::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
