fn main() {
    if let Err(err) = aislekit::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
