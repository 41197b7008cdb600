fn main() {
    if let Err(err) = shipment_cleaner::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
