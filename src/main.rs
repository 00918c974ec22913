use emopick::Config;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Handle CLI flags
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Emopick - Keyboard-driven emoji search and copy widget");
        println!();
        println!("Usage: emopick [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --help, -h    Show this help message");
        println!();
        println!("Type to filter, arrow keys to select, Enter or click to copy.");
        std::process::exit(0);
    }

    // Load configuration
    let config = Config::load();

    // Launch the Iced UI
    if let Err(e) = emopick::ui::run(config) {
        eprintln!("[Emopick] Application error: {}", e);
        std::process::exit(1);
    }
}
