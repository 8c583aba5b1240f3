fn main() {
    drawpoker_cli::logging::init_logging();
    let code = drawpoker_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
