use wordle_engine::cli::{parse_cli, run};
use wordle_engine::logging::init_logging;

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
