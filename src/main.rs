use std::process::ExitCode;

fn main() -> ExitCode {
    match subwayline::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            subwayline::ui::output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
