use anyhow::Result;

fn main() -> Result<()> {
    file_history::logging::init_logging();
    file_history::cli::run()
}
