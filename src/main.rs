mod cli;

/// # rootlab
/// Runs the classical root-finding methods on the problem described by an
/// input file and writes a text and a CSV report beside it.
///
/// # Examples:
/// ```bash
/// cargo run -- problems/sqrt2.txt
/// RUST_LOG=debug cargo run -- problems/sqrt2.txt
/// ```
///
/// # Errors
/// - The input file is missing or unreadable.
/// - `tol` or `max_iter` is invalid.
/// - A report cannot be written.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    cli::main()
}
