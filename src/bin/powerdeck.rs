fn main() -> anyhow::Result<()> {
    powerdeck::cli::run_cli()
}
