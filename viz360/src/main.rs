fn main() -> anyhow::Result<()> {
    viz360::run_cli()
}
