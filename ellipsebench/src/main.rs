fn main() -> anyhow::Result<()> {
    ellipsebench::run()
}
