fn main() -> anyhow::Result<()> {
    memviz::start_memviz()
}
