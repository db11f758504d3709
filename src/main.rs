use salmon_rules::console::Console;

fn main() -> anyhow::Result<()> {
    let mut console = Console::new();
    console.run()
}
