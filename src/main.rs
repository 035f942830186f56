// Entrypoint for the `nla` command line tool.
// With arguments, they are joined into one command line and executed once;
// without, the interactive shell runs until quit or end of input.

use nla_client::{api::NlaClient, config::Config, shell::Shell};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = NlaClient::new(&config)?;
    let shell = Shell::new(client);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return shell.run_single(&args.join(" "));
    }
    shell.run_interactive()
}
