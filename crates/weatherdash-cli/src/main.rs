mod command;
mod logging;
mod schema;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
