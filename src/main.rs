use eckho::commands::Cli;
use eckho::libs::messages::macros::is_debug_mode;

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }
    Cli::menu()
}
