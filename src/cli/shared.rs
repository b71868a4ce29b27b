use clap::Args;

#[derive(Args, Default)]
pub struct SharedSettings {
    /// Turn on extra debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}
