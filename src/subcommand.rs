use {super::*, complete::Complete};

mod complete;
mod server;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Print the completions at a position in a Sass file")]
  Complete(Complete),
  #[command(about = "Run the language server over stdio")]
  Server,
}

impl Subcommand {
  pub(crate) async fn run(self) -> Result {
    match self {
      Self::Complete(complete) => complete.run(),
      Self::Server => server::run().await,
    }
  }
}
