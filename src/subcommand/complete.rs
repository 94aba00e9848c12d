use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Complete {
  #[arg(long, help = "Zero-based UTF-16 offset of the cursor on its line")]
  character: u32,
  #[arg(
    long,
    value_name = "DIR",
    help = "Directory imports are resolved against, relative to the root"
  )]
  import_root: Option<String>,
  #[arg(long, help = "Zero-based line of the cursor")]
  line: u32,
  #[arg(
    value_name = "PATH",
    help = "Path to the Sass, Vue or Svelte file to complete in",
    value_hint = clap::ValueHint::FilePath
  )]
  path: PathBuf,
  #[arg(
    long,
    value_name = "DIR",
    help = "Workspace root to index, defaults to the directory of PATH",
    value_hint = clap::ValueHint::DirPath
  )]
  root: Option<PathBuf>,
}

/// What the cursor position produced: either a list of candidates or an
/// abbreviation the editor is expected to expand itself.
#[derive(Debug, PartialEq)]
enum Outcome {
  Abbreviation(String),
  Candidates(Vec<Candidate>),
}

impl Complete {
  fn complete(&self) -> Result<Outcome> {
    let document = Document::from_path(&self.path)?;

    let root = match &self.root {
      Some(root) => root.clone(),
      None => document
        .path()
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .context("failed to determine workspace root")?,
    };

    let mut workspace = Workspace::default();

    let count = workspace.index_root(&root)?;

    debug!("indexed {count} files in `{}`", root.display());

    let config = Config {
      import_root: self.import_root.clone(),
      ..Config::default()
    };

    let completions = Completions::new(
      &document,
      lsp::Position::new(self.line, self.character),
      &config,
      &workspace,
      &Disk,
      Some(&root),
    );

    if let Some(CompletionContext::Abbreviation { prefix }) =
      completions.classify()
    {
      return Ok(Outcome::Abbreviation(prefix));
    }

    Ok(Outcome::Candidates(completions.completions()?))
  }

  pub(crate) fn run(self) -> Result {
    match self.complete()? {
      Outcome::Abbreviation(prefix) => {
        println!("{} {prefix}", "abbreviation".yellow());
      }
      Outcome::Candidates(candidates) => {
        for candidate in candidates {
          let kind = format!("{:?}", candidate.kind).to_lowercase();

          let kind = match candidate.kind {
            CandidateKind::Class | CandidateKind::Reference => {
              kind.cyan().to_string()
            }
            CandidateKind::Folder | CandidateKind::Snippet => {
              kind.magenta().to_string()
            }
            CandidateKind::Function => kind.blue().to_string(),
            CandidateKind::Property => kind.green().to_string(),
            CandidateKind::Unit | CandidateKind::Value => {
              kind.yellow().to_string()
            }
            CandidateKind::Variable => kind.red().to_string(),
          };

          match &candidate.detail {
            Some(detail) => {
              println!("{kind} {} {}", candidate.label, detail.dimmed());
            }
            None => println!("{kind} {}", candidate.label),
          }
        }
      }
    }

    Ok(())
  }
}
