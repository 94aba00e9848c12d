use {
  anyhow::{Context, Error, anyhow},
  arguments::Arguments,
  branch::*,
  branch_context::BranchContext,
  candidate::{Candidate, CandidateKind},
  clap::Parser,
  completions::Completions,
  config::Config,
  css_data::{CssData, EntityStatus, RawCssEntity, Reference},
  document::Document,
  env_logger::Env,
  file_system::{Disk, FileSystem},
  globwalk::GlobWalkerBuilder,
  groups::Groups,
  hover::Hover,
  imports::{ImportEntry, Imports},
  indexer::Indexer,
  indexmap::IndexMap,
  log::{debug, info, warn},
  modules::BuiltinModule,
  owo_colors::OwoColorize,
  path_ext::PathExt,
  regex::Regex,
  rope_ext::RopeExt,
  ropey::Rope,
  serde::{Deserialize, Serialize},
  serde_json::Value,
  server::Server,
  std::{
    backtrace::BacktraceStatus,
    collections::{BTreeMap, HashMap, HashSet},
    fs, io,
    ops::ControlFlow,
    path::{Component, Path, PathBuf},
    process,
    sync::{Arc, OnceLock},
  },
  subcommand::Subcommand,
  symbols::{
    SymbolCollection, SymbolEntry, SymbolItem, SymbolKind, SymbolLookup,
    SymbolStore,
  },
  tokio::sync::RwLock,
  tower_lsp::{Client, LanguageServer, LspService, jsonrpc, lsp_types as lsp},
  workspace::Workspace,
};

#[cfg(test)]
use {candidate::InsertText, indoc::indoc, serde_json::json};

macro_rules! pattern {
  ($name:ident, $regex:literal) => {
    fn $name() -> &'static Regex {
      static REGEX: OnceLock<Regex> = OnceLock::new();
      REGEX.get_or_init(|| Regex::new($regex).unwrap())
    }
  };
}

mod arguments;
mod branch;
mod branch_context;
mod candidate;
mod completions;
mod config;
mod css_data;
mod document;
mod documentation;
mod file_system;
mod groups;
mod hover;
mod html;
mod imports;
mod indexer;
mod modules;
mod path_ext;
mod predicates;
mod rope_ext;
mod server;
mod snippets;
mod subcommand;
mod symbols;
mod workspace;

type Result<T = (), E = Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() {
  let env = Env::default().default_filter_or("info");

  env_logger::Builder::from_env(env).init();

  if let Err(error) = Arguments::parse().run().await {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
