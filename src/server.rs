use super::*;

const TRIGGER_CHARACTERS: &[&str] =
  &["@", "&", "$", "+", ".", "#", ":", "/", "'", "\""];

/// Sent when the user types a `?` abbreviation, the client expands it.
enum AbbreviationNotification {}

impl lsp::notification::Notification for AbbreviationNotification {
  const METHOD: &'static str = "sass/abbreviation";

  type Params = AbbreviationParams;
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct AbbreviationParams {
  position: lsp::Position,
  prefix: String,
  text_document: lsp::TextDocumentIdentifier,
}

#[derive(Debug)]
pub(crate) struct Server(Arc<Inner>);

impl Server {
  pub(crate) fn capabilities() -> lsp::ServerCapabilities {
    lsp::ServerCapabilities {
      completion_provider: Some(lsp::CompletionOptions {
        trigger_characters: Some(
          TRIGGER_CHARACTERS
            .iter()
            .map(|character| (*character).to_string())
            .collect(),
        ),
        ..Default::default()
      }),
      hover_provider: Some(lsp::HoverProviderCapability::Simple(true)),
      text_document_sync: Some(lsp::TextDocumentSyncCapability::Options(
        lsp::TextDocumentSyncOptions {
          open_close: Some(true),
          change: Some(lsp::TextDocumentSyncKind::INCREMENTAL),
          will_save: None,
          will_save_wait_until: None,
          save: None,
        },
      )),
      ..Default::default()
    }
  }

  pub(crate) fn new(client: Client) -> Self {
    Self(Arc::new(Inner::new(client)))
  }

  pub(crate) async fn run() {
    let (stdin, stdout) = (tokio::io::stdin(), tokio::io::stdout());

    let (service, socket) = LspService::new(Server::new);

    tower_lsp::Server::new(stdin, stdout, socket)
      .serve(service)
      .await;
  }
}

#[tower_lsp::async_trait]
impl LanguageServer for Server {
  async fn completion(
    &self,
    params: lsp::CompletionParams,
  ) -> Result<Option<lsp::CompletionResponse>, jsonrpc::Error> {
    Ok(self.0.completion(params).await)
  }

  async fn did_change(&self, params: lsp::DidChangeTextDocumentParams) {
    self.0.did_change(params).await;
  }

  async fn did_change_configuration(
    &self,
    params: lsp::DidChangeConfigurationParams,
  ) {
    self.0.did_change_configuration(params).await;
  }

  async fn did_close(&self, params: lsp::DidCloseTextDocumentParams) {
    self.0.did_close(params).await;
  }

  async fn did_open(&self, params: lsp::DidOpenTextDocumentParams) {
    self.0.did_open(params).await;
  }

  async fn hover(
    &self,
    params: lsp::HoverParams,
  ) -> Result<Option<lsp::Hover>, jsonrpc::Error> {
    Ok(self.0.hover(params).await)
  }

  async fn initialize(
    &self,
    params: lsp::InitializeParams,
  ) -> Result<lsp::InitializeResult, jsonrpc::Error> {
    self.0.initialize(params).await
  }

  async fn initialized(&self, params: lsp::InitializedParams) {
    self.0.initialized(params).await;
  }

  async fn shutdown(&self) -> Result<(), jsonrpc::Error> {
    Ok(())
  }
}

#[derive(Debug)]
struct Inner {
  client: Client,
  config: RwLock<Config>,
  documents: RwLock<BTreeMap<lsp::Url, Document>>,
  workspace: RwLock<Workspace>,
  workspace_root: RwLock<Option<PathBuf>>,
}

impl Inner {
  async fn completion(
    &self,
    params: lsp::CompletionParams,
  ) -> Option<lsp::CompletionResponse> {
    let lsp::TextDocumentPositionParams {
      position,
      text_document,
    } = params.text_document_position;

    let (context, result) = {
      let documents = self.documents.read().await;

      let document = documents.get(&text_document.uri)?;

      let config = self.config.read().await;

      let workspace = self.workspace.read().await;

      let workspace_root = self.workspace_root.read().await;

      let completions = Completions::new(
        document,
        position,
        &config,
        &*workspace,
        &Disk,
        workspace_root.as_deref(),
      );

      (completions.classify(), completions.completions())
    };

    if let Some(CompletionContext::Abbreviation { prefix }) = context {
      self
        .client
        .send_notification::<AbbreviationNotification>(AbbreviationParams {
          position,
          prefix,
          text_document,
        })
        .await;
    }

    let candidates = result.unwrap_or_else(|error| {
      warn!("completion failed: {error:#}");
      Vec::new()
    });

    Some(lsp::CompletionResponse::Array(
      candidates.into_iter().map(Into::into).collect(),
    ))
  }

  async fn did_change(&self, params: lsp::DidChangeTextDocumentParams) {
    let uri = params.text_document.uri.clone();

    let mut documents = self.documents.write().await;

    let Some(document) = documents.get_mut(&uri) else {
      return;
    };

    document.apply_change(params);

    self.reindex(document).await;
  }

  async fn did_change_configuration(
    &self,
    params: lsp::DidChangeConfigurationParams,
  ) {
    *self.config.write().await = Config::from_settings(params.settings);
  }

  async fn did_close(&self, params: lsp::DidCloseTextDocumentParams) {
    let Some(document) =
      self.documents.write().await.remove(&params.text_document.uri)
    else {
      return;
    };

    let Some(path) = document.path() else {
      return;
    };

    let mut workspace = self.workspace.write().await;

    match fs::read_to_string(&path) {
      Ok(text) => workspace.index_document(&path, &text),
      Err(_) => workspace.remove(&path),
    }
  }

  async fn did_open(&self, params: lsp::DidOpenTextDocumentParams) {
    let document = Document::from(params);

    self.reindex(&document).await;

    self
      .documents
      .write()
      .await
      .insert(document.uri.clone(), document);
  }

  async fn hover(&self, params: lsp::HoverParams) -> Option<lsp::Hover> {
    let lsp::TextDocumentPositionParams {
      position,
      text_document,
    } = params.text_document_position_params;

    let documents = self.documents.read().await;

    let document = documents.get(&text_document.uri)?;

    let config = self.config.read().await;

    let workspace = self.workspace.read().await;

    let workspace_root = self.workspace_root.read().await;

    let markdown = Hover::new(
      document,
      position,
      &config,
      &*workspace,
      workspace_root.as_deref(),
    )
    .hover()?;

    Some(lsp::Hover {
      contents: lsp::HoverContents::Markup(lsp::MarkupContent {
        kind: lsp::MarkupKind::Markdown,
        value: markdown,
      }),
      range: None,
    })
  }

  async fn initialize(
    &self,
    params: lsp::InitializeParams,
  ) -> Result<lsp::InitializeResult, jsonrpc::Error> {
    info!("Starting sass language server...");

    #[allow(deprecated)]
    let root = params
      .workspace_folders
      .as_deref()
      .and_then(<[lsp::WorkspaceFolder]>::first)
      .map(|folder| &folder.uri)
      .or(params.root_uri.as_ref())
      .and_then(|uri| uri.to_file_path().ok());

    *self.workspace_root.write().await = root;

    if let Some(options) = params.initialization_options {
      *self.config.write().await = Config::from_settings(options);
    }

    Ok(lsp::InitializeResult {
      capabilities: Server::capabilities(),
      server_info: Some(lsp::ServerInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
      }),
    })
  }

  async fn initialized(&self, _: lsp::InitializedParams) {
    if let Some(root) = self.workspace_root.read().await.clone() {
      match self.workspace.write().await.index_root(&root) {
        Ok(count) => info!("indexed {count} files in `{}`", root.display()),
        Err(error) => warn!("{error:#}"),
      }
    }

    self
      .client
      .log_message(
        lsp::MessageType::INFO,
        &format!("{} initialized", env!("CARGO_PKG_NAME")),
      )
      .await;
  }

  fn new(client: Client) -> Self {
    Self {
      client,
      config: RwLock::new(Config::default()),
      documents: RwLock::new(BTreeMap::new()),
      workspace: RwLock::new(Workspace::default()),
      workspace_root: RwLock::new(None),
    }
  }

  /// Replaces the indexed symbols of `document` with its current text.
  async fn reindex(&self, document: &Document) {
    let Some(path) = document.path() else {
      debug!("not indexing `{}`, not a file", document.uri);
      return;
    };

    self
      .workspace
      .write()
      .await
      .index_document(&path, &document.text());
  }
}
