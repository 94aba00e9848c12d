use super::*;

/// One completion request against one document.
pub(crate) struct Completions<'a> {
  config: &'a Config,
  document: &'a Document,
  file_system: &'a dyn FileSystem,
  position: lsp::Position,
  store: &'a dyn SymbolStore,
  workspace_root: Option<&'a Path>,
}

impl<'a> Completions<'a> {
  fn at_rules() -> Vec<Candidate> {
    snippets::AT_RULES
      .iter()
      .map(|(label, body, description)| {
        Candidate::new(*label, CandidateKind::Function)
          .with_snippet(*body)
          .with_detail(*description)
          .with_rank(8)
      })
      .collect()
  }

  /// Runs the branches in order and returns the context of the first one
  /// that claims the cursor.
  pub(crate) fn classify(&self) -> Option<CompletionContext> {
    let context = self.context();

    BRANCHES.iter().find_map(|branch| {
      let claimed = branch.classify(&context)?;
      debug!("`{}` branch claimed {claimed:?}", branch.name());
      Some(claimed)
    })
  }

  fn comments() -> Vec<Candidate> {
    snippets::COMMENTS
      .iter()
      .map(|(label, body, description)| {
        Candidate::new(*label, CandidateKind::Snippet)
          .with_snippet(*body)
          .with_detail(*description)
      })
      .collect()
  }

  pub(crate) fn completions(&self) -> Result<Vec<Candidate>> {
    let Some(context) = self.classify() else {
      return self.general(&self.context());
    };

    match context {
      CompletionContext::Abbreviation { .. }
      | CompletionContext::Suppressed => Ok(Vec::new()),
      CompletionContext::Comment => Ok(Self::comments()),
      CompletionContext::Import { typed_path } => {
        self.import_suggestions(&typed_path)
      }
      CompletionContext::ParentSelector => Ok(self.pseudos()),
    }
  }

  fn context(&self) -> BranchContext<'_> {
    BranchContext::new(self.document, self.config, self.position)
  }

  fn functions() -> Vec<Candidate> {
    snippets::FUNCTIONS
      .iter()
      .map(|(label, body, description)| {
        Candidate::new(*label, CandidateKind::Function)
          .with_snippet(*body)
          .with_detail(*description)
      })
      .collect()
  }

  fn general(&self, context: &BranchContext<'_>) -> Result<Vec<Candidate>> {
    let word = context.word();

    let mut groups = Groups::default();

    if !self.config.disable_unit_completion
      && predicates::is_number(context.prefix())
    {
      groups.units = Self::units(word);
    }

    let text = self.document.text();

    let Imports {
      global_scope_modules,
      mut imports,
      property_scoped_modules,
    } = Imports::parse(&text);

    groups.global_scope_modules = global_scope_modules;
    groups.property_scoped_modules = property_scoped_modules;

    let document_path = self.document.path();

    if let Some(path) = &document_path {
      imports.push(ImportEntry::current(path));
    }

    let import_base = self.config.import_base(self.workspace_root);

    let lookup = document_path
      .as_deref()
      .map(|path| SymbolLookup::new(path, import_base.as_deref(), self.store));

    if predicates::is_property(word) {
      groups.values = Self::values(word);

      match Self::mixin_parameters(context) {
        Some(parameters) => groups.variables = parameters,
        None if predicates::is_css_variable_accessor(word) => {
          return Ok(Self::variables(
            lookup.as_ref(),
            &imports,
            SymbolKind::CssVariable,
          ));
        }
        None => {
          groups.variables =
            Self::variables(lookup.as_ref(), &imports, SymbolKind::Variable);
        }
      }

      groups.functions = Self::functions();
    } else if predicates::is_variable(word) {
      debug!("no variable group for `{word}`");
    } else {
      groups.property_scoped_modules.clear();

      groups.variables = Self::mixins(lookup.as_ref(), &imports, word);

      if let Some(path) = &document_path {
        groups.classes_and_ids =
          html::sibling_selectors(self.file_system, path, &text)?;
      }

      groups.at_rules = Self::at_rules();
      groups.properties = Self::properties(word);
      groups.html_elements = html::tags(word);
    }

    Ok(groups.into_candidates())
  }

  /// Files and folders in the directory part of `typed_path`, resolved
  /// against the import root or the document's directory.
  fn import_suggestions(&self, typed_path: &str) -> Result<Vec<Candidate>> {
    let Some(document_path) = self.document.path() else {
      return Ok(Vec::new());
    };

    let base = match self.config.import_base(self.workspace_root) {
      Some(base) => base,
      None => document_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default(),
    };

    let directory_part = typed_path
      .rfind('/')
      .map_or("", |slash| &typed_path[..=slash]);

    let directory = base.join(directory_part).normalize();

    let mut entries =
      self.file_system.list_dir(&directory).with_context(|| {
        format!("failed to list import directory `{}`", directory.display())
      })?;

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let current = document_path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned());

    Ok(
      entries
        .into_iter()
        .filter_map(|entry| {
          if entry.is_directory {
            return Some(
              Candidate::new(entry.name.clone(), CandidateKind::Folder)
                .with_detail(format!("Folder - {}", entry.name))
                .with_rank(2),
            );
          }

          if current.as_deref() == Some(entry.name.as_str()) {
            return None;
          }

          let name = entry.name.strip_suffix(".sass")?;

          Some(
            Candidate::new(name, CandidateKind::Reference)
              .with_detail(format!("Import - {name}"))
              .with_rank(1),
          )
        })
        .collect(),
    )
  }

  /// Parameters of the mixin whose body contains the cursor, `None` when
  /// the cursor is not inside a mixin.
  fn mixin_parameters(context: &BranchContext<'_>) -> Option<Vec<Candidate>> {
    for (_, line) in context.lines_above() {
      if predicates::is_mixin_header(&line) {
        let Some((head, parameters)) = line.split_once('(') else {
          return Some(Vec::new());
        };

        let mixin = head.trim().trim_start_matches("@mixin").trim();

        return Some(
          parameters
            .split('$')
            .filter_map(|parameter| {
              let name = parameter
                .split([',', ':', ' ', ')'])
                .next()
                .filter(|name| !name.is_empty())?;

              Some(
                Candidate::new(format!("${name}"), CandidateKind::Variable)
                  .with_snippet(format!("\\${name}"))
                  .with_detail(format!(
                    "@mixin {mixin}\n({name}) - Local Variable"
                  )),
              )
            })
            .collect(),
        );
      }

      if predicates::is_unindented(&line) {
        return None;
      }
    }

    None
  }

  /// Mixins visible through the imports, as `@include` calls or, after a
  /// `+`, in the shorthand form.
  fn mixins(
    lookup: Option<&SymbolLookup>,
    imports: &[ImportEntry],
    word: &str,
  ) -> Vec<Candidate> {
    let Some(lookup) = lookup else {
      return Vec::new();
    };

    let shorthand = word.ends_with('+');

    let mut mixins = Vec::new();

    lookup.for_each_symbol(imports, |entry, namespace| {
      if entry.kind == SymbolKind::Mixin {
        let title = SymbolLookup::merge_namespace(&entry.item.title, namespace);

        let insert =
          SymbolLookup::merge_namespace(&entry.item.insert, namespace);

        mixins.push(
          Candidate::new(
            format!("{}{title}", if shorthand { '+' } else { '$' }),
            entry.item.kind,
          )
          .with_snippet(if shorthand {
            insert
          } else {
            format!("@include {insert}")
          })
          .with_detail(entry.item.detail.clone())
          .with_rank(6),
        );
      }

      ControlFlow::Continue(())
    });

    mixins
  }

  pub(crate) fn new(
    document: &'a Document,
    position: lsp::Position,
    config: &'a Config,
    store: &'a dyn SymbolStore,
    file_system: &'a dyn FileSystem,
    workspace_root: Option<&'a Path>,
  ) -> Self {
    Self {
      config,
      document,
      file_system,
      position,
      store,
      workspace_root,
    }
  }

  fn properties(word: &str) -> Vec<Candidate> {
    if predicates::is_class_or_id(word) || predicates::is_at_rule(word) {
      return Vec::new();
    }

    CssData::get()
      .properties()
      .iter()
      .map(|property| {
        Candidate::new(property.name.as_str(), CandidateKind::Property)
          .with_insert(format!("{}: ", property.name))
          .with_optional_detail(property.description())
          .with_documentation(property.documentation())
          .with_deprecated(property.is_obsolete())
          .with_rank(5)
      })
      .collect()
  }

  fn pseudos(&self) -> Vec<Candidate> {
    CssData::get()
      .pseudos()
      .map(|pseudo| {
        let bare = pseudo.name.replace([':', '(', ')'], "");

        let label = if self.config.starred_pseudo_names.contains(&bare) {
          format!("*{}", pseudo.name)
        } else {
          pseudo.name.clone()
        };

        let insert = match pseudo.name.split_once('(') {
          Some((function, argument)) if pseudo.name.ends_with(')') => {
            format!(
              "{function}(${{1:{}}})",
              argument.strip_suffix(')').unwrap_or(argument)
            )
          }
          _ => pseudo.name.clone(),
        };

        Candidate::new(label, CandidateKind::Class)
          .with_snippet(format!("{insert}\n\t$0"))
          .with_optional_detail(pseudo.description())
          .with_documentation(pseudo.documentation())
          .with_deprecated(pseudo.is_obsolete())
      })
      .collect()
  }

  /// Unit suffixes appended to the number being typed.
  fn units(word: &str) -> Vec<Candidate> {
    let number = word.rsplit(' ').next().unwrap_or(word);

    snippets::UNITS
      .iter()
      .map(|(suffix, body, description)| {
        Candidate::new(format!("{number}{suffix}"), CandidateKind::Unit)
          .with_snippet(format!("{number}{body}"))
          .with_detail(*description)
          .with_rank(1)
      })
      .collect()
  }

  /// Values of the property named before the first `:`.
  fn values(word: &str) -> Vec<Candidate> {
    let name = word
      .trim()
      .split([':', ' '])
      .next()
      .unwrap_or_default();

    let Some(property) = CssData::get().lookup_property(name) else {
      return Vec::new();
    };

    CssData::property_values(property)
      .into_iter()
      .map(|(value, description)| {
        Candidate::new(value, CandidateKind::Value)
          .with_optional_detail(description)
          .with_rank(3)
      })
      .collect()
  }

  fn variables(
    lookup: Option<&SymbolLookup>,
    imports: &[ImportEntry],
    kind: SymbolKind,
  ) -> Vec<Candidate> {
    let Some(lookup) = lookup else {
      return Vec::new();
    };

    let mut variables = Vec::new();

    lookup.for_each_symbol(imports, |entry, namespace| {
      if entry.kind == kind {
        variables.push(
          Candidate::new(
            SymbolLookup::merge_namespace(&entry.item.title, namespace),
            entry.item.kind,
          )
          .with_insert(SymbolLookup::merge_namespace(
            &entry.item.insert,
            namespace,
          ))
          .with_documentation(entry.item.detail.clone())
          .with_rank(1),
        );
      }

      ControlFlow::Continue(())
    });

    variables
  }
}
