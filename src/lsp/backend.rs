//! LSP (Language Server Protocol) backend implementation for solbot

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::lsp::diagnostics::{parse_diagnostic_to_lsp, position_to_offset, span_to_range};
use crate::lsp::symbols::{SymbolInfo, document_symbols, find_definition, find_symbol_at, identifier_at};
use crate::parser::{self, ParseResult};
use crate::version::SOLBOT_VERSION;

/// Document state stored by the LSP
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub source: String,
    /// Tree, diagnostics and comments of the latest full-text parse.
    pub parsed: ParseResult,
    pub version: i32,
}

/// solbot Language Server
pub struct SolbotLanguageServer {
    client: Client,
    documents: Arc<RwLock<HashMap<Url, DocumentState>>>,
}

impl SolbotLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Parse a document and publish diagnostics
    async fn analyze_document(&self, uri: &Url, source: &str, version: i32) {
        let parsed = parser::parse_file(source);
        tracing::debug!(
            %uri,
            version,
            declarations = parsed.file.declarations.len(),
            diagnostics = parsed.diagnostics.len(),
            "analyzed document"
        );

        let diagnostics: Vec<Diagnostic> = parsed
            .diagnostics
            .iter()
            .map(|d| parse_diagnostic_to_lsp(d, source, uri))
            .collect();

        // Store the parse for hover/goto
        {
            let mut docs = self.documents.write().await;
            docs.insert(
                uri.clone(),
                DocumentState {
                    source: source.to_string(),
                    parsed,
                    version,
                },
            );
        }

        // Publish diagnostics (even if empty, to clear old ones)
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(version))
            .await;
    }
}

/// Markdown shown on hover: the signature, the symbol kind, then any doc comment.
pub fn hover_markdown(info: &SymbolInfo, doc: Option<&str>) -> String {
    let mut markdown = format!("```solidity\n{}\n```\n\n*{}*", info.detail, info.kind);
    if let Some(doc) = doc {
        markdown.push_str("\n\n---\n\n");
        markdown.push_str(doc);
    }
    markdown
}

#[tower_lsp::async_trait]
impl LanguageServer for SolbotLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(info) = &params.client_info {
            tracing::info!(client = %info.name, version = ?info.version, "client connected");
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Real-time diagnostics via full-text sync
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                definition_provider: Some(OneOf::Left(true)),
                document_symbol_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "solbot-lsp".to_string(),
                version: Some(SOLBOT_VERSION.to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "solbot LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let source = params.text_document.text;
        let version = params.text_document.version;

        self.analyze_document(&uri, &source, version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // We use FULL sync, so the last change carries the full content
        if let Some(change) = params.content_changes.into_iter().last() {
            self.analyze_document(&uri, &change.text, version).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        // Remove document from cache
        {
            let mut docs = self.documents.write().await;
            docs.remove(&uri);
        }

        // Clear diagnostics
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };
        let Some(offset) = position_to_offset(&doc.source, position) else {
            return Ok(None);
        };
        let Some(info) = find_symbol_at(&doc.parsed.file, offset) else {
            return Ok(None);
        };

        let comment = info
            .doc_anchor
            .and_then(|anchor| doc.parsed.doc_comment_before(&doc.source, anchor));

        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: hover_markdown(&info, comment.as_deref()),
            }),
            range: Some(span_to_range(&doc.source, info.span.start, info.span.end)),
        }))
    }

    async fn goto_definition(&self, params: GotoDefinitionParams) -> Result<Option<GotoDefinitionResponse>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };
        let Some(offset) = position_to_offset(&doc.source, position) else {
            return Ok(None);
        };

        // Find what name the cursor is on, then the declaration with that name
        let Some(name) = identifier_at(&doc.source, offset) else {
            return Ok(None);
        };
        let Some(def_span) = find_definition(&doc.parsed.file, name) else {
            return Ok(None);
        };

        Ok(Some(GotoDefinitionResponse::Scalar(Location {
            uri: uri.clone(),
            range: span_to_range(&doc.source, def_span.start, def_span.end),
        })))
    }

    async fn document_symbol(&self, params: DocumentSymbolParams) -> Result<Option<DocumentSymbolResponse>> {
        let docs = self.documents.read().await;
        let Some(doc) = docs.get(&params.text_document.uri) else {
            return Ok(None);
        };

        Ok(Some(DocumentSymbolResponse::Nested(document_symbols(
            &doc.parsed.file,
            &doc.source,
        ))))
    }
}
