//! solbot Language Server binary entry point
//!
//! Run with: solbot-lsp
//!
//! The LSP communicates via stdin/stdout using the Language Server Protocol, so logs go to stderr.

use solbot::lsp::SolbotLanguageServer;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    // Create LSP service
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(SolbotLanguageServer::new);

    // Run server
    Server::new(stdin, stdout, socket).serve(service).await;
}
