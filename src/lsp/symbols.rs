//! AST queries behind hover, go-to-definition and document symbols.
//!
//! Everything here is a pure function of the parsed [`File`] and the source text, so the backend only has to
//! look the document up and convert the results.

use tower_lsp::lsp_types::{DocumentSymbol, SymbolKind};

use crate::ast::{
    ContractDefinition, ContractKind, Declaration, File, FunctionDeclaration, Node, Param, Span, VariableDeclaration,
};
use crate::lsp::diagnostics::span_to_range;

/// Symbol information for hover/goto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: String,
    pub kind: &'static str,
    pub detail: String,
    pub span: Span,
    /// Offset a doc comment would precede; `None` for parameters.
    pub doc_anchor: Option<usize>,
}

/// Find the innermost declaration or parameter whose range contains `offset`.
pub fn find_symbol_at(file: &File, offset: usize) -> Option<SymbolInfo> {
    file.declarations.iter().find_map(|decl| find_in_declaration(decl, offset))
}

fn find_in_declaration(decl: &Declaration, offset: usize) -> Option<SymbolInfo> {
    if !decl.span().contains(offset) {
        return None;
    }

    match decl {
        Declaration::Contract(contract) => {
            if let Some(inner) = contract.members.iter().find_map(|m| find_in_declaration(m, offset)) {
                return Some(inner);
            }
        }
        Declaration::Function(func) => {
            if let Some(param) = func.ty.params.params.iter().find(|p| p.span().contains(offset)) {
                return Some(SymbolInfo {
                    name: param.name.name.clone(),
                    kind: "parameter",
                    detail: param.to_string(),
                    span: param.span(),
                    doc_anchor: None,
                });
            }
        }
        Declaration::Variable(_) => {}
    }

    Some(SymbolInfo {
        name: decl.name().name.clone(),
        kind: decl.kind_str(),
        detail: declaration_signature(decl),
        span: decl.span(),
        doc_anchor: Some(decl.start().offset()),
    })
}

/// Find the definition of `name`, searching contracts before their members.
pub fn find_definition(file: &File, name: &str) -> Option<Span> {
    find_definition_in(&file.declarations, name)
}

fn find_definition_in(decls: &[Declaration], name: &str) -> Option<Span> {
    if let Some(decl) = decls.iter().find(|d| d.name().name == name) {
        return Some(decl.span());
    }
    decls.iter().find_map(|decl| match decl {
        Declaration::Contract(contract) => find_definition_in(&contract.members, name),
        _ => None,
    })
}

/// The identifier touching `offset`, if any.
pub fn identifier_at(source: &str, offset: usize) -> Option<&str> {
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let offset = offset.min(source.len());
    if !source.is_char_boundary(offset) {
        return None;
    }

    let start = source[..offset]
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_ident(c))
        .last()
        .map_or(offset, |(i, _)| i);
    let end = source[offset..]
        .char_indices()
        .find(|&(_, c)| !is_ident(c))
        .map_or(source.len(), |(i, _)| offset + i);

    let word = &source[start..end];
    match word.chars().next() {
        Some(c) if !c.is_ascii_digit() => Some(word),
        _ => None,
    }
}

// ============================================================================
// Signatures
// ============================================================================

/// One-line signature shown on hover, e.g. `function deposit(uint256 amount) public`.
pub fn declaration_signature(decl: &Declaration) -> String {
    match decl {
        Declaration::Variable(var) => variable_signature(var),
        Declaration::Function(func) => function_signature(func),
        Declaration::Contract(contract) => contract_signature(contract),
    }
}

fn variable_signature(var: &VariableDeclaration) -> String {
    let mut sig = var.ty.to_string();
    if let Some(visibility) = var.visibility {
        sig.push_str(&format!(" {visibility}"));
    }
    if let Some(mutability) = var.mutability {
        sig.push_str(&format!(" {mutability}"));
    }
    sig.push(' ');
    sig.push_str(&var.name.name);
    sig
}

fn function_signature(func: &FunctionDeclaration) -> String {
    let params: Vec<String> = func.ty.params.params.iter().map(Param::to_string).collect();
    let mut sig = format!("function {}({})", func.name.name, params.join(", "));
    if let Some(visibility) = func.ty.visibility {
        sig.push_str(&format!(" {visibility}"));
    }
    if let Some(mutability) = func.ty.mutability {
        sig.push_str(&format!(" {mutability}"));
    }
    sig
}

fn contract_signature(contract: &ContractDefinition) -> String {
    let mut sig = String::new();
    if contract.is_abstract() {
        sig.push_str("abstract ");
    }
    sig.push_str(contract.kind.as_str());
    sig.push(' ');
    sig.push_str(&contract.name.name);
    if !contract.bases.is_empty() {
        let bases: Vec<&str> = contract.bases.iter().map(|b| b.name.as_str()).collect();
        sig.push_str(" is ");
        sig.push_str(&bases.join(", "));
    }
    sig
}

// ============================================================================
// Document symbols
// ============================================================================

/// Outline of the file: contracts with their members nested beneath them.
pub fn document_symbols(file: &File, source: &str) -> Vec<DocumentSymbol> {
    file.declarations
        .iter()
        .map(|decl| document_symbol(decl, source, false))
        .collect()
}

#[allow(deprecated)] // `DocumentSymbol::deprecated` has to be spelled out
fn document_symbol(decl: &Declaration, source: &str, in_contract: bool) -> DocumentSymbol {
    let span = decl.span();
    let name = decl.name();

    let (kind, children) = match decl {
        Declaration::Variable(_) if in_contract => (SymbolKind::FIELD, None),
        Declaration::Variable(_) => (SymbolKind::VARIABLE, None),
        Declaration::Function(_) if in_contract => (SymbolKind::METHOD, None),
        Declaration::Function(_) => (SymbolKind::FUNCTION, None),
        Declaration::Contract(contract) => {
            let kind = match contract.kind {
                ContractKind::Contract => SymbolKind::CLASS,
                ContractKind::Library => SymbolKind::MODULE,
                ContractKind::Interface => SymbolKind::INTERFACE,
            };
            let members = contract
                .members
                .iter()
                .map(|m| document_symbol(m, source, true))
                .collect();
            (kind, Some(members))
        }
    };

    DocumentSymbol {
        name: name.name.clone(),
        detail: Some(declaration_signature(decl)),
        kind,
        tags: None,
        deprecated: None,
        range: span_to_range(source, span.start, span.end),
        selection_range: span_to_range(source, name.start().offset(), name.end().offset()),
        children,
    }
}
