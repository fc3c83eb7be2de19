//! Reference resolution
//!
//!     Binds `\param` and `\tparam` commands to the declaration a comment documents.
//!
//!     A `\param name` resolves to the index of the formal parameter called `name`. A
//!     `\tparam name` resolves to a position path through the (possibly nested) template
//!     parameter lists, outermost index first:
//!
//!         template<typename C, template<typename T> class TT>
//!
//!         C  -> [0]
//!         TT -> [1]
//!         T  -> [1, 0]
//!
//!     The search is depth-first in declaration order. At each parameter the name is tested
//!     before descending into a template template parameter's own list, so `TT` in the
//!     example matches `[1]` even if its nested list also declared a `TT`.
//!
//!     Unresolvable references are reported and left unresolved. Resolution never removes or
//!     rewrites nodes.

use super::ast::{AstNode, Comment, ParamCommandComment, TParamCommandComment};
use super::decl_info::{DeclInfo, ParamVarDecl, TemplateParameterList};
use super::error::ResolveError;
use std::collections::HashMap;

/// Index of the formal parameter called `name`
pub fn resolve_param_index(name: &str, params: &[ParamVarDecl]) -> Option<usize> {
    params
        .iter()
        .position(|param| param.name.as_deref() == Some(name))
}

/// Position path of the template parameter called `name`
pub fn resolve_tparam_position(name: &str, list: &TemplateParameterList) -> Option<Vec<usize>> {
    let mut position = Vec::new();
    if search_template_list(name, list, &mut position) {
        Some(position)
    } else {
        None
    }
}

fn search_template_list(
    name: &str,
    list: &TemplateParameterList,
    position: &mut Vec<usize>,
) -> bool {
    for (index, param) in list.params.iter().enumerate() {
        if param.name.as_deref() == Some(name) {
            position.push(index);
            return true;
        }
        if let Some(nested) = &param.nested {
            position.push(index);
            if search_template_list(name, nested, position) {
                return true;
            }
            position.pop();
        }
    }
    false
}

/// Resolve one `\param` command and record the index in it
pub fn bind_param_command(
    command: &mut ParamCommandComment,
    decl_info: &DeclInfo<'_>,
) -> Result<usize, ResolveError> {
    let range = command.command().source_range();
    if !command.has_param_name() {
        return Err(ResolveError::MissingParamName { range });
    }
    let name = command.param_name().to_string();
    if !decl_info.is_function_decl() {
        return Err(ResolveError::NotAFunction { name, range });
    }
    match resolve_param_index(&name, decl_info.param_vars()) {
        Some(index) => {
            command.set_param_index(index);
            log::debug!("resolved \\param '{}' to index {}", name, index);
            Ok(index)
        }
        None => {
            log::debug!("\\param '{}' did not match any parameter", name);
            Err(ResolveError::UnknownParameter { name, range })
        }
    }
}

/// Resolve one `\tparam` command and record the position in it
pub fn bind_tparam_command(
    command: &mut TParamCommandComment,
    decl_info: &DeclInfo<'_>,
) -> Result<Vec<usize>, ResolveError> {
    let range = command.command().source_range();
    if !command.has_param_name() {
        return Err(ResolveError::MissingTParamName { range });
    }
    let name = command.param_name().to_string();
    let list = match decl_info.template_parameters() {
        Some(list) if decl_info.is_template_decl() => list,
        _ => return Err(ResolveError::NotATemplate { name, range }),
    };
    match resolve_tparam_position(&name, list) {
        Some(position) => {
            command.set_position(position.clone());
            log::debug!("resolved \\tparam '{}' to position {:?}", name, position);
            Ok(position)
        }
        None => {
            log::debug!("\\tparam '{}' did not match any template parameter", name);
            Err(ResolveError::UnknownTemplateParameter { name, range })
        }
    }
}

/// Resolve every `\param` and `\tparam` among `blocks`, collecting diagnostics
///
/// A second `\param` for an already documented parameter is still bound, and is reported
/// as a duplicate.
pub fn resolve_blocks(blocks: &mut [Comment], decl_info: &DeclInfo<'_>) -> Vec<ResolveError> {
    let mut errors = Vec::new();
    let mut documented: HashMap<usize, String> = HashMap::new();
    for block in blocks.iter_mut() {
        match block {
            Comment::ParamCommand(command) => match bind_param_command(command, decl_info) {
                Ok(index) => {
                    let name = command.param_name().to_string();
                    if documented.insert(index, name.clone()).is_some() {
                        errors.push(ResolveError::DuplicateParameter {
                            name,
                            range: command.command().source_range(),
                            index,
                        });
                    }
                }
                Err(err) => errors.push(err),
            },
            Comment::TParamCommand(command) => {
                if let Err(err) = bind_tparam_command(command, decl_info) {
                    errors.push(err);
                }
            }
            _ => {}
        }
    }
    log::debug!(
        "resolved references for '{}': {} problem(s)",
        decl_info.decl().name(),
        errors.len()
    );
    errors
}
