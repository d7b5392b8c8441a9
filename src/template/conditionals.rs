// ABOUTME: Conditional block evaluator for the {% if %} template mini-language
// ABOUTME: Resolves nested if/else/endif blocks against a render context by tag scanning

use tracing::debug;

use super::context::RenderContext;
use super::engine::EvaluatorOptions;
use super::error::{Result, TemplateError};

const IF_OPEN: &str = "{% if ";
const TAG_CLOSE: &str = "%}";
const ELSE_TAG: &str = "{% else %}";
const ENDIF_TAG: &str = "{% endif %}";
const OR_TOKEN: &str = " or ";

/// Resolve all conditional blocks in `html` against the context.
///
/// Repeatedly locates the first `{% if %}` tag, finds its matching
/// `{% endif %}` by nesting depth, splits the span on a depth-zero
/// `{% else %}`, and splices in the branch selected by the condition.
/// Nested tags inside a losing branch are discarded with it and never
/// evaluated on their own.
///
/// In lenient mode (the default) malformed nesting stops processing and the
/// string accumulated so far is returned with the remaining tags left
/// literal; strict mode reports the malformed tag instead.
pub fn evaluate(html: &str, ctx: &RenderContext, opts: &EvaluatorOptions) -> Result<String> {
    let mut current = html.to_string();

    for pass in 0..opts.max_passes {
        let if_pos = match current.find(IF_OPEN) {
            Some(pos) => pos,
            None => return Ok(current),
        };

        let cond_start = if_pos + IF_OPEN.len();
        let cond_end = match current[cond_start..].find(TAG_CLOSE) {
            Some(rel) => cond_start + rel,
            None => {
                if opts.strict {
                    return Err(TemplateError::UnterminatedTag { position: if_pos });
                }
                debug!("unterminated if tag at byte {}, leaving tags literal", if_pos);
                return Ok(current);
            }
        };

        let condition = current[cond_start..cond_end].trim().to_string();
        let body_start = cond_end + TAG_CLOSE.len();

        let bounds = match find_branch_bounds(&current, body_start) {
            Some(bounds) => bounds,
            None => {
                if opts.strict {
                    return Err(TemplateError::UnmatchedIf { position: if_pos });
                }
                debug!("unmatched if tag at byte {}, leaving tags literal", if_pos);
                return Ok(current);
            }
        };

        let branch = match (evaluate_condition(&condition, ctx), bounds.else_pos) {
            (true, Some(else_pos)) => &current[body_start..else_pos],
            (true, None) => &current[body_start..bounds.endif_pos],
            (false, Some(else_pos)) => &current[else_pos + ELSE_TAG.len()..bounds.endif_pos],
            (false, None) => "",
        };

        let mut next = String::with_capacity(current.len());
        next.push_str(&current[..if_pos]);
        next.push_str(branch);
        next.push_str(&current[bounds.endif_pos + ENDIF_TAG.len()..]);

        debug!(pass, condition = %condition, "resolved conditional block");
        current = next;
    }

    // Pass bound hit; return whatever has been resolved so far
    Ok(current)
}

/// Verify that every conditional tag in `html` pairs correctly.
///
/// Reports the first unterminated or unmatched `if`, dangling `else`, or
/// dangling `endif` found. Used by template validation; evaluation itself
/// stays lenient unless configured otherwise.
pub fn check_nesting(html: &str) -> Result<()> {
    let mut cursor = 0;
    let mut open_positions: Vec<usize> = Vec::new();

    while let Some((pos, tag)) = next_tag(html, cursor) {
        match tag {
            Tag::If => {
                let cond_start = pos + IF_OPEN.len();
                if html[cond_start..].find(TAG_CLOSE).is_none() {
                    return Err(TemplateError::UnterminatedTag { position: pos });
                }
                open_positions.push(pos);
                cursor = cond_start;
            }
            Tag::Else => {
                if open_positions.is_empty() {
                    return Err(TemplateError::DanglingElse { position: pos });
                }
                cursor = pos + ELSE_TAG.len();
            }
            Tag::Endif => {
                if open_positions.pop().is_none() {
                    return Err(TemplateError::DanglingEndif { position: pos });
                }
                cursor = pos + ENDIF_TAG.len();
            }
        }
    }

    match open_positions.first() {
        Some(&position) => Err(TemplateError::UnmatchedIf { position }),
        None => Ok(()),
    }
}

/// Collect the condition operands referenced by `{% if %}` tags, in order
/// of appearance and without deduplication.
pub fn condition_operands(html: &str) -> Vec<String> {
    let mut operands = Vec::new();
    let mut cursor = 0;

    while let Some(rel) = html[cursor..].find(IF_OPEN) {
        let cond_start = cursor + rel + IF_OPEN.len();
        let cond_end = match html[cond_start..].find(TAG_CLOSE) {
            Some(rel) => cond_start + rel,
            None => break,
        };

        let condition = html[cond_start..cond_end].trim();
        if condition.contains(OR_TOKEN) {
            operands.extend(condition.split(OR_TOKEN).map(|op| op.trim().to_string()));
        } else {
            operands.push(condition.to_string());
        }

        cursor = cond_end + TAG_CLOSE.len();
    }

    operands
}

fn evaluate_condition(condition: &str, ctx: &RenderContext) -> bool {
    if condition.contains(OR_TOKEN) {
        condition
            .split(OR_TOKEN)
            .any(|operand| ctx.is_truthy(operand.trim()))
    } else {
        ctx.is_truthy(condition)
    }
}

struct BranchBounds {
    else_pos: Option<usize>,
    endif_pos: usize,
}

/// Scan forward from the byte after an `{% if %}` tag, tracking nesting
/// depth, to locate its matching `{% endif %}` and the depth-zero
/// `{% else %}` if one exists. Returns `None` when no matching `endif`
/// remains in the string.
fn find_branch_bounds(html: &str, from: usize) -> Option<BranchBounds> {
    let mut cursor = from;
    let mut depth = 0usize;
    let mut else_pos = None;

    while let Some((pos, tag)) = next_tag(html, cursor) {
        match tag {
            Tag::If => {
                depth += 1;
                cursor = pos + IF_OPEN.len();
            }
            Tag::Else => {
                if depth == 0 && else_pos.is_none() {
                    else_pos = Some(pos);
                }
                cursor = pos + ELSE_TAG.len();
            }
            Tag::Endif => {
                if depth == 0 {
                    return Some(BranchBounds {
                        else_pos,
                        endif_pos: pos,
                    });
                }
                depth -= 1;
                cursor = pos + ENDIF_TAG.len();
            }
        }
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    If,
    Else,
    Endif,
}

/// Find the earliest conditional tag at or after `from`
fn next_tag(html: &str, from: usize) -> Option<(usize, Tag)> {
    let candidates = [
        (html[from..].find(IF_OPEN), Tag::If),
        (html[from..].find(ELSE_TAG), Tag::Else),
        (html[from..].find(ENDIF_TAG), Tag::Endif),
    ];

    candidates
        .into_iter()
        .filter_map(|(pos, tag)| pos.map(|p| (from + p, tag)))
        .min_by_key(|(pos, _)| *pos)
}
