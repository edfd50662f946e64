/*!
 * # Styling Core Module
 *
 * This module turns "apply style X to the current selection" into a replacement
 * for the selected span plus the selection the host should restore afterwards.
 *
 * ## Architecture Overview
 *
 * ### 1. Working Buffer
 * - Every operation runs against a [`TextBuffer`]: a copy of the host text and a
 *   byte-offset selection that is always clamped to `char` boundaries
 * - Appliers may move the selection (word/line expansion, growing over an
 *   existing wrapper) but never change the text; the selection they leave
 *   behind is the span the host replaces
 *
 * ### 2. Style Registry
 * - Each markdown construct is a declarative [`StyleSpec`] (prefix, suffix,
 *   list flags, padding rules, placeholder token)
 * - The built-in table is created once and never mutated; callers may layer
 *   their own specs on top of a clone
 *
 * ### 3. Dispatch
 * - List styles go to the list applier
 * - Multiline styles over a multi-line selection go to the multiline applier
 * - Everything else, including multiline styles on a single line, goes to the
 *   block applier
 *
 * ### 4. Toggling
 * - Appliers first ask the undo detectors whether the selection already carries
 *   the style; if so they strip it instead of stacking new markup
 * - List undo is all-or-nothing per line and crosses list types, so bullets
 *   convert to numbers in one step
 *
 * ## Module Structure
 *
 * - **`buffer`**: [`TextBuffer`], the text + selection view
 * - **`expand`**: word and line expansion of empty selections
 * - **`newlines`**: blank-line padding around block constructs
 * - **`undo`**: style detectors and strippers
 * - **`styles`**: [`StyleSpec`] and the [`StyleRegistry`]
 * - **`apply`**: dispatcher plus block, list and multiline appliers
 * - **`heading`**: heading level cycling on the caret line
 * - **`result`**: [`StyleResult`], the output handed to the commit bridge
 *
 * ## Usage Pattern
 *
 * ```rust
 * use markdown_toolbar_engine::editing::*;
 *
 * let mut buffer = TextBuffer::new("hello world", 2..2);
 * let registry = StyleRegistry::builtin();
 *
 * let result = apply::apply_style(&mut buffer, registry.get("bold").unwrap()).unwrap();
 *
 * assert_eq!(buffer.text(), "**hello** world");
 * assert_eq!(result.selection(), 2..7);
 * ```
 */

// Module exports
pub mod apply;
pub mod buffer;
pub mod expand;
pub mod heading;
pub mod newlines;
pub mod result;
pub mod styles;
pub mod undo;

// Public API re-exports
pub use buffer::TextBuffer;
pub use newlines::Newlines;
pub use result::StyleResult;
pub use styles::{StyleError, StyleRegistry, StyleSpec};
pub use undo::UndoResult;
