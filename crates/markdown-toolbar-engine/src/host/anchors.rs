use std::ops::Range;

use xi_rope::delta::Transformer;
use xi_rope::{Delta, RopeInfo};

/// Identifier handed out when a span is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId(pub u64);

/// A span that follows the text it covers through edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: AnchorId,
    pub range: Range<usize>,
}

/// Move every anchor through `delta`
///
/// Text inserted exactly at an anchor's start pushes the anchor right; text
/// inserted at its end stays outside. Anchors whose span was deleted entirely
/// collapse to nothing and are dropped.
pub fn transform_anchors(anchors: &mut Vec<Anchor>, delta: &Delta<RopeInfo>) {
    let mut transformer = Transformer::new(delta);
    anchors.retain_mut(|anchor| {
        let start = transformer.transform(anchor.range.start, true);
        let end = transformer.transform(anchor.range.end, false);
        anchor.range = start..end.max(start);
        if anchor.range.is_empty() {
            log::debug!("Dropping anchor {:?}, its span was deleted", anchor.id);
            false
        } else {
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::commands::{Cmd, compile_command};
    use pretty_assertions::assert_eq;
    use xi_rope::Rope;

    fn anchor(range: Range<usize>) -> Vec<Anchor> {
        vec![Anchor {
            id: AnchorId(1),
            range,
        }]
    }

    fn edit(text: &str, cmd: Cmd) -> Delta<RopeInfo> {
        compile_command(&Rope::from(text), &cmd)
    }

    #[test]
    fn test_insert_before_shifts_anchor() {
        let mut anchors = anchor(4..8);
        let delta = edit(
            "abc defg",
            Cmd::InsertText {
                at: 0,
                text: "xx".to_string(),
            },
        );

        transform_anchors(&mut anchors, &delta);

        assert_eq!(anchors[0].range, 6..10);
    }

    #[test]
    fn test_insert_at_boundaries_stays_outside() {
        let mut at_start = anchor(4..8);
        transform_anchors(
            &mut at_start,
            &edit(
                "abc defg",
                Cmd::InsertText {
                    at: 4,
                    text: "zz".to_string(),
                },
            ),
        );
        assert_eq!(at_start[0].range, 6..10);

        let mut at_end = anchor(0..3);
        transform_anchors(
            &mut at_end,
            &edit(
                "abc defg",
                Cmd::InsertText {
                    at: 3,
                    text: "zz".to_string(),
                },
            ),
        );
        assert_eq!(at_end[0].range, 0..3);
    }

    #[test]
    fn test_deleted_anchor_is_dropped() {
        let mut anchors = anchor(4..8);

        transform_anchors(
            &mut anchors,
            &edit("abc defg", Cmd::DeleteRange { range: 2..8 }),
        );

        assert!(anchors.is_empty());
    }

    #[test]
    fn test_partial_delete_shrinks_anchor() {
        let mut anchors = anchor(4..8);

        transform_anchors(
            &mut anchors,
            &edit("abc defg", Cmd::DeleteRange { range: 6..8 }),
        );

        assert_eq!(anchors[0].range, 4..6);
    }
}
