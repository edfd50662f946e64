//! Helpers shared by the integration tests.
//!
//! Documents are written with their selection inline: `«…»` for a range and
//! `‸` for a caret.

use markdown_toolbar_engine::{RopeHost, TextHost, Toolbar};

#[allow(dead_code)]
pub fn toolbar(marked: &str) -> Toolbar<RopeHost> {
    let (text, selection) = parse(marked);
    let mut host = RopeHost::new(&text);
    host.set_selection(selection);
    Toolbar::new(host)
}

#[allow(dead_code)]
pub fn parse(marked: &str) -> (String, std::ops::Range<usize>) {
    let mut text = String::new();
    let (mut start, mut end) = (0, 0);
    for ch in marked.chars() {
        match ch {
            '«' => start = text.len(),
            '»' => end = text.len(),
            '‸' => {
                start = text.len();
                end = text.len();
            }
            _ => text.push(ch),
        }
    }
    (text, start..end)
}

#[allow(dead_code)]
pub fn render<H: TextHost>(toolbar: &Toolbar<H>) -> String {
    let text = toolbar.host().text();
    let selection = toolbar.host().selection();
    if selection.is_empty() {
        format!("{}‸{}", &text[..selection.start], &text[selection.start..])
    } else {
        format!(
            "{}«{}»{}",
            &text[..selection.start],
            &text[selection.clone()],
            &text[selection.end..]
        )
    }
}

/// Apply `style` to a marked document and render the outcome
#[allow(dead_code)]
pub fn styled(marked: &str, style: &str) -> String {
    let mut toolbar = toolbar(marked);
    toolbar.apply_style(style).unwrap();
    render(&toolbar)
}
