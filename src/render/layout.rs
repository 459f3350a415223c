//! Column layout for label/description entry lists.
//!
//! One decision covers a whole list: either every entry renders flat (two
//! aligned columns) or every entry stacks (label line, indented description
//! block). Width pathologies degrade to stacking and one-word lines; content
//! is never truncated.
use super::model::Entry;

const LEFT_INDENT: usize = 2;
const LABEL_GAP: usize = 2;
const MIN_FLAT_DESC_WIDTH: usize = 10;
const MAX_FLAT_OVERFLOW_LINES: usize = 4;
const STACKED_DESC_INDENT: usize = LEFT_INDENT + 4;
const INDENTED_LABEL_EXTRA: usize = 2;

/// Lay out an entry list under the width budget.
pub(super) fn render_entries(entries: &[Entry], width: usize) -> String {
    if entries.is_empty() {
        return String::new();
    }
    if entries
        .iter()
        .all(|entry| entry.description.trim().is_empty())
    {
        // No description column at all: labels stay unpadded.
        return entries
            .iter()
            .map(|entry| format!("{}{}", " ".repeat(label_indent(entry)), entry.label))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let max_label = entries.iter().map(label_width).max().unwrap_or(0);
    let desc_width = width.saturating_sub(LEFT_INDENT + max_label + LABEL_GAP);
    let wrapped: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| wrap(entry.description.trim(), desc_width.max(1)))
        .collect();

    if flat_fits(width, max_label, desc_width, &wrapped) {
        render_flat(entries, &wrapped, max_label)
    } else {
        tracing::debug!(width, max_label, "entry list exceeds flat budget, stacking");
        render_stacked(entries, width)
    }
}

fn flat_fits(width: usize, max_label: usize, desc_width: usize, wrapped: &[Vec<String>]) -> bool {
    if LEFT_INDENT + max_label + LABEL_GAP >= width {
        return false;
    }
    if desc_width < MIN_FLAT_DESC_WIDTH {
        return false;
    }
    wrapped
        .iter()
        .all(|lines| lines.len() <= MAX_FLAT_OVERFLOW_LINES + 1)
}

fn render_flat(entries: &[Entry], wrapped: &[Vec<String>], max_label: usize) -> String {
    let desc_col = LEFT_INDENT + max_label + LABEL_GAP;
    let spaced = wrapped.iter().any(|lines| lines.len() > 1);

    let blocks: Vec<String> = entries
        .iter()
        .zip(wrapped)
        .map(|(entry, lines)| {
            let indent = label_indent(entry);
            let mut first = format!("{}{}", " ".repeat(indent), entry.label);
            match lines.split_first() {
                Some((head, tail)) => {
                    let pad = desc_col - indent - entry.label.chars().count();
                    first.push_str(&" ".repeat(pad));
                    first.push_str(head);
                    let mut block = vec![first.trim_end().to_string()];
                    for line in tail {
                        block.push(
                            format!("{}{}", " ".repeat(desc_col), line)
                                .trim_end()
                                .to_string(),
                        );
                    }
                    block.join("\n")
                }
                None => first.trim_end().to_string(),
            }
        })
        .collect();

    blocks.join(if spaced { "\n\n" } else { "\n" })
}

fn render_stacked(entries: &[Entry], width: usize) -> String {
    let desc_width = width.saturating_sub(STACKED_DESC_INDENT).max(1);

    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| {
            let mut block = vec![format!("{}{}", " ".repeat(label_indent(entry)), entry.label)];
            for line in wrap(entry.description.trim(), desc_width) {
                block.push(
                    format!("{}{}", " ".repeat(STACKED_DESC_INDENT), line)
                        .trim_end()
                        .to_string(),
                );
            }
            block.join("\n")
        })
        .collect();

    blocks.join("\n\n")
}

fn label_width(entry: &Entry) -> usize {
    let extra = if entry.indent_label {
        INDENTED_LABEL_EXTRA
    } else {
        0
    };
    entry.label.chars().count() + extra
}

fn label_indent(entry: &Entry) -> usize {
    let extra = if entry.indent_label {
        INDENTED_LABEL_EXTRA
    } else {
        0
    };
    LEFT_INDENT + extra
}

/// Greedy word wrap. Whitespace runs inside a line are preserved; embedded
/// newlines force a break; a word wider than the whole line breaks at the
/// line boundary so nothing is dropped.
pub(super) fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        wrap_line(raw.trim_end(), width, &mut lines);
    }
    lines
}

fn wrap_line(line: &str, width: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0usize;

    for segment in split_runs(line) {
        let segment_width = segment.chars().count();

        if current_width + segment_width > width {
            if current_width > 0 {
                lines.push(current.trim_end().to_string());
                current.clear();
                current_width = 0;
            }
            // A wrapped line never starts with the space run that triggered
            // the break.
            if is_space_run(segment) {
                continue;
            }
            if segment_width > width {
                force_break(segment, width, lines, &mut current, &mut current_width);
                continue;
            }
        }

        current.push_str(segment);
        current_width += segment_width;
    }

    lines.push(current.trim_end().to_string());
}

/// Split a line into alternating word and whitespace runs.
fn split_runs(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let end = rest
            .char_indices()
            .find(|(_, ch)| ch.is_whitespace() != first.is_whitespace())
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(run)
    })
}

fn is_space_run(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}

fn force_break(
    word: &str,
    width: usize,
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for ch in word.chars() {
        if *current_width == width {
            lines.push(std::mem::take(current));
            *current_width = 0;
        }
        current.push(ch);
        *current_width += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, description: &str) -> Entry {
        Entry::new(label, description)
    }

    #[test]
    fn wrap_packs_words_greedily() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, ["one two", "three", "four five"]);
    }

    #[test]
    fn wrap_preserves_interior_space_runs() {
        let lines = wrap("force  it force  it force", 12);
        assert_eq!(lines, ["force  it", "force  it", "force"]);
    }

    #[test]
    fn wrap_embedded_newline_forces_break() {
        assert_eq!(wrap("a\nb", 40), ["a", "b"]);
        assert_eq!(wrap("x\n\ny", 40), ["x", "", "y"]);
    }

    #[test]
    fn wrap_splits_only_oversize_words() {
        assert_eq!(wrap("foobarfoobar", 6), ["foobar", "foobar"]);
        assert_eq!(wrap("hi abcdefgh yo", 5), ["hi", "abcde", "fgh", "yo"]);
        // A word that fits is never split.
        assert_eq!(wrap("tiny word", 5), ["tiny", "word"]);
    }

    #[test]
    fn wrap_lines_never_exceed_width() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        for width in 1..20 {
            for line in wrap(text, width) {
                let max_word = line.split_whitespace().map(str::len).max().unwrap_or(0);
                assert!(
                    line.chars().count() <= width || max_word > width,
                    "line {line:?} exceeds width {width}"
                );
            }
        }
    }

    #[test]
    fn wrap_round_trips_words() {
        let text = "the quick brown fox jumps over the lazy dog";
        let rejoined = wrap(text, 13).join(" ");
        let words: Vec<_> = rejoined.split_whitespace().collect();
        let original: Vec<_> = text.split_whitespace().collect();
        assert_eq!(words, original);
    }

    #[test]
    fn flat_aligns_labels_into_columns() {
        let entries = [
            entry("--force", "forces"),
            entry("--all", "include dotfiles"),
        ];
        let expected = "  --force  forces\n  --all    include dotfiles";
        assert_eq!(render_entries(&entries, 80), expected);
    }

    #[test]
    fn spaced_when_any_description_wraps() {
        let entries = [
            entry("-v", &"word ".repeat(10)),
            entry("--mode=MODE", "second"),
        ];
        let expected = "\
  -v           word word word word word
               word word word word word

  --mode=MODE  second";
        assert_eq!(render_entries(&entries, 40), expected);
    }

    #[test]
    fn stacked_when_description_overflows_flat_budget() {
        let entries = [entry("--flag", &"word ".repeat(24))];
        let expected = "\
  --flag
      word word word word word
      word word word word word
      word word word word word
      word word word word word
      word word word word";
        assert_eq!(render_entries(&entries, 30), expected);
    }

    #[test]
    fn layout_choice_is_uniform_across_the_list() {
        let entries = [entry("--short", "brief"), entry("--long", &"word ".repeat(24))];
        let rendered = render_entries(&entries, 30);
        // The short entry stacks too, rather than mixing layouts.
        assert!(rendered.starts_with("  --short\n      brief\n\n  --long\n"));
    }

    #[test]
    fn stacked_when_label_column_leaves_no_room() {
        let entries = [entry("--verbose", "setting")];
        let expected = "  --verbose\n      sett\n      ing";
        assert_eq!(render_entries(&entries, 10), expected);
    }

    #[test]
    fn empty_description_renders_label_only() {
        let entries = [entry("-r, --remote=REMOTE", ""), entry("--force", "yes")];
        let expected = "  -r, --remote=REMOTE\n  --force              yes";
        assert_eq!(render_entries(&entries, 80), expected);
    }

    #[test]
    fn all_empty_descriptions_render_single_column() {
        let entries = [entry("--a", ""), entry("--longer", "")];
        assert_eq!(render_entries(&entries, 80), "  --a\n  --longer");
    }

    #[test]
    fn indent_label_shifts_label_not_description_column() {
        let mut sub = entry("--sub", "second");
        sub.indent_label = true;
        let entries = [entry("--top", "first"), sub];
        let expected = "  --top    first\n    --sub  second";
        assert_eq!(render_entries(&entries, 80), expected);
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render_entries(&[], 80), "");
    }
}
